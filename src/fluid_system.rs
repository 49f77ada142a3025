//! A two-phase fluid system with water and nitrogen as components.

use crate::binary;
use crate::components::{Nitrogen, PureComponent, TabulatedComponent, TabulationGrid, Water};
use crate::errors::FluidSystemResult;
use crate::eval::{Evaluation, FromState};
use crate::ideal_gas::{self, GAS_CONSTANT};
use crate::state::FluidState;
use std::fmt;

/// Number of fluid phases.
pub const NUM_PHASES: usize = 2;
/// Index of the liquid phase.
pub const LIQUID_PHASE_IDX: usize = 0;
/// Index of the gas phase.
pub const GAS_PHASE_IDX: usize = 1;

/// Number of components.
pub const NUM_COMPONENTS: usize = 2;
/// The component index of water.
pub const H2O_IDX: usize = 0;
/// The component index of molecular nitrogen.
pub const N2_IDX: usize = 1;

/// Placeholder returned by scalar component lookups for an unmapped
/// component index in release builds. Debug builds assert instead.
const UNMAPPED: f64 = 1e100;

/// The fidelity level of the mixing rules.
///
/// Captured once at construction of the fluid system so that every property
/// call of a configured system mixes the same way. Toggling fidelity
/// between calls of a single simulation run would make results
/// irreproducible, which is why there is no per-call override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Fidelity {
    /// Dominant-substance approximations: pure water in the liquid phase,
    /// pure nitrogen (or an ideal gas with the mean molar mass) in the gas
    /// phase.
    Simple,
    /// Full mixing rules: volume additivity for the liquid density,
    /// Dalton's law and Wilke's rule for the gas phase.
    Complex,
}

/// Parameter cache of the fluid system.
///
/// This fluid system precomputes nothing per fluid state, so its cache
/// carries no data. The argument exists so that all fluid systems present
/// the same call shape to assemblers that do cache.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullParameterCache;

/// A two-phase (liquid and gas) fluid system for mixtures of water and
/// molecular nitrogen.
///
/// Water dominates the liquid phase with nitrogen as a solute, nitrogen
/// dominates the gas phase with steam as the second component. Both phases
/// are treated as ideal mixtures: Henry's and Raoult's laws for the liquid,
/// no interaction between the two kinds of gas molecules.
///
/// The type parameter selects the water provider; by default water is
/// tabulated ([TabulatedComponent]) because the direct correlations are by
/// far the most expensive part of a property call.
///
/// Phase and component arguments are indices (see [LIQUID_PHASE_IDX],
/// [GAS_PHASE_IDX], [H2O_IDX], [N2_IDX]). Out-of-range indices are
/// programming errors: debug builds assert, release builds fall back to the
/// gas branch (phase dispatch) or the [UNMAPPED] sentinel (scalar
/// lookups).
#[derive(Clone, Debug)]
pub struct H2ON2FluidSystem<W: PureComponent = TabulatedComponent<Water>> {
    water: W,
    nitrogen: Nitrogen,
    fidelity: Fidelity,
}

impl H2ON2FluidSystem<TabulatedComponent<Water>> {
    /// Create a fluid system with water tabulated on the default grid,
    /// [273.15 K, 623.15 K] with 100 ticks and [0, 20 MPa] with 200 ticks.
    pub fn new(fidelity: Fidelity) -> FluidSystemResult<Self> {
        Self::with_tabulation(fidelity, TabulationGrid::default())
    }

    /// Create a fluid system with water tabulated on a problem specific
    /// temperature and pressure grid.
    pub fn with_tabulation(fidelity: Fidelity, grid: TabulationGrid) -> FluidSystemResult<Self> {
        Ok(Self {
            water: TabulatedComponent::new(Water, grid)?,
            nitrogen: Nitrogen,
            fidelity,
        })
    }
}

impl H2ON2FluidSystem<Water> {
    /// Create a fluid system that evaluates the water correlations
    /// directly. No tables are built, so this constructor cannot fail.
    pub fn untabulated(fidelity: Fidelity) -> Self {
        Self {
            water: Water,
            nitrogen: Nitrogen,
            fidelity,
        }
    }
}

impl<W: PureComponent> H2ON2FluidSystem<W> {
    /// The configured fidelity level.
    pub fn fidelity(&self) -> Fidelity {
        self.fidelity
    }

    /// The water provider.
    pub fn water(&self) -> &W {
        &self.water
    }

    /// The nitrogen provider.
    pub fn nitrogen(&self) -> &Nitrogen {
        &self.nitrogen
    }

    /// The name of a phase.
    pub fn phase_name(&self, phase_idx: usize) -> &'static str {
        debug_assert!(phase_idx < NUM_PHASES, "invalid phase index {phase_idx}");
        if phase_idx == LIQUID_PHASE_IDX {
            "liquid"
        } else {
            "gas"
        }
    }

    /// Whether a phase is a liquid.
    pub fn is_liquid(&self, phase_idx: usize) -> bool {
        debug_assert!(phase_idx < NUM_PHASES, "invalid phase index {phase_idx}");
        phase_idx != GAS_PHASE_IDX
    }

    /// Whether the density of a phase depends on pressure. Gases always
    /// are compressible; for the liquid the water component decides.
    pub fn is_compressible(&self, phase_idx: usize) -> bool {
        debug_assert!(phase_idx < NUM_PHASES, "invalid phase index {phase_idx}");
        if phase_idx == GAS_PHASE_IDX {
            true
        } else {
            self.water.liquid_is_compressible()
        }
    }

    /// Whether a phase is assumed to be an ideal gas.
    pub fn is_ideal_gas(&self, phase_idx: usize) -> bool {
        debug_assert!(phase_idx < NUM_PHASES, "invalid phase index {phase_idx}");
        phase_idx == GAS_PHASE_IDX && self.water.gas_is_ideal() && self.nitrogen.gas_is_ideal()
    }

    /// Whether a phase is an ideal mixture. Always true here: Henry's and
    /// Raoult's laws for the liquid, no interaction between gas molecules
    /// of different components.
    pub fn is_ideal_mixture(&self, _phase_idx: usize) -> bool {
        true
    }

    /// The name of a component.
    pub fn component_name(&self, comp_idx: usize) -> &'static str {
        debug_assert!(comp_idx < NUM_COMPONENTS, "invalid component index {comp_idx}");
        if comp_idx == H2O_IDX {
            self.water.name()
        } else {
            self.nitrogen.name()
        }
    }

    /// The molar mass of a component in kg/mol.
    pub fn molar_mass(&self, comp_idx: usize) -> f64 {
        debug_assert!(comp_idx < NUM_COMPONENTS, "invalid component index {comp_idx}");
        match comp_idx {
            H2O_IDX => self.water.molar_mass(),
            N2_IDX => self.nitrogen.molar_mass(),
            _ => UNMAPPED,
        }
    }

    /// The critical temperature of a component in K.
    pub fn critical_temperature(&self, comp_idx: usize) -> f64 {
        debug_assert!(comp_idx < NUM_COMPONENTS, "invalid component index {comp_idx}");
        match comp_idx {
            H2O_IDX => self.water.critical_temperature(),
            N2_IDX => self.nitrogen.critical_temperature(),
            _ => UNMAPPED,
        }
    }

    /// The critical pressure of a component in Pa.
    pub fn critical_pressure(&self, comp_idx: usize) -> f64 {
        debug_assert!(comp_idx < NUM_COMPONENTS, "invalid component index {comp_idx}");
        match comp_idx {
            H2O_IDX => self.water.critical_pressure(),
            N2_IDX => self.nitrogen.critical_pressure(),
            _ => UNMAPPED,
        }
    }

    /// The acentric factor of a component.
    pub fn acentric_factor(&self, comp_idx: usize) -> f64 {
        debug_assert!(comp_idx < NUM_COMPONENTS, "invalid component index {comp_idx}");
        match comp_idx {
            H2O_IDX => self.water.acentric_factor(),
            N2_IDX => self.nitrogen.acentric_factor(),
            _ => UNMAPPED,
        }
    }

    /// The mass density of a phase in kg/m³.
    ///
    /// In [Fidelity::Complex] the liquid density follows a volume
    /// additivity rule in which each dissolved nitrogen molecule displaces
    /// one water molecule (formula (2.6) in S.O. Ochs, "Development of a
    /// multiphase multicomponent model for PEMFC", University of
    /// Stuttgart, 2008), and the gas density is the sum of the partial
    /// densities of steam and nitrogen at their partial pressures.
    pub fn density<E, S>(
        &self,
        fluid_state: &S,
        _cache: &NullParameterCache,
        phase_idx: usize,
    ) -> E
    where
        S: FluidState,
        E: Evaluation + FromState<S::Scalar>,
    {
        debug_assert!(phase_idx < NUM_PHASES, "invalid phase index {phase_idx}");
        let t = E::from_state(fluid_state.temperature(phase_idx));
        let p = E::from_state(fluid_state.pressure(phase_idx));

        let mut sum_mole_frac = E::zero();
        for comp_idx in 0..NUM_COMPONENTS {
            sum_mole_frac += E::from_state(fluid_state.mole_fraction(phase_idx, comp_idx));
        }

        if phase_idx == LIQUID_PHASE_IDX {
            return match self.fidelity {
                // assume pure water
                Fidelity::Simple => self.water.liquid_density(t, p),
                Fidelity::Complex => {
                    let rho_l_h2o = self.water.liquid_density(t, p);
                    let c_l_h2o = rho_l_h2o / self.water.molar_mass();

                    let x_h2o =
                        E::from_state(fluid_state.mole_fraction(LIQUID_PHASE_IDX, H2O_IDX));
                    let x_n2 = E::from_state(fluid_state.mole_fraction(LIQUID_PHASE_IDX, N2_IDX));

                    // each nitrogen molecule displaces exactly one water
                    // molecule in the liquid
                    c_l_h2o
                        * (x_h2o * self.water.molar_mass() + x_n2 * self.nitrogen.molar_mass())
                        / sum_mole_frac
                }
            };
        }

        match self.fidelity {
            // ideal gas with the mean molar mass of the phase
            Fidelity::Simple => {
                ideal_gas::molar_density(t, p)
                    * E::from_state(fluid_state.average_molar_mass(GAS_PHASE_IDX))
                    / sum_mole_frac.max_floor(1e-5)
            }
            // Dalton's law: steam and nitrogen do not "see" each other
            Fidelity::Complex => {
                let x_h2o = E::from_state(fluid_state.mole_fraction(GAS_PHASE_IDX, H2O_IDX));
                let x_n2 = E::from_state(fluid_state.mole_fraction(GAS_PHASE_IDX, N2_IDX));
                let rho_g_h2o = self.water.gas_density(t, p * x_h2o);
                let rho_g_n2 = self.nitrogen.gas_density(t, p * x_n2);
                (rho_g_h2o + rho_g_n2) / sum_mole_frac.max_floor(1e-5)
            }
        }
    }

    /// The dynamic viscosity of a phase in Pa·s.
    ///
    /// The liquid is treated as pure water: dissolved nitrogen does not
    /// measurably change the liquid viscosity. The gas viscosity uses
    /// Wilke's semi-empirical mixing rule in [Fidelity::Complex] (R. Reid
    /// et al., "The Properties of Gases and Liquids", 4th edition,
    /// McGraw-Hill, 1987, pp. 407-410), with steam evaluated at its vapor
    /// pressure, and falls back to pure nitrogen in [Fidelity::Simple].
    pub fn viscosity<E, S>(
        &self,
        fluid_state: &S,
        _cache: &NullParameterCache,
        phase_idx: usize,
    ) -> E
    where
        S: FluidState,
        E: Evaluation + FromState<S::Scalar>,
    {
        debug_assert!(phase_idx < NUM_PHASES, "invalid phase index {phase_idx}");
        let t = E::from_state(fluid_state.temperature(phase_idx));
        let p = E::from_state(fluid_state.pressure(phase_idx));

        if phase_idx == LIQUID_PHASE_IDX {
            return self.water.liquid_viscosity(t, p);
        }

        match self.fidelity {
            Fidelity::Simple => self.nitrogen.gas_viscosity(t, p),
            Fidelity::Complex => {
                let mu = [
                    self.water.gas_viscosity(t, self.water.vapor_pressure(t)),
                    self.nitrogen.gas_viscosity(t, p),
                ];

                let mut sum_x = E::zero();
                for comp_idx in 0..NUM_COMPONENTS {
                    sum_x += E::from_state(fluid_state.mole_fraction(phase_idx, comp_idx));
                }
                let sum_x = sum_x.max_floor(1e-10);

                let mut mu_result = E::zero();
                for i in 0..NUM_COMPONENTS {
                    let mut divisor = E::zero();
                    for j in 0..NUM_COMPONENTS {
                        let phi = (mu[i] / mu[j]).sqrt()
                            * (self.molar_mass(j) / self.molar_mass(i)).powf(0.25)
                            + 1.0;
                        let phi = phi * phi
                            / (8.0 * (1.0 + self.molar_mass(i) / self.molar_mass(j))).sqrt();
                        divisor +=
                            E::from_state(fluid_state.mole_fraction(phase_idx, j)) / sum_x * phi;
                    }
                    mu_result += E::from_state(fluid_state.mole_fraction(phase_idx, i)) / sum_x
                        * mu[i]
                        / divisor;
                }
                mu_result
            }
        }
    }

    /// The fugacity coefficient of a component in a phase.
    ///
    /// Liquid: Raoult's law for water (`p_sat/p`), Henry's law for
    /// nitrogen (`H/p`). Gas: 1, i.e. the fugacity equals the partial
    /// pressure under the ideal gas assumption.
    pub fn fugacity_coefficient<E, S>(
        &self,
        fluid_state: &S,
        _cache: &NullParameterCache,
        phase_idx: usize,
        comp_idx: usize,
    ) -> E
    where
        S: FluidState,
        E: Evaluation + FromState<S::Scalar>,
    {
        debug_assert!(phase_idx < NUM_PHASES, "invalid phase index {phase_idx}");
        debug_assert!(comp_idx < NUM_COMPONENTS, "invalid component index {comp_idx}");
        let t = E::from_state(fluid_state.temperature(phase_idx));
        let p = E::from_state(fluid_state.pressure(phase_idx));

        if phase_idx == LIQUID_PHASE_IDX {
            if comp_idx == H2O_IDX {
                return self.water.vapor_pressure(t) / p;
            }
            return binary::henry(t) / p;
        }

        E::one()
    }

    /// The binary diffusion coefficient in m²/s of a component in a phase.
    ///
    /// With exactly two components there is only one binary pair, so the
    /// component index does not influence the result; it is part of the
    /// signature for uniformity with multi-component fluid systems.
    pub fn diffusion_coefficient<E, S>(
        &self,
        fluid_state: &S,
        _cache: &NullParameterCache,
        phase_idx: usize,
        _comp_idx: usize,
    ) -> E
    where
        S: FluidState,
        E: Evaluation + FromState<S::Scalar>,
    {
        debug_assert!(phase_idx < NUM_PHASES, "invalid phase index {phase_idx}");
        let t = E::from_state(fluid_state.temperature(phase_idx));
        let p = E::from_state(fluid_state.pressure(phase_idx));

        if phase_idx == LIQUID_PHASE_IDX {
            binary::liquid_diff_coeff(t, p)
        } else {
            binary::gas_diff_coeff(t, p)
        }
    }

    /// The specific enthalpy of a phase in J/kg.
    ///
    /// The liquid enthalpy is that of pure water; the contribution of
    /// dissolved nitrogen is not modeled. The gas enthalpy is the
    /// mass-fraction weighted sum of the pure component gas enthalpies
    /// (ideal mixture).
    pub fn enthalpy<E, S>(
        &self,
        fluid_state: &S,
        _cache: &NullParameterCache,
        phase_idx: usize,
    ) -> E
    where
        S: FluidState,
        E: Evaluation + FromState<S::Scalar>,
    {
        debug_assert!(phase_idx < NUM_PHASES, "invalid phase index {phase_idx}");
        let t = E::from_state(fluid_state.temperature(phase_idx));
        let p = E::from_state(fluid_state.pressure(phase_idx));

        if phase_idx == LIQUID_PHASE_IDX {
            return self.water.liquid_enthalpy(t, p);
        }

        let mass_h2o = E::from_state(fluid_state.mass_fraction(GAS_PHASE_IDX, H2O_IDX));
        let mass_n2 = E::from_state(fluid_state.mass_fraction(GAS_PHASE_IDX, N2_IDX));
        mass_h2o * self.water.gas_enthalpy(t, p) + mass_n2 * self.nitrogen.gas_enthalpy(t, p)
    }

    /// The thermal conductivity of a phase in W/(m K).
    ///
    /// The liquid conductivity is that of pure water. In
    /// [Fidelity::Complex] the gas conductivity is the sum of the pure
    /// component conductivities at their partial pressures; in
    /// [Fidelity::Simple] only dry nitrogen contributes.
    pub fn thermal_conductivity<E, S>(
        &self,
        fluid_state: &S,
        _cache: &NullParameterCache,
        phase_idx: usize,
    ) -> E
    where
        S: FluidState,
        E: Evaluation + FromState<S::Scalar>,
    {
        debug_assert!(phase_idx < NUM_PHASES, "invalid phase index {phase_idx}");
        let t = E::from_state(fluid_state.temperature(phase_idx));
        let p = E::from_state(fluid_state.pressure(phase_idx));

        if phase_idx == LIQUID_PHASE_IDX {
            return self.water.liquid_thermal_conductivity(t, p);
        }

        match self.fidelity {
            Fidelity::Simple => self.nitrogen.gas_thermal_conductivity(t, p),
            Fidelity::Complex => {
                let x_h2o = E::from_state(fluid_state.mole_fraction(phase_idx, H2O_IDX));
                let x_n2 = E::from_state(fluid_state.mole_fraction(phase_idx, N2_IDX));

                // partial pressures from Raoult's and Dalton's laws
                let lambda_h2o = self.water.gas_thermal_conductivity(t, p * x_h2o);
                let lambda_n2 = self.nitrogen.gas_thermal_conductivity(t, p * x_n2);
                lambda_h2o + lambda_n2
            }
        }
    }

    /// The specific isobaric heat capacity of a phase in J/(kg K).
    ///
    /// The liquid heat capacity is that of pure water. The gas heat
    /// capacity weighs the pure component heat capacities by mass
    /// fraction; [Fidelity::Simple] replaces the component correlations by
    /// ideal gas values derived from the molecular degrees of freedom.
    pub fn heat_capacity<E, S>(
        &self,
        fluid_state: &S,
        _cache: &NullParameterCache,
        phase_idx: usize,
    ) -> E
    where
        S: FluidState,
        E: Evaluation + FromState<S::Scalar>,
    {
        debug_assert!(phase_idx < NUM_PHASES, "invalid phase index {phase_idx}");
        let t = E::from_state(fluid_state.temperature(phase_idx));
        let p = E::from_state(fluid_state.pressure(phase_idx));

        if phase_idx == LIQUID_PHASE_IDX {
            return self.water.liquid_heat_capacity(t, p);
        }

        let (c_p_h2o, c_p_n2) = match self.fidelity {
            Fidelity::Complex => {
                let x_h2o = E::from_state(fluid_state.mole_fraction(phase_idx, H2O_IDX));
                let x_n2 = E::from_state(fluid_state.mole_fraction(phase_idx, N2_IDX));
                (
                    self.water.gas_heat_capacity(t, p * x_h2o),
                    self.nitrogen.gas_heat_capacity(t, p * x_n2),
                )
            }
            Fidelity::Simple => {
                // ideal gas values from the molecular degrees of freedom
                let c_v_n2_molar = GAS_CONSTANT * 2.39;
                let c_p_n2_molar = GAS_CONSTANT + c_v_n2_molar;

                let c_v_h2o_molar = GAS_CONSTANT * 3.37;
                let c_p_h2o_molar = GAS_CONSTANT + c_v_h2o_molar;

                (
                    E::from(c_p_h2o_molar / self.molar_mass(H2O_IDX)),
                    E::from(c_p_n2_molar / self.molar_mass(N2_IDX)),
                )
            }
        };

        // no "cross interaction" between the two kinds of molecules
        let mass_h2o = E::from_state(fluid_state.mass_fraction(phase_idx, H2O_IDX));
        let mass_n2 = E::from_state(fluid_state.mass_fraction(phase_idx, N2_IDX));
        mass_h2o * c_p_h2o + mass_n2 * c_p_n2
    }
}

impl<W: PureComponent> fmt::Display for H2ON2FluidSystem<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H2O-N2 fluid system ({:?})", self.fidelity)
    }
}

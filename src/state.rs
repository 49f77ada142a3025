//! Description of the thermodynamic state of the fluid mixture.

use crate::eval::Evaluation;
use crate::fluid_system::{NUM_COMPONENTS, NUM_PHASES};

/// The thermodynamic quantities a fluid system reads from the caller.
///
/// All quantities are in SI units: temperatures in Kelvin, pressures in
/// Pascal, molar masses in kg/mol, fractions dimensionless. The fluid
/// system does not verify that mole fractions within a phase sum to one;
/// that is the caller's responsibility.
pub trait FluidState {
    /// The scalar representation stored in this state. Property evaluators
    /// convert it into the representation requested by the caller.
    type Scalar: Evaluation;

    /// The temperature of a phase in K.
    fn temperature(&self, phase_idx: usize) -> Self::Scalar;

    /// The pressure of a phase in Pa.
    fn pressure(&self, phase_idx: usize) -> Self::Scalar;

    /// The mole fraction of a component in a phase.
    fn mole_fraction(&self, phase_idx: usize, comp_idx: usize) -> Self::Scalar;

    /// The mass fraction of a component in a phase.
    fn mass_fraction(&self, phase_idx: usize, comp_idx: usize) -> Self::Scalar;

    /// The mean molar mass of a phase in kg/mol.
    fn average_molar_mass(&self, phase_idx: usize) -> Self::Scalar;
}

/// A straightforward [FluidState] implementation that stores temperature,
/// pressure and mole fractions per phase and derives mass fractions and the
/// mean molar mass from the component molar masses.
///
/// The derived quantities use a `1e-10` floor on the mole fraction sum so
/// that a completely empty phase yields zeros instead of NaN.
#[derive(Clone, Debug)]
pub struct CompositionalFluidState<D> {
    temperature: [D; NUM_PHASES],
    pressure: [D; NUM_PHASES],
    mole_fraction: [[D; NUM_COMPONENTS]; NUM_PHASES],
    molar_mass: [f64; NUM_COMPONENTS],
}

impl<D: Evaluation> CompositionalFluidState<D> {
    /// Create a state with the given component molar masses in kg/mol.
    /// Temperatures and pressures start at zero, compositions empty.
    pub fn new(molar_mass: [f64; NUM_COMPONENTS]) -> Self {
        Self {
            temperature: [D::zero(); NUM_PHASES],
            pressure: [D::zero(); NUM_PHASES],
            mole_fraction: [[D::zero(); NUM_COMPONENTS]; NUM_PHASES],
            molar_mass,
        }
    }

    /// Set the temperature of both phases.
    pub fn set_temperature(&mut self, temperature: D) -> &mut Self {
        self.temperature = [temperature; NUM_PHASES];
        self
    }

    /// Set the pressure of a single phase.
    pub fn set_pressure(&mut self, phase_idx: usize, pressure: D) -> &mut Self {
        self.pressure[phase_idx] = pressure;
        self
    }

    /// Set the mole fractions of all components in a phase.
    pub fn set_mole_fractions(
        &mut self,
        phase_idx: usize,
        mole_fractions: [D; NUM_COMPONENTS],
    ) -> &mut Self {
        self.mole_fraction[phase_idx] = mole_fractions;
        self
    }
}

impl<D: Evaluation> FluidState for CompositionalFluidState<D> {
    type Scalar = D;

    fn temperature(&self, phase_idx: usize) -> D {
        self.temperature[phase_idx]
    }

    fn pressure(&self, phase_idx: usize) -> D {
        self.pressure[phase_idx]
    }

    fn mole_fraction(&self, phase_idx: usize, comp_idx: usize) -> D {
        self.mole_fraction[phase_idx][comp_idx]
    }

    fn mass_fraction(&self, phase_idx: usize, comp_idx: usize) -> D {
        let x = &self.mole_fraction[phase_idx];
        let mut mass = D::zero();
        for (i, xi) in x.iter().enumerate() {
            mass += *xi * self.molar_mass[i];
        }
        x[comp_idx] * self.molar_mass[comp_idx] / mass.max_floor(1e-10)
    }

    fn average_molar_mass(&self, phase_idx: usize) -> D {
        let x = &self.mole_fraction[phase_idx];
        let mut mass = D::zero();
        let mut sum_x = D::zero();
        for (i, xi) in x.iter().enumerate() {
            mass += *xi * self.molar_mass[i];
            sum_x += *xi;
        }
        mass / sum_x.max_floor(1e-10)
    }
}

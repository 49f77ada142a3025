//! Properties of pure molecular nitrogen.
//!
//! Nitrogen only occurs as a gas or as a solute in the applications this
//! crate targets, so the gas correlations are the ones that matter: an
//! ideal-gas density, a Sutherland viscosity and a rigid-rotor caloric
//! model. The liquid correlations return fixed values near the atmospheric
//! boiling point so the provider contract stays total.

use super::PureComponent;
use crate::eval::Evaluation;
use crate::ideal_gas::{self, GAS_CONSTANT};

const MOLAR_MASS: f64 = 28.0134e-3;

/// Antoine coefficients (pressure in bar, valid 63 K - 126 K).
const ANTOINE_A: f64 = 3.7362;
const ANTOINE_B: f64 = 264.651;
const ANTOINE_C: f64 = -6.788;

/// Molar isochoric heat capacity, in units of R. Slightly below the rigid
/// diatomic value of 5/2 to match measured room temperature data.
const CV_MOLAR_R: f64 = 2.39;

/// Pure molecular nitrogen.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nitrogen;

impl Nitrogen {
    /// Specific isobaric heat capacity of the ideal gas in J/(kg K).
    pub fn ideal_gas_heat_capacity() -> f64 {
        GAS_CONSTANT * (1.0 + CV_MOLAR_R) / MOLAR_MASS
    }
}

impl PureComponent for Nitrogen {
    fn name(&self) -> &'static str {
        "N2"
    }

    fn molar_mass(&self) -> f64 {
        MOLAR_MASS
    }

    fn critical_temperature(&self) -> f64 {
        126.192
    }

    fn critical_pressure(&self) -> f64 {
        3.3958e6
    }

    fn acentric_factor(&self) -> f64 {
        0.0372
    }

    fn liquid_is_compressible(&self) -> bool {
        false
    }

    fn gas_is_ideal(&self) -> bool {
        true
    }

    fn vapor_pressure<E: Evaluation>(&self, temperature: E) -> E {
        let t = temperature.clamp_range(63.15, self.critical_temperature());
        let log_p = -(E::from(ANTOINE_B) / (t + ANTOINE_C)) + ANTOINE_A;
        (log_p * std::f64::consts::LN_10).exp() * 1e5
    }

    fn liquid_density<E: Evaluation>(&self, _temperature: E, _pressure: E) -> E {
        // boiling liquid at 77.355 K, 1 atm
        E::from(806.4)
    }

    fn gas_density<E: Evaluation>(&self, temperature: E, pressure: E) -> E {
        ideal_gas::density(temperature, pressure, MOLAR_MASS)
    }

    fn liquid_viscosity<E: Evaluation>(&self, _temperature: E, _pressure: E) -> E {
        E::from(1.6e-4)
    }

    fn gas_viscosity<E: Evaluation>(&self, temperature: E, _pressure: E) -> E {
        // Sutherland's formula with S = 111 K
        temperature.powf(1.5) * 1.406e-6 / (temperature + 111.0)
    }

    fn liquid_enthalpy<E: Evaluation>(&self, temperature: E, _pressure: E) -> E {
        (temperature - 63.15) * 2042.0
    }

    fn gas_enthalpy<E: Evaluation>(&self, temperature: E, _pressure: E) -> E {
        (temperature - 273.15) * Self::ideal_gas_heat_capacity()
    }

    fn liquid_thermal_conductivity<E: Evaluation>(&self, _temperature: E, _pressure: E) -> E {
        E::from(0.146)
    }

    fn gas_thermal_conductivity<E: Evaluation>(&self, temperature: E, _pressure: E) -> E {
        temperature * 6.5e-5 + 0.0063
    }

    fn liquid_heat_capacity<E: Evaluation>(&self, _temperature: E, _pressure: E) -> E {
        E::from(2042.0)
    }

    fn gas_heat_capacity<E: Evaluation>(&self, _temperature: E, _pressure: E) -> E {
        E::from(Self::ideal_gas_heat_capacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gas_viscosity() {
        let n2 = Nitrogen;
        assert_relative_eq!(n2.gas_viscosity(300.0, 1e5), 1.78e-5, max_relative = 1e-2);
    }

    #[test]
    fn gas_thermal_conductivity() {
        let n2 = Nitrogen;
        assert_relative_eq!(
            n2.gas_thermal_conductivity(300.0, 1e5),
            0.0259,
            max_relative = 2e-2
        );
    }

    #[test]
    fn vapor_pressure_at_boiling_point() {
        let n2 = Nitrogen;
        assert_relative_eq!(
            n2.vapor_pressure(77.355),
            101325.0,
            max_relative = 5e-2
        );
    }

    #[test]
    fn heat_capacity_close_to_rigid_rotor() {
        // the rigid diatomic value is 7/2 R / M = 1039 J/(kg K)
        assert_relative_eq!(
            Nitrogen::ideal_gas_heat_capacity(),
            1006.0,
            max_relative = 1e-3
        );
    }
}

//! Properties of pure water.
//!
//! Saturation pressure and saturated liquid density follow the auxiliary
//! equations of the IAPWS-95 formulation ([Wagner and Pruß, 2002](https://doi.org/10.1063/1.1461829)).
//! The remaining correlations are simple engineering fits, accurate to a few
//! percent over the temperature range of subsurface flow applications.

use super::PureComponent;
use crate::eval::Evaluation;
use crate::ideal_gas;
use std::f64::consts::LN_10;

/// Coefficients of the saturation pressure equation.
const PRESSURE_COEFFS: [(f64, f64); 6] = [
    (-7.85951783, 1.0),
    (1.84408259, 1.5),
    (-11.7866497, 3.0),
    (22.6807411, 3.5),
    (-15.9618719, 4.0),
    (1.80122502, 7.5),
];

/// Coefficients of the saturated liquid density equation.
const DENSITY_COEFFS: [(f64, f64); 6] = [
    (1.99274064, 1.0 / 3.0),
    (1.09965342, 2.0 / 3.0),
    (-0.510839303, 5.0 / 3.0),
    (-1.75493479, 16.0 / 3.0),
    (-45.5170352, 43.0 / 3.0),
    (-674694.45, 110.0 / 3.0),
];

/// Critical density in kg/m³.
const CRITICAL_DENSITY: f64 = 322.0;

/// Specific isobaric heat capacity of liquid water in J/(kg K).
const LIQUID_HEAT_CAPACITY: f64 = 4187.0;

/// Specific isobaric heat capacity of steam in J/(kg K).
const GAS_HEAT_CAPACITY: f64 = 1976.0;

/// Specific enthalpy of vaporization at the enthalpy reference point
/// (273.15 K) in J/kg.
const VAPORIZATION_ENTHALPY: f64 = 2.501e6;

/// Pure water.
///
/// The liquid density is evaluated on the saturation line, i.e. treated as
/// incompressible, and the gas phase is treated as an ideal gas. Both are
/// good approximations well below the critical point, which is where
/// two-phase water/nitrogen flow happens.
#[derive(Clone, Copy, Debug, Default)]
pub struct Water;

impl PureComponent for Water {
    fn name(&self) -> &'static str {
        "H2O"
    }

    fn molar_mass(&self) -> f64 {
        18.015e-3
    }

    fn critical_temperature(&self) -> f64 {
        647.096
    }

    fn critical_pressure(&self) -> f64 {
        22.064e6
    }

    fn acentric_factor(&self) -> f64 {
        0.344
    }

    fn liquid_is_compressible(&self) -> bool {
        false
    }

    fn gas_is_ideal(&self) -> bool {
        true
    }

    fn vapor_pressure<E: Evaluation>(&self, temperature: E) -> E {
        let tc = self.critical_temperature();
        let t = temperature.clamp_range(273.15, tc);
        let tau = E::one() - t / tc;
        let mut sum = E::zero();
        for (a, e) in PRESSURE_COEFFS {
            sum += tau.powf(e) * a;
        }
        (sum / t * tc).exp() * self.critical_pressure()
    }

    fn liquid_density<E: Evaluation>(&self, temperature: E, _pressure: E) -> E {
        let tc = self.critical_temperature();
        let t = temperature.clamp_range(273.15, tc);
        let tau = E::one() - t / tc;
        let mut sum = E::one();
        for (b, e) in DENSITY_COEFFS {
            sum += tau.powf(e) * b;
        }
        sum * CRITICAL_DENSITY
    }

    fn gas_density<E: Evaluation>(&self, temperature: E, pressure: E) -> E {
        ideal_gas::density(temperature, pressure, self.molar_mass())
    }

    fn liquid_viscosity<E: Evaluation>(&self, temperature: E, _pressure: E) -> E {
        // Vogel-type fit, < 3% deviation between 273 K and 373 K
        (E::from(247.8 * LN_10) / (temperature - 140.0)).exp() * 2.414e-5
    }

    fn gas_viscosity<E: Evaluation>(&self, temperature: E, _pressure: E) -> E {
        (temperature * 0.0245 + 2.55) * 1e-6
    }

    fn liquid_enthalpy<E: Evaluation>(&self, temperature: E, _pressure: E) -> E {
        (temperature - 273.15) * LIQUID_HEAT_CAPACITY
    }

    fn gas_enthalpy<E: Evaluation>(&self, temperature: E, _pressure: E) -> E {
        (temperature - 273.15) * GAS_HEAT_CAPACITY + VAPORIZATION_ENTHALPY
    }

    fn liquid_thermal_conductivity<E: Evaluation>(&self, temperature: E, _pressure: E) -> E {
        let t = temperature;
        t.powi(3) * 1.861e-9 - t.powi(2) * 8.078e-6 + t * 5.725e-3 - 0.432
    }

    fn gas_thermal_conductivity<E: Evaluation>(&self, temperature: E, _pressure: E) -> E {
        temperature * 4.31e-5 + 0.0055
    }

    fn liquid_heat_capacity<E: Evaluation>(&self, _temperature: E, _pressure: E) -> E {
        E::from(LIQUID_HEAT_CAPACITY)
    }

    fn gas_heat_capacity<E: Evaluation>(&self, _temperature: E, _pressure: E) -> E {
        E::from(GAS_HEAT_CAPACITY)
    }
}

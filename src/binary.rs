//! Binary coefficients for the water-nitrogen pair.

use crate::components::{PureComponent, Water};
use crate::eval::Evaluation;

/// IAPWS (2004) Henry constant correlation coefficients for N2 in water.
const HENRY_A: f64 = -9.67578;
const HENRY_B: f64 = 4.72162;
const HENRY_C: f64 = 11.70585;

/// Fuller diffusion volumes.
const SIGMA_NU_H2O: f64 = 13.1;
const SIGMA_NU_N2: f64 = 18.5;

/// Molar masses in g/mol, as the Fuller correlation expects them.
const M_H2O: f64 = 18.015;
const M_N2: f64 = 28.0134;

const CRITICAL_TEMPERATURE_H2O: f64 = 647.096;

/// Henry's coefficient in Pa for molecular nitrogen dissolved in liquid
/// water, from the IAPWS guideline on Henry's constants
/// ([Fernandez-Prini et al., 2003](https://doi.org/10.1063/1.1564818)).
///
/// The correlation gives `ln(kH / p_sat)` in terms of the reduced
/// temperature; the vapor pressure is evaluated with the direct water
/// correlation, not a tabulated one.
pub fn henry<E: Evaluation>(temperature: E) -> E {
    let tr = temperature.clamp_range(273.15, CRITICAL_TEMPERATURE_H2O) / CRITICAL_TEMPERATURE_H2O;
    let tau = E::one() - tr;
    let ln_kh_psat =
        (E::from(HENRY_A) + tau.powf(0.355) * HENRY_B) / tr + tr.powf(-0.41) * tau.exp() * HENRY_C;
    ln_kh_psat.exp() * Water.vapor_pressure(temperature)
}

/// Binary diffusion coefficient in m²/s of nitrogen in liquid water.
///
/// Linear extrapolation of the infinite-dilution coefficient at 25 °C,
/// `2.01e-9 m²/s` ([Ferrell and Himmelblau, 1967](https://doi.org/10.1021/je60032a036)).
pub fn liquid_diff_coeff<E: Evaluation>(temperature: E, _pressure: E) -> E {
    temperature * (2.01e-9 / 298.15)
}

/// Binary diffusion coefficient in m²/s of water vapor in gaseous nitrogen
/// after the method of [Fuller et al., 1966](https://doi.org/10.1021/ie50677a007).
pub fn gas_diff_coeff<E: Evaluation>(temperature: E, pressure: E) -> E {
    // harmonic mean of the molar masses
    let m_ab = 2.0 / (1.0 / M_H2O + 1.0 / M_N2);
    let nu = SIGMA_NU_H2O.cbrt() + SIGMA_NU_N2.cbrt();
    temperature.powf(1.75) * (1e-4 * 143.0 / (m_ab.sqrt() * nu * nu)) / pressure
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn henry_at_ambient_temperature() {
        // literature value for N2 in water: about 8.6e9 Pa
        assert_relative_eq!(henry(298.15), 8.6e9, max_relative = 5e-2);
    }

    #[test]
    fn henry_increases_with_temperature_near_ambient() {
        // nitrogen becomes less soluble towards ~370 K
        assert!(henry(350.0) > henry(298.15));
    }

    #[test]
    fn gas_diffusion_at_ambient_conditions() {
        // N2/H2O at 300 K and 1 bar is about 2.6e-5 m²/s
        assert_relative_eq!(gas_diff_coeff(300.0, 1e5), 2.6e-5, max_relative = 5e-2);
    }

    #[test]
    fn liquid_diffusion_at_reference_temperature() {
        assert_relative_eq!(liquid_diff_coeff(298.15, 1e5), 2.01e-9, max_relative = 1e-12);
    }
}

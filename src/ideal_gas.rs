//! Relations valid for an ideal gas.

use crate::eval::Evaluation;

/// Universal molar gas constant in J/(mol K).
pub const GAS_CONSTANT: f64 = 8.31446261815324;

/// The molar density of an ideal gas in mol/m³ at a given temperature and
/// pressure.
pub fn molar_density<E: Evaluation>(temperature: E, pressure: E) -> E {
    pressure / (temperature * GAS_CONSTANT)
}

/// The mass density of an ideal gas in kg/m³ for a substance with the given
/// molar mass in kg/mol.
pub fn density<E: Evaluation>(temperature: E, pressure: E, molar_mass: f64) -> E {
    molar_density(temperature, pressure) * molar_mass
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn air_at_ambient_conditions() {
        // 1 mol of ideal gas occupies 22.711 l at 273.15 K and 1 bar
        let c = molar_density(273.15, 1e5);
        assert_relative_eq!(1.0 / c, 22.711e-3, max_relative = 1e-4);
        // dry nitrogen at ambient conditions is about 1.12 kg/m³
        assert_relative_eq!(
            density(300.0, 1e5, 28.0134e-3),
            1.123,
            max_relative = 1e-3
        );
    }
}

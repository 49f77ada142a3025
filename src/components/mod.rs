//! Pure-substance property providers.
//!
//! The fluid system combines two of these providers via its mixing rules.
//! All correlations are generic over the [Evaluation] scalar so that the
//! fluid system can evaluate them with plain values or dual numbers alike.

use crate::eval::Evaluation;

mod nitrogen;
mod tabulated;
mod water;

pub use nitrogen::Nitrogen;
pub use tabulated::{TabulatedComponent, TabulationGrid};
pub use water::Water;

/// Thermodynamic and transport correlations of a single pure substance.
///
/// Temperatures are in K, pressures in Pa, densities in kg/m³, viscosities
/// in Pa·s, specific enthalpies in J/kg, thermal conductivities in W/(m K)
/// and specific isobaric heat capacities in J/(kg K).
pub trait PureComponent {
    /// A human readable name of the component.
    fn name(&self) -> &'static str;

    /// The molar mass in kg/mol.
    fn molar_mass(&self) -> f64;

    /// The critical temperature in K.
    fn critical_temperature(&self) -> f64;

    /// The critical pressure in Pa.
    fn critical_pressure(&self) -> f64;

    /// The acentric factor.
    fn acentric_factor(&self) -> f64;

    /// Whether the liquid density depends on pressure.
    fn liquid_is_compressible(&self) -> bool;

    /// Whether the gas phase is assumed to behave like an ideal gas.
    fn gas_is_ideal(&self) -> bool;

    /// The vapor pressure in Pa at a given temperature.
    fn vapor_pressure<E: Evaluation>(&self, temperature: E) -> E;

    /// The density of the liquid in kg/m³.
    fn liquid_density<E: Evaluation>(&self, temperature: E, pressure: E) -> E;

    /// The density of the gas in kg/m³.
    fn gas_density<E: Evaluation>(&self, temperature: E, pressure: E) -> E;

    /// The dynamic viscosity of the liquid in Pa·s.
    fn liquid_viscosity<E: Evaluation>(&self, temperature: E, pressure: E) -> E;

    /// The dynamic viscosity of the gas in Pa·s.
    fn gas_viscosity<E: Evaluation>(&self, temperature: E, pressure: E) -> E;

    /// The specific enthalpy of the liquid in J/kg.
    fn liquid_enthalpy<E: Evaluation>(&self, temperature: E, pressure: E) -> E;

    /// The specific enthalpy of the gas in J/kg.
    fn gas_enthalpy<E: Evaluation>(&self, temperature: E, pressure: E) -> E;

    /// The thermal conductivity of the liquid in W/(m K).
    fn liquid_thermal_conductivity<E: Evaluation>(&self, temperature: E, pressure: E) -> E;

    /// The thermal conductivity of the gas in W/(m K).
    fn gas_thermal_conductivity<E: Evaluation>(&self, temperature: E, pressure: E) -> E;

    /// The specific isobaric heat capacity of the liquid in J/(kg K).
    fn liquid_heat_capacity<E: Evaluation>(&self, temperature: E, pressure: E) -> E;

    /// The specific isobaric heat capacity of the gas in J/(kg K).
    fn gas_heat_capacity<E: Evaluation>(&self, temperature: E, pressure: E) -> E;
}

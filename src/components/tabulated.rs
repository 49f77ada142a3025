//! Grid tabulation of a pure component.
//!
//! Evaluating correlations like the IAPWS auxiliary equations at every cell
//! of a reservoir simulation is wasteful. [TabulatedComponent] samples all
//! temperature and pressure dependent correlations of a wrapped component
//! on a rectilinear (T, p) grid once at construction and answers property
//! calls by bilinear interpolation. The interpolation weights are computed
//! in the caller's [Evaluation] scalar, so derivative information flows
//! through table lookups just like through the direct correlations.

use super::PureComponent;
use crate::errors::{FluidSystemError, FluidSystemResult};
use crate::eval::Evaluation;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// The temperature and pressure ranges and resolutions of a tabulation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TabulationGrid {
    /// Minimum tabulated temperature in K.
    pub temp_min: f64,
    /// Maximum tabulated temperature in K.
    pub temp_max: f64,
    /// Number of ticks on the temperature axis.
    pub n_temp: usize,
    /// Minimum tabulated pressure in Pa.
    pub press_min: f64,
    /// Maximum tabulated pressure in Pa.
    pub press_max: f64,
    /// Number of ticks on the pressure axis.
    pub n_press: usize,
}

impl Default for TabulationGrid {
    /// The default grid covers liquid water and steam up to 350 °C and
    /// 20 MPa, which is sufficient for most subsurface applications.
    fn default() -> Self {
        Self {
            temp_min: 273.15,
            temp_max: 623.15,
            n_temp: 100,
            press_min: 0.0,
            press_max: 20e6,
            n_press: 200,
        }
    }
}

impl TabulationGrid {
    fn validate(&self) -> FluidSystemResult<()> {
        if !(self.temp_min.is_finite() && self.temp_max.is_finite()) || self.temp_min >= self.temp_max
        {
            return Err(FluidSystemError::InvalidRange(
                "temperature",
                self.temp_min,
                self.temp_max,
            ));
        }
        if !(self.press_min.is_finite() && self.press_max.is_finite())
            || self.press_min >= self.press_max
        {
            return Err(FluidSystemError::InvalidRange(
                "pressure",
                self.press_min,
                self.press_max,
            ));
        }
        if self.n_temp < 2 {
            return Err(FluidSystemError::TooFewTicks(self.n_temp, "temperature"));
        }
        if self.n_press < 2 {
            return Err(FluidSystemError::TooFewTicks(self.n_press, "pressure"));
        }
        Ok(())
    }

    fn temp_step(&self) -> f64 {
        (self.temp_max - self.temp_min) / (self.n_temp - 1) as f64
    }

    fn press_step(&self) -> f64 {
        (self.press_max - self.press_min) / (self.n_press - 1) as f64
    }

    /// The lower node index of the cell containing `x` on an axis with the
    /// given origin, step and node count. Queries outside the grid use the
    /// boundary cell.
    fn cell(x: f64, min: f64, step: f64, n: usize) -> usize {
        let i = ((x - min) / step).floor();
        (i.max(0.0) as usize).min(n - 2)
    }
}

/// A pure component whose (T, p) dependent properties are interpolated from
/// precomputed tables.
///
/// The tables are built once in [TabulatedComponent::new] and immutable
/// afterwards, so a tabulated component can be shared freely between
/// threads.
#[derive(Clone, Debug)]
pub struct TabulatedComponent<C: PureComponent> {
    component: C,
    grid: TabulationGrid,
    vapor_pressure: Array1<f64>,
    liquid_density: Array2<f64>,
    gas_density: Array2<f64>,
    liquid_viscosity: Array2<f64>,
    gas_viscosity: Array2<f64>,
    liquid_enthalpy: Array2<f64>,
    gas_enthalpy: Array2<f64>,
    liquid_thermal_conductivity: Array2<f64>,
    gas_thermal_conductivity: Array2<f64>,
    liquid_heat_capacity: Array2<f64>,
    gas_heat_capacity: Array2<f64>,
}

impl<C: PureComponent> TabulatedComponent<C> {
    /// Tabulate a component on the given grid.
    pub fn new(component: C, grid: TabulationGrid) -> FluidSystemResult<Self> {
        grid.validate()?;

        let temperature =
            Array1::from_shape_fn(grid.n_temp, |i| grid.temp_min + i as f64 * grid.temp_step());
        let pressure = Array1::from_shape_fn(grid.n_press, |j| {
            grid.press_min + j as f64 * grid.press_step()
        });

        let vapor_pressure = temperature.mapv(|t| component.vapor_pressure(t));
        let table = |f: &dyn Fn(f64, f64) -> f64| {
            Array2::from_shape_fn((grid.n_temp, grid.n_press), |(i, j)| {
                f(temperature[i], pressure[j])
            })
        };

        Ok(Self {
            vapor_pressure,
            liquid_density: table(&|t, p| component.liquid_density(t, p)),
            gas_density: table(&|t, p| component.gas_density(t, p)),
            liquid_viscosity: table(&|t, p| component.liquid_viscosity(t, p)),
            gas_viscosity: table(&|t, p| component.gas_viscosity(t, p)),
            liquid_enthalpy: table(&|t, p| component.liquid_enthalpy(t, p)),
            gas_enthalpy: table(&|t, p| component.gas_enthalpy(t, p)),
            liquid_thermal_conductivity: table(&|t, p| component.liquid_thermal_conductivity(t, p)),
            gas_thermal_conductivity: table(&|t, p| component.gas_thermal_conductivity(t, p)),
            liquid_heat_capacity: table(&|t, p| component.liquid_heat_capacity(t, p)),
            gas_heat_capacity: table(&|t, p| component.gas_heat_capacity(t, p)),
            component,
            grid,
        })
    }

    /// The grid the tables were built on.
    pub fn grid(&self) -> &TabulationGrid {
        &self.grid
    }

    /// The wrapped component.
    pub fn component(&self) -> &C {
        &self.component
    }

    fn interpolate1<E: Evaluation>(&self, values: &Array1<f64>, temperature: E) -> E {
        let g = &self.grid;
        let t = temperature.clamp_range(g.temp_min, g.temp_max);
        let i = TabulationGrid::cell(t.re(), g.temp_min, g.temp_step(), g.n_temp);
        let w = (t - (g.temp_min + i as f64 * g.temp_step())) / g.temp_step();
        (E::one() - w) * values[i] + w * values[i + 1]
    }

    fn interpolate2<E: Evaluation>(&self, values: &Array2<f64>, temperature: E, pressure: E) -> E {
        let g = &self.grid;
        let t = temperature.clamp_range(g.temp_min, g.temp_max);
        let p = pressure.clamp_range(g.press_min, g.press_max);
        let i = TabulationGrid::cell(t.re(), g.temp_min, g.temp_step(), g.n_temp);
        let j = TabulationGrid::cell(p.re(), g.press_min, g.press_step(), g.n_press);
        let wt = (t - (g.temp_min + i as f64 * g.temp_step())) / g.temp_step();
        let wp = (p - (g.press_min + j as f64 * g.press_step())) / g.press_step();
        (E::one() - wt) * (E::one() - wp) * values[(i, j)]
            + wt * (E::one() - wp) * values[(i + 1, j)]
            + (E::one() - wt) * wp * values[(i, j + 1)]
            + wt * wp * values[(i + 1, j + 1)]
    }
}

impl<C: PureComponent> PureComponent for TabulatedComponent<C> {
    fn name(&self) -> &'static str {
        self.component.name()
    }

    fn molar_mass(&self) -> f64 {
        self.component.molar_mass()
    }

    fn critical_temperature(&self) -> f64 {
        self.component.critical_temperature()
    }

    fn critical_pressure(&self) -> f64 {
        self.component.critical_pressure()
    }

    fn acentric_factor(&self) -> f64 {
        self.component.acentric_factor()
    }

    fn liquid_is_compressible(&self) -> bool {
        self.component.liquid_is_compressible()
    }

    fn gas_is_ideal(&self) -> bool {
        self.component.gas_is_ideal()
    }

    fn vapor_pressure<E: Evaluation>(&self, temperature: E) -> E {
        self.interpolate1(&self.vapor_pressure, temperature)
    }

    fn liquid_density<E: Evaluation>(&self, temperature: E, pressure: E) -> E {
        self.interpolate2(&self.liquid_density, temperature, pressure)
    }

    fn gas_density<E: Evaluation>(&self, temperature: E, pressure: E) -> E {
        self.interpolate2(&self.gas_density, temperature, pressure)
    }

    fn liquid_viscosity<E: Evaluation>(&self, temperature: E, pressure: E) -> E {
        self.interpolate2(&self.liquid_viscosity, temperature, pressure)
    }

    fn gas_viscosity<E: Evaluation>(&self, temperature: E, pressure: E) -> E {
        self.interpolate2(&self.gas_viscosity, temperature, pressure)
    }

    fn liquid_enthalpy<E: Evaluation>(&self, temperature: E, pressure: E) -> E {
        self.interpolate2(&self.liquid_enthalpy, temperature, pressure)
    }

    fn gas_enthalpy<E: Evaluation>(&self, temperature: E, pressure: E) -> E {
        self.interpolate2(&self.gas_enthalpy, temperature, pressure)
    }

    fn liquid_thermal_conductivity<E: Evaluation>(&self, temperature: E, pressure: E) -> E {
        self.interpolate2(&self.liquid_thermal_conductivity, temperature, pressure)
    }

    fn gas_thermal_conductivity<E: Evaluation>(&self, temperature: E, pressure: E) -> E {
        self.interpolate2(&self.gas_thermal_conductivity, temperature, pressure)
    }

    fn liquid_heat_capacity<E: Evaluation>(&self, temperature: E, pressure: E) -> E {
        self.interpolate2(&self.liquid_heat_capacity, temperature, pressure)
    }

    fn gas_heat_capacity<E: Evaluation>(&self, temperature: E, pressure: E) -> E {
        self.interpolate2(&self.gas_heat_capacity, temperature, pressure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Water;
    use approx::assert_relative_eq;
    use num_dual::Dual64;

    fn tabulated_water() -> TabulatedComponent<Water> {
        TabulatedComponent::new(Water, TabulationGrid::default()).unwrap()
    }

    #[test]
    fn matches_direct_correlations_off_node() {
        let tab = tabulated_water();
        // deliberately not a grid node
        let (t, p) = (312.77, 3.456e6);
        assert_relative_eq!(
            tab.liquid_density(t, p),
            Water.liquid_density(t, p),
            max_relative = 1e-3
        );
        assert_relative_eq!(
            tab.gas_density(t, p),
            Water.gas_density(t, p),
            max_relative = 1e-3
        );
        assert_relative_eq!(
            tab.vapor_pressure(t),
            Water.vapor_pressure(t),
            max_relative = 1e-2
        );
        assert_relative_eq!(
            tab.liquid_viscosity(t, p),
            Water.liquid_viscosity(t, p),
            max_relative = 2e-3
        );
    }

    #[test]
    fn queries_outside_the_grid_are_clamped() {
        let tab = tabulated_water();
        let below = tab.liquid_density(200.0, 1e5);
        let at_edge = tab.liquid_density(273.15, 1e5);
        assert_relative_eq!(below, at_edge);
    }

    #[test]
    fn derivatives_flow_through_the_interpolation() {
        let tab = tabulated_water();
        let t = Dual64::from_re(330.0).derivative();
        let p = Dual64::from_re(1e5);
        let rho = tab.liquid_density(t, p);
        // compare against a central difference of the table itself
        let h = 1e-3;
        let fd = (tab.liquid_density(330.0 + h, 1e5) - tab.liquid_density(330.0 - h, 1e5))
            / (2.0 * h);
        assert_relative_eq!(rho.eps, fd, max_relative = 1e-6);
    }

    #[test]
    fn invalid_grids_are_rejected() {
        let mut grid = TabulationGrid::default();
        grid.temp_max = grid.temp_min;
        assert!(TabulatedComponent::new(Water, grid).is_err());

        let grid = TabulationGrid {
            n_press: 1,
            ..TabulationGrid::default()
        };
        assert!(matches!(
            TabulatedComponent::new(Water, grid),
            Err(FluidSystemError::TooFewTicks(1, "pressure"))
        ));
    }

    #[test]
    fn grid_serde_round_trip() {
        let grid = TabulationGrid::default();
        let json = serde_json::to_string(&grid).unwrap();
        let back: TabulationGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}

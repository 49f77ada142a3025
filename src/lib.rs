//! A two-phase, two-component fluid system for subsurface flow simulators.
//!
//! The crate computes thermodynamic and transport properties of mixtures of
//! water and molecular nitrogen in a liquid and a gas phase: density,
//! viscosity, fugacity coefficients, diffusion coefficients, enthalpy,
//! thermal conductivity and isobaric heat capacity. Callers hand over a
//! [FluidState] with temperatures, pressures and phase compositions and
//! request one property at a time.
//!
//! All property evaluators are implemented once, generically over the
//! scalar type of the result. Evaluating with `f64` yields plain values;
//! evaluating with one of the generalized dual numbers from [num_dual]
//! yields derivatives for Jacobian based solvers from the exact same code
//! path.
//!
//! ```
//! use h2on2::{Fidelity, H2ON2FluidSystem, NullParameterCache,
//!     CompositionalFluidState, GAS_PHASE_IDX};
//!
//! # fn main() -> Result<(), h2on2::FluidSystemError> {
//! let system = H2ON2FluidSystem::new(Fidelity::Complex)?;
//! let mut state = CompositionalFluidState::new([
//!     system.molar_mass(h2on2::H2O_IDX),
//!     system.molar_mass(h2on2::N2_IDX),
//! ]);
//! state
//!     .set_temperature(330.0)
//!     .set_pressure(GAS_PHASE_IDX, 1e5)
//!     .set_mole_fractions(GAS_PHASE_IDX, [0.1, 0.9]);
//!
//! let rho: f64 = system.density(&state, &NullParameterCache, GAS_PHASE_IDX);
//! assert!(rho > 0.0);
//! # Ok(())
//! # }
//! ```
#![warn(clippy::all)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_arguments)]

pub mod binary;
pub mod components;
mod errors;
mod eval;
mod fluid_system;
pub mod ideal_gas;
mod state;

pub use errors::{FluidSystemError, FluidSystemResult};
pub use eval::{Evaluation, FromState};
pub use fluid_system::{
    Fidelity, H2ON2FluidSystem, NullParameterCache, GAS_PHASE_IDX, H2O_IDX, LIQUID_PHASE_IDX,
    N2_IDX, NUM_COMPONENTS, NUM_PHASES,
};
pub use state::{CompositionalFluidState, FluidState};

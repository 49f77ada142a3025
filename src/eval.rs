//! Generic scalar types for property evaluation.
//!
//! Every property of the fluid system is implemented once, generically over
//! an [Evaluation] scalar. Evaluating with `f64` yields plain values,
//! evaluating with one of the generalized dual numbers from [num_dual]
//! yields the value together with its derivatives, without a second code
//! path.

use num_dual::{Dual2_64, Dual3_64, Dual64, DualNum, HyperDual64};

/// Scalar type in which properties are evaluated.
///
/// The provided clamping primitives keep the derivative information of the
/// operand whenever the bound is not active, which is the behavior required
/// by the degenerate-composition guards of the mixing rules.
pub trait Evaluation: DualNum<f64> + Copy {
    /// The maximum of `self` and a constant floor.
    #[inline]
    fn max_floor(self, floor: f64) -> Self {
        if self.re() < floor {
            Self::from(floor)
        } else {
            self
        }
    }

    /// Clamp `self` into the closed interval `[min, max]`.
    #[inline]
    fn clamp_range(self, min: f64, max: f64) -> Self {
        let clamped = num_traits::clamp(self.re(), min, max);
        if clamped == self.re() {
            self
        } else {
            Self::from(clamped)
        }
    }
}

impl<D: DualNum<f64> + Copy> Evaluation for D {}

/// Conversion from the scalar type stored in a fluid state into the scalar
/// type requested by the caller of a property evaluator.
///
/// Identical representations pass through unchanged (keeping derivatives),
/// plain values are lifted to constant dual numbers, and dual numbers are
/// truncated to their value part when a plain result is requested.
pub trait FromState<S> {
    fn from_state(value: S) -> Self;
}

impl FromState<f64> for f64 {
    #[inline]
    fn from_state(value: f64) -> Self {
        value
    }
}

macro_rules! impl_from_state {
    ($($dual:ty),*) => {
        $(
            impl FromState<$dual> for $dual {
                #[inline]
                fn from_state(value: $dual) -> Self {
                    value
                }
            }

            impl FromState<f64> for $dual {
                #[inline]
                fn from_state(value: f64) -> Self {
                    <$dual>::from(value)
                }
            }

            impl FromState<$dual> for f64 {
                #[inline]
                fn from_state(value: $dual) -> Self {
                    value.re()
                }
            }
        )*
    };
}

impl_from_state!(Dual64, Dual2_64, Dual3_64, HyperDual64);

#[cfg(test)]
mod tests {
    use super::*;
    use num_dual::Dual64;

    #[test]
    fn max_floor_keeps_derivatives_above_the_floor() {
        let x = Dual64::from_re(2.0).derivative();
        let clamped = x.max_floor(1e-5);
        assert_eq!(clamped.re, 2.0);
        assert_eq!(clamped.eps, 1.0);
    }

    #[test]
    fn max_floor_is_constant_below_the_floor() {
        let x = Dual64::from_re(1e-12).derivative();
        let clamped = x.max_floor(1e-5);
        assert_eq!(clamped.re, 1e-5);
        assert_eq!(clamped.eps, 0.0);
    }

    #[test]
    fn state_conversions() {
        let dual = Dual64::from_re(300.0).derivative();
        assert_eq!(<f64 as FromState<Dual64>>::from_state(dual), 300.0);
        let lifted = <Dual64 as FromState<f64>>::from_state(300.0);
        assert_eq!(lifted.re, 300.0);
        assert_eq!(lifted.eps, 0.0);
        let identity = <Dual64 as FromState<Dual64>>::from_state(dual);
        assert_eq!(identity.eps, 1.0);
    }

    #[test]
    fn clamp_range() {
        assert_eq!(500.0f64.clamp_range(273.15, 623.15), 500.0);
        assert_eq!(100.0f64.clamp_range(273.15, 623.15), 273.15);
        assert_eq!(1000.0f64.clamp_range(273.15, 623.15), 623.15);
    }
}

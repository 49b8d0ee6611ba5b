//! Numbers and numerics.

use num_traits as nt;

/// Gathers traits useful for working with generic floating point types.
pub trait Float:
    nt::Float + nt::FromPrimitive + nt::ToPrimitive + approx::AbsDiffEq + approx::RelativeEq
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const THREE: Self;
    const ONE_THIRD: Self;
    const PI: Self;
    /// Magnitudes below this are treated as zero.
    const ZERO_TOLERANCE: Self;
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const THREE: Self = 3.0;
            const ONE_THIRD: Self = 1.0 / 3.0;
            const PI: Self = std::$f::consts::PI;
            const ZERO_TOLERANCE: Self = 1e-6;
        }
    };
}

impl_float!(f32);
impl_float!(f64);

/// The tolerance below which a double-precision magnitude is considered zero.
pub const ZERO_TOLERANCE: f64 = <f64 as Float>::ZERO_TOLERANCE;

/// Linearly interpolates between `start` and `end`. The weight `amount` is
/// not clamped, so values outside `[0, 1]` extrapolate. The endpoints are
/// reproduced exactly for `amount` equal to zero and one.
#[inline]
pub fn lerp<F: Float>(start: F, end: F, amount: F) -> F {
    start * (F::ONE - amount) + end * amount
}

/// Applies the cubic smoothing curve `3t^2 - 2t^3` to the given amount after
/// clamping it to `[0, 1]`.
#[inline]
pub fn smooth_step<F: Float>(amount: F) -> F {
    if amount <= F::ZERO {
        F::ZERO
    } else if amount >= F::ONE {
        F::ONE
    } else {
        amount * amount * (F::THREE - F::TWO * amount)
    }
}

/// Whether the given value is within [`Float::ZERO_TOLERANCE`] of zero.
#[inline]
pub fn is_zero<F: Float>(value: F) -> bool {
    value.abs() < F::ZERO_TOLERANCE
}

/// Whether the given value is within [`Float::ZERO_TOLERANCE`] of one.
#[inline]
pub fn is_one<F: Float>(value: F) -> bool {
    is_zero(value - F::ONE)
}

/// Whether `a` and `b` differ by no more than [`Float::ZERO_TOLERANCE`].
#[inline]
pub fn near_equal<F: Float>(a: F, b: F) -> bool {
    near_equal_eps(a, b, F::ZERO_TOLERANCE)
}

/// Whether `a` and `b` differ by no more than `epsilon`.
#[inline]
pub fn near_equal_eps<F: Float>(a: F, b: F, epsilon: F) -> bool {
    (a - b).abs() <= epsilon
}

/// Wraps the given angle in degrees into the range `[-180, 180]`.
#[inline]
pub fn unwind_degrees(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped < -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

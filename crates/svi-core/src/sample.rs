//! Numeric sample types accepted by the interpolators.
//!
//! Interpolation weights are always real-valued, so every sample is widened
//! to [`Real`] before being combined and narrowed back afterwards.  Integral
//! sample types (8-bit images, 16-bit depth maps, ...) round to the nearest
//! value and saturate at the bounds of their range.

use num_traits::Zero;

use crate::Real;

/// A value that can be stored in a sampled signal and interpolated.
///
/// `Default` must be the additive zero; it is what the `Zero` and
/// `NoBoundary` policies yield outside the signal.
pub trait Sample: Copy + Default + Zero + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Widen the sample to the working precision.
    fn to_real(self) -> Real;

    /// Narrow a working-precision value back to the sample type.
    fn from_real(value: Real) -> Self;
}

impl Sample for f64 {
    #[inline]
    fn to_real(self) -> Real {
        self
    }

    #[inline]
    fn from_real(value: Real) -> Self {
        value
    }
}

impl Sample for f32 {
    #[inline]
    fn to_real(self) -> Real {
        Real::from(self)
    }

    #[inline]
    fn from_real(value: Real) -> Self {
        value as f32
    }
}

macro_rules! integral_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_real(self) -> Real {
                    Real::from(self)
                }

                #[inline]
                fn from_real(value: Real) -> Self {
                    // `as` saturates at the type bounds and maps NaN to 0.
                    value.round() as $t
                }
            }
        )*
    };
}

integral_sample!(u8, u16, i16, i32);

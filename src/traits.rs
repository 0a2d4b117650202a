//! Element bound for vector components.

use num_traits::{NumCast, Signed};

/// Capability bound for vector element types.
///
/// A [`Scalar`] supports the ordinary arithmetic operators, ordering and
/// equality comparison, zero/one construction, and a signed absolute value.
/// It is blanket-implemented for every type satisfying those bounds, so
/// `f32`, `f64`, and the signed integers all qualify out of the box.
///
/// Unsigned integers do not qualify: the vector operations rely on negation
/// and absolute value.
///
/// # Example
///
/// ```
/// use vector_types::Scalar;
///
/// fn hypot3<T: Scalar>(x: T, y: T, z: T) -> T {
///     (x * x + y * y + z * z).sqrt()
/// }
///
/// assert_eq!(hypot3(2.0_f64, 3.0, 6.0), 7.0);
/// assert_eq!(hypot3(1_i32, 2, 3), 3); // truncated from sqrt(14)
/// ```
pub trait Scalar: Copy + PartialOrd + Signed + NumCast {
    /// Square root computed through `f64` and converted back into `Self`.
    ///
    /// For integral types both the widening and the narrowing conversion
    /// truncate, so the result is the integer part of the true root. Callers
    /// needing an exact root should work in a floating-point element type.
    #[must_use]
    fn sqrt(self) -> Self {
        let root = self.to_f64().map_or(0.0, f64::sqrt);
        Self::from(root).unwrap_or_else(Self::zero)
    }
}

impl<T: Copy + PartialOrd + Signed + NumCast> Scalar for T {}

//! Elementwise comparison and logic maps.
//!
//! These are componentwise predicate maps, not total orders on the vector
//! as a whole: each operation tests the three components independently and
//! packs the results into a new vector, `T::one()` for a passing test and
//! `T::zero()` for a failing one.
//!
//! The logic operations define truthiness explicitly as "component not
//! equal to `T::zero()`".

use crate::traits::Scalar;
use crate::vector::Vector3;

/// 1-in-T for a passing test, 0-in-T otherwise.
fn indicator<T: Scalar>(test: bool) -> T {
    if test {
        T::one()
    } else {
        T::zero()
    }
}

impl<T: Scalar> Vector3<T> {
    /// Tests each component against a scalar with `<`.
    ///
    /// # Example
    ///
    /// ```
    /// use vector_types::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.lt_scalar(2.0), Vector3::new(1.0, 0.0, 0.0));
    /// ```
    #[must_use]
    pub fn lt_scalar(&self, s: T) -> Self {
        Self::new(
            indicator(self.x() < s),
            indicator(self.y() < s),
            indicator(self.z() < s),
        )
    }

    /// Tests each component against a scalar with `>`.
    ///
    /// # Example
    ///
    /// ```
    /// use vector_types::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.gt_scalar(2.0), Vector3::new(0.0, 0.0, 1.0));
    /// ```
    #[must_use]
    pub fn gt_scalar(&self, s: T) -> Self {
        Self::new(
            indicator(self.x() > s),
            indicator(self.y() > s),
            indicator(self.z() > s),
        )
    }

    /// Tests same-indexed component pairs with `<`.
    #[must_use]
    pub fn lt_elementwise(&self, other: &Self) -> Self {
        Self::new(
            indicator(self.x() < other.x()),
            indicator(self.y() < other.y()),
            indicator(self.z() < other.z()),
        )
    }

    /// Tests same-indexed component pairs with `>`.
    #[must_use]
    pub fn gt_elementwise(&self, other: &Self) -> Self {
        Self::new(
            indicator(self.x() > other.x()),
            indicator(self.y() > other.y()),
            indicator(self.z() > other.z()),
        )
    }

    /// Elementwise logical and.
    ///
    /// A component is truthy when it is not `T::zero()`; the result packs
    /// the per-component conjunctions as 1/0 in `T`. The `&` operator is
    /// sugar for this method.
    ///
    /// # Example
    ///
    /// ```
    /// use vector_types::Vector3;
    ///
    /// let a = Vector3::new(1.0, 0.0, 2.0);
    /// let b = Vector3::new(3.0, 4.0, 0.0);
    /// assert_eq!(a.elementwise_and(&b), Vector3::new(1.0, 0.0, 0.0));
    /// ```
    #[must_use]
    pub fn elementwise_and(&self, other: &Self) -> Self {
        Self::new(
            indicator(!self.x().is_zero() && !other.x().is_zero()),
            indicator(!self.y().is_zero() && !other.y().is_zero()),
            indicator(!self.z().is_zero() && !other.z().is_zero()),
        )
    }

    /// Elementwise logical or.
    ///
    /// Truthiness as for [`elementwise_and`](Self::elementwise_and). The
    /// `|` operator is sugar for this method.
    #[must_use]
    pub fn elementwise_or(&self, other: &Self) -> Self {
        Self::new(
            indicator(!self.x().is_zero() || !other.x().is_zero()),
            indicator(!self.y().is_zero() || !other.y().is_zero()),
            indicator(!self.z().is_zero() || !other.z().is_zero()),
        )
    }
}

//! The three-component vector type.

use crate::error::VectorError;
use crate::traits::Scalar;
use crate::Result;

/// A fixed-arity three-component vector, generic over its element type.
///
/// `Vector3` is a plain value type: copying an instance produces a fully
/// independent instance with no shared backing storage. Components are
/// addressed by index `0`, `1`, `2` (x, y, z).
///
/// Equality is exact, component by component. No tolerance is applied, so
/// floating-point results of [`normalize`](Self::normalize) or
/// [`cross`](Self::cross) compared with `==` can spuriously fail; use a
/// relative comparison when that matters.
///
/// # Example
///
/// ```
/// use vector_types::Vector3;
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.sum(), 6.0);
///
/// let mut unit = Vector3::new(2.0, 0.0, 0.0);
/// unit.normalize();
/// assert_eq!(unit, Vector3::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<T> {
    components: [T; 3],
}

impl<T: Scalar> Vector3<T> {
    /// Creates a vector from explicit x, y, z components.
    ///
    /// # Example
    ///
    /// ```
    /// use vector_types::Vector3;
    ///
    /// let v = Vector3::new(1, 2, 3);
    /// assert_eq!(v.as_array(), [1, 2, 3]);
    /// ```
    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self {
            components: [x, y, z],
        }
    }

    /// Creates a vector with all components set to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use vector_types::Vector3;
    ///
    /// let v: Vector3<f64> = Vector3::zeros();
    /// assert_eq!(v, Vector3::new(0.0, 0.0, 0.0));
    /// ```
    #[must_use]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// X component (index 0).
    #[must_use]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// Y component (index 1).
    #[must_use]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// Z component (index 2).
    #[must_use]
    pub fn z(&self) -> T {
        self.components[2]
    }

    /// Returns the components as an array.
    #[must_use]
    pub fn as_array(self) -> [T; 3] {
        self.components
    }

    /// Returns a mutable view of the components.
    ///
    /// The view aliases the vector's own storage and is valid for as long
    /// as the borrow lasts; the storage never moves or reallocates.
    #[must_use]
    pub fn as_mut_array(&mut self) -> &mut [T; 3] {
        &mut self.components
    }

    /// Returns the component at `index`, or an error for indices above 2.
    ///
    /// The [`Index`](std::ops::Index) operator is the panicking
    /// alternative.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfBounds`] if `index > 2`.
    pub fn try_get(&self, index: usize) -> Result<T> {
        self.components
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfBounds { index })
    }

    /// Overwrites the component at `index`, or returns an error for
    /// indices above 2.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfBounds`] if `index > 2`.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<()> {
        match self.components.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VectorError::IndexOutOfBounds { index }),
        }
    }

    /// Sets all components to zero, returning `&mut self` for chaining.
    pub fn zero(&mut self) -> &mut Self {
        self.components = [T::zero(); 3];
        self
    }

    /// Overwrites all three components, returning `&mut self` for chaining.
    ///
    /// # Example
    ///
    /// ```
    /// use vector_types::Vector3;
    ///
    /// let mut v = Vector3::zeros();
    /// v.set(1.0, 2.0, 3.0);
    /// assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn set(&mut self, x: T, y: T, z: T) -> &mut Self {
        self.components = [x, y, z];
        self
    }

    /// Scales the vector to unit norm in place, returning `&mut self` for
    /// chaining.
    ///
    /// A zero vector is left unchanged. This is deliberate, not an error:
    /// there is no direction to preserve.
    ///
    /// # Example
    ///
    /// ```
    /// use vector_types::Vector3;
    ///
    /// let mut v = Vector3::new(2.0, 0.0, 0.0);
    /// v.normalize();
    /// assert_eq!(v, Vector3::new(1.0, 0.0, 0.0));
    ///
    /// let mut zero: Vector3<f64> = Vector3::zeros();
    /// zero.normalize();
    /// assert_eq!(zero, Vector3::zeros());
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let n = self.norm();
        if !n.is_zero() {
            for c in &mut self.components {
                *c = *c / n;
            }
        }
        self
    }

    /// Sum of the three components.
    #[must_use]
    pub fn sum(&self) -> T {
        self.components[0] + self.components[1] + self.components[2]
    }

    /// Dot (inner) product with another vector. Commutative.
    ///
    /// # Example
    ///
    /// ```
    /// use vector_types::Vector3;
    ///
    /// let a = Vector3::new(1.0, 1.0, 0.0);
    /// let b = Vector3::new(1.0, 0.0, 1.0);
    /// assert_eq!(a.dot(&b), 1.0);
    /// ```
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.components[0] * other.components[0]
            + self.components[1] * other.components[1]
            + self.components[2] * other.components[2]
    }

    /// Right-handed cross product with another vector.
    ///
    /// Anti-commutative: `a.cross(&b) == -b.cross(&a)`. The result is
    /// orthogonal to both operands.
    ///
    /// # Example
    ///
    /// ```
    /// use vector_types::Vector3;
    ///
    /// let x = Vector3::new(1.0, 0.0, 0.0);
    /// let y = Vector3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
    /// ```
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        let a = &self.components;
        let b = &other.components;
        Self::new(
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        )
    }

    /// Euclidean norm, `sqrt(dot(self, self))`, cast back into `T`.
    ///
    /// For integral element types the root truncates, so the norm of an
    /// integral vector is lossy.
    #[must_use]
    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Returns a new vector with each component replaced by its absolute
    /// value. Does not mutate the receiver.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(
            self.components[0].abs(),
            self.components[1].abs(),
            self.components[2].abs(),
        )
    }
}

impl<T> Vector3<T> {
    pub(crate) fn components(&self) -> &[T; 3] {
        &self.components
    }

    pub(crate) fn components_mut(&mut self) -> &mut [T; 3] {
        &mut self.components
    }
}

impl<T: Scalar> Default for Vector3<T> {
    fn default() -> Self {
        Self::zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_zero() {
        let v: Vector3<f64> = Vector3::default();
        assert_eq!(v[0], 0.0);
        assert_eq!(v[1], 0.0);
        assert_eq!(v[2], 0.0);
    }

    #[test]
    fn test_new_orders_components() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
    }

    #[test]
    fn test_copy_independence() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let mut v2 = v1;
        v2.set(9.0, 9.0, 9.0);
        assert_eq!(v1, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v2, Vector3::new(9.0, 9.0, 9.0));
    }

    #[test]
    fn test_zero_and_set_chain() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.zero();
        assert_eq!(v, Vector3::zeros());

        v.set(1.0, 2.0, 3.0).zero().set(4.0, 5.0, 6.0);
        assert_eq!(v, Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_normalize() {
        let mut v = Vector3::new(2.0, 0.0, 0.0);
        v.normalize();
        assert_eq!(v, Vector3::new(1.0, 0.0, 0.0));

        let mut v = Vector3::new(1.0, 2.0, 2.0);
        v.normalize();
        assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v[0], 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector_is_noop() {
        let mut v: Vector3<f64> = Vector3::zeros();
        v.normalize();
        assert_eq!(v, Vector3::zeros());
    }

    #[test]
    fn test_norm() {
        assert_eq!(Vector3::new(2.0, 0.0, 0.0).norm(), 2.0);
        assert_eq!(Vector3::new(2.0, 3.0, 6.0).norm(), 7.0);
    }

    #[test]
    fn test_norm_integral_truncates() {
        // sqrt(1 + 4 + 9) = sqrt(14) ~ 3.74
        assert_eq!(Vector3::new(1_i32, 2, 3).norm(), 3);
        assert_eq!(Vector3::new(2_i64, 0, 0).norm(), 2);
    }

    #[test]
    fn test_normalize_integral() {
        let mut v = Vector3::new(2_i32, 0, 0);
        v.normalize();
        assert_eq!(v, Vector3::new(1, 0, 0));
    }

    #[test]
    fn test_sum() {
        assert_eq!(Vector3::new(1.0, 2.0, 3.0).sum(), 6.0);
        assert_eq!(Vector3::new(-1, 5, -4).sum(), 0);
    }

    #[test]
    fn test_dot() {
        let a = Vector3::new(1.0, 1.0, 0.0);
        let b = Vector3::new(1.0, 0.0, 1.0);
        assert_eq!(a.dot(&b), 1.0);
        assert_eq!(b.dot(&a), 1.0);
    }

    #[test]
    fn test_cross() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_abs() {
        let v = Vector3::new(-1.0, -2.0, -3.0);
        assert_eq!(v.abs(), Vector3::new(1.0, 2.0, 3.0));
        // receiver is untouched
        assert_eq!(v, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_try_get() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.try_get(0), Ok(1.0));
        assert_eq!(v.try_get(2), Ok(3.0));
        assert!(v
            .try_get(3)
            .is_err_and(|e| e.is_index_out_of_bounds()));
    }

    #[test]
    fn test_try_set() {
        let mut v = Vector3::zeros();
        assert!(v.try_set(1, 5.0).is_ok());
        assert_eq!(v, Vector3::new(0.0, 5.0, 0.0));
        assert_eq!(
            v.try_set(4, 1.0),
            Err(VectorError::IndexOutOfBounds { index: 4 })
        );
    }

    #[test]
    fn test_array_views() {
        let mut v = Vector3::new(1, 2, 3);
        assert_eq!(v.as_array(), [1, 2, 3]);

        v.as_mut_array()[2] = 9;
        assert_eq!(v, Vector3::new(1, 2, 9));
    }
}

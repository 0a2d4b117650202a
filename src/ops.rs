//! Operator surface for [`Vector3`].
//!
//! The binary operators are defined in terms of the compound assignments
//! applied to a copy, so both forms share the same per-component semantics.
//!
//! Two-vector `*` is the **dot product** and returns a scalar; the
//! elementwise (Hadamard) product exists only as `*=`. Two-vector `^` is
//! the cross product. `&` and `|` are sugar for the elementwise logic
//! methods.

use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg,
    Sub, SubAssign,
};

use crate::traits::Scalar;
use crate::vector::Vector3;

// Indexed access. Out-of-range indices are a contract violation, not a
// recoverable error; `try_get`/`try_set` are the checked alternatives.

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index > 2`.
    fn index(&self, index: usize) -> &T {
        &self.components()[index]
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    /// # Panics
    ///
    /// Panics if `index > 2`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components_mut()[index]
    }
}

// Compound scalar assignment: the scalar is applied to each component.

impl<T: Scalar> AddAssign<T> for Vector3<T> {
    fn add_assign(&mut self, rhs: T) {
        for c in self.components_mut() {
            *c = *c + rhs;
        }
    }
}

impl<T: Scalar> SubAssign<T> for Vector3<T> {
    fn sub_assign(&mut self, rhs: T) {
        for c in self.components_mut() {
            *c = *c - rhs;
        }
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        for c in self.components_mut() {
            *c = *c * rhs;
        }
    }
}

impl<T: Scalar> DivAssign<T> for Vector3<T> {
    /// Division by a zero scalar follows `T`'s own division semantics
    /// (infinity/NaN for floats, a panic for integers); it is not guarded.
    fn div_assign(&mut self, rhs: T) {
        for c in self.components_mut() {
            *c = *c / rhs;
        }
    }
}

// Compound vector assignment: elementwise, pairing components by index.
// `*=` and `/=` are Hadamard operations, not the dot product.

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        for (c, r) in self.components_mut().iter_mut().zip(rhs.as_array()) {
            *c = *c + r;
        }
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        for (c, r) in self.components_mut().iter_mut().zip(rhs.as_array()) {
            *c = *c - r;
        }
    }
}

impl<T: Scalar> MulAssign for Vector3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        for (c, r) in self.components_mut().iter_mut().zip(rhs.as_array()) {
            *c = *c * r;
        }
    }
}

impl<T: Scalar> DivAssign for Vector3<T> {
    fn div_assign(&mut self, rhs: Self) {
        for (c, r) in self.components_mut().iter_mut().zip(rhs.as_array()) {
            *c = *c / r;
        }
    }
}

// Binary scalar operators, built atop the compound assignments.

impl<T: Scalar> Add<T> for Vector3<T> {
    type Output = Self;

    fn add(mut self, rhs: T) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar> Sub<T> for Vector3<T> {
    type Output = Self;

    fn sub(mut self, rhs: T) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

// Binary vector operators.

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

/// Two-vector `*` is the dot product and yields a scalar. The elementwise
/// product is only available through `*=`.
impl<T: Scalar> Mul for Vector3<T> {
    type Output = T;

    fn mul(self, rhs: Self) -> T {
        self.dot(&rhs)
    }
}

/// Two-vector `^` is the cross product.
impl<T: Scalar> BitXor for Vector3<T> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.cross(&rhs)
    }
}

/// Sugar for [`Vector3::elementwise_and`].
impl<T: Scalar> BitAnd for Vector3<T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.elementwise_and(&rhs)
    }
}

/// Sugar for [`Vector3::elementwise_or`].
impl<T: Scalar> BitOr for Vector3<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.elementwise_or(&rhs)
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.components();
        write!(f, "[{x} {y} {z}]")
    }
}

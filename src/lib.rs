//! Generic three-component vector type for geometric and numeric computation.
//!
//! This crate provides [`Vector3`], a fixed-arity numeric vector intended as
//! a low-level building block for physics, graphics, and simulation code:
//!
//! - **Construction**: zero, explicit x/y/z, plain value copies
//! - **Mutation**: in-place `zero`, `set`, `normalize`, compound assignment
//! - **Geometry**: dot product, cross product, norm, elementwise `abs`
//! - **Comparison**: elementwise predicate maps and exact equality
//! - **Operators**: scalar and elementwise `+ - * /`, dot via `*`,
//!   cross via `^`, elementwise logic via `&`/`|`
//!
//! The element type is any [`Scalar`]: a signed numeric type with ordinary
//! arithmetic, ordering, and zero/one construction. `f32`, `f64`, and the
//! signed integers all qualify.
//!
//! # Example
//!
//! ```
//! use vector_types::Vector3;
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//!
//! // Dot product via `*`, cross product via `^`
//! assert_eq!(a * b, 0.0);
//! assert_eq!(a ^ b, Vector3::new(0.0, 0.0, 1.0));
//!
//! // In-place mutation chains
//! let mut v = Vector3::zeros();
//! v.set(3.0, 0.0, 4.0).normalize();
//! assert_eq!(v, Vector3::new(0.6, 0.0, 0.8));
//! ```
//!
//! # Semantics worth knowing
//!
//! - Two-vector `*` is the **dot product** (a scalar); the elementwise
//!   product is spelled `*=`.
//! - Equality is exact, component by component. No epsilon is applied, so
//!   `==` on results of `normalize` or `cross` can spuriously fail; reach
//!   for a relative comparison when that matters.
//! - `normalize` on a zero vector is a deliberate no-op.
//! - Indexing past 2 panics; `try_get`/`try_set` return a typed
//!   [`VectorError`] instead.
//!
//! # Layer 0 Crate
//!
//! This crate has no engine or framework dependencies. It can be used in
//! CLI tools, web applications (WASM), servers, and embedded systems.

#![doc(html_root_url = "https://docs.rs/vector-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::return_self_not_must_use,
    clippy::suspicious_arithmetic_impl,
    clippy::suspicious_op_assign_impl,
    clippy::bool_to_int_with_if
)]

mod compare;
mod error;
mod ops;
mod traits;
mod vector;

pub use error::VectorError;
pub use traits::Scalar;
pub use vector::Vector3;

/// Result type for vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;

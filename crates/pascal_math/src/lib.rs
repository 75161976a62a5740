//! Pure combinatorics helpers behind the Pascal's-triangle walkthrough.
//!
//! Everything here is stateless: closed-form coefficients in
//! [`combinatorics`], enumeration of k-combinations in [`choose`]. The
//! triangle builder itself lives in the `pascal_triangle` crate and does not
//! depend on this one at runtime.

pub mod choose;
pub mod combinatorics;

pub use choose::{combinations, Combinations};
pub use combinatorics::{binomial, factorial};

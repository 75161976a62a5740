//! Incremental Pascal's-triangle builder for didactic animation.
//!
//! [`TriangleBuilder`] grows the triangle row by row with the addition rule,
//! places cells geometrically (each cell midway below its two parents), and
//! tracks a single focused row with snapshot restoration so a presentation
//! layer can isolate a row and later put it back exactly where it was.
//!
//! The builder is single-threaded and purely in-memory. Cell values are
//! arbitrary-precision, so there is no ceiling on the number of rows.

pub mod error;
pub mod focus;
pub mod layout;
pub mod triangle;

pub use error::{Result, TriangleError};
pub use focus::FocusState;
pub use layout::{Layout, Position};
pub use triangle::{Cell, Row, TriangleBuilder};

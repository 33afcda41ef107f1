//! Row and column vector types.
//!
//! Both are the same `Vector<O>` container tagged with a zero-sized
//! orientation marker, so norm and dot product are written once while each
//! orientation keeps its own construction rules.
pub mod vector;

pub use vector::{Column, ColumnVector, Orientation, Row, RowVector, Vector};

//! smallest-linear-algebra: row and column vector primitives.
//!
//! This crate provides two small vector types ([`RowVector`] and
//! [`ColumnVector`]) and a set of pure operations over them: addition, scalar
//! multiplication, dot product, angle between two vectors and the 2D/3D cross
//! product.
//!
//! Every fallible operation returns [`error::Result`]; nothing in the crate
//! terminates the process or hands back a sentinel value.
//!
//! ```
//! use smallest_linear_algebra::{operations, ColumnVector, RowVector};
//!
//! let a = RowVector::new(vec![1, 2, 3]).unwrap();
//! let b = RowVector::new(vec![4, 5, 6]).unwrap();
//! assert_eq!(operations::row_dot_product(&a, &b).unwrap(), 32.0);
//!
//! let x = ColumnVector::new([[1.0], [0.0], [0.0]]).unwrap();
//! let y = ColumnVector::new([[0.0], [1.0], [0.0]]).unwrap();
//! let z = operations::cross_product(&x, &y).unwrap();
//! assert_eq!(z.element_wise(), &[0.0, 0.0, 1.0]);
//! ```
pub mod config;
pub mod error;
pub mod math;
pub mod operations;

pub use config::{CrossProductConvention, OpsConfig};
pub use error::{Result, VectorError};
pub use math::{Column, ColumnVector, Orientation, Row, RowVector, Vector};

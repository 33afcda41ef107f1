//! Free functions over row and column vectors.
//!
//! Every function is pure: inputs are borrowed, results are new vectors or
//! scalars. Operations that need matching dimensions return
//! [`VectorError::DimensionMismatch`] instead of truncating to the shorter
//! operand.

use std::f64::consts::PI;

use crate::config::{CrossProductConvention, OpsConfig};
use crate::error::{Result, VectorError};
use crate::math::{ColumnVector, Orientation, RowVector, Vector};

fn rejected(op: &str, err: VectorError) -> VectorError {
    log::debug!("{} rejected: {}", op, err);
    err
}

fn add<O: Orientation>(op: &str, a: &Vector<O>, b: &Vector<O>) -> Result<Vector<O>> {
    log::trace!("{} ({}): {} + {}", op, O::NAME, a.dimension(), b.dimension());
    a.checked_add(b).map_err(|e| rejected(op, e))
}

fn dot<O: Orientation>(op: &str, a: &Vector<O>, b: &Vector<O>) -> Result<f64> {
    log::trace!("{} ({}): {} . {}", op, O::NAME, a.dimension(), b.dimension());
    a.dot(b).map_err(|e| rejected(op, e))
}

/// Angle in degrees. The cosine is clamped into `[-1, 1]` so rounding on
/// (anti)parallel inputs cannot push `acos` out of its domain. Infinite
/// components or squares that overflow are rejected before the division.
fn angle_between<O: Orientation>(
    op: &str,
    a: &Vector<O>,
    b: &Vector<O>,
    config: &OpsConfig,
) -> Result<f64> {
    let dot = dot(op, a, b)?;
    let (norm_a, norm_b) = (a.norm(), b.norm());
    for norm in [norm_a, norm_b] {
        if config.is_degenerate(norm) {
            return Err(rejected(op, VectorError::DegenerateVector { norm }));
        }
    }
    let denominator = norm_a * norm_b;
    for value in [dot, denominator] {
        if !value.is_finite() {
            return Err(rejected(op, VectorError::NonFiniteMagnitude { value }));
        }
    }
    let cos_theta = (dot / denominator).clamp(-1.0, 1.0);
    Ok(cos_theta.acos() * (180.0 / PI))
}

// ---------------------------------------------------------------------------
// Row vectors
// ---------------------------------------------------------------------------

pub fn row_addition(a: &RowVector, b: &RowVector) -> Result<RowVector> {
    add("row_addition", a, b)
}

pub fn row_scalar_multiplication(scalar: f64, vector: &RowVector) -> RowVector {
    vector.scale(scalar)
}

pub fn row_dot_product(a: &RowVector, b: &RowVector) -> Result<f64> {
    dot("row_dot_product", a, b)
}

/// Angle between two row vectors, in degrees.
///
/// # Errors
///
/// [`VectorError::DimensionMismatch`] when the dimensions differ,
/// [`VectorError::DegenerateVector`] when either norm is zero and
/// [`VectorError::NonFiniteMagnitude`] when the dot product or the norm
/// product is not finite.
pub fn row_angle(a: &RowVector, b: &RowVector) -> Result<f64> {
    row_angle_with(a, b, &OpsConfig::default())
}

pub fn row_angle_with(a: &RowVector, b: &RowVector, config: &OpsConfig) -> Result<f64> {
    angle_between("row_angle", a, b, config)
}

// ---------------------------------------------------------------------------
// Column vectors
// ---------------------------------------------------------------------------

pub fn addition(a: &ColumnVector, b: &ColumnVector) -> Result<ColumnVector> {
    add("addition", a, b)
}

pub fn scalar_multiplication(scalar: f64, vector: &ColumnVector) -> ColumnVector {
    vector.scale(scalar)
}

pub fn dot_product(a: &ColumnVector, b: &ColumnVector) -> Result<f64> {
    dot("dot_product", a, b)
}

/// Angle between two column vectors, in degrees. Fails like [`row_angle`].
pub fn angle(a: &ColumnVector, b: &ColumnVector) -> Result<f64> {
    angle_with(a, b, &OpsConfig::default())
}

pub fn angle_with(a: &ColumnVector, b: &ColumnVector, config: &OpsConfig) -> Result<f64> {
    angle_between("angle", a, b, config)
}

/// Cross product of two column vectors using the standard sign convention.
///
/// Two 2D operands give the scalar `a0*b1 - a1*b0` as a one-row column; two 3D
/// operands give the usual 3D cross product.
///
/// # Errors
///
/// [`VectorError::DimensionMismatch`] when the operands differ in dimension,
/// [`VectorError::UnsupportedDimension`] for any shared dimension other than 2
/// or 3.
pub fn cross_product(a: &ColumnVector, b: &ColumnVector) -> Result<ColumnVector> {
    cross_product_with(a, b, &OpsConfig::default())
}

/// Cross product honouring `config.cross_product` for the second 3D component.
pub fn cross_product_with(
    a: &ColumnVector,
    b: &ColumnVector,
    config: &OpsConfig,
) -> Result<ColumnVector> {
    log::trace!("cross_product: {} x {}", a.dimension(), b.dimension());
    a.ensure_same_dimension(b)
        .map_err(|e| rejected("cross_product", e))?;

    let (a, b) = (a.element_wise(), b.element_wise());
    match a.len() {
        2 => Ok(ColumnVector::from_raw(vec![a[0] * b[1] - a[1] * b[0]])),
        3 => {
            let second = match config.cross_product {
                CrossProductConvention::Standard => a[2] * b[0] - a[0] * b[2],
                CrossProductConvention::Legacy => a[0] * b[2] - a[2] * b[0],
            };
            Ok(ColumnVector::from_raw(vec![
                a[1] * b[2] - a[2] * b[1],
                second,
                a[0] * b[1] - a[1] * b[0],
            ]))
        }
        dimension => Err(rejected(
            "cross_product",
            VectorError::UnsupportedDimension { dimension },
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(values: &[f64]) -> ColumnVector {
        ColumnVector::from_elements(values.iter().copied()).unwrap()
    }

    #[test]
    fn test_row_addition_rejects_mismatch() {
        let a = RowVector::new(vec![1.0, 2.0, 3.0]).unwrap();
        let b = RowVector::new(vec![1.0, 2.0]).unwrap();
        assert_eq!(
            row_addition(&a, &b),
            Err(VectorError::DimensionMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn test_row_dot_product() {
        let a = RowVector::new(vec![1, 2, 3]).unwrap();
        let b = RowVector::new(vec![4, 5, 6]).unwrap();
        assert_eq!(row_dot_product(&a, &b).unwrap(), 32.0);
    }

    #[test]
    fn test_right_angle() {
        let a = col(&[1.0, 0.0]);
        let b = col(&[0.0, 2.0]);
        assert!((angle(&a, &b).unwrap() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_opposite_angle_stays_in_domain() {
        let a = col(&[0.1, 0.2, 0.3]);
        let b = scalar_multiplication(-3.0, &a);
        let theta = angle(&a, &b).unwrap();
        assert!((theta - 180.0).abs() < 1e-5, "theta = {}", theta);
    }

    #[test]
    fn test_angle_degenerate() {
        let a = col(&[0.0, 0.0]);
        let b = col(&[1.0, 1.0]);
        assert_eq!(
            angle(&a, &b),
            Err(VectorError::DegenerateVector { norm: 0.0 })
        );
    }

    #[test]
    fn test_angle_tolerance() {
        let a = col(&[1e-12, 0.0]);
        let b = col(&[1.0, 0.0]);
        assert!(angle(&a, &b).is_ok());
        let cfg = OpsConfig::new(CrossProductConvention::Standard, 1e-9);
        assert!(matches!(
            angle_with(&a, &b, &cfg),
            Err(VectorError::DegenerateVector { .. })
        ));
    }

    #[test]
    fn test_angle_overflowing_norm() {
        let a = RowVector::new(vec![1e200, 1e200]).unwrap();
        assert_eq!(
            row_angle(&a, &a),
            Err(VectorError::NonFiniteMagnitude {
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_angle_infinite_component() {
        let a = col(&[f64::INFINITY, 0.0]);
        let e1 = col(&[1.0, 0.0]);
        let err = angle(&a, &e1).unwrap_err();
        assert!(matches!(err, VectorError::NonFiniteMagnitude { .. }));
        let err = angle(&e1, &a).unwrap_err();
        assert!(matches!(err, VectorError::NonFiniteMagnitude { .. }));
    }

    #[test]
    fn test_cross_2d() {
        let c = cross_product(&col(&[1.0, 2.0]), &col(&[3.0, 4.0])).unwrap();
        assert_eq!(c.element_wise(), &[-2.0]);
    }

    #[test]
    fn test_cross_3d_conventions() {
        let a = col(&[1.0, 2.0, 3.0]);
        let b = col(&[4.0, 5.0, 6.0]);
        let standard = cross_product(&a, &b).unwrap();
        assert_eq!(standard.element_wise(), &[-3.0, 6.0, -3.0]);

        let legacy_cfg = OpsConfig::new(CrossProductConvention::Legacy, 0.0);
        let legacy = cross_product_with(&a, &b, &legacy_cfg).unwrap();
        assert_eq!(legacy.element_wise(), &[-3.0, -6.0, -3.0]);
    }

    #[test]
    fn test_cross_unsupported_dimension() {
        let a = col(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            cross_product(&a, &a),
            Err(VectorError::UnsupportedDimension { dimension: 4 })
        );
        assert_eq!(
            cross_product(&col(&[1.0, 2.0]), &a),
            Err(VectorError::DimensionMismatch { left: 2, right: 4 })
        );
    }
}

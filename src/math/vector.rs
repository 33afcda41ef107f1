use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, Mul, Neg};
use std::slice::Iter;
use std::str::FromStr;

use num_traits::ToPrimitive;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, VectorError};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Row {}
    impl Sealed for super::Column {}
}

/// Marker for the layout a [`Vector`] was built with.
///
/// Only [`Row`] and [`Column`] implement it.
pub trait Orientation: sealed::Sealed + Copy + Default + fmt::Debug + PartialEq {
    /// Label used in log output.
    const NAME: &'static str;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Row;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Column;

impl Orientation for Row {
    const NAME: &'static str = "row";
}

impl Orientation for Column {
    const NAME: &'static str = "column";
}

/// A flat run of `f64` components tagged with its orientation.
///
/// Norm, dot product and element-wise arithmetic are shared by both
/// orientations; construction is specific to each, see [`RowVector::new`] and
/// [`ColumnVector::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<O: Orientation> {
    data: Vec<f64>,
    orientation: PhantomData<O>,
}

pub type RowVector = Vector<Row>;
pub type ColumnVector = Vector<Column>;

fn coerce<T: ToPrimitive>(position: usize, value: &T) -> Result<f64> {
    match value.to_f64() {
        Some(v) if v.is_nan() => Err(VectorError::InvalidInput {
            position,
            reason: "value is NaN".to_string(),
        }),
        Some(v) => Ok(v),
        None => Err(VectorError::InvalidInput {
            position,
            reason: "value is not representable as f64".to_string(),
        }),
    }
}

impl<O: Orientation> Vector<O> {
    pub(crate) fn from_raw(data: Vec<f64>) -> Self {
        Self {
            data,
            orientation: PhantomData,
        }
    }

    pub fn zeros(dimension: usize) -> Self {
        Self::from_raw(vec![0.0; dimension])
    }

    /// Number of scalar components.
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `(dimension, 1)` for both orientations.
    pub fn shape(&self) -> (usize, usize) {
        (self.dimension(), 1)
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn mapv<F>(&self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self::from_raw(self.data.iter().map(|&v| f(v)).collect())
    }

    /// Euclidean (L2) norm. Zero for the zero vector and the empty vector.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    pub(crate) fn ensure_same_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.ensure_same_dimension(other)?;
        Ok(self.data.iter().zip(other.data.iter()).map(|(a, b)| a * b).sum())
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_dimension(other)?;
        Ok(Self::from_raw(
            self.data.iter().zip(other.data.iter()).map(|(a, b)| a + b).collect(),
        ))
    }

    pub fn scale(&self, scalar: f64) -> Self {
        self.mapv(|v| scalar * v)
    }
}

impl RowVector {
    /// Build a row vector, converting every element to `f64`.
    ///
    /// Fails with [`VectorError::InvalidInput`] when an element has no `f64`
    /// representation or is NaN.
    pub fn new<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: ToPrimitive,
    {
        let data = values
            .into_iter()
            .enumerate()
            .map(|(idx, v)| coerce(idx, &v))
            .collect::<Result<Vec<f64>>>()?;
        Ok(Self::from_raw(data))
    }

    /// Build a row vector from textual numbers.
    pub fn parse<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = Vec::new();
        for (idx, token) in tokens.into_iter().enumerate() {
            let token = token.as_ref().trim();
            let value = token
                .parse::<f64>()
                .map_err(|_| VectorError::InvalidInput {
                    position: idx,
                    reason: format!("`{}` is not a number", token),
                })?;
            data.push(coerce(idx, &value)?);
        }
        Ok(Self::from_raw(data))
    }

    pub fn array(&self) -> &[f64] {
        &self.data
    }

    /// Same components, laid out as a column.
    pub fn transpose(&self) -> ColumnVector {
        ColumnVector::from_raw(self.data.clone())
    }
}

impl ColumnVector {
    /// Build a column vector from rows that each hold exactly one element.
    ///
    /// A row of any other length yields [`VectorError::InvalidShape`] for the
    /// first such row.
    pub fn new<I, R, T>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
        T: ToPrimitive,
    {
        let mut data = Vec::new();
        for (idx, row) in rows.into_iter().enumerate() {
            match row.as_ref() {
                [value] => data.push(coerce(idx, value)?),
                other => {
                    log::debug!(
                        "rejecting column vector: row {} has {} elements",
                        idx,
                        other.len()
                    );
                    return Err(VectorError::InvalidShape {
                        row: idx,
                        len: other.len(),
                    });
                }
            }
        }
        Ok(Self::from_raw(data))
    }

    /// Build a column vector from flat values, one per row.
    pub fn from_elements<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: ToPrimitive,
    {
        RowVector::new(values).map(|row| row.transpose())
    }

    /// Flat view of the column, one value per row.
    pub fn element_wise(&self) -> &[f64] {
        &self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = [f64; 1]> + '_ {
        self.data.iter().map(|&v| [v])
    }

    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.data.iter().map(|&v| vec![v]).collect()
    }

    /// Same components, laid out as a row.
    pub fn transpose(&self) -> RowVector {
        RowVector::from_raw(self.data.clone())
    }
}

impl FromStr for RowVector {
    type Err = VectorError;

    /// Accepts `1, 2, 3`, `1 2 3` or `[1, 2, 3]`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);
        RowVector::parse(
            inner
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty()),
        )
    }
}

impl<O: Orientation> Index<usize> for Vector<O> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a, O: Orientation> IntoIterator for &'a Vector<O> {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, O: Orientation> Neg for &'a Vector<O> {
    type Output = Vector<O>;

    fn neg(self) -> Self::Output {
        self.mapv(|v| -v)
    }
}

impl<'a, O: Orientation> Mul<f64> for &'a Vector<O> {
    type Output = Vector<O>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl From<RowVector> for Vec<f64> {
    fn from(value: RowVector) -> Self {
        value.data
    }
}

impl From<ColumnVector> for Vec<f64> {
    fn from(value: ColumnVector) -> Self {
        value.data
    }
}

impl fmt::Display for RowVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

impl fmt::Display for ColumnVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "[{}]", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

impl Serialize for RowVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RowVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        RowVector::new(values).map_err(D::Error::custom)
    }
}

impl Serialize for ColumnVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_nested().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ColumnVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        ColumnVector::new(rows).map_err(D::Error::custom)
    }
}

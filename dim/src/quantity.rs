/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::parser::{parse_quantity, parse_unit};

use super::dimension::Dimension;
use super::error::DimError;

/// A value expressed in SI base units, tagged with its dimension.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Quantity(pub f64, pub Dimension);

impl Quantity {
    /// Result of an invalid operation. Every operation on a bad
    /// quantity yields a bad quantity.
    pub const BAD: Self = Quantity(f64::NAN, Dimension::BAD);
    pub const ONE: Self = Quantity(1.0, Dimension::DIMENSIONLESS);

    pub const fn new(value: f64, dimension: Dimension) -> Self {
        Quantity(value, dimension)
    }

    /// Parse a value followed by a unit expression, e.g. `9.81 m/s^2`.
    pub fn parse(input: &str) -> Result<Self, DimError> {
        parse_quantity(input)
    }

    /// Parse a unit expression into the quantity one such unit
    /// represents.
    pub fn parse_unit(input: &str) -> Result<Self, DimError> {
        parse_unit(input)
    }

    /// Like `parse_unit`, but folds any failure into the bad sentinel.
    pub fn from_unit_str(input: &str) -> Self {
        parse_unit(input).unwrap_or_else(|e| {
            log::debug!("unit expression {:?} is invalid: {}", input, e);
            Self::BAD
        })
    }

    pub const fn from_dimension(dimension: Dimension) -> Self {
        Quantity(1.0, dimension)
    }

    pub const fn from_value(value: f64) -> Self {
        Quantity(value, Dimension::DIMENSIONLESS)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    pub const fn dimension(&self) -> Dimension {
        self.1
    }

    pub fn is_bad(&self) -> bool {
        self.0.is_nan() || self.1.is_bad()
    }

    /// Turn a bad or non-finite quantity into an error.
    pub fn checked(self) -> Result<Self, DimError> {
        match self.is_bad() || !self.0.is_finite() {
            true => Err(DimError::BadQuantity),
            false => Ok(self),
        }
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.1.is_dimensionless()
    }

    /// Reinterpret the value with another dimension.
    pub fn as_class(self, dimension: Dimension) -> Self {
        match self.is_bad() {
            true => Self::BAD,
            false => Quantity(self.0, dimension),
        }
    }

    pub fn powi(self, n: i32) -> Self {
        match self.is_bad() {
            true => Self::BAD,
            false => Quantity(self.0.powi(n), self.1.powi(n)),
        }
    }

    pub fn root(self, n: i32) -> Result<Self, DimError> {
        if self.is_bad() {
            return Ok(Self::BAD);
        }
        let dimension = self.1.root(n)?;
        let value = match n {
            2 => self.0.sqrt(),
            3 => self.0.cbrt(),
            _ => self.0.powf(1.0 / n as f64),
        };
        Ok(Quantity(value, dimension))
    }

    pub fn sqrt(self) -> Result<Self, DimError> {
        self.root(2)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::from_value(value)
    }
}

/// Quantities of different dimensions are unordered.
impl PartialOrd for Quantity {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        match self.1 == rhs.1 && !self.is_bad() && !rhs.is_bad() {
            true => self.0.partial_cmp(&rhs.0),
            false => None,
        }
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match (self.is_bad(), self.is_dimensionless()) {
            (true, _) => write!(f, "bad"),
            (false, true) => write!(f, "{}", self.0),
            (false, false) => write!(f, "{}_{}", self.0, self.1),
        }
    }
}

impl Add<Quantity> for Quantity {
    type Output = Quantity;
    fn add(self, rhs: Quantity) -> Quantity {
        match self.1 == rhs.1 && !self.is_bad() && !rhs.is_bad() {
            true => Quantity(self.0 + rhs.0, self.1),
            false => Quantity::BAD,
        }
    }
}

impl Sub<Quantity> for Quantity {
    type Output = Quantity;
    fn sub(self, rhs: Quantity) -> Quantity {
        match self.1 == rhs.1 && !self.is_bad() && !rhs.is_bad() {
            true => Quantity(self.0 - rhs.0, self.1),
            false => Quantity::BAD,
        }
    }
}

impl Mul<Quantity> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        match self.is_bad() || rhs.is_bad() {
            true => Quantity::BAD,
            false => Quantity(self.0 * rhs.0, self.1 * rhs.1),
        }
    }
}

impl Div<Quantity> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: Quantity) -> Quantity {
        match self.is_bad() || rhs.is_bad() {
            true => Quantity::BAD,
            false => Quantity(self.0 / rhs.0, self.1 / rhs.1),
        }
    }
}

impl Neg for Quantity {
    type Output = Quantity;
    fn neg(self) -> Quantity {
        Quantity(-self.0, self.1)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        Quantity(self.0 * rhs, self.1)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: f64) -> Quantity {
        Quantity(self.0 / rhs, self.1)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity(self * rhs.0, rhs.1)
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;
    fn div(self, rhs: Quantity) -> Quantity {
        Quantity(self / rhs.0, rhs.1.inverse())
    }
}

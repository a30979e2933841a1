/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DimError;
use super::parser::parse_unit;

/// The base dimensions. Every physical dimension is a product of
/// integer powers of these.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum BaseDimension {
    Length,
    Time,
    Mass,
    Angle,
    Temperature,
    Amount,
    Current,
    Luminosity,
}

/// Packing order: byte `i` of a dimension code holds the exponent of
/// `BASE_DIMENSIONS[i]`.
pub(crate) const BASE_DIMENSIONS: [BaseDimension; 8] = [
    BaseDimension::Length,
    BaseDimension::Time,
    BaseDimension::Mass,
    BaseDimension::Angle,
    BaseDimension::Temperature,
    BaseDimension::Amount,
    BaseDimension::Current,
    BaseDimension::Luminosity,
];

/// Order of the factors in a synthesized symbol.
pub(crate) const SYMBOL_ORDER: [BaseDimension; 8] = [
    BaseDimension::Angle,
    BaseDimension::Mass,
    BaseDimension::Length,
    BaseDimension::Temperature,
    BaseDimension::Amount,
    BaseDimension::Current,
    BaseDimension::Luminosity,
    BaseDimension::Time,
];

impl BaseDimension {
    pub const LIST: &[Self] = &BASE_DIMENSIONS;

    pub const fn shift(&self) -> u32 {
        8 * *self as u32
    }

    /// The symbol of the SI base unit for this dimension.
    pub const fn symbol(&self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Time => "s",
            BaseDimension::Mass => "kg",
            BaseDimension::Angle => "rad",
            BaseDimension::Temperature => "K",
            BaseDimension::Amount => "mol",
            BaseDimension::Current => "A",
            BaseDimension::Luminosity => "cd",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Time => "time",
            BaseDimension::Mass => "mass",
            BaseDimension::Angle => "angle",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Amount => "amount of substance",
            BaseDimension::Current => "current",
            BaseDimension::Luminosity => "luminous intensity",
        }
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A physical dimension: eight signed 8-bit exponents packed into one
/// 64-bit code, so that equality and ordering are plain integer
/// comparisons.
///
/// Exponent arithmetic wraps within each 8-bit slot. Dimensions with
/// exponents outside -128..=127 cannot be represented.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Copy, Debug)]
#[cfg_attr(
    not(feature = "serialize_as_string"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(
    feature = "serialize_as_string",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[cfg_attr(
    all(feature = "schemars", not(feature = "serialize_as_string")),
    derive(schemars::JsonSchema)
)]
pub struct Dimension(u64);

impl Dimension {
    pub const DIMENSIONLESS: Self = Dimension(0);
    /// Sentinel for the result of an invalid operation.
    pub const BAD: Self = Dimension(!0);

    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        length: i8,
        time: i8,
        mass: i8,
        angle: i8,
        temperature: i8,
        amount: i8,
        current: i8,
        luminosity: i8,
    ) -> Self {
        Self::from_exponents([
            length,
            time,
            mass,
            angle,
            temperature,
            amount,
            current,
            luminosity,
        ])
    }

    /// Build a dimension from exponents in packing order.
    pub const fn from_exponents(exponents: [i8; 8]) -> Self {
        let mut code = 0u64;
        let mut i = 0;
        while i < 8 {
            code |= (exponents[i] as u8 as u64) << (8 * i);
            i += 1;
        }
        Dimension(code)
    }

    /// The dimension with exponent 1 for `base` and 0 elsewhere.
    pub const fn base(base: BaseDimension) -> Self {
        Dimension(1 << base.shift())
    }

    pub const fn from_code(code: u64) -> Self {
        Dimension(code)
    }

    pub const fn code(&self) -> u64 {
        self.0
    }

    pub const fn exponents(&self) -> [i8; 8] {
        let mut exponents = [0i8; 8];
        let mut i = 0;
        while i < 8 {
            exponents[i] = (self.0 >> (8 * i)) as u8 as i8;
            i += 1;
        }
        exponents
    }

    pub const fn get(&self, base: BaseDimension) -> i8 {
        (self.0 >> base.shift()) as u8 as i8
    }

    pub fn set(&mut self, base: BaseDimension, exponent: i8) {
        let shift = base.shift();
        self.0 = (self.0 & !(0xff << shift))
            | ((exponent as u8 as u64) << shift);
    }

    pub const fn length(&self) -> i8 {
        self.get(BaseDimension::Length)
    }

    pub const fn time(&self) -> i8 {
        self.get(BaseDimension::Time)
    }

    pub const fn mass(&self) -> i8 {
        self.get(BaseDimension::Mass)
    }

    pub const fn angle(&self) -> i8 {
        self.get(BaseDimension::Angle)
    }

    pub const fn temperature(&self) -> i8 {
        self.get(BaseDimension::Temperature)
    }

    pub const fn amount(&self) -> i8 {
        self.get(BaseDimension::Amount)
    }

    pub const fn current(&self) -> i8 {
        self.get(BaseDimension::Current)
    }

    pub const fn luminosity(&self) -> i8 {
        self.get(BaseDimension::Luminosity)
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_bad(&self) -> bool {
        self.0 == Self::BAD.0
    }

    fn zip_with(self, rhs: Self, op: impl Fn(i8, i8) -> i8) -> Self {
        match self.is_bad() || rhs.is_bad() {
            true => Self::BAD,
            false => {
                let (a, b) = (self.exponents(), rhs.exponents());
                Self::from_exponents(std::array::from_fn(|i| op(a[i], b[i])))
            }
        }
    }

    fn map(self, op: impl Fn(i8) -> i8) -> Self {
        match self.is_bad() {
            true => Self::BAD,
            false => {
                let a = self.exponents();
                Self::from_exponents(std::array::from_fn(|i| op(a[i])))
            }
        }
    }

    /// Exponent-wise sum.
    pub fn multiply(self, rhs: Self) -> Self {
        self.zip_with(rhs, i8::wrapping_add)
    }

    /// Exponent-wise difference.
    pub fn divide(self, rhs: Self) -> Self {
        self.zip_with(rhs, i8::wrapping_sub)
    }

    pub fn inverse(self) -> Self {
        self.map(i8::wrapping_neg)
    }

    pub fn powi(self, n: i32) -> Self {
        self.map(|e| (e as i32).wrapping_mul(n) as i8)
    }

    /// The `n`-th root. Fails unless every exponent is divisible by `n`.
    pub fn root(self, n: i32) -> Result<Self, DimError> {
        if n == 0 {
            return Err(DimError::Divisibility(self, n));
        }
        if self.is_bad() {
            return Ok(Self::BAD);
        }
        match self.exponents().iter().all(|e| *e as i32 % n == 0) {
            true => Ok(self.map(|e| (e as i32 / n) as i8)),
            false => Err(DimError::Divisibility(self, n)),
        }
    }

    fn checked_zip(
        self,
        rhs: Self,
        op: impl Fn(i8, i8) -> Option<i8>,
    ) -> Option<Self> {
        if self.is_bad() || rhs.is_bad() {
            return Some(Self::BAD);
        }
        let (a, b) = (self.exponents(), rhs.exponents());
        let mut exponents = [0i8; 8];
        for (e, (x, y)) in exponents.iter_mut().zip(a.iter().zip(b.iter())) {
            *e = op(*x, *y)?;
        }
        Some(Self::from_exponents(exponents))
    }

    /// Like `multiply`, but `None` if an exponent leaves -128..=127.
    pub fn checked_multiply(self, rhs: Self) -> Option<Self> {
        self.checked_zip(rhs, i8::checked_add)
    }

    /// Like `divide`, but `None` if an exponent leaves -128..=127.
    pub fn checked_divide(self, rhs: Self) -> Option<Self> {
        self.checked_zip(rhs, i8::checked_sub)
    }

    /// Like `powi`, but `None` if an exponent leaves -128..=127.
    pub fn checked_powi(self, n: i32) -> Option<Self> {
        self.checked_zip(Self::DIMENSIONLESS, |e, _| {
            i8::try_from((e as i32).checked_mul(n)?).ok()
        })
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl From<BaseDimension> for Dimension {
    fn from(base: BaseDimension) -> Self {
        Self::base(base)
    }
}

impl Mul for Dimension {
    type Output = Dimension;
    fn mul(self, rhs: Dimension) -> Dimension {
        self.multiply(rhs)
    }
}

impl Div for Dimension {
    type Output = Dimension;
    fn div(self, rhs: Dimension) -> Dimension {
        self.divide(rhs)
    }
}

/// Renders the synthesized SI symbol, e.g. `kg_m_s^-2` for force.
/// Dimensionless renders as the empty string.
impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_bad() {
            return write!(f, "bad");
        }
        let mut sep = "";
        for base in SYMBOL_ORDER.iter() {
            match self.get(*base) {
                0 => continue,
                1 => write!(f, "{}{}", sep, base.symbol())?,
                n => write!(f, "{}{}^{}", sep, base.symbol(), n)?,
            }
            sep = "_";
        }
        Ok(())
    }
}

/// Parses a unit expression that carries no scale, such as `kg_m_s^-2`.
impl FromStr for Dimension {
    type Err = DimError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "bad" {
            return Ok(Self::BAD);
        }
        let q = parse_unit(s)?;
        match (q.0 - 1.0).abs() <= 1e-9 {
            true => Ok(q.1),
            false => Err(DimError::Grammar(format!(
                "{} is scaled by {}; expected a plain dimension",
                s, q.0
            ))),
        }
    }
}

#[cfg(all(feature = "schemars", feature = "serialize_as_string"))]
impl schemars::JsonSchema for Dimension {
    fn schema_name() -> String {
        String::from("Dimension")
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}

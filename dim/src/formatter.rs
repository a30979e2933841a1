/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::error::DimError;
use super::quantity::Quantity;

/// Maximum length of a format symbol, in bytes.
pub const MAX_SYMBOL: usize = 32;

/// An affine map between plain numbers and quantities of one dimension:
/// `quantity = value * scale + offset`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(try_from = "FormatterFields")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Formatter {
    symbol: String,
    scale: Quantity,
    offset: Quantity,
}

/// Unchecked serialized form of a [`Formatter`].
#[derive(Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
struct FormatterFields {
    symbol: String,
    scale: Quantity,
    offset: Quantity,
}

impl TryFrom<FormatterFields> for Formatter {
    type Error = DimError;
    fn try_from(fields: FormatterFields) -> Result<Self, Self::Error> {
        Self::new(&fields.symbol, fields.scale, Some(fields.offset))
    }
}

impl Formatter {
    /// Create a formatter. The offset defaults to zero and must have
    /// the dimension of the scale.
    pub fn new(
        symbol: &str,
        scale: Quantity,
        offset: Option<Quantity>,
    ) -> Result<Self, DimError> {
        check_symbol(symbol)?;
        if scale.is_bad() || scale.0 == 0.0 || !scale.0.is_finite() {
            return Err(DimError::BadQuantity);
        }
        let offset = offset.unwrap_or(Quantity(0.0, scale.1));
        if offset.is_bad() {
            return Err(DimError::BadQuantity);
        }
        if offset.1 != scale.1 {
            return Err(DimError::DimensionMismatch(scale.1, offset.1));
        }
        Ok(Self {
            symbol: symbol.to_string(),
            scale,
            offset,
        })
    }

    /// A formatter without offset.
    pub fn linear(symbol: &str, scale: Quantity) -> Result<Self, DimError> {
        Self::new(symbol, scale, None)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn scale(&self) -> Quantity {
        self.scale
    }

    pub fn offset(&self) -> Quantity {
        self.offset
    }

    /// The dimension this formatter handles.
    pub fn index(&self) -> Dimension {
        self.scale.1
    }

    /// Convert a number in this format to a quantity.
    pub fn input(&self, value: f64) -> Quantity {
        self.scale * value + self.offset
    }

    /// Convert a quantity to a plain number in this format. The
    /// result is NaN if the dimensions do not match.
    pub fn non_dim(&self, q: Quantity) -> f64 {
        let r = (q - self.offset) / self.scale;
        match r.is_dimensionless() && !r.is_bad() {
            true => r.0,
            false => f64::NAN,
        }
    }

    /// Convert a quantity to this format.
    pub fn output(&self, q: Quantity) -> Result<FormattedQuantity, DimError> {
        if q.is_bad() {
            return Err(DimError::BadQuantity);
        }
        if q.1 != self.index() {
            return Err(DimError::DimensionMismatch(self.index(), q.1));
        }
        Ok(FormattedQuantity {
            value: self.non_dim(q),
            symbol: self.symbol.clone(),
        })
    }
}

pub(crate) fn check_symbol(symbol: &str) -> Result<(), DimError> {
    match !symbol.is_empty() && symbol.len() <= MAX_SYMBOL {
        true => Ok(()),
        false => Err(DimError::InvalidSymbol(symbol.to_string())),
    }
}

/// A number together with the symbol of its format.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FormattedQuantity {
    pub value: f64,
    pub symbol: String,
}

impl FormattedQuantity {
    pub fn new(value: f64, symbol: impl Into<String>) -> Self {
        Self {
            value,
            symbol: symbol.into(),
        }
    }
}

impl Display for FormattedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.symbol.is_empty() {
            true => write!(f, "{}", self.value),
            false => write!(f, "{}_{}", self.value, self.symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormattedQuantity, Formatter};
    use crate::error::DimError;
    use crate::si::{self, units::*};
    use crate::Quantity;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn linear_format() {
        let inch = Formatter::linear("in", INCH).unwrap();
        assert_eq!(inch.index(), si::LENGTH);
        assert!(close(inch.input(5.0).0, 0.127));
        assert!(close(inch.non_dim(METER), 1.0 / 0.0254));
        assert_eq!(inch.output(INCH * 3.0).unwrap().symbol, "in");
    }

    #[test]
    fn affine_format() {
        let fahrenheit = Formatter::new(
            "F",
            RANKINE,
            Some(Quantity(459.67 * 5.0 / 9.0, si::TEMPERATURE)),
        )
        .unwrap();
        assert!(close(fahrenheit.input(32.0).0, 273.15));
        assert!(close(fahrenheit.input(212.0).0, 373.15));
        assert!(close(fahrenheit.non_dim(KELVIN * 373.15), 212.0));
    }

    #[test]
    fn mismatched_output() {
        let inch = Formatter::linear("in", INCH).unwrap();
        assert!(inch.non_dim(SECOND).is_nan());
        assert_eq!(
            inch.output(SECOND),
            Err(DimError::DimensionMismatch(si::LENGTH, si::TIME))
        );
        assert_eq!(inch.output(Quantity::BAD), Err(DimError::BadQuantity));
    }

    #[test]
    fn invalid_construction() {
        assert_eq!(
            Formatter::new("x", INCH, Some(SECOND)),
            Err(DimError::DimensionMismatch(si::LENGTH, si::TIME))
        );
        assert!(matches!(
            Formatter::linear("", INCH),
            Err(DimError::InvalidSymbol(_))
        ));
        assert!(matches!(
            Formatter::linear(&"x".repeat(33), INCH),
            Err(DimError::InvalidSymbol(_))
        ));
        assert!(Formatter::linear(&"x".repeat(32), INCH).is_ok());
        assert_eq!(
            Formatter::linear("z", METER * 0.0),
            Err(DimError::BadQuantity)
        );
    }

    #[test]
    fn deserialize_validates() {
        let double = Formatter::linear("dm2", METER * 2.0).unwrap();
        let json = serde_json::to_value(&double).unwrap();
        let back: Formatter = serde_json::from_value(json).unwrap();
        assert_eq!(back, double);

        for (symbol, scale, offset) in [
            ("x", METER * 0.0, Quantity(0.0, si::LENGTH)),
            ("", METER, Quantity(0.0, si::LENGTH)),
            ("x", METER, Quantity(1.0, si::TIME)),
            ("x", Quantity::BAD, Quantity(0.0, si::LENGTH)),
        ] {
            let json = serde_json::json!({
                "symbol": symbol,
                "scale": scale,
                "offset": offset,
            });
            assert!(
                serde_json::from_value::<Formatter>(json).is_err(),
                "{:?} {} {}",
                symbol,
                scale,
                offset
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(FormattedQuantity::new(5.0, "in").to_string(), "5_in");
        assert_eq!(FormattedQuantity::new(0.5, "").to_string(), "0.5");
    }
}

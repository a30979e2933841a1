/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};

use crate::format_map::{InputFormatMapGroup, OutputFormatMap};
use crate::formatter::{FormattedQuantity, Formatter};
use crate::parser::{parse_unit, split_value};
use crate::scanner::read_formatted;
use crate::si;

use super::{DimError, Dimension, Quantity};

/// Input and output formats for reading and writing quantities as
/// `<number> <symbol>` pairs.
///
/// Registration takes `&mut self`; share a registry between threads
/// behind a lock.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FormatRegistry {
    inputs: InputFormatMapGroup,
    outputs: OutputFormatMap,
}

impl FormatRegistry {
    /// A registry without any formats. Symbols are then read with the
    /// unit parser and written as synthesized SI symbols.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the SI default input and output formats.
    pub fn si() -> Self {
        let registry = Self {
            inputs: si::default_input_formats(),
            outputs: si::default_output_formats(),
        };
        log::debug!(
            "loaded {} input format classes and {} output formats",
            registry.inputs.len(),
            registry.outputs.len()
        );
        registry
    }

    pub fn input_formats(&self) -> &InputFormatMapGroup {
        &self.inputs
    }

    pub fn output_formats(&self) -> &OutputFormatMap {
        &self.outputs
    }

    /// Accept `symbol` on input for quantities of `class`: a value `v`
    /// reads as `v * scale + offset`.
    pub fn register_input_format(
        &mut self,
        class: Dimension,
        symbol: &str,
        scale: Quantity,
        offset: Option<Quantity>,
    ) -> Result<(), DimError> {
        let formatter = Self::formatter(class, symbol, scale, offset)?;
        log::debug!("registering input format {:?} for {}", symbol, class);
        self.inputs.insert(formatter)
    }

    /// Write quantities of `class` in the format given by `symbol`,
    /// replacing any previous output format for that class.
    pub fn register_output_format(
        &mut self,
        class: Dimension,
        symbol: &str,
        scale: Quantity,
        offset: Option<Quantity>,
    ) -> Result<(), DimError> {
        let formatter = Self::formatter(class, symbol, scale, offset)?;
        log::debug!("registering output format {:?} for {}", symbol, class);
        self.outputs.insert(formatter);
        Ok(())
    }

    fn formatter(
        class: Dimension,
        symbol: &str,
        scale: Quantity,
        offset: Option<Quantity>,
    ) -> Result<Formatter, DimError> {
        match scale.1 == class {
            true => Formatter::new(symbol, scale, offset),
            false => Err(DimError::DimensionMismatch(class, scale.1)),
        }
    }

    /// Drop the input and output formats of one class.
    pub fn clear_formats(&mut self, class: Dimension) {
        log::debug!("clearing formats for {}", class);
        self.inputs.erase(class);
        self.outputs.erase(class);
    }

    pub fn clear_all_formats(&mut self) {
        log::debug!("clearing all formats");
        self.inputs.clear();
        self.outputs.clear();
    }

    /// Express a quantity as a number and a symbol. Without an output
    /// format for its dimension, the value is kept in base units and
    /// the symbol is synthesized.
    pub fn format(&self, q: Quantity) -> Result<FormattedQuantity, DimError> {
        let q = q.checked()?;
        match self.outputs.get(q.1) {
            Some(formatter) => formatter.output(q),
            None => Ok(FormattedQuantity::new(q.0, q.1.to_string())),
        }
    }

    /// Interpret `value` in the format `symbol`, which must describe a
    /// quantity of `class`. Registered input formats for the class take
    /// precedence over the unit parser. NaN and infinite values are
    /// rejected.
    pub fn to_quantity(
        &self,
        value: f64,
        symbol: &str,
        class: Dimension,
    ) -> Result<Quantity, DimError> {
        if !value.is_finite() {
            return Err(DimError::BadQuantity);
        }
        if let Some(q) = self.inputs.to_quantity_as(class, value, symbol) {
            return q.checked();
        }
        let q = (parse_unit(symbol)? * value).checked()?;
        match q.1 == class {
            true => Ok(q),
            false => {
                log::debug!("{:?} is not a unit of {}", symbol, class);
                Err(DimError::DimensionMismatch(class, q.1))
            }
        }
    }

    /// Interpret `value` in the format `symbol`, whatever its class.
    /// All input formats are searched in dimension order before the
    /// unit parser is tried.
    pub fn to_dynamic_quantity(
        &self,
        value: f64,
        symbol: &str,
    ) -> Result<Quantity, DimError> {
        if !value.is_finite() {
            return Err(DimError::BadQuantity);
        }
        match self.inputs.to_quantity(value, symbol) {
            Some(q) => q.checked(),
            None => (parse_unit(symbol)? * value).checked(),
        }
    }

    /// Parse `<number> <symbol>`, where the symbol is everything after
    /// the number.
    pub fn parse(&self, text: &str) -> Result<Quantity, DimError> {
        let (value, symbol) = split_value(text)?;
        self.to_dynamic_quantity(value, symbol.trim())
    }

    /// Like `parse`, for a quantity of a known class.
    pub fn parse_as(
        &self,
        text: &str,
        class: Dimension,
    ) -> Result<Quantity, DimError> {
        let (value, symbol) = split_value(text)?;
        self.to_quantity(value, symbol.trim(), class)
    }

    /// Read one quantity from the start of a larger text and return the
    /// text that follows it.
    pub fn read<'a>(
        &self,
        text: &'a str,
    ) -> Result<(Quantity, &'a str), DimError> {
        let (formatted, rest) = read_formatted(text)?;
        let q = self.to_dynamic_quantity(formatted.value, &formatted.symbol)?;
        Ok((q, rest))
    }

    /// Format a quantity as `<number>_<symbol>`.
    pub fn format_to_string(&self, q: Quantity) -> Result<String, DimError> {
        self.format(q).map(|f| f.to_string())
    }
}

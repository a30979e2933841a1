/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::error::DimError;
use super::formatter::{FormattedQuantity, Formatter};
use super::quantity::Quantity;
use super::table::SortedTable;

/// Input formats for one quantity class, keyed by symbol.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(try_from = "InputFormatMapFields")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct InputFormatMap {
    index: Dimension,
    formats: SortedTable<String, Formatter>,
}

#[derive(Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
struct InputFormatMapFields {
    index: Dimension,
    formats: SortedTable<String, Formatter>,
}

/// Every formatter must be stored under its own symbol and belong to
/// the map's dimension.
impl TryFrom<InputFormatMapFields> for InputFormatMap {
    type Error = DimError;
    fn try_from(fields: InputFormatMapFields) -> Result<Self, Self::Error> {
        for (symbol, formatter) in fields.formats.iter() {
            if symbol != formatter.symbol() {
                return Err(DimError::InvalidSymbol(symbol.clone()));
            }
            if formatter.index() != fields.index {
                return Err(DimError::DimensionMismatch(
                    fields.index,
                    formatter.index(),
                ));
            }
        }
        Ok(Self {
            index: fields.index,
            formats: fields.formats,
        })
    }
}

impl InputFormatMap {
    pub fn new(index: Dimension) -> Self {
        Self {
            index,
            formats: SortedTable::new(),
        }
    }

    /// Build a map in one go. Formatters for another dimension are
    /// skipped with a warning.
    pub fn with_formats<I>(index: Dimension, formats: I) -> Self
    where
        I: IntoIterator<Item = Formatter>,
    {
        Self {
            index,
            formats: formats
                .into_iter()
                .filter(|f| match f.index() == index {
                    true => true,
                    false => {
                        log::warn!(
                            "skipping input format {:?}: dimension {} \
                             does not belong in a map for {}",
                            f.symbol(),
                            f.index(),
                            index
                        );
                        false
                    }
                })
                .map(|f| (f.symbol().to_string(), f))
                .collect(),
        }
    }

    pub fn index(&self) -> Dimension {
        self.index
    }

    /// Add or replace the formatter for its symbol.
    pub fn insert(&mut self, formatter: Formatter) -> Result<(), DimError> {
        if formatter.index() != self.index {
            return Err(DimError::DimensionMismatch(
                self.index,
                formatter.index(),
            ));
        }
        self.formats
            .insert(formatter.symbol().to_string(), formatter);
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<&Formatter> {
        self.formats.get(symbol)
    }

    pub fn to_quantity(&self, value: f64, symbol: &str) -> Option<Quantity> {
        self.get(symbol).map(|f| f.input(value))
    }

    pub fn erase(&mut self, symbol: &str) -> bool {
        self.formats.remove(symbol).is_some()
    }

    pub fn clear(&mut self) {
        self.formats.clear()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Formatter> {
        self.formats.values()
    }
}

/// Input formats for any number of quantity classes.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(try_from = "InputFormatMapGroupFields")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct InputFormatMapGroup {
    maps: SortedTable<Dimension, InputFormatMap>,
}

#[derive(Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
struct InputFormatMapGroupFields {
    maps: SortedTable<Dimension, InputFormatMap>,
}

impl TryFrom<InputFormatMapGroupFields> for InputFormatMapGroup {
    type Error = DimError;
    fn try_from(
        fields: InputFormatMapGroupFields,
    ) -> Result<Self, Self::Error> {
        let found = fields.maps.iter().find(|(index, map)| **index != map.index());
        match found {
            Some((index, map)) => {
                Err(DimError::DimensionMismatch(*index, map.index()))
            }
            None => Ok(Self { maps: fields.maps }),
        }
    }
}

impl InputFormatMapGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a formatter to the map of its class, creating that map if
    /// needed.
    pub fn insert(&mut self, formatter: Formatter) -> Result<(), DimError> {
        let index = formatter.index();
        match self.maps.get_mut(&index) {
            Some(map) => map.insert(formatter),
            None => {
                let mut map = InputFormatMap::new(index);
                map.insert(formatter)?;
                self.maps.insert(index, map);
                Ok(())
            }
        }
    }

    /// Add or replace the map for a whole class.
    pub fn insert_map(&mut self, map: InputFormatMap) {
        self.maps.insert(map.index(), map);
    }

    pub fn get(&self, index: Dimension) -> Option<&InputFormatMap> {
        self.maps.get(&index)
    }

    /// Remove all formats of one class.
    pub fn erase(&mut self, index: Dimension) -> bool {
        self.maps.remove(&index).is_some()
    }

    /// Remove one symbol of one class. A map left empty is dropped.
    pub fn erase_symbol(&mut self, index: Dimension, symbol: &str) -> bool {
        let (erased, empty) = match self.maps.get_mut(&index) {
            Some(map) => (map.erase(symbol), map.is_empty()),
            None => (false, false),
        };
        if empty {
            self.maps.remove(&index);
        }
        erased
    }

    /// Convert using the first map, in dimension order, that knows the
    /// symbol.
    pub fn to_quantity(&self, value: f64, symbol: &str) -> Option<Quantity> {
        self.maps
            .values()
            .find_map(|map| map.to_quantity(value, symbol))
    }

    /// Convert using only the map for one class.
    pub fn to_quantity_as(
        &self,
        index: Dimension,
        value: f64,
        symbol: &str,
    ) -> Option<Quantity> {
        self.get(index)
            .and_then(|map| map.to_quantity(value, symbol))
    }

    pub fn clear(&mut self) {
        self.maps.clear()
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputFormatMap> {
        self.maps.values()
    }
}

impl FromIterator<InputFormatMap> for InputFormatMapGroup {
    fn from_iter<I: IntoIterator<Item = InputFormatMap>>(iter: I) -> Self {
        Self {
            maps: iter.into_iter().map(|m| (m.index(), m)).collect(),
        }
    }
}

/// Preferred output format per dimension.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(try_from = "OutputFormatMapFields")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct OutputFormatMap {
    formats: SortedTable<Dimension, Formatter>,
}

#[derive(Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
struct OutputFormatMapFields {
    formats: SortedTable<Dimension, Formatter>,
}

impl TryFrom<OutputFormatMapFields> for OutputFormatMap {
    type Error = DimError;
    fn try_from(fields: OutputFormatMapFields) -> Result<Self, Self::Error> {
        let found = fields.formats.iter().find(|(index, f)| **index != f.index());
        match found {
            Some((index, f)) => {
                Err(DimError::DimensionMismatch(*index, f.index()))
            }
            None => Ok(Self {
                formats: fields.formats,
            }),
        }
    }
}

impl OutputFormatMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the output format for the formatter's dimension.
    pub fn insert(&mut self, formatter: Formatter) {
        self.formats.insert(formatter.index(), formatter);
    }

    pub fn get(&self, index: Dimension) -> Option<&Formatter> {
        self.formats.get(&index)
    }

    /// Format with the output format for the quantity's dimension, if
    /// there is one.
    pub fn format(&self, q: Quantity) -> Option<FormattedQuantity> {
        self.get(q.1).and_then(|f| f.output(q).ok())
    }

    pub fn erase(&mut self, index: Dimension) -> bool {
        self.formats.remove(&index).is_some()
    }

    pub fn clear(&mut self) {
        self.formats.clear()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Formatter> {
        self.formats.values()
    }
}

impl FromIterator<Formatter> for OutputFormatMap {
    fn from_iter<I: IntoIterator<Item = Formatter>>(iter: I) -> Self {
        Self {
            formats: iter.into_iter().map(|f| (f.index(), f)).collect(),
        }
    }
}

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt;

use serde::de::{DeserializeSeed, Deserializer, Error, MapAccess, Visitor};

use super::{Dimension, FormatRegistry, Quantity};

/// Deserialize a `{"value": .., "symbol": ..}` object into a quantity,
/// using a registry's input formats. With a class, the symbol must
/// describe a quantity of that class.
pub struct QuantitySeed<'a> {
    pub registry: &'a FormatRegistry,
    pub class: Option<Dimension>,
}

impl<'a> QuantitySeed<'a> {
    pub fn new(registry: &'a FormatRegistry) -> Self {
        Self {
            registry,
            class: None,
        }
    }

    pub fn with_class(registry: &'a FormatRegistry, class: Dimension) -> Self {
        Self {
            registry,
            class: Some(class),
        }
    }
}

impl<'de, 'a> DeserializeSeed<'de> for QuantitySeed<'a> {
    type Value = Quantity;
    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_struct("Quantity", &["value", "symbol"], self)
    }
}

impl<'de, 'a> Visitor<'de> for QuantitySeed<'a> {
    type Value = Quantity;
    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "A Quantity object")
    }
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut value: Option<f64> = None;
        let mut symbol: Option<String> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "value" => value = Some(map.next_value()?),
                "symbol" => symbol = Some(map.next_value()?),
                _ => {
                    map.next_value::<serde::de::IgnoredAny>()?;
                }
            }
        }
        let value = value.ok_or_else(|| A::Error::missing_field("value"))?;
        let symbol = symbol.ok_or_else(|| A::Error::missing_field("symbol"))?;
        let q = match self.class {
            Some(class) => self.registry.to_quantity(value, &symbol, class),
            None => self.registry.to_dynamic_quantity(value, &symbol),
        };
        q.map_err(A::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::de::DeserializeSeed;

    use super::QuantitySeed;
    use crate::si::{self, units::*};
    use crate::FormatRegistry;

    #[test]
    fn deserialize_with_formats() {
        let registry = FormatRegistry::si();
        let mut de =
            serde_json::Deserializer::from_str(r#"{"value":5,"symbol":"in"}"#);
        let q = QuantitySeed::with_class(&registry, si::LENGTH)
            .deserialize(&mut de)
            .unwrap();
        assert!((q.0 - 0.127).abs() < 1e-12);
        assert_eq!(q.1, si::LENGTH);
    }

    #[test]
    fn deserialize_with_parser() {
        let registry = FormatRegistry::new();
        let mut de = serde_json::Deserializer::from_str(
            r#"{"symbol":"kN","value":2,"note":"ignored"}"#,
        );
        let q = QuantitySeed::new(&registry).deserialize(&mut de).unwrap();
        assert_eq!(q, NEWTON * 2000.0);
    }

    #[test]
    fn deserialize_wrong_class() {
        let registry = FormatRegistry::si();
        let mut de =
            serde_json::Deserializer::from_str(r#"{"value":1,"symbol":"s"}"#);
        assert!(QuantitySeed::with_class(&registry, si::LENGTH)
            .deserialize(&mut de)
            .is_err());
    }
}

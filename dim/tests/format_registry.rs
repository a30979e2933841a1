/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::de::DeserializeSeed;

use dim::si::{self, units::*};
use dim::{DimError, FormatRegistry, Quantity, QuantitySeed};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

#[test]
fn customary_inputs() {
    let registry = FormatRegistry::si();
    let q = registry.to_quantity(5.0, "in", si::LENGTH).unwrap();
    assert!(close(q.0, 0.127));
    assert_eq!(q.1, si::LENGTH);

    let q = registry.to_quantity(1.0, "mph", si::SPEED).unwrap();
    assert!(close(q.0, 0.44704));

    let q = registry.to_quantity(1.0, "psi", si::PRESSURE).unwrap();
    assert!(close(q.0, 6894.757293168361));

    let q = registry.to_quantity(2.0, "ha", si::AREA).unwrap();
    assert!(close(q.0, 2e4));
}

#[test]
fn parser_fallback() {
    let registry = FormatRegistry::si();
    let q = registry.to_quantity(3.0, "km", si::LENGTH).unwrap();
    assert!(close(q.0, 3000.0));
    assert_eq!(
        registry.to_quantity(3.0, "km", si::TIME),
        Err(DimError::DimensionMismatch(si::TIME, si::LENGTH))
    );
    assert!(matches!(
        registry.to_quantity(3.0, "parsec", si::LENGTH),
        Err(DimError::UnknownSymbol(_))
    ));
}

#[test]
fn dynamic_lookup_takes_first_class() {
    let registry = FormatRegistry::si();
    /* "lb" is registered for both mass and force. */
    let q = registry.to_dynamic_quantity(1.0, "lb").unwrap();
    assert_eq!(q.1, si::MASS);
    let q = registry.to_quantity(1.0, "lb", si::FORCE).unwrap();
    assert_eq!(q.1, si::FORCE);
}

#[test]
fn empty_registry_synthesizes_symbols() {
    let registry = FormatRegistry::new();
    let out = registry.format(NEWTON * 3.0).unwrap();
    assert_eq!(out.symbol, "kg_m_s^-2");
    assert!(close(out.value, 3.0));
    assert_eq!(
        registry.format_to_string(Quantity::from_value(2.0)).unwrap(),
        "2"
    );
}

#[test]
fn output_round_trip() {
    let registry = FormatRegistry::si();
    for formatter in registry.output_formats().iter() {
        let q = formatter.scale() * 3.0;
        let out = registry.format(q).unwrap();
        assert_eq!(out.symbol, formatter.symbol());
        assert!(close(out.value, 3.0), "{}: {}", out.symbol, out.value);

        let back = registry
            .to_quantity(out.value, &out.symbol, formatter.index())
            .unwrap();
        assert_eq!(back.1, q.1, "{}", out.symbol);
        assert!(close(back.0, q.0), "{}: {} != {}", out.symbol, back.0, q.0);
    }
}

#[test]
fn temperature_conversion() {
    let mut registry = FormatRegistry::si();
    let body = registry.to_quantity(98.6, "°F", si::TEMPERATURE).unwrap();
    assert!(close(body.0, 310.15));

    registry
        .register_output_format(
            si::TEMPERATURE,
            "°C",
            KELVIN,
            Some(Quantity(273.15, si::TEMPERATURE)),
        )
        .unwrap();
    let out = registry.format(body).unwrap();
    assert_eq!(out.symbol, "°C");
    assert!(close(out.value, 37.0));
}

#[test]
fn registration() {
    let mut registry = FormatRegistry::new();
    registry
        .register_input_format(si::LENGTH, "furlong", YARD * 220.0, None)
        .unwrap();
    let q = registry.parse("2 furlong").unwrap();
    assert!(close(q.0, 402.336));

    assert_eq!(
        registry.register_output_format(si::LENGTH, "h", HOUR, None),
        Err(DimError::DimensionMismatch(si::LENGTH, si::TIME))
    );
    assert!(matches!(
        registry.register_input_format(si::LENGTH, "", METER, None),
        Err(DimError::InvalidSymbol(_))
    ));
    assert_eq!(
        registry.register_input_format(
            si::LENGTH,
            "nothing",
            METER * 0.0,
            None
        ),
        Err(DimError::BadQuantity)
    );
}

#[test]
fn parse_and_read() {
    let registry = FormatRegistry::si();
    let q = registry.parse("12 ft^2").unwrap();
    assert!(close(q.0, 12.0 * 0.09290304));
    assert_eq!(q.1, si::AREA);

    let q = registry.parse_as("10 lbf", si::FORCE).unwrap();
    assert!(close(q.0, 44.482216152605));

    let (a, rest) = registry.read("5 kN, 3 in").unwrap();
    assert!(close(a.0, 5000.0));
    let (b, rest) = registry.read(rest.trim_start_matches(", ")).unwrap();
    assert!(close(b.0, 0.0762));
    assert_eq!(rest, "");
}

#[test]
fn serialized_registry() {
    let registry = FormatRegistry::si();
    let json = serde_json::to_string(&registry).unwrap();
    let back: FormatRegistry = serde_json::from_str(&json).unwrap();
    assert_eq!(back.input_formats().len(), registry.input_formats().len());
    assert_eq!(back.output_formats().len(), registry.output_formats().len());
    let q = back.to_quantity(1.0, "mi", si::LENGTH).unwrap();
    assert!(close(q.0, 1609.344));
}

#[test]
fn tampered_registry_is_rejected() {
    let json = serde_json::to_value(FormatRegistry::si()).unwrap();

    let mut zero_scale = json.clone();
    *zero_scale
        .pointer_mut("/outputs/formats/0/1/scale/0")
        .unwrap() = serde_json::json!(0.0);
    assert!(serde_json::from_value::<FormatRegistry>(zero_scale).is_err());

    let mut renamed = json.clone();
    *renamed
        .pointer_mut("/inputs/maps/0/1/formats/0/0")
        .unwrap() = serde_json::json!("not-the-symbol");
    assert!(serde_json::from_value::<FormatRegistry>(renamed).is_err());

    assert!(serde_json::from_value::<FormatRegistry>(json).is_ok());
}

#[test]
fn quantity_seed() {
    let registry = FormatRegistry::si();
    let mut de = serde_json::Deserializer::from_str(
        r#"{"value": 212, "symbol": "°F"}"#,
    );
    let q = QuantitySeed::with_class(&registry, si::TEMPERATURE)
        .deserialize(&mut de)
        .unwrap();
    assert!(close(q.0, 373.15));

    let mut de = serde_json::Deserializer::from_str(r#"{"value": 1}"#);
    assert!(QuantitySeed::new(&registry).deserialize(&mut de).is_err());
}

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use dim::si::{self, units::*};
use dim::{parse_quantity, parse_unit, parse_unit_bytes, DimError, Quantity};

fn assert_close(q: Quantity, value: f64, dimension: dim::Dimension) {
    assert_eq!(q.1, dimension, "dimension of {}", q);
    assert!(
        (q.0 - value).abs() <= 1e-12 * value.abs().max(1.0),
        "{} != {}",
        q.0,
        value
    );
}

#[test]
fn derived_units() {
    assert_close(parse_unit("kg*m/s^2").unwrap(), 1.0, si::FORCE);
    assert_close(parse_unit("kg m s^-2").unwrap(), 1.0, si::FORCE);
    assert_close(parse_unit("N*m").unwrap(), 1.0, si::ENERGY);
    assert_close(parse_unit("J/s").unwrap(), 1.0, si::POWER);
    assert_close(parse_unit("V*A").unwrap(), 1.0, si::POWER);
    assert_close(parse_unit("W/A").unwrap(), 1.0, si::VOLTAGE);
    assert_close(
        parse_unit("Wb/m^2").unwrap(),
        1.0,
        si::MAGNETIC_FLUX_DENSITY,
    );
    assert_close(parse_unit("cd*sr").unwrap(), 1.0, si::LUMINOUS_FLUX);
}

#[test]
fn prefixed_units() {
    assert_close(parse_unit("k\u{3a9}").unwrap(), 1e3, si::RESISTANCE);
    assert_close(parse_unit("k\u{2126}").unwrap(), 1e3, si::RESISTANCE);
    assert_close(parse_unit("μm/s").unwrap(), 1e-6, si::SPEED);
    assert_close(parse_unit("um/s").unwrap(), 1e-6, si::SPEED);
    assert_close(parse_unit("dam").unwrap(), 10.0, si::LENGTH);
    assert_close(parse_unit("mL").unwrap(), 1e-6, si::VOLUME);
    assert_close(parse_unit("MHz").unwrap(), 1e6, si::FREQUENCY);
    assert_close(parse_unit("km^2").unwrap(), 1e6, si::AREA);
}

#[test]
fn unicode_and_operators() {
    let accel = parse_unit("m/s^2").unwrap();
    for input in ["m/s²", "m s⁻²", "m_s^-2", "m.s^(-2)", "m / s / s"] {
        assert_close(parse_unit(input).unwrap(), accel.0, accel.1);
    }
    assert_eq!(parse_unit_bytes("m/s²".as_bytes()), Ok(accel));
    assert!(matches!(
        parse_unit_bytes(b"m/\xffs"),
        Err(DimError::Lexical(2, _))
    ));
}

#[test]
fn commutative_products() {
    assert_eq!(parse_unit("m*s"), parse_unit("s*m"));
    assert_eq!(parse_unit("m s"), parse_unit("m*s"));
    assert_eq!(parse_unit("m_s"), parse_unit("m*s"));
    let (a, b) = (parse_unit("m/s").unwrap(), parse_unit("s/m").unwrap());
    assert_ne!(a, b);
    assert_eq!(a.1, b.1.inverse());
    assert!((a.1 * a.1.inverse()).is_dimensionless());
}

#[test]
fn nested_exponents() {
    assert_eq!(parse_unit("m^(-121)").map(|q| q.1.length()), Ok(-121));
    assert_eq!(parse_unit("m^+121").map(|q| q.1.length()), Ok(121));
    assert_eq!(parse_unit("m^((2))").map(|q| q.1), Ok(si::AREA));
    assert_eq!(
        parse_unit("(m^2*s^-1)").map(|q| q.1),
        Ok(si::KINEMATIC_VISCOSITY)
    );
}

#[test]
fn malformed_expressions() {
    for input in [
        "m**s",
        "m*/s",
        "m*2",
        "m^s",
        "m^1.2",
        "m^kg*s^-1",
        "(",
        "m)",
        "m^",
    ] {
        assert!(
            matches!(parse_unit(input), Err(DimError::Grammar(_))),
            "{:?} should not parse",
            input
        );
    }
    assert!(matches!(parse_unit("m,s"), Err(DimError::Lexical(1, _))));
    assert!(matches!(
        parse_unit("furlong"),
        Err(DimError::UnknownSymbol(_))
    ));
}

#[test]
fn quantities() {
    let g = parse_quantity("9.81 m/s^2").unwrap();
    assert_close(g, 9.81, si::ACCELERATION);
    assert_close(parse_quantity("2.5_kN").unwrap(), 2500.0, si::FORCE);
    assert_close(parse_quantity("1e3 g").unwrap(), 1.0, si::MASS);
    assert_eq!(parse_quantity("3"), Ok(Quantity::from_value(3.0)));
}

#[test]
fn quantity_arithmetic() {
    /* Hours are an input format, not a unit literal. */
    assert!(parse_quantity("36 km/h").is_err());

    let distance = parse_quantity("36 km").unwrap();
    let time = parse_quantity("3600 s").unwrap();
    assert_close(distance / time, 10.0, si::SPEED);
    assert!((METER + SECOND).is_bad());
    assert_eq!(METER.partial_cmp(&SECOND), None);
    assert!(METER * 2.0 > METER);
}

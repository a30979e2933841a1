/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::f64::consts::PI;

use crate::dimension::Dimension;
use crate::format_map::{InputFormatMap, InputFormatMapGroup, OutputFormatMap};
use crate::formatter::Formatter;
use crate::quantity::Quantity;

use super::units::*;
use super::*;

/// Classes that come with customary input formats.
pub static INPUT_CLASSES: [Dimension; 19] = [
    LENGTH,
    TIME,
    MASS,
    ANGLE,
    SOLID_ANGLE,
    TEMPERATURE,
    FORCE,
    PRESSURE,
    ENERGY,
    POWER,
    AREA,
    VOLUME,
    FLOW_RATE,
    SPEED,
    ACCELERATION,
    ANGULAR_RATE,
    ANGULAR_ACCELERATION,
    TORQUE,
    DENSITY,
];

fn formatter(
    symbol: &str,
    scale: Quantity,
    offset: Option<Quantity>,
) -> Option<Formatter> {
    Formatter::new(symbol, scale, offset)
        .map_err(|e| log::warn!("invalid format {:?}: {}", symbol, e))
        .ok()
}

fn map(index: Dimension, entries: &[(&str, Quantity)]) -> InputFormatMap {
    InputFormatMap::with_formats(
        index,
        entries
            .iter()
            .filter_map(|(symbol, scale)| formatter(symbol, *scale, None)),
    )
}

/// Customary input formats for one quantity class. Classes without
/// any get an empty map.
pub fn default_input_format_map(index: Dimension) -> InputFormatMap {
    match index {
        LENGTH => map(
            LENGTH,
            &[
                ("in", INCH),
                ("inch", INCH),
                ("ft", FOOT),
                ("foot", FOOT),
                ("feet", FOOT),
                ("yd", YARD),
                ("yard", YARD),
                ("mi", MILE),
                ("mile", MILE),
                ("nmi", NAUTICAL_MILE),
                ("nautical_mile", NAUTICAL_MILE),
                ("meter", METER),
                ("metre", METER),
                ("Å", ANGSTROM),
            ],
        ),
        TIME => map(
            TIME,
            &[
                ("min", MINUTE),
                ("minute", MINUTE),
                ("h", HOUR),
                ("hr", HOUR),
                ("hour", HOUR),
            ],
        ),
        MASS => map(
            MASS,
            &[
                ("oz", OUNCE),
                ("ounce", OUNCE),
                ("lb", POUND_MASS),
                ("lbm", POUND_MASS),
                ("pound", POUND_MASS),
                ("pound_mass", POUND_MASS),
                ("slug", SLUG),
            ],
        ),
        ANGLE => map(
            ANGLE,
            &[
                ("radian", RADIAN),
                ("deg", DEGREE),
                ("degree", DEGREE),
                ("°", DEGREE),
                ("mil", MILLIRADIAN),
                ("mrad", MILLIRADIAN),
                ("milliradian", MILLIRADIAN),
                ("turn", TURN),
                ("tr", TURN),
                ("rev", TURN),
                ("cyc", TURN),
                ("'", ARC_MINUTE),
                ("arcmin", ARC_MINUTE),
                ("arcminute", ARC_MINUTE),
                ("\"", ARC_SECOND),
                ("arcsec", ARC_SECOND),
                ("arcsecond", ARC_SECOND),
            ],
        ),
        SOLID_ANGLE => map(
            SOLID_ANGLE,
            &[
                ("steradian", STERADIAN),
                ("sr", STERADIAN),
                ("sp", SPAT),
                ("spat", SPAT),
            ],
        ),
        TEMPERATURE => temperature_formats(),
        FORCE => map(
            FORCE,
            &[
                ("dyn", DYNE),
                ("dyne", DYNE),
                ("lb", POUND_FORCE),
                ("lbf", POUND_FORCE),
                ("pound", POUND_FORCE),
                ("pound_force", POUND_FORCE),
            ],
        ),
        PRESSURE => map(
            PRESSURE,
            &[
                ("psi", PSI),
                ("lbf/in^2", PSI),
                ("lbf_in^-2", PSI),
                ("lb/in^2", PSI),
                ("lb_in^-2", PSI),
                ("pounds_per_inch2", PSI),
                ("pounds_per_square_inch", PSI),
                ("torr", TORR),
                ("atm", ATMOSPHERE),
                ("atmosphere", ATMOSPHERE),
            ],
        ),
        ENERGY => map(
            ENERGY,
            &[
                ("kW_hr", KILOWATT_HOUR),
                ("kW*hr", KILOWATT_HOUR),
                ("kWhr", KILOWATT_HOUR),
                ("kW_h", KILOWATT_HOUR),
                ("kWh", KILOWATT_HOUR),
                ("erg", ERG),
                ("foot_pound", FOOT_POUND),
                ("ft_lb", FOOT_POUND),
                ("ft_lbf", FOOT_POUND),
                ("BTU", BTU),
            ],
        ),
        POWER => map(
            POWER,
            &[("hp", HORSEPOWER), ("horsepower", HORSEPOWER)],
        ),
        AREA => map(
            AREA,
            &[
                ("acre", ACRE),
                ("ac", ACRE),
                ("sq_mi", SQUARE_MILE),
                ("mi^2", SQUARE_MILE),
                ("mile2", SQUARE_MILE),
                ("sq_ft", SQUARE_FOOT),
                ("ft^2", SQUARE_FOOT),
                ("foot2", SQUARE_FOOT),
                ("are", ARE),
                ("a", ARE),
                ("ha", HECTARE),
                ("hectare", HECTARE),
            ],
        ),
        VOLUME => map(
            VOLUME,
            &[
                ("cc", CUBIC_CENTIMETER),
                ("liter", LITER),
                ("litre", LITER),
                ("gal", GALLON),
                ("gallon", GALLON),
                ("acre_ft", ACRE_FOOT),
                ("acre_foot", ACRE_FOOT),
                ("cu_ft", CUBIC_FOOT),
                ("ft^3", CUBIC_FOOT),
                ("cubic_foot", CUBIC_FOOT),
                ("cu_in", CUBIC_INCH),
                ("in^3", CUBIC_INCH),
                ("cubic_inch", CUBIC_INCH),
                ("cu_yd", CUBIC_YARD),
                ("yd^3", CUBIC_YARD),
                ("cubic_yard", CUBIC_YARD),
            ],
        ),
        FLOW_RATE => map(
            FLOW_RATE,
            &[
                ("gal/s", Quantity(GALLON.0, FLOW_RATE)),
                ("gallon/second", Quantity(GALLON.0, FLOW_RATE)),
                ("gal/min", Quantity(GALLON.0 / 60.0, FLOW_RATE)),
                ("gallon/minute", Quantity(GALLON.0 / 60.0, FLOW_RATE)),
                ("meter3/second", Quantity(1.0, FLOW_RATE)),
                ("liter/second", Quantity(LITER.0, FLOW_RATE)),
                ("L/s", Quantity(LITER.0, FLOW_RATE)),
            ],
        ),
        SPEED => map(
            SPEED,
            &[
                ("mps", Quantity(1.0, SPEED)),
                ("kph", KILOMETER_PER_HOUR),
                ("mph", MILE_PER_HOUR),
                ("miles_per_hour", MILE_PER_HOUR),
                ("knot", KNOT),
                ("kn", KNOT),
                ("kt", KNOT),
                ("ft/s", FOOT_PER_SECOND),
                ("feet_per_second", FOOT_PER_SECOND),
            ],
        ),
        ACCELERATION => map(
            ACCELERATION,
            &[
                ("ft/s^2", Quantity(FOOT.0, ACCELERATION)),
                ("feet_per_second2", Quantity(FOOT.0, ACCELERATION)),
            ],
        ),
        ANGULAR_RATE => map(
            ANGULAR_RATE,
            &[
                ("deg/s", Quantity(DEGREE.0, ANGULAR_RATE)),
                ("°/s", Quantity(DEGREE.0, ANGULAR_RATE)),
                ("degrees_per_second", Quantity(DEGREE.0, ANGULAR_RATE)),
                ("radians_per_second", Quantity(1.0, ANGULAR_RATE)),
                ("rpm", Quantity(2.0 * PI / 60.0, ANGULAR_RATE)),
            ],
        ),
        ANGULAR_ACCELERATION => map(
            ANGULAR_ACCELERATION,
            &[
                ("deg/s^2", Quantity(DEGREE.0, ANGULAR_ACCELERATION)),
                ("°/s^2", Quantity(DEGREE.0, ANGULAR_ACCELERATION)),
                (
                    "degrees_per_second2",
                    Quantity(DEGREE.0, ANGULAR_ACCELERATION),
                ),
                (
                    "radians_per_second2",
                    Quantity(1.0, ANGULAR_ACCELERATION),
                ),
            ],
        ),
        TORQUE => map(
            TORQUE,
            &[
                ("ft*lbf", Quantity(FOOT_POUND.0, TORQUE)),
                ("ft_lbf", Quantity(FOOT_POUND.0, TORQUE)),
                ("ft*lb", Quantity(FOOT_POUND.0, TORQUE)),
                ("ft_lb", Quantity(FOOT_POUND.0, TORQUE)),
                ("foot_pound", Quantity(FOOT_POUND.0, TORQUE)),
            ],
        ),
        DENSITY => map(
            DENSITY,
            &[
                ("g/cc", Quantity(1e3, DENSITY)),
                ("kg/L", Quantity(1e3, DENSITY)),
            ],
        ),
        _ => InputFormatMap::new(index),
    }
}

/// Temperature scales with an offset from absolute zero.
fn temperature_formats() -> InputFormatMap {
    let celsius = Some(Quantity(273.15, TEMPERATURE));
    let fahrenheit = Some(Quantity(459.67 * 5.0 / 9.0, TEMPERATURE));
    InputFormatMap::with_formats(
        TEMPERATURE,
        [
            ("C", KELVIN, celsius),
            ("℃", KELVIN, celsius),
            ("°C", KELVIN, celsius),
            ("F", RANKINE, fahrenheit),
            ("℉", RANKINE, fahrenheit),
            ("°F", RANKINE, fahrenheit),
            ("R", RANKINE, None),
            ("°R", RANKINE, None),
            ("rankine", RANKINE, None),
        ]
        .into_iter()
        .filter_map(|(symbol, scale, offset)| {
            formatter(symbol, scale, offset)
        }),
    )
}

/// Customary input formats for every class in `INPUT_CLASSES`.
pub fn default_input_formats() -> InputFormatMapGroup {
    INPUT_CLASSES
        .iter()
        .map(|index| default_input_format_map(*index))
        .collect()
}

/// One preferred output format per common dimension.
pub fn default_output_formats() -> OutputFormatMap {
    [
        ("m", METER),
        ("s", SECOND),
        ("kg", KILOGRAM),
        ("rad", RADIAN),
        ("sr", STERADIAN),
        ("K", KELVIN),
        ("mol", MOLE),
        ("A", AMPERE),
        ("cd", CANDELA),
        ("Hz", HERTZ),
        ("N", NEWTON),
        ("Pa", PASCAL),
        ("J", JOULE),
        ("W", WATT),
        ("C", COULOMB),
        ("V", VOLT),
        ("F", FARAD),
        ("Ω", OHM),
        ("S", SIEMENS),
        ("Wb", WEBER),
        ("T", TESLA),
        ("H", HENRY),
        ("lm", LUMEN),
        ("lx", LUX),
        ("Gy", GRAY),
        ("kat", KATAL),
        ("Pl", POISEUILLE),
        ("m^2", Quantity(1.0, AREA)),
        ("L", LITER),
        ("L/s", Quantity(LITER.0, FLOW_RATE)),
        ("m/s", Quantity(1.0, SPEED)),
        ("m/s^2", Quantity(1.0, ACCELERATION)),
        ("rad/s", Quantity(1.0, ANGULAR_RATE)),
        ("rad/s^2", Quantity(1.0, ANGULAR_ACCELERATION)),
        ("N*m/rad", Quantity(1.0, TORQUE)),
        ("kg/m^3", Quantity(1.0, DENSITY)),
        ("m^2/s", Quantity(1.0, KINEMATIC_VISCOSITY)),
    ]
    .into_iter()
    .filter_map(|(symbol, scale)| formatter(symbol, scale, None))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn every_class_has_formats() {
        for index in INPUT_CLASSES.iter() {
            let map = default_input_format_map(*index);
            assert!(!map.is_empty(), "no formats for {}", index);
            assert!(map.iter().all(|f| f.index() == *index));
        }
        assert!(default_input_format_map(CHARGE).is_empty());
    }

    #[test]
    fn group_holds_every_class() {
        let group = default_input_formats();
        assert_eq!(group.len(), INPUT_CLASSES.len());
    }

    #[test]
    fn output_formats_are_unique_per_dimension() {
        let outputs = default_output_formats();
        assert_eq!(outputs.len(), 37);
        assert_eq!(outputs.get(FREQUENCY).map(|f| f.symbol()), Some("Hz"));
        assert_eq!(outputs.get(VOLUME).map(|f| f.symbol()), Some("L"));
    }

    #[test]
    fn temperature_offsets() {
        let map = default_input_format_map(TEMPERATURE);
        let c = map.to_quantity(100.0, "°C").unwrap();
        let f = map.to_quantity(-40.0, "℉").unwrap();
        assert!(close(c.0, 373.15));
        assert!(close(f.0, 233.15));
        assert!(close(map.to_quantity(491.67, "R").unwrap().0, 273.15));
    }
}

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::f64::consts::PI;

use crate::quantity::Quantity;

use super::*;

/* SI base and coherent derived units. */

pub const METER: Quantity = Quantity(1.0, LENGTH);
pub const SECOND: Quantity = Quantity(1.0, TIME);
pub const KILOGRAM: Quantity = Quantity(1.0, MASS);
pub const GRAM: Quantity = Quantity(1e-3, MASS);
pub const RADIAN: Quantity = Quantity(1.0, ANGLE);
pub const KELVIN: Quantity = Quantity(1.0, TEMPERATURE);
pub const MOLE: Quantity = Quantity(1.0, AMOUNT);
pub const AMPERE: Quantity = Quantity(1.0, CURRENT);
pub const CANDELA: Quantity = Quantity(1.0, LUMINOSITY);

pub const HERTZ: Quantity = Quantity(1.0, FREQUENCY);
pub const STERADIAN: Quantity = Quantity(1.0, SOLID_ANGLE);
pub const NEWTON: Quantity = Quantity(1.0, FORCE);
pub const PASCAL: Quantity = Quantity(1.0, PRESSURE);
pub const JOULE: Quantity = Quantity(1.0, ENERGY);
pub const WATT: Quantity = Quantity(1.0, POWER);
pub const COULOMB: Quantity = Quantity(1.0, CHARGE);
pub const VOLT: Quantity = Quantity(1.0, VOLTAGE);
pub const FARAD: Quantity = Quantity(1.0, CAPACITANCE);
pub const OHM: Quantity = Quantity(1.0, RESISTANCE);
pub const SIEMENS: Quantity = Quantity(1.0, CONDUCTANCE);
pub const WEBER: Quantity = Quantity(1.0, MAGNETIC_FLUX);
pub const TESLA: Quantity = Quantity(1.0, MAGNETIC_FLUX_DENSITY);
pub const HENRY: Quantity = Quantity(1.0, INDUCTANCE);
pub const LUMEN: Quantity = Quantity(1.0, LUMINOUS_FLUX);
pub const LUX: Quantity = Quantity(1.0, ILLUMINANCE);
pub const BECQUEREL: Quantity = Quantity(1.0, RADIOACTIVITY);
pub const GRAY: Quantity = Quantity(1.0, ABSORBED_DOSE);
pub const SIEVERT: Quantity = Quantity(1.0, ABSORBED_DOSE);
pub const KATAL: Quantity = Quantity(1.0, CATALYTIC_ACTIVITY);
pub const POISEUILLE: Quantity = Quantity(1.0, VISCOSITY);

/* Accepted non-SI units. */

pub const LITER: Quantity = Quantity(1e-3, VOLUME);
pub const ELECTRONVOLT: Quantity = Quantity(1.60218e-19, ENERGY);
pub const BAR: Quantity = Quantity(1e5, PRESSURE);
pub const ANGSTROM: Quantity = Quantity(1e-10, LENGTH);
pub const DEGREE: Quantity = Quantity(PI / 180.0, ANGLE);
pub const ARE: Quantity = Quantity(100.0, AREA);
pub const HECTARE: Quantity = Quantity(1e4, AREA);

/* Customary units. */

pub const INCH: Quantity = Quantity(0.0254, LENGTH);
pub const FOOT: Quantity = Quantity(0.3048, LENGTH);
pub const YARD: Quantity = Quantity(3.0 * 0.3048, LENGTH);
pub const MILE: Quantity = Quantity(5280.0 * 0.3048, LENGTH);
pub const NAUTICAL_MILE: Quantity = Quantity(1852.0, LENGTH);

pub const MINUTE: Quantity = Quantity(60.0, TIME);
pub const HOUR: Quantity = Quantity(3600.0, TIME);

pub const OUNCE: Quantity = Quantity(0.028349523125, MASS);
pub const POUND_MASS: Quantity = Quantity(0.453592, MASS);
pub const SLUG: Quantity = Quantity(14.59390, MASS);

pub const ARC_MINUTE: Quantity = Quantity(PI / 180.0 / 60.0, ANGLE);
pub const ARC_SECOND: Quantity = Quantity(PI / 180.0 / 3600.0, ANGLE);
pub const MILLIRADIAN: Quantity = Quantity(1e-3, ANGLE);
pub const TURN: Quantity = Quantity(2.0 * PI, ANGLE);
pub const SPAT: Quantity = Quantity(4.0 * PI, SOLID_ANGLE);

pub const RANKINE: Quantity = Quantity(5.0 / 9.0, TEMPERATURE);

pub const DYNE: Quantity = Quantity(1e-5, FORCE);
pub const POUND_FORCE: Quantity = Quantity(4.4482216152605, FORCE);

pub const PSI: Quantity =
    Quantity(4.4482216152605 / (0.0254 * 0.0254), PRESSURE);
pub const ATMOSPHERE: Quantity = Quantity(1.01325e5, PRESSURE);
pub const TORR: Quantity = Quantity(1.01325e5 / 760.0, PRESSURE);

pub const KILOWATT_HOUR: Quantity = Quantity(3.6e6, ENERGY);
pub const ERG: Quantity = Quantity(1e-7, ENERGY);
pub const FOOT_POUND: Quantity =
    Quantity(0.3048 * 4.4482216152605, ENERGY);
pub const BTU: Quantity = Quantity(1055.06, ENERGY);

pub const HORSEPOWER: Quantity =
    Quantity(33e3 * 0.3048 * 4.4482216152605 / 60.0, POWER);

pub const ACRE: Quantity = Quantity(4046.86, AREA);
pub const SQUARE_MILE: Quantity =
    Quantity(5280.0 * 0.3048 * 5280.0 * 0.3048, AREA);
pub const SQUARE_FOOT: Quantity = Quantity(0.3048 * 0.3048, AREA);

pub const CUBIC_CENTIMETER: Quantity = Quantity(1e-6, VOLUME);
pub const GALLON: Quantity = Quantity(3.78541e-3, VOLUME);
pub const ACRE_FOOT: Quantity = Quantity(4046.86 * 0.3048, VOLUME);
pub const CUBIC_FOOT: Quantity =
    Quantity(0.3048 * 0.3048 * 0.3048, VOLUME);
pub const CUBIC_INCH: Quantity =
    Quantity(0.0254 * 0.0254 * 0.0254, VOLUME);
pub const CUBIC_YARD: Quantity =
    Quantity(0.9144 * 0.9144 * 0.9144, VOLUME);

pub const KILOMETER_PER_HOUR: Quantity = Quantity(1000.0 / 3600.0, SPEED);
pub const MILE_PER_HOUR: Quantity =
    Quantity(5280.0 * 0.3048 / 3600.0, SPEED);
pub const KNOT: Quantity = Quantity(1852.0 / 3600.0, SPEED);
pub const FOOT_PER_SECOND: Quantity = Quantity(0.3048, SPEED);

/// Absolute temperature for a reading in degrees Celsius.
pub fn celsius(value: f64) -> Quantity {
    Quantity(value + 273.15, TEMPERATURE)
}

/// Absolute temperature for a reading in degrees Fahrenheit.
pub fn fahrenheit(value: f64) -> Quantity {
    Quantity((value + 459.67) * 5.0 / 9.0, TEMPERATURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn derived_units_compose() {
        assert_eq!((KILOGRAM * METER / SECOND.powi(2)).1, NEWTON.1);
        assert_eq!((NEWTON / METER.powi(2)).1, PASCAL.1);
        assert_eq!((JOULE / SECOND).1, WATT.1);
        assert_eq!((WATT / AMPERE).1, VOLT.1);
        assert_eq!((VOLT / AMPERE).1, OHM.1);
        assert_eq!((COULOMB / VOLT).1, FARAD.1);
        assert_eq!((VOLT * SECOND).1, WEBER.1);
        assert_eq!((WEBER / METER.powi(2)).1, TESLA.1);
        assert_eq!((WEBER / AMPERE).1, HENRY.1);
        assert_eq!((CANDELA * STERADIAN / METER.powi(2)).1, LUX.1);
        assert_eq!((NEWTON * METER / RADIAN).1, TORQUE);
    }

    #[test]
    fn temperature_scales() {
        assert!(close(celsius(0.0).0, 273.15));
        assert!(close(fahrenheit(32.0).0, 273.15));
        assert!(close(fahrenheit(212.0).0, 373.15));
        assert!(close(fahrenheit(-459.67).0, 0.0));
    }

    #[test]
    fn customary_conversions() {
        assert!(close((MILE / FOOT).0, 5280.0));
        assert!(close((YARD / INCH).0, 36.0));
        assert!(close(HORSEPOWER.0, 745.6998715822701));
        assert!(close(PSI.0, 6894.757293168361));
    }
}

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The SI unit system: named quantity classes, named units, the
//! literal symbols understood by the unit parser and the default
//! input and output formats.

pub mod formats;
pub mod literals;
pub mod units;

pub use formats::{default_input_formats, default_output_formats};
pub use literals::unit_literal;

use crate::dimension::Dimension;

/* Base dimensions. Argument order: length, time, mass, angle,
 * temperature, amount, current, luminosity. */

pub const DIMENSIONLESS: Dimension = Dimension::DIMENSIONLESS;
pub const LENGTH: Dimension = Dimension::new(1, 0, 0, 0, 0, 0, 0, 0);
pub const TIME: Dimension = Dimension::new(0, 1, 0, 0, 0, 0, 0, 0);
pub const MASS: Dimension = Dimension::new(0, 0, 1, 0, 0, 0, 0, 0);
pub const ANGLE: Dimension = Dimension::new(0, 0, 0, 1, 0, 0, 0, 0);
pub const TEMPERATURE: Dimension = Dimension::new(0, 0, 0, 0, 1, 0, 0, 0);
pub const AMOUNT: Dimension = Dimension::new(0, 0, 0, 0, 0, 1, 0, 0);
pub const CURRENT: Dimension = Dimension::new(0, 0, 0, 0, 0, 0, 1, 0);
pub const LUMINOSITY: Dimension = Dimension::new(0, 0, 0, 0, 0, 0, 0, 1);

/* Derived quantity classes. */

pub const FREQUENCY: Dimension = Dimension::new(0, -1, 0, 0, 0, 0, 0, 0);
pub const SOLID_ANGLE: Dimension = Dimension::new(0, 0, 0, 2, 0, 0, 0, 0);
pub const FORCE: Dimension = Dimension::new(1, -2, 1, 0, 0, 0, 0, 0);
pub const PRESSURE: Dimension = Dimension::new(-1, -2, 1, 0, 0, 0, 0, 0);
pub const ENERGY: Dimension = Dimension::new(2, -2, 1, 0, 0, 0, 0, 0);
pub const POWER: Dimension = Dimension::new(2, -3, 1, 0, 0, 0, 0, 0);
pub const CHARGE: Dimension = Dimension::new(0, 1, 0, 0, 0, 0, 1, 0);
pub const VOLTAGE: Dimension = Dimension::new(2, -3, 1, 0, 0, 0, -1, 0);
pub const CAPACITANCE: Dimension = Dimension::new(-2, 4, -1, 0, 0, 0, 2, 0);
pub const RESISTANCE: Dimension = Dimension::new(2, -3, 1, 0, 0, 0, -2, 0);
pub const CONDUCTANCE: Dimension = Dimension::new(-2, 3, -1, 0, 0, 0, 2, 0);
pub const MAGNETIC_FLUX: Dimension = Dimension::new(2, -2, 1, 0, 0, 0, -1, 0);
pub const MAGNETIC_FLUX_DENSITY: Dimension =
    Dimension::new(0, -2, 1, 0, 0, 0, -1, 0);
pub const INDUCTANCE: Dimension = Dimension::new(2, -2, 1, 0, 0, 0, -2, 0);
pub const LUMINOUS_FLUX: Dimension = Dimension::new(0, 0, 0, 2, 0, 0, 0, 1);
pub const ILLUMINANCE: Dimension = Dimension::new(-2, 0, 0, 2, 0, 0, 0, 1);
pub const RADIOACTIVITY: Dimension = FREQUENCY;
pub const ABSORBED_DOSE: Dimension = Dimension::new(2, -2, 0, 0, 0, 0, 0, 0);
pub const CATALYTIC_ACTIVITY: Dimension =
    Dimension::new(0, -1, 0, 0, 0, 1, 0, 0);
pub const VISCOSITY: Dimension = Dimension::new(-1, -1, 1, 0, 0, 0, 0, 0);
pub const KINEMATIC_VISCOSITY: Dimension =
    Dimension::new(2, -1, 0, 0, 0, 0, 0, 0);
pub const AREA: Dimension = Dimension::new(2, 0, 0, 0, 0, 0, 0, 0);
pub const VOLUME: Dimension = Dimension::new(3, 0, 0, 0, 0, 0, 0, 0);
pub const FLOW_RATE: Dimension = Dimension::new(3, -1, 0, 0, 0, 0, 0, 0);
pub const SPEED: Dimension = Dimension::new(1, -1, 0, 0, 0, 0, 0, 0);
pub const ACCELERATION: Dimension = Dimension::new(1, -2, 0, 0, 0, 0, 0, 0);
pub const ANGULAR_RATE: Dimension = Dimension::new(0, -1, 0, 1, 0, 0, 0, 0);
pub const ANGULAR_ACCELERATION: Dimension =
    Dimension::new(0, -2, 0, 1, 0, 0, 0, 0);
pub const TORQUE: Dimension = Dimension::new(2, -2, 1, -1, 0, 0, 0, 0);
pub const DENSITY: Dimension = Dimension::new(-3, 0, 1, 0, 0, 0, 0, 0);

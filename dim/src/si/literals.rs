/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::error::DimError;
use crate::prefix::{Prefix, SiPrefix};
use crate::quantity::Quantity;

use super::units::*;

/// Unprefixed unit symbols understood by the unit parser.
///
/// "a" (are) is left out: it would shadow the atto prefix.
fn literal(symbol: &str) -> Option<Quantity> {
    Some(match symbol {
        "m" => METER,
        "s" => SECOND,
        "g" => GRAM,
        "rad" => RADIAN,
        "K" | "\u{212a}" => KELVIN,
        "mol" => MOLE,
        "A" => AMPERE,
        "cd" => CANDELA,

        "Hz" => HERTZ,
        "sr" => STERADIAN,
        "N" => NEWTON,
        "Pa" => PASCAL,
        "J" => JOULE,
        "W" => WATT,
        "C" => COULOMB,
        "V" => VOLT,
        "F" => FARAD,
        "R" | "\u{3a9}" | "\u{2126}" => OHM,
        "S" => SIEMENS,
        "Wb" => WEBER,
        "T" => TESLA,
        "H" => HENRY,
        "lm" => LUMEN,
        "lx" => LUX,
        "Bq" => BECQUEREL,
        "Gy" => GRAY,
        "Sv" => SIEVERT,
        "kat" => KATAL,
        "Pl" => POISEUILLE,

        "L" => LITER,
        "eV" => ELECTRONVOLT,
        "bar" => BAR,
        "\u{c5}" | "\u{212b}" => ANGSTROM,
        "°" => DEGREE,
        _ => return None,
    })
}

/// Resolve a unit word, optionally carrying one SI prefix.
///
/// The whole word is tried first, so "cd" is a candela and "Pa" a
/// pascal rather than a centi-day or a peta-are.
pub fn unit_literal(word: &str) -> Result<Quantity, DimError> {
    if let Some(q) = literal(word) {
        return Ok(q);
    }
    SiPrefix::split(word)
        .and_then(|(prefix, rest)| {
            literal(rest).map(|q| q * prefix.multiplier())
        })
        .ok_or_else(|| DimError::UnknownSymbol(word.to_string()))
}

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::prefix_trait::Prefix;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum SiPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

static SI_PREFIXES: [SiPrefix; 20] = [
    SiPrefix::Yocto,
    SiPrefix::Zepto,
    SiPrefix::Atto,
    SiPrefix::Femto,
    SiPrefix::Pico,
    SiPrefix::Nano,
    SiPrefix::Micro,
    SiPrefix::Milli,
    SiPrefix::Centi,
    SiPrefix::Deci,
    SiPrefix::Deca,
    SiPrefix::Hecto,
    SiPrefix::Kilo,
    SiPrefix::Mega,
    SiPrefix::Giga,
    SiPrefix::Tera,
    SiPrefix::Peta,
    SiPrefix::Exa,
    SiPrefix::Zetta,
    SiPrefix::Yotta,
];

impl Prefix for SiPrefix {
    const BASE: u64 = 10;
    const SCALE: &[Self] = &SI_PREFIXES;

    fn power(&self) -> i64 {
        match self {
            SiPrefix::Yocto => -24,
            SiPrefix::Zepto => -21,
            SiPrefix::Atto => -18,
            SiPrefix::Femto => -15,
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Centi => -2,
            SiPrefix::Deci => -1,
            SiPrefix::Deca => 1,
            SiPrefix::Hecto => 2,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
            SiPrefix::Peta => 15,
            SiPrefix::Exa => 18,
            SiPrefix::Zetta => 21,
            SiPrefix::Yotta => 24,
        }
    }

    fn prefix(&self) -> &'static str {
        self.symbols()[0]
    }

    fn symbols(&self) -> &'static [&'static str] {
        match self {
            SiPrefix::Yocto => &["y"],
            SiPrefix::Zepto => &["z"],
            SiPrefix::Atto => &["a"],
            SiPrefix::Femto => &["f"],
            SiPrefix::Pico => &["p"],
            SiPrefix::Nano => &["n"],
            /* micro sign, ascii fallback, greek mu */
            SiPrefix::Micro => &["µ", "u", "μ"],
            SiPrefix::Milli => &["m"],
            SiPrefix::Centi => &["c"],
            SiPrefix::Deci => &["d"],
            SiPrefix::Deca => &["da"],
            SiPrefix::Hecto => &["h"],
            SiPrefix::Kilo => &["k"],
            SiPrefix::Mega => &["M"],
            SiPrefix::Giga => &["G"],
            SiPrefix::Tera => &["T"],
            SiPrefix::Peta => &["P"],
            SiPrefix::Exa => &["E"],
            SiPrefix::Zetta => &["Z"],
            SiPrefix::Yotta => &["Y"],
        }
    }
}

impl Display for SiPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.prefix())
    }
}

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod dimension;
pub mod error;
pub mod format_map;
pub mod formatter;
pub mod parser;
pub mod prefix;
pub mod quantity;
pub mod quantity_seed;
pub mod registry;
pub mod scanner;
pub mod si;
pub mod table;

pub use dimension::{BaseDimension, Dimension};
pub use error::DimError;
pub use format_map::{InputFormatMap, InputFormatMapGroup, OutputFormatMap};
pub use formatter::{FormattedQuantity, Formatter, MAX_SYMBOL};
pub use parser::{parse_quantity, parse_unit, parse_unit_bytes};
pub use prefix::{Prefix, SiPrefix};
pub use quantity::Quantity;
pub use quantity_seed::QuantitySeed;
pub use registry::FormatRegistry;
pub use scanner::{read_formatted, ScanState, UnitStringScanner};
pub use table::SortedTable;

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod prefix_trait;
pub mod si_prefix;

pub use prefix_trait::Prefix;
pub use si_prefix::SiPrefix;

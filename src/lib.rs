mod deep_copy;
mod eq;
mod error;
mod fold;
mod map;
mod mapping;
mod parser;
mod prelude;
pub mod registry;
mod repr;
#[cfg(feature = "serde_support")]
mod serde_support;
pub mod store;

pub use deep_copy::DeepCopy;
pub use error::{Error, Result};
pub use fold::{fold, AsciiLowercase, CaseFold, Casefold, Fold, Lowercase};
pub use map::*;
pub use mapping::Mapping;
pub use registry::Variant;
pub use repr::{Repr, Value};
#[cfg(feature = "serde_support")]
pub use serde_support::serialize_mapping;
#[cfg(feature = "preserve_order")]
pub use store::Ordered;
pub use store::{Backing, Sorted, Store, Unordered};

/// 解析字典的`Debug`输出
pub fn parse(input: &str) -> Result<Repr> { Repr::parse(input) }

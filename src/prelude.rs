pub use crate::{
    error::{Error, Result}, fold::{CaseFold, Fold, Lowercase}, store::{Backing, Store, Unordered}
};
pub use std::{
    borrow::Cow, collections::{BTreeMap, HashMap}, fmt::{self, Debug, Display}, hash::{BuildHasher, Hash}
};

#[cfg(feature = "preserve_order")]
pub use crate::store::Ordered;
#[cfg(feature = "preserve_order")]
pub use indexmap::IndexMap;

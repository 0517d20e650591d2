use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Common behaviour of aggregate id types.
///
/// Ids are opaque: the frontend only compares them and uses them as list keys.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Id as a string.
    fn as_string(&self) -> String;

    /// Parse an id from a string.
    fn from_string(s: &str) -> Result<Self, String>;
}

//! Wire-shape normalization helpers.
//!
//! Servers deliver a bare element where a sequence has exactly one entry;
//! the decoder always works with vectors. These helpers absorb both shapes
//! at deserialization time so nothing downstream re-checks.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(v: OneOrMany<T>) -> Self {
        match v {
            OneOrMany::Many(values) => values,
            OneOrMany::One(value) => vec![value],
        }
    }
}

/// Deserializes either a single element or a sequence into a `Vec`.
pub(crate) fn one_or_many<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    OneOrMany::deserialize(deserializer).map(Vec::from)
}

/// Like `one_or_many`, but keeps "entirely absent" distinct from "empty".
pub(crate) fn option_one_or_many<'de, T, D>(
    deserializer: D,
) -> Result<Option<Vec<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<OneOrMany<T>>::deserialize(deserializer).map(|opt| opt.map(Vec::from))
}

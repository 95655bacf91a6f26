// Partial update documents.
//
// A patch carries only the fields a client explicitly sent. Required fields are `Option<T>`
// read through `present` (absent keeps the stored value, `null` is rejected), nullable fields
// are `Option<Option<T>>` so an explicit `null` can be told apart from an omitted field.

use serde::{Deserialize, Deserializer};

pub trait MergePatch<R> {
    /// Overwrite every field present in the patch, keep the rest of `record`.
    fn merge_into(self, record: R) -> R;

    fn is_empty(&self) -> bool;
}

/// Deserializer for nullable patch fields. Use together with `#[serde(default)]`:
/// omitted -> `None`, `null` -> `Some(None)`, value -> `Some(Some(value))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserializer for required patch fields. Use together with `#[serde(default)]`:
/// omitted -> `None`, value -> `Some(value)`, `null` -> error.
pub fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Replace `target` when the patch names the field.
pub fn apply<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

// Filter evaluation over a collection.
//
// A filter is a conjunction of optional equality predicates. An absent predicate does not
// constrain anything, so the empty filter keeps the whole collection. A query parameter sent
// with an empty value (`?city=`) counts as absent.

use serde::de::IntoDeserializer;
use serde::de::value::StringDeserializer;
use serde::{Deserialize, Deserializer};

pub trait RecordFilter<R>: Send + Sync {
    fn matches(&self, record: &R) -> bool;
}

/// Matches every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl<R> RecordFilter<R> for NoFilter {
    fn matches(&self, _record: &R) -> bool {
        true
    }
}

pub fn matches_eq<T: PartialEq>(expected: &Option<T>, actual: &T) -> bool {
    expected.as_ref().is_none_or(|expected| expected == actual)
}

/// Query parameter deserializer. Use together with `#[serde(default)]`: omitted or empty
/// -> `None`, otherwise the value parsed as `T`.
pub fn empty_as_none<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.is_empty() => {
            let value: StringDeserializer<D::Error> = value.into_deserializer();
            T::deserialize(value).map(Some)
        }
        _ => Ok(None),
    }
}

/// Keep the records matching `filter`, in input order.
pub fn filter_records<'a, R>(
    records: impl IntoIterator<Item = &'a R>,
    filter: &dyn RecordFilter<R>,
) -> Vec<R>
where
    R: Clone + 'a,
{
    records
        .into_iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

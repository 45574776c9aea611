use serde::{Deserialize, Deserializer};

/// Field semantics for partial-update requests.
///
/// - `Missing` → field absent from the body, leave the column alone
/// - `Null` → explicit JSON null, store SQL NULL
/// - `Value` → set the column to the provided value
///
/// Declare update-request fields with `#[serde(default)]` so an absent key
/// stays `Missing` while a present `null` becomes `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    /// Nested-option view for the persistence layer:
    /// `None` → untouched, `Some(None)` → bind NULL, `Some(Some(&T))` → bind value.
    pub fn as_option(&self) -> Option<Option<&T>> {
        match self {
            Patch::Missing => None,
            Patch::Null => Some(None),
            Patch::Value(v) => Some(Some(v)),
        }
    }
}

//! Three-state field wrapper for partial updates.
//!
//! `Option<T>` cannot tell a missing key from an explicit `null`. Update
//! DTOs declare their fields as `Patch<T>` with `#[serde(default)]`:
//!
//! | JSON                | Value               |
//! |---------------------|---------------------|
//! | key missing         | `Patch::Absent`     |
//! | `"key": null`       | `Patch::Null`       |
//! | `"key": <value>`    | `Patch::Value(..)`  |
//!
//! Only `Value` counts as provided. `Null` is kept distinct so callers can
//! tell the two apart, but updates treat it like `Absent`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Absent | Patch::Null => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Patch::Null, Patch::Value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only reached when the key is present; a missing key falls back to
        // `Default` through `#[serde(default)]` on the containing struct.
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Value(v) => v.serialize(serializer),
            Patch::Absent | Patch::Null => serializer.serialize_none(),
        }
    }
}

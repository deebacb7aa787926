//! Optional fields for partial updates

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single field of a partial update.
///
/// `Absent` leaves the stored value untouched; `Present` replaces it. A JSON
/// `null` deserializes as `Absent`, so a field can't be cleared through a patch.
/// Use with `#[serde(default)]` so a missing key maps to `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field not supplied
    Absent,
    /// Field supplied with a value
    Present(T),
}

impl<T> Patch<T> {
    /// Returns true if the field was supplied
    pub fn is_present(&self) -> bool {
        matches!(self, Patch::Present(_))
    }

    /// Returns true if the field was not supplied
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Take the supplied value, if any.
    ///
    /// Stores bind this as a nullable parameter and keep the current column
    /// value when it is `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Present(value) => Some(value),
            Patch::Absent => None,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Patch::Absent, Patch::Present)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Present(value) => value.serialize(serializer),
            Patch::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        name: Patch<String>,
        #[serde(default)]
        order: Patch<i64>,
    }

    #[test]
    fn missing_and_null_fields_are_absent() {
        let probe: Probe = serde_json::from_str(r#"{"order": null}"#).unwrap();
        assert_eq!(probe.name, Patch::Absent);
        assert_eq!(probe.order, Patch::Absent);
    }

    #[test]
    fn empty_string_is_present() {
        let probe: Probe = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(probe.name, Patch::Present(String::new()));
    }

    #[test]
    fn zero_is_present() {
        let probe: Probe = serde_json::from_str(r#"{"order": 0}"#).unwrap();
        assert_eq!(probe.order, Patch::Present(0));
    }

    #[test]
    fn into_option_keeps_only_supplied_values() {
        assert_eq!(Patch::<i64>::Absent.into_option(), None);
        assert_eq!(Patch::Present(7).into_option(), Some(7));
        assert_eq!(Patch::Present(0).into_option(), Some(0));
    }
}

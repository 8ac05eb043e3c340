//! Serde glue for update fields that an explicit `null` may clear
//!
//! Use on `Option<Option<T>>` fields together with
//! `#[serde(default, skip_serializing_if = "Option::is_none")]`:
//!
//! - field omitted: `None`, the stored value is kept
//! - field `null`: `Some(None)`, the stored value is cleared
//! - field set: `Some(Some(value))`

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Patch {
        #[serde(default, with = "super", skip_serializing_if = "Option::is_none")]
        note: Option<Option<String>>,
    }

    #[test]
    fn test_absent_null_and_value_are_distinct() {
        let absent: Patch = serde_json::from_value(json!({})).unwrap();
        let cleared: Patch = serde_json::from_value(json!({"note": null})).unwrap();
        let set: Patch = serde_json::from_value(json!({"note": "hi"})).unwrap();

        assert_eq!(absent.note, None);
        assert_eq!(cleared.note, Some(None));
        assert_eq!(set.note, Some(Some("hi".to_string())));
    }

    #[test]
    fn test_only_supplied_fields_serialize() {
        assert_eq!(serde_json::to_value(Patch::default()).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(Patch { note: Some(None) }).unwrap(),
            json!({"note": null})
        );
    }
}

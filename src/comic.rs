use serde_json::{Map, Value};

use crate::{Error, Result};

/// One comic as returned by `/{num}/info.0.json`.
/// Kept as the raw JSON object so the field order of the source survives.
#[derive(Debug, Clone, PartialEq)]
pub struct Comic {
    fields: Map<String, Value>,
}

impl Comic {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let fields = serde_json::from_slice(bytes)?;
        Ok(Self { fields })
    }

    /// The comic number, `0` if the record doesn't carry a numeric one.
    pub fn num(&self) -> u32 {
        self.fields
            .get("num")
            .and_then(value_as_u32)
            .unwrap_or_default()
    }

    /// `num` exactly as the API sent it, for progress output.
    pub fn num_label(&self) -> String {
        match self.fields.get("num") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "NA".to_string(),
        }
    }

    pub fn attribute(&self, attr: &'static str) -> Result<&Value> {
        self.fields.get(attr).ok_or(Error::MissingAttribute {
            num: self.num(),
            attr,
        })
    }

    pub fn extra_parts(&self) -> Option<&Value> {
        self.fields.get("extra_parts")
    }
}

impl From<Map<String, Value>> for Comic {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Accepts both `5` and `"5"`, the API isn't consistent about it.
pub(crate) fn value_as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_and_reads_num() {
        let comic = Comic::from_slice(br#"{"num": 614, "title": "Woodpecker"}"#).unwrap();
        assert_eq!(comic.num(), 614);
        assert_eq!(comic.attribute("title").unwrap(), "Woodpecker");
    }

    #[test]
    fn string_num_is_accepted() {
        let comic = Comic::from_slice(br#"{"num": "12"}"#).unwrap();
        assert_eq!(comic.num(), 12);
    }

    #[test]
    fn num_label_keeps_the_raw_value() {
        let comic = Comic::from_slice(br#"{"num": "12a"}"#).unwrap();
        assert_eq!(comic.num(), 0);
        assert_eq!(comic.num_label(), "12a");

        let comic = Comic::from_slice(br#"{"num": 1024}"#).unwrap();
        assert_eq!(comic.num_label(), "1024");

        let comic = Comic::from_slice(br#"{"title": "no num"}"#).unwrap();
        assert_eq!(comic.num_label(), "NA");
    }

    #[test]
    fn missing_attribute_names_the_comic() {
        let comic = Comic::from_slice(br#"{"num": 3}"#).unwrap();
        let err = comic.attribute("alt").unwrap_err();
        assert!(matches!(err, Error::MissingAttribute { num: 3, attr: "alt" }));
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(matches!(Comic::from_slice(b"[1, 2]"), Err(Error::Json(_))));
    }
}

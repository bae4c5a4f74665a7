//! Structured interchange notations.
//!
//! JSON and YAML share one shape, the serde form of [`Document`], with text
//! as real Unicode. Reading escapes it back into the stored form:
//!
//! ```yaml
//! header:
//!   submitterId: "@U1@"
//! individuals:
//!   - id: "@I1@"
//!     names:
//!       - givenName: John
//!         surname: Doe
//!         primary: true
//!     gender: MALE
//!     birthEvents:
//!       - date: { year: "1822", month: 10, day: "02" }
//!         place: Weston
//!         primary: false
//! families:
//!   - id: "@F1@"
//!     fatherId: "@I1@"
//!     childIds: ["@I3@"]
//! ```

use crate::error::GedcomError;
use crate::model::Document;

use super::decode::{decode_text_fields, escape_text_fields};
use super::{DocumentFormat, Notation};

/// JSON handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl DocumentFormat for Json {
    fn notation(&self) -> Notation {
        Notation::Json
    }

    fn read(&self, input: &[u8]) -> Result<Document, GedcomError> {
        let mut document: Document = serde_json::from_slice(input)?;
        escape_text_fields(&mut document);
        Ok(document)
    }

    fn write(&self, document: &Document) -> Result<Vec<u8>, GedcomError> {
        let mut out = serde_json::to_vec_pretty(&decode_text_fields(document))?;
        out.push(b'\n');
        Ok(out)
    }
}

/// YAML handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl DocumentFormat for Yaml {
    fn notation(&self) -> Notation {
        Notation::Yaml
    }

    fn read(&self, input: &[u8]) -> Result<Document, GedcomError> {
        if input.iter().all(u8::is_ascii_whitespace) {
            return Ok(Document::new());
        }
        let mut document: Document = serde_yaml::from_slice(input)?;
        escape_text_fields(&mut document);
        Ok(document)
    }

    fn write(&self, document: &Document) -> Result<Vec<u8>, GedcomError> {
        let yaml = serde_yaml::to_string(&decode_text_fields(document))?;
        Ok(yaml.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Date, Event, Family, Gender, Individual, Name};

    fn sample() -> Document {
        let mut individual = Individual::new("@I1@");
        individual.gender = Gender::Female;
        individual.names.push(Name {
            given_name: "Z\\u{f6}e".into(),
            surname: "Smith".into(),
            primary: true,
        });
        individual.birth_events.push(Event {
            date: Date::new(Some("1822".into()), Some(10), Some("02".into())),
            place: "Weston".into(),
            primary: false,
        });
        Document {
            individuals: vec![individual],
            families: vec![Family {
                id: "@F1@".into(),
                father_id: None,
                mother_id: Some("@I1@".into()),
                child_ids: Vec::new(),
            }],
            ..Document::default()
        }
    }

    #[test]
    fn test_json_uses_camel_case_and_gender_names() {
        let out = String::from_utf8(Json.write(&sample()).unwrap()).unwrap();
        assert!(out.contains("\"givenName\": \"Zöe\""));
        assert!(out.contains("\"gender\": \"FEMALE\""));
        assert!(out.contains("\"motherId\": \"@I1@\""));
        assert!(!out.contains("fatherId"));
    }

    #[test]
    fn test_json_read_back() {
        let out = Json.write(&sample()).unwrap();
        let document = Json.read(&out).unwrap();
        assert_eq!(document.individuals[0].names[0].given_name, "Z\\u{f6}e");
        assert_eq!(document.individuals[0].birth_events[0].date.month(), Some(10));
        assert_eq!(document.families[0].mother_id.as_deref(), Some("@I1@"));
    }

    #[test]
    fn test_yaml_read_back() {
        let out = Yaml.write(&sample()).unwrap();
        let text = std::str::from_utf8(&out).unwrap();
        assert!(text.contains("gender: FEMALE"));

        let document = Yaml.read(&out).unwrap();
        assert_eq!(document.individuals[0].gender, Gender::Female);
        assert_eq!(document.individuals[0].birth_events[0].place, "Weston");
    }

    #[test]
    fn test_json_to_json_keeps_literal_escapes() {
        let input = br#"{"individuals": [{"id": "@I1@", "names": [{"givenName": "a\\u{41}"}]}]}"#;
        let document = Json.read(input).unwrap();
        let again = Json.read(&Json.write(&document).unwrap()).unwrap();

        assert_eq!(again, document);
        let out = String::from_utf8(Json.write(&again).unwrap()).unwrap();
        assert!(out.contains(r#""givenName": "a\\u{41}""#));
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(matches!(Json.read(b"{ nope"), Err(GedcomError::Json(_))));
        assert!(matches!(
            Yaml.read(b"individuals: [unclosed"),
            Err(GedcomError::Yaml(_))
        ));
    }

    #[test]
    fn test_empty_yaml_is_empty_document() {
        assert!(Yaml.read(b"\n").unwrap().is_empty());
    }
}

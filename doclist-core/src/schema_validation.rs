use jsonschema::Validator;
use serde_json::{json, Value};
use std::sync::LazyLock;

/// JSON Schema every doctor record must satisfy before it is deserialized.
/// Only identity and the two consultation flags are required; the remaining
/// fields are type-checked when present and defaulted when absent.
pub fn doctor_record_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["id", "video_consult", "in_clinic"],
        "properties": {
            "id": {"type": "string", "minLength": 1},
            "name": {"type": ["string", "null"]},
            "name_initials": {"type": "string"},
            "photo": {"type": ["string", "null"]},
            "doctor_introduction": {"type": "string"},
            "specialities": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["name"],
                    "properties": {"name": {"type": "string"}}
                }
            },
            "fees": {"type": "string"},
            "experience": {"type": "string"},
            "languages": {"type": "array", "items": {"type": "string"}},
            "clinic": {
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "address": {
                        "type": "object",
                        "properties": {
                            "locality": {"type": "string"},
                            "city": {"type": "string"},
                            "address_line1": {"type": "string"}
                        }
                    }
                }
            },
            "video_consult": {"type": "boolean"},
            "in_clinic": {"type": "boolean"}
        }
    })
}

static DOCTOR_VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    jsonschema::validator_for(&doctor_record_schema()).expect("doctor record schema compiles")
});

/// Validate a single doctor record against [`doctor_record_schema`]
/// Returns Ok(()) if valid, Err with every violation and its location if invalid
pub fn validate_doctor_record(record: &Value) -> Result<(), Vec<String>> {
    collect_errors(&DOCTOR_VALIDATOR, record)
}

fn collect_errors(validator: &Validator, data: &Value) -> Result<(), Vec<String>> {
    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_passes() {
        let record = json!({"id": "1", "video_consult": true, "in_clinic": false});
        assert!(validate_doctor_record(&record).is_ok());
    }

    #[test]
    fn test_null_name_passes() {
        let record = json!({"id": "1", "name": null, "video_consult": true, "in_clinic": true});
        assert!(validate_doctor_record(&record).is_ok());
    }

    #[test]
    fn test_missing_required_fields_fail() {
        let record = json!({"name": "Dr. A", "fees": "₹ 500"});
        let errors = validate_doctor_record(&record).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("id")), "{:?}", errors);
    }

    #[test]
    fn test_wrong_type_fails_with_location() {
        let record = json!({
            "id": "1",
            "video_consult": "yes",
            "in_clinic": true
        });
        let errors = validate_doctor_record(&record).unwrap_err();
        assert!(errors[0].ends_with("at /video_consult"), "{:?}", errors);
    }

    #[test]
    fn test_malformed_specialty_fails() {
        let record = json!({
            "id": "1",
            "specialities": [{"title": "ENT"}],
            "video_consult": true,
            "in_clinic": true
        });
        assert!(validate_doctor_record(&record).is_err());
    }

    #[test]
    fn test_empty_id_fails() {
        let record = json!({"id": "", "video_consult": true, "in_clinic": true});
        assert!(validate_doctor_record(&record).is_err());
    }

    #[test]
    fn test_null_initials_fail() {
        let record = json!({"id": "1", "name_initials": null, "video_consult": true, "in_clinic": true});
        assert!(validate_doctor_record(&record).is_err());
    }
}

//! Record mapping
//!
//! Pure transforms between upstream payload shapes and the flat maps the
//! presentation layer consumes.

use std::collections::HashMap;

use crate::types::Record;

/// Flatten records into display rows keyed by exactly the resolved property
/// names. Absent or null values become empty strings; record order is kept.
pub fn display_rows(columns: &[String], records: &[Record]) -> Vec<HashMap<String, String>> {
    records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| {
                    let value = record
                        .properties
                        .get(column)
                        .and_then(|v| v.clone())
                        .unwrap_or_default();
                    (column.clone(), value)
                })
                .collect()
        })
        .collect()
}

/// Build the create payload from submitted form fields. A field is included
/// only when it was submitted with a non-empty value; blank fields are left
/// out entirely rather than sent as empty strings.
pub fn create_properties(
    columns: &[String],
    form: &HashMap<String, String>,
) -> HashMap<String, String> {
    columns
        .iter()
        .filter_map(|column| {
            form.get(column)
                .filter(|value| !value.is_empty())
                .map(|value| (column.clone(), value.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: &[(&str, Option<&str>)]) -> Record {
        Record {
            id: "1".to_string(),
            properties: values
                .iter()
                .map(|(k, v)| (k.to_string(), v.map(String::from)))
                .collect(),
        }
    }

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn missing_property_maps_to_empty_string() {
        let rows = display_rows(
            &columns(&["name", "email"]),
            &[record(&[("name", Some("Acme"))])],
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Acme");
        assert_eq!(rows[0]["email"], "");
    }

    #[test]
    fn null_property_maps_to_empty_string() {
        let rows = display_rows(
            &columns(&["name", "email"]),
            &[record(&[("name", Some("Acme")), ("email", None)])],
        );
        assert_eq!(rows[0]["email"], "");
    }

    #[test]
    fn rows_carry_exactly_the_resolved_columns() {
        let rows = display_rows(
            &columns(&["name"]),
            &[record(&[("name", Some("Acme")), ("email", Some("a@b.c"))])],
        );
        assert_eq!(rows[0].len(), 1);
        assert!(!rows[0].contains_key("email"));
    }

    #[test]
    fn record_order_is_preserved() {
        let rows = display_rows(
            &columns(&["name"]),
            &[
                record(&[("name", Some("first"))]),
                record(&[("name", Some("second"))]),
            ],
        );
        assert_eq!(rows[0]["name"], "first");
        assert_eq!(rows[1]["name"], "second");
    }

    #[test]
    fn blank_form_fields_are_omitted_from_the_payload() {
        let form: HashMap<String, String> = [
            ("name".to_string(), "Acme".to_string()),
            ("email".to_string(), String::new()),
        ]
        .into_iter()
        .collect();

        let payload = create_properties(&columns(&["name", "email"]), &form);
        assert_eq!(payload.len(), 1);
        assert_eq!(payload["name"], "Acme");
        assert!(!payload.contains_key("email"));
    }

    #[test]
    fn unresolved_form_fields_are_ignored() {
        let form: HashMap<String, String> = [
            ("name".to_string(), "Acme".to_string()),
            ("smuggled".to_string(), "value".to_string()),
        ]
        .into_iter()
        .collect();

        let payload = create_properties(&columns(&["name"]), &form);
        assert_eq!(payload.len(), 1);
        assert!(!payload.contains_key("smuggled"));
    }
}

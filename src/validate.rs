//! Schema validation for untrusted tabular input.
//!
//! Both checks are pure and run before any sanitization: the header check
//! proves every required column exists, then the content check proves every
//! required cell is non-blank. A row set that fails here is never partially
//! processed.

use crate::constants::schema;
use crate::errors::RadarError;
use crate::sanitize::RawRow;
use crate::types::ColumnName;

/// Verify that every required column is present in the header set.
pub fn validate_columns(column_names: &[ColumnName]) -> Result<(), RadarError> {
    let missing: Vec<&str> = schema::REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !column_names.iter().any(|name| name == required))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(RadarError::malformed(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )))
    }
}

/// Verify that every required cell holds non-blank content.
///
/// Row numbers in failure messages are 1-based and count data rows only
/// (the header is not a data row). The first offending row/column wins.
pub fn validate_content(rows: &[RawRow]) -> Result<(), RadarError> {
    for (index, row) in rows.iter().enumerate() {
        for column in schema::REQUIRED_COLUMNS {
            let blank = row
                .get(column)
                .map(|value| value.trim().is_empty())
                .unwrap_or(true);
            if blank {
                return Err(RadarError::malformed(format!(
                    "empty value for column '{}' in row {}",
                    column,
                    index + 1
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<ColumnName> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    fn full_row(name: &str) -> RawRow {
        row(&[
            ("name", name),
            ("ring", "Adopt"),
            ("quadrant", "tools"),
            ("isNew", "true"),
            ("description", "d"),
        ])
    }

    #[test]
    fn accepts_the_complete_required_set_with_or_without_topic() {
        assert!(validate_columns(&columns(&[
            "name",
            "ring",
            "quadrant",
            "isNew",
            "description"
        ]))
        .is_ok());
        assert!(validate_columns(&columns(&[
            "name",
            "ring",
            "quadrant",
            "isNew",
            "description",
            "topic"
        ]))
        .is_ok());
    }

    #[test]
    fn missing_columns_are_all_named() {
        let err = validate_columns(&columns(&["name", "quadrant", "description"])).unwrap_err();
        match err {
            RadarError::MalformedData { message } => {
                assert!(message.contains("ring"));
                assert!(message.contains("isNew"));
                assert!(!message.contains("name,"));
            }
            other => panic!("expected MalformedData, got {other:?}"),
        }
    }

    #[test]
    fn first_blank_required_cell_names_column_and_one_based_row() {
        let rows = vec![full_row("Tech A"), {
            let mut second = full_row("Tech B");
            second.insert("ring".to_string(), "   ".to_string());
            second
        }];
        let err = validate_content(&rows).unwrap_err();
        match err {
            RadarError::MalformedData { message } => {
                assert!(message.contains("'ring'"), "{message}");
                assert!(message.contains("row 2"), "{message}");
            }
            other => panic!("expected MalformedData, got {other:?}"),
        }
    }

    #[test]
    fn absent_required_cell_counts_as_blank() {
        let mut incomplete = full_row("Tech A");
        incomplete.shift_remove("description");
        let err = validate_content(&[incomplete]).unwrap_err();
        assert!(matches!(
            err,
            RadarError::MalformedData { message } if message.contains("'description'") && message.contains("row 1")
        ));
    }

    #[test]
    fn optional_topic_may_be_blank() {
        let mut with_topic = full_row("Tech A");
        with_topic.insert("topic".to_string(), "".to_string());
        assert!(validate_content(&[with_topic]).is_ok());
    }
}

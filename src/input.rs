//! CSV review ingestion
//!
//! Mirrors the input surface of the interactive tool: an uploaded CSV with
//! at least one text-typed column, with the caller selecting which column
//! holds the review text.

use std::path::Path;

use crate::domain::Review;
use crate::error::{Result, SentiraError};

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::Reader::from_path(path)
        .map_err(|e| SentiraError::Input(format!("cannot read {}: {}", path.display(), e)))
}

fn read_err(path: &Path, e: csv::Error) -> SentiraError {
    SentiraError::Input(format!("malformed CSV in {}: {}", path.display(), e))
}

/// Names of text-typed columns, in header order.
///
/// A column is text-typed when at least one non-empty value in it does not
/// parse as a number; a file with zero data rows therefore has none.
pub fn text_columns(path: &Path) -> Result<Vec<String>> {
    let mut reader = open(path)?;
    let headers = reader.headers().map_err(|e| read_err(path, e))?.clone();
    let mut is_text = vec![false; headers.len()];

    for record in reader.records() {
        let record = record.map_err(|e| read_err(path, e))?;
        for (i, field) in record.iter().enumerate() {
            let field = field.trim();
            if !field.is_empty() && field.parse::<f64>().is_err() {
                if let Some(slot) = is_text.get_mut(i) {
                    *slot = true;
                }
            }
        }
    }

    Ok(headers
        .iter()
        .zip(is_text)
        .filter(|(_, text)| *text)
        .map(|(header, _)| header.to_string())
        .collect())
}

/// Load the reviews in `column`, preserving row order.
///
/// With no explicit column, the first text-typed column is selected; a file
/// without one is an input error. An explicit column only needs to exist in
/// the header, so a zero-row file with a named column yields an empty batch.
/// Missing cells become empty reviews.
pub fn load_reviews(path: &Path, column: Option<&str>) -> Result<(String, Vec<Review>)> {
    let column = match column {
        Some(name) => name.to_string(),
        None => text_columns(path)?.into_iter().next().ok_or_else(|| {
            SentiraError::Input(format!("no text column found in {}", path.display()))
        })?,
    };

    let mut reader = open(path)?;
    let headers = reader.headers().map_err(|e| read_err(path, e))?.clone();
    let index = headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| {
            SentiraError::Input(format!(
                "column '{}' not found in {}",
                column,
                path.display()
            ))
        })?;

    let mut reviews = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| read_err(path, e))?;
        reviews.push(Review::new(record.get(index).unwrap_or("")));
    }

    Ok((column, reviews))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_detects_text_columns_only() {
        let file = csv_file("id,review,score\n1,Great food!,5\n2,Terrible service,1\n");
        let columns = text_columns(file.path()).unwrap();
        assert_eq!(columns, vec!["review".to_string()]);
    }

    #[test]
    fn test_auto_selects_first_text_column() {
        let file = csv_file("id,review,notes\n1,Great food!,loved it\n2,It was okay,fine\n");
        let (column, reviews) = load_reviews(file.path(), None).unwrap();
        assert_eq!(column, "review");
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0], Review::new("Great food!"));
        assert_eq!(reviews[1], Review::new("It was okay"));
    }

    #[test]
    fn test_explicit_column_selection() {
        let file = csv_file("review,notes\nGreat food!,loved it\n");
        let (column, reviews) = load_reviews(file.path(), Some("notes")).unwrap();
        assert_eq!(column, "notes");
        assert_eq!(reviews, vec![Review::new("loved it")]);
    }

    #[test]
    fn test_no_text_column_is_input_error() {
        let file = csv_file("id,score\n1,5\n2,1\n");
        let err = load_reviews(file.path(), None).unwrap_err();
        assert!(matches!(err, SentiraError::Input(_)));
    }

    #[test]
    fn test_missing_explicit_column_is_input_error() {
        let file = csv_file("review\nGreat food!\n");
        let err = load_reviews(file.path(), Some("comments")).unwrap_err();
        assert!(matches!(err, SentiraError::Input(_)));
    }

    #[test]
    fn test_zero_row_file_with_named_column_is_empty_batch() {
        let file = csv_file("review\n");
        let (_, reviews) = load_reviews(file.path(), Some("review")).unwrap();
        assert!(reviews.is_empty());
    }

    #[test]
    fn test_row_order_preserved() {
        let file = csv_file("review\nfirst\nsecond\nthird\n");
        let (_, reviews) = load_reviews(file.path(), None).unwrap();
        let texts: Vec<&str> = reviews.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }
}

use std::io::Read;
use std::path::Path;

use serde::{de, Deserialize, Deserializer};

use super::domain::SubjectMark;

#[derive(Debug)]
pub enum MarksImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for MarksImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarksImportError::Io(err) => write!(f, "failed to read marks file: {}", err),
            MarksImportError::Csv(err) => write!(f, "invalid marks CSV data: {}", err),
        }
    }
}

impl std::error::Error for MarksImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MarksImportError::Io(err) => Some(err),
            MarksImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for MarksImportError {
    fn from(value: std::io::Error) -> Self {
        MarksImportError::Io(value)
    }
}

impl From<csv::Error> for MarksImportError {
    fn from(value: csv::Error) -> Self {
        MarksImportError::Csv(value)
    }
}

/// Reads subject marks from a CSV export.
///
/// Expects a `subject` column plus either `percentage` or `marks_obtained` and
/// `total_marks`. Rows with a blank subject are skipped.
pub struct MarksImporter;

impl MarksImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SubjectMark>, MarksImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<SubjectMark>, MarksImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut marks = Vec::new();

        for record in csv_reader.deserialize::<MarkRow>() {
            let row = record?;
            if row.subject.trim().is_empty() {
                continue;
            }
            marks.push(SubjectMark {
                subject: row.subject,
                percentage: row.percentage,
                marks_obtained: row.marks_obtained,
                total_marks: row.total_marks,
            });
        }

        Ok(marks)
    }
}

#[derive(Debug, Deserialize)]
struct MarkRow {
    #[serde(alias = "Subject", alias = "subject_name")]
    subject: String,
    #[serde(
        default,
        alias = "Percentage",
        deserialize_with = "empty_string_as_none"
    )]
    percentage: Option<f32>,
    #[serde(
        default,
        alias = "Marks Obtained",
        deserialize_with = "empty_string_as_none"
    )]
    marks_obtained: Option<f32>,
    #[serde(
        default,
        alias = "Total Marks",
        deserialize_with = "empty_string_as_none"
    )]
    total_marks: Option<f32>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .trim_end_matches('%')
            .parse::<f32>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("'{value}' is not a number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_percentages_and_raw_marks() {
        let data = "subject,percentage,marks_obtained,total_marks\n\
                    Physics,88,,\n\
                    Chemistry,,45,50\n\
                    ,70,,\n\
                    English, 76% ,,\n";
        let marks = MarksImporter::from_reader(data.as_bytes()).expect("csv parses");
        assert_eq!(marks.len(), 3);
        assert_eq!(marks[0].effective_percentage(), Some(88.0));
        assert_eq!(marks[1].marks_obtained, Some(45.0));
        assert_eq!(marks[2].percentage, Some(76.0));
    }

    #[test]
    fn accepts_title_case_headers() {
        let data = "Subject,Percentage\nHistory,64\n";
        let marks = MarksImporter::from_reader(data.as_bytes()).expect("csv parses");
        assert_eq!(marks[0].subject, "History");
        assert_eq!(marks[0].percentage, Some(64.0));
    }

    #[test]
    fn rejects_non_numeric_marks() {
        let data = "subject,percentage\nBiology,excellent\n";
        let err = MarksImporter::from_reader(data.as_bytes()).expect_err("bad number");
        assert!(matches!(err, MarksImportError::Csv(_)));
        assert!(err.to_string().contains("invalid marks CSV data"));
    }
}

//! Authored content handed over by the host framework.
//!
//! Content is a table of rows and cells. Only rows with at least two cells
//! matter: the first cell is a label, the second its value.

use std::path::Path;

use hero_video_common::{Error, Result};
use serde::{Deserialize, Serialize};

const TITLE_LABEL: &str = "title";
const VIDEO_LABEL: &str = "video";

/// One authored row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pub cells: Vec<String>,
}

/// Authored rows, in document order.
///
/// Deserializes from either a bare array of rows or a `{ "rows": [...] }`
/// table (the only shape TOML allows).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContentRepr")]
pub struct AuthoredContent {
    pub rows: Vec<Row>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContentRepr {
    Rows(Vec<Row>),
    Table { rows: Vec<Row> },
}

impl From<ContentRepr> for AuthoredContent {
    fn from(repr: ContentRepr) -> Self {
        match repr {
            ContentRepr::Rows(rows) | ContentRepr::Table { rows } => Self { rows },
        }
    }
}

/// Values extracted from authored content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthoredFields {
    pub title: Option<String>,
    pub video: Option<String>,
}

impl AuthoredContent {
    pub fn from_rows<R, C>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|cells| Row {
                    cells: cells.into_iter().map(Into::into).collect(),
                })
                .collect(),
        }
    }

    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_toml(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::invalid_input(e.to_string()))
    }

    /// Read content from a `.toml` or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml(&raw),
            _ => Self::from_json(&raw),
        }
    }

    /// Scan rows for the title and video labels.
    ///
    /// Labels match by case-insensitive prefix. Later rows overwrite earlier
    /// ones, and an empty final value counts as absent.
    pub fn fields(&self) -> AuthoredFields {
        let mut title = String::new();
        let mut video = String::new();

        for row in &self.rows {
            let [label, value, ..] = row.cells.as_slice() else {
                continue;
            };
            let label = label.trim().to_lowercase();
            let value = value.trim();
            if label.starts_with(TITLE_LABEL) {
                title = value.to_string();
            } else if label.starts_with(VIDEO_LABEL) {
                video = value.to_string();
            } else {
                tracing::trace!(%label, "Ignoring unrecognized row");
            }
        }

        AuthoredFields {
            title: Some(title).filter(|s| !s.is_empty()),
            video: Some(video).filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_title_and_video() {
        let rows = [["Title", "Welcome"], ["Video", "https://vimeo.com/1"]];
        let fields = AuthoredContent::from_rows(rows).fields();
        assert_eq!(fields.title.as_deref(), Some("Welcome"));
        assert_eq!(fields.video.as_deref(), Some("https://vimeo.com/1"));
    }

    #[test]
    fn test_labels_match_by_prefix_ignoring_case() {
        let rows = [["  TITLE:  ", "  Spaced  "], ["Video URL", "clip.mp4"]];
        let fields = AuthoredContent::from_rows(rows).fields();
        assert_eq!(fields.title.as_deref(), Some("Spaced"));
        assert_eq!(fields.video.as_deref(), Some("clip.mp4"));
    }

    #[test]
    fn test_last_row_wins() {
        let content = AuthoredContent::from_rows([
            ["Title", "First"],
            ["Title", "Second"],
            ["Video", "a.mp4"],
            ["Video", ""],
        ]);
        let fields = content.fields();
        assert_eq!(fields.title.as_deref(), Some("Second"));
        // An empty final value clears the earlier one.
        assert_eq!(fields.video, None);
    }

    #[test]
    fn test_short_and_unknown_rows_ignored() {
        let content = AuthoredContent::from_rows(vec![
            vec!["Title"],
            vec!["Subtitle", "nope"],
            vec!["Caption", "ignored", "extra"],
            vec![],
        ]);
        assert_eq!(content.fields(), AuthoredFields::default());
    }

    #[test]
    fn test_extra_cells_ignored() {
        let content = AuthoredContent::from_rows([["Video", "a.mp4", "b.mp4"]]);
        assert_eq!(content.fields().video.as_deref(), Some("a.mp4"));
    }

    #[test]
    fn test_json_shapes() {
        let bare = AuthoredContent::from_json(r#"[["Title","Hi"]]"#).unwrap();
        let table = AuthoredContent::from_json(r#"{"rows":[["Title","Hi"]]}"#).unwrap();
        assert_eq!(bare, table);
        assert!(AuthoredContent::from_json("{").is_err());
    }

    #[test]
    fn test_toml() {
        let input = r#"rows = [["Title", "Hi"], ["Video", "https://youtu.be/x"]]"#;
        let fields = AuthoredContent::from_toml(input).unwrap().fields();
        assert_eq!(fields.video.as_deref(), Some("https://youtu.be/x"));
        assert!(AuthoredContent::from_toml("rows = 3").is_err());
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("content.json");
        std::fs::write(&json, r#"[["Title","From JSON"]]"#).unwrap();
        let toml_path = dir.path().join("content.TOML");
        std::fs::write(&toml_path, r#"rows = [["Title", "From TOML"]]"#).unwrap();

        let from_json = AuthoredContent::load(&json).unwrap().fields();
        assert_eq!(from_json.title.as_deref(), Some("From JSON"));
        let from_toml = AuthoredContent::load(&toml_path).unwrap().fields();
        assert_eq!(from_toml.title.as_deref(), Some("From TOML"));
        assert!(AuthoredContent::load(&dir.path().join("missing.json")).is_err());
    }
}

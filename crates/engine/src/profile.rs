//! Reusable sort descriptions loaded from TOML or JSON.
//!
//! ```toml
//! start = 2
//! end = -1
//! keys = ["last_name", "-first_name"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::header::{HeaderIndex, DESCENDING_PREFIX};
use crate::row::RowCells;
use crate::sort::sort_rows_by_title;

/// A sort request by header title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortProfile {
    /// First row of the window, 1-based
    #[serde(default = "default_start")]
    pub start: usize,
    /// Last row of the window, inclusive; -1 runs through the last row
    #[serde(default = "default_end")]
    pub end: isize,
    /// Header titles, major key first. Prefix with `-` for descending.
    pub keys: Vec<String>,
}

fn default_start() -> usize {
    1
}

fn default_end() -> isize {
    -1
}

impl SortProfile {
    pub fn from_toml(input: &str) -> Result<Self> {
        let profile: SortProfile =
            toml::from_str(input).map_err(|e| EngineError::Profile(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn from_json(input: &str) -> Result<Self> {
        let profile: SortProfile =
            serde_json::from_str(input).map_err(|e| EngineError::Profile(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a `.toml` or `.json` profile.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&input),
            Some("json") => Self::from_json(&input),
            _ => Err(EngineError::Profile(format!(
                "unsupported profile format: {}",
                path.display()
            ))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.keys.is_empty() {
            return Err(EngineError::Profile("at least one sort key is required".into()));
        }
        if let Some(key) = self
            .keys
            .iter()
            .find(|k| k.is_empty() || k.strip_prefix(DESCENDING_PREFIX) == Some(""))
        {
            return Err(EngineError::Profile(format!("empty sort key {key:?}")));
        }
        if self.start == 0 {
            return Err(EngineError::Profile("start is 1-based, got 0".into()));
        }
        if self.end != -1 && (self.end < 0 || (self.end as usize) < self.start) {
            return Err(EngineError::Profile(format!(
                "end must be -1 or at least start ({}), got {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Sort `rows` as this profile describes.
    pub fn apply<R: RowCells>(&self, rows: &mut [R], header: &HeaderIndex) -> Result<()> {
        sort_rows_by_title(rows, self.start, self.end, header, self.keys.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_defaults() {
        let profile = SortProfile::from_toml(r#"keys = ["amount"]"#).unwrap();
        assert_eq!(profile.start, 1);
        assert_eq!(profile.end, -1);
        assert_eq!(profile.keys, vec!["amount"]);
    }

    #[test]
    fn test_from_toml_full() {
        let profile = SortProfile::from_toml(
            r#"
start = 2
end = 10
keys = ["last_name", "-first_name"]
"#,
        )
        .unwrap();
        assert_eq!(profile.start, 2);
        assert_eq!(profile.end, 10);
        assert_eq!(profile.keys, vec!["last_name", "-first_name"]);
    }

    #[test]
    fn test_from_json() {
        let profile =
            SortProfile::from_json(r#"{"start": 2, "keys": ["-amount", "first_name"]}"#).unwrap();
        assert_eq!(profile.start, 2);
        assert_eq!(profile.end, -1);
        assert_eq!(profile.keys.len(), 2);
    }

    #[test]
    fn test_validation() {
        let cases = [
            r#"keys = []"#,
            r#"keys = [""]"#,
            r#"keys = ["-"]"#,
            "start = 0\nkeys = [\"a\"]",
            "start = 5\nend = 3\nkeys = [\"a\"]",
            "end = -2\nkeys = [\"a\"]",
        ];
        for input in cases {
            assert!(
                matches!(SortProfile::from_toml(input), Err(EngineError::Profile(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_error_is_profile_error() {
        assert!(matches!(SortProfile::from_toml("keys = "), Err(EngineError::Profile(_))));
        assert!(matches!(SortProfile::from_json("{"), Err(EngineError::Profile(_))));
        assert!(matches!(SortProfile::from_toml("start = 1"), Err(EngineError::Profile(_))));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("people.toml");
        std::fs::write(&toml_path, "start = 2\nkeys = [\"name\"]\n").unwrap();
        assert_eq!(SortProfile::load(&toml_path).unwrap().start, 2);

        let json_path = dir.path().join("people.json");
        std::fs::write(&json_path, r#"{"keys": ["-name"]}"#).unwrap();
        assert_eq!(SortProfile::load(&json_path).unwrap().keys, vec!["-name"]);

        let yaml_path = dir.path().join("people.yaml");
        std::fs::write(&yaml_path, "keys: [name]").unwrap();
        assert!(matches!(SortProfile::load(&yaml_path), Err(EngineError::Profile(_))));

        assert!(matches!(
            SortProfile::load(dir.path().join("missing.toml")),
            Err(EngineError::Io(_))
        ));
    }

    #[test]
    fn test_apply() {
        let mut rows = vec![
            vec!["name", "score"],
            vec!["b", "9"],
            vec!["a", "80"],
            vec!["c", "700"],
        ];
        let header = HeaderIndex::build(&rows[0]);
        let profile = SortProfile::from_toml("start = 2\nkeys = [\"-score\"]").unwrap();
        profile.apply(&mut rows, &header).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r[0]).collect();
        assert_eq!(names, vec!["name", "c", "a", "b"]);
    }
}

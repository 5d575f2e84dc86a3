use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// A hand-measured crop box, typically read off the grid guide.
/// `name` is used verbatim as the output file stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl ManifestEntry {
    pub fn filename(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// Read a JSON array of crop boxes
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>> {
    let text = fs::read_to_string(path)?;
    let entries: Vec<ManifestEntry> = serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} crop box(es) from {:?}", entries.len(), path);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_crop_boxes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boxes.json");
        fs::write(
            &path,
            r#"[
                { "name": "archers", "left": 35, "top": 390, "width": 320, "height": 320 },
                { "name": "iron_guards", "left": 725, "top": 390, "width": 320, "height": 320 }
            ]"#,
        )
        .unwrap();

        let entries = load_manifest(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].left, 725);
        assert_eq!(entries[1].filename(), "iron_guards.png");
    }

    #[test]
    fn missing_field_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boxes.json");
        fs::write(&path, r#"[{ "name": "imp", "left": 1 }]"#).unwrap();
        assert!(matches!(load_manifest(&path), Err(Error::Json { .. })));
    }
}

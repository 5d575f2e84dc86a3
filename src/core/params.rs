use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::HeaderEstimate;

/// Canonical edge length of an extracted card, in pixels
pub const DEFAULT_CARD_SIZE: u32 = 128;

/// Extraction parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionParams {
    /// Number of card columns; also drives index -> (row, column) mapping
    pub columns: u32,
    pub rows: u32,
    pub header: HeaderEstimate,
    /// Edge length of the square output cards
    pub card_size: u32,
}

impl Default for ExtractionParams {
    fn default() -> Self {
        Self {
            columns: 3,
            rows: 4,
            header: HeaderEstimate::default(),
            card_size: DEFAULT_CARD_SIZE,
        }
    }
}

impl ExtractionParams {
    /// Layout used by the grid guide: rows + 2 divisor for header and footer
    pub fn guide() -> Self {
        Self {
            header: HeaderEstimate::ExtraRows(2),
            ..Self::default()
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&text).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(Error::InvalidArgument {
                arg: "columns",
                value: self.columns.to_string(),
            });
        }
        if self.card_size == 0 {
            return Err(Error::InvalidArgument {
                arg: "card_size",
                value: self.card_size.to_string(),
            });
        }
        if let HeaderEstimate::UsableFraction(f) = self.header {
            if !(f > 0.0 && f <= 1.0) {
                return Err(Error::InvalidArgument {
                    arg: "usable_fraction",
                    value: f.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let params: ExtractionParams = serde_json::from_str(r#"{ "rows": 5 }"#).unwrap();
        assert_eq!(params.rows, 5);
        assert_eq!(params.columns, 3);
        assert_eq!(params.card_size, DEFAULT_CARD_SIZE);
        assert_eq!(params.header, HeaderEstimate::UsableFraction(0.7));
    }

    #[test]
    fn header_estimate_parses_from_json() {
        let params: ExtractionParams =
            serde_json::from_str(r#"{ "header": { "extra_rows": 2 } }"#).unwrap();
        assert_eq!(params.header, HeaderEstimate::ExtraRows(2));
    }

    #[test]
    fn rejects_zero_columns_and_bad_fraction() {
        let zero_cols = ExtractionParams {
            columns: 0,
            ..Default::default()
        };
        assert!(zero_cols.validate().is_err());

        let bad_fraction = ExtractionParams {
            header: HeaderEstimate::UsableFraction(1.5),
            ..Default::default()
        };
        assert!(bad_fraction.validate().is_err());
        assert!(ExtractionParams::guide().validate().is_ok());
    }
}

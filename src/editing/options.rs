use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::segment::{DEFAULT_SEGMENT_SIZE, MIN_SEGMENT_SIZE};
use crate::style::StyleOptions;

/// Construction-time options for segmented editing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SegmentEditOptions {
    /// Maximum vertices per segment. Unset or `0` means the default.
    pub segment_size: Option<usize>,
    pub style: StyleOptions,
}

impl SegmentEditOptions {
    /// Parses options from JSON, e.g. `{"segmentSize": 50, "style": {"hover": {...}}}`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the JSON does not describe valid options.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(ConfigError::Parse)?)
    }

    /// The segment size actually used: defaulted, then raised to the minimum.
    #[must_use]
    pub fn effective_segment_size(&self) -> usize {
        self.segment_size
            .filter(|&size| size > 0)
            .unwrap_or(DEFAULT_SEGMENT_SIZE)
            .max(MIN_SEGMENT_SIZE)
    }
}

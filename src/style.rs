use serde::{Deserialize, Serialize};

/// Stroke and fill descriptor applied to a segment on the map surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathStyle {
    pub stroke: bool,
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
}

impl Default for PathStyle {
    /// The standard drawn-polyline style.
    fn default() -> Self {
        Self {
            stroke: true,
            color: "#3388ff".to_owned(),
            weight: 4.0,
            opacity: 0.5,
            fill: false,
            fill_color: None,
            fill_opacity: None,
        }
    }
}

impl PathStyle {
    /// Creates a stroke-only style from a color/weight/opacity triad.
    #[must_use]
    pub fn stroke(color: impl Into<String>, weight: f64, opacity: f64) -> Self {
        Self {
            color: color.into(),
            weight,
            opacity,
            ..Self::default()
        }
    }
}

/// Optional per-state styles as supplied in configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub default: Option<PathStyle>,
    pub hover: Option<PathStyle>,
    pub editing: Option<PathStyle>,
}

/// The three resolved segment styles.
///
/// Resolved once when editing is set up; each missing variant is filled with
/// the host's default shape style.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentStyles {
    pub default: PathStyle,
    pub hover: PathStyle,
    pub editing: PathStyle,
}

impl SegmentStyles {
    /// Resolves configured styles against a fallback.
    #[must_use]
    pub fn resolve(options: &StyleOptions, fallback: &PathStyle) -> Self {
        let pick = |style: Option<&PathStyle>| style.unwrap_or(fallback).clone();
        Self {
            default: pick(options.default.as_ref()),
            hover: pick(options.hover.as_ref()),
            editing: pick(options.editing.as_ref()),
        }
    }
}

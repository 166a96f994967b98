//! Runtime configuration passed to the entry point as an optional JSON string.
//!
//! Every field is optional; missing fields take the defaults below.
//!
//! | Field | Default |
//! |-------|---------|
//! | `host_id` | `"app"` |
//! | `canvas_id` | `"canvas"` |
//! | `nominal_width` / `nominal_height` | `500` |
//! | `viewport_margin` | `20` |
//! | `background` | `"black"` |
//! | `log_level` | `"info"` |
//! | `track_resize` | `false` |

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{BACKGROUND, CANVAS_ID, HOST_ID, NOMINAL_SIZE_PX, VIEWPORT_MARGIN_PX};
use crate::error::BootError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub host_id: String,
    pub canvas_id: String,
    pub nominal_width: u32,
    pub nominal_height: u32,
    pub viewport_margin: u32,
    pub background: String,
    pub log_level: String,
    /// Re-apply the viewport sizing on window `resize`.
    pub track_resize: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            host_id: HOST_ID.to_owned(),
            canvas_id: CANVAS_ID.to_owned(),
            nominal_width: NOMINAL_SIZE_PX,
            nominal_height: NOMINAL_SIZE_PX,
            viewport_margin: VIEWPORT_MARGIN_PX,
            background: BACKGROUND.to_owned(),
            log_level: "info".to_owned(),
            track_resize: false,
        }
    }
}

impl DemoConfig {
    /// Parse config JSON. `None` or a blank string yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the string is not a valid config object.
    pub fn from_json(raw: Option<&str>) -> Result<Self, BootError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => Ok(serde_json::from_str(json)?),
        }
    }

    /// Configured log level; unrecognized names fall back to `Info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Markup injected into the host element.
    #[must_use]
    pub fn canvas_markup(&self) -> String {
        format!(
            r#"<canvas id="{}" width="{}" height="{}"></canvas>"#,
            self.canvas_id, self.nominal_width, self.nominal_height
        )
    }
}

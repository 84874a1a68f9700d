use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parameters for generating the launcher icon
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct IconConfig {
    /// Side length of the square canvas (in pixels)
    pub size: u32,
    /// Gap between the canvas edge and the badge circle (in pixels)
    pub margin: f32,
    /// Width of the white badge outline (in pixels)
    pub border_width: f32,
    /// Where the PNG is written, relative to the working directory
    pub output: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            size: 1024,
            margin: 20.0,
            border_width: 8.0,
            output: PathBuf::from("assets/icons/app_icon.png"),
        }
    }
}

impl IconConfig {
    /// Parse a config from TOML, falling back to defaults for missing fields
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

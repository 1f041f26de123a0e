use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JobFile {
    pub jobs: Vec<Job>,
}

/// One photo to process. `Option` fields fall back to [`super::settings::Settings`].
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub input: String,
    pub spec: Option<String>,
    pub remove_background: Option<bool>,
    pub background: Option<String>,
    pub add_border: Option<bool>,
}

/// Replacement background for a photo with its original background removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundChoice {
    /// Keep the original background.
    None,
    /// One of the catalog colors (`blue`, `red`, `white`).
    Named { name: &'static str, rgb: [u8; 3] },
    /// Arbitrary color from a `#rrggbb` value.
    Custom([u8; 3]),
}

impl BackgroundChoice {
    /// The RGB value and the symbolic name used in the output filename.
    /// `None` for `BackgroundChoice::None`.
    pub fn color(&self) -> Option<([u8; 3], &str)> {
        match self {
            BackgroundChoice::None => None,
            BackgroundChoice::Named { name, rgb } => Some((*rgb, name)),
            BackgroundChoice::Custom(rgb) => Some((*rgb, "custom")),
        }
    }
}

/// Parse a background color string from a job file.
///
/// Accepts the named catalog colors (`"blue"`, `"red"`, `"white"`) or a
/// custom `"#rrggbb"` hex value.
pub fn parse_background(s: &str) -> crate::error::Result<BackgroundChoice> {
    let trimmed = s.trim();
    match trimmed {
        "blue" => Ok(BackgroundChoice::Named {
            name: "blue",
            rgb: [67, 142, 219],
        }),
        "red" => Ok(BackgroundChoice::Named {
            name: "red",
            rgb: [255, 0, 0],
        }),
        "white" => Ok(BackgroundChoice::Named {
            name: "white",
            rgb: [255, 255, 255],
        }),
        _ => {
            let hex = trimmed.strip_prefix('#').ok_or_else(|| {
                crate::error::IdPhotoError::config(format!(
                    "Unknown background color: '{trimmed}' (expected blue, red, white, or #rrggbb)"
                ))
            })?;
            if hex.len() != 6 {
                return Err(crate::error::IdPhotoError::config(format!(
                    "Invalid hex color: '#{hex}' (expected 6 hex digits)"
                )));
            }
            let parse_channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).map_err(|_| {
                    crate::error::IdPhotoError::config(format!("Invalid hex color: '#{hex}'"))
                })
            };
            Ok(BackgroundChoice::Custom([
                parse_channel(0..2)?,
                parse_channel(2..4)?,
                parse_channel(4..6)?,
            ]))
        }
    }
}

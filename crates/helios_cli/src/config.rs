use std::path::Path;

use anyhow::{Context, Result, bail};
use helios_riseset::Location;
use serde::Deserialize;

/// Presets file: a list of named locations.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PresetsConfig {
    #[serde(default, rename = "preset")]
    pub presets: Vec<PresetToml>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetToml {
    pub name: String,
    /// Human-readable label for output; defaults to `name`.
    #[serde(default)]
    pub label: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// A named location ready for computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: String,
    pub label: String,
    pub location: Location,
}

/// Locations available without a presets file.
const BUILTIN_PRESETS: &[(&str, &str, f64, f64)] =
    &[("winchester", "Winchester (UK)", 51.0632, -1.308)];

impl PresetsConfig {
    /// Load and parse a presets TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading presets file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing presets file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

impl PresetToml {
    fn resolve(&self) -> Result<Preset> {
        let location = Location::new(self.latitude, self.longitude)
            .with_context(|| format!("preset {:?}", self.name))?;
        Ok(Preset {
            name: self.name.to_ascii_lowercase(),
            label: self.label.clone().unwrap_or_else(|| self.name.clone()),
            location,
        })
    }
}

/// All presets: built-ins first, then file entries. A file entry replaces a
/// built-in (or earlier entry) with the same case-insensitive name.
pub fn all_presets(config: Option<&PresetsConfig>) -> Result<Vec<Preset>> {
    let mut out: Vec<Preset> = Vec::new();
    let builtins = BUILTIN_PRESETS.iter().map(|&(name, label, lat, lon)| PresetToml {
        name: name.to_string(),
        label: Some(label.to_string()),
        latitude: lat,
        longitude: lon,
    });
    let from_file = config.into_iter().flat_map(|c| c.presets.iter().cloned());
    for entry in builtins.chain(from_file) {
        let preset = entry.resolve()?;
        match out.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => {
                tracing::debug!(name = %preset.name, "preset overridden");
                *existing = preset;
            }
            None => out.push(preset),
        }
    }
    Ok(out)
}

/// Find a preset by case-insensitive name.
pub fn find_preset(name: &str, config: Option<&PresetsConfig>) -> Result<Preset> {
    let presets = all_presets(config)?;
    let wanted = name.to_ascii_lowercase();
    if let Some(p) = presets.iter().find(|p| p.name == wanted) {
        return Ok(p.clone());
    }
    let known: Vec<&str> = presets.iter().map(|p| p.name.as_str()).collect();
    bail!("unknown preset {name:?} (available: {})", known.join(", "))
}

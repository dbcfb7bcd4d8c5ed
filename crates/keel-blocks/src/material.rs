use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::types::{MaterialTier, Rgba};

/// Per-tier multipliers applied when deriving block stats.
#[derive(Clone, Debug)]
pub struct MaterialProps {
    pub label: String,
    pub durability_mult: f32,
    pub mass_mult: f32,
    pub energy_mult: f32,
    pub shield_mult: f32,
    pub tech_level: u8,
    pub color: Rgba,
}

/// One entry per `MaterialTier`, addressed by tier index.
#[derive(Clone, Debug)]
pub struct MaterialCatalog {
    props: Vec<MaterialProps>,
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        let table: [(&str, f32, f32, f32, f32, u8, Rgba); 7] = [
            ("Iron", 1.0, 1.0, 0.8, 0.5, 1, [184, 184, 192, 255]),
            ("Titanium", 1.5, 0.9, 1.0, 0.8, 2, [208, 222, 242, 255]),
            ("Naonite", 2.0, 0.8, 1.2, 1.2, 3, [38, 235, 89, 255]),
            ("Trinium", 2.5, 0.6, 1.5, 1.5, 4, [64, 166, 255, 255]),
            ("Xanion", 3.0, 0.5, 1.8, 2.0, 5, [255, 209, 38, 255]),
            ("Ogonite", 4.0, 0.4, 2.2, 2.5, 6, [255, 102, 38, 255]),
            ("Avorion", 5.0, 0.3, 3.0, 3.5, 7, [217, 51, 255, 255]),
        ];
        let props = table
            .into_iter()
            .map(
                |(label, durability_mult, mass_mult, energy_mult, shield_mult, tech_level, color)| {
                    MaterialProps {
                        label: label.to_string(),
                        durability_mult,
                        mass_mult,
                        energy_mult,
                        shield_mult,
                        tech_level,
                        color,
                    }
                },
            )
            .collect();
        Self { props }
    }
}

impl MaterialCatalog {
    #[inline]
    pub fn get(&self, tier: MaterialTier) -> &MaterialProps {
        &self.props[tier.index()]
    }

    /// Built-in table with per-tier overrides applied from TOML:
    ///
    /// ```toml
    /// [materials.naonite]
    /// durability = 2.5
    /// color = [0, 255, 64, 255]
    /// ```
    ///
    /// Every field is optional per entry; unknown tier names are an error.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        let mut catalog = MaterialCatalog::default();
        let mut entries: Vec<(String, MaterialEntry)> = cfg.materials.into_iter().collect();
        // HashMap iteration order is nondeterministic; sort keys so diagnostics are stable.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, entry) in entries {
            let Some(tier) = MaterialTier::from_key(&key) else {
                return Err(format!("unknown material tier '{key}' in catalog").into());
            };
            let props = &mut catalog.props[tier.index()];
            if let Some(label) = entry.label {
                props.label = label;
            }
            if let Some(v) = entry.durability {
                props.durability_mult = v;
            }
            if let Some(v) = entry.mass {
                props.mass_mult = v;
            }
            if let Some(v) = entry.energy {
                props.energy_mult = v;
            }
            if let Some(v) = entry.shield {
                props.shield_mult = v;
            }
            if let Some(v) = entry.tech_level {
                props.tech_level = v;
            }
            if let Some(v) = entry.color {
                props.color = v;
            }
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize)]
struct MaterialsConfig {
    #[serde(default)]
    materials: HashMap<String, MaterialEntry>,
}

#[derive(Deserialize)]
struct MaterialEntry {
    label: Option<String>,
    durability: Option<f32>,
    mass: Option<f32>,
    energy: Option<f32>,
    shield: Option<f32>,
    tech_level: Option<u8>,
    color: Option<Rgba>,
}

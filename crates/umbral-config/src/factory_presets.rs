//! Factory presets bundled with umbral.
//!
//! Built-in gate configurations that are always available without external
//! files. They cover common material and serve as starting points.

use crate::config::GateConfig;
use crate::error::ConfigError;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &["init", "vocal", "drums", "broadcast"];

/// TOML content for factory presets, embedded at compile time.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("vocal", VOCAL_PRESET),
    ("drums", DRUMS_PRESET),
    ("broadcast", BROADCAST_PRESET),
];

/// Initialization preset - gate defaults.
const INIT_PRESET: &str = r#"
name = "Init"
description = "Default gate settings, lookahead raised to the fall time"
sample_rate = 48000
lookahead = 0.01
risetime = 0.01
falltime = 0.1
floor = 0.01
threshold = 0.01
"#;

/// Vocal preset - tight gate for close-miked voice.
const VOCAL_PRESET: &str = r#"
name = "Vocal"
description = "Tight gate for close-miked vocals"
sample_rate = 48000
lookahead = 0.005
risetime = 0.002
falltime = 0.08
floor_db = -40.0
threshold = 0.05
output = "gated"
coerce_lookahead = false
"#;

/// Drums preset - fast attack, short release.
const DRUMS_PRESET: &str = r#"
name = "Drums"
description = "Fast gate for toms and snare bleed"
sample_rate = 48000
lookahead = 0.002
risetime = 0.0005
falltime = 0.05
floor_db = -60.0
threshold_db = -30.0
output = "gated"
coerce_lookahead = false
"#;

/// Broadcast preset - gentle noise reduction between phrases.
const BROADCAST_PRESET: &str = r#"
name = "Broadcast"
description = "Gentle downward gate for speech between phrases"
sample_rate = 48000
lookahead = 0.25
risetime = 0.02
falltime = 0.25
floor_db = -20.0
threshold_db = -45.0
output = "gated"
"#;

/// Get all factory presets.
///
/// # Example
///
/// ```rust
/// use umbral_config::factory_presets;
///
/// for preset in factory_presets() {
///     println!("  - {}: {}", preset.name, preset.description.as_deref().unwrap_or(""));
/// }
/// ```
pub fn factory_presets() -> Vec<GateConfig> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| GateConfig::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by internal or display name, case-insensitive.
///
/// # Example
///
/// ```rust
/// use umbral_config::get_factory_preset;
///
/// let vocal = get_factory_preset("Vocal").unwrap();
/// assert!(!vocal.coerce_lookahead);
/// assert!(get_factory_preset("whisper").is_none());
/// ```
pub fn get_factory_preset(name: &str) -> Option<GateConfig> {
    let name_lower = name.to_lowercase();

    for (preset_name, toml) in FACTORY_PRESETS_TOML {
        if *preset_name == name_lower {
            return GateConfig::from_toml(toml).ok();
        }
    }

    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| GateConfig::from_toml(toml).ok())
        .find(|preset| preset.name.to_lowercase() == name_lower)
}

/// Like [`get_factory_preset`], but an unknown name is an error.
pub fn load_factory_preset(name: &str) -> Result<GateConfig, ConfigError> {
    get_factory_preset(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
}

/// Check if a name refers to a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}

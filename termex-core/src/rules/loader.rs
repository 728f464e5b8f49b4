use super::table::RuleTable;
use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

static RULE_PRESETS: OnceLock<HashMap<String, RuleTable>> = OnceLock::new();

/// Name of the preset used when nothing else is configured
pub const DEFAULT_PRESET: &str = "standard";

macro_rules! embed_rule_preset {
    ($name:expr, $path:expr) => {
        ($name, include_str!($path))
    };
}

fn load_embedded_presets() -> Result<HashMap<String, RuleTable>> {
    let mut presets = HashMap::new();

    let embedded = [
        embed_rule_preset!("standard", "../../configs/rules/standard.toml"),
        embed_rule_preset!("loose", "../../configs/rules/loose.toml"),
        embed_rule_preset!("strict", "../../configs/rules/strict.toml"),
    ];

    for (name, toml_content) in embedded {
        let table = RuleTable::from_toml_str(toml_content).map_err(|e| {
            CoreError::InvalidRuleTable(format!("Failed to parse {name} preset: {e}"))
        })?;

        if table.metadata.name != name {
            return Err(CoreError::InvalidRuleTable(format!(
                "Preset name mismatch: expected {}, got {}",
                name, table.metadata.name
            )));
        }

        presets.insert(name.to_string(), table);
    }

    log::debug!("Loaded {} embedded rule presets", presets.len());
    Ok(presets)
}

fn presets() -> &'static HashMap<String, RuleTable> {
    RULE_PRESETS
        .get_or_init(|| load_embedded_presets().expect("Failed to load embedded rule presets"))
}

/// Look up an embedded preset by name
pub fn get_rule_preset(name: &str) -> Result<&'static RuleTable> {
    presets()
        .get(name)
        .ok_or_else(|| CoreError::UnknownPreset(name.to_string()))
}

/// Names of all embedded presets, sorted
pub fn list_available_presets() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = presets().keys().map(|s| s.as_str()).collect();
    names.sort_unstable();
    names
}

pub(super) fn standard() -> RuleTable {
    presets()
        .get(DEFAULT_PRESET)
        .cloned()
        .expect("standard preset is embedded")
}

impl RuleTable {
    /// Clone an embedded preset
    pub fn preset(name: &str) -> Result<Self> {
        get_rule_preset(name).cloned()
    }
}

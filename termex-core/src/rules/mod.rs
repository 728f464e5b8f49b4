//! Configurable boundary rule tables

mod loader;
mod table;

pub use loader::{get_rule_preset, list_available_presets, DEFAULT_PRESET};
pub use table::{
    CrossingRules, EndRules, NumericFilter, RuleMetadata, RuleTable, StartRules, TagSet,
    TermFilter,
};

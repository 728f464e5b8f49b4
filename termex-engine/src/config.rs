//! Extractor configuration
//!
//! An [`ExtractorConfig`] can be built in code through
//! [`ExtractorConfig::builder`] or read from a TOML document:
//!
//! ```toml
//! [extraction]
//! max_term_length = 5
//! split_embedded = true
//!
//! [cleaning]
//! remove_urls = true
//! remove_paths = false
//!
//! [rules]
//! preset = "strict"
//! proscribed_start_tags = ["CC", "DT", "IN"]
//!
//! [performance]
//! parallel = true
//! threads = 4
//! ```
//!
//! Missing tables and keys take their defaults.

use crate::error::{EngineError, Result};
use serde::Deserialize;
use std::path::Path;
use termex_core::rules::{TagSet, DEFAULT_PRESET};
use termex_core::{NumericFilter, RuleTable, DEFAULT_MAX_TERM_LENGTH};

/// Term extractor configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    /// Maximum number of tokens in a term
    pub max_term_length: usize,
    /// Boundary rule table
    pub rules: RuleTable,
    /// Mask URLs before tokenizing
    pub remove_urls: bool,
    /// Mask file system paths before tokenizing
    pub remove_paths: bool,
    /// Process quotations and parentheticals as separate fragments
    pub split_embedded: bool,
    /// Annotate sentences on a thread pool
    pub parallel: bool,
    /// Thread count for parallel mode (None = all available)
    pub threads: Option<usize>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_term_length: DEFAULT_MAX_TERM_LENGTH,
            rules: RuleTable::default(),
            remove_urls: true,
            remove_paths: true,
            split_embedded: false,
            parallel: false,
            threads: None,
        }
    }
}

impl ExtractorConfig {
    /// Create a configuration builder
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_term_length == 0 {
            return Err(EngineError::Configuration(
                "max_term_length must be greater than 0".into(),
            ));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(EngineError::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        self.rules.validate()?;
        Ok(())
    }

    /// Parse a TOML configuration document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(source)
            .map_err(|e| EngineError::Configuration(format!("Failed to parse config: {e}")))?;
        file.into_config()
    }

    /// Read a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::Io(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        log::debug!("Loading extractor config from {}", path.display());
        Self::from_toml_str(&content)
    }
}

/// Fluent builder for [`ExtractorConfig`]
#[derive(Debug, Default)]
pub struct ExtractorConfigBuilder {
    max_term_length: Option<usize>,
    preset: Option<String>,
    rules: Option<RuleTable>,
    remove_urls: Option<bool>,
    remove_paths: Option<bool>,
    split_embedded: Option<bool>,
    parallel: Option<bool>,
    threads: Option<usize>,
}

impl ExtractorConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of tokens per term
    pub fn max_term_length(mut self, length: usize) -> Self {
        self.max_term_length = Some(length);
        self
    }

    /// Use an embedded rule preset by name
    pub fn preset(mut self, name: impl Into<String>) -> Self {
        self.preset = Some(name.into());
        self
    }

    /// Use a custom rule table; takes precedence over [`Self::preset`]
    pub fn rules(mut self, rules: RuleTable) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Enable or disable URL masking
    pub fn remove_urls(mut self, enabled: bool) -> Self {
        self.remove_urls = Some(enabled);
        self
    }

    /// Enable or disable path masking
    pub fn remove_paths(mut self, enabled: bool) -> Self {
        self.remove_paths = Some(enabled);
        self
    }

    /// Enable or disable embedded fragment splitting
    pub fn split_embedded(mut self, enabled: bool) -> Self {
        self.split_embedded = Some(enabled);
        self
    }

    /// Enable or disable parallel annotation
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = Some(enabled);
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ExtractorConfig> {
        let mut config = ExtractorConfig::default();

        if let Some(length) = self.max_term_length {
            config.max_term_length = length;
        }

        if let Some(rules) = self.rules {
            config.rules = rules;
        } else if let Some(name) = self.preset {
            config.rules = RuleTable::preset(&name)?;
        }

        if let Some(enabled) = self.remove_urls {
            config.remove_urls = enabled;
        }
        if let Some(enabled) = self.remove_paths {
            config.remove_paths = enabled;
        }
        if let Some(enabled) = self.split_embedded {
            config.split_embedded = enabled;
        }
        if let Some(enabled) = self.parallel {
            config.parallel = enabled;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    extraction: ExtractionSection,
    cleaning: CleaningSection,
    rules: RulesSection,
    performance: PerformanceSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ExtractionSection {
    max_term_length: Option<usize>,
    split_embedded: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CleaningSection {
    remove_urls: Option<bool>,
    remove_paths: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RulesSection {
    preset: Option<String>,
    comma_tags: Option<Vec<String>>,
    conjunction_tags: Option<Vec<String>>,
    block_conjunctions: Option<bool>,
    connectives: Option<Vec<String>>,
    shift_start_tags: Option<Vec<String>>,
    proscribed_start_tags: Option<Vec<String>>,
    numeral_tags: Option<Vec<String>>,
    allow_numeral_start: Option<bool>,
    required_ending_tags: Option<Vec<String>>,
    numeric_filter: Option<NumericFilter>,
    max_term_chars: Option<usize>,
}

impl RulesSection {
    fn into_table(self) -> Result<RuleTable> {
        let name = self.preset.as_deref().unwrap_or(DEFAULT_PRESET);
        let mut table = RuleTable::preset(name)?;

        if let Some(tags) = self.comma_tags {
            table.crossing.comma_tags = TagSet::new(tags);
        }
        if let Some(tags) = self.conjunction_tags {
            table.crossing.conjunction_tags = TagSet::new(tags);
        }
        if let Some(block) = self.block_conjunctions {
            table.crossing.block_conjunctions = block;
        }
        if let Some(words) = self.connectives {
            table.crossing.connectives = words;
        }
        if let Some(tags) = self.shift_start_tags {
            table.start.shift_tags = TagSet::new(tags);
        }
        if let Some(tags) = self.proscribed_start_tags {
            table.start.proscribed_tags = TagSet::new(tags);
        }
        if let Some(tags) = self.numeral_tags {
            table.start.numeral_tags = TagSet::new(tags);
        }
        if let Some(allow) = self.allow_numeral_start {
            table.start.allow_numeral_start = allow;
        }
        if let Some(tags) = self.required_ending_tags {
            table.end.required_tags = TagSet::new(tags);
        }
        if let Some(filter) = self.numeric_filter {
            table.filter.numeric = filter;
        }
        if let Some(chars) = self.max_term_chars {
            table.filter.max_chars = chars;
        }

        Ok(table)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PerformanceSection {
    parallel: Option<bool>,
    threads: Option<usize>,
}

impl FileConfig {
    fn into_config(self) -> Result<ExtractorConfig> {
        let mut builder = ExtractorConfig::builder()
            .rules(self.rules.into_table()?)
            .threads(self.performance.threads);

        if let Some(length) = self.extraction.max_term_length {
            builder = builder.max_term_length(length);
        }
        if let Some(enabled) = self.extraction.split_embedded {
            builder = builder.split_embedded(enabled);
        }
        if let Some(enabled) = self.cleaning.remove_urls {
            builder = builder.remove_urls(enabled);
        }
        if let Some(enabled) = self.cleaning.remove_paths {
            builder = builder.remove_paths(enabled);
        }
        if let Some(enabled) = self.performance.parallel {
            builder = builder.parallel(enabled);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termex_core::CoreError;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.max_term_length, 4);
        assert!(config.remove_urls);
        assert!(config.remove_paths);
        assert!(!config.split_embedded);
        assert!(!config.parallel);
        assert_eq!(config.rules.metadata.name, "standard");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ExtractorConfig::builder()
            .max_term_length(5)
            .preset("strict")
            .remove_paths(false)
            .threads(Some(2))
            .build()
            .unwrap();

        assert_eq!(config.max_term_length, 5);
        assert_eq!(config.rules.metadata.name, "strict");
        assert!(!config.remove_paths);
        assert!(config.remove_urls);
        assert_eq!(config.threads, Some(2));
    }

    #[test]
    fn test_zero_length_rejected() {
        match ExtractorConfig::builder().max_term_length(0).build() {
            Err(EngineError::Configuration(msg)) => assert!(msg.contains("max_term_length")),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(
            ExtractorConfig::builder().threads(Some(0)).build(),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        assert!(matches!(
            ExtractorConfig::builder().preset("fuzzy").build(),
            Err(EngineError::Core(CoreError::UnknownPreset(_)))
        ));
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(
            ExtractorConfig::from_toml_str("").unwrap(),
            ExtractorConfig::default()
        );
    }

    #[test]
    fn test_rule_overrides_from_toml() {
        let config = ExtractorConfig::from_toml_str(
            r#"
            [rules]
            preset = "loose"
            required_ending_tags = ["NN", "NNS"]
            numeric_filter = "pos_path"
            max_term_chars = 40
            "#,
        )
        .unwrap();

        assert_eq!(config.rules.metadata.name, "loose");
        assert!(config.rules.end_permitted("NNS"));
        assert!(!config.rules.end_permitted("CD"));
        assert_eq!(config.rules.filter.numeric, NumericFilter::PosPath);
        assert_eq!(config.rules.filter.max_chars, 40);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            ExtractorConfig::from_toml_str("[extraction]\nmax_length = 3\n"),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn test_empty_required_endings_rejected() {
        assert!(matches!(
            ExtractorConfig::from_toml_str("[rules]\nrequired_ending_tags = []\n"),
            Err(EngineError::Core(CoreError::InvalidRuleTable(_)))
        ));
    }
}

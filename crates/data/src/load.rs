use anyhow::Context;
use quadseq_core::RulesConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const RULES_FILE: &str = "rules.json";

const DEFAULT_RULES: &str = include_str!("../../../assets/rules.json");

/// Read and validate a rules file. Missing optional fields fall back to the
/// standard rules.
pub fn load_rules_config(path: impl AsRef<Path>) -> anyhow::Result<RulesConfig> {
    let path = path.as_ref();
    let config: RulesConfig = load_json(path)?;
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), players = config.players.len(), "rules loaded");
    Ok(config)
}

/// `rules.json` from an assets directory.
pub fn load_rules_from_dir(dir: &Path) -> anyhow::Result<RulesConfig> {
    load_rules_config(dir.join(RULES_FILE))
}

/// The rules bundled with the crate.
pub fn load_default_rules_config() -> anyhow::Result<RulesConfig> {
    parse_rules(DEFAULT_RULES).context("parse bundled rules.json")
}

pub fn parse_rules(raw: &str) -> anyhow::Result<RulesConfig> {
    let config: RulesConfig = serde_json::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

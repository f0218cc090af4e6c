use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LbwConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Refuse to score invalid responses instead of returning a
    /// best-effort result.
    #[serde(default)]
    pub strict_validation: bool,
    #[serde(default)]
    pub log_json: bool,
    /// User recorded on results when `--user` is not given.
    #[serde(default)]
    pub default_user_id: Option<Uuid>,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for LbwConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            strict_validation: false,
            log_json: false,
            default_user_id: None,
            pretty: true,
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("lbw"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, or defaults when no file exists there.
pub fn load_config(path: &Path) -> eyre::Result<LbwConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(LbwConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

/// Whether the file at `path` asks for JSON logs. Read before logging is
/// installed, so anything unreadable counts as `false`.
pub fn log_json_requested(path: &Path) -> bool {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|contents| serde_json::from_str::<serde_json::Value>(&contents).ok())
        .and_then(|json| json.get("log_json").and_then(|v| v.as_bool()))
        .unwrap_or(false)
}

/// Parse config JSON, running migrations before deserializing.
pub fn parse_config(contents: &str) -> eyre::Result<LbwConfig> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version = u32::try_from(on_disk_version)
        .map_err(|_| eyre::eyre!("config_version {on_disk_version} is out of range"))?;

    let migrated = migrate(json, on_disk_version)?;
    Ok(serde_json::from_value(migrated)?)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update lbw."
        ));
    }

    // v0 → v1: `strict` was renamed to `strict_validation`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(strict) = obj.remove("strict") {
            obj.entry("strict_validation").or_insert(strict);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (renamed strict)");
    }

    Ok(json)
}

pub fn save_config(config: &LbwConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Overwrite `path` with the default config. The existing file is never
/// read, so this also replaces corrupt or newer-versioned configs.
pub fn init_config(path: &Path) -> eyre::Result<LbwConfig> {
    let config = LbwConfig::default();
    save_config(&config, path)?;
    Ok(config)
}

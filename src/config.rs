use crate::error::LimitsError;
use crate::types::{ConfigFile, PreviewConfig};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory holding the per-project config, relative to the working directory
pub const LOCAL_CONFIG_DIR: &str = ".tool-preview";

const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_MAX_LINES: &str = "TOOL_PREVIEW_MAX_LINES";
pub const ENV_MAX_LINE_CHARS: &str = "TOOL_PREVIEW_MAX_LINE_CHARS";
pub const ENV_TASK_MAX_LINES: &str = "TOOL_PREVIEW_TASK_MAX_LINES";
pub const ENV_HEADER_MAX_CHARS: &str = "TOOL_PREVIEW_HEADER_MAX_CHARS";

/// Get preview config with priority: ENV > local > global > default
pub fn get_config() -> Result<PreviewConfig> {
    let global = global_config_path()
        .ok()
        .and_then(|path| load_optional(&path));
    let local = load_optional(&local_config_path());
    let env = env_overrides(|key| std::env::var(key).ok());

    let config = resolve(&env, local.as_ref(), global.as_ref())
        .context("Invalid preview configuration")?;
    debug!(?config, "resolved preview config");
    Ok(config)
}

/// Layer the sources over the defaults and validate the result.
pub fn resolve(
    env: &ConfigFile,
    local: Option<&ConfigFile>,
    global: Option<&ConfigFile>,
) -> std::result::Result<PreviewConfig, LimitsError> {
    let mut config = PreviewConfig::default();
    if let Some(global) = global {
        config = config.merge(global);
    }
    if let Some(local) = local {
        config = config.merge(local);
    }
    config = config.merge(env);
    config.validate()?;
    Ok(config)
}

/// Read overrides from environment variables through `lookup`.
///
/// Values that are not unsigned integers are skipped.
pub fn env_overrides<F>(lookup: F) -> ConfigFile
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str| -> Option<usize> {
        let raw = lookup(key)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(key, value = %raw, "ignoring non-numeric override");
                None
            }
        }
    };

    ConfigFile {
        max_lines: read(ENV_MAX_LINES),
        max_line_chars: read(ENV_MAX_LINE_CHARS),
        task_max_lines: read(ENV_TASK_MAX_LINES),
        header_max_chars: read(ENV_HEADER_MAX_CHARS),
    }
}

/// Local config path: .tool-preview/config.json
pub fn local_config_path() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_DIR).join(CONFIG_FILE_NAME)
}

/// Global config path: ~/.config/tool-preview/config.json
pub fn global_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Failed to get config directory")?
        .join("tool-preview");
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Load a config file
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: ConfigFile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Save a config file, creating its directory if needed
pub fn save_config_file(path: &Path, config: &ConfigFile) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    let contents = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    Ok(())
}

/// Save local config to .tool-preview/config.json
pub fn save_local_config(config: &ConfigFile) -> Result<()> {
    save_config_file(&local_config_path(), config)
}

/// Save global config to ~/.config/tool-preview/config.json
pub fn save_global_config(config: &ConfigFile) -> Result<()> {
    save_config_file(&global_config_path()?, config)
}

fn load_optional(path: &Path) -> Option<ConfigFile> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file");
        return None;
    }
    match load_config_file(path) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Skipping config: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> ConfigFile {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_overrides(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_resolve_defaults() {
        let config = resolve(&ConfigFile::default(), None, None).unwrap();
        assert_eq!(config, PreviewConfig::default());
    }

    #[test]
    fn test_resolve_priority() {
        let global = ConfigFile {
            max_lines: Some(30),
            max_line_chars: Some(200),
            task_max_lines: Some(8),
            ..Default::default()
        };
        let local = ConfigFile {
            max_lines: Some(20),
            max_line_chars: Some(150),
            ..Default::default()
        };
        let env = env_from(&[(ENV_MAX_LINES, "15")]);

        let config = resolve(&env, Some(&local), Some(&global)).unwrap();
        assert_eq!(config.max_lines, 15);
        assert_eq!(config.max_line_chars, 150);
        assert_eq!(config.task_max_lines, 8);
        assert_eq!(
            config.header_max_chars,
            PreviewConfig::default().header_max_chars
        );
    }

    #[test]
    fn test_env_overrides_skip_garbage() {
        let env = env_from(&[
            (ENV_MAX_LINES, "lots"),
            (ENV_MAX_LINE_CHARS, " 90 "),
            (ENV_HEADER_MAX_CHARS, "-3"),
        ]);
        assert_eq!(env.max_lines, None);
        assert_eq!(env.max_line_chars, Some(90));
        assert_eq!(env.header_max_chars, None);
        assert_eq!(env.task_max_lines, None);
    }

    #[test]
    fn test_resolve_rejects_zero() {
        let env = env_from(&[(ENV_TASK_MAX_LINES, "0")]);
        let err = resolve(&env, None, None).unwrap_err();
        assert_eq!(
            err,
            LimitsError::Zero {
                field: "task_max_lines"
            }
        );
    }

    #[test]
    fn test_save_and_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);
        let file = ConfigFile {
            max_lines: Some(4),
            header_max_chars: Some(60),
            ..Default::default()
        };

        save_config_file(&path, &file).unwrap();
        let loaded = load_config_file(&path).unwrap();
        assert_eq!(loaded, file);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("max_line_chars"));
    }

    #[test]
    fn test_load_optional_skips_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load_config_file(&path).is_err());
        assert_eq!(load_optional(&path), None);
        assert_eq!(load_optional(&temp_dir.path().join("missing.json")), None);
    }
}

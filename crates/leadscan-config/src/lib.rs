use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use leadscan_core::{CoreError, ExtractMode, NumberingPlan, NumberingPlans, PlanLookup, RegionCode};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "leadscan";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_region: RegionCode,
    pub mode: ExtractMode,
    pub plans: NumberingPlans,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_region: RegionCode::default(),
            mode: ExtractMode::default(),
            plans: NumberingPlans::builtin(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid default_region value: {0:?}")]
    InvalidRegion(String),
    #[error("default_region {0} has no numbering plan")]
    UnknownRegion(String),
    #[error("duplicate region in [[regions]]: {0}")]
    DuplicateRegion(String),
    #[error("invalid [[regions]] entry {region}: {reason}")]
    InvalidRegionPlan { region: String, reason: String },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_region: Option<String>,
    mode: Option<ExtractMode>,
    regions: Option<Vec<RegionFile>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionFile {
    region: String,
    calling_code: String,
    trunk_prefix: Option<String>,
    lengths: Vec<usize>,
    leading_digits: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(mode) = parsed.mode {
        config.mode = mode;
    }

    if let Some(regions) = parsed.regions {
        let mut seen = HashSet::new();
        for entry in regions {
            let plan = region_plan(entry)?;
            if !seen.insert(plan.region().clone()) {
                return Err(ConfigError::DuplicateRegion(plan.region().to_string()));
            }
            let region = plan.region().to_string();
            config
                .plans
                .insert(plan)
                .map_err(|err| plan_error(&region, err))?;
        }
    }

    if let Some(raw) = parsed.default_region {
        config.default_region =
            RegionCode::new(&raw).map_err(|_| ConfigError::InvalidRegion(raw.clone()))?;
    }
    ensure_known_region(&config.plans, &config.default_region)?;

    Ok(config)
}

fn region_plan(entry: RegionFile) -> Result<NumberingPlan> {
    let region = RegionCode::new(&entry.region).map_err(|_| ConfigError::InvalidRegionPlan {
        region: entry.region.clone(),
        reason: "region must be a two-letter code".to_string(),
    })?;
    NumberingPlan::new(
        region,
        &entry.calling_code,
        entry.trunk_prefix.as_deref(),
        &entry.lengths,
        entry.leading_digits.as_deref(),
    )
    .map_err(|err| plan_error(&entry.region, err))
}

fn plan_error(region: &str, err: CoreError) -> ConfigError {
    match err {
        CoreError::InvalidPlan { region, reason } => ConfigError::InvalidRegionPlan { region, reason },
        other => ConfigError::InvalidRegionPlan {
            region: region.to_string(),
            reason: other.to_string(),
        },
    }
}

/// An unprefixed number is read with the default region's rules, so a
/// region without a plan is rejected up front.
pub fn ensure_known_region(plans: &NumberingPlans, region: &RegionCode) -> Result<()> {
    if plans.plan_for_region(region).is_none() {
        return Err(ConfigError::UnknownRegion(region.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigError, ConfigFile, RegionFile};
    use leadscan_core::{ExtractMode, PlanLookup, RegionCode};
    use std::fs;
    use tempfile::TempDir;

    fn empty_file() -> ConfigFile {
        ConfigFile {
            default_region: None,
            mode: None,
            regions: None,
        }
    }

    fn iceland() -> RegionFile {
        RegionFile {
            region: "is".to_string(),
            calling_code: "354".to_string(),
            trunk_prefix: None,
            lengths: vec![7, 9],
            leading_digits: None,
        }
    }

    #[test]
    fn merge_config_defaults_to_us_lenient() {
        let merged = merge_config(empty_file()).expect("merge");
        assert_eq!(merged.default_region.as_str(), "US");
        assert_eq!(merged.mode, ExtractMode::Lenient);
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            default_region: Some("is".to_string()),
            mode: Some(ExtractMode::Strict),
            regions: Some(vec![iceland()]),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.default_region.as_str(), "IS");
        assert_eq!(merged.mode, ExtractMode::Strict);
        let plan = merged
            .plans
            .plan_for_region(&RegionCode::new("IS").unwrap())
            .expect("iceland plan");
        assert_eq!(plan.lengths(), &[7, 9]);
    }

    #[test]
    fn merge_config_rejects_unknown_default_region() {
        let parsed = ConfigFile {
            default_region: Some("ZZ".to_string()),
            ..empty_file()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRegion(region) if region == "ZZ"));
    }

    #[test]
    fn merge_config_rejects_malformed_default_region() {
        let parsed = ConfigFile {
            default_region: Some("usa".to_string()),
            ..empty_file()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRegion(_)));
    }

    #[test]
    fn merge_config_rejects_duplicate_regions() {
        let parsed = ConfigFile {
            regions: Some(vec![iceland(), iceland()]),
            ..empty_file()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateRegion(region) if region == "IS"));
    }

    #[test]
    fn merge_config_rejects_invalid_plan() {
        let mut entry = iceland();
        entry.lengths = Vec::new();
        let parsed = ConfigFile {
            regions: Some(vec![entry]),
            ..empty_file()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRegionPlan { .. }));
    }

    #[test]
    fn merge_config_rejects_overlapping_calling_code() {
        let mut entry = iceland();
        entry.region = "XA".to_string();
        entry.calling_code = "35".to_string();
        let parsed = ConfigFile {
            regions: Some(vec![entry]),
            ..empty_file()
        };
        let err = merge_config(parsed).unwrap_err();
        match err {
            ConfigError::InvalidRegionPlan { region, reason } => {
                assert_eq!(region, "XA");
                assert!(reason.contains("overlaps"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_optional_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "default_region = \"gb\"\nmode = \"strict\"\n\n[[regions]]\nregion = \"IS\"\ncalling_code = \"354\"\nlengths = [7]\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.default_region.as_str(), "GB");
        assert_eq!(config.mode, ExtractMode::Strict);
        assert!(config
            .plans
            .plan_for_region(&RegionCode::new("IS").unwrap())
            .is_some());
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "cps = 3\n").expect("write config");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}

use nike_engine::prize::{default_prizes, Prize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = ".nike";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
    pub realtime: bool,
    pub exclusive_rounds: bool,
    pub prizes: Vec<Prize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub data_dir: ValueSource,
    pub seed: ValueSource,
    pub realtime: ValueSource,
    pub exclusive_rounds: ValueSource,
    pub prizes: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            data_dir: ValueSource::Default,
            seed: ValueSource::Default,
            realtime: ValueSource::Default,
            exclusive_rounds: ValueSource::Default,
            prizes: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed: None,
            realtime: true,
            exclusive_rounds: false,
            prizes: default_prizes(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves the configuration: defaults, then the TOML file named by
/// `NIKE_CONFIG`, then `NIKE_*` environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("NIKE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.data_dir {
            cfg.data_dir = v;
            sources.data_dir = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.realtime {
            cfg.realtime = v;
            sources.realtime = ValueSource::File;
        }
        if let Some(v) = f.exclusive_rounds {
            cfg.exclusive_rounds = v;
            sources.exclusive_rounds = ValueSource::File;
        }
        if let Some(v) = f.prizes {
            cfg.prizes = v;
            sources.prizes = ValueSource::File;
        }
    }

    if let Ok(dir) = std::env::var("NIKE_DATA_DIR")
        && !dir.is_empty()
    {
        cfg.data_dir = PathBuf::from(dir);
        sources.data_dir = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("NIKE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(rt) = std::env::var("NIKE_REALTIME")
        && !rt.is_empty()
    {
        cfg.realtime =
            parse_bool(&rt).ok_or_else(|| ConfigError::Invalid("Invalid realtime".into()))?;
        sources.realtime = ValueSource::Env;
    }
    if let Ok(ex) = std::env::var("NIKE_EXCLUSIVE_ROUNDS")
        && !ex.is_empty()
    {
        cfg.exclusive_rounds = parse_bool(&ex)
            .ok_or_else(|| ConfigError::Invalid("Invalid exclusive_rounds".into()))?;
        sources.exclusive_rounds = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    data_dir: Option<PathBuf>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    realtime: Option<bool>,
    #[serde(default)]
    exclusive_rounds: Option<bool>,
    #[serde(default)]
    prizes: Option<Vec<Prize>>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.data_dir.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "data_dir must not be empty".into(),
        ));
    }
    for prize in &cfg.prizes {
        if prize.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "prize names must not be empty".into(),
            ));
        }
        if prize.cost == 0 {
            return Err(ConfigError::Invalid(format!(
                "prize '{}' must cost >0",
                prize.name
            )));
        }
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

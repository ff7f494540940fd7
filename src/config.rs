//! # Configuration
//!
//! Override hierarchy: defaults → config file → CLI flags.
//!
//! The file lives at `<config_dir>/dsplay/config.toml` unless a path is
//! given on the command line. Every field is optional so a sparse file only
//! overrides what it names.

use crate::structure::StructureKind;
use log::{debug, info, warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlaygroundConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_structure: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AnimationConfig {
    pub frames: Option<u16>,
    pub tick_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ANIMATION_FRAMES: u16 = 6;
pub const DEFAULT_TICK_MS: u64 = 60;
pub const DEFAULT_LOG_FILE: &str = "dsplay.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub structure: StructureKind,
    pub animation_frames: u16,
    pub tick_ms: u64,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        ResolvedConfig {
            structure: StructureKind::default(),
            animation_frames: DEFAULT_ANIMATION_FRAMES,
            tick_ms: DEFAULT_TICK_MS,
            log_level: DEFAULT_LOG_LEVEL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Values given on the command line; None means "not given"
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub structure: Option<StructureKind>,
    pub log_file: Option<PathBuf>,
    pub verbosity: u8,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::LogFile { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::LogFile { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `<config_dir>/dsplay/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dsplay").join("config.toml"))
}

/// Parse config text.
pub fn parse_config(contents: &str) -> Result<PlaygroundConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Load config from `path`, or from the default location when None.
///
/// A missing file is not an error: defaults are returned.
pub fn load_config(path: Option<&Path>) -> Result<PlaygroundConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine config directory, using default config");
            return Ok(PlaygroundConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(PlaygroundConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Create (truncate) the log file named by the resolved settings.
pub fn open_log_file(path: &Path) -> Result<fs::File, ConfigError> {
    fs::File::create(path).map_err(|source| ConfigError::LogFile {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Resolution
// ============================================================================

/// Merge defaults, file values and CLI overrides into concrete settings.
pub fn resolve(config: &PlaygroundConfig, cli: &CliOverrides) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let file_structure = config
        .general
        .default_structure
        .as_deref()
        .and_then(|name| match name.parse::<StructureKind>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                warn!("Ignoring general.default_structure: {}", e);
                None
            }
        });

    let file_level = config
        .logging
        .level
        .as_deref()
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Ignoring unknown logging.level '{}'", level);
                None
            }
        });

    let base_level = file_level.unwrap_or(defaults.log_level);

    ResolvedConfig {
        structure: cli.structure.or(file_structure).unwrap_or(defaults.structure),
        animation_frames: config
            .animation
            .frames
            .unwrap_or(defaults.animation_frames),
        tick_ms: config.animation.tick_ms.unwrap_or(defaults.tick_ms).max(1),
        log_level: raise_level(base_level, cli.verbosity),
        log_file: cli
            .log_file
            .clone()
            .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
            .unwrap_or(defaults.log_file),
    }
}

/// Raise a level by `steps` (-v → one step more verbose)
fn raise_level(level: LevelFilter, steps: u8) -> LevelFilter {
    const ORDER: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    let index = ORDER.iter().position(|l| *l == level).unwrap_or(3);
    ORDER[(index + steps as usize).min(ORDER.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(resolve(&config, &CliOverrides::default()), ResolvedConfig::default());
    }

    #[test]
    fn test_sparse_file_overrides_only_named_fields() {
        let config = parse_config("[animation]\nframes = 0\n\n[general]\ndefault_structure = \"queue\"\n").unwrap();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.structure, StructureKind::Queue);
        assert_eq!(resolved.animation_frames, 0);
        assert_eq!(resolved.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn test_cli_wins_over_file() {
        let config = parse_config("[general]\ndefault_structure = \"queue\"\n[logging]\nfile = \"a.log\"\n").unwrap();
        let cli = CliOverrides {
            structure: Some(StructureKind::LinkedList),
            log_file: Some(PathBuf::from("b.log")),
            verbosity: 1,
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.structure, StructureKind::LinkedList);
        assert_eq!(resolved.log_file, PathBuf::from("b.log"));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = parse_config("[general]\ndefault_structure = \"tree\"\n[logging]\nlevel = \"loud\"\n").unwrap();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.structure, StructureKind::Stack);
        assert_eq!(resolved.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(parse_config("[animation"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_verbosity_saturates() {
        assert_eq!(raise_level(LevelFilter::Info, 5), LevelFilter::Trace);
        assert_eq!(raise_level(LevelFilter::Warn, 0), LevelFilter::Warn);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join(format!("dsplay-missing-{}.toml", std::process::id()));
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(resolve(&config, &CliOverrides::default()), ResolvedConfig::default());
    }

    #[test]
    fn test_load_sparse_file_from_disk() {
        let path = std::env::temp_dir().join(format!("dsplay-sparse-{}.toml", std::process::id()));
        fs::write(&path, "[animation]\ntick_ms = 25\n").unwrap();
        let loaded = load_config(Some(&path));
        fs::remove_file(&path).unwrap();

        let resolved = resolve(&loaded.unwrap(), &CliOverrides::default());
        assert_eq!(resolved.tick_ms, 25);
        assert_eq!(resolved.animation_frames, DEFAULT_ANIMATION_FRAMES);
        assert_eq!(resolved.structure, StructureKind::Stack);
    }

    #[test]
    fn test_error_source_is_chained() {
        use std::error::Error;
        let err = parse_config("[animation").unwrap_err();
        assert!(err.source().is_some());

        let io = ConfigError::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(io.source().map(|e| e.to_string()), Some("denied".to_string()));
    }

    #[test]
    fn test_unwritable_log_file_is_reported() {
        let path = std::env::temp_dir()
            .join(format!("dsplay-no-such-dir-{}", std::process::id()))
            .join("dsplay.log");
        let err = open_log_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::LogFile { .. }));
        assert!(err.to_string().starts_with("cannot open log file"));
        assert!(err.to_string().contains("dsplay.log"));
    }
}

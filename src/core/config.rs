//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vitrine/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Transition durations, gesture thresholds, and the viewport breakpoint
//! all live here so the navigator and detectors stay free of magic
//! numbers and can be exercised with synthetic timings in tests.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::page::{PageId, ViewportClass};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VitrineConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Root directory the catalog's image paths resolve under.
    pub photo_root: Option<String>,
    /// Page shown on startup: "home", "page-3", or a bare number.
    pub start_page: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    pub compact_transition_ms: Option<u64>,
    pub wide_transition_ms: Option<u64>,
    pub paint_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GestureConfig {
    pub carousel_swipe_px: Option<i32>,
    pub page_swipe_px: Option<i32>,
    pub wide_breakpoint_px: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Compact-layout exit animation duration (the CSS-owned constant).
pub const DEFAULT_COMPACT_TRANSITION_MS: u64 = 600;
/// Wide-layout transition, deliberately longer than compact.
pub const DEFAULT_WIDE_TRANSITION_MS: u64 = 800;
/// One scheduling beat so a newly-activated page can lay out before the
/// old one starts exiting.
pub const DEFAULT_PAINT_DELAY_MS: u64 = 20;
pub const DEFAULT_CAROUSEL_SWIPE_PX: i32 = 50;
/// Page swipe must be more deliberate than a carousel swipe.
pub const DEFAULT_PAGE_SWIPE_PX: i32 = 75;
pub const DEFAULT_WIDE_BREAKPOINT_PX: u32 = 768;
pub const DEFAULT_PHOTO_ROOT: &str = "photos";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Fixed delays that sequence the page enter/exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    pub compact_ms: u64,
    pub wide_ms: u64,
    pub paint_delay_ms: u64,
}

/// Gesture thresholds in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureThresholds {
    pub carousel_px: i32,
    pub page_px: i32,
    pub wide_breakpoint_px: u32,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub photo_root: PathBuf,
    pub start_page: PageId,
    pub timing: TransitionTiming,
    pub gesture: GestureThresholds,
    /// Forced layout class from the CLI (None = derive from width).
    pub viewport_override: Option<ViewportClass>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.vitrine/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vitrine").join("config.toml"))
}

/// Load config from `~/.vitrine/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VitrineConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VitrineConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VitrineConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VitrineConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: VitrineConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Vitrine Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# photo_root = "photos"       # Or set VITRINE_PHOTOS env var
# start_page = "home"         # "home", "page-1" .. "page-8"

# [timing]
# compact_transition_ms = 600 # Match the compact exit animation duration
# wide_transition_ms = 800
# paint_delay_ms = 20

# [gesture]
# carousel_swipe_px = 50
# page_swipe_px = 75          # Page turns want a more deliberate drag
# wide_breakpoint_px = 768    # Below this the compact layout applies
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI. `cli_photos`, `cli_page` and `cli_viewport` come from CLI
/// flags (None = not specified).
pub fn resolve(
    config: &VitrineConfig,
    cli_photos: Option<&str>,
    cli_page: Option<&str>,
    cli_viewport: Option<ViewportClass>,
) -> ResolvedConfig {
    // Photo root: CLI → env → config → default
    let photo_root = cli_photos
        .map(|s| s.to_string())
        .or_else(|| std::env::var("VITRINE_PHOTOS").ok())
        .or_else(|| config.general.photo_root.clone())
        .unwrap_or_else(|| DEFAULT_PHOTO_ROOT.to_string());

    // Start page: CLI → config → home. An unparseable spelling falls back
    // to home with a warning rather than refusing to start.
    let start_page = cli_page
        .or(config.general.start_page.as_deref())
        .map(|s| {
            PageId::parse(s).unwrap_or_else(|| {
                warn!("Unknown start page {s:?}, falling back to home");
                PageId::Home
            })
        })
        .unwrap_or(PageId::Home);

    ResolvedConfig {
        photo_root: PathBuf::from(photo_root),
        start_page,
        timing: TransitionTiming {
            compact_ms: config
                .timing
                .compact_transition_ms
                .unwrap_or(DEFAULT_COMPACT_TRANSITION_MS),
            wide_ms: config
                .timing
                .wide_transition_ms
                .unwrap_or(DEFAULT_WIDE_TRANSITION_MS),
            paint_delay_ms: config.timing.paint_delay_ms.unwrap_or(DEFAULT_PAINT_DELAY_MS),
        },
        gesture: GestureThresholds {
            carousel_px: config
                .gesture
                .carousel_swipe_px
                .unwrap_or(DEFAULT_CAROUSEL_SWIPE_PX),
            page_px: config.gesture.page_swipe_px.unwrap_or(DEFAULT_PAGE_SWIPE_PX),
            wide_breakpoint_px: config
                .gesture
                .wide_breakpoint_px
                .unwrap_or(DEFAULT_WIDE_BREAKPOINT_PX),
        },
        viewport_override: cli_viewport,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = VitrineConfig::default();
        assert!(config.general.photo_root.is_none());
        assert!(config.timing.compact_transition_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = VitrineConfig::default();
        let resolved = resolve(&config, None, None, None);
        assert_eq!(resolved.timing.compact_ms, DEFAULT_COMPACT_TRANSITION_MS);
        assert_eq!(resolved.timing.wide_ms, DEFAULT_WIDE_TRANSITION_MS);
        assert_eq!(resolved.gesture.carousel_px, DEFAULT_CAROUSEL_SWIPE_PX);
        assert_eq!(resolved.gesture.page_px, DEFAULT_PAGE_SWIPE_PX);
        assert_eq!(resolved.start_page, PageId::Home);
        assert_eq!(resolved.photo_root, PathBuf::from("photos"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = VitrineConfig {
            general: GeneralConfig {
                photo_root: Some("/srv/photos".to_string()),
                start_page: Some("page-3".to_string()),
            },
            timing: TimingConfig {
                compact_transition_ms: Some(250),
                wide_transition_ms: Some(400),
                paint_delay_ms: Some(5),
            },
            gesture: GestureConfig {
                carousel_swipe_px: Some(30),
                page_swipe_px: Some(90),
                wide_breakpoint_px: Some(1024),
            },
        };
        let resolved = resolve(&config, None, None, None);
        assert_eq!(resolved.photo_root, PathBuf::from("/srv/photos"));
        assert_eq!(resolved.start_page, PageId::Page(3));
        assert_eq!(
            resolved.timing,
            TransitionTiming {
                compact_ms: 250,
                wide_ms: 400,
                paint_delay_ms: 5
            }
        );
        assert_eq!(resolved.gesture.wide_breakpoint_px, 1024);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = VitrineConfig {
            general: GeneralConfig {
                photo_root: Some("/from-config".to_string()),
                start_page: Some("page-2".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("/from-cli"), Some("page-5"), Some(ViewportClass::Wide));
        assert_eq!(resolved.photo_root, PathBuf::from("/from-cli"));
        assert_eq!(resolved.start_page, PageId::Page(5));
        assert_eq!(resolved.viewport_override, Some(ViewportClass::Wide));
    }

    #[test]
    fn test_bad_start_page_falls_back_to_home() {
        let resolved = resolve(&VitrineConfig::default(), None, Some("page-12"), None);
        assert_eq!(resolved.start_page, PageId::Home);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[timing]
wide_transition_ms = 450
"#;
        let config: VitrineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timing.wide_transition_ms, Some(450));
        assert!(config.timing.compact_transition_ms.is_none());
        assert!(config.general.photo_root.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
photo_root = "assets/photos"
start_page = "page-1"

[timing]
compact_transition_ms = 500
wide_transition_ms = 700
paint_delay_ms = 10

[gesture]
carousel_swipe_px = 40
page_swipe_px = 80
wide_breakpoint_px = 900
"#;
        let config: VitrineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.photo_root.as_deref(), Some("assets/photos"));
        assert_eq!(config.gesture.carousel_swipe_px, Some(40));
        assert_eq!(config.gesture.wide_breakpoint_px, Some(900));
    }
}

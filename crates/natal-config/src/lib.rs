use natal::layout::LayoutSettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known locations tried when no explicit path is given.
const CONFIG_PATHS: [&str; 2] = ["configs/natal.toml", "../../configs/natal.toml"];

#[derive(Debug, Clone)]
pub struct NatalConfig {
    pub layout: LayoutSettings,
    pub chart_size: f64,
    /// File the settings came from; `None` when running on defaults.
    pub source: Option<PathBuf>,
}

impl Default for NatalConfig {
    fn default() -> Self {
        Self {
            layout: LayoutSettings::default(),
            chart_size: default_chart_size(),
            source: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LayoutToml {
    #[serde(default)]
    band_width: Option<f64>,
    #[serde(default)]
    spread_factor: Option<f64>,
    #[serde(default)]
    ring_inner_ratio: Option<f64>,
    #[serde(default)]
    ring_outer_ratio: Option<f64>,
    #[serde(default)]
    glyph_ratio: Option<f64>,
    #[serde(default)]
    radial_step_ratio: Option<f64>,
    #[serde(default)]
    label_ratio: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct RenderToml {
    #[serde(default = "default_chart_size")]
    chart_size: f64,
}

fn default_chart_size() -> f64 {
    600.0
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    layout: Option<LayoutToml>,
    #[serde(default)]
    render: Option<RenderToml>,
}

/// Parse config text, filling anything missing from the built-in defaults.
pub fn parse_config(text: &str) -> anyhow::Result<NatalConfig> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse natal.toml: {e}"))?;

    let defaults = LayoutSettings::default();
    let layout = match root.layout {
        Some(l) => LayoutSettings {
            band_width: l.band_width.unwrap_or(defaults.band_width),
            spread_factor: l.spread_factor.unwrap_or(defaults.spread_factor),
            ring_inner_ratio: l.ring_inner_ratio.unwrap_or(defaults.ring_inner_ratio),
            ring_outer_ratio: l.ring_outer_ratio.unwrap_or(defaults.ring_outer_ratio),
            glyph_ratio: l.glyph_ratio.unwrap_or(defaults.glyph_ratio),
            radial_step_ratio: l.radial_step_ratio.unwrap_or(defaults.radial_step_ratio),
            label_ratio: l.label_ratio.unwrap_or(defaults.label_ratio),
        },
        None => defaults,
    };
    let chart_size = root
        .render
        .map(|r| r.chart_size)
        .unwrap_or_else(default_chart_size);

    let config = NatalConfig {
        layout,
        chart_size,
        source: None,
    };
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &NatalConfig) -> anyhow::Result<()> {
    let layout = &config.layout;
    if !(config.chart_size.is_finite() && config.chart_size > 0.0) {
        anyhow::bail!("render.chart_size must be positive, got {}", config.chart_size);
    }
    if !(layout.band_width > 0.0 && layout.band_width <= 30.0) {
        anyhow::bail!("layout.band_width must be in (0, 30], got {}", layout.band_width);
    }
    if !(layout.spread_factor >= 0.0 && layout.spread_factor.is_finite()) {
        anyhow::bail!("layout.spread_factor must be non-negative, got {}", layout.spread_factor);
    }
    for (name, value) in [
        ("ring_inner_ratio", layout.ring_inner_ratio),
        ("ring_outer_ratio", layout.ring_outer_ratio),
        ("glyph_ratio", layout.glyph_ratio),
        ("label_ratio", layout.label_ratio),
    ] {
        if !(value > 0.0 && value <= 1.0) {
            anyhow::bail!("layout.{name} must be in (0, 1], got {value}");
        }
    }
    if layout.ring_inner_ratio >= layout.ring_outer_ratio {
        anyhow::bail!("layout.ring_inner_ratio must be less than ring_outer_ratio");
    }
    if !(layout.radial_step_ratio >= 0.0 && layout.radial_step_ratio.is_finite()) {
        anyhow::bail!(
            "layout.radial_step_ratio must be non-negative, got {}",
            layout.radial_step_ratio
        );
    }
    Ok(())
}

pub fn load_config_from_path(path: &Path) -> anyhow::Result<NatalConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    let mut config = parse_config(&text)?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}

/// Load from `path` when given, otherwise from the first well-known location
/// that exists, otherwise defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<NatalConfig> {
    if let Some(path) = path {
        return load_config_from_path(path);
    }
    for p in &CONFIG_PATHS {
        let candidate = Path::new(p);
        if candidate.exists() {
            return load_config_from_path(candidate);
        }
    }
    log::debug!("no natal.toml found in {:?}; using defaults", CONFIG_PATHS);
    Ok(NatalConfig::default())
}

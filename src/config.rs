// Dashboard configuration, read from `config.json` in the platform config dir.
// Every field is optional; a missing file means defaults.
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::domain::entities::balance::clamp_account_count;
use crate::domain::entities::layout::{AccountLabels, StatementLayout};
use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "comparativo_indicadores.csv";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub statement: StatementConfig,
    pub balances: BalanceSettings,
    pub export: ExportSettings,
    pub theme: ThemePalette,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutPreset {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt-BR")]
    Portuguese,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct StatementConfig {
    pub preset: LayoutPreset,
    pub account_column: Option<String>,
    pub value_column: Option<String>,
    pub labels: LabelOverrides,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LabelOverrides {
    pub net_revenue: Option<String>,
    pub gross_profit: Option<String>,
    pub ebit: Option<String>,
    pub net_income: Option<String>,
    pub gross_revenue: Option<String>,
}

impl StatementConfig {
    /// Preset first, then any explicit column or label override on top.
    pub fn layout(&self) -> StatementLayout {
        let mut layout = match self.preset {
            LayoutPreset::English => StatementLayout::english(),
            LayoutPreset::Portuguese => StatementLayout::portuguese(),
        };
        if let Some(column) = &self.account_column {
            layout.account_column = column.clone();
        }
        if let Some(column) = &self.value_column {
            layout.value_column = column.clone();
        }
        apply_label_overrides(&mut layout.labels, &self.labels);
        layout
    }
}

fn apply_label_overrides(labels: &mut AccountLabels, overrides: &LabelOverrides) {
    let pairs = [
        (&mut labels.net_revenue, &overrides.net_revenue),
        (&mut labels.gross_profit, &overrides.gross_profit),
        (&mut labels.ebit, &overrides.ebit),
        (&mut labels.net_income, &overrides.net_income),
        (&mut labels.gross_revenue, &overrides.gross_revenue),
    ];
    for (slot, value) in pairs {
        if let Some(value) = value {
            *slot = value.clone();
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BalanceSettings {
    pub default_count: usize,
}

impl Default for BalanceSettings {
    fn default() -> Self {
        Self { default_count: 3 }
    }
}

impl BalanceSettings {
    pub fn initial_count(&self) -> usize {
        clamp_account_count(self.default_count)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExportSettings {
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

/// Colours for the page and the chart series.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ThemePalette {
    pub background: String,
    pub panel: String,
    pub foreground: String,
    pub accent: String,
    pub amount_series: Vec<String>,
    pub margin_series: Vec<String>,
    pub trend_series: Vec<String>,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            panel: "#333333".to_string(),
            foreground: "#ffffff".to_string(),
            accent: "#21c0e8".to_string(),
            amount_series: vec![
                "#636efa".to_string(),
                "#ef553b".to_string(),
                "#00cc96".to_string(),
                "#ab63fa".to_string(),
            ],
            margin_series: vec![
                "#21c0e8".to_string(),
                "#f39c12".to_string(),
                "#e74c3c".to_string(),
            ],
            trend_series: vec!["blue".to_string(), "green".to_string()],
        }
    }
}

impl ThemePalette {
    /// Cycles through `series`; an empty list falls back to the accent.
    pub fn color_at<'a>(&'a self, series: &'a [String], idx: usize) -> &'a str {
        if series.is_empty() {
            &self.accent
        } else {
            &series[idx % series.len()]
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let project_dirs =
            ProjectDirs::from("br", "dre", "dre-dashboard").ok_or(ConfigError::NoConfigDir)?;
        Ok(project_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn from_json(text: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text, path)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn statement_layout(&self) -> StatementLayout {
        self.statement.layout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = AppConfig::from_json("{}", Path::new("config.json")).expect("should parse");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.statement_layout(), StatementLayout::english());
        assert_eq!(config.export.file_name, "comparativo_indicadores.csv");
        assert_eq!(config.balances.initial_count(), 3);
    }

    #[test]
    fn preset_and_overrides_combine() {
        let json = r#"{
            "statement": {
                "preset": "pt-BR",
                "value_column": "Valor (R$)",
                "labels": { "ebit": "EBIT" }
            },
            "balances": { "default_count": 40 }
        }"#;
        let config = AppConfig::from_json(json, Path::new("config.json")).expect("should parse");
        let layout = config.statement_layout();

        assert_eq!(layout.account_column, "Conta");
        assert_eq!(layout.value_column, "Valor (R$)");
        assert_eq!(layout.labels.ebit, "EBIT");
        assert_eq!(layout.labels.gross_profit, "Lucro Bruto");
        assert_eq!(config.balances.initial_count(), 10);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = AppConfig::from_json("{ nope", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = std::env::temp_dir().join("dre-dashboard-config-that-does-not-exist.json");
        let config = AppConfig::load(&path).expect("missing file should not fail");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn palette_cycles_and_falls_back() {
        let palette = ThemePalette::default();
        assert_eq!(palette.color_at(&palette.margin_series, 4), "#f39c12");
        assert_eq!(palette.color_at(&[], 0), "#21c0e8");
    }
}

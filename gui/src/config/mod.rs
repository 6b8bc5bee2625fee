// GUI configuration, deserialized from the embedded assets/config/default.json
pub mod theme;

use anyhow::Context;
use engine::RawInput;
use serde::Deserialize;
use shared::models::CalculationMode;
use shared::utils::number_format::Grouping;
use theme::ThemePalette;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub display: DisplaySettings,
    pub panels: PanelDefaults,
    pub chart: ChartConfig,
    #[serde(default)]
    pub theme: ThemePalette,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplaySettings {
    pub currency_symbol: String,
    #[serde(default)]
    pub grouping: Grouping,
}

/// Text the input fields start with.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PanelDefaults {
    pub forward: FieldDefaults,
    pub reverse: FieldDefaults,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FieldDefaults {
    pub initial: String,
    pub second: String,
    pub duration: String,
}

impl FieldDefaults {
    pub fn to_raw_input(&self) -> RawInput {
        RawInput::new(&self.initial, &self.second, &self.duration)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartConfig {
    pub height: u32,
    pub bar_color: String,
}

impl AppConfig {
    pub fn load_default() -> anyhow::Result<Self> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str).context("embedded default configuration is invalid")
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        if config.chart.height == 0 {
            anyhow::bail!("chart.height must be greater than 0");
        }
        Ok(config)
    }

    pub fn defaults_for(&self, mode: CalculationMode) -> &FieldDefaults {
        match mode {
            CalculationMode::Forward => &self.panels.forward,
            CalculationMode::Reverse => &self.panels.reverse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.display.currency_symbol, "₹");
        assert_eq!(config.display.grouping, Grouping::Thousands);
        assert_eq!(config.chart.height, 400);
        assert_eq!(config.chart.bar_color, "#009e64");
        assert_eq!(
            config.defaults_for(CalculationMode::Reverse).to_raw_input(),
            RawInput::new("10000", "14.87", "5")
        );
    }

    #[test]
    fn test_zero_chart_height_rejected() {
        let json = include_str!("../../assets/config/default.json")
            .replace("\"height\": 400", "\"height\": 0");
        assert!(AppConfig::from_json(&json).is_err());
    }

    #[test]
    fn test_grouping_defaults_when_missing() {
        let json = include_str!("../../assets/config/default.json")
            .replace(",\n    \"grouping\": \"thousands\"", "");
        let config = AppConfig::from_json(&json).unwrap();
        assert_eq!(config.display.grouping, Grouping::Thousands);
    }
}

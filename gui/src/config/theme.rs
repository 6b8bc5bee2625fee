// Theme colours and the stylesheet built from them
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub title_background: String,
    pub title_foreground: String,
    pub result_background: String,
    pub unit_background: String,
    pub input_background: String,
    pub error_background: String,
    pub error_foreground: String,
    pub grid: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#0e1117".to_string(),
            foreground: "#fafafa".to_string(),
            title_background: "#d0d0d0".to_string(),
            title_foreground: "#000000".to_string(),
            result_background: "#009e64".to_string(),
            unit_background: "#3a3a5c".to_string(),
            input_background: "#262730".to_string(),
            error_background: "#3e2428".to_string(),
            error_foreground: "#ff6b6b".to_string(),
            grid: "#31333f".to_string(),
        }
    }

    /// CSS for the whole window, injected into the page head.
    pub fn stylesheet(&self) -> String {
        format!(
            r#"
body {{ margin: 0; background-color: {bg}; color: {fg}; font-family: Arial, sans-serif; }}
.app {{ max-width: 760px; margin: 0 auto; padding: 24px; }}
.title-box {{
    background-color: {title_bg}; color: {title_fg}; padding: 10px; border-radius: 10px;
    text-align: center; font-size: 24px; font-weight: bold; margin-bottom: 24px;
}}
.tabs {{ display: flex; border-bottom: 1px solid {grid}; margin-bottom: 16px; }}
.tab {{
    flex: 1; background: none; border: none; color: {fg}; padding: 10px; font-size: 15px;
    cursor: pointer;
}}
.tab-active {{ border-bottom: 3px solid {result_bg}; font-weight: bold; }}
.row {{
    display: grid; grid-template-columns: 2fr 2fr 1fr; gap: 12px; align-items: center;
    margin-bottom: 12px;
}}
.result-row {{ margin-top: 8px; }}
.input-label {{ font-weight: 500; font-size: 16px; }}
.text-input {{
    background-color: {input_bg}; color: {fg}; border: 1px solid {grid}; border-radius: 8px;
    padding: 10px; font-size: 14px;
}}
.unit-box {{
    background-color: {unit_bg}; color: white; font-weight: bold; border-radius: 20px;
    height: 46px; display: flex; align-items: center; justify-content: center;
}}
.result-box {{
    background-color: {result_bg}; color: white; font-size: 18px; font-weight: bold;
    border-radius: 10px; height: 46px; display: flex; align-items: center;
    justify-content: center;
}}
.error-box {{
    background-color: {err_bg}; color: {err_fg}; border-radius: 8px; padding: 12px 16px;
}}
.chart-empty {{ text-align: center; opacity: 0.7; }}
.chart-title {{ margin: 30px 0 15px; font-size: 24px; font-weight: bold; text-align: center; }}
.grid-line {{ stroke: {grid}; stroke-width: 1; }}
.axis-label {{ fill: {fg}; font-size: 12px; }}
.bar-tooltip {{ fill: {fg}; font-size: 13px; font-weight: bold; visibility: hidden; }}
.bar-group:hover .bar-tooltip {{ visibility: visible; }}
.bar-group:hover rect {{ opacity: 0.8; }}
"#,
            bg = self.background,
            fg = self.foreground,
            title_bg = self.title_background,
            title_fg = self.title_foreground,
            result_bg = self.result_background,
            unit_bg = self.unit_background,
            input_bg = self.input_background,
            err_bg = self.error_background,
            err_fg = self.error_foreground,
            grid = self.grid,
        )
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self::default_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_uses_palette() {
        let mut palette = ThemePalette::default_dark();
        palette.result_background = "#123456".to_string();
        let css = palette.stylesheet();
        assert!(css.contains(".result-box {\n    background-color: #123456;"));
        assert!(css.contains(".bar-group:hover .bar-tooltip { visibility: visible; }"));
    }
}

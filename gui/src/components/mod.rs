// GUI components module
pub mod calculator_panel;
pub mod chart;
pub mod input_row;
pub mod tab_bar;

pub use calculator_panel::CalculatorPanel;
pub use tab_bar::TabBar;

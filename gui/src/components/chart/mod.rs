// Growth chart: pure layout plus the SVG bar chart component
pub mod bar_chart;
pub mod layout;

pub use bar_chart::BarChart;

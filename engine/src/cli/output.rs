// Rendering of calculation reports as a table, JSON or CSV.
use super::OutputFormat;
use crate::error::EngineError;
use shared::models::{CalculationReport, Headline};
use shared::utils::number_format::{format_currency, format_grouped, Grouping};
use std::io::Write;

#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency: String,
    pub grouping: Grouping,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency: "₹".to_string(),
            grouping: Grouping::Thousands,
        }
    }
}

/// Label and formatted value of the headline figure.
pub fn headline_text(headline: &Headline, opts: &DisplayOptions) -> (&'static str, String) {
    (headline.label(), headline.display_value(&opts.currency, opts.grouping))
}

pub fn write_report<W: Write>(
    report: &CalculationReport,
    format: OutputFormat,
    opts: &DisplayOptions,
    out: &mut W,
) -> Result<(), EngineError> {
    match format {
        OutputFormat::Table => write_table(report, opts, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for point in &report.series {
                wtr.serialize(point)?;
            }
            wtr.flush()?;
            Ok(())
        }
    }
}

fn write_table<W: Write>(
    report: &CalculationReport,
    opts: &DisplayOptions,
    out: &mut W,
) -> Result<(), EngineError> {
    let (label, value) = headline_text(&report.headline, opts);
    writeln!(out, "{}: {}", label, value)?;

    if report.series.is_empty() {
        writeln!(out, "Duration is under one year, no yearly projection.")?;
        return Ok(());
    }

    let rows: Vec<(String, String)> = report
        .series
        .iter()
        .map(|p| (p.year.to_string(), format_currency(p.value, &opts.currency, opts.grouping)))
        .collect();
    let year_width = column_width(rows.iter().map(|(y, _)| y), "Year");
    let value_width = column_width(rows.iter().map(|(_, v)| v), "Value");

    writeln!(out)?;
    writeln!(out, "{:>yw$}  {:>vw$}", "Year", "Value", yw = year_width, vw = value_width)?;
    for (year, value) in rows {
        writeln!(out, "{:>yw$}  {:>vw$}", year, value, yw = year_width, vw = value_width)?;
    }
    if report.series.truncated {
        let shown = format_grouped(report.series.len() as f64, 0, opts.grouping);
        writeln!(out)?;
        writeln!(out, "Showing the first {} years.", shown)?;
    }
    Ok(())
}

fn column_width<'a>(cells: impl Iterator<Item = &'a String>, header: &str) -> usize {
    cells.map(|c| c.chars().count()).max().unwrap_or(0).max(header.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::evaluate;
    use crate::input::RawInput;
    use shared::models::CalculationMode;

    fn render(mode: CalculationMode, raw: RawInput, format: OutputFormat) -> String {
        let report = evaluate(mode, &raw).unwrap();
        let mut buf = Vec::new();
        write_report(&report, format, &DisplayOptions::default(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_output() {
        let raw = RawInput::new("10000", "12", "3");
        let text = render(CalculationMode::Reverse, raw, OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Maturity Value: ₹14,049.28");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Year       Value");
        assert_eq!(lines[3], "   1  ₹11,200.00");
        assert_eq!(lines[5], "   3  ₹14,049.28");
    }

    #[test]
    fn test_table_without_whole_years() {
        let raw = RawInput::new("100", "110", "0.5");
        let text = render(CalculationMode::Forward, raw, OutputFormat::Table);
        assert!(text.starts_with("CAGR: 21.00%\n"));
        assert!(text.contains("no yearly projection"));
    }

    #[test]
    fn test_csv_output() {
        let raw = RawInput::new("10000", "12", "2");
        let text = render(CalculationMode::Reverse, raw, OutputFormat::Csv);
        assert_eq!(text, "year,value\n1,11200.0\n2,12544.0\n");
    }

    #[test]
    fn test_json_output() {
        let raw = RawInput::new("10000", "20000", "5");
        let text = render(CalculationMode::Forward, raw, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["mode"], "forward");
        assert_eq!(value["headline"]["rate_percent"], 14.87);
        assert_eq!(value["series"]["points"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_headline_text_indian_grouping() {
        let raw = RawInput::new("100000", "10", "1");
        let report = evaluate(CalculationMode::Reverse, &raw).unwrap();
        let opts = DisplayOptions { currency: "₹".to_string(), grouping: Grouping::Indian };
        assert_eq!(
            headline_text(&report.headline, &opts),
            ("Maturity Value", "₹1,10,000.00".to_string())
        );
    }

    #[test]
    fn test_table_notes_truncated_projection() {
        let raw = RawInput::new("1", "2", "5,000");
        let text = render(CalculationMode::Forward, raw, OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.last(), Some(&"Showing the first 1,000 years."));
        // Header, blank, column titles, 1,000 rows, blank, note.
        assert_eq!(lines.len(), 1_005);
    }
}

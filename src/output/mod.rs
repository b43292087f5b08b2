mod csv;
mod json;
mod text;

use crate::signal_processing::Window;
use crate::signal_processing::response::{self, ResponsePoint};

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// A designed coefficient vector together with its response summary
#[derive(Debug, Clone, serde::Serialize)]
pub struct DesignReport {
    pub order: usize,
    pub sample_rate: u32,
    pub cutoff_hz: f64,
    pub window: Window,
    pub coefficients: Vec<f64>,
    pub dc_gain: f64,
    pub group_delay_samples: f64,
    pub symmetric: bool,
    pub response: Vec<ResponsePoint>,
}

impl DesignReport {
    pub fn new(
        sample_rate: u32,
        cutoff_hz: f64,
        window: Window,
        coefficients: Vec<f64>,
        response_points: usize,
    ) -> Self {
        Self {
            order: coefficients.len().saturating_sub(1),
            sample_rate,
            cutoff_hz,
            window,
            dc_gain: response::dc_gain(&coefficients),
            group_delay_samples: response::group_delay_samples(&coefficients),
            symmetric: response::is_symmetric(&coefficients, crate::constants::SYMMETRY_EPSILON),
            response: response::sample_response(&coefficients, sample_rate as f64, response_points),
            coefficients,
        }
    }
}

pub trait Formatter {
    fn format(&self, report: &DesignReport) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal_processing::design_lowpass;

    fn report() -> DesignReport {
        let coeffs = design_lowpass(4, 8000, 1000.0, Window::Hamming).unwrap();
        DesignReport::new(8000, 1000.0, Window::Hamming, coeffs, 3)
    }

    #[test]
    fn test_report_summary() {
        let report = report();
        assert_eq!(report.order, 4);
        assert!(report.symmetric);
        assert_eq!(report.group_delay_samples, 2.0);
        assert_eq!(report.response.len(), 3);
        let sum: f64 = report.coefficients.iter().sum();
        assert_eq!(report.dc_gain, sum);
    }

    #[test]
    fn test_csv_has_row_per_tap() {
        let formatter = create_formatter(OutputFormat::Csv, false);
        let out = formatter.format(&report());
        assert_eq!(formatter.header(), Some("index,coefficient"));
        assert_eq!(out.lines().count(), 5);
        assert!(out.lines().nth(2).unwrap().starts_with("2,0.25"));
    }

    #[test]
    fn test_json_parses_back() {
        let out = create_formatter(OutputFormat::Json, false).format(&report());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["order"], 4);
        assert_eq!(value["window"], "hamming");
        assert_eq!(value["coefficients"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_text_verbose_includes_response() {
        let quiet = create_formatter(OutputFormat::Text, false).format(&report());
        let verbose = create_formatter(OutputFormat::Text, true).format(&report());
        assert!(quiet.contains("hamming"));
        assert!(!quiet.contains("dB"));
        assert!(verbose.contains("dB"));
    }
}

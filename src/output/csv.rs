use super::{DesignReport, Formatter};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &DesignReport) -> String {
        report
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{},{:.12}", i, c))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(&self) -> Option<&'static str> {
        Some("index,coefficient")
    }
}

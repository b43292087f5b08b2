use super::{DesignReport, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &DesignReport) -> String {
        // DesignReport holds only numbers, strings and vectors of them
        serde_json::to_string_pretty(report).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}

use super::{DesignReport, Formatter};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &DesignReport) -> String {
        let mut out = format!(
            "Lowpass: order {} ({} taps), fc={} Hz, fs={} Hz, window={}\n\
             DC gain: {:.6}  group delay: {:.1} samples  symmetric: {}\n",
            report.order,
            report.coefficients.len(),
            report.cutoff_hz,
            report.sample_rate,
            report.window,
            report.dc_gain,
            report.group_delay_samples,
            report.symmetric
        );
        for (i, c) in report.coefficients.iter().enumerate() {
            out.push_str(&format!("h[{:>4}] = {:>+.9}\n", i, c));
        }
        if self.verbose {
            out.push_str("\nFreq (Hz)     Magnitude\n");
            for point in &report.response {
                out.push_str(&format!(
                    "{:<12.1} {:>8.2} dB\n",
                    point.freq_hz, point.magnitude_db
                ));
            }
        }
        out
    }
}

use clap::Parser;

use firfilter::output::{DesignReport, OutputFormat, create_formatter};
use firfilter::signal_processing::{Window, design_lowpass};

#[derive(Parser, Debug)]
#[command(name = "fir_design")]
#[command(about = "Print windowed-sinc lowpass coefficients and response", long_about = None)]
struct Args {
    /// Filter order (taps = order + 1)
    #[arg(short, long, default_value_t = 64)]
    order: usize,

    /// Sample rate in Hz
    #[arg(short, long, default_value_t = 48000)]
    sample_rate: u32,

    /// Cutoff frequency in Hz
    #[arg(short = 'f', long, default_value_t = 1000.0)]
    cutoff: f64,

    /// Window function
    #[arg(short, long, value_enum, default_value = "hamming")]
    window: Window,

    /// Output format: text, csv, json
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Number of magnitude response points from DC to Nyquist
    #[arg(long, default_value_t = 17)]
    response_points: usize,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let coefficients = design_lowpass(args.order, args.sample_rate, args.cutoff, args.window)?;
    let report = DesignReport::new(
        args.sample_rate,
        args.cutoff,
        args.window,
        coefficients,
        args.response_points,
    );

    let formatter = create_formatter(args.format, args.verbose > 0);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }
    println!("{}", formatter.format(&report));
    Ok(())
}

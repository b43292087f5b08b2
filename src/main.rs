use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use firfilter::FilterError;
use firfilter::config::FilterConfig;
use firfilter::processing::process_interleaved;
use firfilter::signal_processing::Window;
use firfilter::wav::{read_wav, write_wav};

#[derive(Parser, Debug)]
#[command(name = "firfilter")]
#[command(about = "Lowpass-filter a WAV file with a windowed-sinc FIR filter", long_about = None)]
struct Args {
    /// Input WAV file
    input: PathBuf,

    /// Output WAV file (same channel count, rate and sample format)
    output: PathBuf,

    /// TOML configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Filter order (taps = order + 1)
    #[arg(short, long)]
    order: Option<usize>,

    /// Cutoff frequency in Hz
    #[arg(short = 'f', long)]
    cutoff: Option<f64>,

    /// Window function
    #[arg(short, long, value_enum)]
    window: Option<Window>,

    /// Frames per processing block
    #[arg(short, long)]
    block_size: Option<usize>,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(err) = run(&args) {
        eprintln!("firfilter: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FilterError>()
        .map(FilterError::exit_code)
        .unwrap_or(1)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FilterConfig::default(),
    };
    if let Some(order) = args.order {
        config.order = order;
    }
    if let Some(cutoff) = args.cutoff {
        config.cutoff_hz = cutoff;
    }
    if let Some(window) = args.window {
        config.window = window;
    }
    if let Some(block_size) = args.block_size {
        config.block_size = block_size;
    }

    let mut audio = read_wav(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let summary = process_interleaved(
        &config,
        audio.sample_rate,
        audio.channels,
        &mut audio.samples,
    )?;

    write_wav(&args.output, &audio)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Filtered {} frames x {} channel(s) in {} blocks (peak {:.3} -> {:.3})",
        summary.frames, summary.channels, summary.blocks, summary.peak_in, summary.peak_out
    );
    Ok(())
}

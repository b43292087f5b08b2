use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{FilterError, Result};

/// Interleaved audio read from, or destined for, a WAV file
///
/// Samples are normalized to [-1, 1] regardless of the file's format.
#[derive(Debug, Clone)]
pub struct WavAudio {
    pub samples: Vec<f64>,
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub sample_format: SampleFormat,
}

impl WavAudio {
    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    fn spec(&self) -> WavSpec {
        WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
            sample_format: self.sample_format,
        }
    }
}

/// Read a WAV file into normalized interleaved samples
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<WavAudio> {
    let reader = WavReader::open(path.as_ref())?;
    let spec = reader.spec();

    if spec.channels == 0 {
        return Err(FilterError::Config("WAV file has no channels".into()));
    }

    let samples = read_samples(reader, &spec)?;
    log::info!(
        "Read {} frames, {} channel(s) at {} Hz from {}",
        samples.len() / spec.channels as usize,
        spec.channels,
        spec.sample_rate,
        path.as_ref().display()
    );

    Ok(WavAudio {
        samples,
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        sample_format: spec.sample_format,
    })
}

fn read_samples(mut reader: WavReader<BufReader<File>>, spec: &WavSpec) -> Result<Vec<f64>> {
    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = int_full_scale(spec.bits_per_sample);
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };
    Ok(samples)
}

fn int_full_scale(bits_per_sample: u16) -> f64 {
    2_f64.powi(bits_per_sample as i32 - 1)
}

/// Write normalized interleaved samples in the format described by `audio`
///
/// Integer formats are re-quantized with clamping, since a lowpass can
/// overshoot full scale near sharp transients.
pub fn write_wav<P: AsRef<Path>>(path: P, audio: &WavAudio) -> Result<()> {
    let spec = audio.spec();
    let mut writer = WavWriter::create(path.as_ref(), spec)?;

    match spec.sample_format {
        SampleFormat::Float => {
            for &sample in &audio.samples {
                writer.write_sample(sample as f32)?;
            }
        }
        SampleFormat::Int => {
            let max_val = int_full_scale(spec.bits_per_sample);
            let (lo, hi) = (-max_val, max_val - 1.0);
            for &sample in &audio.samples {
                let q = (sample * max_val).round().clamp(lo, hi) as i32;
                writer.write_sample(q)?;
            }
        }
    }

    writer.finalize()?;
    log::info!(
        "Wrote {} frames to {}",
        audio.frames(),
        path.as_ref().display()
    );
    Ok(())
}

/// Save interleaved samples as 32-bit float WAV
pub fn save_wav<P: AsRef<Path>>(
    path: P,
    samples: &[f64],
    channels: u16,
    sample_rate: u32,
) -> Result<()> {
    let audio = WavAudio {
        samples: samples.to_vec(),
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    write_wav(path, &audio)
}

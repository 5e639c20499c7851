//! Example: Segment a single audio file
//!
//! Loads a WAV file, runs the full segmentation pipeline, and prints the
//! resulting cut timeline. Decoding stays out here in the host; the engine
//! only ever sees sample buffers.
//!
//! Usage: cargo run --example segment_file -- track.wav

use flashcut_engine::{segment_track, SegmenterConfig};

/// Load a WAV file and return (samples, sample_rate), downmixing to mono
fn load_wav(path: &str) -> Result<(Vec<f32>, u32), Box<dyn std::error::Error>> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_value))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let mono_samples = if spec.channels == 2 {
        samples
            .chunks(2)
            .map(|chunk| (chunk[0] + chunk[1]) / 2.0)
            .collect()
    } else {
        samples
    };

    Ok((mono_samples, spec.sample_rate))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: segment_file <track.wav>")?;

    let (samples, sample_rate) = load_wav(&path)?;

    let config = SegmenterConfig::default();
    let result = segment_track(&samples, sample_rate, &config)?;

    println!("Segmentation results for {}:", path);
    println!("  Duration: {:.2} s", result.metadata.duration_seconds);
    println!("  Onsets: {}", result.onsets.len());
    println!("  Intervals: {}", result.timeline.len());
    println!("  Processing time: {:.2} ms", result.metadata.processing_time_ms);
    println!();

    for (i, interval) in result.timeline.intervals.iter().enumerate() {
        println!("  {:>4}  {:>8.3} -> {:>8.3}", i + 1, interval.start, interval.end);
    }

    Ok(())
}

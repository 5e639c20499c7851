//! Example: Segment every WAV file in a directory in parallel
//!
//! Each file is an independent segmentation run; the engine holds no shared
//! mutable state, so the batch parallelizes with no coordination.
//!
//! Usage: cargo run --example segment_batch -- ./tracks

use rayon::prelude::*;

use flashcut_engine::{segment_track, SegmenterConfig};

fn load_wav(path: &std::path::Path) -> Result<(Vec<f32>, u32), Box<dyn std::error::Error>> {
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
    env_logger::init();

    let dir = std::env::args()
        .nth(1)
        .ok_or("usage: segment_batch <directory>")?;

    let mut paths: Vec<std::path::PathBuf> = std::fs::read_dir(&dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("wav"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        eprintln!("No WAV files found in {}", dir);
        return Ok(());
    }

    println!("Segmenting {} files...", paths.len());

    let config = SegmenterConfig::default();
    let results: Vec<String> = paths
        .par_iter()
        .map(|path| match load_wav(path) {
            Ok((samples, sample_rate)) => {
                match segment_track(&samples, sample_rate, &config) {
                    Ok(result) => format!(
                        "{}: {:.2} s, {} onsets, {} intervals ({:.1} ms)",
                        path.display(),
                        result.metadata.duration_seconds,
                        result.onsets.len(),
                        result.timeline.len(),
                        result.metadata.processing_time_ms
                    ),
                    Err(err) => format!("{}: segmentation failed: {}", path.display(), err),
                }
            }
            Err(err) => format!("{}: load failed: {}", path.display(), err),
        })
        .collect();

    for line in &results {
        println!("  {}", line);
    }

    Ok(())
}

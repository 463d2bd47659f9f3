use anyhow::{Context, Result};
use chunkring_codec::Encoding;
use chunkring_store::{CircularStore, StoreConfig};
use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Signal {
    /// 0, 1, 2, ...
    Ramp,
    /// amplitude * sin(0.05 * t)
    Sine,
}

/// Stream synthetic samples through a chunked circular store and report
/// what survives in the window.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
struct Args {
    /// JSON store config ({"encoding", "chunk_count", "max_chunk_bytes"}); flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Storage encoding: int16, int32 or float16
    #[arg(long)]
    encoding: Option<Encoding>,

    /// Number of chunks
    #[arg(long)]
    chunk_count: Option<usize>,

    /// Maximum bytes per chunk
    #[arg(long)]
    max_chunk_bytes: Option<usize>,

    /// Samples to append
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// Synthetic signal shape
    #[arg(long, value_enum, default_value_t = Signal::Sine)]
    signal: Signal,

    /// Sine amplitude
    #[arg(long, default_value_t = 100.0)]
    amplitude: f64,

    /// Print at most this many stored samples from each end of the window
    #[arg(long, default_value_t = 4)]
    show: usize,
}

fn load_config(args: &Args) -> Result<StoreConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))?
        }
        None => StoreConfig::default(),
    };
    if let Some(encoding) = args.encoding {
        config.encoding = encoding;
    }
    if let Some(chunk_count) = args.chunk_count {
        config.chunk_count = chunk_count;
    }
    if let Some(max_chunk_bytes) = args.max_chunk_bytes {
        config.max_chunk_bytes = max_chunk_bytes;
    }
    Ok(config)
}

fn sample(signal: Signal, amplitude: f64, t: usize) -> f64 {
    match signal {
        Signal::Ramp => t as f64,
        Signal::Sine => (t as f64 * 0.05).sin() * amplitude,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let mut store = CircularStore::new(&config).context("invalid store layout")?;
    info!("streaming {} {:?} samples", args.samples, args.signal);

    println!("=== Chunked Circular Store ===\n");
    println!("  Encoding: {} ({} bytes/element)", store.encoding(), store.encoding().width());
    println!(
        "  Chunks: {} x {} elements ({} bytes each)",
        store.chunk_count(),
        store.chunk_capacity(),
        store.chunk_capacity() * store.encoding().width()
    );
    println!("  Capacity: {} samples\n", store.capacity());

    let start = Instant::now();
    for t in 0..args.samples {
        store.append(sample(args.signal, args.amplitude, t));
    }
    let elapsed = start.elapsed();

    let evicted = args.samples.saturating_sub(store.capacity());
    println!("Appended {} samples in {:.3} ms", args.samples, elapsed.as_secs_f64() * 1000.0);
    println!("  Stored: {} | Full: {} | Evicted: {}", store.len(), store.is_full(), evicted);

    // Compare the surviving window against the source signal
    let mut max_error = 0.0f64;
    for (i, stored) in store.iter().enumerate() {
        let original = sample(args.signal, args.amplitude, evicted + i);
        max_error = max_error.max((original - stored).abs());
    }
    println!("  Max codec error in window: {:.3e}\n", max_error);

    let shown = args.show.min(store.len());
    for i in 0..shown {
        println!("  [{:>6}] t={:<8} {}", i, evicted + i, store.get(i as i64));
    }
    if store.len() > 2 * shown {
        println!("  ...");
    }
    for i in store.len().saturating_sub(shown).max(shown)..store.len() {
        println!("  [{:>6}] t={:<8} {}", i, evicted + i, store.get(i as i64));
    }

    Ok(())
}

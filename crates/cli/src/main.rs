//! Set-associative cache simulator CLI.
//!
//! This binary loads a backing-memory file, constructs a cache over it, and
//! replays an address sequence. It performs:
//! 1. **Geometry report:** Derived set count, bit widths, and binary masks.
//! 2. **Replay:** Per-address byte and hit/miss results, optionally with the
//!    full decomposition trace per read.
//! 3. **Summary:** Read/hit/miss statistics for the whole sequence.

use std::fs;
use std::process;

use clap::{Parser, ValueEnum};

use cachesim_core::config::{CacheConfig, ReplacementPolicy};
use cachesim_core::sim::loader;
use cachesim_core::sim::runner::Runner;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Set-associative cache simulator",
    long_about = "Load a backing-memory file, build a set-associative cache over it, and replay \
an address sequence, reporting hits, misses, and replacement behavior.\n\nExamples:\n  \
cachesim memory.txt 0 64 128 0\n  cachesim memory.txt --sweep 8192 --policy lfu\n  \
cachesim memory.txt --config cache.json --trace 0x1f40"
)]
struct Cli {
    /// Backing-memory file (any byte content).
    file: String,

    /// Addresses to read, in order (decimal or 0x-prefixed hex).
    #[arg(value_parser = parse_address)]
    addresses: Vec<u64>,

    /// Read addresses 0..N sequentially before any explicit addresses.
    #[arg(long, value_name = "N")]
    sweep: Option<u64>,

    /// JSON cache configuration file; flags below override its fields.
    #[arg(long)]
    config: Option<String>,

    /// Total cache size in bytes.
    #[arg(long)]
    size_bytes: Option<usize>,

    /// Associativity (ways per set).
    #[arg(long)]
    ways: Option<usize>,

    /// Cache line size in bytes.
    #[arg(long)]
    line_bytes: Option<usize>,

    /// Address width in bits.
    #[arg(long)]
    address_bits: Option<u32>,

    /// Replacement policy.
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Print the full decomposition/victim trace for every read.
    #[arg(long)]
    trace: bool,
}

/// Replacement policy selection on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Least Recently Used.
    Lru,
    /// Least Frequently Used.
    Lfu,
}

impl From<PolicyArg> for ReplacementPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Lru => Self::Lru,
            PolicyArg::Lfu => Self::Lfu,
        }
    }
}

/// Parses a decimal or 0x-prefixed hexadecimal address.
fn parse_address(raw: &str) -> Result<u64, String> {
    let parsed = raw.strip_prefix("0x").map_or_else(
        || raw.parse::<u64>().map_err(|e| e.to_string()),
        |hex| u64::from_str_radix(hex, 16).map_err(|e| e.to_string()),
    );
    parsed.map_err(|e| format!("invalid address '{raw}': {e}"))
}

/// Builds the cache configuration from the optional JSON file plus flag
/// overrides.
fn build_config(cli: &Cli) -> Result<CacheConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => CacheConfig::default(),
    };
    if let Some(size_bytes) = cli.size_bytes {
        config.size_bytes = size_bytes;
    }
    if let Some(ways) = cli.ways {
        config.ways = ways;
    }
    if let Some(line_bytes) = cli.line_bytes {
        config.line_bytes = line_bytes;
    }
    if let Some(address_bits) = cli.address_bits {
        config.address_bits = address_bits;
    }
    if let Some(policy) = cli.policy {
        config.policy = policy.into();
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(cli)?;
    let memory = loader::load_backing(&cli.file)?;
    let mut runner = Runner::new(&config, memory)?;

    let geometry = *runner.cache().geometry();
    println!(
        "cache: {} bytes, {} ways x {} sets x {}-byte lines, {}-bit addresses",
        geometry.size_bytes(),
        geometry.ways(),
        geometry.sets(),
        geometry.line_bytes(),
        geometry.address_bits(),
    );
    println!(
        "  tag: {:>2} bits  mask {:#066b}",
        geometry.tag_bits(),
        geometry.tag_mask()
    );
    println!(
        "index: {:>2} bits  mask {:#066b}",
        geometry.index_bits(),
        geometry.index_mask()
    );
    println!(
        "offst: {:>2} bits  mask {:#066b}",
        geometry.offset_bits(),
        geometry.offset_mask()
    );

    let sweep = cli.sweep.unwrap_or(0);
    let addresses = (0..sweep).chain(cli.addresses.iter().copied());

    if cli.trace {
        for address in addresses {
            let outcome = runner.cache_mut().read_traced(address);
            println!(
                "read {:#010x} -> {:#04x} [{}] tag={:#x} index={} offset={} ranks={:?}{}",
                outcome.address,
                outcome.byte,
                if outcome.is_hit() { "hit " } else { "miss" },
                outcome.parts.tag,
                outcome.parts.index,
                outcome.parts.offset,
                outcome.ranks,
                outcome
                    .victim_way
                    .map_or_else(String::new, |way| format!(" victim=way{way}")),
            );
        }
    } else {
        for record in runner.run(addresses) {
            println!(
                "read {:#010x} -> {:#04x} [{}]",
                record.address,
                record.byte,
                if record.hit { "hit" } else { "miss" },
            );
        }
    }

    println!("{}", runner.stats());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

//! Pulse CLI — entry point for inspecting network snapshots.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pulse_types::{
    is_valid_address, is_valid_block_hash, NetworkConfig, Percent, Timestamp, Weight,
};
use pulse_utils::LogFormat;
use pulse_wire::{JsonFileSource, NetworkSnapshot, SnapshotSource};

#[derive(Parser)]
#[command(name = "pulse", about = "Explorer core CLI — derived network statistics")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "PULSE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured maximum coin supply (decimal coins).
    #[arg(long, env = "PULSE_MAX_SUPPLY")]
    max_supply: Option<Weight>,

    /// Override the configured rebroadcast threshold (basis points of supply).
    #[arg(long, env = "PULSE_REBROADCAST_BPS")]
    rebroadcast_bps: Option<u32>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "PULSE_LOG_LEVEL")]
    log_level: String,

    /// Log format: "human" or "json".
    #[arg(long, default_value = "human", env = "PULSE_LOG_FORMAT")]
    log_format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Compute network statistics from a snapshot file.
    Status {
        /// Snapshot JSON file: one poll's worth of captured API responses.
        #[arg(long, env = "PULSE_SNAPSHOT")]
        snapshot: PathBuf,
    },
    /// Classify a search query as an account address or a block hash.
    Validate {
        /// The query string, exactly as the user typed it.
        query: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pulse_utils::init_tracing(&cli.log_level, LogFormat::from_config(&cli.log_format));

    let mut config = match cli.config {
        Some(ref path) => match NetworkConfig::from_toml_file(&path.to_string_lossy()) {
            Ok(cfg) => {
                tracing::info!("Loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                tracing::warn!("Failed to load config file: {e}, using defaults");
                NetworkConfig::default()
            }
        },
        None => NetworkConfig::default(),
    };
    if let Some(max_supply) = cli.max_supply {
        config.max_supply = max_supply;
    }
    if let Some(bps) = cli.rebroadcast_bps {
        config.rebroadcast_threshold_bps = bps;
    }

    match cli.command {
        Command::Status { snapshot } => {
            let mut source = JsonFileSource::new(&snapshot);
            let snapshot = source
                .fetch()
                .with_context(|| format!("reading snapshot {}", snapshot.display()))?;
            print_status(&snapshot, &config)?;
        }
        Command::Validate { query } => {
            let kind = classify(&query, &config);
            println!("{kind}");
            if kind == "invalid" {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn classify(query: &str, config: &NetworkConfig) -> &'static str {
    if is_valid_address(query, &config.currency) {
        "account address"
    } else if is_valid_block_hash(query) {
        "block hash"
    } else {
        "invalid"
    }
}

fn print_status(snapshot: &NetworkSnapshot, config: &NetworkConfig) -> anyhow::Result<()> {
    let stats = snapshot.stats(config).context("aggregating snapshot")?;
    let tally = snapshot.block_tally().context("tallying block counts")?;
    let peers = snapshot.peer_versions();

    if let Some(taken) = snapshot.timestamp {
        let age_secs = taken.elapsed_since(Timestamp::now()) / 1000;
        match taken.format_calendar() {
            Some(calendar) => {
                println!("Snapshot taken {} ({})", calendar, pulse_utils::format_age(age_secs));
            }
            None => println!("Snapshot timestamp unknown"),
        }
    }

    let symbol = &config.currency.symbol;
    let amount_digits = config.display.amount_digits;
    let percent_digits = config.display.percent_digits;
    let amount = |weight: Weight| format!("{} {}", weight.format_coins(amount_digits), symbol);
    let percent = |value: Option<Percent>| match value {
        Some(pct) => format!("{}%", pct.format(percent_digits)),
        None => "n/a".to_string(),
    };

    println!("Representatives online: {}", stats.online_count);
    println!(
        "Online voting weight: {} ({} of supply)",
        amount(stats.online_weight),
        percent(stats.online_percent_of_supply),
    );
    println!(
        "Official representatives: {} ({} of supply, {} of online)",
        amount(stats.official_weight),
        percent(stats.official_percent_of_supply),
        percent(stats.official_percent_of_online),
    );
    println!(
        "Rebroadcasting (threshold {}): {} representatives, {} ({} of supply, {} of online)",
        amount(stats.rebroadcast_threshold),
        stats.rebroadcast_count,
        amount(stats.rebroadcast_weight),
        percent(stats.rebroadcast_percent_of_supply),
        percent(stats.rebroadcast_percent_of_online),
    );

    if !tally.is_empty() {
        let mut kinds: Vec<(&str, u64)> = tally.iter().collect();
        kinds.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let detail: Vec<String> = kinds
            .iter()
            .map(|(kind, count)| format!("{kind} {count}"))
            .collect();
        println!("Blocks: {} ({})", tally.total(), detail.join(", "));
    }

    if peers.total_peers() > 0 {
        let versions: Vec<String> = peers
            .sorted()
            .into_iter()
            .map(|(version, count)| format!("v{version}: {count}"))
            .collect();
        println!(
            "Peers: {} across {} protocol version(s) — {}",
            peers.total_peers(),
            peers.distinct_versions(),
            versions.join(", "),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_address_hash_and_garbage() {
        let config = NetworkConfig::default();
        let address = format!(
            "nano_{}",
            "1111111111111111111111111111111111111111111111111111hifc8npp"
        );
        assert_eq!(classify(&address, &config), "account address");
        assert_eq!(classify(&"A".repeat(64), &config), "block hash");
        assert_eq!(classify("hello", &config), "invalid");
        assert_eq!(classify("", &config), "invalid");
    }
}

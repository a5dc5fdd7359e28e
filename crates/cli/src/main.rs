use clap::Parser;
use ferrous_dnscache_domain::{CliOverrides, RecordType};
use std::time::Instant;
use tracing::{debug, info, warn};

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "ferrous-dnscache")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous DNS Cache - read-through answer cache for DNS lookups")]
struct Cli {
    /// Host names to resolve
    #[arg(required = true, value_name = "HOST")]
    hosts: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream resolver (ip:port)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Dial network (udp, udp4, udp6, tcp, tcp4, tcp6)
    #[arg(short = 'n', long)]
    network: Option<String>,

    /// Per-query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Send every query upstream
    #[arg(long)]
    no_cache: bool,

    /// Record type to ask for (A or AAAA); both when omitted
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    record_type: Option<RecordType>,

    /// Number of rounds over the host list
    #[arg(short = 'r', long, default_value_t = 2)]
    repeat: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        upstream: cli.upstream.clone(),
        network: cli.network.clone(),
        timeout_ms: cli.timeout_ms,
        cache_enabled: cli.no_cache.then_some(false),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous DNS Cache v{}", env!("CARGO_PKG_VERSION"));
    info!(
        upstream = %config.upstream.address,
        network = %config.upstream.network,
        cache_enabled = config.cache.enabled,
        "Configuration loaded"
    );

    let dns_services = di::DnsServices::new(&config)?;
    let use_cases = di::UseCases::new(&dns_services);

    for round in 1..=cli.repeat {
        for host in &cli.hosts {
            let start = Instant::now();
            match use_cases.lookup_host.execute(host, cli.record_type).await {
                Ok(result) => output::print_lookup(round, &result, start.elapsed()),
                Err(e) => {
                    warn!(host = %host, error = %e, "Lookup failed");
                    output::print_failure(round, host, &e, start.elapsed());
                }
            }
        }
        debug!(
            round,
            entries = use_cases.get_cache_stats.cache_size(),
            "Lookup round complete"
        );
    }

    output::print_cache_stats(&use_cases.get_cache_stats.execute());

    Ok(())
}

use ferrous_dnscache_application::ports::{CacheStatsSnapshot, LookupResult};
use ferrous_dnscache_domain::DomainError;
use std::time::Duration;

pub fn print_lookup(round: usize, result: &LookupResult, elapsed: Duration) {
    let addresses = if result.is_empty() {
        "(no addresses)".to_string()
    } else {
        result
            .addresses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!(
        "[round {}] {} -> {} ({})",
        round,
        result.host,
        addresses,
        format_latency(elapsed)
    );
}

pub fn print_failure(round: usize, host: &str, error: &DomainError, elapsed: Duration) {
    println!(
        "[round {}] {} failed: {} ({})",
        round,
        host,
        error,
        format_latency(elapsed)
    );
}

pub fn print_cache_stats(stats: &CacheStatsSnapshot) {
    println!();
    println!("Cache statistics");
    println!("  entries:          {}", stats.total_entries);
    println!("  hits:             {}", stats.hits);
    println!("  misses:           {}", stats.misses);
    println!("  insertions:       {}", stats.insertions);
    println!("  lazy evictions:   {}", stats.lazy_evictions);
    println!("  rejected expired: {}", stats.rejected_expired);
    println!("  hit rate:         {:.1}%", stats.hit_rate);
}

fn format_latency(elapsed: Duration) -> String {
    let micros = elapsed.as_micros();
    if micros < 1_000 {
        format!("{}µs", micros)
    } else {
        format!("{:.2}ms", micros as f64 / 1_000.0)
    }
}

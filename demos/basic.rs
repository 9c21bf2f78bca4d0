//! Basic usage example
//!
//! Run with `RUST_LOG=envbind=debug` to see where each value came from.

use envbind::Bind;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Bind)]
struct Config {
    // Falls back to localhost:5432 when DATABASE_URL is unset or empty
    #[conf("DATABASE_URL,localhost:5432")]
    pub database_url: String,

    // Numeric type
    #[conf("MAX_CONNECTIONS,10")]
    pub max_connections: u32,

    // Boolean type: only "true" or "false"
    #[conf("DEBUG,false")]
    pub debug: bool,

    // No default: the empty literal
    #[conf("TIMEOUT")]
    pub timeout: String,

    // No directive: keeps whatever the caller put there
    pub instance_id: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("MAX_CONNECTIONS", "42");
    std::env::set_var("DEBUG", "true");

    let mut config = Config {
        instance_id: 7,
        ..Config::default()
    };
    envbind::bind(&mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug: {}", config.debug);
    println!("  Timeout: {:?}", config.timeout);
    println!("  Instance ID: {}", config.instance_id);

    Ok(())
}

//! Example demonstrating `;`-separated sequences and coercion errors

use anyhow::Context;
use envbind::{Bind, BindError};

#[derive(Debug, Default, Bind)]
struct Config {
    // Split on ';' into ["127.0.0.1", "192.168.1.1"]
    #[conf("ALLOWED_IPS,127.0.0.1;192.168.1.1")]
    pub allowed_ips: Vec<String>,

    // Floating-point accepts exponential form
    #[conf("SAMPLE_RATE,1e-2")]
    pub sample_rate: f64,

    #[conf("WORKERS,4")]
    pub workers: u8,
}

fn main() -> anyhow::Result<()> {
    let mut config = Config::default();
    envbind::bind(&mut config).context("failed to load configuration")?;

    println!("Configuration loaded:");
    println!("  Allowed IPs: {:?}", config.allowed_ips);
    println!("  Sample Rate: {}", config.sample_rate);
    println!("  Workers: {}", config.workers);

    // 300 does not fit in u8: an error, not a truncated value
    std::env::set_var("WORKERS", "300");
    match envbind::bind(&mut config) {
        Err(BindError::Coercion {
            field,
            literal,
            type_name,
            ..
        }) => println!("  Rejected {literal:?} for {field} ({type_name})"),
        other => anyhow::bail!("expected a coercion error, got {other:?}"),
    }

    Ok(())
}

//! Example demonstrating a hand-written field table and a custom source

use envbind::{Bind, Binder, Fields};
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Default)]
struct Limits {
    pub requests_per_second: u32,
}

#[derive(Debug, Default)]
struct Config {
    pub region: String,
    pub limits: Limits,
}

impl Bind for Limits {
    fn fields() -> &'static Fields<Self> {
        static FIELDS: OnceLock<Fields<Limits>> = OnceLock::new();
        FIELDS.get_or_init(|| {
            Fields::<Limits>::new().value("requests_per_second", "RPS,100", |l| {
                &mut l.requests_per_second
            })
        })
    }
}

impl Bind for Config {
    fn fields() -> &'static Fields<Self> {
        static FIELDS: OnceLock<Fields<Config>> = OnceLock::new();
        FIELDS.get_or_init(|| {
            Fields::<Config>::new()
                .value("region", "REGION,eu-west-1", |c| &mut c.region)
                .record("limits", |c| &mut c.limits)
        })
    }
}

fn main() -> anyhow::Result<()> {
    // Any Lookup works as a source, e.g. values read from elsewhere
    let mut source = HashMap::new();
    source.insert("RPS".to_string(), "250".to_string());

    let mut config = Config::default();
    Binder::with_source(source).bind(&mut config)?;

    println!("Configuration loaded:");
    println!("  Region: {}", config.region);
    println!("  Requests/s: {}", config.limits.requests_per_second);

    for field in Config::fields() {
        println!("  field {:<8} directive {:?}", field.name(), field.directive());
    }

    Ok(())
}

//! Example demonstrating the type-erased entry point

use envbind::{Bind, BindError, Registry};
use std::any::Any;

#[derive(Debug, Default, Bind)]
struct CacheConfig {
    #[conf("CACHE_URL,redis://localhost")]
    pub url: String,
}

fn main() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    registry.register::<CacheConfig>();

    let mut cache = CacheConfig::default();
    registry.bind_any(Some(&mut cache as &mut dyn Any))?;
    println!("Cache URL: {}", cache.url);

    // Targets that are not registered records are rejected untouched
    let mut port = 8080u16;
    if let Err(err @ BindError::InvalidTargetShape { .. }) =
        registry.bind_any(Some(&mut port as &mut dyn Any))
    {
        println!("Rejected: {err}");
    }

    if let Err(err) = registry.bind_any(None) {
        println!("Rejected: {err}");
    }

    Ok(())
}

//! Example demonstrating nested records

use envbind::Bind;

#[derive(Debug, Default, Bind)]
struct TlsConfig {
    #[conf("TLS_ENABLED,false")]
    pub enabled: bool,

    #[conf("TLS_CERT_PATH,/etc/ssl/cert.pem")]
    pub cert_path: String,
}

#[derive(Debug, Default, Bind)]
struct ServerConfig {
    #[conf("SERVER_ADDR,127.0.0.1:8080")]
    pub addr: String,

    // Bound recursively, at any depth
    #[conf(nested)]
    pub tls: TlsConfig,
}

#[derive(Debug, Default, Bind)]
struct Config {
    #[conf("APP_NAME,demo")]
    pub name: String,

    #[conf(nested)]
    pub server: ServerConfig,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("TLS_ENABLED", "true");

    // Default-construct and bind in one step
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Name: {}", config.name);
    println!("  Server Address: {}", config.server.addr);
    println!("  TLS Enabled: {}", config.server.tls.enabled);
    println!("  TLS Certificate: {}", config.server.tls.cert_path);

    Ok(())
}

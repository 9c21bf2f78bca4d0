// Nested records are bound at any depth; untagged fields are left alone

use envbind::Bind;

#[derive(Debug, Default, Bind)]
struct Pool {
    #[conf("UI_NESTED_POOL_SIZE,4")]
    pub size: u32,
}

#[derive(Debug, Default, Bind)]
struct Database {
    #[conf("UI_NESTED_DB_HOST,localhost")]
    pub host: String,

    #[conf(nested)]
    pub pool: Pool,
}

#[derive(Debug, Default, Bind)]
struct Config {
    #[conf(nested)]
    pub database: Database,

    pub build: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("UI_NESTED_POOL_SIZE", "16");

    let config = Config::from_env()?;
    assert_eq!(config.database.host, "localhost");
    assert_eq!(config.database.pool.size, 16);
    assert_eq!(config.build, "");
    Ok(())
}

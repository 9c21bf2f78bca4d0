// A directive next to a record field is accepted and has no effect; the
// record is bound through its own fields

use envbind::Bind;

#[derive(Debug, Default, Bind)]
struct Database {
    #[conf("UI_IGNORED_DB_HOST,localhost")]
    pub host: String,
}

#[derive(Debug, Default, Bind)]
struct Cache {
    #[conf("UI_IGNORED_CACHE_TTL,60")]
    pub ttl: u64,
}

#[derive(Debug, Default)]
struct Opaque {
    pub note: String,
}

#[derive(Debug, Default, Bind)]
struct Config {
    #[conf(nested, "UI_IGNORED_DATABASE,unused")]
    pub database: Database,

    #[conf("UI_IGNORED_CACHE,unused")]
    pub cache: Cache,

    pub replica: Database,

    pub opaque: Opaque,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("UI_IGNORED_DATABASE", "db.internal");
    std::env::set_var("UI_IGNORED_CACHE", "300");
    std::env::set_var("UI_IGNORED_CACHE_TTL", "120");

    let config = Config::from_env()?;
    assert_eq!(config.database.host, "localhost");
    assert_eq!(config.cache.ttl, 120);
    assert_eq!(config.replica.host, "localhost");
    assert_eq!(config.opaque.note, "");

    let fields = <Config as Bind>::fields();
    let directives: Vec<_> = fields.iter().map(|f| f.directive()).collect();
    assert_eq!(
        directives,
        vec![
            Some("UI_IGNORED_DATABASE,unused"),
            Some("UI_IGNORED_CACHE,unused"),
            None,
        ]
    );
    Ok(())
}

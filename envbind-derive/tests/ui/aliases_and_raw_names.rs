// Type aliases of supported types and raw identifiers

use envbind::Bind;

type Port = u16;

#[derive(Debug, Default, Bind)]
struct Config {
    #[conf("UI_ALIAS_PORT,9090")]
    pub port: Port,

    #[conf("UI_ALIAS_TYPE,worker")]
    pub r#type: std::string::String,
}

fn main() {
    let mut config = Config::default();
    envbind::bind(&mut config).unwrap();

    assert_eq!(config.port, 9090);
    assert_eq!(config.r#type, "worker");

    let names: Vec<_> = Config::fields().iter().map(|field| field.name()).collect();
    assert_eq!(names, vec!["port", "type"]);
}

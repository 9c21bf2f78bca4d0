// Every coercion rule, with and without environment overrides

use envbind::Bind;

#[derive(Debug, Default, Bind)]
struct Config {
    #[conf("UI_SCALAR_NAME,default_value")]
    pub name: String,

    #[conf("UI_SCALAR_COUNT,10")]
    pub count: i64,

    #[conf("UI_SCALAR_PORT,8080")]
    pub port: u16,

    #[conf("UI_SCALAR_DEBUG,false")]
    pub debug: bool,

    #[conf("UI_SCALAR_RATIO,0.5")]
    pub ratio: f64,

    #[conf("UI_SCALAR_TAGS,a;b;c")]
    pub tags: Vec<String>,

    #[conf("UI_SCALAR_EMPTY")]
    pub empty: String,
}

fn main() {
    std::env::set_var("UI_SCALAR_COUNT", "-3");
    std::env::set_var("UI_SCALAR_DEBUG", "true");

    let mut config = Config {
        empty: "replaced".to_string(),
        ..Config::default()
    };
    envbind::bind(&mut config).unwrap();

    assert_eq!(config.name, "default_value");
    assert_eq!(config.count, -3);
    assert_eq!(config.port, 8080);
    assert!(config.debug);
    assert_eq!(config.ratio, 0.5);
    assert_eq!(config.tags, vec!["a", "b", "c"]);
    assert_eq!(config.empty, "");
}

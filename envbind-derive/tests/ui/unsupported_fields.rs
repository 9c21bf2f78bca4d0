// Fields without a coercion rule fail only when they carry a directive

use envbind::{Bind, BindError};
use std::collections::HashMap;

#[derive(Debug, Default, Bind)]
struct Config {
    #[conf("UI_UNSUPPORTED_NAME,svc")]
    pub name: String,

    #[conf("UI_UNSUPPORTED_LIMITS,a=1")]
    pub limits: HashMap<String, u32>,

    pub optional: Option<String>,
}

fn main() {
    let mut config = Config::default();
    let err = envbind::bind(&mut config).unwrap_err();

    match err {
        BindError::UnsupportedFieldType { field, kind } => {
            assert_eq!(field, "limits");
            assert_eq!(kind, "map");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(config.name, "svc");
    assert!(config.optional.is_none());
}

//! Where variable values come from

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// Read-only lookup of variables by exact name.
pub trait Lookup {
    /// Current value of `name`, or `None` when it is not set.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The process environment.
///
/// A variable holding non-Unicode data is treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Lookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl<S: BuildHasher> Lookup for HashMap<String, String, S> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Lookup for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_process_env_lookup() {
        env::set_var("ENVBIND_SOURCE_TEST", "value");
        assert_eq!(
            ProcessEnv.lookup("ENVBIND_SOURCE_TEST"),
            Some("value".to_string())
        );

        env::remove_var("ENVBIND_SOURCE_TEST");
        assert_eq!(ProcessEnv.lookup("ENVBIND_SOURCE_TEST"), None);
    }

    #[test]
    fn test_map_lookup() {
        let mut map = BTreeMap::new();
        map.insert("HOST".to_string(), "localhost".to_string());

        assert_eq!(map.lookup("HOST"), Some("localhost".to_string()));
        assert_eq!(map.lookup("host"), None);
    }
}

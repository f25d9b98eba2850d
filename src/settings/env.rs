//! Environment variable sources.

use std::collections::BTreeMap;
use std::fmt;

/// Read access to environment variables.
///
/// Values are read on every call; implementations must not cache.
pub trait Environment: Send + Sync + fmt::Debug {
    fn var(&self, name: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A fixed set of variables, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_env_returns_only_defined_vars() {
        let env = MapEnv::new().with("SAKARI_CLIENT_ID", "abc");
        assert_eq!(env.var("SAKARI_CLIENT_ID").as_deref(), Some("abc"));
        assert_eq!(env.var("SAKARI_CLIENT_SECRET"), None);
    }

    #[test]
    fn map_env_collects_from_pairs() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("B").as_deref(), Some("2"));
    }

    #[test]
    fn process_env_reads_existing_variable() {
        // PATH is set for any test harness we run under.
        assert!(ProcessEnv.var("PATH").is_some());
        assert_eq!(ProcessEnv.var("SAKARI_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}

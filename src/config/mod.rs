//! Generator options

use crate::base::constants::DEFAULT_ROOT_NAME;

/// Code generation options that affect schema handling
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GeneratorOptions {
    /// Emit a synthetic root container above every module
    pub generate_fake_root: bool,
    /// Name of the synthetic root (empty = use the default name)
    pub fake_root_name: String,
}

impl GeneratorOptions {
    /// Enable the fake root, optionally naming it
    pub fn with_fake_root(mut self, name: impl Into<String>) -> Self {
        self.generate_fake_root = true;
        self.fake_root_name = name.into();
        self
    }

    /// Name of the fake root to generate, or an empty string if none
    pub fn root_name(&self) -> String {
        resolve_root_name(
            &self.fake_root_name,
            DEFAULT_ROOT_NAME,
            self.generate_fake_root,
        )
    }
}

/// Pick the fake root name.
///
/// Returns an empty string when no root is to be generated, otherwise
/// `name` if it is set and `default_name` if it is not.
pub fn resolve_root_name(name: &str, default_name: &str, generate_root: bool) -> String {
    if !generate_root {
        return String::new();
    }

    if name.is_empty() {
        return default_name.to_string();
    }

    name.to_string()
}

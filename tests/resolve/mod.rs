//! Leafref resolution tests over OpenConfig-shaped trees.

pub mod tests_openconfig_leafrefs;

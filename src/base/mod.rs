//! Foundation types for the yangref toolchain.
//!
//! This module provides the pieces shared by every other layer:
//! - [`NodeId`] - Compact arena index for schema nodes
//! - Path grammar constants (separators, ascent marker, prefix delimiter)
//!
//! This module has NO dependencies on other yangref modules.

pub mod constants;
mod node_id;

pub use node_id::NodeId;

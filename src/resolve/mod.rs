//! # Leafref Resolution
//!
//! Turns the path of a `leafref` node into the node it designates.
//!
//! ## Algorithm
//!
//! 1. **Parse** - the path is split into an anchor and a prefix-free
//!    descent list (see [`crate::path`])
//! 2. **Anchor** - absolute paths start at the root reachable from the
//!    node; relative paths climb one parent link per `../`, starting at
//!    the node itself
//! 3. **Descend** - each name is looked up among the current node's
//!    children
//!
//! Both addressing modes share step 3, so a missing segment is reported
//! the same way regardless of how the start was found.

mod batch;
mod error;
mod leafref;

pub use batch::{LeafrefResolution, failures, resolve_all};
pub use error::{ResolveError, ResolveErrorKind};
pub use leafref::{LeafrefResolver, resolve_leafref};

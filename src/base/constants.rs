//! Shared constants for the leafref path grammar and code generation.

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// Marker for a single ascent in a relative leafref path.
pub const PARENT_STEP: &str = "../";

/// Delimiter between a module prefix and a local node name.
pub const PREFIX_DELIMITER: char = ':';

/// Name used for the generated fake root when none is configured.
pub const DEFAULT_ROOT_NAME: &str = "device";

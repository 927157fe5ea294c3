//! YANG built-in type kinds and the type descriptor carried by schema nodes.

use std::fmt;
use std::str::FromStr;

/// Built-in YANG type kinds.
///
/// Derived types (typedefs) carry the kind of the built-in they
/// ultimately restrict; only [`TypeKind::Leafref`] matters to resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum TypeKind {
    #[default]
    None,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Binary,
    Bits,
    Boolean,
    Decimal64,
    Empty,
    Enumeration,
    Identityref,
    InstanceIdentifier,
    Leafref,
    String,
    Union,
}

impl TypeKind {
    /// All kinds, in declaration order.
    pub const ALL: [TypeKind; 20] = [
        Self::None,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Binary,
        Self::Bits,
        Self::Boolean,
        Self::Decimal64,
        Self::Empty,
        Self::Enumeration,
        Self::Identityref,
        Self::InstanceIdentifier,
        Self::Leafref,
        Self::String,
        Self::Union,
    ];

    /// The YANG keyword for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Binary => "binary",
            Self::Bits => "bits",
            Self::Boolean => "boolean",
            Self::Decimal64 => "decimal64",
            Self::Empty => "empty",
            Self::Enumeration => "enumeration",
            Self::Identityref => "identityref",
            Self::InstanceIdentifier => "instance-identifier",
            Self::Leafref => "leafref",
            Self::String => "string",
            Self::Union => "union",
        }
    }

    pub fn is_leafref(&self) -> bool {
        matches!(self, Self::Leafref)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a YANG built-in type keyword.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type kind: {0}")]
pub struct UnknownTypeKind(pub String);

impl FromStr for TypeKind {
    type Err = UnknownTypeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownTypeKind(s.to_string()))
    }
}

/// Type descriptor of a schema node.
///
/// `path` is only meaningful when `kind` is [`TypeKind::Leafref`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YangType {
    pub kind: TypeKind,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "String::is_empty")
    )]
    pub path: String,
}

impl YangType {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            path: String::new(),
        }
    }

    /// Create a leafref type pointing at `path`.
    pub fn leafref(path: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Leafref,
            path: path.into(),
        }
    }

    pub fn is_leafref(&self) -> bool {
        self.kind.is_leafref()
    }
}

impl From<TypeKind> for YangType {
    fn from(kind: TypeKind) -> Self {
        Self::new(kind)
    }
}

//! Mapping of parent type tags onto accessor shapes.

use podgen_typeinfo::{SpaType, registry};

/// Return type of accessors that hand out an owned copy of the value.
pub const OWNED_POD: &str = "OwnedPod";

/// Kind of value an accessor reads back, derived from the parent tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    /// Enumerated id.
    Id,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// File descriptor.
    Fd,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Width/height pair.
    Rectangle,
    /// Numerator/denominator pair.
    Fraction,
    /// Boolean.
    Bool,
    /// String.
    String,
    /// Any other tag, read back as an owned pod.
    Structured(u32),
}

impl ParentKind {
    /// Classifies a raw parent tag. Total over `u32`.
    #[must_use]
    pub fn from_tag(tag: u32) -> Self {
        match SpaType::from_raw(tag) {
            Some(SpaType::Id) => Self::Id,
            Some(SpaType::Int) => Self::Int,
            Some(SpaType::Long) => Self::Long,
            Some(SpaType::Fd) => Self::Fd,
            Some(SpaType::Float) => Self::Float,
            Some(SpaType::Double) => Self::Double,
            Some(SpaType::Rectangle) => Self::Rectangle,
            Some(SpaType::Fraction) => Self::Fraction,
            Some(SpaType::Bool) => Self::Bool,
            Some(SpaType::String) => Self::String,
            _ => Self::Structured(tag),
        }
    }

    /// Returns the Rust type the accessor yields.
    #[must_use]
    pub const fn return_type(self) -> &'static str {
        match self {
            Self::Id => "u32",
            Self::Int => "i32",
            Self::Long | Self::Fd => "i64",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Rectangle => "SpaRectangle",
            Self::Fraction => "SpaFraction",
            Self::Bool => "bool",
            Self::String => "&BStr",
            Self::Structured(_) => OWNED_POD,
        }
    }

    /// Returns how the accessor reads the value.
    #[must_use]
    pub const fn call(self) -> AccessorCall {
        match self {
            Self::Id => AccessorCall::Convert("as_id"),
            Self::Int => AccessorCall::Convert("as_i32"),
            Self::Long => AccessorCall::Convert("as_i64"),
            Self::Fd => AccessorCall::Convert("as_fd"),
            Self::Float => AccessorCall::Convert("as_f32"),
            Self::Double => AccessorCall::Convert("as_f64"),
            Self::Rectangle => AccessorCall::Convert("as_rectangle"),
            Self::Fraction => AccessorCall::Convert("as_fraction"),
            Self::Bool => AccessorCall::Convert("as_bool"),
            Self::String => AccessorCall::Convert("as_str"),
            Self::Structured(_) => AccessorCall::TakeOwned,
        }
    }
}

/// How an accessor body turns the looked-up value into its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorCall {
    /// Fallible conversion method, e.g. `as_i32`.
    Convert(&'static str),
    /// Deep copy into an owned value.
    TakeOwned,
}

/// Shape of one generated accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessor {
    /// Classified parent kind.
    pub kind: ParentKind,
    /// Rust return type inside the `Option`.
    pub return_type: &'static str,
    /// Read strategy.
    pub call: AccessorCall,
}

impl Accessor {
    /// Renders the accessor body expression for property `tag`.
    #[must_use]
    pub fn body(&self, tag: u32) -> String {
        match self.call {
            AccessorCall::Convert(method) => format!("self.get({tag})?.{method}().ok()"),
            AccessorCall::TakeOwned => format!("Some(self.get({tag})?.to_owned())"),
        }
    }

    /// Documentation hint naming the structural parent.
    ///
    /// Only the owned branch carries one.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self.kind {
            ParentKind::Structured(tag) => Some(
                registry::find_type(tag)
                    .map_or_else(|| format!("unknown type {tag}"), |info| info.name.to_string()),
            ),
            _ => None,
        }
    }
}

/// Classifies a parent tag into an accessor shape.
#[must_use]
pub fn classify(parent: u32) -> Accessor {
    let kind = ParentKind::from_tag(parent);
    Accessor {
        kind,
        return_type: kind.return_type(),
        call: kind.call(),
    }
}

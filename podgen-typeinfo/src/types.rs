//! Type descriptor definitions.
//!
//! This module contains the data structures describing the SPA type
//! hierarchy: the tag enumeration, single descriptors and the root
//! categories that group them.

use num_derive::FromPrimitive;

/// Separator between the segments of a namespaced type name.
pub const NAME_SEPARATOR: char = ':';

/// Known SPA type tags.
///
/// Tags outside this enumeration are still valid parent tags; they are
/// carried as raw `u32` values in [`TypeInfo::parent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u32)]
pub enum SpaType {
    /// Start of the basic type range.
    Start = 0,
    /// No type.
    None = 1,
    /// Boolean.
    Bool,
    /// Enumerated id.
    Id,
    /// Signed 32-bit integer.
    Int,
    /// Signed 64-bit integer.
    Long,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Nul-terminated string.
    String,
    /// Raw bytes.
    Bytes,
    /// Width/height pair.
    Rectangle,
    /// Numerator/denominator pair.
    Fraction,
    /// Bitmap.
    Bitmap,
    /// Homogeneous array.
    Array,
    /// Heterogeneous struct.
    Struct,
    /// Keyed object.
    Object,
    /// Timed control sequence.
    Sequence,
    /// Typed pointer.
    Pointer,
    /// File descriptor.
    Fd,
    /// Choice between values.
    Choice,
    /// Any pod.
    Pod,

    /// Buffer pointer.
    PointerBuffer = 0x10001,
    /// Meta pointer.
    PointerMeta,
    /// Dictionary pointer.
    PointerDict,

    /// Device event.
    EventDevice = 0x20001,
    /// Node event.
    EventNode,

    /// Device command.
    CommandDevice = 0x30001,
    /// Node command.
    CommandNode,

    /// Property info object.
    ObjectPropInfo = 0x40001,
    /// Properties object.
    ObjectProps,
    /// Format object.
    ObjectFormat,
    /// Buffers param object.
    ObjectParamBuffers,
    /// Meta param object.
    ObjectParamMeta,
    /// IO param object.
    ObjectParamIo,
    /// Profile param object.
    ObjectParamProfile,
    /// Port config param object.
    ObjectParamPortConfig,
    /// Route param object.
    ObjectParamRoute,
    /// Profiler object.
    ObjectProfiler,
    /// Latency param object.
    ObjectParamLatency,
    /// Process latency param object.
    ObjectParamProcessLatency,
    /// Tag param object.
    ObjectParamTag,

    /// PipeWire vendor extensions.
    VendorPipeWire = 0x0200_0000,
    /// Other vendor extensions.
    VendorOther = 0x7f00_0000,
}

impl SpaType {
    /// Looks up a known tag by its raw value.
    #[must_use]
    pub fn from_raw(value: u32) -> Option<Self> {
        num_traits::FromPrimitive::from_u32(value)
    }

    /// Returns the raw tag value.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self as u32
    }
}

/// A single entry of the type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    /// Numeric type tag (the property key for object entries).
    pub ty: u32,
    /// Numeric parent type tag.
    pub parent: u32,
    /// Namespaced name, e.g. `Spa:Pod:Object:Param:Props:volume`.
    pub name: &'static str,
    /// Permitted discrete values, if this entry enumerates any.
    pub values: Option<&'static [TypeInfo]>,
}

impl TypeInfo {
    /// Creates a descriptor with a known parent tag and no values.
    #[must_use]
    pub const fn new(ty: u32, parent: SpaType, name: &'static str) -> Self {
        Self::raw(ty, parent as u32, name)
    }

    /// Creates a descriptor with an arbitrary parent tag.
    #[must_use]
    pub const fn raw(ty: u32, parent: u32, name: &'static str) -> Self {
        Self {
            ty,
            parent,
            name,
            values: None,
        }
    }

    /// Attaches a nested value sequence.
    #[must_use]
    pub const fn with_values(mut self, values: &'static [TypeInfo]) -> Self {
        self.values = Some(values);
        self
    }

    /// Returns the text after the last separator.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        short_name(self.name)
    }

    /// Returns the parent tag if it is a known one.
    #[must_use]
    pub fn parent_type(&self) -> Option<SpaType> {
        SpaType::from_raw(self.parent)
    }

    /// Returns true if the parent tag is `None`.
    #[must_use]
    pub const fn has_none_parent(&self) -> bool {
        self.parent == SpaType::None as u32
    }

    /// Returns true for category markers: entries with an empty short name
    /// or a `None` parent.
    #[must_use]
    pub fn is_marker(&self) -> bool {
        self.short_name().is_empty() || self.has_none_parent()
    }
}

/// One top-level named group of descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootCategory {
    /// Full type-info name, e.g. `Spa:Pod:Object:Param:Props`.
    pub name: &'static str,
    /// Descriptors in declaration order.
    pub infos: &'static [TypeInfo],
}

impl RootCategory {
    /// Creates a new root category.
    #[must_use]
    pub const fn new(name: &'static str, infos: &'static [TypeInfo]) -> Self {
        Self { name, infos }
    }

    /// Returns the last segment of the category name, e.g. `Props`.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        short_name(self.name)
    }

    /// Returns true if `name` is either the full or the short name.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.short_name().eq_ignore_ascii_case(name)
    }
}

/// Returns the text after the last [`NAME_SEPARATOR`] of `name`.
#[must_use]
pub fn short_name(name: &str) -> &str {
    name.rfind(NAME_SEPARATOR)
        .map_or(name, |pos| &name[pos + NAME_SEPARATOR.len_utf8()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spa_type_from_raw() {
        assert_eq!(SpaType::from_raw(3), Some(SpaType::Id));
        assert_eq!(SpaType::from_raw(20), Some(SpaType::Pod));
        assert_eq!(SpaType::from_raw(0x40003), Some(SpaType::ObjectFormat));
        assert_eq!(SpaType::from_raw(0x4000D), Some(SpaType::ObjectParamTag));
        assert_eq!(SpaType::from_raw(21), None);
        assert_eq!(SpaType::from_raw(0xdead_beef), None);
    }

    #[test]
    fn test_spa_type_as_raw() {
        assert_eq!(SpaType::None.as_raw(), 1);
        assert_eq!(SpaType::String.as_raw(), 8);
        assert_eq!(SpaType::Fd.as_raw(), 18);
        assert_eq!(SpaType::PointerMeta.as_raw(), 0x10002);
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("Spa:Pod:Object:Param:Props"), "Props");
        assert_eq!(short_name("Spa:Pod:Object:Param:Props:"), "");
        assert_eq!(short_name("volume"), "volume");
    }

    #[test]
    fn test_type_info_marker() {
        let start = TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:Props:");
        let unknown = TypeInfo::new(1, SpaType::None, "Spa:Pod:Object:Param:Props:unknown");
        let volume = TypeInfo::new(0x10003, SpaType::Float, "Spa:Pod:Object:Param:Props:volume");

        assert!(start.is_marker());
        assert!(unknown.is_marker());
        assert!(unknown.has_none_parent());
        assert!(!volume.is_marker());
        assert_eq!(volume.parent_type(), Some(SpaType::Float));
    }

    #[test]
    fn test_type_info_with_values() {
        static VALUES: &[TypeInfo] = &[TypeInfo::new(0, SpaType::Int, "Spa:Enum:Direction:Input")];
        let info = TypeInfo::new(1, SpaType::Id, "Spa:Pod:Object:Param:Tag:direction")
            .with_values(VALUES);

        assert_eq!(info.values.map(<[TypeInfo]>::len), Some(1));
        assert_eq!(info.short_name(), "direction");
    }

    #[test]
    fn test_type_info_raw_parent() {
        let info = TypeInfo::raw(9, 0x1234_5678, "Spa:Test:odd");
        assert_eq!(info.parent, 0x1234_5678);
        assert_eq!(info.parent_type(), None);
        assert!(!info.is_marker());
    }

    #[test]
    fn test_root_category_matches() {
        let category = RootCategory::new("Spa:Pod:Object:Param:PortConfig", &[]);
        assert_eq!(category.short_name(), "PortConfig");
        assert!(category.matches("Spa:Pod:Object:Param:PortConfig"));
        assert!(category.matches("PortConfig"));
        assert!(category.matches("portconfig"));
        assert!(!category.matches("Port"));
    }
}

//! Base type registry.
//!
//! Maps every known [`SpaType`] tag to its canonical namespaced name. The
//! object entries reuse the category names from [`crate::tables::objects`].

use crate::tables::objects::{
    FORMAT_NAME, PARAM_BUFFERS_NAME, PARAM_IO_NAME, PARAM_LATENCY_NAME, PARAM_META_NAME,
    PARAM_PORT_CONFIG_NAME, PARAM_PROCESS_LATENCY_NAME, PARAM_PROFILE_NAME, PARAM_ROUTE_NAME,
    PARAM_TAG_NAME, PROFILER_NAME, PROP_INFO_NAME, PROPS_NAME,
};
use crate::types::{SpaType, TypeInfo};

/// `Spa:` base types.
pub static SPA_TYPES: &[TypeInfo] = &[
    TypeInfo::new(SpaType::Start as u32, SpaType::Start, "Spa:"),
    TypeInfo::new(SpaType::None as u32, SpaType::None, "Spa:None"),
    TypeInfo::new(SpaType::Bool as u32, SpaType::Bool, "Spa:Bool"),
    TypeInfo::new(SpaType::Id as u32, SpaType::Int, "Spa:Id"),
    TypeInfo::new(SpaType::Int as u32, SpaType::Int, "Spa:Int"),
    TypeInfo::new(SpaType::Long as u32, SpaType::Long, "Spa:Long"),
    TypeInfo::new(SpaType::Float as u32, SpaType::Float, "Spa:Float"),
    TypeInfo::new(SpaType::Double as u32, SpaType::Double, "Spa:Double"),
    TypeInfo::new(SpaType::String as u32, SpaType::String, "Spa:String"),
    TypeInfo::new(SpaType::Bytes as u32, SpaType::Bytes, "Spa:Bytes"),
    TypeInfo::new(SpaType::Rectangle as u32, SpaType::Rectangle, "Spa:Rectangle"),
    TypeInfo::new(SpaType::Fraction as u32, SpaType::Fraction, "Spa:Fraction"),
    TypeInfo::new(SpaType::Bitmap as u32, SpaType::Bitmap, "Spa:Bitmap"),
    TypeInfo::new(SpaType::Array as u32, SpaType::Array, "Spa:Array"),
    TypeInfo::new(SpaType::Pod as u32, SpaType::Pod, "Spa:Pod"),
    TypeInfo::new(SpaType::Struct as u32, SpaType::Pod, "Spa:Pod:Struct"),
    TypeInfo::new(SpaType::Object as u32, SpaType::Pod, "Spa:Pod:Object"),
    TypeInfo::new(SpaType::Sequence as u32, SpaType::Pod, "Spa:Pod:Sequence"),
    TypeInfo::new(SpaType::Pointer as u32, SpaType::Pointer, "Spa:Pointer"),
    TypeInfo::new(SpaType::Fd as u32, SpaType::Fd, "Spa:Fd"),
    TypeInfo::new(SpaType::Choice as u32, SpaType::Pod, "Spa:Pod:Choice"),
    TypeInfo::new(SpaType::PointerBuffer as u32, SpaType::Pointer, "Spa:Pointer:Buffer"),
    TypeInfo::new(SpaType::PointerMeta as u32, SpaType::Pointer, "Spa:Pointer:Meta"),
    TypeInfo::new(SpaType::PointerDict as u32, SpaType::Pointer, "Spa:Pointer:Dict"),
    TypeInfo::new(SpaType::EventDevice as u32, SpaType::Object, "Spa:Pod:Object:Event:Device"),
    TypeInfo::new(SpaType::EventNode as u32, SpaType::Object, "Spa:Pod:Object:Event:Node"),
    TypeInfo::new(
        SpaType::CommandDevice as u32,
        SpaType::Object,
        "Spa:Pod:Object:Command:Device",
    ),
    TypeInfo::new(SpaType::CommandNode as u32, SpaType::Object, "Spa:Pod:Object:Command:Node"),
    TypeInfo::new(SpaType::ObjectPropInfo as u32, SpaType::Object, PROP_INFO_NAME),
    TypeInfo::new(SpaType::ObjectProps as u32, SpaType::Object, PROPS_NAME),
    TypeInfo::new(SpaType::ObjectFormat as u32, SpaType::Object, FORMAT_NAME),
    TypeInfo::new(SpaType::ObjectParamBuffers as u32, SpaType::Object, PARAM_BUFFERS_NAME),
    TypeInfo::new(SpaType::ObjectParamMeta as u32, SpaType::Object, PARAM_META_NAME),
    TypeInfo::new(SpaType::ObjectParamIo as u32, SpaType::Object, PARAM_IO_NAME),
    TypeInfo::new(SpaType::ObjectParamProfile as u32, SpaType::Object, PARAM_PROFILE_NAME),
    TypeInfo::new(
        SpaType::ObjectParamPortConfig as u32,
        SpaType::Object,
        PARAM_PORT_CONFIG_NAME,
    ),
    TypeInfo::new(SpaType::ObjectParamRoute as u32, SpaType::Object, PARAM_ROUTE_NAME),
    TypeInfo::new(SpaType::ObjectProfiler as u32, SpaType::Object, PROFILER_NAME),
    TypeInfo::new(SpaType::ObjectParamLatency as u32, SpaType::Object, PARAM_LATENCY_NAME),
    TypeInfo::new(
        SpaType::ObjectParamProcessLatency as u32,
        SpaType::Object,
        PARAM_PROCESS_LATENCY_NAME,
    ),
    TypeInfo::new(SpaType::ObjectParamTag as u32, SpaType::Object, PARAM_TAG_NAME),
];

/// Finds the first base type entry with the given tag.
///
/// The search is flat: nested value tables are not visited.
#[must_use]
pub fn find_type(tag: u32) -> Option<&'static TypeInfo> {
    SPA_TYPES.iter().find(|info| info.ty == tag)
}

/// Returns the registered name for `tag`, if any.
#[must_use]
pub fn type_name(tag: u32) -> Option<&'static str> {
    find_type(tag).map(|info| info.name)
}

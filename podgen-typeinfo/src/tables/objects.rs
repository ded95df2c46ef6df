//! Object property tables, one per parameter/object family.
//!
//! Every table starts with its category marker (the bare `...:` name) and
//! lists the object keys in declaration order.

use super::enums::{
    AUDIO_AAC_STREAM_FORMAT, AUDIO_AMR_BAND_MODE, AUDIO_FLAGS, AUDIO_FORMAT, AUDIO_IEC958_CODEC,
    AUDIO_WMA_PROFILE, BLUETOOTH_AUDIO_CODEC, CHANNEL_MAP, DIRECTION, FLOAT_ARRAY, IEC958_CODECS,
    IO_TYPE, MEDIA_SUBTYPE, MEDIA_TYPE, META_TYPE, PARAM_AVAILABILITY, PARAM_BITORDER, PARAM_ID,
    PARAM_PORT_CONFIG_MODE, VIDEO_FORMAT, VIDEO_INTERLACE_MODE,
};
use crate::types::{SpaType, TypeInfo};

/// Full name of the property info object.
pub const PROP_INFO_NAME: &str = "Spa:Pod:Object:Param:PropInfo";
/// Full name of the properties object.
pub const PROPS_NAME: &str = "Spa:Pod:Object:Param:Props";
/// Full name of the format object.
pub const FORMAT_NAME: &str = "Spa:Pod:Object:Param:Format";
/// Full name of the buffers param object.
pub const PARAM_BUFFERS_NAME: &str = "Spa:Pod:Object:Param:Buffers";
/// Full name of the meta param object.
pub const PARAM_META_NAME: &str = "Spa:Pod:Object:Param:Meta";
/// Full name of the IO param object.
pub const PARAM_IO_NAME: &str = "Spa:Pod:Object:Param:IO";
/// Full name of the profile param object.
pub const PARAM_PROFILE_NAME: &str = "Spa:Pod:Object:Param:Profile";
/// Full name of the port config param object.
pub const PARAM_PORT_CONFIG_NAME: &str = "Spa:Pod:Object:Param:PortConfig";
/// Full name of the route param object.
pub const PARAM_ROUTE_NAME: &str = "Spa:Pod:Object:Param:Route";
/// Full name of the profiler object.
pub const PROFILER_NAME: &str = "Spa:Pod:Object:Profiler";
/// Full name of the latency param object.
pub const PARAM_LATENCY_NAME: &str = "Spa:Pod:Object:Param:Latency";
/// Full name of the process latency param object.
pub const PARAM_PROCESS_LATENCY_NAME: &str = "Spa:Pod:Object:Param:ProcessLatency";
/// Full name of the tag param object.
pub const PARAM_TAG_NAME: &str = "Spa:Pod:Object:Param:Tag";

/// `Spa:Pod:Object:Param:PropInfo`
pub static PROP_INFO: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:PropInfo:").with_values(PARAM_ID),
    TypeInfo::new(1, SpaType::Id, "Spa:Pod:Object:Param:PropInfo:id").with_values(PROPS),
    TypeInfo::new(2, SpaType::String, "Spa:Pod:Object:Param:PropInfo:name"),
    TypeInfo::new(3, SpaType::Pod, "Spa:Pod:Object:Param:PropInfo:type"),
    TypeInfo::new(4, SpaType::Struct, "Spa:Pod:Object:Param:PropInfo:labels"),
    TypeInfo::new(5, SpaType::Id, "Spa:Pod:Object:Param:PropInfo:container"),
    TypeInfo::new(6, SpaType::Bool, "Spa:Pod:Object:Param:PropInfo:params"),
    TypeInfo::new(7, SpaType::String, "Spa:Pod:Object:Param:PropInfo:description"),
];

/// `Spa:Pod:Object:Param:Props`
pub static PROPS: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:Props:").with_values(PARAM_ID),
    TypeInfo::new(1, SpaType::None, "Spa:Pod:Object:Param:Props:unknown"),
    TypeInfo::new(0x101, SpaType::String, "Spa:Pod:Object:Param:Props:device"),
    TypeInfo::new(0x102, SpaType::String, "Spa:Pod:Object:Param:Props:deviceName"),
    TypeInfo::new(0x103, SpaType::Fd, "Spa:Pod:Object:Param:Props:deviceFd"),
    TypeInfo::new(0x104, SpaType::String, "Spa:Pod:Object:Param:Props:card"),
    TypeInfo::new(0x105, SpaType::String, "Spa:Pod:Object:Param:Props:cardName"),
    TypeInfo::new(0x106, SpaType::Int, "Spa:Pod:Object:Param:Props:minLatency"),
    TypeInfo::new(0x107, SpaType::Int, "Spa:Pod:Object:Param:Props:maxLatency"),
    TypeInfo::new(0x108, SpaType::Int, "Spa:Pod:Object:Param:Props:periods"),
    TypeInfo::new(0x109, SpaType::Int, "Spa:Pod:Object:Param:Props:periodSize"),
    TypeInfo::new(0x10a, SpaType::Bool, "Spa:Pod:Object:Param:Props:periodEvent"),
    TypeInfo::new(0x10b, SpaType::Bool, "Spa:Pod:Object:Param:Props:live"),
    TypeInfo::new(0x10c, SpaType::Double, "Spa:Pod:Object:Param:Props:rate"),
    TypeInfo::new(0x10d, SpaType::Int, "Spa:Pod:Object:Param:Props:quality"),
    TypeInfo::new(0x10e, SpaType::Id, "Spa:Pod:Object:Param:Props:bluetoothAudioCodec")
        .with_values(BLUETOOTH_AUDIO_CODEC),
    TypeInfo::new(0x10f, SpaType::Bool, "Spa:Pod:Object:Param:Props:bluetoothOffloadActive"),
    TypeInfo::new(0x10001, SpaType::Id, "Spa:Pod:Object:Param:Props:waveType"),
    TypeInfo::new(0x10002, SpaType::Int, "Spa:Pod:Object:Param:Props:frequency"),
    TypeInfo::new(0x10003, SpaType::Float, "Spa:Pod:Object:Param:Props:volume"),
    TypeInfo::new(0x10004, SpaType::Bool, "Spa:Pod:Object:Param:Props:mute"),
    TypeInfo::new(0x10005, SpaType::Id, "Spa:Pod:Object:Param:Props:patternType"),
    TypeInfo::new(0x10006, SpaType::Id, "Spa:Pod:Object:Param:Props:ditherType"),
    TypeInfo::new(0x10007, SpaType::Bool, "Spa:Pod:Object:Param:Props:truncate"),
    TypeInfo::new(0x10008, SpaType::Array, "Spa:Pod:Object:Param:Props:channelVolumes")
        .with_values(FLOAT_ARRAY),
    TypeInfo::new(0x10009, SpaType::Float, "Spa:Pod:Object:Param:Props:volumeBase"),
    TypeInfo::new(0x1000a, SpaType::Float, "Spa:Pod:Object:Param:Props:volumeStep"),
    TypeInfo::new(0x1000b, SpaType::Array, "Spa:Pod:Object:Param:Props:channelMap")
        .with_values(CHANNEL_MAP),
    TypeInfo::new(0x1000c, SpaType::Bool, "Spa:Pod:Object:Param:Props:monitorMute"),
    TypeInfo::new(0x1000d, SpaType::Array, "Spa:Pod:Object:Param:Props:monitorVolumes")
        .with_values(FLOAT_ARRAY),
    TypeInfo::new(0x1000e, SpaType::Long, "Spa:Pod:Object:Param:Props:latencyOffsetNsec"),
    TypeInfo::new(0x1000f, SpaType::Bool, "Spa:Pod:Object:Param:Props:softMute"),
    TypeInfo::new(0x10010, SpaType::Array, "Spa:Pod:Object:Param:Props:softVolumes")
        .with_values(FLOAT_ARRAY),
    TypeInfo::new(0x10011, SpaType::Array, "Spa:Pod:Object:Param:Props:iec958Codecs")
        .with_values(IEC958_CODECS),
    TypeInfo::new(0x10012, SpaType::Int, "Spa:Pod:Object:Param:Props:volumeRampSamples"),
    TypeInfo::new(0x10013, SpaType::Int, "Spa:Pod:Object:Param:Props:volumeRampStepSamples"),
    TypeInfo::new(0x10014, SpaType::Int, "Spa:Pod:Object:Param:Props:volumeRampTime"),
    TypeInfo::new(0x10015, SpaType::Int, "Spa:Pod:Object:Param:Props:volumeRampStepTime"),
    TypeInfo::new(0x10016, SpaType::Id, "Spa:Pod:Object:Param:Props:volumeRampScale"),
    TypeInfo::new(0x20001, SpaType::Int, "Spa:Pod:Object:Param:Props:brightness"),
    TypeInfo::new(0x20002, SpaType::Int, "Spa:Pod:Object:Param:Props:contrast"),
    TypeInfo::new(0x20003, SpaType::Int, "Spa:Pod:Object:Param:Props:saturation"),
    TypeInfo::new(0x20004, SpaType::Int, "Spa:Pod:Object:Param:Props:hue"),
    TypeInfo::new(0x20005, SpaType::Int, "Spa:Pod:Object:Param:Props:gamma"),
    TypeInfo::new(0x20006, SpaType::Int, "Spa:Pod:Object:Param:Props:exposure"),
    TypeInfo::new(0x20007, SpaType::Int, "Spa:Pod:Object:Param:Props:gain"),
    TypeInfo::new(0x20008, SpaType::Int, "Spa:Pod:Object:Param:Props:sharpness"),
    TypeInfo::new(0x80001, SpaType::Struct, "Spa:Pod:Object:Param:Props:params"),
];

/// `Spa:Pod:Object:Param:Format`
pub static FORMAT: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:Format:").with_values(PARAM_ID),
    TypeInfo::new(1, SpaType::Id, "Spa:Pod:Object:Param:Format:mediaType")
        .with_values(MEDIA_TYPE),
    TypeInfo::new(2, SpaType::Id, "Spa:Pod:Object:Param:Format:mediaSubtype")
        .with_values(MEDIA_SUBTYPE),
    TypeInfo::new(0x10001, SpaType::Id, "Spa:Pod:Object:Param:Format:Audio:format")
        .with_values(AUDIO_FORMAT),
    TypeInfo::new(0x10002, SpaType::Id, "Spa:Pod:Object:Param:Format:Audio:flags")
        .with_values(AUDIO_FLAGS),
    TypeInfo::new(0x10003, SpaType::Int, "Spa:Pod:Object:Param:Format:Audio:rate"),
    TypeInfo::new(0x10004, SpaType::Int, "Spa:Pod:Object:Param:Format:Audio:channels"),
    TypeInfo::new(0x10005, SpaType::Array, "Spa:Pod:Object:Param:Format:Audio:position")
        .with_values(CHANNEL_MAP),
    TypeInfo::new(0x10006, SpaType::Id, "Spa:Pod:Object:Param:Format:Audio:iec958Codec")
        .with_values(AUDIO_IEC958_CODEC),
    TypeInfo::new(0x10007, SpaType::Id, "Spa:Pod:Object:Param:Format:Audio:bitorder")
        .with_values(PARAM_BITORDER),
    TypeInfo::new(0x10008, SpaType::Int, "Spa:Pod:Object:Param:Format:Audio:interleave"),
    TypeInfo::new(0x10009, SpaType::Int, "Spa:Pod:Object:Param:Format:Audio:bitrate"),
    TypeInfo::new(0x1000a, SpaType::Int, "Spa:Pod:Object:Param:Format:Audio:blockAlign"),
    TypeInfo::new(0x1000b, SpaType::Id, "Spa:Pod:Object:Param:Format:Audio:AAC:streamFormat")
        .with_values(AUDIO_AAC_STREAM_FORMAT),
    TypeInfo::new(0x1000c, SpaType::Id, "Spa:Pod:Object:Param:Format:Audio:WMA:profile")
        .with_values(AUDIO_WMA_PROFILE),
    TypeInfo::new(0x1000d, SpaType::Id, "Spa:Pod:Object:Param:Format:Audio:AMR:bandMode")
        .with_values(AUDIO_AMR_BAND_MODE),
    TypeInfo::new(0x20001, SpaType::Id, "Spa:Pod:Object:Param:Format:Video:format")
        .with_values(VIDEO_FORMAT),
    TypeInfo::new(0x20002, SpaType::Long, "Spa:Pod:Object:Param:Format:Video:modifier"),
    TypeInfo::new(0x20003, SpaType::Rectangle, "Spa:Pod:Object:Param:Format:Video:size"),
    TypeInfo::new(0x20004, SpaType::Fraction, "Spa:Pod:Object:Param:Format:Video:framerate"),
    TypeInfo::new(0x20005, SpaType::Fraction, "Spa:Pod:Object:Param:Format:Video:maxFramerate"),
    TypeInfo::new(0x20006, SpaType::Int, "Spa:Pod:Object:Param:Format:Video:views"),
    TypeInfo::new(0x20007, SpaType::Id, "Spa:Pod:Object:Param:Format:Video:interlaceMode")
        .with_values(VIDEO_INTERLACE_MODE),
    TypeInfo::new(
        0x20008,
        SpaType::Fraction,
        "Spa:Pod:Object:Param:Format:Video:pixelAspectRatio",
    ),
    TypeInfo::new(0x20009, SpaType::Id, "Spa:Pod:Object:Param:Format:Video:multiviewMode"),
    TypeInfo::new(0x2000a, SpaType::Id, "Spa:Pod:Object:Param:Format:Video:multiviewFlags"),
    TypeInfo::new(0x2000b, SpaType::Id, "Spa:Pod:Object:Param:Format:Video:chromaSite"),
    TypeInfo::new(0x2000c, SpaType::Id, "Spa:Pod:Object:Param:Format:Video:colorRange"),
    TypeInfo::new(0x2000d, SpaType::Id, "Spa:Pod:Object:Param:Format:Video:colorMatrix"),
    TypeInfo::new(0x2000e, SpaType::Id, "Spa:Pod:Object:Param:Format:Video:transferFunction"),
    TypeInfo::new(0x2000f, SpaType::Id, "Spa:Pod:Object:Param:Format:Video:colorPrimaries"),
    TypeInfo::new(0x20010, SpaType::Int, "Spa:Pod:Object:Param:Format:Video:profile"),
    TypeInfo::new(0x20011, SpaType::Int, "Spa:Pod:Object:Param:Format:Video:level"),
    TypeInfo::new(0x20012, SpaType::Id, "Spa:Pod:Object:Param:Format:Video:H264:streamFormat"),
    TypeInfo::new(0x20013, SpaType::Id, "Spa:Pod:Object:Param:Format:Video:H264:alignment"),
];

/// `Spa:Pod:Object:Param:Buffers`
pub static PARAM_BUFFERS: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:Buffers:").with_values(PARAM_ID),
    TypeInfo::new(1, SpaType::Int, "Spa:Pod:Object:Param:Buffers:buffers"),
    TypeInfo::new(2, SpaType::Int, "Spa:Pod:Object:Param:Buffers:blocks"),
    TypeInfo::new(3, SpaType::Int, "Spa:Pod:Object:Param:Buffers:BlockInfo:size"),
    TypeInfo::new(4, SpaType::Int, "Spa:Pod:Object:Param:Buffers:BlockInfo:stride"),
    TypeInfo::new(5, SpaType::Int, "Spa:Pod:Object:Param:Buffers:BlockInfo:align"),
    TypeInfo::new(6, SpaType::Int, "Spa:Pod:Object:Param:Buffers:BlockInfo:dataType"),
    TypeInfo::new(7, SpaType::Int, "Spa:Pod:Object:Param:Buffers:BlockInfo:metaType"),
];

/// `Spa:Pod:Object:Param:Meta`
pub static PARAM_META: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:Meta:").with_values(PARAM_ID),
    TypeInfo::new(1, SpaType::Id, "Spa:Pod:Object:Param:Meta:type").with_values(META_TYPE),
    TypeInfo::new(2, SpaType::Int, "Spa:Pod:Object:Param:Meta:size"),
];

/// `Spa:Pod:Object:Param:IO`
pub static PARAM_IO: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:IO:").with_values(PARAM_ID),
    TypeInfo::new(1, SpaType::Id, "Spa:Pod:Object:Param:IO:id").with_values(IO_TYPE),
    TypeInfo::new(2, SpaType::Int, "Spa:Pod:Object:Param:IO:size"),
];

/// `Spa:Pod:Object:Param:Profile`
pub static PARAM_PROFILE: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:Profile:").with_values(PARAM_ID),
    TypeInfo::new(1, SpaType::Int, "Spa:Pod:Object:Param:Profile:index"),
    TypeInfo::new(2, SpaType::String, "Spa:Pod:Object:Param:Profile:name"),
    TypeInfo::new(3, SpaType::String, "Spa:Pod:Object:Param:Profile:description"),
    TypeInfo::new(4, SpaType::Int, "Spa:Pod:Object:Param:Profile:priority"),
    TypeInfo::new(5, SpaType::Id, "Spa:Pod:Object:Param:Profile:available")
        .with_values(PARAM_AVAILABILITY),
    TypeInfo::new(6, SpaType::Struct, "Spa:Pod:Object:Param:Profile:info"),
    TypeInfo::new(7, SpaType::Struct, "Spa:Pod:Object:Param:Profile:classes"),
    TypeInfo::new(8, SpaType::Bool, "Spa:Pod:Object:Param:Profile:save"),
];

/// `Spa:Pod:Object:Param:PortConfig`
pub static PARAM_PORT_CONFIG: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:PortConfig:").with_values(PARAM_ID),
    TypeInfo::new(1, SpaType::Id, "Spa:Pod:Object:Param:PortConfig:direction")
        .with_values(DIRECTION),
    TypeInfo::new(2, SpaType::Id, "Spa:Pod:Object:Param:PortConfig:mode")
        .with_values(PARAM_PORT_CONFIG_MODE),
    TypeInfo::new(3, SpaType::Bool, "Spa:Pod:Object:Param:PortConfig:monitor"),
    TypeInfo::new(4, SpaType::Bool, "Spa:Pod:Object:Param:PortConfig:control"),
    TypeInfo::new(5, SpaType::ObjectFormat, "Spa:Pod:Object:Param:PortConfig:format"),
];

/// `Spa:Pod:Object:Param:Route`
pub static PARAM_ROUTE: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:Route:").with_values(PARAM_ID),
    TypeInfo::new(1, SpaType::Int, "Spa:Pod:Object:Param:Route:index"),
    TypeInfo::new(2, SpaType::Id, "Spa:Pod:Object:Param:Route:direction").with_values(DIRECTION),
    TypeInfo::new(3, SpaType::Int, "Spa:Pod:Object:Param:Route:device"),
    TypeInfo::new(4, SpaType::String, "Spa:Pod:Object:Param:Route:name"),
    TypeInfo::new(5, SpaType::String, "Spa:Pod:Object:Param:Route:description"),
    TypeInfo::new(6, SpaType::Int, "Spa:Pod:Object:Param:Route:priority"),
    TypeInfo::new(7, SpaType::Id, "Spa:Pod:Object:Param:Route:available")
        .with_values(PARAM_AVAILABILITY),
    TypeInfo::new(8, SpaType::Struct, "Spa:Pod:Object:Param:Route:info"),
    TypeInfo::new(9, SpaType::Int, "Spa:Pod:Object:Param:Route:profiles"),
    TypeInfo::new(10, SpaType::ObjectProps, "Spa:Pod:Object:Param:Route:props"),
    TypeInfo::new(11, SpaType::Int, "Spa:Pod:Object:Param:Route:devices"),
    TypeInfo::new(12, SpaType::Int, "Spa:Pod:Object:Param:Route:profile"),
    TypeInfo::new(13, SpaType::Bool, "Spa:Pod:Object:Param:Route:save"),
];

/// `Spa:Pod:Object:Profiler`
pub static PROFILER: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Profiler:"),
    TypeInfo::new(0x10001, SpaType::Struct, "Spa:Pod:Object:Profiler:info"),
    TypeInfo::new(0x10002, SpaType::Struct, "Spa:Pod:Object:Profiler:clock"),
    TypeInfo::new(0x10003, SpaType::Struct, "Spa:Pod:Object:Profiler:driverBlock"),
    TypeInfo::new(0x20001, SpaType::Struct, "Spa:Pod:Object:Profiler:followerBlock"),
];

/// `Spa:Pod:Object:Param:Latency`
pub static PARAM_LATENCY: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:Latency:").with_values(PARAM_ID),
    TypeInfo::new(1, SpaType::Id, "Spa:Pod:Object:Param:Latency:direction")
        .with_values(DIRECTION),
    TypeInfo::new(2, SpaType::Float, "Spa:Pod:Object:Param:Latency:minQuantum"),
    TypeInfo::new(3, SpaType::Float, "Spa:Pod:Object:Param:Latency:maxQuantum"),
    TypeInfo::new(4, SpaType::Int, "Spa:Pod:Object:Param:Latency:minRate"),
    TypeInfo::new(5, SpaType::Int, "Spa:Pod:Object:Param:Latency:maxRate"),
    TypeInfo::new(6, SpaType::Long, "Spa:Pod:Object:Param:Latency:minNs"),
    TypeInfo::new(7, SpaType::Long, "Spa:Pod:Object:Param:Latency:maxNs"),
];

/// `Spa:Pod:Object:Param:ProcessLatency`
pub static PARAM_PROCESS_LATENCY: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:ProcessLatency:").with_values(PARAM_ID),
    TypeInfo::new(1, SpaType::Float, "Spa:Pod:Object:Param:ProcessLatency:quantum"),
    TypeInfo::new(2, SpaType::Int, "Spa:Pod:Object:Param:ProcessLatency:rate"),
    TypeInfo::new(3, SpaType::Long, "Spa:Pod:Object:Param:ProcessLatency:ns"),
];

/// `Spa:Pod:Object:Param:Tag`
pub static PARAM_TAG: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:Tag:").with_values(PARAM_ID),
    TypeInfo::new(1, SpaType::Id, "Spa:Pod:Object:Param:Tag:direction").with_values(DIRECTION),
    TypeInfo::new(2, SpaType::Struct, "Spa:Pod:Object:Param:Tag:info"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tables() -> [(&'static str, &'static [TypeInfo]); 13] {
        [
            (PROP_INFO_NAME, PROP_INFO),
            (PROPS_NAME, PROPS),
            (FORMAT_NAME, FORMAT),
            (PARAM_BUFFERS_NAME, PARAM_BUFFERS),
            (PARAM_META_NAME, PARAM_META),
            (PARAM_IO_NAME, PARAM_IO),
            (PARAM_PROFILE_NAME, PARAM_PROFILE),
            (PARAM_PORT_CONFIG_NAME, PARAM_PORT_CONFIG),
            (PARAM_ROUTE_NAME, PARAM_ROUTE),
            (PROFILER_NAME, PROFILER),
            (PARAM_LATENCY_NAME, PARAM_LATENCY),
            (PARAM_PROCESS_LATENCY_NAME, PARAM_PROCESS_LATENCY),
            (PARAM_TAG_NAME, PARAM_TAG),
        ]
    }

    #[test]
    fn test_tables_start_with_marker() {
        for (name, table) in all_tables() {
            let first = table.first().expect("table is empty");
            assert_eq!(first.name, format!("{name}:"));
            assert!(first.is_marker());
        }
    }

    #[test]
    fn test_table_entries_are_owned_by_category() {
        for (name, table) in all_tables() {
            let prefix = format!("{name}:");
            for info in table {
                assert!(info.name.starts_with(&prefix), "{} not under {}", info.name, name);
            }
        }
    }

    #[test]
    fn test_props_unknown_has_none_parent() {
        let unknown = PROPS
            .iter()
            .find(|info| info.short_name() == "unknown")
            .expect("unknown entry");
        assert!(unknown.has_none_parent());
    }

    #[test]
    fn test_format_values() {
        let media_type = &FORMAT[1];
        assert_eq!(media_type.short_name(), "mediaType");
        assert_eq!(media_type.values.map(<[TypeInfo]>::len), Some(MEDIA_TYPE.len()));

        let size = FORMAT
            .iter()
            .find(|info| info.name.ends_with("Video:size"))
            .expect("video size");
        assert_eq!(size.parent_type(), Some(SpaType::Rectangle));
        assert!(size.values.is_none());
    }
}

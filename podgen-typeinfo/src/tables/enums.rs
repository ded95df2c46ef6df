//! Enumeration tables referenced as nested values by the object tables.

use crate::types::{SpaType, TypeInfo};

/// `Spa:Enum:ParamId`
pub static PARAM_ID: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::None, "Spa:Enum:ParamId:Invalid"),
    TypeInfo::new(1, SpaType::ObjectPropInfo, "Spa:Enum:ParamId:PropInfo"),
    TypeInfo::new(2, SpaType::ObjectProps, "Spa:Enum:ParamId:Props"),
    TypeInfo::new(3, SpaType::ObjectFormat, "Spa:Enum:ParamId:EnumFormat"),
    TypeInfo::new(4, SpaType::ObjectFormat, "Spa:Enum:ParamId:Format"),
    TypeInfo::new(5, SpaType::ObjectParamBuffers, "Spa:Enum:ParamId:Buffers"),
    TypeInfo::new(6, SpaType::ObjectParamMeta, "Spa:Enum:ParamId:Meta"),
    TypeInfo::new(7, SpaType::ObjectParamIo, "Spa:Enum:ParamId:IO"),
    TypeInfo::new(8, SpaType::ObjectParamProfile, "Spa:Enum:ParamId:EnumProfile"),
    TypeInfo::new(9, SpaType::ObjectParamProfile, "Spa:Enum:ParamId:Profile"),
    TypeInfo::new(10, SpaType::ObjectParamPortConfig, "Spa:Enum:ParamId:EnumPortConfig"),
    TypeInfo::new(11, SpaType::ObjectParamPortConfig, "Spa:Enum:ParamId:PortConfig"),
    TypeInfo::new(12, SpaType::ObjectParamRoute, "Spa:Enum:ParamId:EnumRoute"),
    TypeInfo::new(13, SpaType::ObjectParamRoute, "Spa:Enum:ParamId:Route"),
    TypeInfo::new(14, SpaType::Sequence, "Spa:Enum:ParamId:Control"),
    TypeInfo::new(15, SpaType::ObjectParamLatency, "Spa:Enum:ParamId:Latency"),
    TypeInfo::new(16, SpaType::ObjectParamProcessLatency, "Spa:Enum:ParamId:ProcessLatency"),
    TypeInfo::new(17, SpaType::ObjectParamTag, "Spa:Enum:ParamId:Tag"),
];

/// `Spa:Enum:Direction`
pub static DIRECTION: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:Direction:Input"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:Direction:Output"),
];

/// `Spa:Enum:ParamAvailability`
pub static PARAM_AVAILABILITY: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:ParamAvailability:unknown"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:ParamAvailability:no"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:ParamAvailability:yes"),
];

/// `Spa:Enum:ParamPortConfigMode`
pub static PARAM_PORT_CONFIG_MODE: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:ParamPortConfigMode:none"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:ParamPortConfigMode:passthrough"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:ParamPortConfigMode:convert"),
    TypeInfo::new(3, SpaType::Int, "Spa:Enum:ParamPortConfigMode:dsp"),
];

/// `Spa:Enum:ParamBitorder`
pub static PARAM_BITORDER: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:ParamBitorder:unknown"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:ParamBitorder:msb"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:ParamBitorder:lsb"),
];

/// `Spa:Enum:MediaType`
pub static MEDIA_TYPE: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:MediaType:unknown"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:MediaType:audio"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:MediaType:video"),
    TypeInfo::new(3, SpaType::Int, "Spa:Enum:MediaType:image"),
    TypeInfo::new(4, SpaType::Int, "Spa:Enum:MediaType:binary"),
    TypeInfo::new(5, SpaType::Int, "Spa:Enum:MediaType:stream"),
    TypeInfo::new(6, SpaType::Int, "Spa:Enum:MediaType:application"),
];

/// `Spa:Enum:MediaSubtype`
pub static MEDIA_SUBTYPE: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:MediaSubtype:unknown"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:MediaSubtype:raw"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:MediaSubtype:dsp"),
    TypeInfo::new(3, SpaType::Int, "Spa:Enum:MediaSubtype:iec958"),
    TypeInfo::new(4, SpaType::Int, "Spa:Enum:MediaSubtype:dsd"),
    TypeInfo::new(0x10001, SpaType::Int, "Spa:Enum:MediaSubtype:mp3"),
    TypeInfo::new(0x10002, SpaType::Int, "Spa:Enum:MediaSubtype:aac"),
    TypeInfo::new(0x10003, SpaType::Int, "Spa:Enum:MediaSubtype:vorbis"),
    TypeInfo::new(0x10004, SpaType::Int, "Spa:Enum:MediaSubtype:wma"),
    TypeInfo::new(0x10005, SpaType::Int, "Spa:Enum:MediaSubtype:ra"),
    TypeInfo::new(0x10006, SpaType::Int, "Spa:Enum:MediaSubtype:sbc"),
    TypeInfo::new(0x10007, SpaType::Int, "Spa:Enum:MediaSubtype:adpcm"),
    TypeInfo::new(0x10008, SpaType::Int, "Spa:Enum:MediaSubtype:g723"),
    TypeInfo::new(0x10009, SpaType::Int, "Spa:Enum:MediaSubtype:g726"),
    TypeInfo::new(0x1000a, SpaType::Int, "Spa:Enum:MediaSubtype:g729"),
    TypeInfo::new(0x1000b, SpaType::Int, "Spa:Enum:MediaSubtype:amr"),
    TypeInfo::new(0x1000c, SpaType::Int, "Spa:Enum:MediaSubtype:gsm"),
    TypeInfo::new(0x1000d, SpaType::Int, "Spa:Enum:MediaSubtype:alac"),
    TypeInfo::new(0x1000e, SpaType::Int, "Spa:Enum:MediaSubtype:flac"),
    TypeInfo::new(0x1000f, SpaType::Int, "Spa:Enum:MediaSubtype:ape"),
    TypeInfo::new(0x10010, SpaType::Int, "Spa:Enum:MediaSubtype:opus"),
    TypeInfo::new(0x20001, SpaType::Int, "Spa:Enum:MediaSubtype:h264"),
    TypeInfo::new(0x20002, SpaType::Int, "Spa:Enum:MediaSubtype:mjpg"),
    TypeInfo::new(0x20003, SpaType::Int, "Spa:Enum:MediaSubtype:dv"),
    TypeInfo::new(0x20004, SpaType::Int, "Spa:Enum:MediaSubtype:mpegts"),
    TypeInfo::new(0x20005, SpaType::Int, "Spa:Enum:MediaSubtype:h263"),
    TypeInfo::new(0x20006, SpaType::Int, "Spa:Enum:MediaSubtype:mpeg1"),
    TypeInfo::new(0x20007, SpaType::Int, "Spa:Enum:MediaSubtype:mpeg2"),
    TypeInfo::new(0x20008, SpaType::Int, "Spa:Enum:MediaSubtype:mpeg4"),
    TypeInfo::new(0x20009, SpaType::Int, "Spa:Enum:MediaSubtype:xvid"),
    TypeInfo::new(0x2000a, SpaType::Int, "Spa:Enum:MediaSubtype:vc1"),
    TypeInfo::new(0x2000b, SpaType::Int, "Spa:Enum:MediaSubtype:vp8"),
    TypeInfo::new(0x2000c, SpaType::Int, "Spa:Enum:MediaSubtype:vp9"),
    TypeInfo::new(0x2000d, SpaType::Int, "Spa:Enum:MediaSubtype:bayer"),
    TypeInfo::new(0x30001, SpaType::Int, "Spa:Enum:MediaSubtype:jpeg"),
    TypeInfo::new(0x50001, SpaType::Int, "Spa:Enum:MediaSubtype:midi"),
    TypeInfo::new(0x60001, SpaType::Int, "Spa:Enum:MediaSubtype:control"),
];

/// `Spa:Enum:AudioFormat`
pub static AUDIO_FORMAT: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:AudioFormat:UNKNOWN"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:AudioFormat:ENCODED"),
    TypeInfo::new(0x101, SpaType::Int, "Spa:Enum:AudioFormat:S8"),
    TypeInfo::new(0x102, SpaType::Int, "Spa:Enum:AudioFormat:U8"),
    TypeInfo::new(0x103, SpaType::Int, "Spa:Enum:AudioFormat:S16LE"),
    TypeInfo::new(0x104, SpaType::Int, "Spa:Enum:AudioFormat:S16BE"),
    TypeInfo::new(0x105, SpaType::Int, "Spa:Enum:AudioFormat:U16LE"),
    TypeInfo::new(0x106, SpaType::Int, "Spa:Enum:AudioFormat:U16BE"),
    TypeInfo::new(0x107, SpaType::Int, "Spa:Enum:AudioFormat:S24_32LE"),
    TypeInfo::new(0x108, SpaType::Int, "Spa:Enum:AudioFormat:S24_32BE"),
    TypeInfo::new(0x109, SpaType::Int, "Spa:Enum:AudioFormat:U24_32LE"),
    TypeInfo::new(0x10a, SpaType::Int, "Spa:Enum:AudioFormat:U24_32BE"),
    TypeInfo::new(0x10b, SpaType::Int, "Spa:Enum:AudioFormat:S32LE"),
    TypeInfo::new(0x10c, SpaType::Int, "Spa:Enum:AudioFormat:S32BE"),
    TypeInfo::new(0x10d, SpaType::Int, "Spa:Enum:AudioFormat:U32LE"),
    TypeInfo::new(0x10e, SpaType::Int, "Spa:Enum:AudioFormat:U32BE"),
    TypeInfo::new(0x10f, SpaType::Int, "Spa:Enum:AudioFormat:S24LE"),
    TypeInfo::new(0x110, SpaType::Int, "Spa:Enum:AudioFormat:S24BE"),
    TypeInfo::new(0x111, SpaType::Int, "Spa:Enum:AudioFormat:U24LE"),
    TypeInfo::new(0x112, SpaType::Int, "Spa:Enum:AudioFormat:U24BE"),
    TypeInfo::new(0x113, SpaType::Int, "Spa:Enum:AudioFormat:S20LE"),
    TypeInfo::new(0x114, SpaType::Int, "Spa:Enum:AudioFormat:S20BE"),
    TypeInfo::new(0x115, SpaType::Int, "Spa:Enum:AudioFormat:U20LE"),
    TypeInfo::new(0x116, SpaType::Int, "Spa:Enum:AudioFormat:U20BE"),
    TypeInfo::new(0x117, SpaType::Int, "Spa:Enum:AudioFormat:S18LE"),
    TypeInfo::new(0x118, SpaType::Int, "Spa:Enum:AudioFormat:S18BE"),
    TypeInfo::new(0x119, SpaType::Int, "Spa:Enum:AudioFormat:U18LE"),
    TypeInfo::new(0x11a, SpaType::Int, "Spa:Enum:AudioFormat:U18BE"),
    TypeInfo::new(0x11b, SpaType::Int, "Spa:Enum:AudioFormat:F32LE"),
    TypeInfo::new(0x11c, SpaType::Int, "Spa:Enum:AudioFormat:F32BE"),
    TypeInfo::new(0x11d, SpaType::Int, "Spa:Enum:AudioFormat:F64LE"),
    TypeInfo::new(0x11e, SpaType::Int, "Spa:Enum:AudioFormat:F64BE"),
    TypeInfo::new(0x11f, SpaType::Int, "Spa:Enum:AudioFormat:ULAW"),
    TypeInfo::new(0x120, SpaType::Int, "Spa:Enum:AudioFormat:ALAW"),
    TypeInfo::new(0x201, SpaType::Int, "Spa:Enum:AudioFormat:U8P"),
    TypeInfo::new(0x202, SpaType::Int, "Spa:Enum:AudioFormat:S16P"),
    TypeInfo::new(0x203, SpaType::Int, "Spa:Enum:AudioFormat:S24_32P"),
    TypeInfo::new(0x204, SpaType::Int, "Spa:Enum:AudioFormat:S32P"),
    TypeInfo::new(0x205, SpaType::Int, "Spa:Enum:AudioFormat:S24P"),
    TypeInfo::new(0x206, SpaType::Int, "Spa:Enum:AudioFormat:F32P"),
    TypeInfo::new(0x207, SpaType::Int, "Spa:Enum:AudioFormat:F64P"),
    TypeInfo::new(0x208, SpaType::Int, "Spa:Enum:AudioFormat:S8P"),
];

/// `Spa:Flags:AudioFlags`
pub static AUDIO_FLAGS: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Flags:AudioFlags:none"),
    TypeInfo::new(1, SpaType::Int, "Spa:Flags:AudioFlags:unpositioned"),
];

/// `Spa:Enum:AudioChannel`
pub static AUDIO_CHANNEL: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:AudioChannel:UNK"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:AudioChannel:NA"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:AudioChannel:MONO"),
    TypeInfo::new(3, SpaType::Int, "Spa:Enum:AudioChannel:FL"),
    TypeInfo::new(4, SpaType::Int, "Spa:Enum:AudioChannel:FR"),
    TypeInfo::new(5, SpaType::Int, "Spa:Enum:AudioChannel:FC"),
    TypeInfo::new(6, SpaType::Int, "Spa:Enum:AudioChannel:LFE"),
    TypeInfo::new(7, SpaType::Int, "Spa:Enum:AudioChannel:SL"),
    TypeInfo::new(8, SpaType::Int, "Spa:Enum:AudioChannel:SR"),
    TypeInfo::new(9, SpaType::Int, "Spa:Enum:AudioChannel:FLC"),
    TypeInfo::new(10, SpaType::Int, "Spa:Enum:AudioChannel:FRC"),
    TypeInfo::new(11, SpaType::Int, "Spa:Enum:AudioChannel:RC"),
    TypeInfo::new(12, SpaType::Int, "Spa:Enum:AudioChannel:RL"),
    TypeInfo::new(13, SpaType::Int, "Spa:Enum:AudioChannel:RR"),
    TypeInfo::new(14, SpaType::Int, "Spa:Enum:AudioChannel:TC"),
    TypeInfo::new(15, SpaType::Int, "Spa:Enum:AudioChannel:TFL"),
    TypeInfo::new(16, SpaType::Int, "Spa:Enum:AudioChannel:TFC"),
    TypeInfo::new(17, SpaType::Int, "Spa:Enum:AudioChannel:TFR"),
    TypeInfo::new(18, SpaType::Int, "Spa:Enum:AudioChannel:TRL"),
    TypeInfo::new(19, SpaType::Int, "Spa:Enum:AudioChannel:TRC"),
    TypeInfo::new(20, SpaType::Int, "Spa:Enum:AudioChannel:TRR"),
    TypeInfo::new(21, SpaType::Int, "Spa:Enum:AudioChannel:RLC"),
    TypeInfo::new(22, SpaType::Int, "Spa:Enum:AudioChannel:RRC"),
    TypeInfo::new(23, SpaType::Int, "Spa:Enum:AudioChannel:FLW"),
    TypeInfo::new(24, SpaType::Int, "Spa:Enum:AudioChannel:FRW"),
    TypeInfo::new(25, SpaType::Int, "Spa:Enum:AudioChannel:LFE2"),
    TypeInfo::new(26, SpaType::Int, "Spa:Enum:AudioChannel:FLH"),
    TypeInfo::new(27, SpaType::Int, "Spa:Enum:AudioChannel:FCH"),
    TypeInfo::new(28, SpaType::Int, "Spa:Enum:AudioChannel:FRH"),
    TypeInfo::new(29, SpaType::Int, "Spa:Enum:AudioChannel:TFLC"),
    TypeInfo::new(30, SpaType::Int, "Spa:Enum:AudioChannel:TFRC"),
    TypeInfo::new(31, SpaType::Int, "Spa:Enum:AudioChannel:TSL"),
    TypeInfo::new(32, SpaType::Int, "Spa:Enum:AudioChannel:TSR"),
    TypeInfo::new(33, SpaType::Int, "Spa:Enum:AudioChannel:LLFE"),
    TypeInfo::new(34, SpaType::Int, "Spa:Enum:AudioChannel:RLFE"),
    TypeInfo::new(35, SpaType::Int, "Spa:Enum:AudioChannel:BC"),
    TypeInfo::new(36, SpaType::Int, "Spa:Enum:AudioChannel:BLC"),
    TypeInfo::new(37, SpaType::Int, "Spa:Enum:AudioChannel:BRC"),
];

/// `Spa:Enum:AudioIEC958Codec`
pub static AUDIO_IEC958_CODEC: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:AudioIEC958Codec:UNKNOWN"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:AudioIEC958Codec:PCM"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:AudioIEC958Codec:DTS"),
    TypeInfo::new(3, SpaType::Int, "Spa:Enum:AudioIEC958Codec:AC3"),
    TypeInfo::new(4, SpaType::Int, "Spa:Enum:AudioIEC958Codec:MPEG"),
    TypeInfo::new(5, SpaType::Int, "Spa:Enum:AudioIEC958Codec:MPEG2-AAC"),
    TypeInfo::new(6, SpaType::Int, "Spa:Enum:AudioIEC958Codec:EAC3"),
    TypeInfo::new(7, SpaType::Int, "Spa:Enum:AudioIEC958Codec:TrueHD"),
    TypeInfo::new(8, SpaType::Int, "Spa:Enum:AudioIEC958Codec:DTS-HD"),
];

/// `Spa:Enum:AudioAACStreamFormat`
pub static AUDIO_AAC_STREAM_FORMAT: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:AudioAACStreamFormat:UNKNOWN"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:AudioAACStreamFormat:RAW"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:AudioAACStreamFormat:MP2ADTS"),
    TypeInfo::new(3, SpaType::Int, "Spa:Enum:AudioAACStreamFormat:MP4ADTS"),
    TypeInfo::new(4, SpaType::Int, "Spa:Enum:AudioAACStreamFormat:MP4LOAS"),
    TypeInfo::new(5, SpaType::Int, "Spa:Enum:AudioAACStreamFormat:MP4LATM"),
    TypeInfo::new(6, SpaType::Int, "Spa:Enum:AudioAACStreamFormat:ADIF"),
    TypeInfo::new(7, SpaType::Int, "Spa:Enum:AudioAACStreamFormat:MP4FF"),
];

/// `Spa:Enum:AudioWMAProfile`
pub static AUDIO_WMA_PROFILE: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:AudioWMAProfile:UNKNOWN"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:AudioWMAProfile:WMA7"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:AudioWMAProfile:WMA8"),
    TypeInfo::new(3, SpaType::Int, "Spa:Enum:AudioWMAProfile:WMA9"),
    TypeInfo::new(4, SpaType::Int, "Spa:Enum:AudioWMAProfile:WMA10"),
    TypeInfo::new(5, SpaType::Int, "Spa:Enum:AudioWMAProfile:WMA9-Pro"),
    TypeInfo::new(6, SpaType::Int, "Spa:Enum:AudioWMAProfile:WMA9-Lossless"),
    TypeInfo::new(7, SpaType::Int, "Spa:Enum:AudioWMAProfile:WMA10-Lossless"),
];

/// `Spa:Enum:AudioAMRBandMode`
pub static AUDIO_AMR_BAND_MODE: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:AudioAMRBandMode:UNKNOWN"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:AudioAMRBandMode:NB"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:AudioAMRBandMode:WB"),
];

/// `Spa:Enum:BluetoothAudioCodec`
pub static BLUETOOTH_AUDIO_CODEC: &[TypeInfo] = &[
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:sbc"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:sbc_xq"),
    TypeInfo::new(3, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:mpeg"),
    TypeInfo::new(4, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:aac"),
    TypeInfo::new(5, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:aptx"),
    TypeInfo::new(6, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:aptx_hd"),
    TypeInfo::new(7, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:ldac"),
    TypeInfo::new(8, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:aptx_ll"),
    TypeInfo::new(9, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:aptx_ll_duplex"),
    TypeInfo::new(10, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:faststream"),
    TypeInfo::new(11, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:faststream_duplex"),
    TypeInfo::new(0x100, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:cvsd"),
    TypeInfo::new(0x101, SpaType::Int, "Spa:Enum:BluetoothAudioCodec:msbc"),
];

/// `Spa:Enum:VideoFormat`
pub static VIDEO_FORMAT: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:VideoFormat:UNKNOWN"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:VideoFormat:ENCODED"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:VideoFormat:I420"),
    TypeInfo::new(3, SpaType::Int, "Spa:Enum:VideoFormat:YV12"),
    TypeInfo::new(4, SpaType::Int, "Spa:Enum:VideoFormat:YUY2"),
    TypeInfo::new(5, SpaType::Int, "Spa:Enum:VideoFormat:UYVY"),
    TypeInfo::new(6, SpaType::Int, "Spa:Enum:VideoFormat:AYUV"),
    TypeInfo::new(7, SpaType::Int, "Spa:Enum:VideoFormat:RGBx"),
    TypeInfo::new(8, SpaType::Int, "Spa:Enum:VideoFormat:BGRx"),
    TypeInfo::new(9, SpaType::Int, "Spa:Enum:VideoFormat:xRGB"),
    TypeInfo::new(10, SpaType::Int, "Spa:Enum:VideoFormat:xBGR"),
    TypeInfo::new(11, SpaType::Int, "Spa:Enum:VideoFormat:RGBA"),
    TypeInfo::new(12, SpaType::Int, "Spa:Enum:VideoFormat:BGRA"),
    TypeInfo::new(13, SpaType::Int, "Spa:Enum:VideoFormat:ARGB"),
    TypeInfo::new(14, SpaType::Int, "Spa:Enum:VideoFormat:ABGR"),
    TypeInfo::new(15, SpaType::Int, "Spa:Enum:VideoFormat:RGB"),
    TypeInfo::new(16, SpaType::Int, "Spa:Enum:VideoFormat:BGR"),
    TypeInfo::new(17, SpaType::Int, "Spa:Enum:VideoFormat:Y41B"),
    TypeInfo::new(18, SpaType::Int, "Spa:Enum:VideoFormat:Y42B"),
    TypeInfo::new(19, SpaType::Int, "Spa:Enum:VideoFormat:YVYU"),
    TypeInfo::new(20, SpaType::Int, "Spa:Enum:VideoFormat:Y444"),
    TypeInfo::new(21, SpaType::Int, "Spa:Enum:VideoFormat:v210"),
    TypeInfo::new(22, SpaType::Int, "Spa:Enum:VideoFormat:v216"),
    TypeInfo::new(23, SpaType::Int, "Spa:Enum:VideoFormat:NV12"),
    TypeInfo::new(24, SpaType::Int, "Spa:Enum:VideoFormat:NV21"),
    TypeInfo::new(25, SpaType::Int, "Spa:Enum:VideoFormat:GRAY8"),
    TypeInfo::new(26, SpaType::Int, "Spa:Enum:VideoFormat:GRAY16_BE"),
    TypeInfo::new(27, SpaType::Int, "Spa:Enum:VideoFormat:GRAY16_LE"),
    TypeInfo::new(28, SpaType::Int, "Spa:Enum:VideoFormat:v308"),
    TypeInfo::new(29, SpaType::Int, "Spa:Enum:VideoFormat:RGB16"),
    TypeInfo::new(30, SpaType::Int, "Spa:Enum:VideoFormat:BGR16"),
    TypeInfo::new(31, SpaType::Int, "Spa:Enum:VideoFormat:RGB15"),
    TypeInfo::new(32, SpaType::Int, "Spa:Enum:VideoFormat:BGR15"),
    TypeInfo::new(33, SpaType::Int, "Spa:Enum:VideoFormat:UYVP"),
    TypeInfo::new(34, SpaType::Int, "Spa:Enum:VideoFormat:A420"),
    TypeInfo::new(35, SpaType::Int, "Spa:Enum:VideoFormat:RGB8P"),
    TypeInfo::new(36, SpaType::Int, "Spa:Enum:VideoFormat:YUV9"),
    TypeInfo::new(37, SpaType::Int, "Spa:Enum:VideoFormat:YVU9"),
    TypeInfo::new(38, SpaType::Int, "Spa:Enum:VideoFormat:IYU1"),
    TypeInfo::new(39, SpaType::Int, "Spa:Enum:VideoFormat:ARGB64"),
    TypeInfo::new(40, SpaType::Int, "Spa:Enum:VideoFormat:AYUV64"),
    TypeInfo::new(41, SpaType::Int, "Spa:Enum:VideoFormat:r210"),
    TypeInfo::new(42, SpaType::Int, "Spa:Enum:VideoFormat:I420_10BE"),
    TypeInfo::new(43, SpaType::Int, "Spa:Enum:VideoFormat:I420_10LE"),
    TypeInfo::new(44, SpaType::Int, "Spa:Enum:VideoFormat:I422_10BE"),
    TypeInfo::new(45, SpaType::Int, "Spa:Enum:VideoFormat:I422_10LE"),
    TypeInfo::new(46, SpaType::Int, "Spa:Enum:VideoFormat:Y444_10BE"),
    TypeInfo::new(47, SpaType::Int, "Spa:Enum:VideoFormat:Y444_10LE"),
    TypeInfo::new(48, SpaType::Int, "Spa:Enum:VideoFormat:GBR"),
    TypeInfo::new(49, SpaType::Int, "Spa:Enum:VideoFormat:GBR_10BE"),
    TypeInfo::new(50, SpaType::Int, "Spa:Enum:VideoFormat:GBR_10LE"),
    TypeInfo::new(51, SpaType::Int, "Spa:Enum:VideoFormat:NV16"),
    TypeInfo::new(52, SpaType::Int, "Spa:Enum:VideoFormat:NV24"),
    TypeInfo::new(53, SpaType::Int, "Spa:Enum:VideoFormat:NV12_64Z32"),
    TypeInfo::new(54, SpaType::Int, "Spa:Enum:VideoFormat:A420_10BE"),
    TypeInfo::new(55, SpaType::Int, "Spa:Enum:VideoFormat:A420_10LE"),
    TypeInfo::new(56, SpaType::Int, "Spa:Enum:VideoFormat:A422_10BE"),
    TypeInfo::new(57, SpaType::Int, "Spa:Enum:VideoFormat:A422_10LE"),
    TypeInfo::new(58, SpaType::Int, "Spa:Enum:VideoFormat:A444_10BE"),
    TypeInfo::new(59, SpaType::Int, "Spa:Enum:VideoFormat:A444_10LE"),
    TypeInfo::new(60, SpaType::Int, "Spa:Enum:VideoFormat:NV61"),
    TypeInfo::new(61, SpaType::Int, "Spa:Enum:VideoFormat:P010_10BE"),
    TypeInfo::new(62, SpaType::Int, "Spa:Enum:VideoFormat:P010_10LE"),
    TypeInfo::new(63, SpaType::Int, "Spa:Enum:VideoFormat:IYU2"),
    TypeInfo::new(64, SpaType::Int, "Spa:Enum:VideoFormat:VYUY"),
    TypeInfo::new(65, SpaType::Int, "Spa:Enum:VideoFormat:GBRA"),
    TypeInfo::new(66, SpaType::Int, "Spa:Enum:VideoFormat:GBRA_10BE"),
    TypeInfo::new(67, SpaType::Int, "Spa:Enum:VideoFormat:GBRA_10LE"),
    TypeInfo::new(68, SpaType::Int, "Spa:Enum:VideoFormat:GBR_12BE"),
    TypeInfo::new(69, SpaType::Int, "Spa:Enum:VideoFormat:GBR_12LE"),
    TypeInfo::new(70, SpaType::Int, "Spa:Enum:VideoFormat:GBRA_12BE"),
    TypeInfo::new(71, SpaType::Int, "Spa:Enum:VideoFormat:GBRA_12LE"),
    TypeInfo::new(72, SpaType::Int, "Spa:Enum:VideoFormat:I420_12BE"),
    TypeInfo::new(73, SpaType::Int, "Spa:Enum:VideoFormat:I420_12LE"),
    TypeInfo::new(74, SpaType::Int, "Spa:Enum:VideoFormat:I422_12BE"),
    TypeInfo::new(75, SpaType::Int, "Spa:Enum:VideoFormat:I422_12LE"),
    TypeInfo::new(76, SpaType::Int, "Spa:Enum:VideoFormat:Y444_12BE"),
    TypeInfo::new(77, SpaType::Int, "Spa:Enum:VideoFormat:Y444_12LE"),
    TypeInfo::new(78, SpaType::Int, "Spa:Enum:VideoFormat:RGBA_F16"),
    TypeInfo::new(79, SpaType::Int, "Spa:Enum:VideoFormat:RGBA_F32"),
    TypeInfo::new(80, SpaType::Int, "Spa:Enum:VideoFormat:xRGB_210LE"),
    TypeInfo::new(81, SpaType::Int, "Spa:Enum:VideoFormat:xBGR_210LE"),
    TypeInfo::new(82, SpaType::Int, "Spa:Enum:VideoFormat:RGBx_102LE"),
    TypeInfo::new(83, SpaType::Int, "Spa:Enum:VideoFormat:BGRx_102LE"),
    TypeInfo::new(84, SpaType::Int, "Spa:Enum:VideoFormat:ARGB_210LE"),
    TypeInfo::new(85, SpaType::Int, "Spa:Enum:VideoFormat:ABGR_210LE"),
    TypeInfo::new(86, SpaType::Int, "Spa:Enum:VideoFormat:RGBA_102LE"),
    TypeInfo::new(87, SpaType::Int, "Spa:Enum:VideoFormat:BGRA_102LE"),
];

/// `Spa:Enum:VideoInterlaceMode`
pub static VIDEO_INTERLACE_MODE: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:VideoInterlaceMode:progressive"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:VideoInterlaceMode:interleaved"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:VideoInterlaceMode:mixed"),
    TypeInfo::new(3, SpaType::Int, "Spa:Enum:VideoInterlaceMode:fields"),
];

/// `Spa:Pointer:Meta`
pub static META_TYPE: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::None, "Spa:Pointer:Meta:Invalid"),
    TypeInfo::new(1, SpaType::Pointer, "Spa:Pointer:Meta:Header"),
    TypeInfo::new(2, SpaType::Pointer, "Spa:Pointer:Meta:Region:VideoCrop"),
    TypeInfo::new(3, SpaType::Pointer, "Spa:Pointer:Meta:Array:Region:VideoDamage"),
    TypeInfo::new(4, SpaType::Pointer, "Spa:Pointer:Meta:Bitmap"),
    TypeInfo::new(5, SpaType::Pointer, "Spa:Pointer:Meta:Cursor"),
    TypeInfo::new(6, SpaType::Pointer, "Spa:Pointer:Meta:Control"),
    TypeInfo::new(7, SpaType::Pointer, "Spa:Pointer:Meta:Busy"),
    TypeInfo::new(8, SpaType::Pointer, "Spa:Pointer:Meta:Transform"),
];

/// `Spa:Enum:IO`
pub static IO_TYPE: &[TypeInfo] = &[
    TypeInfo::new(0, SpaType::Int, "Spa:Enum:IO:Invalid"),
    TypeInfo::new(1, SpaType::Int, "Spa:Enum:IO:Buffers"),
    TypeInfo::new(2, SpaType::Int, "Spa:Enum:IO:Range"),
    TypeInfo::new(3, SpaType::Int, "Spa:Enum:IO:Clock"),
    TypeInfo::new(4, SpaType::Int, "Spa:Enum:IO:Latency"),
    TypeInfo::new(5, SpaType::Int, "Spa:Enum:IO:Control"),
    TypeInfo::new(6, SpaType::Int, "Spa:Enum:IO:Notify"),
    TypeInfo::new(7, SpaType::Int, "Spa:Enum:IO:Position"),
    TypeInfo::new(8, SpaType::Int, "Spa:Enum:IO:RateMatch"),
    TypeInfo::new(9, SpaType::Int, "Spa:Enum:IO:Memory"),
];

/// Element type of float-valued property arrays.
pub static FLOAT_ARRAY: &[TypeInfo] = &[TypeInfo::new(0, SpaType::Float, "Spa:floatArray")];

/// Element type of channel-map property arrays.
pub static CHANNEL_MAP: &[TypeInfo] =
    &[TypeInfo::new(0, SpaType::Id, "Spa:channelMap").with_values(AUDIO_CHANNEL)];

/// Element type of IEC958 codec property arrays.
pub static IEC958_CODECS: &[TypeInfo] =
    &[TypeInfo::new(0, SpaType::Id, "Spa:iec958Codec").with_values(AUDIO_IEC958_CODEC)];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_prefixed(table: &[TypeInfo], prefix: &str) {
        for info in table {
            assert!(
                info.name.starts_with(prefix),
                "{} does not start with {}",
                info.name,
                prefix
            );
            assert!(!info.short_name().is_empty(), "{} has no short name", info.name);
        }
    }

    #[test]
    fn test_enum_tables_are_namespaced() {
        assert_prefixed(PARAM_ID, "Spa:Enum:ParamId:");
        assert_prefixed(MEDIA_TYPE, "Spa:Enum:MediaType:");
        assert_prefixed(MEDIA_SUBTYPE, "Spa:Enum:MediaSubtype:");
        assert_prefixed(AUDIO_FORMAT, "Spa:Enum:AudioFormat:");
        assert_prefixed(AUDIO_CHANNEL, "Spa:Enum:AudioChannel:");
        assert_prefixed(VIDEO_FORMAT, "Spa:Enum:VideoFormat:");
        assert_prefixed(META_TYPE, "Spa:Pointer:Meta:");
        assert_prefixed(IO_TYPE, "Spa:Enum:IO:");
    }

    #[test]
    fn test_enum_tables_are_ordered_by_tag() {
        for table in [PARAM_ID, MEDIA_SUBTYPE, AUDIO_FORMAT, VIDEO_FORMAT, BLUETOOTH_AUDIO_CODEC] {
            assert!(table.windows(2).all(|pair| pair[0].ty < pair[1].ty));
        }
    }

    #[test]
    fn test_channel_map_nests_channels() {
        let values = CHANNEL_MAP[0].values.expect("channel map values");
        assert_eq!(values.len(), AUDIO_CHANNEL.len());
        assert_eq!(values[3].short_name(), "FL");
    }
}

use podgen_codegen::{
    Generator, GeneratorConfig, OBJECT_CATEGORIES, OutputMode, generate_accessors, generate_json,
};
use podgen_typeinfo::{RootCategory, SpaType, TypeInfo};

fn count_with_values(infos: &[TypeInfo]) -> usize {
    infos
        .iter()
        .map(|info| match info.values {
            Some(values) => 1 + count_with_values(values),
            None => 0,
        })
        .sum()
}

fn count_values_keys(value: &serde_json::Value) -> usize {
    match value {
        serde_json::Value::Object(map) => {
            usize::from(map.contains_key("values"))
                + map.values().map(count_values_keys).sum::<usize>()
        }
        serde_json::Value::Array(items) => items.iter().map(count_values_keys).sum(),
        _ => 0,
    }
}

#[test]
fn test_json_is_valid_with_all_categories() {
    let text = generate_json();
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    let categories = value.as_array().expect("top-level array");

    assert_eq!(categories.len(), 13);
    for (rendered, category) in categories.iter().zip(OBJECT_CATEGORIES.iter()) {
        assert_eq!(rendered["name"], category.name);
        let properties = rendered["properties"].as_array().expect("properties");
        assert_eq!(properties.len(), category.infos.len());
    }
}

#[test]
fn test_json_values_only_when_nested() {
    let value: serde_json::Value = serde_json::from_str(&generate_json()).expect("valid JSON");
    let expected: usize = OBJECT_CATEGORIES
        .iter()
        .map(|category| count_with_values(category.infos))
        .sum();
    assert_eq!(count_values_keys(&value), expected);
}

#[test]
fn test_json_keeps_markers() {
    let value: serde_json::Value = serde_json::from_str(&generate_json()).expect("valid JSON");
    let props = &value[1]["properties"];
    assert_eq!(props[0]["name"], "Spa:Pod:Object:Param:Props:");
    assert_eq!(props[1]["name"], "Spa:Pod:Object:Param:Props:unknown");
    assert_eq!(props[1]["parent"], SpaType::None.as_raw());
}

#[test]
fn test_accessors_parse_as_rust() {
    let text = generate_accessors();
    let file = syn::parse_file(&text).expect("generated code parses");

    let structs = file
        .items
        .iter()
        .filter(|item| matches!(item, syn::Item::Struct(_)))
        .count();
    assert_eq!(structs, 13);
}

#[test]
fn test_accessor_count_matches_output() {
    let text = generate_accessors();
    let file = syn::parse_file(&text).expect("generated code parses");
    let generator = Generator::default();

    let impls: Vec<_> = file
        .items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Impl(item) => Some(item),
            _ => None,
        })
        .collect();
    assert_eq!(impls.len(), OBJECT_CATEGORIES.len());

    for (item, category) in impls.iter().zip(OBJECT_CATEGORIES.iter()) {
        // every impl also carries the `get` stub
        assert_eq!(item.items.len(), generator.accessor_count(category) + 1);
    }
}

#[test]
fn test_accessor_order_follows_table() {
    let text = generate_accessors();
    let volume = text.find("fn volume(").expect("volume accessor");
    let mute = text.find("fn mute(").expect("mute accessor");
    let sharpness = text.find("fn sharpness(").expect("sharpness accessor");
    assert!(volume < mute && mute < sharpness);
}

#[test]
fn test_end_to_end_device_name() {
    static PROPS: &[TypeInfo] = &[TypeInfo::new(
        7,
        SpaType::String,
        "Spa:Pod:Object:Param:Props:deviceName",
    )];
    let categories = [RootCategory::new("Spa:Pod:Object:Param:Props", PROPS)];
    let text = Generator::new(&categories)
        .with_config(GeneratorConfig::default().with_header(false))
        .generate(OutputMode::Accessors);

    assert!(text.contains("fn device_name(&self) -> Option<&BStr> {"));
    assert!(text.contains("        self.get(7)?.as_str().ok()\n"));
}

#[test]
fn test_generated_names() {
    let text = generate_accessors();
    assert!(text.contains("pub struct Io;"));
    assert!(text.contains("pub struct PropInfo;"));
    assert!(text.contains("fn ty(&self) -> Option<OwnedPod>"));
    assert!(text.contains("fn ty(&self) -> Option<u32>"));
    assert!(text.contains("fn audio_aac_stream_format(&self) -> Option<u32>"));
    assert!(text.contains("fn video_h264_alignment(&self) -> Option<u32>"));
    assert!(text.contains("fn latency_offset_nsec(&self) -> Option<i64>"));
    assert!(text.contains("fn video_size(&self) -> Option<SpaRectangle>"));
}

#[test]
fn test_unknown_parent_tag_is_owned() {
    static ODD: &[TypeInfo] = &[TypeInfo::raw(3, 0x7777, "Spa:Odd:thing")];
    let categories = [RootCategory::new("Spa:Odd", ODD)];
    let text = Generator::new(&categories).generate(OutputMode::Accessors);
    assert!(text.contains("    /// returns: unknown type 30583\n"));
    assert!(text.contains("fn thing(&self) -> Option<OwnedPod>"));
}

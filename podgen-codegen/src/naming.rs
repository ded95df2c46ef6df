//! Conversion of namespaced type names into Rust identifiers.

use podgen_typeinfo::{NAME_SEPARATOR, RootCategory};

/// Identifier substituted for a bare `type` name.
pub const TYPE_IDENT: &str = "ty";

/// Derives the accessor identifier of `full_name` relative to its owner.
///
/// Returns `None` when the entry must not be emitted: the name does not
/// start with `owner_prefix`, or nothing is left after stripping it.
#[must_use]
pub fn derive_identifier(full_name: &str, owner_prefix: &str) -> Option<String> {
    let Some(rest) = full_name.strip_prefix(owner_prefix) else {
        tracing::debug!("'{}' is not owned by '{}'", full_name, owner_prefix);
        return None;
    };
    let rest = rest.strip_prefix(NAME_SEPARATOR).unwrap_or(rest);
    if rest.is_empty() {
        return None;
    }

    if rest == "type" {
        return Some(TYPE_IDENT.to_string());
    }
    Some(to_snake_case(rest))
}

/// Converts a camelCase or namespaced name to snake_case.
///
/// `:` acts as a word boundary and existing `_` are copied through. A run
/// of upper-case letters counts as one word, so `Audio:AAC:streamFormat`
/// becomes `audio_aac_stream_format`.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_upper = false;

    for c in s.chars() {
        if c == NAME_SEPARATOR {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            prev_upper = false;
        } else if c == '_' {
            result.push('_');
            prev_upper = false;
        } else if c.is_ascii_uppercase() {
            if !prev_upper && !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
            prev_upper = true;
        } else {
            result.push(c);
            prev_upper = false;
        }
    }

    result
}

/// Converts a snake_case string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Snake-case identifier of a category, e.g. `prop_info`.
#[must_use]
pub fn category_identifier(category: &RootCategory) -> String {
    to_snake_case(category.short_name())
}

/// Name of the generated type for a category, e.g. `PropInfo` or `Io`.
#[must_use]
pub fn category_type_name(category: &RootCategory) -> String {
    to_pascal_case(&category_identifier(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROPS: &str = "Spa:Pod:Object:Param:Props";
    const FORMAT: &str = "Spa:Pod:Object:Param:Format";

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("volume"), "volume");
        assert_eq!(to_snake_case("latencyOffsetNsec"), "latency_offset_nsec");
        assert_eq!(to_snake_case("PropInfo"), "prop_info");
        assert_eq!(to_snake_case("iec958Codecs"), "iec958_codecs");
        assert_eq!(to_snake_case("IO"), "io");
    }

    #[test]
    fn test_to_snake_case_namespaced() {
        assert_eq!(
            to_snake_case("Audio:AAC:streamFormat"),
            "audio_aac_stream_format"
        );
        assert_eq!(to_snake_case("Video:H264:alignment"), "video_h264_alignment");
        assert_eq!(to_snake_case("BlockInfo:size"), "block_info_size");
    }

    #[test]
    fn test_to_snake_case_idempotent() {
        for name in [
            "volume",
            "device_name",
            "audio_aac_stream_format",
            "h264",
            "foo__bar",
            "_foo",
            "foo_",
        ] {
            assert_eq!(to_snake_case(name), name);
            assert_eq!(to_snake_case(&to_snake_case(name)), to_snake_case(name));
        }
    }

    #[test]
    fn test_to_snake_case_after_underscore() {
        assert_eq!(to_snake_case("foo_Bar"), "foo_bar");
        assert_eq!(to_snake_case("_Foo"), "_foo");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("prop_info"), "PropInfo");
        assert_eq!(to_pascal_case("io"), "Io");
        assert_eq!(to_pascal_case("process_latency"), "ProcessLatency");
    }

    #[test]
    fn test_derive_identifier() {
        assert_eq!(
            derive_identifier("Spa:Pod:Object:Param:Props:deviceName", PROPS),
            Some("device_name".to_string())
        );
        assert_eq!(
            derive_identifier("Spa:Pod:Object:Param:Format:Audio:AAC:streamFormat", FORMAT),
            Some("audio_aac_stream_format".to_string())
        );
    }

    #[test]
    fn test_derive_identifier_type_keyword() {
        assert_eq!(
            derive_identifier("Spa:Pod:Object:Param:Meta:type", "Spa:Pod:Object:Param:Meta"),
            Some("ty".to_string())
        );
    }

    #[test]
    fn test_derive_identifier_skips() {
        assert_eq!(derive_identifier("Spa:Pod:Object:Param:Props:", PROPS), None);
        assert_eq!(derive_identifier(PROPS, PROPS), None);
        assert_eq!(derive_identifier("Spa:Pod:Object:Param:Tag:info", PROPS), None);
    }

    #[test]
    fn test_category_names() {
        let category = RootCategory::new("Spa:Pod:Object:Param:IO", &[]);
        assert_eq!(category_identifier(&category), "io");
        assert_eq!(category_type_name(&category), "Io");

        let category = RootCategory::new("Spa:Pod:Object:Param:PropInfo", &[]);
        assert_eq!(category_identifier(&category), "prop_info");
        assert_eq!(category_type_name(&category), "PropInfo");
    }
}

//! Accessor source generation.
//!
//! Each category becomes a unit struct with one getter per qualifying
//! descriptor. The getters read through a shared `get` stub that the
//! including module is expected to replace.

use podgen_typeinfo::{RootCategory, TypeInfo};

use crate::classify::classify;
use crate::generator::GeneratorConfig;
use crate::naming::{category_type_name, derive_identifier};

/// Banner printed at the top of accessor documents.
pub const HEADER: &str = "\
// =============
// This file is autogenerated by podgen
// DO NOT EDIT
// =============
";

/// Preamble pulling the pod reader types into scope.
pub const PRELUDE: &str = "use super::*;\n";

/// Generator for accessor structs.
pub struct AccessorEmitter<'a> {
    categories: &'a [RootCategory],
    config: GeneratorConfig,
}

impl<'a> AccessorEmitter<'a> {
    /// Creates a new accessor emitter.
    #[must_use]
    pub fn new(categories: &'a [RootCategory], config: GeneratorConfig) -> Self {
        Self { categories, config }
    }

    /// Renders the complete document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();

        if self.config.header {
            output.push_str(HEADER);
            output.push('\n');
        }
        if self.config.prelude {
            output.push_str(PRELUDE);
            output.push('\n');
        }

        for category in self.categories {
            tracing::debug!("Rendering accessors for {}", category.name);
            output.push_str(&self.generate_category(category));
            output.push('\n');
        }

        output
    }

    /// Generates the struct and impl block for one category.
    fn generate_category(&self, category: &RootCategory) -> String {
        let mut output = String::new();
        let type_name = category_type_name(category);

        output.push_str(&format!("/// {}\n", category.name));
        output.push_str(&format!("pub struct {};\n\n", type_name));
        output.push_str(&format!("impl {} {{\n", type_name));
        output.push_str(
            "    fn get(&self, id: u32) -> Option<PodDeserializer> { todo!(\"{id}\") }\n",
        );

        for info in category.infos {
            match accessor_ident(category, info) {
                Some(ident) => {
                    output.push('\n');
                    output.push_str(&generate_accessor(info, &ident));
                }
                None => tracing::trace!("Skipping {}", info.name),
            }
        }

        output.push_str("}\n");
        output
    }
}

/// Identifier of the accessor generated for `info`, if it gets one.
///
/// Markers get none: entries with an empty short name (at any nesting
/// depth, e.g. `...:Format:Audio:`) or a `None` parent.
#[must_use]
pub fn accessor_ident(category: &RootCategory, info: &TypeInfo) -> Option<String> {
    if info.is_marker() {
        return None;
    }
    derive_identifier(info.name, category.name)
}

/// Number of accessors generated for `category`.
#[must_use]
pub fn accessor_count(category: &RootCategory) -> usize {
    category
        .infos
        .iter()
        .filter(|info| accessor_ident(category, info).is_some())
        .count()
}

fn generate_accessor(info: &TypeInfo, ident: &str) -> String {
    let mut output = String::new();
    let accessor = classify(info.parent);

    if let Some(hint) = accessor.hint() {
        output.push_str(&format!("    /// returns: {}\n", hint));
    }
    output.push_str(&format!("    /// {}\n", info.name));
    output.push_str(&format!(
        "    fn {}(&self) -> Option<{}> {{\n",
        ident, accessor.return_type
    ));
    output.push_str(&format!("        {}\n", accessor.body(info.ty)));
    output.push_str("    }\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use podgen_typeinfo::SpaType;

    const PROPS: &str = "Spa:Pod:Object:Param:Props";

    static INFOS: &[TypeInfo] = &[
        TypeInfo::new(0, SpaType::Id, "Spa:Pod:Object:Param:Props:"),
        TypeInfo::new(1, SpaType::None, "Spa:Pod:Object:Param:Props:unknown"),
        TypeInfo::new(7, SpaType::String, "Spa:Pod:Object:Param:Props:deviceName"),
        TypeInfo::new(0x80001, SpaType::Struct, "Spa:Pod:Object:Param:Props:params"),
    ];

    fn render(config: GeneratorConfig) -> String {
        let categories = [RootCategory::new(PROPS, INFOS)];
        AccessorEmitter::new(&categories, config).render()
    }

    #[test]
    fn test_device_name_accessor() {
        let output = render(GeneratorConfig::default());
        assert!(output.contains(
            "    /// Spa:Pod:Object:Param:Props:deviceName\n    fn device_name(&self) -> Option<&BStr> {\n        self.get(7)?.as_str().ok()\n    }\n"
        ));
    }

    #[test]
    fn test_structured_accessor_has_hint() {
        let output = render(GeneratorConfig::default());
        assert!(output.contains(
            "    /// returns: Spa:Pod:Struct\n    /// Spa:Pod:Object:Param:Props:params\n    fn params(&self) -> Option<OwnedPod> {\n        Some(self.get(524289)?.to_owned())\n    }\n"
        ));
    }

    #[test]
    fn test_markers_are_skipped() {
        let output = render(GeneratorConfig::default());
        assert!(!output.contains("fn unknown"));
        assert!(!output.contains("self.get(0)"));
        assert_eq!(output.matches("    fn ").count(), 3);
        assert_eq!(accessor_count(&RootCategory::new(PROPS, INFOS)), 2);
    }

    #[test]
    fn test_nested_marker_is_skipped() {
        static FORMAT: &[TypeInfo] = &[
            TypeInfo::new(5, SpaType::Id, "Spa:Pod:Object:Param:Format:Audio:"),
            TypeInfo::new(0x10003, SpaType::Int, "Spa:Pod:Object:Param:Format:Audio:rate"),
        ];
        let category = RootCategory::new("Spa:Pod:Object:Param:Format", FORMAT);
        assert_eq!(accessor_ident(&category, &FORMAT[0]), None);
        assert_eq!(accessor_count(&category), 1);

        let categories = [category];
        let output = AccessorEmitter::new(&categories, GeneratorConfig::default()).render();
        assert!(!output.contains("fn audio_("));
        assert!(!output.contains("self.get(5)"));
        assert!(output.contains("fn audio_rate(&self) -> Option<i32>"));
    }

    #[test]
    fn test_struct_layout() {
        let output = render(GeneratorConfig::default());
        assert!(output.contains("/// Spa:Pod:Object:Param:Props\npub struct Props;\n\nimpl Props {\n"));
        assert!(output.contains("fn get(&self, id: u32) -> Option<PodDeserializer> { todo!(\"{id}\") }"));
    }

    #[test]
    fn test_header_and_prelude() {
        let output = render(GeneratorConfig::default());
        assert!(output.starts_with(HEADER));
        assert!(output.contains(PRELUDE));

        let output = render(GeneratorConfig::default().with_header(false).with_prelude(false));
        assert!(output.starts_with("/// Spa:Pod:Object:Param:Props\n"));
        assert!(!output.contains("use super::*;"));
    }
}

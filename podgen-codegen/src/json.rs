//! JSON dump of the type hierarchy.

use podgen_typeinfo::{RootCategory, TypeInfo};

/// Renders categories as a JSON array of `{ name, properties }` objects.
pub struct JsonEmitter<'a> {
    categories: &'a [RootCategory],
}

impl<'a> JsonEmitter<'a> {
    /// Creates a new JSON emitter.
    #[must_use]
    pub fn new(categories: &'a [RootCategory]) -> Self {
        Self { categories }
    }

    /// Renders the complete document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut writer = JsonWriter::new();
        writer.push("[\n");
        writer.enter();
        for (i, category) in self.categories.iter().enumerate() {
            tracing::debug!("Rendering JSON for {}", category.name);
            writer.write_category(category);
            writer.push(if i + 1 < self.categories.len() { ",\n" } else { "\n" });
        }
        writer.leave();
        writer.push("]\n");
        writer.finish()
    }
}

/// Indentation-aware output buffer, two spaces per level.
///
/// One writer lives for exactly one render call.
#[derive(Debug, Default)]
pub struct JsonWriter {
    output: String,
    depth: usize,
}

impl JsonWriter {
    /// Creates an empty writer at depth zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.depth
    }

    fn enter(&mut self) {
        self.depth += 1;
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn push(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.output.push_str("  ");
        }
    }

    fn write_category(&mut self, category: &RootCategory) {
        self.indent();
        self.push("{\n");
        self.enter();

        self.indent();
        self.push(&format!("\"name\": {},\n", quote(category.name)));
        self.indent();
        self.push("\"properties\": ");
        self.write_infos(category.infos);
        self.push("\n");

        self.leave();
        self.indent();
        self.push("}");
    }

    /// Writes a descriptor array. The opening bracket continues the
    /// current line; the closing one is indented at the current depth.
    pub fn write_infos(&mut self, infos: &[TypeInfo]) {
        if infos.is_empty() {
            self.push("[]");
            return;
        }

        self.push("[\n");
        self.enter();
        for (i, info) in infos.iter().enumerate() {
            self.indent();
            self.write_info(info);
            if i + 1 < infos.len() {
                self.push(",\n");
            } else {
                self.push("\n");
            }
        }
        self.leave();
        self.indent();
        self.push("]");
    }

    fn write_info(&mut self, info: &TypeInfo) {
        self.push(&format!(
            "{{ \"type\": {}, \"parent\": {}, \"name\": {}",
            info.ty,
            info.parent,
            quote(info.name)
        ));

        match info.values {
            Some(values) => {
                self.push(",\n");
                self.enter();
                self.indent();
                self.push("\"values\": ");
                self.write_infos(values);
                self.push("\n");
                self.leave();
                self.indent();
                self.push("}");
            }
            None => self.push(" }"),
        }
    }

    /// Consumes the writer and returns the text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}

/// JSON string literal for `s`.
fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use podgen_typeinfo::SpaType;

    static DIRECTIONS: &[TypeInfo] = &[
        TypeInfo::new(0, SpaType::Int, "Spa:Enum:Direction:Input"),
        TypeInfo::new(1, SpaType::Int, "Spa:Enum:Direction:Output"),
    ];

    static TAG: &[TypeInfo] = &[
        TypeInfo::new(1, SpaType::Id, "Spa:Pod:Object:Param:Tag:direction")
            .with_values(DIRECTIONS),
        TypeInfo::new(2, SpaType::Struct, "Spa:Pod:Object:Param:Tag:info"),
    ];

    #[test]
    fn test_write_info_without_values() {
        let mut writer = JsonWriter::new();
        writer.write_info(&TAG[1]);
        assert_eq!(
            writer.finish(),
            "{ \"type\": 2, \"parent\": 14, \"name\": \"Spa:Pod:Object:Param:Tag:info\" }"
        );
    }

    #[test]
    fn test_write_info_with_values() {
        let mut writer = JsonWriter::new();
        writer.write_info(&TAG[0]);
        assert_eq!(writer.depth(), 0);
        let expected = "{ \"type\": 1, \"parent\": 3, \"name\": \"Spa:Pod:Object:Param:Tag:direction\",\n  \"values\": [\n    { \"type\": 0, \"parent\": 4, \"name\": \"Spa:Enum:Direction:Input\" },\n    { \"type\": 1, \"parent\": 4, \"name\": \"Spa:Enum:Direction:Output\" }\n  ]\n}";
        assert_eq!(writer.finish(), expected);
    }

    #[test]
    fn test_empty_values_render_as_empty_array() {
        static EMPTY: &[TypeInfo] = &[];
        let info = TypeInfo::new(9, SpaType::Id, "Spa:Test:empty").with_values(EMPTY);
        let mut writer = JsonWriter::new();
        writer.write_info(&info);
        assert!(writer.finish().contains("\"values\": []"));
    }

    #[test]
    fn test_render_parses() {
        let categories = [
            RootCategory::new("Spa:Pod:Object:Param:Tag", TAG),
            RootCategory::new("Spa:Pod:Object:Param:Empty", &[]),
        ];
        let text = JsonEmitter::new(&categories).render();
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");

        let array = value.as_array().expect("top-level array");
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["name"], "Spa:Pod:Object:Param:Tag");
        assert_eq!(array[0]["properties"][0]["values"][1]["type"], 1);
        assert!(array[0]["properties"][1].get("values").is_none());
        assert_eq!(array[1]["properties"], serde_json::json!([]));
    }

    #[test]
    fn test_render_escapes_names() {
        static ODD: &[TypeInfo] = &[TypeInfo::new(1, SpaType::Int, "Spa:Odd:\"quoted\"")];
        let categories = [RootCategory::new("Spa:Odd", ODD)];
        let text = JsonEmitter::new(&categories).render();
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(value[0]["properties"][0]["name"], "Spa:Odd:\"quoted\"");
    }

    #[test]
    fn test_render_depth_returns_to_zero() {
        let categories = [RootCategory::new("Spa:Pod:Object:Param:Tag", TAG)];
        let text = JsonEmitter::new(&categories).render();
        assert!(text.starts_with("[\n  {\n    \"name\": "));
        assert!(text.ends_with("  }\n]\n"));
    }
}

//! Document generation over the object categories.

use std::io;

use podgen_typeinfo::RootCategory;
use podgen_typeinfo::tables::objects;

use crate::accessors::{self, AccessorEmitter};
use crate::error::CodegenError;
use crate::json::JsonEmitter;

/// Object categories in generation order.
pub static OBJECT_CATEGORIES: [RootCategory; 13] = [
    RootCategory::new(objects::PROP_INFO_NAME, objects::PROP_INFO),
    RootCategory::new(objects::PROPS_NAME, objects::PROPS),
    RootCategory::new(objects::FORMAT_NAME, objects::FORMAT),
    RootCategory::new(objects::PARAM_BUFFERS_NAME, objects::PARAM_BUFFERS),
    RootCategory::new(objects::PARAM_META_NAME, objects::PARAM_META),
    RootCategory::new(objects::PARAM_IO_NAME, objects::PARAM_IO),
    RootCategory::new(objects::PARAM_PROFILE_NAME, objects::PARAM_PROFILE),
    RootCategory::new(objects::PARAM_PORT_CONFIG_NAME, objects::PARAM_PORT_CONFIG),
    RootCategory::new(objects::PARAM_ROUTE_NAME, objects::PARAM_ROUTE),
    RootCategory::new(objects::PROFILER_NAME, objects::PROFILER),
    RootCategory::new(objects::PARAM_LATENCY_NAME, objects::PARAM_LATENCY),
    RootCategory::new(objects::PARAM_PROCESS_LATENCY_NAME, objects::PARAM_PROCESS_LATENCY),
    RootCategory::new(objects::PARAM_TAG_NAME, objects::PARAM_TAG),
];

/// Output document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// JSON dump of the hierarchy.
    Json,
    /// Rust accessor source.
    Accessors,
}

/// Options for accessor documents. JSON output ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Emit the autogenerated-file banner.
    pub header: bool,
    /// Emit the `use super::*;` preamble.
    pub prelude: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            header: true,
            prelude: true,
        }
    }
}

impl GeneratorConfig {
    /// Sets whether the banner is emitted.
    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Sets whether the preamble is emitted.
    #[must_use]
    pub fn with_prelude(mut self, prelude: bool) -> Self {
        self.prelude = prelude;
        self
    }
}

/// Main code generator.
pub struct Generator<'a> {
    categories: &'a [RootCategory],
    config: GeneratorConfig,
}

impl Default for Generator<'static> {
    fn default() -> Self {
        Self::new(&OBJECT_CATEGORIES)
    }
}

impl<'a> Generator<'a> {
    /// Creates a new generator over the given categories.
    #[must_use]
    pub fn new(categories: &'a [RootCategory]) -> Self {
        Self {
            categories,
            config: GeneratorConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the categories this generator renders.
    #[must_use]
    pub fn categories(&self) -> &'a [RootCategory] {
        self.categories
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Generates one complete document.
    #[must_use]
    pub fn generate(&self, mode: OutputMode) -> String {
        let output = match mode {
            OutputMode::Json => JsonEmitter::new(self.categories).render(),
            OutputMode::Accessors => AccessorEmitter::new(self.categories, self.config).render(),
        };
        tracing::info!(
            "Generated {:?} document: {} categories, {} bytes",
            mode,
            self.categories.len(),
            output.len()
        );
        output
    }

    /// Generates one document and writes it to `writer`.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if writing fails.
    pub fn write_to<W: io::Write>(
        &self,
        mode: OutputMode,
        writer: &mut W,
    ) -> Result<(), CodegenError> {
        writer.write_all(self.generate(mode).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Number of accessor methods emitted for `category`, excluding `get`.
    #[must_use]
    pub fn accessor_count(&self, category: &RootCategory) -> usize {
        accessors::accessor_count(category)
    }
}

/// Selects categories by full or short name, preserving table order.
///
/// An empty filter selects everything.
///
/// # Errors
/// Returns `CodegenError::UnknownCategory` for a name that matches nothing.
pub fn select_categories(
    categories: &[RootCategory],
    names: &[String],
) -> Result<Vec<RootCategory>, CodegenError> {
    if let Some(unknown) = names
        .iter()
        .find(|name| !categories.iter().any(|c| c.matches(name)))
    {
        return Err(CodegenError::unknown_category(unknown.as_str()));
    }

    Ok(categories
        .iter()
        .filter(|c| names.is_empty() || names.iter().any(|name| c.matches(name)))
        .copied()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        let short: Vec<_> = OBJECT_CATEGORIES.iter().map(RootCategory::short_name).collect();
        assert_eq!(
            short,
            [
                "PropInfo",
                "Props",
                "Format",
                "Buffers",
                "Meta",
                "IO",
                "Profile",
                "PortConfig",
                "Route",
                "Profiler",
                "Latency",
                "ProcessLatency",
                "Tag",
            ]
        );
    }

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::default();
        assert!(config.header && config.prelude);

        let config = config.with_header(false);
        assert!(!config.header && config.prelude);

        let generator = Generator::default().with_config(config);
        assert_eq!(generator.config(), config);
        assert_eq!(generator.categories().len(), 13);
    }

    #[test]
    fn test_write_to() {
        let generator = Generator::default();
        let mut buffer = Vec::new();
        generator
            .write_to(OutputMode::Json, &mut buffer)
            .expect("write to vec");
        assert_eq!(buffer, generator.generate(OutputMode::Json).into_bytes());
    }

    #[test]
    fn test_accessor_count() {
        let generator = Generator::default();
        assert_eq!(generator.accessor_count(&OBJECT_CATEGORIES[4]), 2);
        // marker and `unknown` get no accessor
        assert_eq!(
            generator.accessor_count(&OBJECT_CATEGORIES[1]),
            OBJECT_CATEGORIES[1].infos.len() - 2
        );
    }

    #[test]
    fn test_select_categories() {
        let selected =
            select_categories(&OBJECT_CATEGORIES, &["Tag".to_string(), "props".to_string()])
                .expect("known names");
        let names: Vec<_> = selected.iter().map(RootCategory::short_name).collect();
        assert_eq!(names, ["Props", "Tag"]);

        let all = select_categories(&OBJECT_CATEGORIES, &[]).expect("empty filter");
        assert_eq!(all.len(), 13);
    }

    #[test]
    fn test_select_unknown_category() {
        let err = select_categories(&OBJECT_CATEGORIES, &["Nope".to_string()]).unwrap_err();
        assert!(matches!(err, CodegenError::UnknownCategory { ref name } if name == "Nope"));
    }
}

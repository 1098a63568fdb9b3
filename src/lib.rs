//! # vuedoc-md
//!
//! Renders the metadata of a Vue component (props, data, computed
//! properties, slots, events and methods) as a Markdown document.
//!
//! Extracting that metadata from `.vue` sources is left to an external
//! component parser; this crate consumes its JSON output through
//! [`ComponentParser`].
//!
//! ```
//! use vuedoc_md::{render_source, RenderConfig};
//!
//! let json = r#"{ "name": "checkbox", "description": "A simple checkbox component" }"#;
//! let markdown = render_source(json, &RenderConfig::default()).unwrap();
//!
//! assert_eq!(markdown, "# checkbox\n\nA simple checkbox component\n");
//! ```

pub mod logger;
pub mod parser;
pub mod renderer;


use anyhow::Result;
use std::path::PathBuf;

pub use parser::*;
pub use renderer::*;

/// Input file plus rendering options
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub filename: PathBuf,
    pub config: RenderConfig,
}

impl Options {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }
}

/// Parses `source` with the given parser and renders the result.
///
/// Parse failures are returned as-is; nothing is rendered for them.
pub fn render<P: ComponentParser + ?Sized>(
    parser: &P,
    source: &str,
    config: &RenderConfig,
) -> Result<String> {
    let doc = parser.parse(source)?;
    Ok(MarkdownRenderer::new(config.clone()).render(&doc))
}

/// Renders component metadata given as JSON text.
pub fn render_source(source: &str, config: &RenderConfig) -> Result<String> {
    render(&JsonComponentParser::new(), source, config)
}

/// Reads the metadata file named by `options` and renders it.
pub fn render_file(options: &Options) -> Result<String> {
    let doc = JsonComponentParser::new().parse_file(&options.filename)?;
    Ok(MarkdownRenderer::new(options.config.clone()).render(&doc))
}

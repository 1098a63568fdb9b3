use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::parser::types::*;

/// Source of component metadata.
///
/// Turning `.vue` sources into metadata is the job of an external parser;
/// implementations of this trait only hand its result to the renderer.
#[cfg_attr(test, mockall::automock)]
pub trait ComponentParser {
    fn parse(&self, source: &str) -> Result<ComponentDoc>;
}

// Parser for the JSON metadata emitted by the component parser
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonComponentParser;

impl JsonComponentParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_file(&self, path: &Path) -> Result<ComponentDoc> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        self.parse(&content)
            .with_context(|| format!("failed to parse component metadata from {}", path.display()))
    }
}

impl ComponentParser for JsonComponentParser {
    fn parse(&self, source: &str) -> Result<ComponentDoc> {
        let doc: ComponentDoc =
            serde_json::from_str(source).context("malformed component metadata")?;

        debug!(
            name = doc.name.as_deref().unwrap_or("<anonymous>"),
            props = doc.props.len(),
            data = doc.data.len(),
            computed = doc.computed.len(),
            slots = doc.slots.len(),
            events = doc.events.len(),
            methods = doc.methods.len(),
            "parsed component metadata"
        );

        Ok(doc)
    }
}

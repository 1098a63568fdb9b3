use crate::parser::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;
use tracing::debug;

/// Renders component metadata as a Markdown document.
pub struct MarkdownRenderer {
    config: RenderConfig,
}

impl MarkdownRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, doc: &ComponentDoc) -> String {
        let context = RenderContext::from_config(&self.config);
        let mut blocks: Vec<String> = Vec::new();

        // Header: title, keywords, then the description paragraph
        if context.enabled(Feature::Name) {
            if let Some(name) = doc.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
                blocks.push(context.heading(name));
            }
        }

        if context.enabled(Feature::Keywords) && !doc.keywords.is_empty() {
            let keywords: Vec<String> = doc.keywords.iter().map(|k| k.render(&context)).collect();
            blocks.push(keywords.join("\n"));
        }

        if context.enabled(Feature::Description) {
            if let Some(description) = DocRenderer.text(doc.description.as_ref()) {
                blocks.push(description.to_string());
            }
        }

        let section_context = context.nested();
        let sections = [
            self.render_section(&section_context, Feature::Props, "props", &doc.props),
            self.render_section(&section_context, Feature::Data, "data", &doc.data),
            self.render_section(
                &section_context,
                Feature::Computed,
                "computed properties",
                &doc.computed,
            ),
            self.render_section(&section_context, Feature::Slots, "slots", &doc.slots),
            self.render_section(&section_context, Feature::Events, "events", &doc.events),
            self.render_section(&section_context, Feature::Methods, "methods", &doc.methods),
        ];
        blocks.extend(sections.into_iter().flatten());

        debug!(
            level = context.level,
            blocks = blocks.len(),
            "rendered component {}",
            doc.name.as_deref().unwrap_or("<anonymous>")
        );

        if blocks.is_empty() {
            return String::new();
        }

        let mut output = blocks.join("\n\n");
        output.push('\n');
        output
    }

    fn render_section<T: Render>(
        &self,
        context: &RenderContext,
        feature: Feature,
        title: &str,
        entries: &[T],
    ) -> Option<String> {
        if !context.enabled(feature) {
            return None;
        }
        if entries.is_empty() && !self.config.show_empty_sections {
            return None;
        }

        let mut output = context.heading(title);

        // Entries are separated by a blank line, in declaration order
        for entry in entries {
            output.push_str("\n\n");
            output.push_str(&entry.render(context));
        }

        Some(output)
    }
}

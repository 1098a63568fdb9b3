use crate::parser::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;

impl Render for Keyword {
    fn render(&self, _context: &RenderContext) -> String {
        let doc_renderer = DocRenderer;

        let mut output = format!("- **{}**", self.name);
        if doc_renderer.text(Some(&self.description)).is_some() {
            output.push_str(" -");
            output.push_str(&doc_renderer.render_inline(Some(&self.description)));
        }
        output
    }
}

impl Render for PropEntry {
    fn render(&self, _context: &RenderContext) -> String {
        let doc_renderer = DocRenderer;
        let literal_renderer = LiteralRenderer;

        let mut parts = vec![
            code(&self.name),
            format!("***{}***", self.prop_type),
            if self.required {
                "(*required*)".to_string()
            } else {
                "(*optional*)".to_string()
            },
        ];

        if self.describe_model {
            parts.push(code("twoWay = true"));
        }

        if let Some(default) = &self.default {
            let literal = literal_renderer.render_literal(default);
            parts.push(code(&format!("default: {}", literal)));
        }

        let mut output = format!("- {}", parts.join(" "));
        output.push_str(&doc_renderer.render_block(self.description.as_ref()));
        output
    }
}

impl Render for DataEntry {
    fn render(&self, _context: &RenderContext) -> String {
        let doc_renderer = DocRenderer;
        let literal_renderer = LiteralRenderer;

        let mut output = format!("- {}", code(&self.name));
        output.push_str(&doc_renderer.render_inline(self.description.as_ref()));

        // Always shown, even when the parser could not resolve a value
        let literal = literal_renderer.render_or_empty(self.initial_value.as_ref());
        output.push_str(&doc_renderer.render_annotation("initial value", &code(&literal)));
        output
    }
}

impl Render for ComputedEntry {
    fn render(&self, _context: &RenderContext) -> String {
        let doc_renderer = DocRenderer;

        let mut output = format!("- {}", code(&self.name));
        output.push_str(&doc_renderer.render_inline(self.description.as_ref()));

        if !self.dependencies.is_empty() {
            let dependencies: Vec<String> =
                self.dependencies.iter().map(|dep| code(dep)).collect();
            output.push_str(&doc_renderer.render_annotation("dependencies", &dependencies.join(" ")));
        }

        output
    }
}

impl Render for SlotEntry {
    fn render(&self, _context: &RenderContext) -> String {
        let doc_renderer = DocRenderer;

        let name = if self.name.is_empty() { "default" } else { &self.name };
        let mut output = format!("- {}", code(name));
        output.push_str(&doc_renderer.render_inline(self.description.as_ref()));
        output
    }
}

impl Render for EventEntry {
    fn render(&self, _context: &RenderContext) -> String {
        let doc_renderer = DocRenderer;

        let mut output = format!("- {}", code(&self.name));
        output.push_str(&doc_renderer.render_inline(self.description.as_ref()));
        output
    }
}

impl Render for MethodEntry {
    fn render(&self, _context: &RenderContext) -> String {
        let doc_renderer = DocRenderer;

        let params: Vec<&str> = self.params.iter().map(|p| p.name()).collect();
        let signature = format!("{}({})", self.name, params.join(" "));

        let mut output = format!("- {}", code(&signature));
        output.push_str(&doc_renderer.render_block(self.description.as_ref()));
        output
    }
}

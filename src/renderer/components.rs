use serde_json::Value;

/// Indentation that keeps a line inside the enclosing bullet
pub const CONTINUATION: &str = "  ";

/// Trailing spaces forcing a line break inside a paragraph
pub const HARD_BREAK: &str = "  ";

/// Helper for rendering descriptions attached to list entries
pub struct DocRenderer;

impl DocRenderer {
    /// Returns the description if it carries any text.
    pub fn text<'a>(&self, docs: Option<&'a String>) -> Option<&'a str> {
        docs.map(|docs| docs.trim_end())
            .filter(|docs| !docs.trim().is_empty())
    }

    /// Appends a description to the end of a bullet line.
    ///
    /// The first line follows the bullet on the same line; the remaining
    /// lines are indented so they stay inside the list item.
    pub fn render_inline(&self, docs: Option<&String>) -> String {
        let Some(docs) = self.text(docs) else {
            return String::new();
        };

        let mut lines = docs.lines();
        let mut output = String::new();
        if let Some(first) = lines.next() {
            output.push(' ');
            output.push_str(first.trim_end());
        }
        for line in lines {
            output.push('\n');
            output.push_str(&self.indent_line(line));
        }
        output
    }

    /// Renders a description on the lines below a bullet.
    ///
    /// The bullet line is ended with a hard break so the description starts
    /// on its own line once rendered.
    pub fn render_block(&self, docs: Option<&String>) -> String {
        let Some(docs) = self.text(docs) else {
            return String::new();
        };

        let mut output = String::from(HARD_BREAK);
        for line in docs.lines() {
            output.push('\n');
            output.push_str(&self.indent_line(line));
        }
        output
    }

    /// Renders an annotation line such as `*initial value:* ...` below a bullet.
    pub fn render_annotation(&self, label: &str, value: &str) -> String {
        format!("\n{}*{}:* {}", CONTINUATION, label, value)
    }

    fn indent_line(&self, line: &str) -> String {
        let line = line.trim_end();
        if line.is_empty() {
            String::new()
        } else {
            format!("{}{}", CONTINUATION, line)
        }
    }
}

/// Helper for rendering literal values as they appear in source
pub struct LiteralRenderer;

impl LiteralRenderer {
    pub fn render_literal(&self, value: &Value) -> String {
        match value {
            Value::String(s) => format!("'{}'", s.replace('\'', "\\'")),
            Value::Null => "''".to_string(),
            other => other.to_string(),
        }
    }

    /// Renders an optional literal, falling back to the empty string literal.
    pub fn render_or_empty(&self, value: Option<&Value>) -> String {
        match value {
            Some(value) => self.render_literal(value),
            None => "''".to_string(),
        }
    }
}

/// Wraps a token in inline code markers.
pub fn code(token: &str) -> String {
    format!("`{}`", token)
}

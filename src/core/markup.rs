//! Minimal HTML writer used by the form renderer.
//!
//! Elements are written line by line; in [`MarkupStyle::Pretty`] each line is
//! indented by nesting depth and terminated with a newline, in
//! [`MarkupStyle::Compact`] lines are concatenated as-is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupStyle {
    #[default]
    Pretty,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub style: MarkupStyle,
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: MarkupStyle::Pretty,
            indent: 4,
        }
    }
}

impl RenderOptions {
    pub fn compact() -> Self {
        Self {
            style: MarkupStyle::Compact,
            ..Self::default()
        }
    }
}

/// Escape text content.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A start tag with its attributes, e.g. `<input type="number" required>`.
#[derive(Debug, Clone)]
pub struct Tag {
    name: &'static str,
    attrs: String,
}

impl Tag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: String::new(),
        }
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.push(' ');
        self.attrs.push_str(key);
        self.attrs.push_str("=\"");
        self.attrs.push_str(&escape_attr(value));
        self.attrs.push('"');
        self
    }

    pub fn attr_opt<T: std::fmt::Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.attr(key, &v.to_string()),
            None => self,
        }
    }

    /// Boolean attribute, written bare (`required`, `selected`).
    pub fn flag(mut self, key: &str, on: bool) -> Self {
        if on {
            self.attrs.push(' ');
            self.attrs.push_str(key);
        }
        self
    }

    fn start(&self) -> String {
        format!("<{}{}>", self.name, self.attrs)
    }

    fn end(&self) -> String {
        format!("</{}>", self.name)
    }
}

pub struct MarkupWriter {
    buf: String,
    options: RenderOptions,
    depth: usize,
}

impl MarkupWriter {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            buf: String::new(),
            options,
            depth: 0,
        }
    }

    fn line(&mut self, content: &str) {
        match self.options.style {
            MarkupStyle::Pretty => {
                let width = self.depth * self.options.indent;
                self.buf.extend(std::iter::repeat(' ').take(width));
                self.buf.push_str(content);
                self.buf.push('\n');
            }
            MarkupStyle::Compact => self.buf.push_str(content),
        }
    }

    /// Open a container element; nested lines are indented one level deeper.
    pub fn open(&mut self, tag: &Tag) {
        self.line(&tag.start());
        self.depth += 1;
    }

    pub fn close(&mut self, tag: &Tag) {
        self.depth = self.depth.saturating_sub(1);
        self.line(&tag.end());
    }

    /// Void element such as `<input>`.
    pub fn void(&mut self, tag: &Tag) {
        self.line(&tag.start());
    }

    /// Element with escaped text content on a single line.
    pub fn text(&mut self, tag: &Tag, content: &str) {
        let line = format!("{}{}{}", tag.start(), escape_text(content), tag.end());
        self.line(&line);
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_text("We're"), "We're");
        assert_eq!(escape_attr(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
    }

    #[test]
    fn test_tag_attributes() {
        let tag = Tag::new("input")
            .attr("type", "number")
            .attr_opt("step", Some(0.1))
            .attr_opt::<f64>("min", None)
            .flag("required", true)
            .flag("disabled", false);
        assert_eq!(tag.start(), r#"<input type="number" step="0.1" required>"#);
    }

    #[test]
    fn test_pretty_nesting() {
        let mut writer = MarkupWriter::new(RenderOptions::default());
        let div = Tag::new("div").attr("class", "form-group");
        writer.open(&div);
        writer.text(&Tag::new("label"), "Age:");
        writer.close(&div);
        assert_eq!(
            writer.finish(),
            "<div class=\"form-group\">\n    <label>Age:</label>\n</div>\n"
        );
    }

    #[test]
    fn test_compact_has_no_whitespace() {
        let mut writer = MarkupWriter::new(RenderOptions::compact());
        let div = Tag::new("div");
        writer.open(&div);
        writer.void(&Tag::new("input").attr("type", "date"));
        writer.close(&div);
        assert_eq!(writer.finish(), r#"<div><input type="date"></div>"#);
    }

    #[test]
    fn test_custom_indent() {
        let options = RenderOptions {
            style: MarkupStyle::Pretty,
            indent: 2,
        };
        let mut writer = MarkupWriter::new(options);
        let div = Tag::new("div");
        writer.open(&div);
        writer.text(&Tag::new("p"), "x");
        writer.close(&div);
        assert_eq!(writer.finish(), "<div>\n  <p>x</p>\n</div>\n");
    }
}

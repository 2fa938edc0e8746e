use crate::core::catalog::Catalog;
use crate::core::markup::{MarkupWriter, RenderOptions, Tag};
use crate::domain::model::{CalculatorForm, FieldKind, FieldSpec};
use crate::domain::ports::FormSource;

const FALLBACK_STYLE: &str = "text-align:center; padding:40px; background:linear-gradient(135deg, #f8f9fa 0%, #e9ecef 100%); border-radius:15px; border:2px dashed #667eea;";
const FALLBACK_TITLE: &str = "🚧 Calculator Coming Soon!";
const FALLBACK_BODY: &str = "This calculator is being developed and will be available soon.";
const FALLBACK_FOOTER: &str = "We're constantly adding new calculators to serve you better!";

/// Renders calculator forms from a [`FormSource`] as HTML fragments.
///
/// Rendering is pure: no I/O, no interior state, same input gives the same
/// bytes. Unknown ids render the "coming soon" fallback instead of failing.
pub struct FormRenderer<'a> {
    source: &'a dyn FormSource,
    options: RenderOptions,
}

impl<'a> FormRenderer<'a> {
    pub fn new(source: &'a dyn FormSource) -> Self {
        Self {
            source,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn render(&self, id: &str) -> String {
        match self.source.lookup(id) {
            Some(form) => {
                tracing::debug!(calculator = id, fields = form.fields.len(), "rendering form");
                self.render_form(form)
            }
            None => {
                tracing::debug!(calculator = id, "no form defined, rendering fallback");
                self.render_fallback()
            }
        }
    }

    pub fn render_form(&self, form: &CalculatorForm) -> String {
        let mut writer = MarkupWriter::new(self.options);
        for field in &form.fields {
            write_field(&mut writer, field);
        }
        for note in &form.notes {
            writer.text(&Tag::new("p").attr("class", "note"), note);
        }
        writer.finish()
    }

    pub fn render_fallback(&self) -> String {
        let mut writer = MarkupWriter::new(self.options);
        let group = Tag::new("div").attr("class", "form-group");
        let panel = Tag::new("div").attr("style", FALLBACK_STYLE);

        writer.open(&group);
        writer.open(&panel);
        writer.text(
            &Tag::new("h3").attr("style", "color:#667eea; margin-bottom:15px;"),
            FALLBACK_TITLE,
        );
        writer.text(
            &Tag::new("p").attr("style", "color:#666; margin-bottom:20px;"),
            FALLBACK_BODY,
        );
        writer.text(
            &Tag::new("p").attr("style", "color:#888; font-size:0.9em;"),
            FALLBACK_FOOTER,
        );
        writer.close(&panel);
        writer.close(&group);
        writer.finish()
    }
}

fn write_field(writer: &mut MarkupWriter, field: &FieldSpec) {
    let group = Tag::new("div").attr("class", "form-group");
    writer.open(&group);
    writer.text(&Tag::new("label"), &format!("{}:", field.label));

    match &field.kind {
        FieldKind::Select { options } => {
            let select = Tag::new("select")
                .attr("id", field.name)
                .attr("name", field.name)
                .flag("required", field.required);
            writer.open(&select);
            for option in options.iter() {
                let tag = Tag::new("option")
                    .attr("value", option.value)
                    .flag("selected", option.selected);
                writer.text(&tag, option.label);
            }
            writer.close(&select);
        }
        kind => {
            let mut input = Tag::new("input")
                .attr("type", kind.as_str())
                .attr("id", field.name)
                .attr("name", field.name);
            if let FieldKind::Number(attrs) = kind {
                input = input
                    .attr_opt("step", attrs.step)
                    .attr_opt("min", attrs.min)
                    .attr_opt("max", attrs.max)
                    .attr_opt("value", attrs.value);
            }
            let input = input
                .attr_opt("placeholder", field.placeholder)
                .flag("required", field.required);
            writer.void(&input);
        }
    }

    writer.close(&group);
}

/// Render the form for `identifier` from the built-in catalog.
///
/// Never fails: identifiers without a form (including empty strings and case
/// variants of real ids) produce the "coming soon" fallback fragment.
pub fn render_form(identifier: &str) -> String {
    FormRenderer::new(Catalog::builtin()).render(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SelectOption;

    const UNITS: &[SelectOption] = &[
        SelectOption::new("c", "Celsius"),
        SelectOption::selected("f", "Fahrenheit"),
    ];

    fn sample_catalog() -> Catalog {
        Catalog::from_forms(vec![
            CalculatorForm::new(
                "sample",
                vec![
                    FieldSpec::number("n", "Number").with_min(0.0).with_max(170.0),
                    FieldSpec::select("unit", "Unit", UNITS),
                ],
            )
            .with_note("Keep it < 170 & positive"),
            CalculatorForm::new(
                "text",
                vec![FieldSpec::text("numbers", "Numbers")
                    .with_placeholder("1, 2, 3")
                    .with_optional()],
            ),
        ])
    }

    #[test]
    fn test_render_known_form() {
        let catalog = sample_catalog();
        let html = FormRenderer::new(&catalog).render("sample");
        let expected = "\
<div class=\"form-group\">
    <label>Number:</label>
    <input type=\"number\" id=\"n\" name=\"n\" min=\"0\" max=\"170\" required>
</div>
<div class=\"form-group\">
    <label>Unit:</label>
    <select id=\"unit\" name=\"unit\" required>
        <option value=\"c\">Celsius</option>
        <option value=\"f\" selected>Fahrenheit</option>
    </select>
</div>
<p class=\"note\">Keep it &lt; 170 &amp; positive</p>
";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_render_optional_text_with_placeholder() {
        let catalog = sample_catalog();
        let html = FormRenderer::new(&catalog)
            .with_options(RenderOptions::compact())
            .render("text");
        assert_eq!(
            html,
            "<div class=\"form-group\"><label>Numbers:</label><input type=\"text\" id=\"numbers\" name=\"numbers\" placeholder=\"1, 2, 3\"></div>"
        );
    }

    #[test]
    fn test_unknown_id_renders_fallback() {
        let catalog = sample_catalog();
        let renderer = FormRenderer::new(&catalog);
        let html = renderer.render("Sample");
        assert_eq!(html, renderer.render_fallback());
        assert!(html.contains("Calculator Coming Soon!"));
        assert!(!html.contains("<input"));
        assert!(!html.contains("<select"));
    }

    #[test]
    fn test_builtin_render_form() {
        let html = render_form("age");
        assert_eq!(
            html,
            "<div class=\"form-group\">\n    <label>Date of Birth:</label>\n    <input type=\"date\" id=\"dob\" name=\"dob\" required>\n</div>\n"
        );
        assert_eq!(render_form("age"), html);
    }
}

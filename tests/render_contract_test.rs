use calc_forms::{render_form, Catalog, FormRenderer, MarkupStyle, RenderOptions};

fn fallback() -> String {
    FormRenderer::new(Catalog::builtin()).render_fallback()
}

fn control_count(html: &str) -> usize {
    html.matches("<input").count()
        + html.matches("<select").count()
        + html.matches("<textarea").count()
}

#[test]
fn test_bmi_form() {
    let expected = "\
<div class=\"form-group\">
    <label>Weight (kg):</label>
    <input type=\"number\" id=\"weight\" name=\"weight\" step=\"0.1\" required>
</div>
<div class=\"form-group\">
    <label>Height (cm):</label>
    <input type=\"number\" id=\"height\" name=\"height\" step=\"0.1\" required>
</div>
";
    assert_eq!(render_form("bmi"), expected);
}

#[test]
fn test_unit_temperature_form() {
    let html = render_form("unit_temperature");

    assert!(html.contains(r#"<input type="number" id="temp" name="temp" step="0.01" required>"#));
    assert!(html.contains(r#"<select id="from" name="from" required>"#));
    assert!(html.contains(r#"<select id="to" name="to" required>"#));
    for unit in ["celsius", "fahrenheit", "kelvin"] {
        assert_eq!(html.matches(&format!(r#"<option value="{}">"#, unit)).count(), 2);
    }
    assert!(!html.contains("selected"));

    let temp = html.find(r#"id="temp""#).unwrap();
    let from = html.find(r#"id="from""#).unwrap();
    let to = html.find(r#"id="to""#).unwrap();
    assert!(temp < from && from < to);
}

#[test]
fn test_pythagorean_fields_are_optional() {
    let html = render_form("pythagorean");

    for side in ["a", "b", "c"] {
        let input = format!(
            r#"<input type="number" id="{side}" name="{side}" step="0.01">"#,
            side = side
        );
        assert!(html.contains(&input), "missing {}", input);
    }
    assert!(!html.contains("required"));
}

#[test]
fn test_unknown_id_renders_fallback() {
    let html = render_form("does_not_exist");

    assert_eq!(html, fallback());
    assert!(html.contains("🚧 Calculator Coming Soon!"));
    assert!(html.contains("We're constantly adding new calculators"));
    assert_eq!(control_count(&html), 0);
}

#[test]
fn test_factorial_bounds() {
    let html = render_form("factorial");
    assert!(html.contains(
        r#"<input type="number" id="n" name="n" min="0" max="170" required>"#
    ));
    assert_eq!(control_count(&html), 1);
}

#[test]
fn test_duplicate_ids_render_first_definition() {
    let grade = render_form("grade");
    assert!(grade.contains(r#"id="score""#));
    assert!(grade.contains("<label>Score Earned:</label>"));
    assert!(!grade.contains(r#"id="earned""#));

    let ideal = render_form("ideal_weight");
    let height = ideal.find(r#"id="height""#).unwrap();
    let gender = ideal.find(r#"id="gender""#).unwrap();
    assert!(height < gender);

    let quadratic = render_form("quadratic");
    assert!(quadratic.contains("<label>Coefficient a:</label>"));
    assert!(!quadratic.contains("coefficient of x"));

    for id in ["grade", "ideal_weight", "volume_cube", "volume_cylinder", "quadratic"] {
        assert_eq!(render_form(id), render_form(id));
    }

    let mut shadowed = Catalog::builtin().shadowed_ids();
    shadowed.sort_unstable();
    assert_eq!(
        shadowed,
        vec!["grade", "ideal_weight", "quadratic", "volume_cube", "volume_cylinder"]
    );
}

#[test]
fn test_fallback_for_near_misses() {
    let expected = fallback();
    for id in ["", " ", "BMI", "Bmi", " bmi", "bmi ", "area_converter", "unit-temperature"] {
        assert_eq!(render_form(id), expected, "id {:?}", id);
    }
}

#[test]
fn test_notes_follow_fields() {
    let html = render_form("correlation");
    let note = html
        .find(r#"<p class="note">⚠ X and Y must have the same number of values.</p>"#)
        .unwrap();
    let last_input = html.rfind("<input").unwrap();
    assert!(last_input < note);
    assert!(html.contains(r#"placeholder="Example: 2, 4, 6, 8, 10""#));
}

#[test]
fn test_default_selections() {
    let html = render_form("time_zone");
    assert_eq!(html.matches(r#"<option value="0" selected>UTC 0</option>"#).count(), 2);
    assert!(html.contains(r#"<input type="time" id="time" name="time" required>"#));

    let html = render_form("protein_needs");
    assert!(html.contains(r#"<option value="moderate" selected>Moderate</option>"#));
    assert!(html.contains(r#"<option value="sedentary">Sedentary</option>"#));
}

#[test]
fn test_area_converter_keeps_its_field_names() {
    let html = render_form("area-converter");
    assert!(html.contains(r#"<select id="fromUnit" name="fromUnit" required>"#));
    assert!(html.contains(r#"<select id="toUnit" name="toUnit" required>"#));
    assert!(html.contains(r#"<option value="sqm">Square Meter (m²)</option>"#));
}

#[test]
fn test_default_values_and_fine_steps() {
    let html = render_form("currency_converter");
    assert!(html.contains(
        r#"<input type="number" id="from_rate" name="from_rate" step="0.0001" value="1" required>"#
    ));

    let html = render_form("electricity_cost");
    assert!(html.contains(r#"step="0.01" value="0.12" required>"#));

    let html = render_form("solar_panels");
    assert!(html.contains(
        r#"<input type="number" id="rate" name="rate" step="0.001" placeholder="Default: 0.12">"#
    ));
}

#[test]
fn test_compact_style_matches_pretty_content() {
    let renderer = FormRenderer::new(Catalog::builtin());
    let compact = renderer
        .with_options(RenderOptions {
            style: MarkupStyle::Compact,
            indent: 4,
        })
        .render("bmr");
    let pretty = render_form("bmr");

    assert!(!compact.contains('\n'));
    let squashed: String = pretty.lines().map(str::trim_start).collect();
    assert_eq!(compact, squashed);
}

#[test]
fn test_every_form_renders_its_fields() {
    for form in Catalog::builtin().iter() {
        let html = render_form(form.id);
        assert!(!html.is_empty());
        assert_ne!(html, fallback(), "{} rendered the fallback", form.id);
        assert_eq!(control_count(&html), form.fields.len(), "{}", form.id);
        assert_eq!(html.matches("<p class=\"note\">").count(), form.notes.len());
    }
}

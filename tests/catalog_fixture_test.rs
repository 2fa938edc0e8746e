use anyhow::Result;
use calc_forms::{render_form, Catalog, FieldKind};
use serde_json::Value;

/// 產品目前使用中的欄位清單 (每個 id 取第一個定義)
fn fixture() -> Result<Vec<Value>> {
    let content = include_str!("fixtures/catalog.json");
    let value: Value = serde_json::from_str(content)?;
    Ok(value.as_array().cloned().unwrap_or_default())
}

fn attr(field: &Value, key: &str) -> Option<String> {
    field.get(key).and_then(Value::as_str).map(str::to_string)
}

fn fmt_num(value: Option<f64>) -> Option<String> {
    value.map(|v| v.to_string())
}

#[test]
fn test_catalog_matches_fixture_in_order() -> Result<()> {
    let expected = fixture()?;
    let catalog = Catalog::builtin();

    assert_eq!(catalog.len(), expected.len());

    for (form, entry) in catalog.iter().zip(&expected) {
        assert_eq!(form.id, entry["id"].as_str().unwrap_or_default());

        let fields = entry["fields"].as_array().cloned().unwrap_or_default();
        assert_eq!(form.fields.len(), fields.len(), "field count for {}", form.id);

        for (field, want) in form.fields.iter().zip(&fields) {
            let ctx = format!("{}.{}", form.id, field.name);
            assert_eq!(Some(field.name), want["name"].as_str(), "{}", ctx);
            assert_eq!(Some(field.label), want["label"].as_str(), "{}", ctx);
            assert_eq!(Some(field.kind.as_str()), want["kind"].as_str(), "{}", ctx);
            assert_eq!(Some(field.required), want["required"].as_bool(), "{}", ctx);
            assert_eq!(
                field.placeholder.map(str::to_string),
                attr(want, "placeholder"),
                "{}",
                ctx
            );

            match &field.kind {
                FieldKind::Number(attrs) => {
                    assert_eq!(fmt_num(attrs.step), attr(want, "step"), "{} step", ctx);
                    assert_eq!(fmt_num(attrs.min), attr(want, "min"), "{} min", ctx);
                    assert_eq!(fmt_num(attrs.max), attr(want, "max"), "{} max", ctx);
                    assert_eq!(fmt_num(attrs.value), attr(want, "value"), "{} value", ctx);
                }
                FieldKind::Select { options } => {
                    let want_options = want["options"].as_array().cloned().unwrap_or_default();
                    assert_eq!(options.len(), want_options.len(), "{} options", ctx);
                    for (option, want_option) in options.iter().zip(&want_options) {
                        assert_eq!(Some(option.value), want_option["value"].as_str());
                        assert_eq!(Some(option.label), want_option["label"].as_str());
                        assert_eq!(Some(option.selected), want_option["selected"].as_bool());
                    }
                }
                FieldKind::Date | FieldKind::Time | FieldKind::Text => {
                    assert!(attr(want, "step").is_none(), "{}", ctx);
                }
            }
        }

        let notes: Vec<&str> = entry
            .get("notes")
            .and_then(Value::as_array)
            .map(|n| n.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        assert_eq!(form.notes, notes, "notes for {}", form.id);
    }

    Ok(())
}

#[test]
fn test_rendered_markup_matches_fixture() -> Result<()> {
    for entry in fixture()? {
        let id = entry["id"].as_str().unwrap_or_default();
        let html = render_form(id);
        let fields = entry["fields"].as_array().cloned().unwrap_or_default();

        let mut cursor = 0;
        for field in &fields {
            let name = field["name"].as_str().unwrap_or_default();
            let kind = field["kind"].as_str().unwrap_or_default();
            let label = field["label"].as_str().unwrap_or_default();
            let required = if field["required"].as_bool() == Some(true) {
                " required"
            } else {
                ""
            };

            let control = if kind == "select" {
                format!(r#"<select id="{}" name="{}"{}>"#, name, name, required)
            } else {
                let mut attrs = String::new();
                for key in ["step", "min", "max", "value", "placeholder"] {
                    if let Some(v) = attr(field, key) {
                        attrs.push_str(&format!(r#" {}="{}""#, key, v));
                    }
                }
                format!(
                    r#"<input type="{}" id="{}" name="{}"{}{}>"#,
                    kind, name, name, attrs, required
                )
            };

            let label_tag = format!("<label>{}:</label>", label);
            let label_at = html[cursor..]
                .find(&label_tag)
                .map(|i| i + cursor)
                .unwrap_or_else(|| panic!("{}: label {:?} missing or out of order", id, label));
            let control_at = html[label_at..]
                .find(&control)
                .map(|i| i + label_at)
                .unwrap_or_else(|| panic!("{}: control {:?} missing", id, control));
            cursor = control_at + control.len();
        }

        let inputs = html.matches("<input").count() + html.matches("<select").count();
        assert_eq!(inputs, fields.len(), "control count for {}", id);
    }

    Ok(())
}

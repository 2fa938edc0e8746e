use serde::Serialize;

/// 下拉選單中的單一選項
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            selected: false,
        }
    }

    /// 預設選取的選項
    pub const fn selected(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            selected: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NumberAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Number(NumberAttrs),
    Date,
    Time,
    Text,
    Select {
        options: &'static [SelectOption],
    },
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Number(_) => "number",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::Text => "text",
            FieldKind::Select { .. } => "select",
        }
    }
}

/// One input control of a calculator form.
///
/// `name` is what the calculation side reads the value back by, so it is
/// rendered as both the `id` and the `name` attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            placeholder: None,
        }
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number(NumberAttrs::default()))
    }

    pub fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn time(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Time)
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [SelectOption],
    ) -> Self {
        Self::new(name, label, FieldKind::Select { options })
    }

    pub fn with_optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_step(self, step: f64) -> Self {
        self.map_number(|attrs| attrs.step = Some(step))
    }

    pub fn with_min(self, min: f64) -> Self {
        self.map_number(|attrs| attrs.min = Some(min))
    }

    pub fn with_max(self, max: f64) -> Self {
        self.map_number(|attrs| attrs.max = Some(max))
    }

    pub fn with_value(self, value: f64) -> Self {
        self.map_number(|attrs| attrs.value = Some(value))
    }

    // 非數字欄位沒有這些屬性，直接忽略
    fn map_number(mut self, f: impl FnOnce(&mut NumberAttrs)) -> Self {
        if let FieldKind::Number(attrs) = &mut self.kind {
            f(attrs);
        }
        self
    }

    pub fn number_attrs(&self) -> Option<&NumberAttrs> {
        match &self.kind {
            FieldKind::Number(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn options(&self) -> &'static [SelectOption] {
        match self.kind {
            FieldKind::Select { options } => options,
            _ => &[],
        }
    }
}

/// A calculator's complete input form: fields in display order, then notes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorForm {
    pub id: &'static str,
    pub fields: Vec<FieldSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<&'static str>,
}

impl CalculatorForm {
    pub fn new(id: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            id,
            fields,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: &'static str) -> Self {
        self.notes.push(note);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }
}

/// 計算機清單中的一筆 (來自 calculators.json)
#[derive(Debug, Clone, PartialEq, serde::Deserialize, Serialize)]
pub struct CalculatorEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

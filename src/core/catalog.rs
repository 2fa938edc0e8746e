use crate::core::builtin;
use crate::domain::model::CalculatorForm;
use crate::domain::ports::FormSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::collections::HashMap;
use std::sync::LazyLock;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::from_forms(builtin::forms()));

/// Immutable identifier → form mapping.
///
/// Forms keep their declaration order. When an id is declared more than once
/// the first declaration wins; later ones are kept aside in
/// [`Catalog::shadowed`] and never rendered.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    forms: Vec<CalculatorForm>,
    index: HashMap<&'static str, usize>,
    shadowed: Vec<CalculatorForm>,
}

impl Catalog {
    pub fn from_forms(forms: impl IntoIterator<Item = CalculatorForm>) -> Self {
        let mut catalog = Catalog::default();
        for form in forms {
            if catalog.index.contains_key(form.id) {
                tracing::warn!(
                    calculator = form.id,
                    "duplicate form definition ignored, first definition wins"
                );
                catalog.shadowed.push(form);
                continue;
            }
            catalog.index.insert(form.id, catalog.forms.len());
            catalog.forms.push(form);
        }
        catalog
    }

    /// The compiled-in catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn get(&self, id: &str) -> Option<&CalculatorForm> {
        self.index.get(id).map(|&i| &self.forms[i])
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalculatorForm> {
        self.forms.iter()
    }

    /// Definitions dropped because their id was already taken.
    pub fn shadowed(&self) -> &[CalculatorForm] {
        &self.shadowed
    }

    pub fn shadowed_ids(&self) -> Vec<&'static str> {
        self.shadowed.iter().map(|f| f.id).collect()
    }

    /// 驗證所有表單，回傳全部錯誤而不是只回傳第一個
    pub fn validate_all(&self) -> Vec<crate::utils::error::FormsError> {
        self.forms
            .iter()
            .filter_map(|form| form.validate().err())
            .collect()
    }
}

impl FormSource for Catalog {
    fn lookup(&self, id: &str) -> Option<&CalculatorForm> {
        self.get(id)
    }

    fn ids(&self) -> Vec<&'static str> {
        self.forms.iter().map(|f| f.id).collect()
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        for form in &self.forms {
            form.validate()?;
        }
        Ok(())
    }
}

use crate::domain::model::{CalculatorForm, FieldKind};
use crate::utils::error::{FormsError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FormsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FormsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(FormsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FormsError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FormsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 欄位名稱在同一個表單內必須唯一，計算端用名稱讀值
pub fn validate_unique_field_names(form: &CalculatorForm) -> Result<()> {
    let mut seen = HashSet::new();
    for field in &form.fields {
        if !seen.insert(field.name) {
            return Err(FormsError::DuplicateFieldError {
                calculator: form.id.to_string(),
                field: field.name.to_string(),
            });
        }
    }
    Ok(())
}

impl Validate for CalculatorForm {
    fn validate(&self) -> Result<()> {
        let invalid = |message: String| FormsError::InvalidFieldError {
            calculator: self.id.to_string(),
            message,
        };

        if self.fields.is_empty() {
            return Err(invalid("form has no fields".to_string()));
        }

        validate_unique_field_names(self)?;

        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(invalid("field name cannot be empty".to_string()));
            }
            if field.label.trim().is_empty() {
                return Err(invalid(format!("field '{}' has an empty label", field.name)));
            }

            match &field.kind {
                FieldKind::Number(attrs) => {
                    if let (Some(min), Some(max)) = (attrs.min, attrs.max) {
                        if min > max {
                            return Err(invalid(format!(
                                "field '{}' has min {} greater than max {}",
                                field.name, min, max
                            )));
                        }
                    }
                    if let Some(step) = attrs.step {
                        if step <= 0.0 {
                            return Err(invalid(format!(
                                "field '{}' has non-positive step {}",
                                field.name, step
                            )));
                        }
                    }
                }
                FieldKind::Select { options } => {
                    if options.is_empty() {
                        return Err(invalid(format!("select '{}' has no options", field.name)));
                    }
                    if options.iter().filter(|o| o.selected).count() > 1 {
                        return Err(invalid(format!(
                            "select '{}' has more than one default option",
                            field.name
                        )));
                    }
                }
                FieldKind::Date | FieldKind::Time | FieldKind::Text => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FieldSpec, SelectOption};

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("verify.max_missing_listed", 5, 1).is_ok());
        assert!(validate_positive_number("verify.max_missing_listed", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("render.indent", 4, 0, 8).is_ok());
        assert!(validate_range("render.indent", 9, 0, 8).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("verify.calculators_file", "data/calculators.json").is_ok());
        assert!(validate_path("verify.calculators_file", "").is_err());
        assert!(validate_path("verify.calculators_file", "a\0b").is_err());
    }

    #[test]
    fn test_duplicate_field_name_rejected() {
        let form = CalculatorForm::new(
            "broken",
            vec![
                FieldSpec::number("a", "First"),
                FieldSpec::number("a", "Second"),
            ],
        );
        match form.validate() {
            Err(FormsError::DuplicateFieldError { calculator, field }) => {
                assert_eq!(calculator, "broken");
                assert_eq!(field, "a");
            }
            other => panic!("expected duplicate field error, got {:?}", other),
        }
    }

    #[test]
    fn test_number_bounds_checked() {
        let form = CalculatorForm::new(
            "bounds",
            vec![FieldSpec::number("n", "Number").with_min(10.0).with_max(1.0)],
        );
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_select_default_checked() {
        const TWO_DEFAULTS: &[SelectOption] = &[
            SelectOption::selected("a", "A"),
            SelectOption::selected("b", "B"),
        ];
        let form = CalculatorForm::new(
            "select",
            vec![FieldSpec::select("pick", "Pick", TWO_DEFAULTS)],
        );
        assert!(form.validate().is_err());

        let empty = CalculatorForm::new("select", vec![FieldSpec::select("pick", "Pick", &[])]);
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_valid_form_passes() {
        let form = CalculatorForm::new(
            "bmi",
            vec![
                FieldSpec::number("weight", "Weight (kg)").with_step(0.1),
                FieldSpec::number("height", "Height (cm)").with_step(0.1),
            ],
        );
        assert!(form.validate().is_ok());
    }
}

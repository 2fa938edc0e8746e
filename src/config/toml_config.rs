use crate::core::{ConfigProvider, MarkupStyle, RenderOptions};
use crate::utils::error::{FormsError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

const DEFAULT_MAX_MISSING_LISTED: usize = 20;
const MAX_INDENT: usize = 8;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    // 常數樣式，編譯不會失敗
    Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub verify: VerifyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub style: Option<MarkupStyle>,
    pub indent: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyConfig {
    pub calculators_file: Option<String>,
    pub max_missing_listed: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl FormsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FormsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CALCULATORS_FILE})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(indent) = self.render.indent {
            validation::validate_range("render.indent", indent, 0, MAX_INDENT)?;
        }

        if let Some(path) = &self.verify.calculators_file {
            validation::validate_path("verify.calculators_file", path)?;
        }

        if let Some(max) = self.verify.max_missing_listed {
            validation::validate_positive_number("verify.max_missing_listed", max, 1)?;
        }

        Ok(())
    }

    /// The listing path, required by the coverage report.
    pub fn require_calculators_file(&self) -> Result<&str> {
        validation::validate_required_field("verify.calculators_file", &self.verify.calculators_file)
            .map(String::as_str)
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl ConfigProvider for FormsConfig {
    fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            style: self.render.style.unwrap_or(defaults.style),
            indent: self.render.indent.unwrap_or(defaults.indent),
        }
    }

    fn calculators_file(&self) -> Option<&str> {
        self.verify.calculators_file.as_deref()
    }

    fn max_missing_listed(&self) -> usize {
        self.verify
            .max_missing_listed
            .unwrap_or(DEFAULT_MAX_MISSING_LISTED)
    }
}

impl Validate for FormsConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

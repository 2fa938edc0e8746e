use crate::domain::model::{CalculatorEntry, CalculatorForm};
use crate::utils::error::Result;

/// Read-only access to calculator form definitions.
pub trait FormSource: Send + Sync {
    fn lookup(&self, id: &str) -> Option<&CalculatorForm>;
    fn ids(&self) -> Vec<&'static str>;

    fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }
}

/// 提供計算機清單 (用於覆蓋率檢查)
pub trait CalculatorListing {
    fn entries(&self) -> Result<Vec<CalculatorEntry>>;
}

pub trait ConfigProvider {
    fn render_options(&self) -> crate::core::RenderOptions;
    fn calculators_file(&self) -> Option<&str>;
    fn max_missing_listed(&self) -> usize;
}

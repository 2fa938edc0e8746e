pub mod builtin;
pub mod catalog;
pub mod coverage;
pub mod markup;
pub mod renderer;
pub mod units;

pub use crate::domain::model::{CalculatorEntry, CalculatorForm, FieldKind, FieldSpec};
pub use crate::domain::ports::{CalculatorListing, ConfigProvider, FormSource};
pub use crate::utils::error::Result;
pub use markup::{MarkupStyle, RenderOptions};

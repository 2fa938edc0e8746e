pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::JsonListingFile;
pub use config::FormsConfig;
pub use core::{
    catalog::Catalog,
    coverage::CoverageReport,
    renderer::{render_form, FormRenderer},
    MarkupStyle, RenderOptions,
};
pub use domain::model::{CalculatorEntry, CalculatorForm, FieldKind, FieldSpec, SelectOption};
pub use utils::error::{FormsError, Result};

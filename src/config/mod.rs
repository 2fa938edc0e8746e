pub mod toml_config;

pub use toml_config::FormsConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "calc-forms")]
#[command(about = "Render calculator input forms as HTML fragments")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the form markup for a calculator (fallback for unknown ids)
    Render {
        id: String,
        #[arg(long)]
        compact: bool,
        #[arg(long)]
        indent: Option<usize>,
    },
    /// List every calculator id with its field count
    List,
    /// Print a calculator's form definition as JSON
    Show { id: String },
    /// Validate the built-in catalog
    Check,
    /// Report which calculators of a listing have a form
    Verify {
        #[arg(long, help = "JSON listing of calculators (id, name)")]
        calculators: Option<String>,
        #[arg(long)]
        max_missing: Option<usize>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Load the config file (if any) and apply command-line overrides on top.
    pub fn resolve(&self) -> Result<FormsConfig> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path);
                FormsConfig::from_file(path)?
            }
            None => FormsConfig::default(),
        };
        Ok(self.apply_overrides(file_config))
    }

    pub fn apply_overrides(&self, mut config: FormsConfig) -> FormsConfig {
        if self.verbose {
            config.logging.verbose = Some(true);
        }
        if self.json_logs {
            config.logging.json = Some(true);
        }

        match &self.command {
            Command::Render {
                compact, indent, ..
            } => {
                if *compact {
                    config.render.style = Some(crate::core::MarkupStyle::Compact);
                }
                if indent.is_some() {
                    config.render.indent = *indent;
                }
            }
            Command::Verify {
                calculators,
                max_missing,
            } => {
                if calculators.is_some() {
                    config.verify.calculators_file = calculators.clone();
                }
                if max_missing.is_some() {
                    config.verify.max_missing_listed = *max_missing;
                }
            }
            Command::List | Command::Show { .. } | Command::Check => {}
        }

        config
    }
}

use anyhow::Context;
use calc_forms::core::{CalculatorListing, ConfigProvider, FormSource};
use calc_forms::utils::error::{ErrorSeverity, FormsError};
use calc_forms::utils::{logger, validation::Validate};
use calc_forms::{
    Catalog, CliConfig, Command, CoverageReport, FormRenderer, FormsConfig, JsonListingFile,
};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            // 日誌還沒初始化，直接輸出
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    if settings.json_logs() {
        logger::init_json_logger(settings.verbose());
    } else {
        logger::init_cli_logger(settings.verbose());
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(err) = run(&cli.command, &settings) {
        tracing::error!("❌ {} failed: {:#}", command_name(&cli.command), err);
        match err.downcast_ref::<FormsError>() {
            Some(e) => {
                tracing::debug!("Category: {:?}, Severity: {:?}", e.category(), e.severity());
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
                std::process::exit(exit_code(e));
            }
            None => {
                eprintln!("❌ {:#}", err);
                std::process::exit(1);
            }
        }
    }
}

fn run(command: &Command, settings: &FormsConfig) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();

    match command {
        Command::Render { id, .. } => {
            let renderer = FormRenderer::new(catalog).with_options(settings.render_options());
            print!("{}", renderer.render(id));
        }
        Command::List => {
            for form in catalog.iter() {
                println!("{}\t{} fields", form.id, form.fields.len());
            }
            tracing::info!("{} calculators", catalog.len());
        }
        Command::Show { id } => {
            let form = catalog
                .lookup(id)
                .ok_or_else(|| FormsError::UnknownCalculatorError { id: id.clone() })?;
            let json = serde_json::to_string_pretty(form).map_err(FormsError::from)?;
            println!("{}", json);
        }
        Command::Check => {
            let errors = catalog.validate_all();
            for ignored in catalog.shadowed_ids() {
                println!("⚠ '{}' is defined more than once, the first definition is used", ignored);
            }
            for e in &errors {
                println!("❌ {}", e);
            }
            if let Some(first) = errors.into_iter().next() {
                return Err(first.into());
            }
            println!("✅ {} calculator forms are valid", catalog.len());
        }
        Command::Verify { .. } => {
            let path = settings.require_calculators_file()?;
            let entries = JsonListingFile::new(path)
                .entries()
                .with_context(|| format!("while reading calculator listing {}", path))?;
            let report = CoverageReport::build(catalog, &entries);
            print!("{}", report.summary(settings.max_missing_listed()));
            tracing::info!("Coverage {:.1}%", report.coverage_percent());
        }
    }

    Ok(())
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Render { .. } => "render",
        Command::List => "list",
        Command::Show { .. } => "show",
        Command::Check => "check",
        Command::Verify { .. } => "verify",
    }
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code(e: &FormsError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

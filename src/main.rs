use clap::Parser;
use grid_icon_gen::utils::{logger, validation::Validate};
use grid_icon_gen::{CliConfig, ConsoleReporter, GridIconError, IconGenerator, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let generator = IconGenerator::new(config.grid_spec(), config.size_bounds());

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no files will be written");
        match generator.plan().and_then(|plan| plan.to_json()) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with(&e),
        }
        return;
    }

    let storage = LocalStorage::new(&config.output_dir);
    match generator.run(storage, ConsoleReporter) {
        Ok(report) => {
            tracing::debug!(
                "Wrote {} icons of {}px into {}",
                report.written.len(),
                report.geometry.total_size,
                config.output_dir
            );
        }
        Err(e) => exit_with(&e),
    }
}

/// 失敗時 stderr 只留一行訊息，細節需要 `-v` 才看得到
fn exit_with(e: &GridIconError) -> ! {
    tracing::debug!(
        "Icon generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("💡 Suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

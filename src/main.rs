use clap::Parser;
use tg_notify::utils::{logger, validation::Validate};
use tg_notify::{CliConfig, Notifier, NotifyError};

fn exit_with(e: NotifyError) -> ! {
    tracing::error!(
        "❌ Notification failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    let notifier = Notifier::from_config(&settings.telegram);

    // A rejected message is reported on stdout and still exits 0.
    match notifier.send(&config.file).await {
        Ok(result) => println!("{}", result.report_line()),
        Err(e) => exit_with(e),
    }
}

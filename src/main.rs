use anyhow::Context;
use clap::Parser;
use user_entry::cli::Cli;
use user_entry::export::UserExport;
use user_entry::logging::init_tracing;
use user_entry::ui::app::App;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = cli.load_config().context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.validate()?;
    let log_file = init_tracing(&config.logging);

    let mut app = App::new(&config);
    if let Some(path) = &config.export.path {
        let export = UserExport::open(path)
            .with_context(|| format!("Failed to prepare export to {}", path.display()))?;
        app = app.with_export(export);
    }

    tracing::info!(
        age_policy = ?config.validation.age_policy,
        export = config.export.path.is_some(),
        log_file = ?log_file,
        "Starting user-entry"
    );

    let app = user_entry::ui::run(app, config.ui.tick_rate())?;

    let added = app.users().len();
    tracing::info!(added, "Exiting");
    println!("Added {} user{}.", added, if added == 1 { "" } else { "s" });
    Ok(())
}

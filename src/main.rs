use anyhow::Context;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use studenthub_forms::app::{FormApp, Runtime};
use studenthub_forms::config::Settings;
use studenthub_forms::forms;
use studenthub_forms::handoff::handoff_url;
use studenthub_forms::submission::FormController;
use studenthub_forms::terminal::Terminal;

#[derive(Debug, Parser)]
#[command(name = "studenthub", version, about = "STUDENTHUB contact wizard")]
struct Cli {
    /// YAML wizard definition; the built-in contact form when omitted.
    #[arg(long)]
    form: Option<PathBuf>,

    /// YAML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    submit_delay_ms: Option<u64>,

    #[arg(long)]
    reset_delay_ms: Option<u64>,

    /// Hosted form endpoint; printed pre-filled with the last submission.
    #[arg(long)]
    handoff_url: Option<String>,

    /// Print the last submitted values as JSON on exit.
    #[arg(long)]
    dump: bool,

    #[arg(long, default_value = "studenthub.log")]
    log_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let settings = settings(&cli)?;
    let (title, wizard) = forms::load_form(settings.form.as_deref()).context("loading form")?;
    tracing::info!(title = %title, steps = wizard.len(), "starting wizard");

    let controller = FormController::new(wizard, settings.timings());
    let terminal = Terminal::new().context("opening terminal")?;
    let app = Runtime::new(FormApp::new(title, controller), terminal).run()?;

    let Some(receipt) = app.last_receipt() else {
        return Ok(());
    };
    if cli.dump {
        println!("{}", serde_json::to_string_pretty(&receipt.values)?);
    }
    if let Some(base) = &settings.handoff_url {
        println!("{}", handoff_url(base, &receipt.values)?);
    }
    Ok(())
}

fn settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(form) = &cli.form {
        settings.form = Some(form.clone());
    }
    if let Some(ms) = cli.submit_delay_ms {
        settings.submit_delay_ms = ms;
    }
    if let Some(ms) = cli.reset_delay_ms {
        settings.reset_delay_ms = ms;
    }
    if let Some(url) = &cli.handoff_url {
        settings.handoff_url = Some(url.clone());
    }
    Ok(settings)
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .with_context(|| format!("opening log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

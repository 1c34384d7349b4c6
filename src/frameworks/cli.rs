use clap::{Args, Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::domain::{FormKind, FormState, PageEnvironment};
use crate::frameworks::config::{DEFAULT_CONFIG_PATH, SiteConfig, read_form_file};
use crate::frameworks::logging::init_tracing;
use crate::interface_adapters::{ApiClient, TerminalView};
use crate::use_cases::{HealthProbeUseCase, SubmitFormUseCase, resolve_base_url};

#[derive(Debug, Parser)]
#[command(name = "form_client", version, about = "Submit the site's contact and budget forms")]
pub struct Cli {
    /// Site configuration file
    #[arg(long, global = true, env = "FORM_CLIENT_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a message through the contact form
    Contact(ContactArgs),
    /// Request a budget through the budget modal
    Budget(BudgetArgs),
    /// Probe the API health endpoint
    Health,
    /// Print the resolved API base URL
    Resolve,
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    /// TOML file with field values; flags take precedence
    #[arg(long)]
    pub from: Option<PathBuf>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub message: Option<String>,
    /// Probe the health endpoint first (local pages only)
    #[arg(long)]
    pub probe: bool,
}

#[derive(Debug, Args)]
pub struct BudgetArgs {
    /// TOML file with field values; flags take precedence
    #[arg(long)]
    pub from: Option<PathBuf>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Service the modal is opened for
    #[arg(long)]
    pub service: Option<String>,
    #[arg(long)]
    pub details: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    /// Probe the health endpoint first (local pages only)
    #[arg(long)]
    pub probe: bool,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

pub async fn run() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing();

    match execute(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "form_client failed.");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = SiteConfig::load(&cli.config)?;
    let page = config.page_environment()?;
    let client = ApiClient::new()?;

    match cli.command {
        Command::Resolve => {
            let base_url = resolve_base_url(&page)?;
            println!("{base_url}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Health => {
            let probe = HealthProbeUseCase {
                transport: client,
                page,
                timeout: config.health_timeout(),
            };
            Ok(exit_code(probe.execute().await))
        }
        Command::Contact(args) => {
            let state = contact_form(&args)?;
            Ok(submit(&config, page, client, state, args.probe).await)
        }
        Command::Budget(args) => {
            let state = budget_form(&args)?;
            Ok(submit(&config, page, client, state, args.probe).await)
        }
    }
}

async fn submit(
    config: &SiteConfig,
    page: PageEnvironment,
    client: ApiClient,
    state: FormState,
    probe: bool,
) -> ExitCode {
    if should_check_health(&page, probe) {
        let health = HealthProbeUseCase {
            transport: client.clone(),
            page: page.clone(),
            timeout: config.health_timeout(),
        };
        health.execute().await;
    } else if probe {
        tracing::warn!("health check skipped: page is not local or api is not configured.");
    }

    let kind = state.kind();
    let payload = state.payload();
    let use_case = SubmitFormUseCase {
        transport: client,
        page,
        contact: config.contact.clone(),
        timeout: config.submit_timeout(),
    };
    let mut view = TerminalView::new(state, std::io::stdout());

    exit_code(use_case.submit(kind, &payload, &mut view).await.is_success())
}

// Only meaningful during local development, and only once an origin is declared.
fn should_check_health(page: &PageEnvironment, requested: bool) -> bool {
    requested && page.is_local() && page.has_configured_base_url()
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn contact_form(args: &ContactArgs) -> CliResult<FormState> {
    let mut state = FormState::new(FormKind::Contact);
    fill(
        &mut state,
        args.from.as_ref(),
        [
            ("name", &args.name),
            ("email", &args.email),
            ("subject", &args.subject),
            ("message", &args.message),
        ],
    )?;
    Ok(state)
}

fn budget_form(args: &BudgetArgs) -> CliResult<FormState> {
    let mut state = FormState::new(FormKind::Budget);
    fill(
        &mut state,
        args.from.as_ref(),
        [
            ("name", &args.name),
            ("email", &args.email),
            ("phone", &args.phone),
            ("details", &args.details),
            ("company", &args.company),
            ("city", &args.city),
        ],
    )?;
    match args.service.as_deref() {
        Some(service) => state.open_modal_for_service(service),
        None => state.open_modal(),
    }
    Ok(state)
}

// File values first, then flags on top.
fn fill<const N: usize>(
    state: &mut FormState,
    from: Option<&PathBuf>,
    flags: [(&str, &Option<String>); N],
) -> CliResult<()> {
    let file_values = match from {
        Some(path) => read_form_file(path)?,
        None => BTreeMap::new(),
    };
    for (name, value) in file_values {
        state.set_field(name, value);
    }
    for (name, value) in flags {
        if let Some(value) = value {
            state.set_field(name, value.clone());
        }
    }
    Ok(())
}

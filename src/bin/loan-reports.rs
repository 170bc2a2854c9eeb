use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use loan_reports::view::page::ViewOptions;
use loan_reports::view::{SortKey, SortOrder, SortState, kpi};
use loan_reports::{
    Config, Dashboard, DateRange, DirectorySink, ExportFormat, Filter, Page, ReportKind, Reports,
    SessionHook, TokenStore,
};

#[derive(Parser)]
#[command(name = "loan-reports")]
#[command(about = "Loan back-office reports in the terminal")]
#[command(version)]
struct Cli {
    /// API host. Overrides LOAN_REPORTS_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Disable mock data when the API is unreachable; show the errors instead.
    #[arg(long, global = true)]
    no_fallback: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every report and print the dashboard
    Show {
        #[command(flatten)]
        period: Period,

        /// Selected client, shown in the header
        #[arg(long)]
        client: Option<String>,

        /// Sort column of the delinquents table
        #[arg(long, value_enum, default_value_t = Column::Amount)]
        delinquents_sort: Column,

        /// Sort column of the due-soon table
        #[arg(long, value_enum, default_value_t = Column::Date)]
        due_soon_sort: Column,

        /// Sort tables in descending order
        #[arg(long)]
        desc: bool,
    },
    /// Download one report document
    Export {
        /// Report type, e.g. `delinquents` or `due-soon`
        report: String,

        #[command(flatten)]
        period: Period,

        /// Document format: pdf or xlsx
        #[arg(long, default_value = "pdf")]
        format: String,

        /// Target directory (default: LOAN_REPORTS_DOWNLOAD_DIR or the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the back-office summary counters
    Stats,
    /// Store a bearer token for later requests
    Login {
        token: String,
    },
    /// Forget the stored bearer token
    Logout,
}

#[derive(clap::Args)]
struct Period {
    /// First day, YYYY-MM-DD (default: first day of the current month)
    #[arg(long)]
    start: Option<NaiveDate>,
    /// Last day, YYYY-MM-DD (default: today)
    #[arg(long)]
    end: Option<NaiveDate>,
}

impl Period {
    fn range(&self) -> Result<DateRange> {
        let default = DateRange::month_to_date(loan_reports::core::today());
        let start = self.start.unwrap_or(default.start());
        let end = self.end.unwrap_or(default.end());
        Ok(DateRange::new(start, end)?)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Column {
    Name,
    Date,
    Amount,
}

impl Column {
    fn sort(self, desc: bool) -> SortState {
        let key = match self {
            Self::Name => SortKey::Name,
            Self::Date => SortKey::Date,
            Self::Amount => SortKey::Amount,
        };
        let mut state = SortState::new(key);
        if desc {
            state.order = SortOrder::Descending;
        }
        state
    }
}

/// Terminal stand-in for the login redirect.
struct LoginPrompt;

impl SessionHook for LoginPrompt {
    fn session_expired(&self) {
        eprintln!("Sessão expirada. Use `loan-reports login <token>` para entrar novamente.");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config.api_url = url.parse().context("invalid --api-url")?;
    }

    let client = config
        .client_builder()
        .fallback(!cli.no_fallback)
        .session_hook(Arc::new(LoginPrompt))
        .build()?;

    match cli.command {
        Commands::Show {
            period,
            client: client_id,
            delinquents_sort,
            due_soon_sort,
            desc,
        } => {
            let mut filter = Filter::new(period.range()?);
            if let Some(id) = client_id {
                filter = filter.with_client(id);
            }
            let dashboard = Dashboard::new(Arc::new(client), filter);
            dashboard.refresh().await;

            let mut opts = ViewOptions::new(loan_reports::core::today());
            opts.delinquents_sort = delinquents_sort.sort(desc);
            opts.due_soon_sort = due_soon_sort.sort(desc);
            let page = Page::build(&dashboard.snapshot(), &opts);
            print!("{page}");
            if matches!(page, Page::LoginRequired) {
                std::process::exit(2);
            }
        }
        Commands::Export {
            report,
            period,
            format,
            out,
        } => {
            let kind: ReportKind = report.parse()?;
            let format: ExportFormat = format.parse()?;
            let sink = DirectorySink::new(out.unwrap_or_else(|| config.download_dir.clone()));
            let range = period.range()?;
            let done = loan_reports::export::download(&client, kind, format, &range, &sink)
                .await
                .context("export failed")?;
            println!("{done}");
        }
        Commands::Stats => {
            let range = DateRange::month_to_date(loan_reports::core::today());
            let reports = Reports::new(&client, range);
            let stats = reports.stats().await?;
            for card in kpi::stats_cards(&stats) {
                println!("{:<22} {:>18}", card.title, card.value);
            }
        }
        Commands::Login { token } => {
            if token.trim().is_empty() {
                bail!("token must not be empty");
            }
            client.tokens().set_token(token.trim())?;
            if config.token_file.is_none() {
                eprintln!("LOAN_REPORTS_TOKEN_FILE is not set; the token will not persist.");
            }
        }
        Commands::Logout => {
            client.tokens().clear()?;
        }
    }

    Ok(())
}


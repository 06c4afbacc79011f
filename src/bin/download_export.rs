use chrono::Datelike;
use clap::Parser;
use pta_weighting::core::{ExportRequest, Leerjaar};
use pta_weighting::utils::error::ErrorSeverity;
use pta_weighting::utils::validation::{validate_required_field, validate_url, Validate};
use pta_weighting::utils::logger;
use pta_weighting::{ExportClient, ExportService, LocalStorage, PtaError, TomlConfig};

#[derive(Parser)]
#[command(name = "download-export")]
#[command(about = "Download a PTA export document from the export API")]
struct Args {
    /// Year in YYYY format, defaults to the current year
    #[arg(long)]
    year: Option<i32>,

    /// Leerjaar id, e.g. 1 for "4 Havo"
    #[arg(long)]
    klas: u8,

    /// API token, sent as `Authorization: Token <token>`
    #[arg(long, env = "TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Override the export endpoint from config
    #[arg(long)]
    endpoint: Option<String>,

    /// Directory the document is written to
    #[arg(short, long)]
    output: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("🚀 Starting export download");

    let config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let request = match build_request(&args) {
        Ok(request) => request,
        Err(e) => fail(&e),
    };

    let endpoint = args
        .endpoint
        .clone()
        .unwrap_or_else(|| config.export_endpoint().to_string());
    let token = args
        .token
        .clone()
        .or_else(|| config.export_token().map(str::to_string));
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.output_path().to_string());

    let token = match validate_url("endpoint", &endpoint)
        .and_then(|_| validate_required_field("token", &token).cloned())
    {
        Ok(token) => token,
        Err(e) => fail(&e),
    };

    let client = ExportClient::new(endpoint, token, config.export_timeout())?;
    tracing::debug!("Export endpoint: {}", client.endpoint());

    let service = ExportService::new(client, LocalStorage::new(output));
    match service.run(&request).await {
        Ok(path) => {
            println!("✅ Export downloaded");
            println!("📁 Output saved to: {}", path);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn build_request(args: &Args) -> Result<ExportRequest, PtaError> {
    let klas = Leerjaar::from_id(args.klas).ok_or_else(|| PtaError::InvalidConfigValueError {
        field: "klas".to_string(),
        value: args.klas.to_string(),
        reason: "Unknown leerjaar id".to_string(),
    })?;
    let jaar = args.year.unwrap_or_else(|| chrono::Local::now().year());

    Ok(ExportRequest { jaar, klas })
}

fn fail(e: &PtaError) -> ! {
    tracing::error!(
        "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

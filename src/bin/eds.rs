use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use eds_rs::{Client, NarrationClient, NarrationSettings, Provider, SnapshotRequest};
use eds_rs::{catalog, snapshot, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "eds",
    version,
    about = "Fetch World Bank indicators & narrate economic development snapshots"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a narrated snapshot for a country.
    Snapshot(SnapshotArgs),
    /// Fetch and normalize indicator data without narration.
    Data(DataArgs),
    /// List common country codes.
    Countries(ListArgs),
    /// List common economic indicator codes.
    Indicators(ListArgs),
    /// Check upstream and narration backend connectivity.
    Health(HealthArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct SnapshotArgs {
    /// Country code (ISO 3166-1 alpha-3, e.g., USA)
    #[arg(short, long)]
    country: String,
    /// Indicator codes separated by comma or semicolon (e.g., NY.GDP.MKTP.CD)
    #[arg(short, long)]
    indicators: String,
    /// Restrict to a single year (default: last 5 years)
    #[arg(short, long)]
    year: Option<i32>,
    /// Narration backend.
    #[arg(short, long, value_enum, default_value_t = Provider::OpenAi)]
    provider: Provider,
    /// Save the full snapshot (data + narrative) as JSON.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DataArgs {
    /// Country code (ISO 3166-1 alpha-3, e.g., USA)
    #[arg(short, long)]
    country: String,
    /// Indicator codes separated by comma or semicolon
    #[arg(short, long)]
    indicators: String,
    /// Restrict to a single year (default: last 5 years)
    #[arg(short, long)]
    year: Option<i32>,
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Print as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct HealthArgs {
    /// Also probe the given narration backend with a test completion.
    #[arg(short, long, value_enum)]
    provider: Option<Provider>,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Snapshot(args) => cmd_snapshot(args),
        Command::Data(args) => cmd_data(args),
        Command::Countries(args) => cmd_list(catalog::COUNTRIES, args),
        Command::Indicators(args) => cmd_list(catalog::INDICATORS, args),
        Command::Health(args) => cmd_health(args),
    }
}

fn cmd_snapshot(args: SnapshotArgs) -> Result<()> {
    let settings = NarrationSettings::from_env();
    settings.validate()?;

    let client = Client::default();
    let narrator = NarrationClient::new(&settings);
    let request = SnapshotRequest {
        country_code: args.country,
        indicator_codes: parse_list(&args.indicators),
        year: args.year,
        provider: args.provider,
    };

    let snap = snapshot::generate(&client, &narrator, &request)?;
    println!("{}", snap.snapshot_text);

    if let Some(path) = args.out.as_ref() {
        storage::save_json(&snap, path)?;
        eprintln!("Saved snapshot to {}", path.display());
    }
    Ok(())
}

fn cmd_data(args: DataArgs) -> Result<()> {
    let client = Client::default();
    let request = SnapshotRequest {
        country_code: args.country,
        indicator_codes: parse_list(&args.indicators),
        year: args.year,
        // Narration is not involved here; the provider field is unused.
        provider: Provider::OpenAi,
    };

    let data = snapshot::fetch_data(&client, &request)?;

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("json"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&data, path)?,
            "json" => storage::save_json(&data, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!(
            "Saved {} indicators to {}",
            data.total_indicators,
            path.display()
        );
    } else {
        println!("{}", serde_json::to_string_pretty(&data)?);
    }
    Ok(())
}

fn cmd_list(entries: &[catalog::CatalogEntry], args: ListArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for e in entries {
            println!("{:<20} {}", e.code, e.name);
        }
    }
    Ok(())
}

fn cmd_health(args: HealthArgs) -> Result<()> {
    let client = Client::default();
    let upstream_ok = client.ping();
    println!(
        "world bank api: {}",
        if upstream_ok { "ok" } else { "unreachable" }
    );

    let settings = NarrationSettings::from_env();
    let settings_ok = match settings.validate() {
        Ok(()) => {
            println!("narration settings: ok");
            true
        }
        Err(e) => {
            println!("narration settings: {}", e);
            false
        }
    };

    let mut backend_ok = true;
    if let Some(provider) = args.provider {
        let narrator = NarrationClient::new(&settings);
        backend_ok = narrator.ping(provider);
        println!(
            "{}: {}",
            provider,
            if backend_ok { "ok" } else { "unreachable" }
        );
    }

    if upstream_ok && settings_ok && backend_ok {
        Ok(())
    } else {
        anyhow::bail!("one or more health checks failed")
    }
}

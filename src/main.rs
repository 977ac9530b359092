use clap::Parser;
use dialscope::record::UNKNOWN;
use dialscope::resolve::NumberResolver;
use dialscope::server;

/// Dialscope v0.3 — phone number intelligence.
///
/// Validates a phone number in international format and derives
/// country, carrier, time zones, approximate coordinates, locality,
/// and the estimated local time there.
///
/// Examples:
///   dialscope +14155552671
///   dialscope "+46 70 123 45 67" --json
///   dialscope +14155552671 --offline
///   dialscope --serve --port 8080
#[derive(Parser)]
#[command(name = "dialscope", version, about, long_about = None)]
struct Cli {
    /// Phone number in international format, e.g. +14155552671.
    #[arg(index = 1, allow_hyphen_values = true)]
    number: Option<String>,

    /// Locale for country and carrier names (built-in data is English).
    #[arg(long, default_value = "en")]
    locale: String,

    /// Offline mode: built-in data only, no network calls.
    #[arg(long)]
    offline: bool,

    /// Print the record as JSON to stdout.
    #[arg(long)]
    json: bool,

    /// Print a Google Maps URL for the resolved coordinates.
    #[arg(long)]
    map: bool,

    /// Run the local web UI instead of a one-shot lookup.
    #[arg(long)]
    serve: bool,

    /// Bind address for --serve.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for --serve.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start runtime: {}", e);
            std::process::exit(1);
        });
        runtime.block_on(server::start(&cli.host, cli.port, cli.offline));
        return;
    }

    let number = match &cli.number {
        Some(n) => n.trim(),
        None => {
            eprintln!("Error: No phone number specified.");
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  dialscope +14155552671");
            eprintln!("  dialscope \"+46 70 123 45 67\" --json");
            eprintln!("  dialscope --serve");
            std::process::exit(1);
        }
    };

    let mut resolver = NumberResolver::new();
    resolver.set_locale(&cli.locale);
    if cli.offline {
        resolver.set_offline(true);
    }

    let record = match resolver.resolve(number) {
        Ok(record) => record,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    // ── Human banner to stderr ──────────────────────────────────

    eprintln!("  \u{1F4DE} {}", number);
    eprintln!("  \u{1F30D} Country: {}", non_empty(&record.country_description));
    eprintln!("  \u{1F4F6} Carrier: {}", non_empty(&record.carrier_name));
    eprintln!("  \u{1F552} Zones:   {}", non_empty(&record.time_zones.join(", ")));
    eprintln!("  \u{231A} Local:   {}", record.local_time_display);
    match (record.latitude, record.longitude) {
        (Some(lat), Some(lon)) => eprintln!("  \u{1F4D0} Coords:  {:.4}, {:.4}", lat, lon),
        _ => eprintln!("  \u{1F4D0} Coords:  {}", UNKNOWN),
    }
    eprintln!("  \u{1F3D9} City:    {}", record.city);
    eprintln!("  \u{1F5FA} State:   {}", record.state);

    // ── Machine output to stdout ────────────────────────────────

    if cli.map {
        match record.map_url() {
            Some(url) => println!("{}", url),
            None => eprintln!("  No coordinates resolved; map query disabled."),
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&record).unwrap());
    }
}

fn non_empty(s: &str) -> &str {
    if s.is_empty() { UNKNOWN } else { s }
}

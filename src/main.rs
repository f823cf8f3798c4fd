use clap::{Parser, Subcommand};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde_json::Value;

use composite_search::infrastructure::config::Config;
use composite_search::{DefaultSearchPlugin, PluginManager, SearchRequest, SearchService};

/// Shape of a --param argument: "[JUNCTION:]field=value"
static PARAM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?i:(AND|OR|NOT)):)?([A-Za-z_][A-Za-z0-9_.-]*)=(.*)$")
        .expect("param pattern is valid")
});

#[derive(Parser)]
#[command(name = "composite-search")]
#[command(about = "Rewrite search queries from typed composite parameters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the before-search pipeline and print the rewritten query
    Query {
        /// Existing query text to append to
        #[arg(short, long, default_value = "")]
        q: String,

        /// Typed parameter, "[JUNCTION:]field=value" (repeatable)
        #[arg(short, long = "param")]
        params: Vec<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Query { q, params } => {
            run_query(&cli.config, q, &params);
        }
        Commands::Version => {
            println!("composite-search v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config(&cli.config);
        }
    }
}

fn run_query(config_path: &str, q: String, raw_params: &[String]) {
    // Load config
    let config = if std::path::Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    // Assemble the plugin chain
    let mut manager = PluginManager::new();
    if let Err(e) = manager.register(DefaultSearchPlugin) {
        tracing::error!("Failed to register default plugin: {}", e);
        std::process::exit(1);
    }
    tracing::info!("Search pipeline ready: {} plugin(s)", manager.len());

    let service = SearchService::new(&config, manager);

    // Rebuild the raw extras lists the host HTTP layer would deliver
    let (junctions, fields, values) = split_params(raw_params);
    let mut request = SearchRequest::new(q)
        .with_extra(
            format!("{}junction", config.params.prefix),
            Value::from(junctions),
        )
        .with_extra(format!("{}type", config.params.prefix), Value::from(fields))
        .with_extra(format!("{}value", config.params.prefix), Value::from(values));

    match service.prepare(&mut request) {
        Ok(()) => println!("{}", request.q),
        Err(e) => {
            tracing::error!("Failed to prepare search: {}", e);
            std::process::exit(1);
        }
    }
}

/// Split raw "[JUNCTION:]field=value" arguments into the three parallel
/// lists of the extras wire shape. Malformed arguments are ignored.
fn split_params(raw: &[String]) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut junctions = Vec::new();
    let mut fields = Vec::new();
    let mut values = Vec::new();

    for item in raw {
        let Some(caps) = PARAM_RE.captures(item) else {
            tracing::warn!("Ignoring malformed parameter: {}", item);
            continue;
        };

        junctions.push(caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default());
        fields.push(caps[2].to_string());
        values.push(caps[3].to_string());
    }

    (junctions, fields, values)
}

fn init_config(path: &str) {
    if std::path::Path::new(path).exists() {
        tracing::warn!("Config already exists at {}", path);
        return;
    }

    match Config::default().save(path) {
        Ok(()) => println!("Wrote default config to {}", path),
        Err(e) => {
            tracing::error!("Failed to write config: {}", e);
            std::process::exit(1);
        }
    }
}

//! Launchpad CLI
//!
//! Inspect the endpoint catalog and exercise the mock dispatcher from the
//! command line. Results go to stdout as JSON; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use launchpad_core::catalog::Catalog;
use launchpad_core::config::settings::BASE_URL_ENV;
use launchpad_core::config::ApiConfig;
use launchpad_core::health::check_api_health;
use launchpad_core::types::operation::HttpMethod;
use serde_json::{json, Value};
use std::borrow::Cow;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(about = "Endpoint catalog and mock responses for the Launchpad wellness API")]
#[command(version)]
struct Cli {
    /// Backend base URL used by `health`
    #[arg(long, env = BASE_URL_ENV, global = true)]
    base_url: Option<String>,

    /// Registry catalog file replacing the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Fixture file glob layered over the built-in fixtures (repeatable)
    #[arg(long = "fixtures", global = true)]
    fixtures: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List features and their operations
    Features,

    /// Resolve an operation to a concrete path
    Resolve {
        /// Feature name (HRA, BASIC_PROFILE, basicProfile)
        feature: String,

        /// Operation name (GET, POST, GET_REPORT)
        operation: String,

        /// Value bound into the first path placeholder
        #[arg(short, long)]
        param: Option<String>,
    },

    /// Read the fixture stored for a concrete path
    Read {
        path: String,

        #[arg(short, long, default_value = "GET")]
        method: HttpMethod,
    },

    /// Print the envelope a write to `path` produces
    Write {
        path: String,

        /// JSON request body
        #[arg(short, long)]
        body: Option<String>,
    },

    /// Find the declared operation serving a concrete path
    Match { method: HttpMethod, path: String },

    /// Print fixture data by component key (onboarding, hra, homePage)
    Component {
        key: String,

        #[arg(short, long)]
        step: Option<String>,
    },

    /// Check whether the backend answers `GET /health`
    Health,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "launchpad=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(Cli::parse()).await
}

/// Built-in catalog unless files were given on the command line.
fn open_catalog(cli: &Cli) -> Result<Cow<'static, Catalog>> {
    if cli.catalog.is_none() && cli.fixtures.is_empty() {
        return Ok(Cow::Borrowed(Catalog::global()));
    }
    let catalog =
        Catalog::load(cli.catalog.as_deref(), &cli.fixtures).context("failed to load catalog")?;
    Ok(Cow::Owned(catalog))
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::Features => {
            let catalog = open_catalog(&cli)?;
            for feature in catalog.registry().features() {
                match &feature.component {
                    Some(component) => println!("{} ({component})", feature.name),
                    None => println!("{}", feature.name),
                }
                for (name, op) in &feature.operations {
                    println!("  {name:<24} {:<6} {}", op.http_method, op.path_template);
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Resolve {
            feature,
            operation,
            param,
        } => {
            let catalog = open_catalog(&cli)?;
            match catalog
                .resolver()
                .resolve_component(feature, operation, param.as_deref())
            {
                Some(descriptor) => {
                    print_json(&serde_json::to_value(&descriptor)?)?;
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("no operation {operation} for feature {feature}");
                    Ok(exit_code(false))
                }
            }
        }

        Commands::Read { path, method } => {
            let catalog = open_catalog(&cli)?;
            let fixture = catalog.dispatcher().dispatch_read(path, *method);
            match fixture {
                Some(fixture) => {
                    print_json(fixture)?;
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("no fixture for {method} {path}");
                    Ok(exit_code(false))
                }
            }
        }

        Commands::Write { path, body } => {
            let body: Option<Value> = body
                .as_deref()
                .map(serde_json::from_str)
                .transpose()
                .context("--body is not valid JSON")?;
            let catalog = open_catalog(&cli)?;
            let envelope = catalog.dispatcher().dispatch_write(path, body.as_ref());
            print_json(&envelope.to_value())?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Match { method, path } => {
            let catalog = open_catalog(&cli)?;
            let found = catalog.registry().match_path(*method, path);
            match found {
                Some(found) => {
                    print_json(&json!({
                        "feature": found.feature,
                        "operation": found.operation,
                        "pathTemplate": found.descriptor.path_template,
                        "params": found.params,
                    }))?;
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("no operation declares {method} {path}");
                    Ok(exit_code(false))
                }
            }
        }

        Commands::Component { key, step } => {
            let catalog = open_catalog(&cli)?;
            match catalog.fixtures().component_data(key, step.as_deref()) {
                Some(data) => {
                    print_json(&data)?;
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("no fixture data for component {key}");
                    Ok(exit_code(false))
                }
            }
        }

        Commands::Health => {
            let config = ApiConfig::from_lookup(|_| cli.base_url.clone());
            tracing::info!(base_url = %config.base_url, "checking backend health");
            let healthy = check_api_health(&config).await;
            println!("{healthy}");
            Ok(exit_code(healthy))
        }
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

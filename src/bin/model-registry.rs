use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use model_registry_client::{
    io::paths::default_config_path, ClientConfig, Model, PathEncoding, RegistryClient, Repo,
};
use std::{path::PathBuf, process};

#[derive(Parser)]
#[command(name = "model-registry")]
#[command(about = "Look up models on a model registry", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Log format (json or pretty)
    #[arg(long, default_value = "pretty", global = true)]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a model's description
    Show {
        /// Model ID
        id: String,

        /// Repository as host/user/name
        #[arg(short, long)]
        repo: Option<Repo>,

        /// Print the decoded model as JSON
        #[arg(long)]
        json: bool,

        /// Percent-encode user, name and id in the request path
        #[arg(long)]
        encode_paths: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_format);

    let result = match cli.command {
        Commands::Show {
            id,
            repo,
            json,
            encode_paths,
        } => handle_show(cli.config, id, repo, json, encode_paths),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn init_logging(level: &str, format: &str) {
    match format {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(level)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(level)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn handle_show(
    config_path: Option<PathBuf>,
    id: String,
    repo: Option<Repo>,
    json: bool,
    encode_paths: bool,
) -> Result<()> {
    let config_path = config_path.or_else(|| default_config_path().filter(|p| p.exists()));
    let mut config = ClientConfig::load(config_path)?;
    if encode_paths {
        config.path_encoding = PathEncoding::Percent;
    }
    config.validate()?;

    tracing::debug!(
        scheme = %config.scheme,
        timeout_secs = ?config.timeout_secs,
        path_encoding = ?config.path_encoding,
        "Configuration loaded"
    );

    let repo = match repo {
        Some(repo) => repo,
        None => config
            .default_repo
            .as_deref()
            .context("No repository given; pass --repo host/user/name or set default_repo")?
            .parse::<Repo>()?,
    };

    let client = RegistryClient::from_config(&config)?;
    let model = client
        .get_model(&repo, &id)
        .with_context(|| format!("Failed to fetch model {id} from {repo}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        print_summary(&repo, &model);
    }

    Ok(())
}

fn print_summary(repo: &Repo, model: &Model) {
    println!("ID:       {}", model.id);
    println!("Repo:     {}", repo);
    if let Some(created) = model.created {
        println!("Created:  {}", created.to_rfc3339());
    }

    if !model.artifacts.is_empty() {
        println!();
        println!("Artifacts:");
        for a in &model.artifacts {
            println!("  {}  {}", a.target, a.uri);
        }
    }

    if !model.run_arguments.is_empty() {
        println!();
        println!("Inputs:");
        for (name, arg) in &model.run_arguments {
            let mut line = format!("  {name} ({})", arg.kind);
            if let Some(default) = &arg.default {
                line.push_str(&format!(" default={default}"));
            }
            if let Some(help) = &arg.help {
                line.push_str(&format!(": {help}"));
            }
            println!("{line}");
        }
    }
}

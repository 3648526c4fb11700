use std::io;
use std::path::{Path, PathBuf};

use agent_chat::{Config, EvalFixture, Session};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Inspect the agents and tools a chat session starts with
#[derive(Parser, Debug)]
#[command(name = "agent-chat")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to ~/.config/agent-chat/config.toml)
    #[arg(short, long, env = "AGENT_CHAT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered agents in registration order
    Agents,
    /// List registered tools in registration order
    Tools,
    /// Show one agent and the tools it can call
    Agent { id: String },
    /// Select an agent and print the resulting agent state
    Activate { id: String },
    /// Check an eval fixture file against the configured agents and tools
    Eval { file: PathBuf },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Command, mut session: Session) -> Result<()> {
    match command {
        Command::Agents => {
            let state = session.store().agents();
            for agent in &state.agents {
                let marker = if state.active_agent_id.as_deref() == Some(agent.id.as_str()) {
                    "*"
                } else {
                    " "
                };
                match agent.name() {
                    Some(name) => println!("{} {} ({})", marker, agent.id, name),
                    None => println!("{} {}", marker, agent.id),
                }
            }
        }
        Command::Tools => {
            for tool in &session.store().tools().tools {
                println!(
                    "{}\t{}",
                    tool.name,
                    tool.description().unwrap_or("")
                );
            }
        }
        Command::Agent { id } => {
            let agent = session
                .agent(&id)
                .ok_or_else(|| agent_chat::Error::UnknownAgent(id.clone()))?;
            println!("{}", serde_json::to_string_pretty(agent)?);
            for tool in session.agent_tools(agent) {
                println!("tool: {}", tool.name);
            }
        }
        Command::Activate { id } => {
            session.set_active_agent(id);
            println!(
                "{}",
                serde_json::to_string_pretty(session.store().agents().as_ref())?
            );
        }
        Command::Eval { file } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read fixture: {}", file.display()))?;
            let fixture = EvalFixture::from_json(&json)
                .with_context(|| format!("Failed to parse fixture: {}", file.display()))?;
            fixture.check(&session)?;
            println!("{}: ok", fixture.name);
        }
    }
    Ok(())
}

/// Load an optional .env file. A missing file is not an error.
fn load_env_file(path: &Path) -> Option<dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => None,
        Err(dotenvy::Error::Io(ref e)) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => Some(e),
    }
}

fn main() -> Result<()> {
    // Load .env files (local first, then home directory). Failures are
    // reported once logging is up.
    let mut env_paths = vec![PathBuf::from(".env")];
    if let Some(home) = dirs::home_dir() {
        env_paths.push(home.join(".env"));
    }
    let env_errors: Vec<_> = env_paths
        .into_iter()
        .filter_map(|path| load_env_file(&path).map(|err| (path, err)))
        .collect();

    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => Config::from_path(path)?,
        None => Config::load()?,
    };
    init_logging(&config);
    for (path, err) in env_errors {
        tracing::warn!(path = %path.display(), error = %err, "failed to load .env file");
    }

    let session = Session::from_config(&config)?;
    run(args.command, session)
}

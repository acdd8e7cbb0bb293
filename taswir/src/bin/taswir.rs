//! Taswir CLI - drive the mock tool gallery from a terminal
//!
//! Usage:
//!   taswir tools
//!   taswir run <TOOL> [-p key=value]... [--file PATH] [--no-delay]
//!   taswir connect --url <URL> --token <TOKEN>
//!   taswir demo

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use futures::future::join_all;
use std::path::PathBuf;
use std::sync::Arc;
use taswir::events::LoggingEventSink;
use taswir::prelude::*;
use taswir::session::Toaster;
use taswir::tools::{FieldType, InputSchema};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "taswir", version, about = "Mock AI tool gallery")]
struct Cli {
    /// JSON config file. `TASWIR_*` environment variables override it.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Skip the simulated delays.
    #[arg(long, global = true)]
    no_delay: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tool gallery.
    Tools,
    /// Submit one tool form and print the rendered output.
    Run {
        /// Tool id, e.g. `sentiment-analysis`.
        tool: String,
        /// Form parameter as `key=value`. Values are parsed as JSON when possible.
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
        /// File to attach to the form.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// Submit the connect form.
    Connect {
        /// MCP server URL.
        #[arg(long)]
        url: String,
        /// Authentication token.
        #[arg(long)]
        token: String,
    },
    /// Run a sample submission against every tool.
    Demo,
}

fn load_config(cli: &Cli) -> Result<TaswirConfig> {
    let config = match &cli.config {
        Some(path) => TaswirConfig::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => TaswirConfig::default(),
    };
    let config = config.with_env_overrides()?;
    Ok(if cli.no_delay {
        TaswirConfig {
            connect_delay_ms: 0,
            redirect_delay_ms: 0,
            submit_delay_ms: 0,
            ..config
        }
    } else {
        config
    })
}

/// Splits `KEY=VALUE`. Values of string fields are kept verbatim; other
/// fields are parsed as JSON, falling back to a string.
fn parse_param(raw: &str, schema: &InputSchema) -> Result<(String, serde_json::Value)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("Expected KEY=VALUE, got '{raw}'");
    };
    let key = key.trim();
    let value = match schema.get(key).map(|f| f.field_type) {
        Some(FieldType::String) => serde_json::Value::String(value.to_string()),
        _ => serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string())),
    };
    Ok((key.to_string(), value))
}

fn print_toasts(toaster: &Toaster) {
    for toast in toaster.drain() {
        eprintln!("{toast}");
    }
}

fn print_session(session: &ToolSession) {
    if let Some(view) = session.rendered() {
        println!("{view}");
    }
    println!();
    println!("Session log:");
    for entry in session.log().entries() {
        println!("  {entry}");
    }
}

fn list_tools(app: &App) {
    if let Page::Gallery { cards, .. } = app.navigate("/tools") {
        for card in cards {
            println!(
                "{:<20} {:<10} {}",
                card.id.as_str(),
                card.return_type.to_string(),
                card.description
            );
        }
    }
}

async fn run_tool(
    app: &App,
    tool: &str,
    params: &[String],
    file: Option<&PathBuf>,
) -> Result<()> {
    let session = match app.navigate(&format!("/tools/{tool}")) {
        Page::Tool { session, .. } => session,
        Page::ToolNotFound { id, back } => {
            bail!("Tool Not Found: no tool with id '{id}'. {}", back.label)
        }
        other => bail!("Unexpected page for '{tool}': {other:?}"),
    };

    let definition = session
        .definition()
        .with_context(|| format!("No definition for '{tool}'"))?;
    let mut invocation = ToolInvocation::new(session.tool());
    for raw in params {
        let (key, value) = parse_param(raw, &definition.input_schema)?;
        invocation = invocation.with_param(key, value);
    }
    if let Some(path) = file {
        invocation = invocation.with_file(UploadedFile::from_path(path)?);
    }

    let result = session.submit(invocation).await;
    print_toasts(app.toaster());
    result?;
    print_session(&session);
    Ok(())
}

async fn connect(app: &App, url: String, token: String) -> Result<()> {
    let Page::Connect(flow) = app.navigate("/") else {
        bail!("Connect page unavailable");
    };
    let result = flow.submit(&ConnectForm::new(url, token)).await;
    print_toasts(app.toaster());
    let route = result?;
    println!("Redirect: {route}");
    Ok(())
}

fn demo_invocations() -> Vec<ToolInvocation> {
    vec![
        ToolInvocation::new(ToolId::TextSummarizer).with_text(
            "Rust has no garbage collector. Ownership rules are checked at compile time. \
             Data races are rejected by the type system. The result is fast and safe code.",
        ),
        ToolInvocation::new(ToolId::ImageAnalyzer)
            .with_param("imageUrl", serde_json::json!("https://example.com/street.jpg")),
        ToolInvocation::new(ToolId::DataVisualizer)
            .with_param("chartType", serde_json::json!("pie")),
        ToolInvocation::new(ToolId::CodeGenerator)
            .with_param("prompt", serde_json::json!("fetch data from an API"))
            .with_param("language", serde_json::json!("python")),
        ToolInvocation::new(ToolId::Translation).with_text("Good morning"),
        ToolInvocation::new(ToolId::SentimentAnalysis).with_text("I love this, it's amazing"),
    ]
}

async fn demo(app: &App) -> Result<()> {
    let runs = demo_invocations().into_iter().map(|invocation| async move {
        let Page::Tool { session, .. } = app.navigate(&format!("/tools/{}", invocation.tool))
        else {
            bail!("Missing tool page for {}", invocation.tool);
        };
        session.submit(invocation).await?;
        Ok::<_, anyhow::Error>(session)
    });

    for session in join_all(runs).await {
        let session = session?;
        println!("== {} ==", session.tool());
        print_session(&session);
        println!();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    taswir::observability::init_from_config(&config)?;

    info!("Starting taswir v{}", env!("CARGO_PKG_VERSION"));

    let app = App::new(config).with_event_sink(Arc::new(LoggingEventSink::debug()));

    match cli.command {
        Commands::Tools => list_tools(&app),
        Commands::Run { tool, params, file } => {
            run_tool(&app, &tool, &params, file.as_ref()).await?;
        }
        Commands::Connect { url, token } => connect(&app, url, token).await?,
        Commands::Demo => demo(&app).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(tool: ToolId) -> &'static InputSchema {
        &builtin_registry().definition(tool).unwrap().input_schema
    }

    #[test]
    fn test_parse_param_follows_schema() {
        let summarizer = schema(ToolId::TextSummarizer);
        assert_eq!(parse_param("length=20", summarizer).unwrap().1, serde_json::json!(20));
        assert_eq!(
            parse_param("text=hello world", summarizer).unwrap().1,
            serde_json::json!("hello world")
        );
        assert!(parse_param("novalue", summarizer).is_err());
    }

    #[test]
    fn test_parse_param_keeps_string_fields_verbatim() {
        let sentiment = schema(ToolId::SentimentAnalysis);
        assert_eq!(parse_param("text=42", sentiment).unwrap().1, serde_json::json!("42"));
        assert_eq!(parse_param("text=true", sentiment).unwrap().1, serde_json::json!("true"));

        let code = schema(ToolId::CodeGenerator);
        assert_eq!(parse_param("prompt=null", code).unwrap().1, serde_json::json!("null"));
    }

    #[test]
    fn test_numeric_text_resolves() {
        let (key, value) = parse_param("text=42", schema(ToolId::SentimentAnalysis)).unwrap();
        let invocation = ToolInvocation::new(ToolId::SentimentAnalysis).with_param(key, value);
        let output = ResolutionEngine::seeded(1).resolve_invocation(&invocation).unwrap();
        assert_eq!(output.kind(), OutputKind::Text);
    }

    #[test]
    fn test_parse_param_json_object_field() {
        let (_, value) = parse_param(
            r#"options={"detectFaces":false}"#,
            schema(ToolId::ImageAnalyzer),
        )
        .unwrap();
        assert_eq!(value, serde_json::json!({ "detectFaces": false }));
    }

    #[test]
    fn test_cli_parses_run() {
        let cli = Cli::parse_from([
            "taswir",
            "run",
            "translation",
            "-p",
            "text=Hello",
            "--no-delay",
        ]);
        assert!(cli.no_delay);
        assert!(matches!(cli.command, Commands::Run { ref tool, .. } if tool == "translation"));
    }
}

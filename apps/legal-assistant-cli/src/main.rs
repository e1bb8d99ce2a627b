//! Legal Assistant CLI
//!
//! Drives the document generation, legal search and chat workflows from the
//! terminal against the same backend as the web front-end. The backend is
//! picked from `--host` exactly as the browser picks it from the page host.

use std::io::{Stderr, Stdout};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use legal_client_core::{resolve, ApiClient, Controller};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod http;
mod terminal;

use http::ReqwestTransport;
use terminal::TerminalView;

type CliController = Controller<ReqwestTransport, TerminalView<Stdout, Stderr>>;

#[derive(Parser, Debug)]
#[command(name = "legal-assistant")]
#[command(version, about = "Generate legal documents, search case material and chat with the legal assistant")]
struct Args {
    /// Host the client pretends to be served from (localhost = development backend)
    #[arg(long, env = "LEGAL_ASSISTANT_HOST", default_value = "localhost")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a document: contract or formal_notice
    Generate {
        document_type: String,

        /// Document field as id=value (see `fields`)
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Ask a legal question
    Search {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Interactive chat; one message per line, /quit to leave
    Chat,
    /// List the fields a document type needs
    Fields { document_type: String },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(id, value)| (id.trim().to_string(), value.to_string()))
        .filter(|(id, _)| !id.is_empty())
        .ok_or_else(|| format!("expected id=value, got '{}'", raw))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = resolve(&args.host);
    tracing::info!(
        environment = %config.environment(),
        base_url = config.base_url(),
        "Legal assistant CLI v{}",
        env!("CARGO_PKG_VERSION")
    );

    let controller = Controller::new(
        ApiClient::new(config, ReqwestTransport::new()),
        TerminalView::new(std::io::stdout(), std::io::stderr()),
    );

    let ok = match args.command {
        Command::Generate {
            document_type,
            fields,
        } => {
            controller.view().select_document_type(&document_type);
            for (id, value) in &fields {
                controller.view().set_field(id, value);
            }
            controller.generate_document().await.is_ok()
        }
        Command::Search { question } => {
            controller.view().set_question(&question.join(" "));
            controller.legal_search().await.is_ok()
        }
        Command::Chat => run_chat(&controller).await?,
        Command::Fields { document_type } => {
            controller.view().select_document_type(&document_type);
            controller.document_type_changed();
            legal_client_core::DocumentKind::parse(&document_type).is_some()
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Read messages from stdin until EOF or `/quit`
async fn run_chat(controller: &CliController) -> anyhow::Result<bool> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprintln!("Chat with the legal assistant. /quit to leave.");
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "/quit" {
            break;
        }
        controller.view().type_chat(&line);
        // Failures are already shown with an apology; keep the session going
        let _ = controller.send_chat().await;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("employer=Acme Corp").unwrap(),
            ("employer".to_string(), "Acme Corp".to_string())
        );
        assert_eq!(
            parse_field("subject=a=b").unwrap(),
            ("subject".to_string(), "a=b".to_string())
        );
        assert!(parse_field("employer").is_err());
        assert!(parse_field("=x").is_err());
    }

    #[test]
    fn test_generate_args() {
        let args = Args::try_parse_from([
            "legal-assistant",
            "--host",
            "legal.example.org",
            "generate",
            "contract",
            "--field",
            "employer=Acme",
            "-f",
            "salary=50000",
        ])
        .unwrap();

        assert_eq!(args.host, "legal.example.org");
        match args.command {
            Command::Generate {
                document_type,
                fields,
            } => {
                assert_eq!(document_type, "contract");
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[1], ("salary".to_string(), "50000".to_string()));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_search_requires_question() {
        assert!(Args::try_parse_from(["legal-assistant", "search"]).is_err());
        let args =
            Args::try_parse_from(["legal-assistant", "search", "What", "is", "force", "majeure?"])
                .unwrap();
        match args.command {
            Command::Search { question } => assert_eq!(question.join(" "), "What is force majeure?"),
            other => panic!("unexpected command {:?}", other),
        }
    }
}

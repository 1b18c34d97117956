use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use chat_timeline::{parse_events, phase_of, sort_messages, Message};

#[derive(Parser)]
#[command(name = "timeline-cli")]
#[command(about = "Inspect and sort captured workflow chat event dumps")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort an event dump into workflow order
    Sort {
        /// Path to a JSON array or NDJSON dump, or `-` for stdin
        input: PathBuf,

        /// Emit the sorted events as a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the classified phase of each event, in input order
    Phases {
        /// Path to a JSON array or NDJSON dump, or `-` for stdin
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort { input, json } => {
            let messages = load(&input)?;
            log::debug!("loaded {} events from {}", messages.len(), input.display());
            let sorted = sort_messages(&messages);
            if json {
                println!("{}", serde_json::to_string_pretty(&sorted)?);
            } else {
                for message in &sorted {
                    println!("{}", describe(message));
                }
            }
        }
        Commands::Phases { input } => {
            let messages = load(&input)?;
            for message in &messages {
                println!("{:<13} {}", format!("{:?}", phase_of(message)), describe(message));
            }
        }
    }

    Ok(())
}

fn load(input: &PathBuf) -> Result<Vec<Message>> {
    let text = if input.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        buffer
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };
    let messages = parse_events(&text)?;
    Ok(messages)
}

fn describe(message: &Message) -> String {
    let mut line = format!("{} {:?}", message.timestamp.to_rfc3339(), message.kind);

    if let Some(status) = message.status {
        line.push_str(&format!(" [{status:?}]"));
    }
    if let Some(sequence) = message.sequence() {
        line.push_str(&format!(" seq={sequence}"));
    }
    if message.is_step_body() {
        line.push_str(&format!(" step#{}", message.step_number()));
    } else if let Some(related) = message.related_step_id() {
        line.push_str(&format!(" ->{related}"));
    }
    if let Some(content) = &message.content {
        let mut preview: String = content.chars().take(60).collect();
        if preview.len() < content.len() {
            preview.push('…');
        }
        line.push_str(&format!(" {preview}"));
    }

    line
}

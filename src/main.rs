mod app;
mod config;
mod confirm;
mod error;
mod exec;
mod prompt;
mod providers;

use clap::Parser;
use error::Error;
use std::io;
use std::process::ExitCode;

const EXIT_CODES_HELP: &str = "\
Exit codes:
  0  command accepted and exited 0
  1  declined at the confirmation prompt
  2  invalid input
  3  missing API key
  4  network failure
  5  API returned an error status
  6  unparseable API response
  7  shell could not be spawned
  Any other code is the executed command's own exit status.";

#[derive(Parser)]
#[command(name = "llmwrap")]
#[command(version)]
#[command(about = "Describe a shell task in plain English and get a runnable command back")]
#[command(after_help = EXIT_CODES_HELP)]
struct Cli {
    /// Target program to generate a command for, e.g. tar or ffmpeg
    tool: String,

    /// Natural language description of the task, e.g. "extract archive.tar.gz"
    #[arg(required = true, num_args = 1..)]
    task: Vec<String>,

    /// Model to use
    #[arg(long)]
    model: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long)]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<u8, Error> {
    let request = prompt::Request::new(&cli.tool, &cli.task.join(" "))?;
    let config = config::Config::load(cli.model, cli.api_base)?;
    let provider = providers::create_provider(&config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    app::run(
        &request,
        &config,
        provider.as_ref(),
        &exec::ShellExecutor,
        &mut input,
        &mut output,
    )
    .await
}

use crate::config::Config;
use crate::confirm;
use crate::error::{Error, EXIT_DECLINED};
use crate::exec::CommandExecutor;
use crate::prompt::{self, Request};
use crate::providers::CompletionProvider;
use std::io::{BufRead, Write};

/// The whole workflow: build the prompt, fetch one command, confirm, run.
/// Returns the process exit code. Decline is a normal outcome, not an error.
pub async fn run(
    request: &Request,
    config: &Config,
    provider: &dyn CompletionProvider,
    executor: &dyn CommandExecutor,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<u8, Error> {
    let system = prompt::build_system_prompt(&request.tool, config.system_prompt.as_deref());
    let result = provider.complete(&system, &request.task).await?;

    if !confirm::confirm_execution(&result.command, config.default_answer, input, output) {
        let _ = writeln!(output, "\nAborted; command not executed.");
        return Ok(EXIT_DECLINED);
    }

    let _ = writeln!(output, "\nExecuting: {}", result.command);
    let _ = output.flush();

    let outcome = executor.run(&result.command)?;
    Ok(outcome.exit_code.clamp(0, 255) as u8)
}

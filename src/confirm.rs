use std::io::{BufRead, Write};

/// What an empty answer at the confirmation prompt means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDefault {
    Yes,
    No,
}

impl Default for ConfirmDefault {
    fn default() -> Self {
        ConfirmDefault::No
    }
}

impl ConfirmDefault {
    fn hint(self) -> &'static str {
        match self {
            ConfirmDefault::Yes => "[Y/n]",
            ConfirmDefault::No => "[y/N]",
        }
    }
}

/// Show the proposed command verbatim, then ask for a one-line yes/no answer.
///
/// Anything that is not a recognized affirmative resolves to decline, and so
/// does a failed or closed input stream. This never executes on ambiguous
/// input.
pub fn confirm_execution(
    command: &str,
    default: ConfirmDefault,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> bool {
    let _ = write!(
        output,
        "\nProposed command:\n{}\n\nRun this command? {}: ",
        command,
        default.hint()
    );
    let _ = output.flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => return false,
        Ok(_) => {}
    }

    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        "" => default == ConfirmDefault::Yes,
        _ => false,
    }
}

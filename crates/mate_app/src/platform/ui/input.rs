use super::constants::*;

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a command: replace the input and submit it.
    Link(String),
    ToggleFormat,
    Resubmit,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    if !trimmed.starts_with(':') {
        // Keep the raw text; trimming is the controller's business.
        return Command::Link(line.trim_end_matches(['\r', '\n']).to_string());
    }

    let word = trimmed.to_ascii_lowercase();
    if CMD_FORMAT.contains(&word.as_str()) {
        Command::ToggleFormat
    } else if CMD_SUBMIT.contains(&word.as_str()) {
        Command::Resubmit
    } else if CMD_HELP.contains(&word.as_str()) {
        Command::Help
    } else if CMD_QUIT.contains(&word.as_str()) {
        Command::Quit
    } else {
        Command::Unknown(trimmed.to_string())
    }
}

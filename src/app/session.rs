use crate::core::app::LocatorApp;
use crate::core::{DocumentView, FacilitySource, MapWidget};
use crate::utils::error::{LocatorError, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP: &str = "\
commands:
  search <text>             filter by name or type (no text clears the filter)
  accessible [on|off]       only show wheelchair accessible facilities (no argument toggles)
  reload                    fetch the facility list again
  select <n>                center the map on card n
  show                      render the current list again
  help                      show this text
  quit                      leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
    Flip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Accessible(Toggle),
    Reload,
    /// Zero-based card index.
    Select(usize),
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "search" | "s" => Command::Search(rest.to_string()),
        "accessible" | "a" => Command::Accessible(match rest.to_lowercase().as_str() {
            "" | "toggle" => Toggle::Flip,
            "on" | "true" | "1" => Toggle::On,
            "off" | "false" | "0" => Toggle::Off,
            other => {
                return Err(LocatorError::CommandError {
                    message: format!("expected on, off or toggle, got '{}'", other),
                })
            }
        }),
        "reload" | "r" => Command::Reload,
        "select" | "n" => {
            let number: usize = rest.parse().map_err(|_| LocatorError::CommandError {
                message: format!("expected a card number, got '{}'", rest),
            })?;
            if number == 0 {
                return Err(LocatorError::CommandError {
                    message: "card numbers start at 1".to_string(),
                });
            }
            Command::Select(number - 1)
        }
        "show" | "list" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(LocatorError::CommandError {
                message: format!("unknown command '{}'", other),
            })
        }
    };

    Ok(Some(command))
}

/// Feeds commands from `input` into the app until `quit` or end of input.
///
/// Bad commands are reported on `out` and do not end the session.
pub async fn run_session<S, M, D, R, W>(
    app: &mut LocatorApp<S, M, D>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: FacilitySource,
    M: MapWidget,
    D: DocumentView,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {}", line, e);
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        tracing::debug!("Session command: {:?}", command);
        match command {
            Command::Search(query) => {
                app.set_query(query);
            }
            Command::Accessible(Toggle::On) => {
                app.set_accessible_only(true);
            }
            Command::Accessible(Toggle::Off) => {
                app.set_accessible_only(false);
            }
            Command::Accessible(Toggle::Flip) => {
                app.toggle_accessible_only();
            }
            Command::Reload => {
                app.reload().await;
            }
            Command::Select(index) => {
                if !app.select(index) {
                    writeln!(out, "card {} has no map position", index + 1)?;
                }
            }
            Command::Show => {
                app.render();
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    Ok(())
}

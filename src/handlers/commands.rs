//! Parsing of REPL input into session events
//!
//! Plain text is typed into the search box; lines starting with `/` are commands.

use doclist_core::{ConsultationType, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text typed into the search box (not yet submitted)
    Type { text: String },
    /// Submit the search box, optionally replacing its text first
    Search { text: Option<String> },
    /// Choose an entry from the suggestion dropdown (1-based)
    Pick { position: usize },
    Consultation(ConsultationType),
    ToggleSpecialty { name: String },
    Sort(SortKey),
    /// Replace all filters with the ones in a link or query string
    Open { link: String },
    Reset,
    Filters,
    List,
    Link,
    Help,
    Exit,
    Invalid { message: String },
}

/// Parse one line of REPL input
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(body) = trimmed.strip_prefix('/') else {
        return Command::Type {
            text: trimmed.to_string(),
        };
    };

    let (name, arg) = match body.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (body, ""),
    };

    match name.to_lowercase().as_str() {
        "search" | "s" => Command::Search {
            text: (!arg.is_empty()).then(|| arg.to_string()),
        },
        "pick" | "p" => match arg.parse() {
            Ok(position) => Command::Pick { position },
            Err(_) => invalid(format!("'/pick' needs a suggestion number, got '{}'", arg)),
        },
        "consult" | "consultation" => match arg.parse() {
            Ok(consultation) => Command::Consultation(consultation),
            Err(e) => invalid(format!("{} (expected all, video or clinic)", e)),
        },
        "specialty" | "sp" => {
            if arg.is_empty() {
                invalid("'/specialty' needs a specialty name".to_string())
            } else {
                Command::ToggleSpecialty {
                    name: arg.to_string(),
                }
            }
        }
        "sort" => match arg.parse() {
            Ok(sort) => Command::Sort(sort),
            Err(e) => invalid(format!("{} (expected none, fees or experience)", e)),
        },
        "open" => Command::Open {
            link: arg.to_string(),
        },
        "reset" => Command::Reset,
        "filters" | "f" => Command::Filters,
        "list" | "ls" => Command::List,
        "link" => Command::Link,
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Exit,
        other => invalid(format!("unknown command '/{}'", other)),
    }
}

fn invalid(message: String) -> Command {
    Command::Invalid { message }
}

pub const HELP_TEXT: &str = "\
Type a name to see suggestions, then:
  /search [text]          submit the search box (or search for text)
  /pick <n>               search for suggestion n
  /consult all|video|clinic
  /specialty <name>       select or deselect a specialty
  /sort none|fees|experience
  /open <link>            load filters from a shared link
  /reset                  clear all filters
  /filters                show the filter panel
  /list                   show the listing
  /link                   show the shareable link
  /quit";

//! Line-driven front end for the `marquee` binary.
//!
//! Plain lines are treated as the new input text; lines starting with `:`
//! are commands. Rendering is plain text built from [`SearchState`].

use thiserror::Error;

use crate::domains::detail::DetailView;
use crate::domains::search::{
    InputSelection, Message, ScrollViewport, SearchState,
};

pub const HELP: &str = "\
Type to search. Commands:
  :focus            focus the input (empty input shows recent picks)
  :more             load the next page
  :scroll T V C     report scroll_top, viewport and content height
  :pick N           select suggestion N
  :enter TEXT       commit TEXT without picking a suggestion
  :close            close the detail view
  :help             show this help
  :quit             exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Query(String),
    Focus,
    More,
    Scroll(ScrollViewport),
    Pick(usize),
    Enter(String),
    Close,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command ':{0}' (try :help)")]
    Unknown(String),
    #[error("':{command}' expects {expected}")]
    BadArguments {
        command: &'static str,
        expected: &'static str,
    },
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Query(line.to_string()));
    };

    let (name, args) = rest
        .split_once(char::is_whitespace)
        .map(|(name, args)| (name, args.trim()))
        .unwrap_or((rest, ""));

    match name {
        "focus" => Ok(Command::Focus),
        "more" => Ok(Command::More),
        "close" => Ok(Command::Close),
        "help" => Ok(Command::Help),
        "quit" | "q" => Ok(Command::Quit),
        "enter" => Ok(Command::Enter(args.to_string())),
        "pick" => args
            .parse::<usize>()
            .ok()
            .filter(|index| *index > 0)
            .map(Command::Pick)
            .ok_or(CommandError::BadArguments {
                command: "pick",
                expected: "a suggestion number starting at 1",
            }),
        "scroll" => parse_viewport(args).map(Command::Scroll).ok_or(
            CommandError::BadArguments {
                command: "scroll",
                expected: "three numbers: scroll_top viewport content",
            },
        ),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_viewport(args: &str) -> Option<ScrollViewport> {
    let values: Vec<f32> = args
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    match values.as_slice() {
        [top, viewport, content] => {
            Some(ScrollViewport::new(*top, *viewport, *content))
        }
        _ => None,
    }
}

impl Command {
    /// Translate into a domain message. `None` for commands handled by the
    /// shell itself and for picks outside the current list.
    pub fn into_message(self, state: &SearchState) -> Option<Message> {
        match self {
            Command::Query(text) => Some(Message::QueryChanged(text)),
            Command::Focus => Some(Message::InputFocused),
            Command::More => Some(Message::LoadMore),
            Command::Scroll(viewport) => Some(Message::ListScrolled(viewport)),
            Command::Pick(index) => index
                .checked_sub(1)
                .and_then(|index| state.store.get(index))
                .cloned()
                .map(|item| Message::Select(InputSelection::Suggestion(item))),
            Command::Enter(text) => {
                Some(Message::Select(InputSelection::FreeText(text)))
            }
            Command::Close => Some(Message::DismissSelection),
            Command::Help | Command::Quit => None,
        }
    }
}

pub fn render(state: &SearchState) -> String {
    let mut lines = vec![format!("> {}", state.query)];

    for (index, item) in state.store.items().iter().enumerate() {
        let marker = if state.is_recent_entry(item) {
            "  (recent)"
        } else {
            ""
        };
        lines.push(format!("  {:>2}. {}{}", index + 1, item.name, marker));
    }
    if state.is_fetching() {
        lines.push("  ...searching".to_string());
    } else if state.has_more() {
        lines.push("  (more, :more or scroll)".to_string());
    }

    if let Some(error) = &state.error {
        lines.push(format!("! {error}"));
    }

    if let Some(id) = state.loading_detail {
        lines.push(format!("[loading item {id}]"));
    } else if let Some(detail) = &state.selection {
        lines.push(String::new());
        lines.extend(
            DetailView::from_detail(detail)
                .render_lines()
                .into_iter()
                .map(|line| format!("| {line}")),
        );
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use marquee_model::{ItemDetail, ItemSuggestion};

    use super::*;
    use crate::domains::search::RecentItems;

    #[test]
    fn plain_text_is_a_query() {
        assert_eq!(
            parse_command("the matrix\n"),
            Ok(Command::Query("the matrix".into()))
        );
        assert_eq!(parse_command(""), Ok(Command::Query(String::new())));
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(parse_command(":pick 2"), Ok(Command::Pick(2)));
        assert_eq!(
            parse_command(":enter heat"),
            Ok(Command::Enter("heat".into()))
        );
        assert_eq!(
            parse_command(":scroll 380 100 500"),
            Ok(Command::Scroll(ScrollViewport::new(380.0, 100.0, 500.0)))
        );
        assert_eq!(parse_command(":q"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse_command(":pick 0"),
            Err(CommandError::BadArguments { command: "pick", .. })
        ));
        assert!(matches!(
            parse_command(":scroll 1 2"),
            Err(CommandError::BadArguments { command: "scroll", .. })
        ));
        assert_eq!(
            parse_command(":bogus"),
            Err(CommandError::Unknown("bogus".into()))
        );
    }

    #[test]
    fn pick_maps_to_store_entry() {
        let mut state = SearchState::default();
        state.store.replace(vec![ItemSuggestion::new(5, "X")]);

        assert!(matches!(
            Command::Pick(1).into_message(&state),
            Some(Message::Select(InputSelection::Suggestion(ref item))) if item.name == "X"
        ));
        assert!(Command::Pick(2).into_message(&state).is_none());
        assert!(Command::Pick(0).into_message(&state).is_none());
    }

    #[test]
    fn render_marks_recent_and_shows_detail() {
        let mut state =
            SearchState::with_recent(RecentItems::from_items([ItemSuggestion::new(1, "Alien")]));
        state.store.replace(state.recent.as_suggestions());
        state.showing_recent = true;
        state.selection = Some(ItemDetail::new(1, "Alien"));

        let out = render(&state);

        assert!(out.contains(" 1. Alien  (recent)"));
        assert!(out.contains("| Alien"));
    }
}

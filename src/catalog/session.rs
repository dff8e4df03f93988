// file: src/catalog/session.rs
// description: interactive browse session driven by filter-change commands

use crate::catalog::view::{SortColumn, SortDirection, SortSpec};
use crate::models::BookFilters;

pub const HELP: &str = "\
Commands:
  search <text>         match title or author (empty clears)
  genre <tag>           exact tag match (empty clears)
  language <language>   exact language match (empty clears)
  sort <title|author|language> [asc|desc]
  sort off              restore collection order
  clear                 remove all filters
  genres | languages    list facet values
  help                  show this message
  quit                  leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    Genre(String),
    Language(String),
    Sort(Option<SortSpec>),
    Clear,
    ListGenres,
    ListLanguages,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "search" | "s" => Ok(Self::Search(rest.to_string())),
            "genre" | "g" => Ok(Self::Genre(rest.to_string())),
            "language" | "lang" | "l" => Ok(Self::Language(rest.to_string())),
            "sort" => parse_sort(rest).map(Self::Sort),
            "clear" => Ok(Self::Clear),
            "genres" => Ok(Self::ListGenres),
            "languages" => Ok(Self::ListLanguages),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            "" => Err("empty command, type 'help' for usage".to_string()),
            other => Err(format!("unknown command '{}', type 'help' for usage", other)),
        }
    }

    /// Whether applying this command can change the rendered book list.
    pub fn changes_view(&self) -> bool {
        matches!(
            self,
            Self::Search(_) | Self::Genre(_) | Self::Language(_) | Self::Sort(_) | Self::Clear
        )
    }
}

fn parse_sort(args: &str) -> Result<Option<SortSpec>, String> {
    let mut parts = args.split_whitespace();
    let column = match parts.next() {
        Some("off") | Some("none") => return Ok(None),
        Some(column) => column.parse::<SortColumn>()?,
        None => return Err("usage: sort <title|author|language> [asc|desc]".to_string()),
    };

    let direction = match parts.next().map(str::to_lowercase).as_deref() {
        None | Some("asc") => SortDirection::Ascending,
        Some("desc") => SortDirection::Descending,
        Some(other) => return Err(format!("unknown sort direction '{}'", other)),
    };

    Ok(Some(SortSpec { column, direction }))
}

/// Filter and sort state for one session. Each command replaces the state
/// with a new value rather than editing it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseSession {
    pub filters: BookFilters,
    pub sort: Option<SortSpec>,
}

impl BrowseSession {
    pub fn new(filters: BookFilters, sort: Option<SortSpec>) -> Self {
        Self { filters, sort }
    }

    pub fn apply(&self, command: &SessionCommand) -> Self {
        match command {
            SessionCommand::Search(text) => Self {
                filters: self.filters.with_search(text.as_str()),
                ..self.clone()
            },
            SessionCommand::Genre(genre) => Self {
                filters: self.filters.with_genre(genre.as_str()),
                ..self.clone()
            },
            SessionCommand::Language(language) => Self {
                filters: self.filters.with_language(language.as_str()),
                ..self.clone()
            },
            SessionCommand::Sort(sort) => Self {
                sort: *sort,
                ..self.clone()
            },
            SessionCommand::Clear => Self {
                filters: BookFilters::cleared(),
                ..self.clone()
            },
            SessionCommand::ListGenres
            | SessionCommand::ListLanguages
            | SessionCommand::Help
            | SessionCommand::Quit => self.clone(),
        }
    }
}

use pixels_core::FilterKey;

/// One line of REPL input, standing in for a touch gesture on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Keystrokes into the search box (debounced before dispatch).
    Search(String),
    /// The clear button next to the search box.
    Clear,
    /// Category chip tap; `None` deselects.
    Category(Option<String>),
    /// Set one filter in the filters modal and apply.
    Filter(FilterKey, String),
    /// Dismiss one active-filter chip.
    Unfilter(FilterKey),
    /// Reset button in the filters modal.
    Reset,
    /// Scroll to the bottom of the grid.
    More,
    /// Re-render the current grid.
    Show,
    /// Download the nth accumulated photo.
    Save(usize),
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "search" => Ok(Command::Search(rest.to_string())),
        "clear" => Ok(Command::Clear),
        "category" => match rest {
            "" => Err("usage: category <name|none>".to_string()),
            "none" => Ok(Command::Category(None)),
            name => Ok(Command::Category(Some(name.to_string()))),
        },
        "filter" => {
            let (key, value) = rest
                .split_once(char::is_whitespace)
                .ok_or("usage: filter <order|orientation|image_type|colors> <value>")?;
            let key = FilterKey::from_param(key).ok_or_else(|| format!("unknown filter {key}"))?;
            Ok(Command::Filter(key, value.trim().to_string()))
        }
        "unfilter" => {
            let key =
                FilterKey::from_param(rest).ok_or_else(|| format!("unknown filter {rest}"))?;
            Ok(Command::Unfilter(key))
        }
        "reset" => Ok(Command::Reset),
        "more" => Ok(Command::More),
        "show" => Ok(Command::Show),
        "save" => rest
            .parse::<usize>()
            .map(Command::Save)
            .map_err(|_| "usage: save <photo number>".to_string()),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Ok(Command::Show),
        other => Err(format!("unknown command {other}; try help")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_with_spaces() {
        assert_eq!(
            parse("search sunset beach"),
            Ok(Command::Search("sunset beach".to_string()))
        );
    }

    #[test]
    fn parses_filter_key_and_value() {
        assert_eq!(
            parse("filter colors red"),
            Ok(Command::Filter(FilterKey::Colors, "red".to_string()))
        );
        assert!(parse("filter price high").is_err());
    }

    #[test]
    fn parses_category_deselection() {
        assert_eq!(parse("category none"), Ok(Command::Category(None)));
    }

    #[test]
    fn rejects_unknown_words() {
        assert!(parse("scroll").is_err());
    }
}

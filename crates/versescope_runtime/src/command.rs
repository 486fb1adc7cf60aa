//! Menu commands.

/// A command entered at the explorer menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `wf` - word frequency explorer
    WordFrequency,
    /// `wl` - word location explorer
    WordLocation,
    /// `pf` - print every word with its frequency
    PrintFrequencies,
    /// `all` - print every verse
    PrintAll,
    /// Blank input - leave the explorer
    Quit,
    /// Anything else
    Unknown(String),
}

impl Command {
    /// Menu entries in display order, as `(keyword, description)`.
    pub const MENU: [(&'static str, &'static str); 4] = [
        ("wf", "word frequency explorer"),
        ("wl", "word location explorer"),
        ("pf", "print word frequencies"),
        ("all", "print all verses"),
    ];

    /// Parses raw menu input. Case and surrounding whitespace are ignored.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let command = input.trim().to_lowercase();
        match command.as_str() {
            "" => Self::Quit,
            "wf" => Self::WordFrequency,
            "wl" => Self::WordLocation,
            "pf" => Self::PrintFrequencies,
            "all" => Self::PrintAll,
            _ => Self::Unknown(command),
        }
    }

    /// Menu keywords, used for tab completion.
    #[must_use]
    pub fn keywords() -> Vec<String> {
        Self::MENU.iter().map(|(kw, _)| (*kw).to_string()).collect()
    }
}

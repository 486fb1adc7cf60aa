//! The interactive explorer loop.

use std::io::{self, Write};

use tracing::debug;
use versescope_foundation::Result;
use versescope_index::{CorpusIndex, WordTokenizer};

use crate::command::Command;
use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::format;
use crate::pacing::Pacer;

/// The interactive explorer.
///
/// Owns the built index and answers menu commands until the user enters a
/// blank command or closes the input.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = io::Stdout> {
    /// The line editor for input.
    editor: E,

    /// The read-only word index.
    index: CorpusIndex,

    /// Where explorer output goes.
    out: W,

    /// Labels, limits, and pacing.
    config: RuntimeConfig,

    /// Listing pacing derived from `config`.
    pacer: Pacer,
}

impl Repl<RustylineEditor, io::Stdout> {
    /// Creates a new explorer with the default rustyline editor on stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(index: CorpusIndex) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, index, io::stdout()))
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Creates a new explorer with the given editor and output.
    pub fn with_editor(editor: E, index: CorpusIndex, out: W) -> Self {
        let config = RuntimeConfig::default();
        Self {
            editor,
            index,
            out,
            pacer: Pacer::new(config.pacing),
            config,
        }
    }

    /// Sets the configuration for this explorer.
    #[must_use]
    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.pacer = Pacer::new(config.pacing);
        self.config = config;
        self
    }

    /// Returns the index being explored.
    #[must_use]
    pub const fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Returns the output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Runs the menu loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or the output cannot
    /// be written (e.g. a closed pipe). Either failure ends the loop.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner()?;
        }

        while self.read_eval_print()? {}

        writeln!(self.out, "\nGoodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    /// Executes one menu iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        self.print_menu()?;

        let prompt = self.config.prompt.clone();
        let line = match self.editor.read_line(&prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                writeln!(self.out)?;
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let command = Command::parse(&line);
        if command != Command::Quit {
            self.editor.add_history(line.trim());
        }

        self.execute(&command)
    }

    /// Executes a single menu command.
    ///
    /// Returns `Ok(false)` if the command leaves the explorer.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn execute(&mut self, command: &Command) -> Result<bool> {
        debug!(?command, "menu command");

        match command {
            Command::WordFrequency => self.word_frequency_explorer()?,
            Command::WordLocation => self.word_location_explorer()?,
            Command::PrintFrequencies => self.print_word_frequencies()?,
            Command::PrintAll => self.print_all_verses()?,
            Command::Quit => return Ok(false),
            Command::Unknown(_) => writeln!(self.out, "Unknown command.")?,
        }

        Ok(true)
    }

    /// `wf`: summary statistics, then count lookups until a blank word.
    fn word_frequency_explorer(&mut self) -> Result<()> {
        let stats = self.index.stats();
        writeln!(self.out, "Unique word count: {}", format::count(stats.unique_words))?;
        writeln!(self.out, "Total word count: {}", format::count(stats.total_words))?;
        writeln!(self.out, "Total verse count: {}", format::count(stats.total_verses))?;
        writeln!(self.out)?;
        writeln!(self.out)?;

        self.word_loop(|repl, key| repl.print_frequency(key).map(|_| ()))
    }

    /// `wl`: count lookup followed by every verse containing the word.
    fn word_location_explorer(&mut self) -> Result<()> {
        self.word_loop(|repl, key| {
            if repl.print_frequency(key)? {
                repl.print_locations(key)?;
            }
            Ok(())
        })
    }

    /// Reads words until a blank line, Ctrl+C, or EOF, calling `on_word`
    /// with each normalized word. Completion offers corpus words meanwhile.
    fn word_loop(&mut self, on_word: impl FnMut(&mut Self, &str) -> Result<()>) -> Result<()> {
        let mut vocabulary: Vec<String> = self.index.words().map(str::to_string).collect();
        vocabulary.sort_unstable();
        self.editor.set_keywords(vocabulary);

        let result = self.read_words(on_word);

        self.editor.set_keywords(Command::keywords());
        result
    }

    fn read_words(&mut self, mut on_word: impl FnMut(&mut Self, &str) -> Result<()>) -> Result<()> {
        let prompt = self.config.word_prompt.clone();

        loop {
            self.out.flush()?;
            let line = match self.editor.read_line(&prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted | ReadResult::Eof => return Ok(()),
            };

            let key = WordTokenizer::normalize_query(&line);
            if key.is_empty() {
                return Ok(());
            }
            self.editor.add_history(line.trim());

            on_word(self, &key)?;
        }
    }

    /// Prints the found/not-found line for a normalized word.
    ///
    /// Returns true if the word occurs in the corpus.
    fn print_frequency(&mut self, key: &str) -> Result<bool> {
        let label = &self.config.corpus_label;
        let occurrences = self.index.frequency_of(key);

        if occurrences == 0 {
            writeln!(self.out, "{}", format::not_found(key, label))?;
            return Ok(false);
        }

        writeln!(self.out, "{}", format::found(key, occurrences, label))?;
        writeln!(self.out)?;
        Ok(true)
    }

    /// Prints each verse containing `key`, up to the configured limit.
    fn print_locations(&mut self, key: &str) -> Result<()> {
        let limit = self.config.location_limit.unwrap_or(usize::MAX);
        let mut shown = 0;

        for location in self.index.locations_of(key) {
            if shown == limit {
                writeln!(
                    self.out,
                    "(more locations not shown; limit is {})",
                    format::count(limit)
                )?;
                writeln!(self.out)?;
                break;
            }
            writeln!(self.out, "{location}")?;
            writeln!(self.out, "{}", location.text)?;
            writeln!(self.out)?;
            shown += 1;
        }

        debug!(word = key, shown, "printed locations");
        Ok(())
    }

    /// `pf`: every word and its count, alphabetically.
    fn print_word_frequencies(&mut self) -> Result<()> {
        for (word, occurrences) in self.index.sorted_frequencies() {
            writeln!(self.out, "{word}: {}", format::count(occurrences))?;
            self.out.flush()?;
            self.pacer.after_line();
        }
        Ok(())
    }

    /// `all`: every verse in document order.
    fn print_all_verses(&mut self) -> Result<()> {
        for verse in self.index.all_verses() {
            writeln!(self.out, "{verse}")?;
            writeln!(self.out, "{}", verse.text)?;
            writeln!(self.out)?;
            self.out.flush()?;
            self.pacer.after_verse();
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        for (keyword, description) in Command::MENU {
            writeln!(self.out, "{keyword} = {description}")?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    /// Prints the welcome banner.
    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.out, "\x1b[1;36mVerseScope v{}\x1b[0m", env!("CARGO_PKG_VERSION"))?;
        writeln!(
            self.out,
            "{} verses loaded. A blank line goes back; Ctrl+D exits.\n",
            format::count(self.index.total_verse_count())
        )?;
        self.out.flush()?;
        Ok(())
    }
}

//! Terminal window state: transcript, input line and the shell history that lives with it.

use rand::rngs::StdRng;

use crate::kernel::files::FileStore;
use crate::kernel::services::ports::{Clock, ShellConfig};
use crate::kernel::settings::SettingsStore;
use crate::kernel::shell::{self, History, Line, Output, ShellContext, ShellRequest};

const DEFAULT_SCROLLBACK_LINES: usize = 5000;

pub const WELCOME: [&str; 2] = [
    "Welcome to ZeroDesk!",
    "Type help or help command for details.",
];

#[derive(Debug, Clone)]
pub struct TerminalSession {
    transcript: Vec<Line>,
    history: History,
    input: String,
    scrollback: usize,
    /// Lines scrolled up from the bottom.
    scroll_offset: usize,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession {
    /// A fresh session showing the welcome banner.
    pub fn new() -> Self {
        Self {
            transcript: WELCOME.iter().map(|line| Line::plain(*line)).collect(),
            history: History::new(),
            input: String::new(),
            scrollback: DEFAULT_SCROLLBACK_LINES,
            scroll_offset: 0,
        }
    }

    pub fn transcript(&self) -> &[Line] {
        &self.transcript
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn insert_text(&mut self, text: &str) -> bool {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        if text.is_empty() {
            return false;
        }
        self.input.push_str(&text);
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        self.input.pop().is_some()
    }

    pub fn recall_previous(&mut self) -> bool {
        match self.history.recall_previous() {
            Some(line) => {
                self.input = line.to_string();
                true
            }
            None => false,
        }
    }

    pub fn recall_next(&mut self) -> bool {
        match self.history.recall_next() {
            Some(line) => {
                self.input = line.to_string();
                true
            }
            None => false,
        }
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        let max = self.transcript.len().saturating_sub(1);
        let next = self.scroll_offset.saturating_add_signed(delta).min(max);
        let changed = next != self.scroll_offset;
        self.scroll_offset = next;
        changed
    }

    /// Runs the current input line. Blank input is dropped without a history entry. The
    /// returned requests are for the desktop; transcript clearing is handled here.
    pub fn submit(
        &mut self,
        files: &mut FileStore,
        settings: &mut SettingsStore,
        rng: &mut StdRng,
        clock: &dyn Clock,
        config: &ShellConfig,
    ) -> Vec<ShellRequest> {
        let line = std::mem::take(&mut self.input).trim().to_string();
        if line.is_empty() {
            return Vec::new();
        }
        self.history.push(line.clone());
        self.transcript.push(Line::echo(&line));
        self.scroll_offset = 0;

        let words = shell::tokenize(&line);
        let mut ctx = ShellContext {
            files,
            settings,
            history: &self.history,
            rng,
            clock,
            config,
        };
        let Output { lines, requests } = shell::execute(&mut ctx, &words);

        let mut forwarded = Vec::with_capacity(requests.len());
        for request in requests {
            match request {
                ShellRequest::ClearTranscript => self.transcript.clear(),
                other => forwarded.push(other),
            }
        }
        self.transcript.extend(lines);
        self.trim_scrollback();
        forwarded
    }

    fn trim_scrollback(&mut self) {
        let overflow = self.transcript.len().saturating_sub(self.scrollback);
        if overflow > 0 {
            self.transcript.drain(..overflow);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/terminal.rs"]
mod tests;

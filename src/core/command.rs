//! Semantic UI commands.
//!
//! - Command: what a key press means, independent of the key itself
//! - Resolved per context by the key binding service
//! - `Custom` is the extension point for user bindings that name unknown commands

use crate::kernel::AppKind;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== Desktop ====================
    Quit,
    FocusNextWindow,
    CloseWindow,
    OpenApp(AppKind),

    // ==================== Text input ====================
    Submit,
    DeleteBackward,
    InsertNewline,

    // ==================== Terminal ====================
    HistoryPrevious,
    HistoryNext,

    // ==================== Explorer ====================
    SelectPrevious,
    SelectNext,

    // ==================== Extension point ====================
    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::Quit => "quit",
            Command::FocusNextWindow => "focusNextWindow",
            Command::CloseWindow => "closeWindow",
            Command::OpenApp(AppKind::Terminal) => "openTerminal",
            Command::OpenApp(AppKind::Explorer) => "openExplorer",
            Command::OpenApp(AppKind::Editor) => "openEditor",
            Command::OpenApp(AppKind::Calculator) => "openCalculator",
            Command::OpenApp(AppKind::Browser) => "openBrowser",
            Command::OpenApp(AppKind::Settings) => "openSettings",
            Command::Submit => "submit",
            Command::DeleteBackward => "deleteBackward",
            Command::InsertNewline => "insertNewline",
            Command::HistoryPrevious => "historyPrevious",
            Command::HistoryNext => "historyNext",
            Command::SelectPrevious => "selectPrevious",
            Command::SelectNext => "selectNext",
            Command::Custom(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "quit" => Command::Quit,
            "focusNextWindow" => Command::FocusNextWindow,
            "closeWindow" => Command::CloseWindow,
            "openTerminal" => Command::OpenApp(AppKind::Terminal),
            "openExplorer" => Command::OpenApp(AppKind::Explorer),
            "openEditor" => Command::OpenApp(AppKind::Editor),
            "openCalculator" => Command::OpenApp(AppKind::Calculator),
            "openBrowser" => Command::OpenApp(AppKind::Browser),
            "openSettings" => Command::OpenApp(AppKind::Settings),
            "submit" => Command::Submit,
            "deleteBackward" => Command::DeleteBackward,
            "insertNewline" => Command::InsertNewline,
            "historyPrevious" => Command::HistoryPrevious,
            "historyNext" => Command::HistoryNext,
            "selectPrevious" => Command::SelectPrevious,
            "selectNext" => Command::SelectNext,
            other => Command::Custom(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;

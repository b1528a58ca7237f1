//! The shell's fixed command table.

use super::exec::{self, Handler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellCommand {
    Help,
    Ls,
    Find,
    Cat,
    Head,
    Tail,
    Touch,
    Write,
    Append,
    Rm,
    Mv,
    Cp,
    Open,
    App,
    Browser,
    Settings,
    Calc,
    Theme,
    Accent,
    Dock,
    Fontsize,
    Date,
    Time,
    Random,
    Math,
    Clear,
    History,
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpSection {
    Files,
    AppsAndSystem,
}

impl HelpSection {
    pub const ALL: [HelpSection; 2] = [HelpSection::Files, HelpSection::AppsAndSystem];

    pub fn title(self) -> &'static str {
        match self {
            HelpSection::Files => "Files",
            HelpSection::AppsAndSystem => "Apps & system",
        }
    }
}

impl ShellCommand {
    pub const ALL: [ShellCommand; 28] = [
        ShellCommand::Help,
        ShellCommand::Ls,
        ShellCommand::Find,
        ShellCommand::Cat,
        ShellCommand::Head,
        ShellCommand::Tail,
        ShellCommand::Touch,
        ShellCommand::Write,
        ShellCommand::Append,
        ShellCommand::Rm,
        ShellCommand::Mv,
        ShellCommand::Cp,
        ShellCommand::Open,
        ShellCommand::App,
        ShellCommand::Browser,
        ShellCommand::Settings,
        ShellCommand::Calc,
        ShellCommand::Theme,
        ShellCommand::Accent,
        ShellCommand::Dock,
        ShellCommand::Fontsize,
        ShellCommand::Date,
        ShellCommand::Time,
        ShellCommand::Random,
        ShellCommand::Math,
        ShellCommand::Clear,
        ShellCommand::History,
        ShellCommand::About,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShellCommand::Help => "help",
            ShellCommand::Ls => "ls",
            ShellCommand::Find => "find",
            ShellCommand::Cat => "cat",
            ShellCommand::Head => "head",
            ShellCommand::Tail => "tail",
            ShellCommand::Touch => "touch",
            ShellCommand::Write => "write",
            ShellCommand::Append => "append",
            ShellCommand::Rm => "rm",
            ShellCommand::Mv => "mv",
            ShellCommand::Cp => "cp",
            ShellCommand::Open => "open",
            ShellCommand::App => "app",
            ShellCommand::Browser => "browser",
            ShellCommand::Settings => "settings",
            ShellCommand::Calc => "calc",
            ShellCommand::Theme => "theme",
            ShellCommand::Accent => "accent",
            ShellCommand::Dock => "dock",
            ShellCommand::Fontsize => "fontsize",
            ShellCommand::Date => "date",
            ShellCommand::Time => "time",
            ShellCommand::Random => "random",
            ShellCommand::Math => "math",
            ShellCommand::Clear => "clear",
            ShellCommand::History => "history",
            ShellCommand::About => "about",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    pub fn usage(self) -> &'static str {
        match self {
            ShellCommand::Help => "help [command]",
            ShellCommand::Ls => "ls",
            ShellCommand::Find => "find <query>",
            ShellCommand::Cat => "cat <name>",
            ShellCommand::Head => "head <name> [n]",
            ShellCommand::Tail => "tail <name> [n]",
            ShellCommand::Touch => "touch <name>",
            ShellCommand::Write => "write <name> <text>",
            ShellCommand::Append => "append <name> <text>",
            ShellCommand::Rm => "rm <name>",
            ShellCommand::Mv => "mv <old> <new>",
            ShellCommand::Cp => "cp <src> <dst>",
            ShellCommand::Open => "open <name>",
            ShellCommand::App => "app <terminal|explorer|editor|calculator|browser|settings>",
            ShellCommand::Browser => "browser <url>",
            ShellCommand::Settings => "settings",
            ShellCommand::Calc => "calc",
            ShellCommand::Theme => "theme <dark|light>",
            ShellCommand::Accent => "accent <#rrggbb>",
            ShellCommand::Dock => "dock <top|bottom>",
            ShellCommand::Fontsize => "fontsize <px>",
            ShellCommand::Date => "date",
            ShellCommand::Time => "time",
            ShellCommand::Random => "random [max]",
            ShellCommand::Math => "math <expr>",
            ShellCommand::Clear => "clear",
            ShellCommand::History => "history",
            ShellCommand::About => "about",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ShellCommand::Help => "List commands, or show details for one command.",
            ShellCommand::Ls => "List file names in the virtual storage.",
            ShellCommand::Find => "Find files whose name contains <query> (case-insensitive).",
            ShellCommand::Cat => "Print file contents.",
            ShellCommand::Head => "First n lines (default 10).",
            ShellCommand::Tail => "Last n lines (default 10).",
            ShellCommand::Touch => "Create an empty file (no overwrite).",
            ShellCommand::Write => "Overwrite file with text. Use quotes for spaces.",
            ShellCommand::Append => "Append a new line of text.",
            ShellCommand::Rm => "Delete a file.",
            ShellCommand::Mv => "Rename a file.",
            ShellCommand::Cp => "Copy a file.",
            ShellCommand::Open => "Open the file in the Editor window (creates if missing).",
            ShellCommand::App => "Open an app window.",
            ShellCommand::Browser => "Open URL in the Browser app.",
            ShellCommand::Settings => "Open Settings window.",
            ShellCommand::Calc => "Open Calculator window.",
            ShellCommand::Theme => "Switch overall theme.",
            ShellCommand::Accent => "Change accent color.",
            ShellCommand::Dock => "Move the dock.",
            ShellCommand::Fontsize => "Set base font size (10-30).",
            ShellCommand::Date => "Show current date.",
            ShellCommand::Time => "Show current time.",
            ShellCommand::Random => "Random integer in [0, max).",
            ShellCommand::Math => "Evaluate an arithmetic expression.",
            ShellCommand::Clear => "Clear the screen.",
            ShellCommand::History => "List recent commands. Use Arrow Up/Down to recall.",
            ShellCommand::About => "About this desktop.",
        }
    }

    pub fn examples(self) -> &'static [&'static str] {
        match self {
            ShellCommand::Find => &["find txt"],
            ShellCommand::Head => &["head notes.txt 5"],
            ShellCommand::Tail => &["tail log.txt 20"],
            ShellCommand::Write => &["write todo.txt \"buy milk\""],
            ShellCommand::Append => &["append todo.txt \"call mom\""],
            ShellCommand::Open => &["open notes.txt"],
            ShellCommand::Browser => &["browser example.com"],
            ShellCommand::Accent => &["accent #ff66cc"],
            ShellCommand::Fontsize => &["fontsize 18"],
            ShellCommand::Random => &["random 10"],
            ShellCommand::Math => &["math (2+3)*10"],
            _ => &[],
        }
    }

    /// Section in the `help` summary; `help` itself is not listed there.
    pub fn section(self) -> Option<HelpSection> {
        match self {
            ShellCommand::Help => None,
            ShellCommand::Ls
            | ShellCommand::Find
            | ShellCommand::Cat
            | ShellCommand::Head
            | ShellCommand::Tail
            | ShellCommand::Touch
            | ShellCommand::Write
            | ShellCommand::Append
            | ShellCommand::Rm
            | ShellCommand::Mv
            | ShellCommand::Cp
            | ShellCommand::Open => Some(HelpSection::Files),
            _ => Some(HelpSection::AppsAndSystem),
        }
    }

    pub fn handler(self) -> Handler {
        match self {
            ShellCommand::Help => exec::help,
            ShellCommand::Ls => exec::ls,
            ShellCommand::Find => exec::find,
            ShellCommand::Cat => exec::cat,
            ShellCommand::Head => exec::head,
            ShellCommand::Tail => exec::tail,
            ShellCommand::Touch => exec::touch,
            ShellCommand::Write => exec::write,
            ShellCommand::Append => exec::append,
            ShellCommand::Rm => exec::rm,
            ShellCommand::Mv => exec::mv,
            ShellCommand::Cp => exec::cp,
            ShellCommand::Open => exec::open,
            ShellCommand::App => exec::app,
            ShellCommand::Browser => exec::browser,
            ShellCommand::Settings => exec::settings,
            ShellCommand::Calc => exec::calc,
            ShellCommand::Theme => exec::theme,
            ShellCommand::Accent => exec::accent,
            ShellCommand::Dock => exec::dock,
            ShellCommand::Fontsize => exec::fontsize,
            ShellCommand::Date => exec::date,
            ShellCommand::Time => exec::time,
            ShellCommand::Random => exec::random,
            ShellCommand::Math => exec::math,
            ShellCommand::Clear => exec::clear,
            ShellCommand::History => exec::history,
            ShellCommand::About => exec::about,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/shell/command.rs"]
mod tests;

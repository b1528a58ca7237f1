//! Command handlers and the dispatcher that routes tokenized lines to them.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::Rng;
use regex::Regex;
use thiserror::Error;

use super::command::{HelpSection, ShellCommand};
use super::history::History;
use super::math::{self, MathError};
use super::output::{Line, Output, ShellRequest};
use crate::kernel::files::{FileError, FileStore};
use crate::kernel::services::ports::clock::Clock;
use crate::kernel::services::ports::config::ShellConfig;
use crate::kernel::services::ports::settings::{DockPosition, SettingsPatch, Theme};
use crate::kernel::settings::SettingsStore;
use crate::kernel::window::AppKind;

pub const UNKNOWN_COMMAND: &str = "Unknown command. Type \"help\" for a list of commands.";

const HELP_INTRO: &str =
    "Use: help <command> for details, quotes for multi-word text, Arrow Up/Down to navigate history.";
const HELP_USAGE_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Missing arguments; carries the full usage hint.
    #[error("{0}")]
    Usage(String),
    #[error("Not found")]
    NotFound(String),
    #[error("Destination exists")]
    Conflict(String),
    /// An argument was present but rejected; carries the usage hint.
    #[error("{0}")]
    Validation(String),
    #[error("Math error")]
    Evaluation(#[from] MathError),
    #[error("No such command")]
    UnknownHelpTopic(String),
}

impl From<FileError> for CommandError {
    fn from(err: FileError) -> Self {
        match err {
            FileError::NotFound(name) => CommandError::NotFound(name),
            FileError::Conflict(name) => CommandError::Conflict(name),
        }
    }
}

pub type CommandResult = Result<Output, CommandError>;

pub type Handler = fn(&mut ShellContext<'_>, &[String]) -> CommandResult;

/// Everything a handler may read or mutate. Borrowed for the duration of one command.
pub struct ShellContext<'a> {
    pub files: &'a mut FileStore,
    pub settings: &'a mut SettingsStore,
    pub history: &'a History,
    pub rng: &'a mut StdRng,
    pub clock: &'a dyn Clock,
    pub config: &'a ShellConfig,
}

/// Runs one tokenized line. Unknown commands are not errors: they print guidance.
pub fn execute(ctx: &mut ShellContext<'_>, words: &[String]) -> Output {
    let Some((name, args)) = words.split_first() else {
        return Output::none();
    };
    let Some(command) = ShellCommand::parse(name) else {
        tracing::debug!(command = %name, "unknown shell command");
        return Output::line(Line::plain(UNKNOWN_COMMAND));
    };

    match (command.handler())(ctx, args) {
        Ok(output) => output,
        Err(err) => {
            tracing::debug!(command = command.name(), error = ?err, "shell command failed");
            Output::line(Line::error(err.to_string()))
        }
    }
}

/// Integer prefix parse: optional sign then leading digits (`"18px"` is 18). `None` when no
/// digits lead the text.
pub fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -value } else { value })
}

fn is_accent_hex(value: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new("^#?[0-9a-fA-F]{6}$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

fn arg(args: &[String], idx: usize) -> Option<&str> {
    args.get(idx).map(String::as_str)
}

fn required<'a>(args: &'a [String], idx: usize, usage: &str) -> Result<&'a str, CommandError> {
    arg(args, idx).ok_or_else(|| CommandError::Usage(format!("Usage: {usage}")))
}

fn rest(args: &[String], from: usize) -> String {
    args.get(from..).unwrap_or_default().join(" ")
}

pub(super) fn help(_ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    match arg(args, 0) {
        Some(topic) => help_one(topic),
        None => Ok(Output::line(Line::block(help_summary()))),
    }
}

fn help_summary() -> String {
    let mut text = format!("{HELP_INTRO}\n");
    for section in HelpSection::ALL {
        text.push('\n');
        text.push_str(section.title());
        text.push('\n');
        for cmd in ShellCommand::ALL
            .into_iter()
            .filter(|c| c.section() == Some(section))
        {
            text.push_str(&format!(
                "  {:<width$} {}\n",
                cmd.usage(),
                cmd.description(),
                width = HELP_USAGE_WIDTH
            ));
        }
    }
    text.trim_end().to_string()
}

/// Details for any command listed in the summary; `help` itself has none.
fn help_one(topic: &str) -> CommandResult {
    let cmd = ShellCommand::parse(topic)
        .filter(|cmd| cmd.section().is_some())
        .ok_or_else(|| CommandError::UnknownHelpTopic(topic.to_string()))?;
    let mut text = format!(
        "Command : {}\nUsage   : {}\nAbout   : {}",
        cmd.name(),
        cmd.usage(),
        cmd.description()
    );
    for (idx, example) in cmd.examples().iter().enumerate() {
        let label = if idx == 0 { "Example : " } else { "          " };
        text.push('\n');
        text.push_str(label);
        text.push_str(example);
    }
    Ok(Output::line(Line::block(text)))
}

pub(super) fn ls(ctx: &mut ShellContext<'_>, _args: &[String]) -> CommandResult {
    Ok(Output::line(Line::plain(ctx.files.names().join("  "))))
}

pub(super) fn find(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let query = rest(args, 0).to_lowercase();
    let matches: Vec<&str> = ctx
        .files
        .names()
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .collect();
    if matches.is_empty() {
        return Ok(Output::line(Line::plain("(no matches)")));
    }
    Ok(Output::line(Line::plain(matches.join("  "))))
}

pub(super) fn cat(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let name = required(args, 0, "cat <name>")?;
    let content = ctx.files.read(name)?;
    Ok(Output::line(Line::block(content)))
}

pub(super) fn head(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    slice_lines(ctx, args, "head")
}

pub(super) fn tail(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    slice_lines(ctx, args, "tail")
}

fn slice_lines(ctx: &mut ShellContext<'_>, args: &[String], which: &str) -> CommandResult {
    let name = required(args, 0, &format!("{which} <name> [lines]"))?;
    let content = ctx.files.read(name)?;
    let default = i64::try_from(ctx.config.default_line_count).unwrap_or(i64::MAX);
    let count = arg(args, 1).and_then(parse_int).unwrap_or(default).max(1);
    let count = usize::try_from(count).unwrap_or(usize::MAX);

    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let picked = if which == "head" {
        &lines[..count.min(lines.len())]
    } else {
        &lines[lines.len().saturating_sub(count)..]
    };
    Ok(Output::line(Line::block(picked.join("\n"))))
}

pub(super) fn touch(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let name = required(args, 0, "touch <name>")?;
    ctx.files.touch(name);
    Ok(Output::ok())
}

pub(super) fn write(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let name = required(args, 0, "write <name> <text>")?;
    ctx.files.write(name, &rest(args, 1));
    Ok(Output::ok())
}

pub(super) fn append(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let name = required(args, 0, "append <name> <text>")?;
    ctx.files.append(name, &rest(args, 1));
    Ok(Output::ok())
}

pub(super) fn rm(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let name = required(args, 0, "rm <name>")?;
    ctx.files.delete(name)?;
    Ok(Output::ok())
}

pub(super) fn mv(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let usage = "mv <old> <new>";
    let old = required(args, 0, usage)?;
    let new = required(args, 1, usage)?;
    ctx.files.rename(old, new)?;
    Ok(Output::ok())
}

pub(super) fn cp(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let usage = "cp <src> <dst>";
    let src = required(args, 0, usage)?;
    let dst = required(args, 1, usage)?;
    ctx.files.copy(src, dst)?;
    Ok(Output::ok())
}

pub(super) fn open(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let name = required(args, 0, "open <name>")?;
    ctx.files.touch(name);
    Ok(Output::request(ShellRequest::OpenEditor(name.to_string())))
}

pub(super) fn app(_ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let usage = ShellCommand::App.usage();
    let name = required(args, 0, usage)?;
    let kind = AppKind::parse(&name.to_ascii_lowercase())
        .ok_or_else(|| CommandError::Validation(format!("Usage: {usage}")))?;
    Ok(Output::request(ShellRequest::OpenWindow(kind)))
}

pub(super) fn browser(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let mut url = rest(args, 0);
    if url.is_empty() {
        url = ctx.config.default_browser_url.clone();
    }
    Ok(Output::request(ShellRequest::Browse(url)))
}

pub(super) fn settings(_ctx: &mut ShellContext<'_>, _args: &[String]) -> CommandResult {
    Ok(Output::request(ShellRequest::OpenWindow(AppKind::Settings)))
}

pub(super) fn calc(_ctx: &mut ShellContext<'_>, _args: &[String]) -> CommandResult {
    Ok(Output::request(ShellRequest::OpenWindow(AppKind::Calculator)))
}

fn update_settings(ctx: &mut ShellContext<'_>, patch: SettingsPatch, confirm: Line) -> Output {
    if ctx.settings.set(patch) {
        tracing::info!(settings = ?ctx.settings.get(), "settings changed from shell");
    }
    Output::line(confirm).with_request(ShellRequest::ApplySettings)
}

pub(super) fn theme(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let theme = arg(args, 0)
        .and_then(Theme::parse)
        .ok_or_else(|| CommandError::Validation("Usage: theme dark|light".to_string()))?;
    let patch = SettingsPatch {
        theme: Some(theme),
        ..SettingsPatch::default()
    };
    Ok(update_settings(
        ctx,
        patch,
        Line::success(format!("theme {}", theme.name())),
    ))
}

pub(super) fn accent(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let hex = arg(args, 0)
        .filter(|hex| is_accent_hex(hex))
        .ok_or_else(|| CommandError::Validation("Usage: accent #rrggbb".to_string()))?;
    let accent = if hex.starts_with('#') {
        hex.to_string()
    } else {
        format!("#{hex}")
    };
    let patch = SettingsPatch {
        accent: Some(accent),
        ..SettingsPatch::default()
    };
    Ok(update_settings(ctx, patch, Line::success("OK")))
}

pub(super) fn dock(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let position = arg(args, 0)
        .and_then(DockPosition::parse)
        .ok_or_else(|| CommandError::Validation("Usage: dock <top|bottom>".to_string()))?;
    let patch = SettingsPatch {
        dock_position: Some(position),
        ..SettingsPatch::default()
    };
    Ok(update_settings(
        ctx,
        patch,
        Line::success(format!("dock set to {}", position.name())),
    ))
}

pub(super) fn fontsize(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let range = ctx.config.font_size_range.clone();
    let invalid = || {
        CommandError::Validation(format!(
            "Usage: fontsize <{}..{}>",
            range.start(),
            range.end()
        ))
    };
    let px = arg(args, 0).and_then(parse_int).ok_or_else(invalid)?;
    let px = u8::try_from(px)
        .ok()
        .filter(|px| range.contains(px))
        .ok_or_else(invalid)?;
    let patch = SettingsPatch {
        font_size: Some(px),
        ..SettingsPatch::default()
    };
    Ok(update_settings(
        ctx,
        patch,
        Line::success(format!("font size {px}px")),
    ))
}

pub(super) fn date(ctx: &mut ShellContext<'_>, _args: &[String]) -> CommandResult {
    let now = ctx.clock.now();
    Ok(Output::line(Line::plain(now.format("%-m/%-d/%Y").to_string())))
}

pub(super) fn time(ctx: &mut ShellContext<'_>, _args: &[String]) -> CommandResult {
    let now = ctx.clock.now();
    Ok(Output::line(Line::plain(
        now.format("%-I:%M:%S %p").to_string(),
    )))
}

pub(super) fn random(ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let default = i64::try_from(ctx.config.default_random_max).unwrap_or(i64::MAX);
    let max = arg(args, 0).and_then(parse_int).unwrap_or(default).max(1);
    let max = u64::try_from(max).unwrap_or(1);
    let value = ctx.rng.random_range(0..max);
    Ok(Output::line(Line::plain(value.to_string())))
}

pub(super) fn math(_ctx: &mut ShellContext<'_>, args: &[String]) -> CommandResult {
    let value = math::evaluate(&rest(args, 0))?;
    Ok(Output::line(Line::plain(math::format_number(value))))
}

pub(super) fn clear(_ctx: &mut ShellContext<'_>, _args: &[String]) -> CommandResult {
    Ok(Output::request(ShellRequest::ClearTranscript))
}

pub(super) fn history(ctx: &mut ShellContext<'_>, _args: &[String]) -> CommandResult {
    if ctx.history.is_empty() {
        return Ok(Output::line(Line::plain("(empty)")));
    }
    Ok(Output {
        lines: ctx
            .history
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, line)| Line::plain(format!("{}. {line}", idx + 1)))
            .collect(),
        requests: Vec::new(),
    })
}

pub(super) fn about(_ctx: &mut ShellContext<'_>, _args: &[String]) -> CommandResult {
    Ok(Output::line(Line::plain(format!(
        "ZeroDesk {} - a simulated desktop",
        env!("CARGO_PKG_VERSION")
    ))))
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/shell/exec.rs"]
mod tests;

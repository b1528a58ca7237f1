use crate::kernel::window::AppKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The entered command, shown as `> line`.
    Echo,
    Plain,
    Success,
    Error,
    /// Preformatted multi-line text (file contents, help).
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn echo(line: &str) -> Self {
        Self::new(LineKind::Echo, format!("> {line}"))
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(LineKind::Plain, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub fn block(text: impl Into<String>) -> Self {
        Self::new(LineKind::Block, text)
    }
}

/// Work a command hands back to the desktop instead of doing itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellRequest {
    OpenWindow(AppKind),
    OpenEditor(String),
    Browse(String),
    /// Settings were changed and persisted; project them onto the surface.
    ApplySettings,
    ClearTranscript,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub lines: Vec<Line>,
    pub requests: Vec<ShellRequest>,
}

impl Output {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn line(line: Line) -> Self {
        Self {
            lines: vec![line],
            requests: Vec::new(),
        }
    }

    pub fn ok() -> Self {
        Self::line(Line::success("OK"))
    }

    pub fn request(request: ShellRequest) -> Self {
        Self {
            lines: Vec::new(),
            requests: vec![request],
        }
    }

    pub fn with_request(mut self, request: ShellRequest) -> Self {
        self.requests.push(request);
        self
    }
}

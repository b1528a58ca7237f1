use crate::core::Command;
use crate::kernel::services::ports::settings::SettingsPatch;
use crate::kernel::window::{AppKind, Point};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A resolved key binding; edit commands go to the focused window.
    RunCommand(Command),
    /// Apply persisted settings and open the default app.
    Boot,
    OpenApp(AppKind),
    OpenEditor(String),
    FocusWindow(AppKind),
    CloseWindow(AppKind),
    BeginDrag {
        kind: AppKind,
        pointer: Point,
    },
    DragTo(Point),
    EndDrag,
    /// Typed text for the focused window.
    InsertText(String),
    TerminalScroll {
        delta: isize,
    },
    ExplorerActivate(String),
    ViewerNavigate(String),
    CalculatorKey(char),
    CalculatorEvaluate,
    CalculatorClear,
    UpdateSettings(SettingsPatch),
    Tick,
}

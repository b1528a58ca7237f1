use crate::kernel::calculator::Calculator;
use crate::kernel::editor::EditorSession;
use crate::kernel::explorer::ExplorerState;
use crate::kernel::services::ports::config::Stacking;
use crate::kernel::terminal::TerminalSession;
use crate::kernel::viewer::ViewerState;
use crate::kernel::window::{AppKind, WindowManager};

/// Per-window content lives next to the window registry and is dropped with its window.
#[derive(Debug, Default)]
pub struct AppState {
    pub windows: WindowManager,
    pub terminal: Option<TerminalSession>,
    pub explorer: Option<ExplorerState>,
    pub editor: Option<EditorSession>,
    pub calculator: Option<Calculator>,
    pub viewer: Option<ViewerState>,
    pub quit_requested: bool,
}

impl AppState {
    pub fn new(stacking: Stacking) -> Self {
        Self {
            windows: WindowManager::new(stacking),
            ..Self::default()
        }
    }

    /// The topmost window receives typed text and edit commands.
    pub fn focused(&self) -> Option<AppKind> {
        self.windows.topmost()
    }

    pub(crate) fn mount(&mut self, kind: AppKind) {
        match kind {
            AppKind::Terminal => self.terminal = Some(TerminalSession::new()),
            AppKind::Explorer => self.explorer = Some(ExplorerState::new()),
            AppKind::Editor => {
                self.editor.get_or_insert_with(EditorSession::new);
            }
            AppKind::Calculator => self.calculator = Some(Calculator::new()),
            AppKind::Browser => self.viewer = Some(ViewerState::new()),
            AppKind::Settings => {}
        }
    }

    pub(crate) fn unmount(&mut self, kind: AppKind) {
        match kind {
            AppKind::Terminal => self.terminal = None,
            AppKind::Explorer => self.explorer = None,
            AppKind::Editor => self.editor = None,
            AppKind::Calculator => self.calculator = None,
            AppKind::Browser => self.viewer = None,
            AppKind::Settings => {}
        }
    }
}

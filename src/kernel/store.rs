use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::Command;
use crate::kernel::files::FileStore;
use crate::kernel::services::ports::clock::Clock;
use crate::kernel::services::ports::config::DesktopConfig;
use crate::kernel::settings::SettingsStore;
use crate::kernel::window::AppKind;

use super::{Action, AppState, Effect};

mod reducers;

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: true,
        }
    }

    fn from_flag(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn merge(&mut self, other: DispatchResult) {
        self.effects.extend(other.effects);
        self.state_changed |= other.state_changed;
    }
}

/// Owns the desktop state and both persisted stores; every mutation goes through `dispatch`.
///
/// The reducers under `store/reducers/` extend this type, one concern per file.
pub struct Store {
    state: AppState,
    files: FileStore,
    settings: SettingsStore,
    rng: StdRng,
    clock: Box<dyn Clock>,
    config: DesktopConfig,
}

impl Store {
    pub fn new(
        config: DesktopConfig,
        files: FileStore,
        settings: SettingsStore,
        clock: Box<dyn Clock>,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            state: AppState::new(config.stacking),
            files,
            settings,
            rng,
            clock,
            config,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn files(&self) -> &FileStore {
        &self.files
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::Boot => {
                let settings = self.settings.get().clone();
                let default_app = settings.default_app;
                tracing::info!(app = %default_app, "booting desktop");
                let mut result = DispatchResult::changed(vec![Effect::ApplySettings(settings)]);
                result.merge(self.open_window(default_app));
                result
            }
            Action::OpenApp(kind) => self.open_window(kind),
            Action::OpenEditor(name) => self.open_editor(name),
            Action::FocusWindow(kind) => self.focus(kind),
            Action::CloseWindow(kind) => self.close_window(kind),
            action @ (Action::BeginDrag { .. } | Action::DragTo(_) | Action::EndDrag) => {
                self.reduce_drag_action(action)
            }
            Action::InsertText(text) => self.insert_text(&text),
            Action::TerminalScroll { delta } => self.scroll_terminal(delta),
            Action::ExplorerActivate(name) => self.activate_explorer_entry(name),
            Action::ViewerNavigate(url) => self.navigate(Some(&url)),
            action @ (Action::CalculatorKey(_)
            | Action::CalculatorEvaluate
            | Action::CalculatorClear) => self.reduce_calculator_action(action),
            Action::UpdateSettings(patch) => self.update_settings(patch),
            Action::Tick => DispatchResult::unchanged(),
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        let focused = self.state.focused();
        match cmd {
            Command::Quit => {
                self.state.quit_requested = true;
                DispatchResult::changed(vec![Effect::Quit])
            }
            Command::FocusNextWindow => match self.state.windows.next_in_cycle() {
                Some(kind) => self.focus(kind),
                None => DispatchResult::unchanged(),
            },
            Command::CloseWindow => match focused {
                Some(kind) => self.close_window(kind),
                None => DispatchResult::unchanged(),
            },
            Command::OpenApp(kind) => self.open_window(kind),
            Command::Submit => match focused {
                Some(AppKind::Terminal) => self.submit_terminal(),
                Some(AppKind::Explorer) => self.open_selected_file(),
                Some(AppKind::Browser) => self.navigate(None),
                Some(AppKind::Calculator) => {
                    self.reduce_calculator_action(Action::CalculatorEvaluate)
                }
                _ => DispatchResult::unchanged(),
            },
            Command::DeleteBackward => self.delete_backward(),
            Command::InsertNewline => match focused {
                Some(AppKind::Editor) => self.insert_text("\n"),
                _ => DispatchResult::unchanged(),
            },
            Command::HistoryPrevious => self.recall_history(true),
            Command::HistoryNext => self.recall_history(false),
            Command::SelectPrevious => self.move_explorer_selection(-1),
            Command::SelectNext => self.move_explorer_selection(1),
            Command::Custom(name) => {
                tracing::debug!(command = %name, "unhandled custom command");
                DispatchResult::unchanged()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;

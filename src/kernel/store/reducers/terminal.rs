use crate::kernel::shell::ShellRequest;
use crate::kernel::store::{DispatchResult, Store};
use crate::kernel::window::AppKind;
use crate::kernel::{Action, Effect};

impl Store {
    /// Runs the input line and turns the shell's requests into window and settings effects.
    pub(in crate::kernel::store) fn submit_terminal(&mut self) -> DispatchResult {
        let Some(term) = self.state.terminal.as_mut() else {
            return DispatchResult::unchanged();
        };
        let requests = term.submit(
            &mut self.files,
            &mut self.settings,
            &mut self.rng,
            self.clock.as_ref(),
            &self.config.shell,
        );

        let mut result = DispatchResult::from_flag(true);
        for request in requests {
            let next = match request {
                ShellRequest::OpenWindow(kind) => self.open_window(kind),
                ShellRequest::OpenEditor(name) => self.open_editor(name),
                ShellRequest::Browse(url) => {
                    let mut opened = self.open_window(AppKind::Browser);
                    opened
                        .effects
                        .push(Effect::Defer(Action::ViewerNavigate(url)));
                    opened
                }
                ShellRequest::ApplySettings => DispatchResult::changed(vec![
                    Effect::ApplySettings(self.settings.get().clone()),
                ]),
                ShellRequest::ClearTranscript => DispatchResult::unchanged(),
            };
            result.merge(next);
        }
        result
    }

    pub(in crate::kernel::store) fn recall_history(&mut self, older: bool) -> DispatchResult {
        let changed = match (self.state.focused(), self.state.terminal.as_mut()) {
            (Some(AppKind::Terminal), Some(term)) if older => term.recall_previous(),
            (Some(AppKind::Terminal), Some(term)) => term.recall_next(),
            _ => false,
        };
        DispatchResult::from_flag(changed)
    }

    pub(in crate::kernel::store) fn scroll_terminal(&mut self, delta: isize) -> DispatchResult {
        let changed = self
            .state
            .terminal
            .as_mut()
            .is_some_and(|term| term.scroll(delta));
        DispatchResult::from_flag(changed)
    }
}

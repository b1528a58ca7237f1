//! Typing and activation inside the focused helper app.

use crate::kernel::store::{DispatchResult, Store};
use crate::kernel::window::{AppKind, WindowId};
use crate::kernel::{Action, Effect};

impl Store {
    pub(in crate::kernel::store) fn insert_text(&mut self, text: &str) -> DispatchResult {
        match self.state.focused() {
            Some(AppKind::Terminal) => DispatchResult::from_flag(
                self.state
                    .terminal
                    .as_mut()
                    .is_some_and(|term| term.insert_text(text)),
            ),
            Some(AppKind::Editor) => {
                let changed = match self.state.editor.as_ref() {
                    Some(editor) => editor.insert_text(&mut self.files, text),
                    None => false,
                };
                DispatchResult::from_flag(changed)
            }
            Some(AppKind::Browser) => DispatchResult::from_flag(
                self.state
                    .viewer
                    .as_mut()
                    .is_some_and(|viewer| viewer.insert_text(text)),
            ),
            Some(AppKind::Calculator) => {
                let mut result = DispatchResult::unchanged();
                for key in text.chars() {
                    let action = match key {
                        '=' => Action::CalculatorEvaluate,
                        'c' | 'C' => Action::CalculatorClear,
                        other => Action::CalculatorKey(other),
                    };
                    result.merge(self.reduce_calculator_action(action));
                }
                result
            }
            Some(AppKind::Settings) => self.type_into_settings_panel(text),
            Some(AppKind::Explorer) | None => DispatchResult::unchanged(),
        }
    }

    pub(in crate::kernel::store) fn delete_backward(&mut self) -> DispatchResult {
        let changed = match self.state.focused() {
            Some(AppKind::Terminal) => self
                .state
                .terminal
                .as_mut()
                .is_some_and(|term| term.delete_backward()),
            Some(AppKind::Editor) => match self.state.editor.as_ref() {
                Some(editor) => editor.delete_backward(&mut self.files),
                None => false,
            },
            Some(AppKind::Browser) => self
                .state
                .viewer
                .as_mut()
                .is_some_and(|viewer| viewer.delete_backward()),
            _ => false,
        };
        DispatchResult::from_flag(changed)
    }

    pub(in crate::kernel::store) fn reduce_calculator_action(
        &mut self,
        action: Action,
    ) -> DispatchResult {
        let Some(calc) = self.state.calculator.as_mut() else {
            return DispatchResult::unchanged();
        };
        let changed = match action {
            Action::CalculatorKey(key) => calc.input(key),
            Action::CalculatorEvaluate => {
                calc.evaluate();
                true
            }
            Action::CalculatorClear => {
                calc.clear();
                true
            }
            _ => false,
        };
        DispatchResult::from_flag(changed)
    }

    pub(in crate::kernel::store) fn move_explorer_selection(&mut self, delta: isize) -> DispatchResult {
        let changed = match (self.state.focused(), self.state.explorer.as_mut()) {
            (Some(AppKind::Explorer), Some(explorer)) => {
                explorer.move_selection(&self.files, delta)
            }
            _ => false,
        };
        DispatchResult::from_flag(changed)
    }

    pub(in crate::kernel::store) fn open_selected_file(&mut self) -> DispatchResult {
        let name = self
            .state
            .explorer
            .as_ref()
            .and_then(|explorer| explorer.selected_name(&self.files))
            .map(str::to_string);
        match name {
            Some(name) => self.open_editor(name),
            None => DispatchResult::unchanged(),
        }
    }

    pub(in crate::kernel::store) fn activate_explorer_entry(&mut self, name: String) -> DispatchResult {
        if let Some(explorer) = self.state.explorer.as_mut() {
            explorer.select(&self.files, &name);
        }
        self.open_editor(name)
    }

    pub(in crate::kernel::store) fn navigate(&mut self, url: Option<&str>) -> DispatchResult {
        let Some(viewer) = self.state.viewer.as_mut() else {
            return DispatchResult::unchanged();
        };
        match viewer.go(url) {
            Some(url) => DispatchResult::changed(vec![Effect::EmbedPage {
                id: WindowId::for_kind(AppKind::Browser),
                url,
            }]),
            None => DispatchResult::from_flag(true),
        }
    }
}

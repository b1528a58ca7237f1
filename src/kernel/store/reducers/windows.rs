use crate::kernel::store::{DispatchResult, Store};
use crate::kernel::window::{spawn_position, AppKind, OpenOutcome, WindowId};
use crate::kernel::{Action, Effect};

impl Store {
    fn restack(&self) -> Effect {
        Effect::Restack(
            self.state
                .windows
                .windows_by_z()
                .into_iter()
                .map(|w| (w.id, w.z_index))
                .collect(),
        )
    }

    pub(in crate::kernel::store) fn focus(&mut self, kind: AppKind) -> DispatchResult {
        if !self.state.windows.bring_to_front(kind) {
            return DispatchResult::unchanged();
        }
        DispatchResult::changed(vec![self.restack()])
    }

    pub(in crate::kernel::store) fn open_window(&mut self, kind: AppKind) -> DispatchResult {
        let dock = self.settings.get().dock_position;
        let geometry = &self.config.spawn;
        let rng = &mut self.rng;
        let outcome = self
            .state
            .windows
            .open(kind, || spawn_position(geometry, dock, rng));

        let mut effects = Vec::new();
        if outcome == OpenOutcome::Created {
            self.state.mount(kind);
            if kind == AppKind::Editor {
                if let Some(editor) = self.state.editor.as_ref() {
                    editor.mount(&mut self.files);
                    self.state.windows.set_title(kind, editor.title());
                }
            }
            if let Some(window) = self.state.windows.get(kind) {
                tracing::info!(window = %window.id, x = window.position.x, y = window.position.y, "window opened");
                effects.push(Effect::CreateWindow {
                    id: window.id,
                    title: window.title.clone(),
                    position: window.position,
                });
            }
        }
        effects.push(self.restack());
        DispatchResult::changed(effects)
    }

    /// Binds the editor to `name` (creating the file when missing) and opens or focuses it.
    pub(in crate::kernel::store) fn open_editor(&mut self, name: String) -> DispatchResult {
        if !self.files.contains(&name) {
            self.files.touch(&name);
        }
        self.state
            .editor
            .get_or_insert_with(Default::default)
            .bind(name);

        let mut result = self.open_window(AppKind::Editor);
        let title = self.state.editor.as_ref().map(|editor| editor.title());
        if let Some(title) = title {
            if self.state.windows.set_title(AppKind::Editor, title.clone()) {
                result.effects.push(Effect::SetTitle {
                    id: WindowId::for_kind(AppKind::Editor),
                    title,
                });
            }
        }
        result
    }

    pub(in crate::kernel::store) fn close_window(&mut self, kind: AppKind) -> DispatchResult {
        let Some(window) = self.state.windows.close(kind) else {
            return DispatchResult::unchanged();
        };
        self.state.unmount(kind);
        tracing::info!(window = %window.id, "window closed");
        DispatchResult::changed(vec![Effect::DestroyWindow(window.id)])
    }

    pub(in crate::kernel::store) fn reduce_drag_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::BeginDrag { kind, pointer } => {
                if !self.state.windows.begin_drag(kind, pointer) {
                    return DispatchResult::unchanged();
                }
                DispatchResult::changed(vec![self.restack()])
            }
            Action::DragTo(pointer) => match self.state.windows.drag_to(pointer) {
                Some((kind, position)) => DispatchResult::changed(vec![Effect::MoveWindow {
                    id: WindowId::for_kind(kind),
                    position,
                }]),
                None => DispatchResult::unchanged(),
            },
            Action::EndDrag => DispatchResult::from_flag(self.state.windows.end_drag()),
            _ => DispatchResult::unchanged(),
        }
    }
}

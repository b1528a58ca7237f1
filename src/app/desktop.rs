use std::collections::VecDeque;

use crate::core::{InputEvent, Key, PointerAction, PointerEvent};
use crate::kernel::appearance;
use crate::kernel::services::adapters::{KeybindingContext, KeybindingService};
use crate::kernel::services::ports::RenderSurface;
use crate::kernel::{Action, AppKind, Effect, Store};

use super::layout::{self, Hit};

/// Lines scrolled per wheel notch in the terminal window.
const SCROLL_STEP: isize = 3;

/// Hosts the kernel store next to a rendering surface and runs the store's effects against it.
///
/// Deferred actions wait for the next `tick`, which the event loop calls once per frame.
pub struct Desktop<S: RenderSurface> {
    store: Store,
    surface: S,
    keybindings: KeybindingService,
    deferred: VecDeque<Action>,
    viewport: (u16, u16),
}

impl<S: RenderSurface> Desktop<S> {
    pub fn new(store: Store, surface: S) -> Self {
        Self {
            store,
            surface,
            keybindings: KeybindingService::with_defaults(),
            deferred: VecDeque::new(),
            viewport: (80, 24),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn keybindings_mut(&mut self) -> &mut KeybindingService {
        &mut self.keybindings
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn set_viewport(&mut self, cols: u16, rows: u16) {
        self.viewport = (cols, rows);
    }

    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().quit_requested
    }

    pub fn boot(&mut self) -> bool {
        self.dispatch(Action::Boot)
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    /// Runs the actions deferred before this tick; anything they defer waits for the next one.
    pub fn tick(&mut self) -> bool {
        let ready: Vec<Action> = self.deferred.drain(..).collect();
        let mut changed = false;
        for action in ready {
            changed |= self.dispatch(action);
        }
        changed |= self.dispatch(Action::Tick);
        changed
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Paste(text) => self.handle_paste(text),
            InputEvent::Pointer(pointer) => self.handle_pointer(pointer),
            InputEvent::Resize(cols, rows) => {
                self.set_viewport(*cols, *rows);
                true
            }
        }
    }

    pub fn handle_key(&mut self, key: &Key) -> bool {
        let context = KeybindingContext::for_window(self.store.state().focused());
        if let Some(command) = self.keybindings.resolve(context, key).cloned() {
            tracing::trace!(command = command.name(), ?context, "key resolved");
            return self.dispatch(Action::RunCommand(command));
        }
        match key.printable() {
            Some(ch) => self.dispatch(Action::InsertText(ch.to_string())),
            None => false,
        }
    }

    /// Pasted text is typed into the focused window; line breaks are dropped outside the editor.
    pub fn handle_paste(&mut self, text: &str) -> bool {
        let focused = self.store.state().focused();
        let text = if focused == Some(AppKind::Editor) {
            text.replace("\r\n", "\n")
        } else {
            text.replace(['\r', '\n'], " ")
        };
        if text.is_empty() {
            return false;
        }
        self.dispatch(Action::InsertText(text))
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let pointer = event.position;
        match event.action {
            PointerAction::Down => {
                let dock = self.store.settings().get().dock_position;
                match layout::hit_test(&self.store.state().windows, dock, self.viewport, pointer) {
                    Hit::Dock(kind) => self.dispatch(Action::OpenApp(kind)),
                    Hit::Close(kind) => self.dispatch(Action::CloseWindow(kind)),
                    Hit::TitleBar(kind) => self.dispatch(Action::BeginDrag {
                        kind,
                        pointer: pointer.into(),
                    }),
                    Hit::Body(kind) => self.dispatch(Action::FocusWindow(kind)),
                    Hit::Desktop => false,
                }
            }
            PointerAction::Moved => self.dispatch(Action::DragTo(pointer.into())),
            PointerAction::Up => self.dispatch(Action::EndDrag),
            PointerAction::ScrollUp => self.dispatch(Action::TerminalScroll { delta: SCROLL_STEP }),
            PointerAction::ScrollDown => {
                self.dispatch(Action::TerminalScroll { delta: -SCROLL_STEP })
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::CreateWindow {
                id,
                title,
                position,
            } => {
                self.surface.create_window(id, &title, position);
                appearance::style_window(&mut self.surface, id, self.store.settings().get());
            }
            Effect::DestroyWindow(id) => self.surface.destroy_window(id),
            Effect::MoveWindow { id, position } => self.surface.move_window(id, position),
            Effect::Restack(stack) => {
                for (id, z_index) in stack {
                    self.surface.set_z_index(id, z_index);
                }
            }
            Effect::SetTitle { id, title } => self.surface.set_title(id, &title),
            Effect::ApplySettings(settings) => {
                let windows = self.store.state().windows.ids();
                appearance::apply(&mut self.surface, &windows, &settings);
            }
            Effect::EmbedPage { id, url } => self.surface.embed_page(id, &url),
            Effect::Defer(action) => self.deferred.push_back(action),
            Effect::Quit => tracing::info!("quit requested"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/desktop.rs"]
mod tests;

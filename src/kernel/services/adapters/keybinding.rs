//! Key bindings: key -> command, per focused-window context.

use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use crate::kernel::window::AppKind;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Terminal,
    Editor,
    Explorer,
    Viewer,
}

impl KeybindingContext {
    /// Context for the focused window; apps without text input only get global bindings.
    pub fn for_window(kind: Option<AppKind>) -> Self {
        match kind {
            Some(AppKind::Terminal) => Self::Terminal,
            Some(AppKind::Editor) => Self::Editor,
            Some(AppKind::Explorer) => Self::Explorer,
            Some(AppKind::Browser) => Self::Viewer,
            Some(AppKind::Calculator) | Some(AppKind::Settings) | None => Self::Global,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    terminal: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
    explorer: FxHashMap<Key, Command>,
    viewer: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            terminal: default_terminal_keybindings(),
            editor: default_editor_keybindings(),
            explorer: default_explorer_keybindings(),
            viewer: default_viewer_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            other => self.map(other).get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    fn map(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Terminal => &self.terminal,
            KeybindingContext::Editor => &self.editor,
            KeybindingContext::Explorer => &self.explorer,
            KeybindingContext::Viewer => &self.viewer,
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Terminal => &mut self.terminal,
            KeybindingContext::Editor => &mut self.editor,
            KeybindingContext::Explorer => &mut self.explorer,
            KeybindingContext::Viewer => &mut self.viewer,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(12);

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('w')), Command::CloseWindow);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), Command::FocusNextWindow);

    for (idx, kind) in AppKind::ALL.into_iter().enumerate() {
        bindings.insert(Key::simple(KeyCode::F(idx as u8 + 1)), Command::OpenApp(kind));
    }

    bindings
}

fn default_terminal_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::simple(KeyCode::Enter), Command::Submit);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Up), Command::HistoryPrevious);
    bindings.insert(Key::simple(KeyCode::Down), Command::HistoryNext);
    bindings
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings
}

fn default_explorer_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::simple(KeyCode::Up), Command::SelectPrevious);
    bindings.insert(Key::simple(KeyCode::Down), Command::SelectNext);
    bindings.insert(Key::simple(KeyCode::Enter), Command::Submit);
    bindings
}

fn default_viewer_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::simple(KeyCode::Enter), Command::Submit);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;

use crate::kernel::services::ports::settings::{DockPosition, SettingsPatch, Theme};
use crate::kernel::store::{DispatchResult, Store};
use crate::kernel::window::AppKind;
use crate::kernel::Effect;

impl Store {
    pub(in crate::kernel::store) fn update_settings(&mut self, patch: SettingsPatch) -> DispatchResult {
        if patch.is_empty() {
            return DispatchResult::unchanged();
        }
        if self.settings.set(patch) {
            tracing::info!(settings = ?self.settings.get(), "settings changed");
        }
        DispatchResult::changed(vec![Effect::ApplySettings(self.settings.get().clone())])
    }

    pub(in crate::kernel::store) fn type_into_settings_panel(&mut self, text: &str) -> DispatchResult {
        let mut result = DispatchResult::unchanged();
        for key in text.chars() {
            if let Some(patch) = self.settings_shortcut(key) {
                result.merge(self.update_settings(patch));
            }
        }
        result
    }

    /// Settings panel controls: `t` theme, `m` motion, `d` dock, `+`/`-` font size,
    /// `a` default app.
    fn settings_shortcut(&self, key: char) -> Option<SettingsPatch> {
        let current = self.settings.get();
        let range = &self.config.shell.font_size_range;
        let mut patch = SettingsPatch::default();
        match key {
            't' => {
                patch.theme = Some(match current.theme {
                    Theme::Dark => Theme::Light,
                    Theme::Light => Theme::Dark,
                })
            }
            'm' => patch.reduce_motion = Some(!current.reduce_motion),
            'd' => {
                patch.dock_position = Some(match current.dock_position {
                    DockPosition::Top => DockPosition::Bottom,
                    DockPosition::Bottom => DockPosition::Top,
                })
            }
            '+' => patch.font_size = Some(current.font_size.saturating_add(1).min(*range.end())),
            '-' => patch.font_size = Some(current.font_size.saturating_sub(1).max(*range.start())),
            'a' => {
                let idx = AppKind::ALL
                    .iter()
                    .position(|kind| *kind == current.default_app)
                    .unwrap_or(0);
                patch.default_app = Some(AppKind::ALL[(idx + 1) % AppKind::ALL.len()]);
            }
            _ => return None,
        }
        Some(patch)
    }
}

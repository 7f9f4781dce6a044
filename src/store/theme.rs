use anyhow::Result;

use crate::db::Slots;
use crate::models::Theme;

pub(crate) const THEME_KEY: &str = "et_theme";

pub(crate) struct ThemeStore {
    current: Theme,
}

impl ThemeStore {
    /// Read the saved theme, falling back to light when absent or unreadable.
    pub(crate) fn load(slots: &impl Slots) -> Self {
        let current = match slots.read_slot(THEME_KEY) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                log::warn!("ignoring unknown saved theme '{raw}'");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("could not read saved theme: {e:#}");
                Theme::default()
            }
        };
        Self { current }
    }

    pub(crate) fn current(&self) -> Theme {
        self.current
    }

    pub(crate) fn set(&mut self, slots: &mut impl Slots, theme: Theme) -> Result<()> {
        self.current = theme;
        slots.write_slot(THEME_KEY, theme.as_str())?;
        log::debug!("theme set to {theme}");
        Ok(())
    }

    pub(crate) fn toggle(&mut self, slots: &mut impl Slots) -> Result<Theme> {
        let next = self.current.toggled();
        self.set(slots, next)?;
        Ok(next)
    }
}

use gpui::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_appearance(appearance: WindowAppearance) -> Self {
        match appearance {
            WindowAppearance::Dark | WindowAppearance::VibrantDark => ThemeMode::Dark,
            WindowAppearance::Light | WindowAppearance::VibrantLight => ThemeMode::Light,
        }
    }
}

pub struct Theme {
    pub background: Hsla,
    pub foreground: Hsla,
    /// Display color once the countdown is below zero
    pub overtime: Hsla,
    pub button: Hsla,
    pub button_foreground: Hsla,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: rgb(0xffffff).into(),
            foreground: rgb(0x000000).into(),
            overtime: rgb(0xdc2626).into(),
            button: rgb(0xe5e7eb).into(),
            button_foreground: rgb(0x111827).into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: rgb(0x1f2937).into(),
            foreground: rgb(0xf9fafb).into(),
            overtime: rgb(0xef4444).into(),
            button: rgb(0x4b5563).into(),
            button_foreground: rgb(0xe5e7eb).into(),
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn display_color(&self, negative: bool) -> Hsla {
        if negative {
            self.overtime
        } else {
            self.foreground
        }
    }
}

use crate::config::ConfigError;
use crate::pages::preview::Accent;
use ratatui::style::Color;

/// Colour palette used by every widget of the navigator.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: ColorSpec,
    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,

    // Tab strip
    pub tab_active_fg: ColorSpec,
    pub tab_active_bg: ColorSpec,
    pub tab_inactive: ColorSpec,
    pub drop_marker: ColorSpec,

    // Content pane
    pub skeleton: ColorSpec,
    pub danger: ColorSpec,
    pub orange: ColorSpec,
    pub blue: ColorSpec,
    pub green: ColorSpec,
}

/// RGB colour triple.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

const THEME_NAMES: [&str; 4] = ["tokyo-night", "rose-pine-dawn", "dracula", "catppuccin-mocha"];

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night",
            primary: rgb(122, 162, 247),
            text: rgb(192, 202, 245),
            text_muted: rgb(86, 95, 137),
            border_active: rgb(122, 162, 247),
            border_normal: rgb(59, 66, 97),
            tab_active_fg: rgb(26, 27, 38),
            tab_active_bg: rgb(122, 162, 247),
            tab_inactive: rgb(169, 177, 214),
            drop_marker: rgb(224, 175, 104),
            skeleton: rgb(65, 72, 104),
            danger: rgb(247, 118, 142),
            orange: rgb(255, 158, 100),
            blue: rgb(125, 207, 255),
            green: rgb(158, 206, 106),
        }
    }

    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn",
            primary: rgb(144, 122, 169),
            text: rgb(87, 82, 121),
            text_muted: rgb(152, 147, 165),
            border_active: rgb(144, 122, 169),
            border_normal: rgb(223, 218, 217),
            tab_active_fg: rgb(250, 244, 237),
            tab_active_bg: rgb(144, 122, 169),
            tab_inactive: rgb(121, 117, 147),
            drop_marker: rgb(234, 157, 52),
            skeleton: rgb(223, 218, 217),
            danger: rgb(180, 99, 122),
            orange: rgb(234, 157, 52),
            blue: rgb(40, 105, 131),
            green: rgb(86, 148, 159),
        }
    }

    pub fn dracula() -> Self {
        Theme {
            name: "dracula",
            primary: rgb(189, 147, 249),
            text: rgb(248, 248, 242),
            text_muted: rgb(98, 114, 164),
            border_active: rgb(189, 147, 249),
            border_normal: rgb(68, 71, 90),
            tab_active_fg: rgb(40, 42, 54),
            tab_active_bg: rgb(189, 147, 249),
            tab_inactive: rgb(248, 248, 242),
            drop_marker: rgb(241, 250, 140),
            skeleton: rgb(68, 71, 90),
            danger: rgb(255, 85, 85),
            orange: rgb(255, 184, 108),
            blue: rgb(139, 233, 253),
            green: rgb(80, 250, 123),
        }
    }

    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha",
            primary: rgb(203, 166, 247),
            text: rgb(205, 214, 244),
            text_muted: rgb(127, 132, 156),
            border_active: rgb(203, 166, 247),
            border_normal: rgb(69, 71, 90),
            tab_active_fg: rgb(30, 30, 46),
            tab_active_bg: rgb(203, 166, 247),
            tab_inactive: rgb(186, 194, 222),
            drop_marker: rgb(249, 226, 175),
            skeleton: rgb(69, 71, 90),
            danger: rgb(243, 139, 168),
            orange: rgb(250, 179, 135),
            blue: rgb(137, 180, 250),
            green: rgb(166, 227, 161),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            _ => None,
        }
    }

    /// Get a theme by name, reporting unknown names as a config error.
    ///
    pub fn resolve(name: &str) -> Result<Self, ConfigError> {
        Self::from_name(name).ok_or_else(|| ConfigError::UnknownTheme {
            name: name.to_string(),
            available: Self::available_themes().join(", "),
        })
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<&'static str> {
        THEME_NAMES.to_vec()
    }

    /// Return the theme following this one in the bundled list.
    ///
    pub fn next(&self) -> Self {
        let index = THEME_NAMES
            .iter()
            .position(|name| *name == self.name)
            .unwrap_or(0);
        let next = THEME_NAMES[(index + 1) % THEME_NAMES.len()];
        Self::from_name(next).unwrap_or_default()
    }

    /// Colour for a preview accent.
    ///
    pub fn accent(&self, accent: Accent) -> Color {
        match accent {
            Accent::Orange => self.orange.to_color(),
            Accent::Blue => self.blue.to_color(),
            Accent::Green => self.green.to_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_resolve_unknown_theme() {
        let err = Theme::resolve("solarized").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTheme { .. }));
    }

    #[test]
    fn test_next_cycles_through_all_themes() {
        let mut theme = Theme::default();
        let mut seen = vec![theme.name];
        for _ in 1..THEME_NAMES.len() {
            theme = theme.next();
            seen.push(theme.name);
        }
        assert_eq!(seen, THEME_NAMES.to_vec());
        assert_eq!(theme.next().name, "tokyo-night");
    }

    #[test]
    fn test_color_spec_to_color() {
        assert_eq!(rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}

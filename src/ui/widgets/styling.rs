use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for secondary text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style of a tab in the strip.
///
pub fn tab_style(theme: &Theme, is_active: bool, has_cursor: bool) -> Style {
    let mut style = if is_active {
        Style::default()
            .fg(theme.tab_active_fg.to_color())
            .bg(theme.tab_active_bg.to_color())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.tab_inactive.to_color())
    };
    if has_cursor {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    style
}

/// Return the style of the tab being dragged.
///
pub fn dragged_tab_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.drop_marker.to_color())
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// Return the style of the selected context menu entry.
///
pub fn selected_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for destructive actions.
///
pub fn danger_style(theme: &Theme) -> Style {
    Style::default().fg(theme.danger.to_color())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_style() {
        let theme = Theme::default();
        let active = tab_style(&theme, true, false);
        assert_eq!(active.bg, Some(theme.tab_active_bg.to_color()));
        assert!(active.add_modifier.contains(Modifier::BOLD));

        let cursor = tab_style(&theme, false, true);
        assert_eq!(cursor.bg, None);
        assert!(cursor.add_modifier.contains(Modifier::UNDERLINED));
    }
}

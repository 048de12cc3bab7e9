//! Theme system

use ratatui::prelude::*;

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color for focused elements
    pub focus_border: Color,
    /// Border color for unfocused elements
    pub unfocus_border: Color,
    /// Usernames, mentions and the score
    pub accent: Color,
    /// Background of the "you" tag
    pub own_tag: Color,
    /// Created-at labels, hints and placeholders
    pub meta: Color,
    /// Score after an upvote
    pub upvoted: Color,
    /// Score after a downvote
    pub downvoted: Color,
    /// Delete button and modal
    pub danger: Color,
    /// Selection marker
    pub selection: Color,
    /// Status bar background
    pub status_bg: Color,
    /// Status bar foreground
    pub status_fg: Color,
}

impl Theme {
    /// Look a theme up by name; unknown names get the default
    pub fn from_name(name: &str) -> Self {
        match name {
            "mono" => Self::mono(),
            _ => Self::default(),
        }
    }

    /// Palette without colors, for terminals that render them poorly
    pub fn mono() -> Self {
        Self {
            focus_border: Color::White,
            unfocus_border: Color::DarkGray,
            accent: Color::White,
            own_tag: Color::Gray,
            meta: Color::DarkGray,
            upvoted: Color::White,
            downvoted: Color::Gray,
            danger: Color::White,
            selection: Color::White,
            status_bg: Color::DarkGray,
            status_fg: Color::White,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            unfocus_border: Color::DarkGray,
            accent: Color::Blue,
            own_tag: Color::Blue,
            meta: Color::DarkGray,
            upvoted: Color::Green,
            downvoted: Color::Red,
            danger: Color::Red,
            selection: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("mono").accent, Color::White);
        assert_eq!(Theme::from_name("unknown").accent, Theme::default().accent);
    }
}

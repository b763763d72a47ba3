//! Color palette for the advice widget

use ratatui::style::{Color, Modifier};

pub mod title {
    use super::*;

    pub const TEXT: Color = Color::Rgb(226, 232, 240);
    pub const MODIFIER: Modifier = Modifier::BOLD;
}

pub mod card {
    use super::*;

    pub const BORDER: Color = Color::Rgb(160, 174, 192);
    pub const ADVICE: Color = Color::White;
    pub const PLACEHOLDER: Color = Color::Rgb(113, 128, 150);
    pub const ERROR: Color = Color::Rgb(229, 62, 62);
    pub const SPINNER: Color = Color::Rgb(99, 179, 237);
}

pub mod controls {
    use super::*;

    pub const BUTTON: Color = Color::Rgb(43, 108, 176);
    pub const BUTTON_TEXT: Color = Color::White;
    pub const BUTTON_DISABLED: Color = Color::DarkGray;
    pub const BORDER: Color = Color::DarkGray;
    pub const FOCUSED_BORDER: Color = Color::Rgb(99, 179, 237);
    pub const INPUT_TEXT: Color = Color::White;
}

pub mod warning {
    use super::*;

    pub const TEXT: Color = Color::Rgb(214, 158, 46);
}

pub mod history {
    use super::*;

    pub const BORDER: Color = Color::Rgb(160, 174, 192);
    pub const ITEM: Color = Color::Rgb(226, 232, 240);
    pub const ITEM_ALT_BG: Color = Color::Rgb(30, 35, 45);
    pub const EMPTY: Color = Color::Rgb(113, 128, 150);
}

pub mod help {
    use super::*;

    pub const KEY: Color = Color::Rgb(99, 179, 237);
    pub const TEXT: Color = Color::DarkGray;
}

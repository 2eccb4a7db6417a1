//! Color palettes of the two page designs

use ratatui::style::Color;

/// Colors used to paint one form design
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    /// Fill behind the form card
    pub panel: Color,
    pub heading: Color,
    pub text: Color,
    pub muted: Color,
    /// Border and cursor of the focused control
    pub accent: Color,
    pub border: Color,
    pub input_bg: Color,
    pub input_fg: Color,
    pub placeholder: Color,
}

impl Theme {
    /// Charcoal page, teal form card
    pub const VERSION1: Theme = Theme {
        background: Color::Rgb(0x28, 0x29, 0x2a),
        panel: Color::Rgb(0x45, 0x92, 0xa3),
        heading: Color::White,
        text: Color::White,
        muted: Color::Rgb(0xcc, 0xfb, 0xf1),
        accent: Color::White,
        border: Color::Rgb(0x1c, 0x4b, 0x56),
        input_bg: Color::White,
        input_fg: Color::Rgb(0x11, 0x18, 0x27),
        placeholder: Color::Rgb(0x9c, 0xa3, 0xaf),
    };

    /// Light gray page, near-black accents
    pub const VERSION2: Theme = Theme {
        background: Color::Rgb(0xf9, 0xfa, 0xfb),
        panel: Color::Rgb(0xf9, 0xfa, 0xfb),
        heading: Color::Rgb(0x11, 0x18, 0x27),
        text: Color::Rgb(0x37, 0x41, 0x51),
        muted: Color::Rgb(0x6b, 0x72, 0x80),
        accent: Color::Rgb(0x11, 0x18, 0x27),
        border: Color::Rgb(0xd1, 0xd5, 0xdb),
        input_bg: Color::White,
        input_fg: Color::Rgb(0x11, 0x18, 0x27),
        placeholder: Color::Rgb(0x9c, 0xa3, 0xaf),
    };
}

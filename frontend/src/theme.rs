//! Brand color tokens.
//!
//! The palette is fixed (no light/dark switching), but tokens are exposed as
//! signals so views can bind them the same way everywhere.

use zoon::*;

pub const GOLD: &str = "oklch(78% 0.13 85)";
pub const CREAM: &str = "oklch(95% 0.02 90)";
pub const DARK_BLACK: &str = "oklch(14% 0.01 250)";
pub const WHITE: &str = "oklch(100% 0 0)";

pub fn gold() -> impl Signal<Item = &'static str> {
    always(GOLD)
}

pub fn cream() -> impl Signal<Item = &'static str> {
    always(CREAM)
}

pub fn dark_black() -> impl Signal<Item = &'static str> {
    always(DARK_BLACK)
}

pub fn white() -> impl Signal<Item = &'static str> {
    always(WHITE)
}

/// Dark background gradient used by the hero, pricing and FAQ sections.
pub const DARK_GRADIENT: &str =
    "linear-gradient(135deg, oklch(14% 0.01 250), oklch(19% 0.01 250), oklch(26% 0.01 250))";

/// Gold-to-cream gradient framing photos.
pub const GOLD_FRAME_GRADIENT: &str =
    "linear-gradient(90deg, oklch(78% 0.13 85), oklch(95% 0.02 90))";

pub fn heading_font() -> Font {
    Font::new()
        .weight(FontWeight::Bold)
        .family([
            FontFamily::new("Brice"),
            FontFamily::new("ui-sans-serif"),
            FontFamily::new("system-ui"),
            FontFamily::SansSerif,
        ])
}

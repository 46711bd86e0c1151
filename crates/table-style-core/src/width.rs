//! Display width measurement and width enforcement strategies.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vte::Perform;

/// Terminal column width of `text`, ignoring ANSI escape sequences.
///
/// Wide glyphs (CJK, most emoji) count as two columns.
pub fn display_width(text: &str) -> usize {
    if text.contains('\x1b') {
        UnicodeWidthStr::width(strip_ansi_escapes::strip_str(text).as_str())
    } else {
        UnicodeWidthStr::width(text)
    }
}

/// Strategy that enforces a maximum width on a cell's text.
///
/// Any `Fn(&str, usize) -> String` closure is a `WidthEnforcer`, so callers
/// may pass either a closure or a named strategy type.
pub trait WidthEnforcer: Send + Sync {
    /// Apply the width condition to `text`.
    fn enforce(&self, text: &str, max_width: usize) -> String;
}

impl<F> WidthEnforcer for F
where
    F: Fn(&str, usize) -> String + Send + Sync,
{
    fn enforce(&self, text: &str, max_width: usize) -> String {
        self(text, max_width)
    }
}

/// Returns the text unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoWidthEnforcement;

impl WidthEnforcer for NoWidthEnforcement {
    fn enforce(&self, text: &str, _max_width: usize) -> String {
        text.to_string()
    }
}

/// Cuts text so its display width does not exceed the limit.
///
/// Never splits a character; a wide glyph that would straddle the limit is
/// dropped entirely. Escape sequences take no columns and are always kept,
/// so styling opened before the cut is still closed after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruncateToWidth;

/// Records whether the last byte fed to the VTE parser printed a glyph.
#[derive(Debug, Default)]
struct PrintedGlyph {
    glyph: Option<char>,
}

impl Perform for PrintedGlyph {
    fn print(&mut self, c: char) {
        self.glyph = Some(c);
    }
}

impl WidthEnforcer for TruncateToWidth {
    fn enforce(&self, text: &str, max_width: usize) -> String {
        let mut parser = vte::Parser::new();
        let mut printed = PrintedGlyph::default();
        let mut utf8 = [0u8; 4];
        let mut out = String::with_capacity(text.len());
        let mut used = 0;
        let mut truncated = false;

        for ch in text.chars() {
            for byte in ch.encode_utf8(&mut utf8).bytes() {
                parser.advance(&mut printed, byte);
            }

            // Anything not printed is part of an escape sequence or a control
            match printed.glyph.take() {
                Some(glyph) => {
                    let glyph_width = UnicodeWidthChar::width(glyph).unwrap_or(0);
                    if truncated || used + glyph_width > max_width {
                        truncated = true;
                        continue;
                    }
                    used += glyph_width;
                    out.push(ch);
                }
                None => out.push(ch),
            }
        }

        if truncated {
            tracing::trace!(
                "Truncated cell text from width {} to {}",
                display_width(text),
                used
            );
        }

        out
    }
}

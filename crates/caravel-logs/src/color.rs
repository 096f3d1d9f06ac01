//! Per-stream display colors.
//!
//! Each distinct stream name gets a color drawn from a fixed palette the
//! first time it is encountered, then keeps that color for the rest of the
//! invocation. The draw is pseudo-random per run, so colors differ between
//! runs but never within one. Palette collisions across many streams are
//! acceptable.

use std::collections::HashMap;

use owo_colors::{AnsiColors, OwoColorize};
use rand::Rng;

/// Fixed palette used for stream name prefixes.
pub const PALETTE: [AnsiColors; 6] = [
    AnsiColors::Cyan,
    AnsiColors::Magenta,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Red,
];

/// Lazy stream-name to palette-index assignment, stable per invocation.
#[derive(Debug, Default)]
pub struct StreamColors {
    assigned: HashMap<String, usize>,
}

impl StreamColors {
    /// Creates an empty assignment map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the palette index for a stream, assigning one on first use.
    pub fn color_index(&mut self, stream: &str) -> usize {
        if let Some(&index) = self.assigned.get(stream) {
            return index;
        }
        let index = rand::thread_rng().gen_range(0..PALETTE.len());
        self.assigned.insert(stream.to_string(), index);
        index
    }

    /// Returns the number of streams that have been assigned a color.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Returns true if no stream has been assigned a color yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// Renders a stream name in its assigned palette color.
#[must_use]
pub fn paint(stream: &str, index: usize) -> String {
    stream.color(PALETTE[index % PALETTE.len()]).to_string()
}

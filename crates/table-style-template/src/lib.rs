//! # table-style-template
//!
//! Box style extraction for terminal tables.
//!
//! This crate provides:
//! - A fixed-shape glyph grid built from literal box-drawing templates
//! - [`BoxStyle`]: every border, separator, and padding glyph of a table,
//!   read from a drawn 2x2 box
//! - [`BoxConnectorStyle`]: the separator-only glyphs of a single connector
//!   line, used when merging rows
//! - Rendering of both styles back into their template layout
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends on table-style-core for
//! display width measurement.
//!
//! ## Example
//!
//! ```
//! use table_style_template::BoxStyle;
//!
//! let style = BoxStyle::from_template(
//!     "
//!     ┏━━━┳━━━┓
//!     ┣━━━╋━━━┫
//!     ┃< >┃< >┃ ~
//!     ┗━━━┻━━━┛
//!     ",
//! );
//!
//! assert_eq!(style.top_left, "┏");
//! assert_eq!(style.middle_separator, "╋");
//! assert_eq!(style.unfinished_row, " ~");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod box_style;
pub mod connector;
mod grid;

// Re-export commonly used types
pub use box_style::{parse_box_style, BoxStyle};
pub use connector::{parse_box_connector_style, BoxConnectorStyle};

//! Line wrapping and truncation.
//!
//! Wrapping happens in two stages, both of which measure text through a
//! caller-supplied [`Measurer`](crate::Measurer):
//!
//! - [`wrap_lines`](crate::layout::wrap_lines) - breaks text at hard newlines and
//!   whitespace, splitting words that are too wide on their own
//! - [`truncate_lines`](crate::layout::truncate_lines) - caps the number of lines and
//!   elides the last one
//!
//! [`wrap_text`](crate::layout::wrap_text) runs both.
//!
//! # Example
//!
//! ```
//! use text_wrap::layout::wrap_text;
//! use text_wrap::{FontSpec, Monospace, Pt, WrapConfig};
//!
//! let font = FontSpec::from("16px monospace");
//! let mut config = WrapConfig::new(Pt(9.0));
//! config.max_line_count(2);
//!
//! let lines = wrap_text("one two three four", &font, &config, &Monospace::default())
//!     .expect("can wrap");
//!
//! let contents: Vec<&str> = lines.iter().map(|l| l.content.as_str()).collect();
//! assert_eq!(contents, vec!["one two", "three..."]);
//! ```

mod truncate;
mod wrap;

pub use truncate::*;
pub use wrap::*;

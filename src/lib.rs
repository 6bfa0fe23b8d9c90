mod config;
pub use config::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod font_book;
pub use font_book::*;

mod font_spec;
pub use font_spec::*;

/// Line wrapping and truncation of text measured in arbitrary fonts
pub mod layout;

mod measure;
pub use measure::*;

mod units;
pub use units::*;

/// Re-export the font parser, mostly for inspecting [Font] faces directly
pub use owned_ttf_parser;

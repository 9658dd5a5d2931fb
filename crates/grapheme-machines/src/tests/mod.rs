mod grapheme_break;
pub mod utils;

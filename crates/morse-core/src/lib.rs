//! Arabic text to Morse code and back.
//!
//! A [`MorseTable`] carries the letter codes, the normalization maps and the
//! default separators. [`encode`] and [`decode`] take the table by reference
//! and never touch shared mutable state, so one table can serve any number
//! of threads.

pub mod codec;
pub mod normalize;
pub mod separators;
pub mod table;
pub mod unicode;

pub use codec::{
    decode, encode, swap, transcode, DecodeOptions, EncodeOptions, Mode, ParseModeError,
};
pub use normalize::normalize;
pub use separators::{check_separators, check_symbols, SeparatorHazard, SeparatorKind};
pub use table::{MorseTable, TableError, TableMeta};

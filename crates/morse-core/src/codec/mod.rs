//! Text-to-Morse encoding and Morse-to-text decoding.
//!
//! Both directions are pure functions of (input, options, table). The table
//! is passed in explicitly; nothing here reads global state.

mod decode;
mod encode;
mod options;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::table::MorseTable;

pub use decode::decode;
pub use encode::encode;
pub use options::{DecodeOptions, EncodeOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    pub fn opposite(self) -> Self {
        match self {
            Mode::Encode => Mode::Decode,
            Mode::Decode => Mode::Encode,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode {0:?} (expected \"encode\" or \"decode\")")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Run `input` through `mode`. Encoding only uses the separator overrides.
pub fn transcode(table: &MorseTable, mode: Mode, input: &str, opts: &DecodeOptions) -> String {
    match mode {
        Mode::Encode => encode(table, input, &opts.encode_options()),
        Mode::Decode => decode(table, input, opts),
    }
}

/// Feed a previous result back in the opposite direction. Returns the new
/// mode along with its output.
pub fn swap(table: &MorseTable, mode: Mode, output: &str, opts: &DecodeOptions) -> (Mode, String) {
    let next = mode.opposite();
    (next, transcode(table, next, output, opts))
}

use std::fs;
use std::io::{self, Read};

use morse_core::MorseTable;
use tracing::debug;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod codec_ops;
pub mod table_ops;

/// Install the table from `path` as the process-wide table, or fall back to
/// the embedded default.
pub fn load_table(path: Option<&str>) -> &'static MorseTable {
    if let Some(path) = path {
        let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
        die!(MorseTable::init_custom(content), "Error in {path}: {}");
        debug!(path, "custom morse table installed");
    }
    MorseTable::builtin()
}

/// Use the positional argument when given, otherwise read all of stdin.
pub fn read_input(arg: Option<String>) -> String {
    match arg {
        Some(s) => s,
        None => {
            let mut buf = String::new();
            die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
            buf
        }
    }
}

use morse_core::{swap, transcode, DecodeOptions, Mode, MorseTable};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub mode: Mode,
    pub input: &'a str,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapped: Option<Swapped>,
}

#[derive(Debug, Serialize)]
pub struct Swapped {
    pub mode: Mode,
    pub output: String,
}

pub fn run<'a>(table: &MorseTable, mode: Mode, input: &'a str, opts: &DecodeOptions) -> Report<'a> {
    Report {
        mode,
        input,
        output: transcode(table, mode, input, opts),
        swapped: None,
    }
}

/// Transcode, then feed the result straight back in the opposite mode.
pub fn run_swap<'a>(
    table: &MorseTable,
    mode: Mode,
    input: &'a str,
    opts: &DecodeOptions,
) -> Report<'a> {
    let mut report = run(table, mode, input, opts);
    let (next, output) = swap(table, mode, &report.output, opts);
    report.swapped = Some(Swapped { mode: next, output });
    report
}

pub fn render(report: &Report<'_>, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(report).expect("JSON serialization failed");
    }
    match &report.swapped {
        Some(swapped) => format!(
            "{}: {}\n{}: {}",
            report.mode, report.output, swapped.mode, swapped.output
        ),
        None => report.output.clone(),
    }
}

pub fn transcode_cmd(table: &MorseTable, mode: Mode, input: &str, opts: &DecodeOptions, json: bool) {
    println!("{}", render(&run(table, mode, input, opts), json));
}

pub fn swap_cmd(table: &MorseTable, mode: Mode, input: &str, opts: &DecodeOptions, json: bool) {
    println!("{}", render(&run_swap(table, mode, input, opts), json));
}

use clap::{Args, Parser, Subcommand};

use morse_cli::commands::{codec_ops, load_table, read_input, table_ops};
use morse_cli::trace_init::init_tracing;
use morse_core::{DecodeOptions, Mode};

#[derive(Parser)]
#[command(name = "morsetool", about = "Arabic Morse code encoder and decoder")]
struct Cli {
    /// Path to a custom Morse table (TOML); defaults to the embedded table
    #[arg(long, global = true)]
    table: Option<String>,
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct SeparatorArgs {
    /// Separator between letters of a word
    #[arg(long)]
    letter_sep: Option<String>,
    /// Separator between words
    #[arg(long)]
    word_sep: Option<String>,
}

#[derive(Args)]
struct SymbolArgs {
    /// Dot symbol used in the input
    #[arg(long)]
    dot: Option<char>,
    /// Dash symbol used in the input
    #[arg(long)]
    dash: Option<char>,
    /// Character to read as a dash (repeatable; replaces the table's list)
    #[arg(long = "dash-alias")]
    dash_aliases: Vec<char>,
    /// Character to read as a dot (repeatable; replaces the table's list)
    #[arg(long = "dot-alias")]
    dot_aliases: Vec<char>,
    /// Accept no aliases at all
    #[arg(long, conflicts_with_all = ["dash_aliases", "dot_aliases"])]
    no_aliases: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Encode Arabic text as Morse
    Encode {
        /// Text to encode (reads stdin when omitted)
        text: Option<String>,
        #[command(flatten)]
        seps: SeparatorArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode Morse into Arabic text
    Decode {
        /// Morse to decode (reads stdin when omitted)
        morse: Option<String>,
        #[command(flatten)]
        seps: SeparatorArgs,
        #[command(flatten)]
        symbols: SymbolArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run one direction, then feed the result back through the other
    Swap {
        /// Direction of the first pass
        #[arg(long, default_value = "encode")]
        mode: Mode,
        /// Input for the first pass (reads stdin when omitted)
        input: Option<String>,
        #[command(flatten)]
        seps: SeparatorArgs,
        #[command(flatten)]
        symbols: SymbolArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect Morse tables
    Table {
        #[command(subcommand)]
        command: TableCommand,
    },
}

#[derive(Subcommand)]
enum TableCommand {
    /// Print the embedded default table
    Export,
    /// Validate a table file
    Validate {
        /// Table TOML file
        file: String,
    },
    /// Print every letter with its code
    Chart,
}

fn decode_options(seps: SeparatorArgs, symbols: Option<SymbolArgs>) -> DecodeOptions {
    let mut opts = DecodeOptions {
        letter_separator: seps.letter_sep,
        word_separator: seps.word_sep,
        ..Default::default()
    };
    if let Some(symbols) = symbols {
        opts.dot = symbols.dot;
        opts.dash = symbols.dash;
        if symbols.no_aliases {
            opts.dash_aliases = Some(Vec::new());
            opts.dot_aliases = Some(Vec::new());
        } else {
            if !symbols.dash_aliases.is_empty() {
                opts.dash_aliases = Some(symbols.dash_aliases);
            }
            if !symbols.dot_aliases.is_empty() {
                opts.dot_aliases = Some(symbols.dot_aliases);
            }
        }
    }
    opts
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let table_path = cli.table.as_deref();

    match cli.command {
        Command::Encode { text, seps, json } => {
            let table = load_table(table_path);
            let input = read_input(text);
            let opts = decode_options(seps, None);
            codec_ops::transcode_cmd(table, Mode::Encode, &input, &opts, json);
        }
        Command::Decode {
            morse,
            seps,
            symbols,
            json,
        } => {
            let table = load_table(table_path);
            let input = read_input(morse);
            let opts = decode_options(seps, Some(symbols));
            codec_ops::transcode_cmd(table, Mode::Decode, &input, &opts, json);
        }
        Command::Swap {
            mode,
            input,
            seps,
            symbols,
            json,
        } => {
            let table = load_table(table_path);
            let input = read_input(input);
            let opts = decode_options(seps, Some(symbols));
            codec_ops::swap_cmd(table, mode, &input, &opts, json);
        }
        Command::Table { command } => match command {
            TableCommand::Export => table_ops::table_export(),
            TableCommand::Validate { file } => table_ops::table_validate(&file),
            TableCommand::Chart => table_ops::table_chart(load_table(table_path)),
        },
    }
}

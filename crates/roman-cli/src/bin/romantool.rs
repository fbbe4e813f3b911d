use clap::{Parser, Subcommand};

use roman_cli::commands::{config_ops, convert_ops};
use roman_cli::logging;

#[derive(Parser)]
#[command(name = "romantool", version, about = "Roman numeral conversion tool")]
struct Cli {
    /// Custom settings TOML (defaults are built in)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Print encode/decode results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode integers (1-3999) as Roman numerals
    Encode {
        /// Integers to encode
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Decode Roman numerals to integers
    Decode {
        /// Numerals to decode
        #[arg(required = true)]
        numerals: Vec<String>,
        /// Reject non-canonical numerals such as IIII
        #[arg(long)]
        strict: bool,
    },
    /// Convert a file line by line and write JSONL
    Convert {
        /// Input file (one integer or numeral per line)
        input_file: String,
        /// Output file (stdout if omitted)
        output_file: Option<String>,
        /// Reject non-canonical numerals such as IIII
        #[arg(long)]
        strict: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    if let Some(ref path) = cli.settings {
        config_ops::load_settings(path);
    }

    match cli.command {
        Command::Encode { values } => convert_ops::encode_cmd(&values, cli.json),
        Command::Decode { numerals, strict } => {
            convert_ops::decode_cmd(&numerals, strict, cli.json)
        }
        Command::Convert {
            input_file,
            output_file,
            strict,
        } => convert_ops::convert_cmd(&input_file, output_file.as_deref(), strict),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

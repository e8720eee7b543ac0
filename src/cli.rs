// Idiomatic Rust CLI for Oxbase58.
//
// Uses explicit subcommands and long-form options: whole-stream encode and
// decode, plus fixed-width integer/UUID conversions.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use uuid::Uuid;

use crate::alphabet::ALPHABET;
use crate::error::DecodeError;

const BUF_SIZE: usize = 64 * 1024;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Base58 (Bitcoin alphabet) encoder/decoder.
#[derive(Parser, Debug)]
#[command(
    name = "oxbase58",
    version,
    about = "Base58 encoder/decoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Encode an input stream as Base58 text.
    Encode(CodecArgs),
    /// Decode Base58 text back into bytes.
    Decode(CodecArgs),
    /// Encode a fixed-width integer or UUID.
    EncodeInt(IntArgs),
    /// Decode a fixed-width integer or UUID.
    DecodeInt(IntArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Width {
    U16,
    U32,
    U64,
    U128,
    Uuid,
}

#[derive(Args, Debug)]
struct CodecArgs {
    /// Input file (default: stdin).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "input_pos")]
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "output_pos")]
    output: Option<PathBuf>,

    /// Write output to stdout.
    #[arg(short = 'c', long)]
    stdout: bool,

    /// Treat the binary side as hex text (encode input / decode output).
    #[arg(long)]
    hex: bool,

    /// Input file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    input_pos: Option<PathBuf>,

    /// Output file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    output_pos: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct IntArgs {
    /// Value width.
    #[arg(long, short = 'w', value_enum, default_value_t = Width::U64)]
    width: Width,

    /// Decimal integer or UUID (encode-int), Base58 token (decode-int).
    value: String,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Encode,
    Decode,
    EncodeInt,
    DecodeInt,
    Config,
}

struct Options {
    command: Command,
    use_stdout: bool,
    force: bool,
    quiet: bool,
    verbose: u8,
    hex: bool,
    width: Width,
    value: Option<String>,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    json_output: bool,
}

impl Options {
    fn new(command: Command, cli: &Cli) -> Self {
        Self {
            command,
            use_stdout: false,
            force: cli.force,
            quiet: cli.quiet,
            verbose: cli.verbose.min(2),
            hex: false,
            width: Width::U64,
            value: None,
            input_file: None,
            output_file: None,
            json_output: cli.json_output,
        }
    }

    fn with_codec(mut self, args: CodecArgs) -> Self {
        self.use_stdout = args.stdout;
        self.hex = args.hex;
        self.input_file = args.input.or(args.input_pos);
        self.output_file = args.output.or(args.output_pos);
        self
    }

    fn with_int(mut self, args: IntArgs) -> Self {
        self.width = args.width;
        self.value = Some(args.value);
        self
    }
}

fn resolve_options(mut cli: Cli) -> Options {
    let command = std::mem::replace(&mut cli.command, Cmd::Config);
    match command {
        Cmd::Encode(args) => Options::new(Command::Encode, &cli).with_codec(args),
        Cmd::Decode(args) => Options::new(Command::Decode, &cli).with_codec(args),
        Cmd::EncodeInt(args) => Options::new(Command::EncodeInt, &cli).with_int(args),
        Cmd::DecodeInt(args) => Options::new(Command::DecodeInt, &cli).with_int(args),
        Cmd::Config => Options::new(Command::Config, &cli),
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("oxbase58".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// I/O helpers
// ---------------------------------------------------------------------------

fn fail(context: &str, err: impl Display) -> i32 {
    eprintln!("oxbase58: {context}: {err}");
    1
}

fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    let mut reader: Box<dyn Read> = match path {
        Some(path) => Box::new(BufReader::with_capacity(BUF_SIZE, File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(data)
}

fn open_output(opts: &Options) -> Result<Box<dyn Write>, i32> {
    match (opts.use_stdout, &opts.output_file) {
        (true, _) | (_, None) => Ok(Box::new(BufWriter::with_capacity(
            BUF_SIZE,
            io::stdout().lock(),
        ))),
        (false, Some(path)) => {
            if path.exists() && !opts.force {
                eprintln!(
                    "oxbase58: output file exists, use -f to overwrite: {}",
                    path.display()
                );
                return Err(1);
            }
            match File::create(path) {
                Ok(f) => Ok(Box::new(BufWriter::with_capacity(BUF_SIZE, f))),
                Err(e) => Err(fail(&format!("output file: {}", path.display()), e)),
            }
        }
    }
}

fn write_output(opts: &Options, payload: &[u8]) -> i32 {
    let mut writer = match open_output(opts) {
        Ok(w) => w,
        Err(code) => return code,
    };
    if let Err(e) = writer.write_all(payload).and_then(|()| writer.flush()) {
        return fail("write error", e);
    }
    0
}

fn report(opts: &Options, input_size: usize, output_size: usize) {
    let command = match opts.command {
        Command::Encode => "encode",
        _ => "decode",
    };
    if opts.verbose > 0 && !opts.quiet {
        eprintln!("oxbase58: {command}: input size: {input_size}, output size: {output_size}");
    }
    if opts.json_output {
        let json = serde_json::json!({
            "command": command,
            "input_size": input_size,
            "output_size": output_size,
        });
        eprintln!("{json:#}");
    }
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("oxbase58 version {version} (Rust), Copyright (C) oxbase58 contributors");
    eprintln!("Licensed under the MIT License");

    let uuid = cfg!(feature = "uuid") as u8;
    let ptr_size = std::mem::size_of::<*const ()>();
    let alphabet = String::from_utf8_lossy(ALPHABET);

    eprintln!("UUID={uuid}");
    eprintln!("ALPHABET={alphabet}");
    eprintln!("sizeof(usize)={ptr_size}");

    0
}

// ---------------------------------------------------------------------------
// Encode / decode commands
// ---------------------------------------------------------------------------

fn cmd_encode(opts: &Options) -> i32 {
    let data = match read_input(opts.input_file.as_deref()) {
        Ok(d) => d,
        Err(e) => return fail("input", e),
    };

    let bytes = if opts.hex {
        match hex::decode(data.trim_ascii()) {
            Ok(b) => b,
            Err(e) => return fail("hex input", e),
        }
    } else {
        data
    };

    let mut encoded = match crate::encode(&bytes) {
        Ok(s) => s,
        Err(e) => return fail("encode error", e),
    };
    log::debug!("encoded {} bytes into {} chars", bytes.len(), encoded.len());
    report(opts, bytes.len(), encoded.len());

    encoded.push('\n');
    write_output(opts, encoded.as_bytes())
}

fn cmd_decode(opts: &Options) -> i32 {
    let data = match read_input(opts.input_file.as_deref()) {
        Ok(d) => d,
        Err(e) => return fail("input", e),
    };

    let text = match std::str::from_utf8(data.trim_ascii()) {
        Ok(t) => t,
        Err(e) => return fail("input is not UTF-8", e),
    };

    let decoded = match crate::decode(text) {
        Ok(b) => b,
        Err(e) => return fail("decode error", e),
    };
    log::debug!("decoded {} chars into {} bytes", text.len(), decoded.len());
    report(opts, text.len(), decoded.len());

    if opts.hex {
        let mut line = hex::encode(&decoded);
        line.push('\n');
        write_output(opts, line.as_bytes())
    } else {
        write_output(opts, &decoded)
    }
}

// ---------------------------------------------------------------------------
// Fixed-width commands
// ---------------------------------------------------------------------------

fn encode_int(width: Width, value: &str) -> Result<String, String> {
    let bad = |e: &dyn Display| format!("invalid {width:?} value '{value}': {e}");
    Ok(match width {
        Width::U16 => crate::encode_u16(value.parse().map_err(|e| bad(&e))?),
        Width::U32 => crate::encode_u32(value.parse().map_err(|e| bad(&e))?),
        Width::U64 => crate::encode_u64(value.parse().map_err(|e| bad(&e))?),
        Width::U128 => crate::encode_u128(value.parse().map_err(|e| bad(&e))?),
        Width::Uuid => crate::encode_uuid(Uuid::parse_str(value).map_err(|e| bad(&e))?),
    })
}

fn decode_int(width: Width, token: &str) -> Result<String, DecodeError> {
    Ok(match width {
        Width::U16 => crate::decode_u16(token)?.to_string(),
        Width::U32 => crate::decode_u32(token)?.to_string(),
        Width::U64 => crate::decode_u64(token)?.to_string(),
        Width::U128 => crate::decode_u128(token)?.to_string(),
        Width::Uuid => crate::decode_uuid(token)?.hyphenated().to_string(),
    })
}

fn cmd_fixed(opts: &Options) -> i32 {
    let value = opts.value.as_deref().unwrap_or_default();
    let result = match opts.command {
        Command::EncodeInt => encode_int(opts.width, value),
        _ => decode_int(opts.width, value.trim()).map_err(|e| e.to_string()),
    };
    match result {
        Ok(line) => {
            println!("{line}");
            0
        }
        Err(e) => fail("fixed-width", e),
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut opts = resolve_options(cli);

    // Warn if -c overrides output filename.
    if opts.use_stdout && !opts.quiet {
        if let Some(path) = opts.output_file.take() {
            eprintln!(
                "oxbase58: warning: -c option overrides output filename: {}",
                path.display()
            );
        }
    }

    let exit_code = match opts.command {
        Command::Encode => cmd_encode(&opts),
        Command::Decode => cmd_decode(&opts),
        Command::EncodeInt | Command::DecodeInt => cmd_fixed(&opts),
        Command::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use anyhow::{Context, Result};
use caesar_core::{CipherError, ROT13, Shift, Value, decipher, transform};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "caesar-cli")]
#[command(about = "Caesar shift (en|de)cipher – CLI tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shift letters forward
    Encrypt {
        #[command(flatten)]
        input: Input,

        /// Positions to shift by; fractions are truncated toward zero
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        shift: String,
    },

    /// Shift letters back, undoing `encrypt` with the same shift
    Decrypt {
        #[command(flatten)]
        input: Input,

        /// Shift that was used to encrypt
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        shift: String,
    },

    /// Apply ROT13 (its own inverse)
    Rot13 {
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args)]
struct Input {
    /// Text to transform; read from --file or stdin when omitted
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let out = match cli.command {
        Commands::Encrypt { input, shift } => {
            cmd_encrypt(&input, &Value::parse(&shift), cli.verbose)?
        }
        Commands::Decrypt { input, shift } => {
            cmd_decrypt(&input, &Value::parse(&shift), cli.verbose)?
        }
        Commands::Rot13 { input } => {
            cmd_encrypt(&input, &Value::Int(ROT13.amount()), cli.verbose)?
        }
    };

    print!("{}", out);
    if !out.ends_with('\n') {
        println!();
    }

    Ok(())
}

fn cmd_encrypt(input: &Input, shift: &Value, verbose: bool) -> Result<String> {
    let text = read_text(input)?;

    if verbose {
        eprintln!("[info] len(text)={}  shift={:?}", text.chars().count(), shift);
    }

    let out = transform(&Value::Text(text), Some(shift))?;

    Ok(out)
}

fn cmd_decrypt(input: &Input, shift: &Value, verbose: bool) -> Result<String> {
    let text = read_text(input)?;
    let shift: Shift = shift.as_shift().ok_or(CipherError::NonNumericShift)?;

    if verbose {
        eprintln!(
            "[info] len(text)={}  shift={}  inverse={}",
            text.chars().count(),
            shift.amount(),
            shift.inverse().normalized()
        );
    }

    Ok(decipher(&text, shift))
}

fn read_text(input: &Input) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    if let Some(path) = &input.file {
        return read_file(path);
    }

    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read text file: {}", path.display()))
}

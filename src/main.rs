#![forbid(unsafe_code)]

use anyhow::Context;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use passphrase_bitcoin::{prelude::*, qr::render_qr};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "\
Examples:
  passphrase-bitcoin -b
      Generate binary.txt using 256-bit system entropy

  passphrase-bitcoin -p
      Generate a BIP39 passphrase from an existing binary.txt

  passphrase-bitcoin -q
      Display passphrase as a compact terminal QR code

  passphrase-bitcoin -b -q
      Generate binary.txt and display the QR code of the passphrase

  passphrase-bitcoin -i 101
  passphrase-bitcoin -i abandon
      Show the index, word and 11-bit group for a single token";

#[derive(Parser)]
#[command(name = "passphrase-bitcoin")]
#[command(about = "A 256-bit entropy & BIP39 passphrase generator", long_about = None)]
#[command(version)]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Generate binary.txt only
    #[arg(short = 'b')]
    generate: bool,

    /// Generate passphrase from binary.txt
    #[arg(short = 'p')]
    passphrase: bool,

    /// Generate QR code of passphrase from binary.txt
    #[arg(short = 'q')]
    qr: bool,

    /// Look up a word or an 11-bit binary group
    #[arg(short = 'i', long = "inspect", value_name = "TOKEN")]
    inspect: Option<String>,

    /// Entropy size in bits for -b. binary.txt then has 2 lines (128), 3 lines (160, 192) or 4 lines (224, 256)
    #[arg(long, default_value_t = 256)]
    strength: usize,

    /// Entropy bit file
    #[arg(long, env = "PASSPHRASE_BINARY_FILE", default_value = "binary.txt")]
    file: PathBuf,

    /// Replacement 2048-word list, one word per line
    #[arg(long, env = "PASSPHRASE_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Print passphrase and inspect results as JSON
    #[arg(long)]
    json: bool,

    /// Swap dark and light modules in the QR code
    #[arg(long)]
    inverse: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn has_operation(&self) -> bool {
        self.generate || self.passphrase || self.qr || self.inspect.is_some()
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.has_operation() {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let mut config = EngineConfig::new().binary_path(&cli.file);
    if let Some(path) = &cli.wordlist {
        config = config.wordlist_path(path);
    }
    let engine = MnemonicEngine::from_config(&config).context("Error loading word list")?;

    if cli.generate {
        let bits = EntropyBits::from_bits(cli.strength)?;
        engine
            .generate_entropy(bits)
            .with_context(|| format!("Error writing {}", cli.file.display()))?;
        println!("{} generated successfully.", cli.file.display().to_string().green());
    }

    if cli.passphrase || cli.qr {
        let mnemonic = engine.derive_mnemonic()?;

        if cli.passphrase {
            print_passphrase(&mnemonic, cli.json)?;
        }

        if cli.qr {
            println!("{}", "Passphrase QR Code:".cyan().bold());
            println!("{}", render_qr(&mnemonic.phrase(), cli.inverse)?);
        }
    }

    if let Some(token) = &cli.inspect {
        match engine.inspect(token) {
            Ok(report) => print_inspection(&report, cli.json)?,
            Err(e) if e.is_recoverable() => {
                eprintln!("{} {}", "Error:".red().bold(), e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn print_passphrase(mnemonic: &Mnemonic, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        let out = json!({
            "wordCount": mnemonic.word_count(),
            "passphrase": mnemonic.phrase(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", "Passphrase:".yellow().bold());
    println!("{}", mnemonic.phrase());
    Ok(())
}

fn print_inspection(report: &Inspection, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Token: {}", report.token);
    println!("Index: {}", report.index.to_string().cyan());
    println!("Word:  {}", report.word.green().bold());
    println!("Bits:  {}", report.bits.cyan());
    Ok(())
}

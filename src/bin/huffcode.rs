use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};
use console::style;
use huffcode::{EngineOptions, FrequencyTable, HuffmanEngine, HuffmanError, Selection};
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(version, about = "Build a Huffman code from a message and use it")]
struct Cli {
    /// Increase output verbosity, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Select merge inputs with a binary heap instead of a linear scan
    #[arg(long, global = true)]
    heap: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the code of every symbol of the message
    Table { message: String },
    /// Print the message as a bitstring
    Encode { message: String },
    /// Decode a bitstring with the code trained on a message
    Decode {
        /// Message the code is built from
        #[arg(long)]
        train: String,
        bits: String,
        /// Fail instead of copying bits no code matches
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let options = EngineOptions {
        selection: if cli.heap {
            Selection::MinHeap
        } else {
            Selection::LinearScan
        },
        ..EngineOptions::default()
    };

    if let Command::Decode { bits, strict, .. } = &cli.command {
        if let Some(bad) = bits.chars().find(|c| *c != '0' && *c != '1') {
            if *strict {
                return Err(eyre!("bitstring contains {:?}, only 0 and 1 are allowed", bad));
            }
            debug!("bitstring contains {:?}, it will be copied as is", bad);
        }
    }

    run(cli.command, options).wrap_err("huffman coding failed")?;
    Ok(())
}

fn run(command: Command, options: EngineOptions) -> Result<(), HuffmanError> {
    match command {
        Command::Table { message } => {
            let engine = train(&message, options)?;
            for (symbol, code) in engine.code_table().iter() {
                println!("{:>6}  {}", format!("{:?}", symbol), style(code).cyan());
            }
        }
        Command::Encode { message } => {
            let engine = train(&message, options)?;
            let bits = engine.encode(&message)?;
            info!("encoded {} symbols into {} bits", message.chars().count(), bits.len());
            println!("{}", bits);
        }
        Command::Decode {
            train: training,
            bits,
            strict,
        } => {
            let engine = train(&training, options)?;
            let decoded = if strict {
                engine.decode_strict(&bits)?
            } else {
                engine.decode(&bits)
            };
            println!("{}", decoded);
        }
    }

    Ok(())
}

fn train(message: &str, options: EngineOptions) -> Result<HuffmanEngine, HuffmanError> {
    let frequencies = FrequencyTable::from_message(message);
    debug!("{} distinct symbols", frequencies.len());
    let engine = HuffmanEngine::build_with(&frequencies, options)?;
    info!(
        "built code for {} symbols ({} tree nodes, {:?} selection)",
        engine.code_table().len(),
        engine.tree().nodes().len(),
        engine.options().selection
    );
    Ok(engine)
}

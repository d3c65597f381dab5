// Sendkeyz CLI
// Compiles key-sequence strings and plays them on a virtual keyboard

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use sendkeyz_core::{
    compile, send_keys, CompileOptions, LayoutTable, VirtualDevice, DEFAULT_INTER_KEY_PAUSE,
};

/// Compile key-sequence strings and send them to a virtual keyboard
#[derive(Parser, Debug)]
#[command(name = "sendkeyz")]
#[command(version)]
#[command(about = "Key-sequence compiler and sender", long_about = None)]
struct Args {
    /// Seconds to wait between each key
    #[arg(short, long, default_value_t = DEFAULT_INTER_KEY_PAUSE)]
    pause: f64,

    /// Seconds to wait before starting
    #[arg(short, long, default_value_t = 0.0)]
    delay: f64,

    /// Read the key sequence from a file instead of the command line
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Treat spaces as the SPACE key instead of ignoring them
    #[arg(long)]
    with_spaces: bool,

    /// Treat tabs as the TAB key instead of ignoring them
    #[arg(long)]
    with_tabs: bool,

    /// Treat newlines as the ENTER key instead of ignoring them
    #[arg(long)]
    with_newlines: bool,

    /// Keyboard layout used for character resolution
    #[arg(long, value_enum, default_value_t = Layout::Us)]
    layout: Layout,

    /// Leave NUMLOCK state untouched while sending
    #[arg(long)]
    keep_numlock: bool,

    /// Compile and print the action list without creating a device
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Key sequences to send, one after another
    keys: Vec<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Layout {
    Us,
    Uk,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.pause < 0.0 {
        return Err("`pause` must be >= 0.0".into());
    }
    if args.delay < 0.0 {
        return Err("`delay` must be >= 0.0".into());
    }
    if args.file.is_some() && !args.keys.is_empty() {
        return Err("can't pass both a file and key strings on the command line".into());
    }

    let options = CompileOptions {
        with_spaces: args.with_spaces,
        with_tabs: args.with_tabs,
        with_newlines: args.with_newlines,
    };
    let layout = match args.layout {
        Layout::Us => LayoutTable::us_fallback(),
        Layout::Uk => LayoutTable::uk_fallback(),
    };

    let sequences: Vec<String> = match &args.file {
        Some(path) => vec![std::fs::read_to_string(path)?],
        None => args.keys.clone(),
    };
    if sequences.is_empty() {
        return Err("no key sequence given".into());
    }

    if args.delay > 0.0 {
        std::thread::sleep(Duration::from_secs_f64(args.delay));
    }

    if args.dry_run {
        for input in &sequences {
            let actions = compile(input, &options, &layout)?;
            for action in &actions {
                println!("{}", action);
            }
        }
        return Ok(());
    }

    let layout = Arc::new(layout);
    let mut device = VirtualDevice::new(Arc::clone(&layout))?;
    for input in &sequences {
        log::debug!("sending sequence ({} chars)", input.len());
        send_keys(
            input,
            &options,
            &layout,
            &mut device,
            args.pause,
            !args.keep_numlock,
        )?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

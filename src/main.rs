//! Luggage Pin CLI
//!
//! Usage:
//!   luggage-pin --digits 208             # Single evaluation
//!   luggage-pin --interactive            # Read set digits line by line
//!   luggage-pin --serve                  # HTTP API server
//!   luggage-pin --digits 208 --json      # JSON output
//!   luggage-pin --guide                  # How to read the set digits

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use luggage_pin::core::{run_server, CombinationGenerator, InputSanitizer};
use luggage_pin::types::{GenerationOutput, PinError};
use luggage_pin::{MIN_DIGITS, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "luggage-pin",
    version = VERSION,
    about = "Luggage Pin - Generate possible combinations for your luggage lock",
    long_about = "Luggage Pin lists the ten combinations reachable by turning every\n\
                  wheel of a luggage lock together, starting from the set digits\n\
                  shown through the small holes on each wheel.\n\n\
                  The most likely combination is 3 steps backward from the set\n\
                  digits (forward offset 7) and is highlighted.\n\n\
                  Modes:\n  \
                  --digits       Single evaluation\n  \
                  --interactive  Read set digits from stdin\n  \
                  --serve        HTTP API server mode"
)]
struct Args {
    /// Set digits, left to right (non-digits are ignored)
    #[arg(short, long)]
    digits: Option<String>,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show the order to try the candidates in
    #[arg(long)]
    verbose: bool,

    /// Debug logging on stderr
    #[arg(long)]
    debug: bool,

    /// Print how to find the set digits and open the lock
    #[arg(long)]
    guide: bool,
}

const GUIDE: [&str; 8] = [
    "Look for a small hole at the bottom of each number on your lock.",
    "The numbers with the holes visible are your set digits.",
    "Enter these digits in order from left to right.",
    "Generate the combinations.",
    "The most likely combination (highlighted) is 3 steps backward from your set digits.",
    "Try the highlighted combination first, then work your way through the others if needed.",
    "Turn all the numbers together one step at a time, trying each combination.",
    "Repeat this process (maximum 10 times) until you find the combination that opens the lock.",
];

#[tokio::main]
async fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    if args.no_color {
        colored::control::set_override(false);
    }

    if args.guide {
        print_guide();
    }

    if args.serve {
        run_serve(&args).await;
    } else if args.interactive {
        run_interactive_stdio(&args);
    } else if let Some(ref text) = args.digits {
        if let Err(e) = run_single(text, &args) {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    } else if !args.guide {
        run_interactive_stdio(&args);
    }
}

fn setup_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("logging disabled: {}", e);
    }
}

/// Run single evaluation
fn run_single(text: &str, args: &Args) -> Result<(), PinError> {
    let output = evaluate(text)?;
    if let Err(e) = write_output(&mut io::stdout(), &output, args) {
        error!("failed to write output: {}", e);
    }
    Ok(())
}

fn run_interactive_stdio(args: &Args) {
    let stdin = io::stdin();
    if let Err(e) = run_interactive(args, stdin.lock(), &mut io::stdout()) {
        error!("interactive session ended: {}", e);
    }
}

/// Run interactive mode, returning the number of accepted submissions.
///
/// With `--json` only JSON documents go to `out`; prompts are skipped and
/// rejected input is reported on stderr.
fn run_interactive<R: BufRead, W: Write>(args: &Args, input: R, out: &mut W) -> io::Result<u64> {
    if !args.json {
        write_header(out)?;
        writeln!(
            out,
            "Enter {} or more set digits and press Enter. Type 'quit' to exit.",
            MIN_DIGITS
        )?;
        writeln!(out)?;
    }

    let mut submissions = 0u64;
    let mut lines = input.lines();

    loop {
        if !args.json {
            write!(out, "digits > ")?;
            out.flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            if !args.json {
                writeln!(out, "\nSession ended. Submissions: {}", submissions)?;
            }
            break;
        }
        if line.is_empty() {
            continue;
        }

        match evaluate(line) {
            Ok(output) => {
                submissions += 1;
                write_output(out, &output, args)?;
            }
            Err(e) if args.json => eprintln!("{} {}", "⚠".yellow(), e.to_string().yellow()),
            Err(e) => writeln!(out, "{} {}", "⚠".yellow(), e.to_string().yellow())?,
        }
    }
    Ok(submissions)
}

/// Sanitize, validate and generate
fn evaluate(text: &str) -> Result<GenerationOutput, PinError> {
    let digits = InputSanitizer::new().parse(text)?;
    let candidates = CombinationGenerator::new().generate(&digits);
    Ok(GenerationOutput::new(&digits, &candidates))
}

fn write_output<W: Write>(out: &mut W, output: &GenerationOutput, args: &Args) -> io::Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(output).map_err(io::Error::other)?;
        return writeln!(out, "{}", json);
    }

    writeln!(out, "Possible combinations for {}:", output.input.bold())?;
    if args.no_color {
        writeln!(out, "{}", output.to_parseable_string())?;
    } else {
        writeln!(out, "{}", output.to_terminal_string())?;
    }
    writeln!(
        out,
        "Most likely: {} (3 steps backward)",
        output.most_likely.to_string().green().bold()
    )?;

    if args.verbose {
        writeln!(out)?;
        writeln!(out, "Try in this order:")?;
        for line in output.trial_lines() {
            writeln!(out, "  {}", line)?;
        }
    }
    writeln!(out)
}

fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "========================================".bold())?;
    writeln!(out, "{}", format!("  Luggage Pin v{}", VERSION).bold())?;
    writeln!(out, "{}", "========================================".bold())?;
    writeln!(out)
}

fn print_guide() {
    println!("{}", "How to identify the set digits and open your lock".bold());
    for (i, step) in GUIDE.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    if let Err(e) = write_header(&mut io::stdout()) {
        error!("failed to write header: {}", e);
    }
    if let Err(e) = run_server(&args.addr).await {
        error!("server error: {}", e);
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

use clap::Parser;
use dice_notation::roll::SharedRoller;
use dice_notation::{parse_with, Error, Roll, RollConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use tracing::Level;

/// Roll dice expressions like `2d6+3` and explain the result.
#[derive(Parser, Debug)]
#[command(name = "roll", version)]
struct Args {
    /// Expression to roll. Reads one expression per line from stdin when omitted.
    expression: Vec<String>,

    /// Seed the random source for reproducible rolls.
    #[arg(long)]
    seed: Option<u64>,

    /// Most dice allowed in a single term.
    #[arg(long, default_value_t = RollConfig::default().max_dice)]
    max_dice: u32,

    /// Most sides allowed on a die.
    #[arg(long, default_value_t = RollConfig::default().max_sides)]
    max_sides: u32,

    /// Most dice rolled across one expression.
    #[arg(long, default_value_t = RollConfig::default().max_rolls)]
    max_rolls: usize,

    /// Deepest nesting allowed in an expression.
    #[arg(long, default_value_t = RollConfig::default().max_depth)]
    max_depth: usize,

    /// Log every roll to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> RollConfig {
        RollConfig::new(self.max_dice, self.max_sides, self.max_rolls, self.max_depth)
    }
}

fn print_roll(out: &mut impl Write, roll: &Roll) -> io::Result<()> {
    writeln!(out, "{}", roll.value())?;
    writeln!(out, "{}", roll.description(false))?;
    writeln!(out, "{}", roll.explanation())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let config = args.config();
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let roller = SharedRoller::new(rng);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.expression.is_empty() {
        let input = args.expression.join(" ");
        let roll = parse_with(&input, roller, &config)?;
        print_roll(&mut out, &roll)?;
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_with(&line, roller.clone(), &config) {
            Ok(roll) => print_roll(&mut out, &roll)?,
            Err(why) => report(&why),
        }
    }
    Ok(())
}

fn report(err: &Error) {
    eprintln!("Error: {}", err);
}

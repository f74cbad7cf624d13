//! Generate a maze and search it, either once or interactively.
//!
//! Run: cargo run --bin mazegrid -- --topology rooms --search astar
//!      cargo run --bin mazegrid -- --interactive

use std::io::{self, BufRead, Write};

use clap::Parser;
use mazegrid_core::GridConfig;
use mazegrid_core::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use mazegrid_demos::{Command, Effect, Session, SessionConfig, logging};
use mazegrid_gen::Topology;
use mazegrid_paths::{HeuristicKind, SearchConfig, SearchKind};

#[derive(Parser, Debug)]
#[command(version, about, name = "mazegrid")]
struct Args {
    #[arg(long, default_value_t = DEFAULT_WIDTH, help = "Grid width in cells")]
    width: i32,
    #[arg(long, default_value_t = DEFAULT_HEIGHT, help = "Grid height in cells")]
    height: i32,
    #[arg(long, help = "Seed for generation and depth-first shuffles")]
    seed: Option<u64>,
    #[arg(long, default_value_t = Topology::Maze, help = "maze, open, rooms or obstacles")]
    topology: Topology,
    #[arg(long, help = "bfs, dfs, greedy or astar; all four when omitted")]
    search: Option<SearchKind>,
    #[arg(long, default_value_t = HeuristicKind::Manhattan, help = "manhattan or chebyshev")]
    heuristic: HeuristicKind,
    #[arg(short, long, help = "Read commands from stdin")]
    interactive: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "More log output (repeatable)")]
    verbose: u8,
}

const PROMPT_HELP: &str = "\
m/o/r/n  regenerate maze / obstacles / rooms / open grid
s X Y    move source      t X Y  move target
b/d/g/a  breadth-first / depth-first / greedy / A*
p        print            q      quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    let mut session = Session::new(SessionConfig {
        grid: GridConfig::new(args.width, args.height),
        topology: args.topology,
        search: SearchConfig {
            heuristic: args.heuristic,
            seed: args.seed,
        },
    })?;

    if args.interactive {
        return repl(&mut session);
    }

    let kinds = match args.search {
        Some(kind) => vec![kind],
        None => SearchKind::ALL.to_vec(),
    };
    for kind in kinds {
        println!("{}", session.search(kind));
    }
    print!("{}", session.grid());
    Ok(())
}

fn repl(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    println!("{PROMPT_HELP}");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        match session.update(cmd) {
            Some(Effect::Show(text)) => println!("{}", text.trim_end()),
            Some(Effect::End) => return Ok(()),
            None => {}
        }
    }
}

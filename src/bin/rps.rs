//! Terminal Rock-Paper-Scissors.
//!
//! Type `rock`, `paper` or `scissors` (or `r`/`p`/`s`) per round.
//! Options: --rounds, --seed, --round-delay-ms, --game-over-delay-ms, --bell

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rust_rps::core::config::{DEFAULT_GAME_OVER_DELAY_MS, DEFAULT_ROUND_DELAY_MS};
use rust_rps::{GameConfig, Move, MoveSource, SeededMoves, Session, TextPresenter, MAX_ROUNDS};

type Terminal<S, W> = Session<S, TextPresenter<W>>;

#[derive(Parser)]
#[command(author, version, about = "Play Rock-Paper-Scissors against the computer")]
struct Args {
    /// Rounds per game
    #[arg(long, default_value_t = MAX_ROUNDS)]
    rounds: u32,

    /// Seed for the computer's moves (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Input lockout after each round, in milliseconds
    #[arg(long, default_value_t = DEFAULT_ROUND_DELAY_MS)]
    round_delay_ms: u64,

    /// Pause before the final result, in milliseconds
    #[arg(long, default_value_t = DEFAULT_GAME_OVER_DELAY_MS)]
    game_over_delay_ms: u64,

    /// Ring the terminal bell on wins and losses
    #[arg(long)]
    bell: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig::default()
        .with_max_rounds(args.rounds)
        .with_round_delay_ms(args.round_delay_ms)
        .with_game_over_delay_ms(args.game_over_delay_ms);
    let source = match args.seed {
        Some(seed) => SeededMoves::new(seed),
        None => SeededMoves::from_entropy(),
    };
    log::info!("computer seed {}", source.seed());

    let presenter = TextPresenter::new(io::stdout()).with_bell(args.bell);
    let session = Session::new(config, source, presenter)?;
    play(session, io::stdin().lock())?;
    Ok(())
}

/// Drive `session` from `input` until quit or end of input, then print a
/// summary. Returns the finished session.
fn play<S, W, R>(
    mut session: Terminal<S, W>,
    input: R,
) -> Result<Terminal<S, W>, Box<dyn std::error::Error>>
where
    S: MoveSource,
    W: Write,
    R: BufRead,
{
    for line in input.lines() {
        let line = line?;
        let command = line.trim().to_ascii_lowercase();
        if command.is_empty() {
            continue;
        }
        if matches!(command.as_str(), "q" | "quit" | "exit") {
            break;
        }

        if session.engine().is_game_over() {
            match command.as_str() {
                "y" | "yes" | "again" => {
                    session.play_again();
                }
                "n" | "no" => break,
                _ => say(&mut session, "Play again? [y/n]")?,
            }
            continue;
        }

        let mv: Move = match command.parse() {
            Ok(mv) => mv,
            Err(err) => {
                say(&mut session, &err.to_string())?;
                continue;
            }
        };
        session.submit(mv, Instant::now())?;
        settle(&mut session);
        if session.engine().is_game_over() {
            say(&mut session, "Play again? [y/n]")?;
        }
    }

    let stats = session.stats();
    let mut summary = format!(
        "Games: {}  Won: {}  Lost: {}  Drawn: {}  Win rate: {:.0}%",
        stats.games_completed,
        stats.player_wins,
        stats.computer_wins,
        stats.drawn_games,
        stats.win_rate() * 100.0
    );
    if let Some(mv) = stats.favourite_move() {
        summary.push_str(&format!("  Favourite: {mv}"));
    }
    say(&mut session, &summary)?;
    Ok(session)
}

/// Wait out the display delays so every scheduled message is shown.
fn settle<S: MoveSource, W: Write>(session: &mut Terminal<S, W>) {
    while let Some(deadline) = session.next_deadline() {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        session.tick(Instant::now());
    }
}

fn say<S: MoveSource, W: Write>(session: &mut Terminal<S, W>, line: &str) -> io::Result<()> {
    let out = session.presenter_mut().get_mut();
    writeln!(out, "{line}")?;
    out.flush()
}

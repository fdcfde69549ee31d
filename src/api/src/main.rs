use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::info;

use one_line_scrabble::config::GameConfig;
use one_line_scrabble::game::GameSession;

const HELP: &str = "\
commands:
  place <square> <letter>   put a rack tile on a square (blank is _)
  remove <square>           send a tile back to the rack
  move <from> <to>          slide a placed tile
  submit                    score the word on the board
  clear                     return every placed tile to the rack
  more                      deal tiles when the hand is short
  restart                   start over (asks first)
  show | json               print the game
  help | quit";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Place(usize, char),
    Remove(usize),
    Move(usize, usize),
    Submit,
    Clear,
    More,
    Restart,
    Show,
    Json,
    Help,
    Quit,
}

fn parse_square(arg: Option<&str>) -> Result<usize> {
    let arg = arg.context("missing square number")?;
    arg.parse::<usize>()
        .with_context(|| format!("'{}' is not a square number", arg))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let command = match words.next().map(|w| w.to_ascii_lowercase()) {
            None => bail!("empty command"),
            Some(command) => command,
        };

        let parsed = match command.as_str() {
            "place" | "p" => {
                let square = parse_square(words.next())?;
                let mut letter = words.next().context("missing letter")?.chars();
                match (letter.next(), letter.next()) {
                    (Some(c), None) => Command::Place(square, c.to_ascii_uppercase()),
                    _ => bail!("a tile is a single letter"),
                }
            }
            "remove" | "r" => Command::Remove(parse_square(words.next())?),
            "move" | "m" => Command::Move(parse_square(words.next())?, parse_square(words.next())?),
            "submit" | "s" => Command::Submit,
            "clear" | "c" => Command::Clear,
            "more" => Command::More,
            "restart" => Command::Restart,
            "show" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("unknown command '{}'", other),
        };
        Ok(parsed)
    }
}

fn print_state(session: &GameSession) {
    println!();
    println!("board  {}", session.board());
    println!("rack   {}", session.rack());
    println!(
        "word {}  total {}  bag {}",
        session.current_word_score(),
        session.total_score(),
        session.tiles_remaining()
    );
    if let Some(status) = session.status() {
        println!("{:?}: {}", status.kind, status.message);
    }
}

fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Logs go to stderr so they don't interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!("Starting one-line scrabble");

    let config = GameConfig::from_env();
    info!(
        hand_size = config.hand_size,
        layout = %config.board_layout,
        seeded = config.seed.is_some(),
        "Loaded game configuration"
    );
    let mut session = GameSession::from_config(&config).context("invalid game configuration")?;
    session.deal_tiles();

    println!("{}", HELP);
    print_state(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        // Rejections are already recorded as the session status
        match command {
            Command::Place(square, letter) => {
                let _ = session.place(square, letter);
            }
            Command::Remove(square) => {
                if session.remove_from_board(square).is_none() {
                    println!("square {} is empty", square);
                }
            }
            Command::Move(from, to) => {
                let _ = session.move_tile(from, to);
            }
            Command::Submit => {
                let _ = session.submit_word();
            }
            Command::Clear => {
                session.clear_board();
            }
            Command::More => {
                let _ = session.request_more_tiles();
            }
            Command::Restart => {
                print!("Are you sure you want to restart? This will reset your score. [y/N] ");
                io::stdout().flush()?;
                let answer = match lines.next() {
                    Some(answer) => answer?,
                    None => break,
                };
                if answer.trim().eq_ignore_ascii_case("y") {
                    session.restart();
                }
            }
            Command::Show => {}
            Command::Json => {
                println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
                continue;
            }
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Quit => break,
        }
        print_state(&session);
    }

    info!(total_score = session.total_score(), "Game over");
    Ok(())
}

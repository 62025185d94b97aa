use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{
    config::load_settings, ClientError, GameController, GameKey, HttpPuzzleService, LoadOutcome,
    MoveReport, WinOutcome,
};
use shared::domain::{Coord, Difficulty};
use tokio::io::{AsyncBufReadExt, BufReader};

mod render;

use render::{render_board, render_footer};

#[derive(Parser, Debug)]
#[command(about = "Play Sudoku in the terminal against a remote puzzle service")]
struct Args {
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    difficulty: Option<Difficulty>,
    #[arg(long)]
    request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    New(Option<Difficulty>),
    Select(Coord),
    Deselect,
    Key(GameKey),
    Show,
    Help,
    Quit,
}

const HELP: &str = "\
commands:
  new [easy|medium|hard|expert]  load a fresh puzzle
  select <row> <col>             select a cell (1-9)
  deselect                       drop the selection
  1..9                           enter a digit (or toggle a mark in pencil mode)
  pencil                         toggle pencil mode
  clear                          clear the selected cell
  show                           print the board
  quit";

fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Command::Show);
    };
    let command = match head {
        "new" => Command::New(words.next().map(str::parse).transpose()?),
        "select" | "s" => {
            let row = parse_index(words.next(), "row")?;
            let col = parse_index(words.next(), "col")?;
            Command::Select(Coord::new(row, col))
        }
        "deselect" => Command::Deselect,
        "pencil" | "p" => Command::Key(GameKey::Shift),
        "clear" | "c" => Command::Key(GameKey::Delete),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => match GameKey::from_name(other) {
            GameKey::Digit(digit) => Command::Key(GameKey::Digit(digit)),
            _ => bail!("unknown command '{other}', try 'help'"),
        },
    };
    if let Some(extra) = words.next() {
        bail!("unexpected argument '{extra}'");
    }
    Ok(command)
}

fn parse_index(word: Option<&str>, what: &str) -> Result<usize> {
    let raw = word.with_context(|| format!("missing {what}"))?;
    let index: usize = raw
        .parse()
        .with_context(|| format!("{what} must be a number, got '{raw}'"))?;
    if !(1..=9).contains(&index) {
        bail!("{what} must be between 1 and 9");
    }
    Ok(index - 1)
}

fn describe_move(report: MoveReport) -> Result<Option<String>, ClientError> {
    let text = match report {
        MoveReport::Ignored(reason) => Some(format!("ignored: {reason:?}")),
        MoveReport::MarkToggled {
            digit, present, ..
        } => Some(format!(
            "mark {digit} {}",
            if present { "added" } else { "removed" }
        )),
        MoveReport::Failed(err) => return Err(err.into()),
        MoveReport::Committed(WinOutcome::Failed(err)) => return Err(err.into()),
        MoveReport::Rejected
        | MoveReport::Stale
        | MoveReport::Committed(WinOutcome::Won | WinOutcome::NotYet | WinOutcome::Stale) => None,
    };
    Ok(text)
}

async fn run_command(
    controller: &mut GameController,
    command: Command,
    default_difficulty: Difficulty,
) -> Result<Option<String>, ClientError> {
    match command {
        Command::New(difficulty) => {
            let difficulty = difficulty.unwrap_or(default_difficulty);
            match controller.new_puzzle(difficulty).await {
                LoadOutcome::Installed(_) | LoadOutcome::Superseded => {
                    Ok(Some(format!("{difficulty} puzzle loaded")))
                }
                LoadOutcome::Failed(err) => Err(err.into()),
                LoadOutcome::Invalid(err) => Err(err.into()),
            }
        }
        Command::Select(coord) => {
            controller.session_mut().select(coord)?;
            Ok(None)
        }
        Command::Deselect => {
            controller.session_mut().deselect();
            Ok(None)
        }
        Command::Key(key) => match controller.handle_key(key).await {
            Some(report) => describe_move(report),
            None => Ok(None),
        },
        Command::Show | Command::Help | Command::Quit => Ok(None),
    }
}

fn print_session(controller: &GameController) {
    println!("{}", render_board(controller.session()));
    println!("{}", render_footer(controller.session()));
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(difficulty) = args.difficulty {
        settings.default_difficulty = difficulty;
    }
    if let Some(secs) = args.request_timeout_secs {
        settings.request_timeout_secs = secs;
    }

    let service = HttpPuzzleService::from_settings(&settings)
        .with_context(|| format!("cannot use puzzle service at '{}'", settings.server_url))?;
    tracing::info!(server_url = %service.base_url(), "using puzzle service");
    let mut controller = GameController::new(Arc::new(service));

    match run_command(&mut controller, Command::New(None), settings.default_difficulty).await {
        Ok(Some(message)) => println!("{message}"),
        Ok(None) => {}
        Err(err) => println!("error: {err}"),
    }
    print_session(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            _ => {}
        }

        match run_command(&mut controller, command, settings.default_difficulty).await {
            Ok(Some(message)) => println!("{message}"),
            Ok(None) => {}
            Err(err) => println!("error: {err}"),
        }
        print_session(&controller);
    }

    Ok(())
}

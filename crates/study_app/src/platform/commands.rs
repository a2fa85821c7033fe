use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use study_core::{FileId, Msg};
use study_logging::study_warn;

use super::app::AppEvent;
use super::intake::{collect_handles, IntakeMode};

const HELP: &str = "commands: add <path> | drop <path> | rm <id> | drag | leave | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(PathBuf),
    Drop(PathBuf),
    Remove(FileId),
    DragEnter,
    DragLeave,
    Quit,
    Help,
}

/// Parses one stdin line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let command = match (verb, arg) {
        ("add", path) if !path.is_empty() => Command::Add(PathBuf::from(path)),
        ("drop", path) if !path.is_empty() => Command::Drop(PathBuf::from(path)),
        ("rm" | "remove", id) => {
            let id = id
                .trim_start_matches('#')
                .parse::<FileId>()
                .map_err(|_| format!("expected a file id, got {id:?}"))?;
            Command::Remove(id)
        }
        ("drag", "") => Command::DragEnter,
        ("leave", "") => Command::DragLeave,
        ("quit" | "exit", "") => Command::Quit,
        ("help" | "?", "") => Command::Help,
        _ => return Err(format!("unrecognised command {line:?}")),
    };
    Ok(Some(command))
}

fn to_event(command: Command) -> Option<AppEvent> {
    let event = match command {
        Command::Add(path) => AppEvent::Msg(collect_handles(&[path], IntakeMode::Picker).into_msg()),
        Command::Drop(path) => AppEvent::Msg(collect_handles(&[path], IntakeMode::Drop).into_msg()),
        Command::Remove(file_id) => AppEvent::Msg(Msg::RemoveClicked { file_id }),
        Command::DragEnter => AppEvent::Msg(Msg::DragEntered),
        Command::DragLeave => AppEvent::Msg(Msg::DragLeft),
        Command::Quit => AppEvent::QuitRequested,
        Command::Help => {
            eprintln!("{HELP}");
            return None;
        }
    };
    Some(event)
}

/// Reads commands from stdin until EOF or `quit`.
pub fn spawn_stdin_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        eprintln!("{HELP}");
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    study_warn!("stdin read failed: {}", err);
                    break;
                }
            };
            match parse_command(&line) {
                Ok(Some(command)) => {
                    let quit = command == Command::Quit;
                    if let Some(event) = to_event(command) {
                        if tx.send(event).is_err() {
                            return;
                        }
                    }
                    if quit {
                        return;
                    }
                }
                Ok(None) => {}
                Err(message) => eprintln!("{message}\n{HELP}"),
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

//! Interactive session key prompt
//!
//! Reads one line from a terminal on a background thread while a Ctrl-C
//! handler waits alongside it. Whichever reports first decides the outcome:
//! an entry, end of input, or an interrupt. The last two are cancellations;
//! a non-terminal stdin is refused outright.

use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::error::AppError;

/// Exit status for a Ctrl-C that arrives while no prompt is waiting
const SIGINT_EXIT_CODE: i32 = 130;

pub(crate) trait Prompter {
    /// Ask a single-line question and return the entered text
    fn ask(&self, message: &str) -> Result<String, AppError>;
}

pub(crate) struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, message: &str) -> Result<String, AppError> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return Err(AppError::Prompt(io::Error::other(
                "stdin is not an interactive terminal",
            )));
        }

        let (tx, rx) = mpsc::channel();
        ctrlc::set_handler(interrupt_handler(tx.clone()))
            .map_err(|e| AppError::Prompt(io::Error::other(e.to_string())))?;

        let mut stderr = io::stderr().lock();
        write!(stderr, "? {message}: ").map_err(AppError::Prompt)?;
        stderr.flush().map_err(AppError::Prompt)?;
        drop(stderr);

        spawn_reader(BufReader::new(io::stdin()), tx);
        wait_for_entry(&rx)
    }
}

enum PromptEvent {
    Entry(io::Result<Option<String>>),
    Interrupt,
}

/// Once the prompt has returned nobody is listening, so Ctrl-C falls back
/// to ending the process.
fn interrupt_handler(tx: Sender<PromptEvent>) -> impl FnMut() + Send + 'static {
    move || {
        if tx.send(PromptEvent::Interrupt).is_err() {
            std::process::exit(SIGINT_EXIT_CODE);
        }
    }
}

fn spawn_reader<R>(mut reader: R, tx: Sender<PromptEvent>)
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        let _ = tx.send(PromptEvent::Entry(read_entry(&mut reader)));
    });
}

fn wait_for_entry(events: &Receiver<PromptEvent>) -> Result<String, AppError> {
    match events.recv() {
        Ok(PromptEvent::Entry(Ok(Some(line)))) => Ok(line),
        Ok(PromptEvent::Entry(Ok(None)) | PromptEvent::Interrupt) => Err(AppError::Cancelled),
        Ok(PromptEvent::Entry(Err(e))) => Err(AppError::Prompt(e)),
        Err(_) => Err(AppError::Prompt(io::Error::other(
            "prompt closed without an entry",
        ))),
    }
}

/// `None` at end of input. The line terminator that submitted the entry is
/// not part of it.
fn read_entry(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

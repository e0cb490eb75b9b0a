//! # `tipease interactive`
//!
//! A line-oriented calculator session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin lines ──► parse_command ──► SplitSession edits ──► split printed │
//! │                                         │                               │
//! │                              suggest    ▼                               │
//! │                        AdvisoryDispatcher::dispatch (background task)   │
//! │                                         │                               │
//! │  completions (mpsc) ──► complete_advisory(ticket) ──► suggestion printed│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input keeps being read while a suggestion is outstanding. When input
//! ends the session waits for an outstanding suggestion before returning.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use tipease_advisor::{AdvisoryDispatcher, FairSplitAdvisor, DEFAULT_CHANNEL_CAPACITY};
use tipease_core::advisory::{evaluate, AdvisoryDecision};
use tipease_core::session::SplitSession;
use tipease_core::types::TipSelection;

use crate::error::{CliError, CliResult};
use crate::render::{render_advisory, render_split};

const HELP: &str = "\
Commands:
  bill <amount>       set the bill, e.g. bill 50.00
  tip <10|15|20|custom>
                      pick a tip preset or the custom tip
  custom <percent>    set and select a custom tip, e.g. custom 18
  people <count>      set the number of people
  suggest             ask how to share an uneven tip
  show                print the split and the current suggestion
  help                this list
  quit                leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Bill(String),
    Tip(TipSelection),
    Custom(String),
    People(String),
    Suggest,
    Show,
    Help,
    Quit,
}

/// Parses one line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> CliResult<Option<ReplCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let value = |name: &'static str| {
        if rest.is_empty() {
            Err(CliError::MissingArgument(name))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match word.to_lowercase().as_str() {
        "bill" => ReplCommand::Bill(value("bill")?),
        "tip" => ReplCommand::Tip(value("tip")?.parse()?),
        "custom" => ReplCommand::Custom(value("custom")?),
        "people" => ReplCommand::People(value("people")?),
        "suggest" => ReplCommand::Suggest,
        "show" => ReplCommand::Show,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => return Err(CliError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

/// Runs the session on stdin/stdout.
pub async fn run(advisor: FairSplitAdvisor) -> CliResult<()> {
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    run_session(advisor, input, &mut out).await
}

/// Runs the session over any line source and writer.
pub async fn run_session<R, W>(advisor: FairSplitAdvisor, input: R, out: &mut W) -> CliResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (dispatcher, mut completions) =
        AdvisoryDispatcher::new(advisor, DEFAULT_CHANNEL_CAPACITY);
    let mut session = SplitSession::new();
    let mut lines = input.lines();
    let mut input_open = true;

    writeln!(out, "TipEase. Type 'help' for commands.")?;
    write!(out, "{}", render_split(&session.input(), &session.split()))?;
    prompt(out)?;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(line) => {
                        match parse_command(&line) {
                            Ok(Some(ReplCommand::Quit)) => break,
                            Ok(Some(command)) => apply(&mut session, &dispatcher, command, out)?,
                            Ok(None) => {}
                            Err(e) => writeln!(out, "{}", e)?,
                        }
                        prompt(out)?;
                    }
                    None => {
                        debug!("Input closed");
                        input_open = false;
                    }
                }
            }
            Some(done) = completions.recv() => {
                if session.complete_advisory(done.ticket, done.result) {
                    writeln!(out)?;
                    writeln!(out, "{}", render_advisory(session.advisory()))?;
                    prompt(out)?;
                }
            }
        }

        if !input_open && !session.advisory().is_pending() {
            break;
        }
    }

    writeln!(out)?;
    Ok(())
}

fn apply<W: Write>(
    session: &mut SplitSession,
    dispatcher: &AdvisoryDispatcher,
    command: ReplCommand,
    out: &mut W,
) -> CliResult<()> {
    match command {
        ReplCommand::Bill(text) => session.set_bill(&text),
        ReplCommand::Tip(selection) => session.select_tip(selection),
        ReplCommand::Custom(text) => session.set_custom_tip(&text),
        ReplCommand::People(text) => session.set_people(&text),
        ReplCommand::Suggest => {
            match session.begin_advisory() {
                Some((ticket, request)) => {
                    dispatcher.dispatch(ticket, request);
                    writeln!(out, "{}", render_advisory(session.advisory()))?;
                }
                None => {
                    let split = session.split();
                    if let AdvisoryDecision::Skip(reason) =
                        evaluate(split.tip_amount, session.input().people)
                    {
                        writeln!(out, "{}", reason.message())?;
                    }
                }
            }
            return Ok(());
        }
        ReplCommand::Show => {
            write!(out, "{}", render_split(&session.input(), &session.split()))?;
            writeln!(out, "{}", render_advisory(session.advisory()))?;
            return Ok(());
        }
        ReplCommand::Help => {
            writeln!(out, "{}", HELP)?;
            return Ok(());
        }
        ReplCommand::Quit => return Ok(()),
    }

    // Every edit reprints the split
    write!(out, "{}", render_split(&session.input(), &session.split()))?;
    if session.can_request_advisory() && !session.advisory().is_pending() {
        writeln!(out, "Type 'suggest' for a fair-split suggestion.")?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> CliResult<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

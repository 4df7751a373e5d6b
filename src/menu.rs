//! Interactive menu shown when the binary runs without a subcommand.

use std::future::Future;
use std::io::Write;

use anyhow::Result;
use incubator_core::{Clock, SlotIndex, ACCEPTED_FORMATS};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::refresh::{auto_refresh, EXIT_MESSAGE};
use crate::session::Session;

const MENU: &str = "\n--- INCUBATOR MENU ---\n\
[1] Show incubator once\n\
[2] Add egg\n\
[3] Remove egg\n\
[4] Start auto-refresh\n\
[5] Exit";

/// How the menu ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user chose Exit, or input ran out.
    Quit,
    /// Cancelled by the user; the program should end.
    Interrupted,
}

/// Run the menu until the user exits or `interrupt` completes, whichever is
/// first. An interrupt at any prompt, or during auto-refresh, prints the exit
/// message.
pub async fn run_interactive<C, R, W, F>(
    session: &Session<C>,
    input: &mut R,
    out: &mut W,
    interrupt: F,
) -> Result<MenuExit>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: Write,
    F: Future<Output = ()>,
{
    let exit = tokio::select! {
        biased;
        _ = interrupt => MenuExit::Interrupted,
        exit = run_menu(session, input, out, std::future::pending::<()>) => exit?,
    };

    if exit == MenuExit::Interrupted {
        writeln!(out, "{EXIT_MESSAGE}")?;
        out.flush()?;
    }
    Ok(exit)
}

/// Run the menu until the user exits.
///
/// `shutdown` builds the future that cancels auto-refresh. Once auto-refresh
/// has been cancelled the menu does not resume.
pub async fn run_menu<C, R, W, S, F>(
    session: &Session<C>,
    input: &mut R,
    out: &mut W,
    shutdown: S,
) -> Result<MenuExit>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: Write,
    S: FnOnce() -> F,
    F: Future<Output = ()>,
{
    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(input, out, "Choose an option: ").await? else {
            return Ok(MenuExit::Quit);
        };

        match choice.as_str() {
            "1" => session.show(out)?,
            "2" => {
                let Some(slot) = prompt_slot(input, out).await? else {
                    continue;
                };
                let question = format!(
                    "Enter date ({}) or leave blank for today: ",
                    ACCEPTED_FORMATS.join(", ")
                );
                // end of input aborts the add; only a blank line means today
                let Some(date) = prompt(input, out, &question).await? else {
                    return Ok(MenuExit::Quit);
                };
                session.add(out, slot, Some(date.as_str()))?;
            }
            "3" => {
                let Some(slot) = prompt_slot(input, out).await? else {
                    continue;
                };
                session.remove(out, slot)?;
            }
            "4" => {
                auto_refresh(session, out, shutdown()).await?;
                return Ok(MenuExit::Interrupted);
            }
            "5" => return Ok(MenuExit::Quit),
            _ => writeln!(out, "Invalid choice.")?,
        }
    }
}

/// Print `question` and read one trimmed line. `None` at end of input.
async fn prompt<R, W>(input: &mut R, out: &mut W, question: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

async fn prompt_slot<R, W>(input: &mut R, out: &mut W) -> Result<Option<SlotIndex>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(answer) = prompt(input, out, "Enter slot number (1-8): ").await? else {
        return Ok(None);
    };
    match answer.parse::<SlotIndex>() {
        Ok(slot) => Ok(Some(slot)),
        Err(_) => {
            writeln!(out, "Invalid slot.")?;
            Ok(None)
        }
    }
}

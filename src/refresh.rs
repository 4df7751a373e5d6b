//! Periodic re-rendering until cancelled.

use std::future::Future;
use std::io::Write;

use anyhow::Result;
use incubator_core::Clock;
use tokio::time::MissedTickBehavior;

use crate::render::render;
use crate::session::Session;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const FOOTER: &str = "Press Ctrl+C to exit auto-refresh.";

/// Printed when the user cancels with Ctrl+C.
pub const EXIT_MESSAGE: &str = "\nExited.";

/// Clear the screen and render the grid once per refresh interval, starting
/// immediately, until `shutdown` completes. Returns the number of renders.
///
/// State is reloaded on every tick; nothing is ever written.
pub async fn auto_refresh<C, W, F>(session: &Session<C>, out: &mut W, shutdown: F) -> Result<u64>
where
    C: Clock,
    W: Write,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let mut ticker = tokio::time::interval(session.refresh_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut renders = 0;

    tracing::info!(interval = ?session.refresh_interval(), "starting auto-refresh");
    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                tracing::info!(renders, "auto-refresh cancelled");
                break;
            }
            _ = ticker.tick() => {
                let grid = render(session.incubator(), session.style())?;
                write!(out, "{CLEAR_SCREEN}{grid}\n{FOOTER}\n\n")?;
                out.flush()?;
                renders += 1;
            }
        }
    }

    Ok(renders)
}

/// Auto-refresh until `interrupt` completes, then print the exit message.
pub async fn watch<C, W, F>(session: &Session<C>, out: &mut W, interrupt: F) -> Result<u64>
where
    C: Clock,
    W: Write,
    F: Future<Output = ()>,
{
    let renders = auto_refresh(session, out, interrupt).await?;
    writeln!(out, "{EXIT_MESSAGE}")?;
    out.flush()?;
    Ok(renders)
}

/// Completes on Ctrl+C. If the handler cannot be installed the refresh runs
/// until the process is killed.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

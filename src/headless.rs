//! Headless mode: one run of one page console, streamed as plain lines.

use std::future::Future;
use std::io::Write;

use tracing::info;

use crate::console::{RunConsole, RunOutcome, StartPolicy};

/// Start `console`, write each entry to `out` as `[timestamp] message` as
/// it appears, and return once the run ends. If `interrupt` resolves first
/// the run is stopped and the stop line is written too.
pub async fn stream_run<W, F>(
    console: &mut RunConsole,
    out: &mut W,
    interrupt: F,
) -> std::io::Result<RunOutcome>
where
    W: Write,
    F: Future<Output = ()>,
{
    let mut changes = console.subscribe();
    let mut written = match console.policy() {
        StartPolicy::Reset => 0,
        StartPolicy::Append => console.len(),
    };
    console.start();
    tokio::pin!(interrupt);

    loop {
        for entry in console.entries_from(written) {
            writeln!(out, "{entry}")?;
            written += 1;
        }
        out.flush()?;
        if !console.is_running() {
            break;
        }
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = &mut interrupt => {
                info!(console = %console.name(), "interrupted");
                console.stop();
            }
        }
    }

    Ok(console.outcome().unwrap_or(RunOutcome::Stopped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{EmitMode, LogKind, ScriptedStep};
    use std::time::Duration;

    fn console() -> RunConsole {
        RunConsole::new(
            "Probe",
            vec![
                ScriptedStep::new(LogKind::Info, "first"),
                ScriptedStep::new(LogKind::Error, "second"),
            ],
            EmitMode::Paced {
                cadence: Duration::from_secs(1),
            },
        )
    }

    fn lines(out: Vec<u8>) -> Vec<String> {
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| l.split_once("] ").unwrap().1.to_string())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn streams_every_entry_then_completion() {
        let mut console = console();
        let mut out = Vec::new();
        let outcome = stream_run(&mut console, &mut out, std::future::pending())
            .await
            .unwrap();
        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(
            lines(out),
            ["first", "second", "Probe completed successfully"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn interrupt_stops_run() {
        let mut console = console();
        let mut out = Vec::new();
        let interrupt = tokio::time::sleep(Duration::from_millis(1500));
        let outcome = stream_run(&mut console, &mut out, interrupt).await.unwrap();
        assert_eq!(outcome, RunOutcome::Stopped);
        assert_eq!(lines(out), ["first", "Probe stopped by user"]);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_policy_streams_fresh_run() {
        let mut console = console();
        console.start();
        console.wait_idle().await;
        let mut out = Vec::new();
        stream_run(&mut console, &mut out, std::future::pending())
            .await
            .unwrap();
        assert_eq!(lines(out).len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn append_policy_skips_old_entries() {
        let mut console = console().with_policy(StartPolicy::Append);
        console.start();
        console.wait_idle().await;
        let mut out = Vec::new();
        stream_run(&mut console, &mut out, std::future::pending())
            .await
            .unwrap();
        assert_eq!(lines(out).len(), 3);
    }
}

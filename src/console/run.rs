//! RunConsole: the Idle/Running state machine behind every page console.
//!
//! A run is one activation from Idle back to Idle. The log and the running
//! flag live behind a mutex shared with a single spawned run task; the task
//! sleeps on `tokio::time` between steps and re-checks its generation under
//! the lock before every append, so a stopped or superseded run can never
//! write again even if its timer already fired.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::entry::{LogEntry, LogKind, ScriptedStep};

/// How a run turns its script into log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// One step per `cadence`, then one more cadence before completion.
    Paced { cadence: Duration },
    /// Every step immediately, completion after `completion_after`.
    Batch { completion_after: Duration },
}

/// What `start()` does with the existing log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPolicy {
    #[default]
    Reset,
    Append,
}

/// How the most recent run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Stopped,
}

/// Point-in-time copy of a console for rendering.
#[derive(Debug, Clone)]
pub struct ConsoleSnapshot {
    pub entries: Vec<LogEntry>,
    pub running: bool,
    pub outcome: Option<RunOutcome>,
    pub revision: u64,
}

#[derive(Debug, Default)]
struct Shared {
    log: Vec<LogEntry>,
    running: bool,
    generation: u64,
    run_name: String,
    outcome: Option<RunOutcome>,
}

impl Shared {
    fn is_current(&self, generation: u64) -> bool {
        self.running && self.generation == generation
    }
}

/// A scripted, cancellable log console.
pub struct RunConsole {
    name: String,
    steps: Arc<[ScriptedStep]>,
    mode: EmitMode,
    policy: StartPolicy,
    shared: Arc<Mutex<Shared>>,
    revision: Arc<watch::Sender<u64>>,
    timer: Option<JoinHandle<()>>,
}

impl RunConsole {
    pub fn new(name: impl Into<String>, steps: Vec<ScriptedStep>, mode: EmitMode) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            name: name.into(),
            steps: steps.into(),
            mode,
            policy: StartPolicy::default(),
            shared: Arc::new(Mutex::new(Shared::default())),
            revision: Arc::new(revision),
            timer: None,
        }
    }

    pub fn with_policy(mut self, policy: StartPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name used in the completion/stop lines of the next run.
    /// A run already in progress keeps the name it started with.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn steps(&self) -> &[ScriptedStep] {
        &self.steps
    }

    pub fn policy(&self) -> StartPolicy {
        self.policy
    }

    /// Begin a run. Ignored while a run is in progress; returns whether a
    /// run was started. Must be called inside a tokio runtime.
    pub fn start(&mut self) -> bool {
        let generation = {
            let mut state = lock(&self.shared);
            if state.running {
                debug!(console = %self.name, "start ignored, run in progress");
                return false;
            }
            if self.policy == StartPolicy::Reset {
                state.log.clear();
            }
            state.running = true;
            state.generation += 1;
            state.run_name = self.name.clone();
            state.outcome = None;
            if let EmitMode::Batch { .. } = self.mode {
                state.log.extend(self.steps.iter().map(ScriptedStep::to_entry));
            }
            state.generation
        };
        bump(&self.revision);

        if let Some(previous) = self.timer.take() {
            previous.abort();
        }
        let task = RunTask {
            shared: Arc::clone(&self.shared),
            revision: Arc::clone(&self.revision),
            steps: Arc::clone(&self.steps),
            mode: self.mode,
            generation,
            name: self.name.clone(),
        };
        self.timer = Some(tokio::spawn(task.run()));

        info!(console = %self.name, steps = self.steps.len(), generation, "run started");
        true
    }

    /// End the current run early. No-op while idle; returns whether a run
    /// was stopped.
    pub fn stop(&mut self) -> bool {
        {
            let mut state = lock(&self.shared);
            if !state.running {
                return false;
            }
            state.running = false;
            state.outcome = Some(RunOutcome::Stopped);
            let line = format!("{} stopped by user", state.run_name);
            state.log.push(LogEntry::now(LogKind::Warning, line));
        }
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        bump(&self.revision);
        info!(console = %self.name, "run stopped by user");
        true
    }

    /// Play/pause: stop a running console, start an idle one.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.stop()
        } else {
            self.start()
        }
    }

    /// Empty the log. Leaves the running flag alone.
    pub fn clear(&mut self) {
        {
            let mut state = lock(&self.shared);
            state.log.clear();
            state.outcome = None;
        }
        bump(&self.revision);
        debug!(console = %self.name, "log cleared");
    }

    pub fn is_running(&self) -> bool {
        lock(&self.shared).running
    }

    pub fn len(&self) -> usize {
        lock(&self.shared).log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        lock(&self.shared).outcome
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        lock(&self.shared).log.clone()
    }

    /// Entries from index `from` onward (empty if `from` is past the end).
    pub fn entries_from(&self, from: usize) -> Vec<LogEntry> {
        let state = lock(&self.shared);
        state.log.get(from..).map(<[_]>::to_vec).unwrap_or_default()
    }

    pub fn snapshot(&self) -> ConsoleSnapshot {
        let state = lock(&self.shared);
        ConsoleSnapshot {
            entries: state.log.clone(),
            running: state.running,
            outcome: state.outcome,
            revision: *self.revision.borrow(),
        }
    }

    /// Change feed: the revision bumps after every append, clear, or state flip.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Resolve once the console is idle.
    pub async fn wait_idle(&self) {
        let mut changes = self.subscribe();
        while self.is_running() {
            if changes.changed().await.is_err() {
                return;
            }
        }
    }
}

impl Drop for RunConsole {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// The timer chain of one run.
struct RunTask {
    shared: Arc<Mutex<Shared>>,
    revision: Arc<watch::Sender<u64>>,
    steps: Arc<[ScriptedStep]>,
    mode: EmitMode,
    generation: u64,
    name: String,
}

impl RunTask {
    async fn run(self) {
        match self.mode {
            EmitMode::Paced { cadence } => {
                for step in self.steps.iter() {
                    tokio::time::sleep(cadence).await;
                    if !self.append(step.to_entry()) {
                        return;
                    }
                }
                tokio::time::sleep(cadence).await;
            }
            EmitMode::Batch { completion_after } => {
                tokio::time::sleep(completion_after).await;
            }
        }
        self.finish();
    }

    fn append(&self, entry: LogEntry) -> bool {
        {
            let mut state = lock(&self.shared);
            if !state.is_current(self.generation) {
                return false;
            }
            state.log.push(entry);
        }
        bump(&self.revision);
        true
    }

    fn finish(&self) {
        {
            let mut state = lock(&self.shared);
            if !state.is_current(self.generation) {
                return;
            }
            state.running = false;
            state.outcome = Some(RunOutcome::Completed);
            let line = format!("{} completed successfully", self.name);
            state.log.push(LogEntry::now(LogKind::Success, line));
        }
        bump(&self.revision);
        info!(console = %self.name, generation = self.generation, "run completed");
    }
}

// Nothing panics while holding the lock, so a poisoned guard is still sound.
fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn bump(revision: &watch::Sender<u64>) {
    revision.send_modify(|r| *r += 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const SECOND: Duration = Duration::from_secs(1);

    fn two_steps() -> Vec<ScriptedStep> {
        vec![
            ScriptedStep::new(LogKind::Info, "a"),
            ScriptedStep::new(LogKind::Success, "b"),
        ]
    }

    fn paced() -> RunConsole {
        RunConsole::new("Probe", two_steps(), EmitMode::Paced { cadence: SECOND })
    }

    fn messages(console: &RunConsole) -> Vec<String> {
        console
            .entries()
            .iter()
            .map(|e| e.message().to_string())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn paced_run_emits_one_step_per_cadence() {
        let mut console = paced();
        assert!(console.start());
        assert!(console.is_running());
        assert!(console.is_empty());

        sleep(Duration::from_millis(1500)).await;
        assert_eq!(messages(&console), ["a"]);
        assert!(console.is_running());

        sleep(SECOND).await;
        assert_eq!(messages(&console), ["a", "b"]);
        assert!(console.is_running());

        sleep(SECOND).await;
        assert_eq!(messages(&console), ["a", "b", "Probe completed successfully"]);
        assert!(!console.is_running());
        let last = console.entries().pop().unwrap();
        assert_eq!(last.kind(), LogKind::Success);
        assert_eq!(console.outcome(), Some(RunOutcome::Completed));
    }

    #[tokio::test(start_paused = true)]
    async fn full_run_appends_steps_plus_completion() {
        let mut console = paced();
        console.start();
        console.wait_idle().await;
        assert_eq!(console.len(), console.steps().len() + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_appends_one_warning_and_cancels_pending_steps() {
        let mut console = paced();
        console.start();
        sleep(Duration::from_millis(1500)).await;

        assert!(console.stop());
        assert!(!console.is_running());
        let entries = console.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].kind(), LogKind::Warning);
        assert_eq!(entries[1].message(), "Probe stopped by user");
        assert_eq!(console.outcome(), Some(RunOutcome::Stopped));

        sleep(SECOND * 10).await;
        assert_eq!(console.len(), 2);
        assert!(!console.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_while_idle_is_noop() {
        let mut console = paced();
        assert!(!console.stop());
        assert!(console.is_empty());
        assert!(!console.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn start_while_running_is_ignored() {
        let mut console = paced();
        assert!(console.start());
        assert!(!console.start());
        sleep(Duration::from_millis(1500)).await;
        assert_eq!(messages(&console), ["a"]);
        console.wait_idle().await;
        assert_eq!(console.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_while_running_keeps_running() {
        let mut console = paced();
        console.start();
        sleep(Duration::from_millis(1500)).await;
        console.clear();
        assert!(console.is_empty());
        assert!(console.is_running());

        sleep(SECOND).await;
        assert_eq!(messages(&console), ["b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_when_idle_empties_log() {
        let mut console = paced();
        console.start();
        console.wait_idle().await;
        console.clear();
        assert_eq!(console.len(), 0);
        assert_eq!(console.outcome(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn batch_run_emits_all_then_completes_after_delay() {
        let mut console = RunConsole::new(
            "SEO Buddy Outreach",
            two_steps(),
            EmitMode::Batch {
                completion_after: SECOND * 10,
            },
        );
        console.start();
        assert_eq!(messages(&console), ["a", "b"]);

        sleep(SECOND * 9).await;
        assert!(console.is_running());
        assert_eq!(console.len(), 2);

        sleep(SECOND * 2).await;
        assert!(!console.is_running());
        assert_eq!(
            console.entries()[2].message(),
            "SEO Buddy Outreach completed successfully"
        );
    }

    fn batch() -> RunConsole {
        RunConsole::new(
            "Probe",
            two_steps(),
            EmitMode::Batch {
                completion_after: SECOND * 10,
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn stop_during_batch_suppresses_completion() {
        let mut console = batch();
        console.start();
        sleep(SECOND * 3).await;
        assert!(console.stop());

        sleep(SECOND * 20).await;
        assert_eq!(messages(&console), ["a", "b", "Probe stopped by user"]);
        assert!(!console.is_running());
        assert_eq!(console.outcome(), Some(RunOutcome::Stopped));
    }

    #[tokio::test(start_paused = true)]
    async fn batch_append_keeps_earlier_runs() {
        let mut console = batch().with_policy(StartPolicy::Append);
        console.start();
        console.stop();
        console.start();
        assert_eq!(
            messages(&console),
            ["a", "b", "Probe stopped by user", "a", "b"]
        );
        console.wait_idle().await;
        assert_eq!(console.len(), 6);
        assert_eq!(console.entries()[5].message(), "Probe completed successfully");
    }

    #[tokio::test(start_paused = true)]
    async fn reset_policy_clears_previous_run() {
        let mut console = paced();
        console.start();
        console.wait_idle().await;
        console.start();
        assert!(console.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn append_policy_keeps_previous_run() {
        let mut console = paced().with_policy(StartPolicy::Append);
        console.start();
        console.wait_idle().await;
        console.start();
        assert_eq!(console.len(), 3);
        console.wait_idle().await;
        assert_eq!(console.len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_after_stop_ignores_old_timers() {
        let mut console = paced().with_policy(StartPolicy::Append);
        console.start();
        sleep(Duration::from_millis(500)).await;
        console.stop();
        console.start();
        // The old run's first tick would have landed at t=1s.
        sleep(Duration::from_millis(800)).await;
        assert_eq!(console.len(), 1);
        sleep(Duration::from_millis(500)).await;
        assert_eq!(messages(&console), ["Probe stopped by user", "a"]);
    }

    #[tokio::test(start_paused = true)]
    async fn rename_applies_to_next_run() {
        let mut console = paced();
        console.start();
        console.rename("Other");
        console.wait_idle().await;
        assert_eq!(
            console.entries().last().unwrap().message(),
            "Probe completed successfully"
        );
        console.start();
        console.stop();
        assert_eq!(
            console.entries().last().unwrap().message(),
            "Other stopped by user"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_flips_state() {
        let mut console = paced();
        assert!(console.toggle());
        assert!(console.is_running());
        assert!(console.toggle());
        assert!(!console.is_running());
        assert_eq!(console.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn revision_bumps_on_every_change() {
        let mut console = paced();
        let rx = console.subscribe();
        let before = *rx.borrow();
        console.start();
        console.clear();
        console.stop();
        assert_eq!(*rx.borrow(), before + 3);
        assert_eq!(console.snapshot().revision, before + 3);
    }

    #[tokio::test(start_paused = true)]
    async fn length_only_shrinks_on_clear() {
        let mut console = paced().with_policy(StartPolicy::Append);
        let mut last = 0;
        let actions: [fn(&mut RunConsole); 4] = [
            |c| {
                c.start();
            },
            |c| {
                c.stop();
            },
            |c| {
                c.start();
            },
            |c| {
                c.toggle();
            },
        ];
        for action in actions.iter().cycle().take(12) {
            action(&mut console);
            sleep(Duration::from_millis(700)).await;
            let len = console.len();
            assert!(len >= last);
            last = len;
        }
        console.clear();
        assert_eq!(console.len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_timer() {
        let mut console = paced();
        console.start();
        let shared = Arc::clone(&console.shared);
        drop(console);
        sleep(SECOND * 5).await;
        assert!(lock(&shared).log.is_empty());
    }

    #[test]
    fn entries_from_past_end_is_empty() {
        let console = paced();
        assert!(console.entries_from(5).is_empty());
    }
}

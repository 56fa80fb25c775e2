//! Simulated run console: scripted agent runs streamed into a log.
//!
//! Every "analysis" on the dashboard is a replay: a fixed list of
//! [`ScriptedStep`]s turned into timestamped [`LogEntry`] lines on a timer.
//!
//! ## Architecture
//!
//! - `entry`: LogKind, LogEntry, ScriptedStep
//! - `run`: RunConsole, the Idle/Running state machine, cancellable timer task

pub mod entry;
pub mod run;

pub use entry::{LogEntry, LogKind, ScriptedStep};
pub use run::{ConsoleSnapshot, EmitMode, RunConsole, RunOutcome, StartPolicy};

//! Dashboard pages that host a console, and the canned data they replay.
//!
//! Nothing here is computed: each page supplies a fixed list of steps and
//! a fixed set of records shown once a run completes.

pub mod automation;
pub mod backlinks;
pub mod mindpal;

use crate::config::ConsoleConfig;
use crate::console::{EmitMode, RunConsole, ScriptedStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Page {
    /// Backlink profile analysis.
    Backlinks,
    /// MindPal competitor intelligence.
    Mindpal,
    /// AI automation workflows.
    Automation,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Backlinks, Page::Mindpal, Page::Automation];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Backlinks => "Backlink Analyzer",
            Page::Mindpal => "MindPal Intelligence",
            Page::Automation => "AI Automation",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Page::Backlinks => "Analyze and monitor your backlink profile",
            Page::Mindpal => "AI-powered competitor analysis and opportunity discovery",
            Page::Automation => "Manage your automated link building workflows",
        }
    }

    /// Name printed in the completion and stop lines.
    pub fn run_name(&self) -> &'static str {
        match self {
            Page::Backlinks => "Backlink analysis",
            Page::Mindpal => "MindPal analysis",
            Page::Automation => automation::WORKFLOWS[0].name,
        }
    }

    pub fn steps(&self) -> Vec<ScriptedStep> {
        match self {
            Page::Backlinks => backlinks::steps(),
            Page::Mindpal => mindpal::STEPS.to_vec(),
            Page::Automation => automation::STEPS.to_vec(),
        }
    }

    /// Analyses replay at the configured cadence; the automation run
    /// dumps its whole log and completes after the batch delay.
    pub fn emit_mode(&self, config: &ConsoleConfig) -> EmitMode {
        match self {
            Page::Backlinks | Page::Mindpal => EmitMode::Paced {
                cadence: config.cadence(),
            },
            Page::Automation => EmitMode::Batch {
                completion_after: config.batch_completion(),
            },
        }
    }

    pub fn console(&self, config: &ConsoleConfig) -> RunConsole {
        RunConsole::new(self.run_name(), self.steps(), self.emit_mode(config))
            .with_policy(config.start_policy)
    }

    pub fn next(&self) -> Page {
        let i = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Page {
        let i = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

//! AI Automation page: workflow roster and the outreach run log.

use crate::console::{LogKind, ScriptedStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    Active,
    Running,
    Scheduled,
    Paused,
}

impl WorkflowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStatus::Active => "Active",
            WorkflowStatus::Running => "Running",
            WorkflowStatus::Scheduled => "Scheduled",
            WorkflowStatus::Paused => "Paused",
        }
    }

    /// Counted in the "N workflows active" header.
    pub fn is_live(&self) -> bool {
        matches!(self, WorkflowStatus::Active | WorkflowStatus::Running)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub status: WorkflowStatus,
    pub success_rate: &'static str,
    pub last_run: &'static str,
}

pub static WORKFLOWS: &[Workflow] = &[
    Workflow {
        id: 1,
        name: "SEO Buddy Outreach",
        description: "Automated email outreach using SEO Buddy platform",
        status: WorkflowStatus::Active,
        success_rate: "23%",
        last_run: "2 hours ago",
    },
    Workflow {
        id: 2,
        name: "MindPal Competitor Analysis",
        description: "Continuous competitor monitoring and opportunity discovery",
        status: WorkflowStatus::Running,
        success_rate: "87%",
        last_run: "15 minutes ago",
    },
    Workflow {
        id: 3,
        name: "Link Distribution Optimizer",
        description: "AI-powered link distribution across website pages",
        status: WorkflowStatus::Scheduled,
        success_rate: "94%",
        last_run: "1 day ago",
    },
    Workflow {
        id: 4,
        name: "Follow-up Sequence",
        description: "Automated follow-up emails for link building campaigns",
        status: WorkflowStatus::Paused,
        success_rate: "31%",
        last_run: "3 hours ago",
    },
];

/// Workflows counted as active in the page header.
pub fn live_count() -> usize {
    WORKFLOWS.iter().filter(|w| w.status.is_live()).count()
}

pub static STEPS: &[ScriptedStep] = &[
    ScriptedStep::new(LogKind::Info, "Initializing SEO Buddy automation agent..."),
    ScriptedStep::new(LogKind::Success, "Successfully logged into SEO Buddy platform"),
    ScriptedStep::new(LogKind::Info, "Reading campaign instructions from Link Chest..."),
    ScriptedStep::new(LogKind::Info, "Found 23 new prospects to contact"),
    ScriptedStep::new(LogKind::Info, "Personalizing outreach emails using AI..."),
    ScriptedStep::new(LogKind::Success, "Sent personalized email to tech-blog.com"),
    ScriptedStep::new(LogKind::Success, "Sent personalized email to marketing-hub.com"),
    ScriptedStep::new(LogKind::Warning, "Email bounce detected for invalid-email@domain.com"),
    ScriptedStep::new(LogKind::Info, "Scheduling follow-up for non-responders in 5 days"),
    ScriptedStep::new(LogKind::Success, "Campaign batch completed - 20 emails sent successfully"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_workflows_live() {
        assert_eq!(live_count(), 2);
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = WORKFLOWS.iter().map(|w| w.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), WORKFLOWS.len());
    }

    #[test]
    fn run_log_has_one_bounce_warning() {
        let warnings = STEPS.iter().filter(|s| s.kind == LogKind::Warning).count();
        assert_eq!(warnings, 1);
    }
}

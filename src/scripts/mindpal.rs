//! MindPal Intelligence page: competitor analysis replay and its results.

use crate::console::{LogKind, ScriptedStep};

pub static STEPS: &[ScriptedStep] = &[
    ScriptedStep::new(LogKind::Info, "Initializing MindPal AI agents..."),
    ScriptedStep::new(LogKind::Info, "Connecting to competitor analysis modules..."),
    ScriptedStep::new(LogKind::Success, "Successfully connected to domain analysis API"),
    ScriptedStep::new(LogKind::Info, "Analyzing competitor backlink profiles..."),
    ScriptedStep::new(LogKind::Info, "Extracting top-performing content..."),
    ScriptedStep::new(LogKind::Success, "Found 234 potential link opportunities"),
    ScriptedStep::new(LogKind::Info, "Analyzing domain authority and relevance..."),
    ScriptedStep::new(LogKind::Info, "Extracting contact information..."),
    ScriptedStep::new(LogKind::Success, "Analysis complete! Generated actionable insights"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competitor {
    pub domain: &'static str,
    pub domain_authority: u8,
    pub backlinks: u32,
    pub referring_domains: u32,
    pub top_keywords: &'static [&'static str],
    pub traffic: &'static str,
    pub opportunities: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    High,
    Medium,
    Low,
}

impl Relevance {
    pub fn label(&self) -> &'static str {
        match self {
            Relevance::High => "High",
            Relevance::Medium => "Medium",
            Relevance::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opportunity {
    pub domain: &'static str,
    pub domain_authority: u8,
    pub relevance: Relevance,
    pub contact_email: &'static str,
    pub last_post: &'static str,
    pub topics: &'static [&'static str],
}

pub static COMPETITORS: &[Competitor] = &[
    Competitor {
        domain: "competitor1.com",
        domain_authority: 78,
        backlinks: 12450,
        referring_domains: 2340,
        top_keywords: &["AI technology", "machine learning", "automation"],
        traffic: "2.4M",
        opportunities: 156,
    },
    Competitor {
        domain: "competitor2.com",
        domain_authority: 65,
        backlinks: 8920,
        referring_domains: 1890,
        top_keywords: &["digital marketing", "SEO tools", "analytics"],
        traffic: "1.2M",
        opportunities: 98,
    },
];

pub static OPPORTUNITIES: &[Opportunity] = &[
    Opportunity {
        domain: "tech-blog.com",
        domain_authority: 72,
        relevance: Relevance::High,
        contact_email: "editor@tech-blog.com",
        last_post: "2024-01-12",
        topics: &["AI", "Technology", "Innovation"],
    },
    Opportunity {
        domain: "industry-news.com",
        domain_authority: 68,
        relevance: Relevance::Medium,
        contact_email: "news@industry-news.com",
        last_post: "2024-01-14",
        topics: &["Business", "Technology", "Startups"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_step_analysis() {
        assert_eq!(STEPS.len(), 9);
        assert_eq!(STEPS[0].message, "Initializing MindPal AI agents...");
        assert!(STEPS.iter().all(|s| matches!(s.kind, LogKind::Info | LogKind::Success)));
    }

    #[test]
    fn opportunities_sorted_by_relevance() {
        assert_eq!(OPPORTUNITIES[0].relevance, Relevance::High);
        assert_eq!(OPPORTUNITIES[1].relevance.label(), "Medium");
    }
}

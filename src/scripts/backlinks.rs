//! Backlink Analyzer page: sample backlink profile and the replay that "finds" it.

use crate::console::{LogKind, ScriptedStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Active,
    Broken,
}

impl LinkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LinkStatus::Active => "Active",
            LinkStatus::Broken => "Broken",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    Dofollow,
    Nofollow,
}

impl LinkType {
    pub fn label(&self) -> &'static str {
        match self {
            LinkType::Dofollow => "Dofollow",
            LinkType::Nofollow => "Nofollow",
        }
    }
}

/// One row of the analyzer's results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backlink {
    pub url: &'static str,
    pub domain_authority: u8,
    pub status: LinkStatus,
    pub link_type: LinkType,
    pub anchor_text: &'static str,
    pub referring_domains: u32,
    pub traffic: &'static str,
}

pub static BACKLINKS: &[Backlink] = &[
    Backlink {
        url: "https://techcrunch.com/article-example",
        domain_authority: 92,
        status: LinkStatus::Active,
        link_type: LinkType::Dofollow,
        anchor_text: "AI Technology",
        referring_domains: 15420,
        traffic: "2.3M",
    },
    Backlink {
        url: "https://blog.example.com/post",
        domain_authority: 45,
        status: LinkStatus::Broken,
        link_type: LinkType::Nofollow,
        anchor_text: "Learn More",
        referring_domains: 234,
        traffic: "45K",
    },
    Backlink {
        url: "https://news.site.com/article",
        domain_authority: 78,
        status: LinkStatus::Active,
        link_type: LinkType::Dofollow,
        anchor_text: "Industry Report",
        referring_domains: 5670,
        traffic: "890K",
    },
];

/// The analyzer replay: one line per sample backlink, bracketed by
/// setup and summary lines.
pub fn steps() -> Vec<ScriptedStep> {
    let mut steps = vec![
        ScriptedStep::new(LogKind::Info, "Fetching backlink profiles..."),
        ScriptedStep::new(LogKind::Info, "Resolving referring domains..."),
    ];
    for link in BACKLINKS {
        let step = match link.status {
            LinkStatus::Active => ScriptedStep::owned(
                LogKind::Success,
                format!(
                    "Active {} link at {} (DA {}, anchor \"{}\")",
                    link.link_type.label().to_lowercase(),
                    link.url,
                    link.domain_authority,
                    link.anchor_text
                ),
            ),
            LinkStatus::Broken => ScriptedStep::owned(
                LogKind::Error,
                format!("Broken link detected at {} (DA {})", link.url, link.domain_authority),
            ),
        };
        steps.push(step);
    }
    let broken = BACKLINKS
        .iter()
        .filter(|l| l.status == LinkStatus::Broken)
        .count();
    if broken > 0 {
        steps.push(ScriptedStep::owned(
            LogKind::Warning,
            format!("{broken} broken backlink(s) need reclaiming"),
        ));
    }
    steps.push(ScriptedStep::owned(
        LogKind::Success,
        format!(
            "Analysis complete: {} backlinks, {} active, {} broken",
            BACKLINKS.len(),
            BACKLINKS.len() - broken,
            broken
        ),
    ));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_backlink_plus_framing() {
        let steps = steps();
        // 2 setup + 3 links + 1 warning + 1 summary
        assert_eq!(steps.len(), 7);
        assert_eq!(steps[3].kind, LogKind::Error);
        assert!(steps[3].message.contains("blog.example.com"));
    }

    #[test]
    fn summary_counts_statuses() {
        let steps = steps();
        let summary = steps.last().unwrap();
        assert_eq!(summary.kind, LogKind::Success);
        assert_eq!(summary.message, "Analysis complete: 3 backlinks, 2 active, 1 broken");
    }
}

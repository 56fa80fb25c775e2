//! TuiApp: the model half of the TUI.
//!
//! Owns one console per page. Everything the view needs is read through
//! console snapshots; the only view state kept here is scroll position.

use std::time::Duration;

use crate::config::ConsoleConfig;
use crate::console::RunConsole;
use crate::scripts::{automation, Page};

/// A page and the console it hosts.
pub struct PageState {
    pub page: Page,
    pub console: RunConsole,
    pub scroll: u16,
    /// Pinned to the newest entry. Re-armed on every console change.
    pub auto_scroll: bool,
    pub viewport_height: u16,
    /// Largest scroll offset at the last render.
    pub max_scroll: u16,
    /// Console revision the view last rendered.
    pub seen_revision: u64,
}

impl PageState {
    fn new(page: Page, config: &ConsoleConfig) -> Self {
        Self {
            page,
            console: page.console(config),
            scroll: 0,
            auto_scroll: true,
            viewport_height: 0,
            max_scroll: 0,
            seen_revision: 0,
        }
    }
}

pub struct TuiApp {
    pub pages: Vec<PageState>,
    pub active: Page,
    /// Highlighted row in the automation roster.
    pub selected_workflow: usize,
    pub should_quit: bool,
    pub tick: Duration,
}

impl TuiApp {
    pub fn new(config: &ConsoleConfig, start_page: Page) -> Self {
        Self {
            pages: Page::ALL
                .iter()
                .map(|page| PageState::new(*page, config))
                .collect(),
            active: start_page,
            selected_workflow: 0,
            should_quit: false,
            tick: config.tick(),
        }
    }

    pub fn page(&self, page: Page) -> &PageState {
        self.pages
            .iter()
            .find(|p| p.page == page)
            .unwrap_or(&self.pages[0])
    }

    pub fn page_mut(&mut self, page: Page) -> &mut PageState {
        let index = self.pages.iter().position(|p| p.page == page).unwrap_or(0);
        &mut self.pages[index]
    }

    pub fn active_page(&self) -> &PageState {
        self.page(self.active)
    }

    pub fn active_page_mut(&mut self) -> &mut PageState {
        self.page_mut(self.active)
    }

    pub fn switch_to(&mut self, page: Page) {
        self.active = page;
    }

    /// Play/pause button of the active console.
    pub fn toggle_active(&mut self) {
        let state = self.active_page_mut();
        state.console.toggle();
        state.auto_scroll = true;
    }

    pub fn clear_active(&mut self) {
        let state = self.active_page_mut();
        state.console.clear();
        state.scroll = 0;
        state.auto_scroll = true;
    }

    /// Run the highlighted workflow. Ignored while the automation console
    /// is already running.
    pub fn run_selected_workflow(&mut self) {
        let Some(workflow) = automation::WORKFLOWS.get(self.selected_workflow) else {
            return;
        };
        let state = self.page_mut(Page::Automation);
        if state.console.is_running() {
            return;
        }
        state.console.rename(workflow.name);
        state.console.start();
        state.auto_scroll = true;
    }

    pub fn select_workflow(&mut self, delta: isize) {
        let len = automation::WORKFLOWS.len() as isize;
        if len == 0 {
            return;
        }
        let next = (self.selected_workflow as isize + delta).rem_euclid(len);
        self.selected_workflow = next as usize;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        let state = self.active_page_mut();
        state.auto_scroll = false;
        state.scroll = state.scroll.saturating_sub(lines);
    }

    /// Scrolling back down to the newest line pins the view again.
    pub fn scroll_down(&mut self, lines: u16) {
        let state = self.active_page_mut();
        state.scroll = state.scroll.saturating_add(lines).min(state.max_scroll);
        if state.scroll >= state.max_scroll {
            state.auto_scroll = true;
        }
    }

    pub fn scroll_to_end(&mut self) {
        self.active_page_mut().auto_scroll = true;
    }

    pub fn scroll_to_top(&mut self) {
        let state = self.active_page_mut();
        state.auto_scroll = false;
        state.scroll = 0;
    }

    /// Stop every running console. Called on quit.
    pub fn shutdown(&mut self) {
        for state in &mut self.pages {
            state.console.stop();
        }
    }
}

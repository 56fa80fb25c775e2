//! linkdeck: simulated agent-run consoles for a backlink dashboard.
//!
//! Every "analysis" the dashboard offers is a replay of canned log lines
//! on a timer. The library owns the replay engine (`console`), the canned
//! data (`scripts`), and the terminal front end that hosts them (`tui`).

pub mod config;
pub mod console;
pub mod headless;
pub mod scripts;
pub mod tui;

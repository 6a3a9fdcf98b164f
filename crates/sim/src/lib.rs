//! Reference marketplace run: two stores, two customers, every event kind.

pub mod scenario;

pub use scenario::{ScenarioReport, run};

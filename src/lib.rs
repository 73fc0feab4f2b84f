pub mod bisect;
pub mod cli;
pub mod error;
pub mod probe;
pub mod report;
pub mod vcs;

pub use bisect::{bisect, Bisection, Probe, Verdict};
pub use error::{LastGreenError, Result};
pub use probe::{find_last_passing, BuildCommand, BuildProbe};
pub use vcs::{discover_repository, Repository, VcsKind};

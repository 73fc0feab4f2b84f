use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static GIT_REVISION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^commit ([[:xdigit:]]{40})$").unwrap());
static HG_REVISION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^changeset:\s*(.*:.*)$").unwrap());
static BZR_REVISION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^revno: (.*)$").unwrap());

/// Supported version control flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsKind {
    Git,
    Mercurial,
    Bazaar,
}

impl VcsKind {
    /// Detection priority when a directory carries more than one marker.
    pub const ALL: [VcsKind; 3] = [VcsKind::Git, VcsKind::Mercurial, VcsKind::Bazaar];

    /// Metadata subdirectory that marks a repository root.
    pub fn marker(self) -> &'static str {
        match self {
            VcsKind::Git => ".git",
            VcsKind::Mercurial => ".hg",
            VcsKind::Bazaar => ".bzr",
        }
    }

    pub fn program(self) -> &'static str {
        match self {
            VcsKind::Git => "git",
            VcsKind::Mercurial => "hg",
            VcsKind::Bazaar => "bzr",
        }
    }

    pub fn log_args(self) -> &'static [&'static str] {
        match self {
            // Decorations would append "(HEAD -> main)" to the commit line
            VcsKind::Git => &["log", "--no-decorate"],
            VcsKind::Mercurial | VcsKind::Bazaar => &["log"],
        }
    }

    /// Checkout arguments; the revision is appended after these.
    pub fn checkout_args(self) -> &'static [&'static str] {
        match self {
            VcsKind::Git => &["checkout"],
            VcsKind::Mercurial => &["revert", "--all", "-r"],
            VcsKind::Bazaar => &["revert", "-r"],
        }
    }

    /// Pattern with exactly one capture group per revision entry in the log.
    pub fn revision_pattern(self) -> &'static Regex {
        match self {
            VcsKind::Git => &GIT_REVISION,
            VcsKind::Mercurial => &HG_REVISION,
            VcsKind::Bazaar => &BZR_REVISION,
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

//! Search for the newest revision that still passes, below the newest failing one.
//!
//! History is ordered newest first. The search runs in three phases:
//!
//! 1. scan from the newest revision until one fails,
//! 2. probe at doubling distances below it until one passes,
//! 3. bisect the window left by the last two probes of phase 2.

use crate::error::{LastGreenError, Result};
use serde::Serialize;

/// Outcome of testing one revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// Something that can tell whether a revision builds.
///
/// `Err` means the revision could not be tested at all and aborts the search.
pub trait Probe {
    fn test(&mut self, commit: &str) -> Result<Verdict>;
}

impl<F> Probe for F
where
    F: FnMut(&str) -> Result<Verdict>,
{
    fn test(&mut self, commit: &str) -> Result<Verdict> {
        self(commit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeRecord {
    pub index: usize,
    pub commit: String,
    pub verdict: Verdict,
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bisection {
    /// Last passing revision.
    pub commit: String,
    pub index: usize,
    /// Newest revision found failing in the first phase.
    pub first_failing: String,
    /// Every probe in the order it ran.
    pub probes: Vec<ProbeRecord>,
}

pub struct Bisector<'a, P> {
    history: &'a [String],
    probe: P,
    probes: Vec<ProbeRecord>,
}

impl<'a, P: Probe> Bisector<'a, P> {
    pub fn new(history: &'a [String], probe: P) -> Self {
        Self {
            history,
            probe,
            probes: Vec::new(),
        }
    }

    fn test(&mut self, index: usize) -> Result<Verdict> {
        let history = self.history;
        let commit = &history[index];
        let verdict = self.probe.test(commit)?;
        log::info!("[{}] {} {:?}", index, commit, verdict);
        self.probes.push(ProbeRecord {
            index,
            commit: commit.clone(),
            verdict,
        });
        Ok(verdict)
    }

    pub fn run(mut self) -> Result<Bisection> {
        let failing = self.find_failing()?;
        let (lo, hi) = self.find_passing(failing)?;
        let index = self.refine(lo, hi)?;

        Ok(Bisection {
            commit: self.history[index].clone(),
            index,
            first_failing: self.history[failing].clone(),
            probes: self.probes,
        })
    }

    /// Phase 1: index of the newest failing revision.
    fn find_failing(&mut self) -> Result<usize> {
        for index in 0..self.history.len() {
            if self.test(index)? == Verdict::Fail {
                return Ok(index);
            }
        }
        Err(LastGreenError::NoFailingRevision)
    }

    /// Phase 2: returns `(lo, hi)` with `lo` failing and `hi` passing.
    fn find_passing(&mut self, failing: usize) -> Result<(usize, usize)> {
        let oldest = self.history.len() - 1;
        let mut lo = failing;
        let mut step = 1usize;

        loop {
            let index = failing.saturating_add(step).min(oldest);
            if index == lo {
                return Err(LastGreenError::NoPassingRevision {
                    before: self.history[failing].clone(),
                });
            }
            match self.test(index)? {
                Verdict::Pass => return Ok((lo, index)),
                Verdict::Fail => {
                    lo = index;
                    step = step.saturating_mul(2);
                }
            }
        }
    }

    /// Phase 3: narrows `(lo, hi)` until they are adjacent and returns `hi`.
    fn refine(&mut self, mut lo: usize, mut hi: usize) -> Result<usize> {
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            match self.test(mid)? {
                Verdict::Pass => hi = mid,
                Verdict::Fail => lo = mid,
            }
        }
        Ok(hi)
    }
}

/// Convenience wrapper around [`Bisector`].
pub fn bisect<P: Probe>(history: &[String], probe: P) -> Result<Bisection> {
    Bisector::new(history, probe).run()
}

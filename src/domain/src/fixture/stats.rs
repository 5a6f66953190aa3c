use crate::fixture::{Fixture, FixtureStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FixtureStats {
    pub matched: usize,
    pub pending: usize,
    pub completed: usize,
}

impl FixtureStats {
    pub fn collect<'a>(fixtures: impl IntoIterator<Item = &'a Fixture>) -> Self {
        fixtures
            .into_iter()
            .fold(FixtureStats::default(), |mut stats, fixture| {
                match fixture.status {
                    FixtureStatus::Open => stats.pending += 1,
                    FixtureStatus::Matched { .. } => stats.matched += 1,
                    FixtureStatus::Completed { .. } => stats.completed += 1,
                }
                stats
            })
    }
}

use crate::club::Club;
use crate::fixture::{Fixture, FixtureStats, FixtureStatus, MatchRecommendation};
use crate::referee::{AvailabilityPolicy, Referee, available_referees};
use crate::roster::{Roster, RosterError};
use crate::shared::{ClubId, FixtureId, RefereeId};
use crate::state::{Action, ActionError, Session};
use log::{debug, info};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
struct Sequences {
    club: u32,
    referee: u32,
    fixture: u32,
}

/// The whole in-memory application: clubs, the referee pool, fixtures and
/// the per-fixture matching bookkeeping. Changed only through [`AppState::apply`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    clubs: Vec<Club>,
    referees: Vec<Referee>,
    fixtures: Vec<Fixture>,
    session: Session,

    recommendations: BTreeMap<FixtureId, Vec<MatchRecommendation>>,
    matching: BTreeSet<FixtureId>,

    briefs: BTreeMap<FixtureId, String>,
    briefing: BTreeSet<FixtureId>,

    sequences: Sequences,
}

impl AppState {
    pub fn new() -> Self {
        AppState::default()
    }

    pub fn from_roster(roster: Roster) -> Result<Self, RosterError> {
        roster.validate()?;

        Ok(AppState {
            clubs: roster.clubs,
            referees: roster.referees,
            ..AppState::default()
        })
    }

    /// Returns the state that results from `action`, leaving `self` untouched.
    pub fn apply(&self, action: Action) -> Result<AppState, ActionError> {
        let mut next = self.clone();
        next.reduce(action)?;
        Ok(next)
    }

    fn reduce(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::RegisterClub(draft) => {
                if draft.name.trim().is_empty() {
                    return Err(ActionError::InvalidClub("name"));
                }
                if draft.location.trim().is_empty() {
                    return Err(ActionError::InvalidClub("location"));
                }

                let id = self.next_club_id();
                let club = draft.into_club(id);
                info!("club registered: {} ({})", club.name, club.id);

                self.sequences.club += 1;
                self.clubs.push(club);
            }
            Action::RegisterReferee { form, today } => {
                let id = self.next_referee_id();
                let referee = form.into_referee(id, today)?;
                info!(
                    "referee registered: {} ({}), minor: {}",
                    referee.name, referee.id, referee.is_minor
                );

                self.sequences.referee += 1;
                self.session = Session::Referee(referee.id.clone());
                self.referees.push(referee);
            }
            Action::SignInClub(club_id) => {
                if self.club(&club_id).is_none() {
                    return Err(ActionError::ClubNotFound(club_id));
                }
                self.session = Session::Club(club_id);
            }
            Action::SignInReferee(referee_id) => {
                if self.referee(&referee_id).is_none() {
                    return Err(ActionError::RefereeNotFound(referee_id));
                }
                self.session = Session::Referee(referee_id);
            }
            Action::SignOut => {
                self.session = Session::Guest;
            }
            Action::PostFixture(draft) => {
                let club_id = self.signed_in_club()?.clone();
                let club = self
                    .club(&club_id)
                    .ok_or_else(|| ActionError::ClubNotFound(club_id.clone()))?;

                let fixture = draft.into_fixture(self.next_fixture_id(), club);
                info!(
                    "fixture posted: {} vs {} on {} ({})",
                    club.name, fixture.opponent, fixture.date, fixture.id
                );

                self.sequences.fixture += 1;
                self.fixtures.push(fixture);
            }
            Action::BeginMatchRequest(fixture_id) => {
                let fixture = self.owned_fixture(&fixture_id)?;
                if !fixture.is_open() {
                    return Err(ActionError::FixtureNotOpen(fixture_id));
                }
                if self.matching.contains(&fixture_id) {
                    return Err(ActionError::MatchRequestPending(fixture_id));
                }

                debug!("referee search started for fixture {}", fixture_id);
                self.matching.insert(fixture_id);
            }
            Action::ReceiveRecommendations {
                fixture_id,
                recommendations,
            } => {
                self.matching.remove(&fixture_id);

                let still_open = self.fixture(&fixture_id).is_some_and(Fixture::is_open);

                if still_open {
                    debug!(
                        "{} recommendations stored for fixture {}",
                        recommendations.len(),
                        fixture_id
                    );
                    self.recommendations.insert(fixture_id, recommendations);
                } else {
                    debug!("late recommendations for fixture {} discarded", fixture_id);
                }
            }
            Action::AssignReferee {
                fixture_id,
                referee_id,
            } => {
                self.owned_fixture(&fixture_id)?;

                let recommended = self
                    .recommendations
                    .get(&fixture_id)
                    .is_some_and(|recs| recs.iter().any(|rec| rec.referee_id == referee_id));

                let fixture = self
                    .fixtures
                    .iter_mut()
                    .find(|fixture| fixture.id == fixture_id)
                    .ok_or_else(|| ActionError::FixtureNotFound(fixture_id.clone()))?;

                if fixture.is_open() && !recommended {
                    return Err(ActionError::NotRecommended {
                        fixture_id,
                        referee_id,
                    });
                }

                fixture.assign(referee_id.clone())?;
                self.recommendations.remove(&fixture_id);

                info!("referee {} assigned to fixture {}", referee_id, fixture_id);
            }
            Action::CompletePlayedFixtures { today } => {
                for fixture in self
                    .fixtures
                    .iter_mut()
                    .filter(|fixture| fixture.date < today && fixture.assigned_referee_id().is_some())
                {
                    if fixture.complete().is_ok() {
                        info!("fixture {} completed", fixture.id);
                    }
                }
            }
            Action::ClaimBriefs(fixture_ids) => {
                for fixture_id in fixture_ids {
                    if !self.briefs.contains_key(&fixture_id) {
                        self.briefing.insert(fixture_id);
                    }
                }
            }
            Action::RecordBrief { fixture_id, brief } => {
                self.briefing.remove(&fixture_id);

                if self.fixture(&fixture_id).is_some() {
                    self.briefs.insert(fixture_id, brief);
                }
            }
        }

        Ok(())
    }

    fn signed_in_club(&self) -> Result<&ClubId, ActionError> {
        self.session.club_id().ok_or(ActionError::NotSignedInAsClub)
    }

    fn owned_fixture(&self, fixture_id: &FixtureId) -> Result<&Fixture, ActionError> {
        let club_id = self.signed_in_club()?;
        let fixture = self
            .fixture(fixture_id)
            .ok_or_else(|| ActionError::FixtureNotFound(fixture_id.clone()))?;

        if &fixture.club_id != club_id {
            return Err(ActionError::NotFixtureOwner(fixture_id.clone()));
        }

        Ok(fixture)
    }

    // Id allocation skips ids already taken by roster records.

    pub fn next_club_id(&self) -> ClubId {
        next_free(self.sequences.club, ClubId::from_sequence, |id| {
            self.club(id).is_some()
        })
    }

    pub fn next_referee_id(&self) -> RefereeId {
        next_free(self.sequences.referee, RefereeId::from_sequence, |id| {
            self.referee(id).is_some()
        })
    }

    pub fn next_fixture_id(&self) -> FixtureId {
        next_free(self.sequences.fixture, FixtureId::from_sequence, |id| {
            self.fixture(id).is_some()
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn referees(&self) -> &[Referee] {
        &self.referees
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn club(&self, id: &ClubId) -> Option<&Club> {
        self.clubs.iter().find(|club| &club.id == id)
    }

    pub fn referee(&self, id: &RefereeId) -> Option<&Referee> {
        self.referees.iter().find(|referee| &referee.id == id)
    }

    pub fn fixture(&self, id: &FixtureId) -> Option<&Fixture> {
        self.fixtures.iter().find(|fixture| &fixture.id == id)
    }

    pub fn club_fixtures<'a>(&'a self, club_id: &'a ClubId) -> impl Iterator<Item = &'a Fixture> {
        self.fixtures
            .iter()
            .filter(move |fixture| &fixture.club_id == club_id)
    }

    pub fn club_stats(&self, club_id: &ClubId) -> FixtureStats {
        FixtureStats::collect(self.club_fixtures(club_id))
    }

    /// Referees free on the fixture's date, in registration order.
    pub fn eligible_referees(
        &self,
        fixture_id: &FixtureId,
        policy: AvailabilityPolicy,
    ) -> Result<Vec<Referee>, ActionError> {
        let fixture = self
            .fixture(fixture_id)
            .ok_or_else(|| ActionError::FixtureNotFound(fixture_id.clone()))?;

        Ok(available_referees(fixture.date, &self.referees, policy)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn recommendations(&self, fixture_id: &FixtureId) -> Option<&[MatchRecommendation]> {
        self.recommendations.get(fixture_id).map(Vec::as_slice)
    }

    pub fn is_matching(&self, fixture_id: &FixtureId) -> bool {
        self.matching.contains(fixture_id)
    }

    /// Matched fixtures the referee is appointed to, oldest first.
    pub fn assignments(&self, referee_id: &RefereeId) -> Vec<&Fixture> {
        let mut assigned: Vec<&Fixture> = self
            .fixtures
            .iter()
            .filter(|fixture| {
                matches!(fixture.status, FixtureStatus::Matched { .. })
                    && fixture.is_assigned_to(referee_id)
            })
            .collect();

        assigned.sort_by_key(|fixture| (fixture.date, fixture.time));
        assigned
    }

    /// Assigned fixtures with neither a brief nor a brief in progress.
    pub fn fixtures_needing_brief(&self, referee_id: &RefereeId) -> Vec<FixtureId> {
        self.assignments(referee_id)
            .into_iter()
            .filter(|fixture| {
                !self.briefs.contains_key(&fixture.id) && !self.briefing.contains(&fixture.id)
            })
            .map(|fixture| fixture.id.clone())
            .collect()
    }

    pub fn brief(&self, fixture_id: &FixtureId) -> Option<&str> {
        self.briefs.get(fixture_id).map(String::as_str)
    }
}

fn next_free<T>(sequence: u32, make: impl Fn(u32) -> T, taken: impl Fn(&T) -> bool) -> T {
    let mut sequence = sequence + 1;
    loop {
        let id = make(sequence);
        if !taken(&id) {
            return id;
        }
        sequence += 1;
    }
}

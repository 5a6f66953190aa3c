use crate::club::ClubDraft;
use crate::fixture::{FixtureDraft, MatchRecommendation};
use crate::referee::RegistrationForm;
use crate::shared::{ClubId, FixtureId, RefereeId};
use chrono::NaiveDate;

/// Every way the application state can change.
#[derive(Debug, Clone)]
pub enum Action {
    RegisterClub(ClubDraft),
    /// Registers a referee and signs them in.
    RegisterReferee {
        form: RegistrationForm,
        today: NaiveDate,
    },
    SignInClub(ClubId),
    SignInReferee(RefereeId),
    SignOut,
    /// Signed-in club posts a new OPEN fixture.
    PostFixture(FixtureDraft),
    /// Marks a fixture as waiting on the ranking service.
    BeginMatchRequest(FixtureId),
    /// Ranking result for a fixture; dropped if the fixture is no longer open.
    ReceiveRecommendations {
        fixture_id: FixtureId,
        recommendations: Vec<MatchRecommendation>,
    },
    /// Club selects one of the pending recommendations.
    AssignReferee {
        fixture_id: FixtureId,
        referee_id: RefereeId,
    },
    /// Completes matched fixtures dated before `today`.
    CompletePlayedFixtures {
        today: NaiveDate,
    },
    ClaimBriefs(Vec<FixtureId>),
    RecordBrief {
        fixture_id: FixtureId,
        brief: String,
    },
}

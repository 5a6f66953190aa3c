pub mod club;
pub mod fixture;
pub mod ranking;
pub mod referee;
pub mod roster;
pub mod shared;
pub mod state;

pub use club::{Club, ClubDraft};
pub use fixture::{
    AgeGroup, Fixture, FixtureDraft, FixtureStats, FixtureStatus, MatchRecommendation,
    TransitionError, normalize_recommendations,
};
pub use ranking::{HeuristicRanker, RankingWeights};
pub use referee::{
    AvailabilityPolicy, BadgeLevel, Referee, RegistrationError, RegistrationForm,
    available_referees, weekday_name,
};
pub use roster::{Roster, RosterError};
pub use shared::{ClubId, FixtureId, RefereeId, SOUTHAMPTON_AREAS};
pub use state::{Action, ActionError, AppState, Session};

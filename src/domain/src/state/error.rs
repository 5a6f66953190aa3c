use crate::fixture::TransitionError;
use crate::referee::RegistrationError;
use crate::shared::{ClubId, FixtureId, RefereeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("registration rejected: {0}")]
    Registration(#[from] RegistrationError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("club {0} not found")]
    ClubNotFound(ClubId),
    #[error("referee {0} not found")]
    RefereeNotFound(RefereeId),
    #[error("fixture {0} not found")]
    FixtureNotFound(FixtureId),
    #[error("club {0} is missing")]
    InvalidClub(&'static str),
    #[error("sign in as a club first")]
    NotSignedInAsClub,
    #[error("sign in as a referee first")]
    NotSignedInAsReferee,
    #[error("fixture {0} belongs to another club")]
    NotFixtureOwner(FixtureId),
    #[error("fixture {0} is no longer open")]
    FixtureNotOpen(FixtureId),
    #[error("a referee search for fixture {0} is already running")]
    MatchRequestPending(FixtureId),
    #[error("referee {referee_id} was not recommended for fixture {fixture_id}")]
    NotRecommended {
        fixture_id: FixtureId,
        referee_id: RefereeId,
    },
}

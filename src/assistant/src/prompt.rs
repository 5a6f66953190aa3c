use domain::{Fixture, Referee, RefereeId, weekday_name};
use serde::Serialize;

/// What the ranking model gets to see of a referee. Safeguarding fields
/// (date of birth, guardian contact) never leave the application.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CandidateView<'a> {
    id: &'a RefereeId,
    name: &'a str,
    badge_level: String,
    location: &'a str,
    experience_years: u8,
    available_days: Vec<&'static str>,
}

impl<'a> From<&'a Referee> for CandidateView<'a> {
    fn from(referee: &'a Referee) -> Self {
        CandidateView {
            id: &referee.id,
            name: &referee.name,
            badge_level: referee.badge_level.to_string(),
            location: &referee.location,
            experience_years: referee.experience_years,
            available_days: referee
                .available_days
                .iter()
                .map(|day| weekday_name(*day))
                .collect(),
        }
    }
}

pub fn ranking_prompt(fixture: &Fixture, candidates: &[Referee]) -> Result<String, serde_json::Error> {
    let fixture_json = serde_json::to_string(fixture)?;
    let candidates_json = serde_json::to_string(
        &candidates.iter().map(CandidateView::from).collect::<Vec<_>>(),
    )?;

    Ok(format!(
        "You are a Football Association referee appointments officer for the Southampton, UK area.

Rank the available referees for this fixture.

Fixture: vs {opponent}, {league}, {age_group}, at {location} (Southampton) on {date} at {time}.
Fixture JSON: {fixture_json}

Available referees JSON: {candidates_json}

Apply this logic:
1. Proximity: referees based closer to the venue (within Southampton) are better.
2. Badge: higher badge levels (Level 4/5) suit senior and adult games; Level 7 is fine for U14 and younger.
3. Experience: more years is better for tougher leagues.

Reply with only a JSON array. Each element must be an object with:
- \"refereeId\" (string, one of the ids above)
- \"score\" (number from 0 to 100)
- \"reasoning\" (string, one sentence on why they fit)",
        opponent = fixture.opponent,
        league = fixture.league,
        age_group = fixture.age_group,
        location = fixture.location,
        date = fixture.date,
        time = fixture.time.format("%H:%M"),
    ))
}

pub fn brief_prompt(fixture: &Fixture, referee_name: &str) -> String {
    format!(
        "Write a short, encouraging and professional pre-match email brief from RefConnect to the referee ({referee_name}) for a game in Southampton.

Details:
- Location: {location}
- League: {league}
- Teams: vs {opponent}
- Kick-off: {date} at {time}

Keep it under 50 words. Mention local Southampton weather or spirit if possible.",
        location = fixture.location,
        league = fixture.league,
        opponent = fixture.opponent,
        date = fixture.date,
        time = fixture.time.format("%H:%M"),
    )
}

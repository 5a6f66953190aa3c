use crate::fixture::{AgeGroup, Fixture, MatchRecommendation, normalize_recommendations};
use crate::referee::{BadgeLevel, Referee};
use crate::shared::is_known_area;

const EXPERIENCE_CAP_YEARS: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingWeights {
    pub proximity: f32,
    pub badge: f32,
    pub experience: f32,
}

impl Default for RankingWeights {
    fn default() -> Self {
        RankingWeights {
            proximity: 0.4,
            badge: 0.35,
            experience: 0.25,
        }
    }
}

/// Deterministic stand-in for the external ranking service. Weighs how close
/// the referee is based, whether their badge suits the age group, and years
/// of experience.
#[derive(Debug, Clone, Default)]
pub struct HeuristicRanker {
    weights: RankingWeights,
}

impl HeuristicRanker {
    pub fn new(weights: RankingWeights) -> Self {
        HeuristicRanker { weights }
    }

    pub fn rank(&self, fixture: &Fixture, candidates: &[Referee]) -> Vec<MatchRecommendation> {
        let raw = candidates
            .iter()
            .map(|referee| self.score(fixture, referee))
            .collect();

        let ids: Vec<_> = candidates.iter().map(|r| r.id.clone()).collect();

        normalize_recommendations(raw, &ids)
    }

    fn score(&self, fixture: &Fixture, referee: &Referee) -> MatchRecommendation {
        let (proximity, where_based) = proximity(&referee.location, &fixture.location);
        let badge = badge_suitability(referee.badge_level, fixture.age_group);
        let experience =
            referee.experience_years.min(EXPERIENCE_CAP_YEARS) as f32 / EXPERIENCE_CAP_YEARS as f32;

        let weighted = self.weights.proximity * proximity
            + self.weights.badge * badge
            + self.weights.experience * experience;
        let total = self.weights.proximity + self.weights.badge + self.weights.experience;

        let score = if total > 0.0 {
            (weighted / total * 1000.0).round() / 10.0
        } else {
            0.0
        };

        MatchRecommendation::new(
            referee.id.clone(),
            score,
            format!(
                "{} {}, {} for {} football, {} years' experience.",
                referee.name, where_based, referee.badge_level, fixture.age_group, referee.experience_years
            ),
        )
    }
}

fn proximity(referee_area: &str, fixture_area: &str) -> (f32, &'static str) {
    if referee_area.trim().eq_ignore_ascii_case(fixture_area.trim()) {
        (1.0, "is based locally")
    } else if is_known_area(referee_area) {
        (0.6, "is based across the city")
    } else {
        (0.25, "travels in from outside the city")
    }
}

fn badge_suitability(badge: BadgeLevel, age_group: AgeGroup) -> f32 {
    let level = badge.level();

    match age_group {
        AgeGroup::Adults if badge.is_senior() => 1.0,
        AgeGroup::Adults => 0.2 + 0.5 * badge.tier_ratio(),
        AgeGroup::Under(_) if age_group.is_older_youth() => {
            if level <= 6 {
                1.0
            } else {
                0.6
            }
        }
        AgeGroup::Under(_) => {
            if level <= 7 {
                1.0
            } else {
                0.7
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureStatus;
    use crate::shared::{ClubId, FixtureId, RefereeId};
    use chrono::{NaiveDate, NaiveTime, Weekday};

    fn referee(id: &str, level: u8, location: &str, years: u8) -> Referee {
        Referee {
            id: RefereeId::from(id),
            name: format!("Referee {}", id),
            badge_level: BadgeLevel::new(level).unwrap(),
            location: location.to_string(),
            experience_years: years,
            available_days: vec![Weekday::Sun],
            avatar_url: String::new(),
            fa_number: None,
            dob: None,
            is_minor: false,
            parent_contact: None,
        }
    }

    fn fixture(age_group: AgeGroup) -> Fixture {
        Fixture {
            id: FixtureId::from("f1"),
            club_id: ClubId::from("c2"),
            opponent: "Sholing FC".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            location: "Bitterne Park".to_string(),
            league: "Tyro League".to_string(),
            age_group,
            status: FixtureStatus::Open,
        }
    }

    #[test]
    fn test_senior_local_referee_ranks_first_for_adults() {
        let candidates = vec![
            referee("r1", 7, "Totton", 2),
            referee("r2", 4, "Bitterne Park", 15),
            referee("r3", 6, "Woolston", 5),
        ];

        let recs = HeuristicRanker::default().rank(&fixture(AgeGroup::Adults), &candidates);

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].referee_id.as_str(), "r2");
        assert_eq!(recs[0].score, 100.0);
        assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(recs.iter().all(|r| (0.0..=100.0).contains(&r.score)));
        assert!(recs.iter().all(|r| !r.reasoning.is_empty()));
    }

    #[test]
    fn test_same_inputs_give_same_ranking() {
        let candidates = vec![referee("r1", 5, "Portswood", 12), referee("r4", 4, "Bassett", 15)];
        let ranker = HeuristicRanker::default();

        let first = ranker.rank(&fixture(AgeGroup::Under(15)), &candidates);
        let second = ranker.rank(&fixture(AgeGroup::Under(15)), &candidates);

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_candidates_no_recommendations() {
        assert!(HeuristicRanker::default().rank(&fixture(AgeGroup::Adults), &[]).is_empty());
    }

    #[test]
    fn test_junior_badge_is_fine_for_junior_football() {
        assert_eq!(
            badge_suitability(BadgeLevel::new(7).unwrap(), AgeGroup::Under(12)),
            1.0
        );
        assert!(badge_suitability(BadgeLevel::new(7).unwrap(), AgeGroup::Adults) < 0.5);
    }
}

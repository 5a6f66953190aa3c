use crate::AppData;
use crate::assignments::assignment_routes;
use crate::clubs::club_routes;
use crate::fixtures::fixture_routes;
use crate::referees::referee_routes;
use crate::session::session_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(session_routes())
            .merge(club_routes())
            .merge(referee_routes())
            .merge(fixture_routes())
            .merge(assignment_routes())
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{GatedClient, ScriptedClient, abandon, send, test_app, wait_for};
    use assistant::{CompletionClient, RankingBackend};
    use axum::Router;
    use axum::http::{Method, StatusCode};
    use chrono::{Days, Local};
    use serde_json::{Value, json};
    use std::sync::Arc;

    const R1_RANKING: &str =
        r#"[{"refereeId":"r1","score":92,"reasoning":"Based in Bitterne, right next to the ground."}]"#;

    fn scripted_app(client: &Arc<ScriptedClient>) -> Router {
        test_app(
            Some(client.clone() as Arc<dyn CompletionClient>),
            RankingBackend::Assistant,
        )
    }

    async fn post_sunday_fixture(app: &Router) -> String {
        let (status, _) = send(app, Method::POST, "/api/session/club/c1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, fixture) = send(
            app,
            Method::POST,
            "/api/fixtures",
            Some(json!({
                "opponent": "Sholing FC",
                "date": "2024-06-02",
                "time": "10:30",
                "ageGroup": "U15"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(fixture["status"], "OPEN");

        fixture["id"].as_str().unwrap().to_string()
    }

    fn referee_ids(response: &Value) -> Vec<&str> {
        response["recommendations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|rec| rec["refereeId"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_club_matches_recommended_referee() {
        let client = ScriptedClient::replying(R1_RANKING);
        let app = scripted_app(&client);

        let fixture_id = post_sunday_fixture(&app).await;
        let uri = format!("/api/fixtures/{}/recommendations", fixture_id);

        let (status, response) = send(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(referee_ids(&response), vec!["r1"]);
        assert_eq!(response["recommendations"][0]["score"], 92.0);
        assert_eq!(response["recommendations"][0]["referee"]["name"], "John Whistle");
        assert_eq!(client.calls(), 1);

        let (status, fixture) = send(
            &app,
            Method::POST,
            &format!("/api/fixtures/{}/assignment", fixture_id),
            Some(json!({ "refereeId": "r1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fixture["status"], "MATCHED");
        assert_eq!(fixture["assignedRefereeId"], "r1");
        assert_eq!(fixture["assignedReferee"]["name"], "John Whistle");

        let (_, pending) = send(&app, Method::GET, &uri, None).await;
        assert!(pending["recommendations"].as_array().unwrap().is_empty());

        let (_, stats) = send(&app, Method::GET, "/api/fixtures/stats", None).await;
        assert_eq!(stats, json!({ "matched": 1, "pending": 0, "completed": 0 }));
    }

    #[tokio::test]
    async fn test_guest_cannot_post_fixture() {
        let app = test_app(None, RankingBackend::Assistant);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/fixtures",
            Some(json!({ "date": "2024-06-02", "time": "10:30" })),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body["error"].as_str().unwrap().contains("club"));
    }

    #[tokio::test]
    async fn test_ranking_failure_leaves_fixture_open() {
        let client = ScriptedClient::failing();
        let app = scripted_app(&client);

        let fixture_id = post_sunday_fixture(&app).await;

        let (status, response) = send(
            &app,
            Method::POST,
            &format!("/api/fixtures/{}/recommendations", fixture_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(referee_ids(&response).is_empty());
        assert_eq!(response["searching"], false);

        let (_, fixtures) = send(&app, Method::GET, "/api/fixtures", None).await;
        assert_eq!(fixtures[0]["status"], "OPEN");
        assert_eq!(fixtures[0]["searching"], false);
    }

    #[tokio::test]
    async fn test_unrecommended_referee_is_rejected() {
        let client = ScriptedClient::replying(R1_RANKING);
        let app = scripted_app(&client);

        let fixture_id = post_sunday_fixture(&app).await;
        send(
            &app,
            Method::POST,
            &format!("/api/fixtures/{}/recommendations", fixture_id),
            None,
        )
        .await;

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/fixtures/{}/assignment", fixture_id),
            Some(json!({ "refereeId": "r3" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (_, fixtures) = send(&app, Method::GET, "/api/fixtures", None).await;
        assert_eq!(fixtures[0]["status"], "OPEN");
    }

    #[tokio::test]
    async fn test_heuristic_ranking_uses_sunday_pool() {
        let app = test_app(None, RankingBackend::Heuristic);

        let fixture_id = post_sunday_fixture(&app).await;

        let (status, response) = send(
            &app,
            Method::POST,
            &format!("/api/fixtures/{}/recommendations", fixture_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let mut ids = referee_ids(&response);
        ids.sort_unstable();
        assert_eq!(ids, vec!["r1", "r2", "r4"]);
    }

    #[tokio::test]
    async fn test_other_club_cannot_search_for_fixture() {
        let app = test_app(None, RankingBackend::Heuristic);

        let fixture_id = post_sunday_fixture(&app).await;
        send(&app, Method::POST, "/api/session/club/c2", None).await;

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/fixtures/{}/recommendations", fixture_id),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_minor_registration_requires_guardian() {
        let app = test_app(None, RankingBackend::Assistant);
        let dob = Local::now().date_naive().checked_sub_days(Days::new(15 * 365)).unwrap();

        let mut form = json!({
            "name": "Alex Young",
            "email": "alex@example.com",
            "faNumber": "87654321",
            "dob": dob.to_string(),
            "location": "Shirley",
            "badgeLevel": "Level 9 (Trainee)"
        });

        let (status, _) = send(&app, Method::POST, "/api/referees", Some(form.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        form["parentName"] = json!("Pat Young");
        form["parentEmail"] = json!("pat@example.com");

        let (status, referee) = send(&app, Method::POST, "/api/referees", Some(form)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(referee["isMinor"], true);
        assert!(referee.get("parentContact").is_none());

        let (_, session) = send(&app, Method::GET, "/api/session", None).await;
        assert_eq!(session["role"], "REFEREE");
        assert_eq!(session["id"], referee["id"]);
        assert_eq!(session["name"], "Alex Young");
    }

    #[tokio::test]
    async fn test_assignments_are_briefed_once() {
        let client = ScriptedClient::replying(R1_RANKING);
        let app = scripted_app(&client);

        let fixture_id = post_sunday_fixture(&app).await;
        send(
            &app,
            Method::POST,
            &format!("/api/fixtures/{}/recommendations", fixture_id),
            None,
        )
        .await;
        send(
            &app,
            Method::POST,
            &format!("/api/fixtures/{}/assignment", fixture_id),
            Some(json!({ "refereeId": "r1" })),
        )
        .await;

        let (status, _) = send(&app, Method::GET, "/api/assignments", None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        send(&app, Method::POST, "/api/session/referee/r1", None).await;

        let (status, assignments) = send(&app, Method::GET, "/api/assignments", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(assignments[0]["id"], fixture_id.as_str());
        assert_eq!(assignments[0]["clubName"], "Bitterne Park United");
        assert_eq!(assignments[0]["brief"], R1_RANKING);
        assert_eq!(client.calls(), 2);

        send(&app, Method::GET, "/api/assignments", None).await;
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn test_unknown_club_sign_in_is_not_found() {
        let app = test_app(None, RankingBackend::Assistant);

        let (status, _) = send(&app, Method::POST, "/api/session/club/c9", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_abandoned_search_still_clears_loading_flag() {
        let client = GatedClient::new(R1_RANKING);
        let app = test_app(
            Some(client.clone() as Arc<dyn CompletionClient>),
            RankingBackend::Assistant,
        );

        let fixture_id = post_sunday_fixture(&app).await;
        let uri = format!("/api/fixtures/{}/recommendations", fixture_id);

        abandon(&app, Method::POST, &uri).await;

        let (_, pending) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(pending["searching"], true);

        client.open();

        let settled = wait_for(&app, &uri, |body| body["searching"] == false).await;
        assert_eq!(referee_ids(&settled), vec!["r1"]);

        let (status, retried) = send(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(referee_ids(&retried), vec!["r1"]);
    }

    #[tokio::test]
    async fn test_abandoned_assignment_view_still_records_brief() {
        let client = GatedClient::new("Sunny in Bitterne, enjoy it!");
        let app = test_app(
            Some(client.clone() as Arc<dyn CompletionClient>),
            RankingBackend::Heuristic,
        );

        let fixture_id = post_sunday_fixture(&app).await;
        send(
            &app,
            Method::POST,
            &format!("/api/fixtures/{}/recommendations", fixture_id),
            None,
        )
        .await;
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/fixtures/{}/assignment", fixture_id),
            Some(json!({ "refereeId": "r1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        send(&app, Method::POST, "/api/session/referee/r1", None).await;

        abandon(&app, Method::GET, "/api/assignments").await;

        client.open();

        let assignments = wait_for(&app, "/api/assignments", |body| !body[0]["brief"].is_null()).await;
        assert_eq!(assignments[0]["brief"], "Sunny in Bitterne, enjoy it!");
    }

    #[tokio::test]
    async fn test_session_is_shared_by_all_callers() {
        let app = test_app(None, RankingBackend::Assistant);

        send(&app, Method::POST, "/api/session/club/c1", None).await;
        let (_, seen) = send(&app, Method::GET, "/api/session", None).await;
        assert_eq!(seen, json!({ "role": "CLUB", "id": "c1", "name": "Bitterne Park United" }));

        send(&app, Method::POST, "/api/session/referee/r4", None).await;
        let (_, seen) = send(&app, Method::GET, "/api/session", None).await;
        assert_eq!(seen["role"], "REFEREE");

        let (_, seen) = send(&app, Method::DELETE, "/api/session", None).await;
        assert_eq!(seen, json!({ "role": "GUEST", "name": null }));
    }
}

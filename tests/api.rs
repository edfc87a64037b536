use std::time::Duration;

use parsu::build_rocket;
use parsu::core::{ConfigManager, DelayConfig};
use rocket::http::{ContentType, Header, Status};
use rocket::local::asynchronous::{Client, LocalResponse};
use serde_json::{json, Value};

fn test_config() -> ConfigManager {
    ConfigManager::default().with_delays(DelayConfig {
        job_post: Duration::from_millis(10),
        profile_save: Duration::from_millis(10),
    })
}

async fn client_with(config: ConfigManager) -> Client {
    Client::tracked(build_rocket(&config))
        .await
        .expect("valid rocket instance")
}

async fn client() -> Client {
    client_with(test_config()).await
}

fn session(id: &str) -> Header<'static> {
    Header::new("X-Session-Id", id.to_string())
}

async fn body(response: LocalResponse<'_>) -> Value {
    response.into_json::<Value>().await.expect("json body")
}

#[rocket::async_test]
async fn test_health() {
    let client = client().await;
    let response = client.get("/api/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(body(response).await["message"], "OK");
}

#[rocket::async_test]
async fn test_job_board_shows_all_seeded_jobs() {
    let client = client().await;
    let response = client.get("/api/jobs").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let json = body(response).await;
    assert_eq!(json["type"], "data");
    assert_eq!(json["data"]["summary"], "Showing 4 opportunities");
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 4);
    assert!(json["data"].get("empty_state").is_none());
}

#[rocket::async_test]
async fn test_internship_filter() {
    let client = client().await;
    let json = body(client.get("/api/jobs?filter=Internship").dispatch().await).await;

    assert_eq!(json["data"]["count"], 2);
    for card in json["data"]["items"].as_array().unwrap() {
        assert_eq!(card["type"], "Internship");
    }
}

#[rocket::async_test]
async fn test_filter_tags_union_and_search() {
    let client = client().await;
    let both = body(
        client
            .get("/api/jobs?filter=Internship&filter=Full-time")
            .dispatch()
            .await,
    )
    .await;
    let internships = body(client.get("/api/jobs?filter=Internship").dispatch().await).await;
    assert!(both["data"]["count"].as_u64() >= internships["data"]["count"].as_u64());

    let none = body(client.get("/api/jobs?search=zzzz").dispatch().await).await;
    assert_eq!(none["data"]["summary"], "Showing 0 opportunities");
    assert!(none["data"]["empty_state"].is_string());
}

#[rocket::async_test]
async fn test_job_detail_echoes_route_id() {
    let client = client().await;
    let json = body(client.get("/api/jobs/42").dispatch().await).await;

    assert_eq!(json["data"]["job"]["id"], "42");
    assert_eq!(json["data"]["application"]["label"], "Apply for this Position");

    let applied = body(client.post("/api/jobs/42/apply").dispatch().await).await;
    assert_eq!(applied["data"]["label"], "Application Submitted");
    assert_eq!(applied["data"]["enabled"], false);
}

#[rocket::async_test]
async fn test_connect_moves_card_to_pending() {
    let client = client().await;
    let response = client
        .post("/api/network/alumni/1/connect")
        .header(session("connect-test"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let json = body(response).await;
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["connection"]["label"], "Pending");

    let listing = body(
        client
            .get("/api/network/alumni")
            .header(session("connect-test"))
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(listing["data"]["items"][0]["connection"]["status"], "pending");

    let missing = client
        .post("/api/network/alumni/99/connect")
        .header(session("connect-test"))
        .dispatch()
        .await;
    assert_eq!(missing.status(), Status::NotFound);
    assert_eq!(body(missing).await["error_code"], "RECORD_NOT_FOUND");
}

#[rocket::async_test]
async fn test_connection_queue_drains_to_caught_up() {
    let client = client().await;
    let queue = body(
        client
            .get("/api/network/requests")
            .header(session("queue-test"))
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(queue["data"]["count"], 2);
    assert_eq!(queue["data"]["tab_label"], "Requests (2)");

    let accepted = body(
        client
            .post("/api/network/requests/1/accept")
            .header(session("queue-test"))
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(accepted["action"], "accepted");
    assert_eq!(accepted["data"]["count"], 1);

    let declined = body(
        client
            .post("/api/network/requests/2/decline")
            .header(session("queue-test"))
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(declined["data"]["count"], 0);
    assert_eq!(declined["data"]["empty_state"]["title"], "All caught up!");

    let again = client
        .post("/api/network/requests/1/accept")
        .header(session("queue-test"))
        .dispatch()
        .await;
    assert_eq!(again.status(), Status::NotFound);
    assert_eq!(body(again).await["error_code"], "REQUEST_NOT_FOUND");
}

#[rocket::async_test]
async fn test_incoming_mentorship_queue() {
    let client = client().await;
    let json = body(
        client
            .post("/api/mentorship/incoming/1/decline")
            .header(session("mentor-queue"))
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(json["data"]["count"], 0);
    assert_eq!(
        json["data"]["empty_state"]["message"],
        "You don't have any pending mentorship requests."
    );
}

#[rocket::async_test]
async fn test_post_job_with_missing_fields_is_rejected() {
    let client = client().await;
    let response = client
        .post("/api/jobs")
        .header(ContentType::JSON)
        .body(json!({ "title": "Backend Intern", "company": "" }).to_string())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::UnprocessableEntity);
    let json = body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Please fill in all required fields");
    assert_eq!(json["error_code"], "MISSING_REQUIRED_FIELDS");
}

#[rocket::async_test]
async fn test_post_job_redirects_and_leaves_listing_alone() {
    let client = client().await;
    let response = client
        .post("/api/jobs")
        .header(ContentType::JSON)
        .body(
            json!({
                "title": "Backend Intern",
                "company": "InnovateLab",
                "location": "Seattle, WA",
                "type": "Internship",
                "description": "Build services.",
                "requirements": ["Rust", " Rust ", ""]
            })
            .to_string(),
        )
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let json = body(response).await;
    assert_eq!(json["action"], "redirect");
    assert_eq!(json["data"]["outcome"], "redirect");
    assert_eq!(json["data"]["to"], "/jobs");
    assert_eq!(json["next_actions"], json!(["/jobs"]));

    let listing = body(client.get("/api/jobs").dispatch().await).await;
    assert_eq!(listing["data"]["count"], 4);
}

#[rocket::async_test]
async fn test_invalid_session_header_is_bad_request() {
    let client = client().await;
    let response = client
        .get("/api/jobs")
        .header(session("../../etc"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(body(response).await["error_code"], "BAD_REQUEST");
}

#[rocket::async_test]
async fn test_sessions_are_isolated_and_reset() {
    let client = client().await;
    let created = body(client.post("/api/session").dispatch().await).await;
    let id = created["data"]["session_id"].as_str().unwrap().to_string();
    assert_eq!(created["data"]["header"], "X-Session-Id");

    client
        .post("/api/seminars/1/request")
        .header(session(&id))
        .dispatch()
        .await;

    let mine = body(
        client
            .get("/api/seminars/requests")
            .header(session(&id))
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(mine["data"]["items"], json!(["Tech Careers 2025"]));

    let other = body(client.get("/api/seminars/requests").dispatch().await).await;
    assert_eq!(other["data"]["items"], json!([]));
    assert_eq!(other["data"]["empty_state"], "No seminar requests yet.");

    let reset = client.delete("/api/session").header(session(&id)).dispatch().await;
    assert_eq!(reset.status(), Status::Ok);

    let after = body(
        client
            .get("/api/seminars/requests")
            .header(session(&id))
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(after["data"]["items"], json!([]));
}

#[rocket::async_test]
async fn test_mentor_industry_dropdown() {
    let client = client().await;
    let all = body(client.get("/api/mentorship/mentors?industry=all").dispatch().await).await;
    assert_eq!(all["data"]["count"], 3);

    let finance = body(
        client
            .get("/api/mentorship/mentors?industry=finance")
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(finance["data"]["count"], 1);
    assert_eq!(finance["data"]["items"][0]["request"]["label"], "Request Mentorship");
}

#[rocket::async_test]
async fn test_profile_skill_edits_and_save() {
    let client = client().await;
    let added = body(
        client
            .post("/api/profile/skills")
            .header(session("profile-test"))
            .header(ContentType::JSON)
            .body(json!({ "value": "  Kubernetes " }).to_string())
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(added["message"], "Skill added");
    let skills = added["data"]["skills"].as_array().unwrap().clone();
    assert!(skills.contains(&json!("Kubernetes")));

    let removed = client
        .delete("/api/profile/skills/Kubernetes")
        .header(session("profile-test"))
        .dispatch()
        .await;
    assert_eq!(removed.status(), Status::Ok);

    let missing = client
        .patch("/api/profile/experience/99")
        .header(session("profile-test"))
        .header(ContentType::JSON)
        .body(json!({ "title": "Intern" }).to_string())
        .dispatch()
        .await;
    assert_eq!(missing.status(), Status::NotFound);

    let saved = body(
        client
            .put("/api/profile")
            .header(session("profile-test"))
            .header(ContentType::JSON)
            .body(json!({ "bio": "Hello", "skills": ["Rust"] }).to_string())
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(saved["data"]["outcome"], "saved");

    let form = body(
        client
            .get("/api/profile")
            .header(session("profile-test"))
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(form["data"]["bio"], "Hello");
}

#[rocket::async_test]
async fn test_admin_user_search() {
    let client = client().await;
    let json = body(client.get("/api/admin/users?search=employer").dispatch().await).await;
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["users"][0]["name"], "TechCorp Inc.");
}

#[rocket::async_test]
async fn test_unknown_route_uses_error_envelope() {
    let client = client().await;
    let response = client.get("/api/nowhere/at/all").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(body(response).await["error_code"], "NOT_FOUND");
}

#[rocket::async_test]
async fn test_least_recent_session_is_dropped_at_capacity() {
    let client = client_with(test_config().with_max_sessions(2)).await;
    client
        .post("/api/seminars/1/request")
        .header(session("first"))
        .dispatch()
        .await;

    for id in ["second", "third"] {
        let response = client.get("/api/jobs").header(session(id)).dispatch().await;
        assert_eq!(response.status(), Status::Ok);
    }

    let first = body(
        client
            .get("/api/seminars/requests")
            .header(session("first"))
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(first["data"]["items"], json!([]));
}

async fn application_enabled(client: &Client, job_id: &str) -> Value {
    let json = body(
        client
            .get(format!("/api/jobs/{}", job_id))
            .header(session("apply-flood"))
            .dispatch()
            .await,
    )
    .await;
    json["data"]["application"]["enabled"].clone()
}

#[rocket::async_test]
async fn test_apply_on_arbitrary_job_ids_is_bounded() {
    let client = client().await;
    for i in 0..200 {
        let response = client
            .post(format!("/api/jobs/junk{}/apply", i))
            .header(session("apply-flood"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
    }

    assert_eq!(application_enabled(&client, "junk199").await, false);
    assert_eq!(application_enabled(&client, "junk0").await, true);
}

#[rocket::async_test]
async fn test_seminar_category_dropdown() {
    let client = client().await;
    let technology = body(client.get("/api/seminars?category=Technology").dispatch().await).await;
    assert_eq!(technology["data"]["count"], 1);
    assert_eq!(technology["data"]["items"][0]["company"], "Google");

    let finance = body(client.get("/api/seminars?category=Finance").dispatch().await).await;
    assert_eq!(finance["data"]["count"], 1);
    assert_eq!(finance["data"]["items"][0]["title"], "Finance for Graduates");

    let all = body(client.get("/api/seminars?category=all").dispatch().await).await;
    assert_eq!(all["data"]["count"], 2);
    assert_eq!(all["data"]["summary"], "Showing 2 seminars");
}

#[rocket::async_test]
async fn test_admin_growth_chart() {
    let client = client().await;
    let json = body(client.get("/api/admin/analytics").dispatch().await).await;
    let series = json["data"]["series"].as_array().unwrap();
    assert_eq!(series.len(), 7);
    assert_eq!(series[0]["month"], "Jan");
    assert_eq!(series[6]["users"], 2847);
    assert_eq!(series[6]["connections"], 4521);
    assert_eq!(json["data"]["growth"]["jobs"], "+246.7%");
}

#[rocket::async_test]
async fn test_admin_activity_feed() {
    let client = client().await;
    let json = body(client.get("/api/admin/activity").dispatch().await).await;
    let feed = json["data"].as_array().unwrap();
    assert_eq!(feed.len(), 5);

    assert_eq!(feed[0]["type"], "user_registered");
    assert_eq!(feed[0]["badge"], "student");
    assert_eq!(feed[0]["initials"], "SJ");
    assert_eq!(feed[1]["type"], "job_posted");

    let report = &feed[2];
    assert_eq!(report["type"], "report_submitted");
    assert_eq!(report["user"], "Anonymous");
    assert!(report.get("badge").is_none());
    assert_eq!(feed[3]["type"], "job_approved");
}

// API Integration Tests
//
// Purpose: Drive every endpoint through the router with the built-in catalog
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use bizmodel_scorer::{create_router, AppState, Catalog, ServerConfig};
    use serde_json::{json, Value};
    use tower::ServiceExt; // for oneshot

    const QUIZ: &str = include_str!("fixtures/quiz_balanced.json");

    // Helper: Create test app over the built-in catalog
    fn create_test_app() -> Router {
        let catalog = Catalog::builtin().expect("Built-in catalog should load");
        let state = AppState::from_catalog(catalog, &ServerConfig::default());
        create_router(state)
    }

    fn quiz() -> Value {
        serde_json::from_str(QUIZ).expect("Failed to parse quiz fixture")
    }

    async fn get(app: &Router, uri: &str) -> axum::response::Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: &Router, uri: &str, body: Value) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    // Helper: Submit the balanced quiz and return the attempt id
    async fn create_attempt(app: &Router) -> String {
        let response = post_json(
            app,
            "/api/quiz-attempts",
            json!({ "quiz": quiz(), "email": "test@example.com" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_response(response).await;
        body["attempt_id"].as_str().unwrap().to_string()
    }

    async fn unlock(app: &Router, id: &str, report_type: &str) -> Value {
        let response = post_json(
            app,
            &format!("/api/quiz-attempts/{}/unlock", id),
            json!({ "report_type": report_type }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        json_response(response).await
    }

    // =========================================================================
    // Section 1: Health and catalog
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let app = create_test_app();
        let response = get(&app, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["models"], 18);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_list_business_models() {
        let app = create_test_app();
        let response = get(&app, "/api/business-models").await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["count"], 18);
        assert_eq!(body["models"][0]["id"], "affiliate-marketing");
    }

    #[tokio::test]
    async fn test_get_business_model() {
        let app = create_test_app();

        let response = get(&app, "/api/business-models/saas-development").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["startup_cost"], 5000);

        let response = get(&app, "/api/business-models/space-tourism").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("space-tourism"));
    }

    // =========================================================================
    // Section 2: Stateless scoring
    // =========================================================================

    #[tokio::test]
    async fn test_score_quiz() {
        let app = create_test_app();
        let response = post_json(&app, "/api/quiz/score", quiz()).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 18);
        assert_eq!(matches[0]["model_id"], "freelancing");

        let scores: Vec<f64> = matches.iter().map(|m| m["score"].as_f64().unwrap()).collect();
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[tokio::test]
    async fn test_score_quiz_invalid_rating() {
        let app = create_test_app();
        let mut body = quiz();
        body["riskComfortLevel"] = json!(9);

        let response = post_json(&app, "/api/quiz/score", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("riskComfortLevel"));
    }

    #[tokio::test]
    async fn test_score_quiz_undecodable_bodies() {
        let app = create_test_app();

        // Negative rating fails before validation
        let mut negative = quiz();
        negative["riskComfortLevel"] = json!(-1);
        // Missing answer
        let mut missing = quiz();
        missing.as_object_mut().unwrap().remove("learningPreference");
        // Unknown enum value
        let mut unknown = quiz();
        unknown["mainMotivation"] = json!("fame");

        let cases = [
            (negative, "riskComfortLevel"),
            (missing, "learningPreference"),
            (unknown, "mainMotivation"),
        ];
        for (body, field) in cases {
            let response = post_json(&app, "/api/quiz/score", body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", field);

            let body = json_response(response).await;
            assert!(body["error"].as_str().unwrap().contains(field), "{}", body);
        }
    }

    #[tokio::test]
    async fn test_attempt_and_unlock_reject_bad_bodies() {
        let app = create_test_app();

        let response = post_json(&app, "/api/quiz-attempts", json!({ "email": "a@b.c" })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_response(response).await["error"].is_string());

        let id = create_attempt(&app).await;
        let response = post_json(
            &app,
            &format!("/api/quiz-attempts/{}/unlock", id),
            json!({ "report_type": "everything" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_response(response).await["error"].is_string());
    }

    // =========================================================================
    // Section 3: Attempts and access gating
    // =========================================================================

    #[tokio::test]
    async fn test_create_and_get_attempt() {
        let app = create_test_app();
        let id = create_attempt(&app).await;

        let response = get(&app, &format!("/api/quiz-attempts/{}", id)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["id"], id.as_str());
        assert_eq!(body["email"], "test@example.com");
        assert_eq!(body["quiz"]["successIncomeGoal"], 5000);
        assert!(body["access"]["full_report"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_attempt() {
        let app = create_test_app();
        let response = get(&app, "/api/quiz-attempts/7f1c1c3e-5a0f-4a52-9a9e-2f3c1d0b8e11").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_results_preview_then_full() {
        let app = create_test_app();
        let id = create_attempt(&app).await;

        // Locked: preview only, no dimension scores
        let body = json_response(get(&app, &format!("/api/quiz-attempts/{}/results", id)).await).await;
        assert_eq!(body["unlocked"], false);
        assert_eq!(body["total_matches"], 18);
        let preview = body["matches"].as_array().unwrap();
        assert_eq!(preview.len(), 3);
        assert!(preview[0].get("dimensions").is_none());

        unlock(&app, &id, "full_report").await;

        let body = json_response(get(&app, &format!("/api/quiz-attempts/{}/results", id)).await).await;
        assert_eq!(body["unlocked"], true);
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 18);
        assert_eq!(matches[0]["dimensions"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_unlock_is_idempotent() {
        let app = create_test_app();
        let id = create_attempt(&app).await;

        let first = unlock(&app, &id, "model_explanations").await;
        assert_eq!(first["changed"], true);
        let unlocked_at = first["access"]["model_explanations"].clone();
        assert!(unlocked_at.is_string());

        let second = unlock(&app, &id, "model_explanations").await;
        assert_eq!(second["changed"], false);
        assert_eq!(second["access"]["model_explanations"], unlocked_at);

        let access = json_response(get(&app, &format!("/api/quiz-attempts/{}/access", id)).await).await;
        assert_eq!(access["model_explanations"], unlocked_at);
        assert!(access["full_report"].is_null());
    }

    // =========================================================================
    // Section 4: Generated content
    // =========================================================================

    #[tokio::test]
    async fn test_explanation_requires_unlock() {
        let app = create_test_app();
        let id = create_attempt(&app).await;
        let uri = format!("/api/quiz-attempts/{}/models/freelancing/explanation", id);

        let response = get(&app, &uri).await;
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);

        unlock(&app, &id, "model_explanations").await;

        let response = get(&app, &uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["model_id"], "freelancing");
        assert_eq!(body["overall"]["label"], "Best Fit");

        // Cached copy is identical
        let again = json_response(get(&app, &uri).await).await;
        assert_eq!(again, body);
    }

    #[tokio::test]
    async fn test_explanation_markdown_and_unknown_model() {
        let app = create_test_app();
        let id = create_attempt(&app).await;
        unlock(&app, &id, "model_explanations").await;

        let response = get(
            &app,
            &format!("/api/quiz-attempts/{}/models/copywriting/explanation?format=markdown", id),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["format"], "markdown");
        assert!(body["content"].as_str().unwrap().starts_with("# Copywriting"));

        let response = get(
            &app,
            &format!("/api/quiz-attempts/{}/models/space-tourism/explanation", id),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_report_requires_full_report() {
        let app = create_test_app();
        let id = create_attempt(&app).await;
        let uri = format!("/api/quiz-attempts/{}/report", id);

        // Explanations alone do not unlock the report
        unlock(&app, &id, "model_explanations").await;
        let response = get(&app, &uri).await;
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);

        unlock(&app, &id, "full_report").await;
        let response = get(&app, &uri).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let content = body["content"].as_str().unwrap();
        assert!(content.starts_with("# Your Business Model Matches"));
        assert!(content.contains("| 1 | Freelancing |"));
    }
}

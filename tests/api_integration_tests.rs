// API Integration Tests
//
// Purpose: Exercise every endpoint through the full router (middleware included)
// Run with: cargo test --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use openoa_site_api::models::{AnalysisMethod, ContactMessage, DocSection, Feature, TeamMember};
    use openoa_site_api::notify::{NotificationSink, NotifyError};
    use openoa_site_api::{create_router, AppState, Catalog, DocPages, DocTopic, Settings};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt; // for oneshot

    // Helper: settings with defaults, optionally overridden
    fn test_settings(pairs: &[(&str, &str)]) -> Settings {
        let pairs: Vec<(String, String)> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|key| {
            pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
        .expect("test settings are valid")
    }

    // Helper: router over the built-in catalog
    fn create_test_app() -> axum::Router {
        let catalog = Catalog::builtin().expect("built-in catalog is valid");
        create_router(AppState::new(catalog, test_settings(&[("APP_VERSION", "9.9.9")])))
    }

    // Helper: a small substitute catalog
    fn substitute_catalog() -> Catalog {
        let method = |id: &str| AnalysisMethod {
            id: id.to_string(),
            name: format!("Method {id}"),
            short_description: "short".into(),
            long_description: "long".into(),
            citations: vec!["Someone (2020)".into()],
            parameters: Some(vec!["SCADA".into()]),
            icon: "⚡".into(),
        };
        let page = |title: &str| DocSection {
            title: title.into(),
            content: "body".into(),
            subsections: None,
        };
        Catalog::new(
            vec![method("energy-loss"), method("availability")],
            vec![Feature {
                id: "filters".into(),
                name: "Filters".into(),
                description: "Outlier detection".into(),
                icon: "🧹".into(),
                category: "utility".into(),
            }],
            DocPages {
                overview: page("Overview"),
                installation: page("Installation"),
                schema: page("Schema"),
                citations: page("Citations"),
            },
            vec![TeamMember { name: "Ada".into(), role: "Maintainer".into(), orcid: None }],
        )
        .expect("substitute catalog is valid")
    }

    // Helper: records deliveries, optionally failing every one
    #[derive(Default)]
    struct RecordingSink {
        delivered: Mutex<Vec<ContactMessage>>,
        fail: bool,
    }

    impl NotificationSink for RecordingSink {
        fn deliver(&self, message: &ContactMessage) -> Result<(), NotifyError> {
            self.delivered.lock().unwrap().push(message.clone());
            if self.fail {
                return Err(NotifyError::Unavailable("smtp down".into()));
            }
            Ok(())
        }
    }

    fn app_with_sink(sink: Arc<RecordingSink>) -> axum::Router {
        let state = AppState::new(substitute_catalog(), test_settings(&[])).with_sink(sink);
        create_router(state)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    // =========================================================================
    // Section 1: Health and Root
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = create_test_app().oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body, json!({"status": "healthy", "version": "9.9.9"}));
    }

    #[tokio::test]
    async fn test_root_banner() {
        let response = create_test_app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["message"], "Welcome to the OpenOA API");
        assert_eq!(body["version"], "9.9.9");
        assert_eq!(body["docs"], "/openapi.json");
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let response = create_test_app().oneshot(get("/openapi.json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["openapi"], "3.0.3");
        assert!(body["paths"]["/api/analysis/{method_id}"].is_object());
    }

    // =========================================================================
    // Section 2: Analysis Methods
    // =========================================================================

    #[tokio::test]
    async fn test_list_analysis_methods() {
        let response = create_test_app().oneshot(get("/api/analysis")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let methods = body["methods"].as_array().unwrap();
        assert_eq!(body["count"].as_u64().unwrap() as usize, methods.len());
        assert_eq!(methods.len(), 6);
        assert!(methods.iter().any(|m| m["id"] == "monte_carlo_aep"));
    }

    #[tokio::test]
    async fn test_every_listed_method_resolves_by_id() {
        let app = create_test_app();
        let listing = json_response(app.clone().oneshot(get("/api/analysis")).await.unwrap()).await;

        for method in listing["methods"].as_array().unwrap() {
            let id = method["id"].as_str().unwrap();
            let response = app.clone().oneshot(get(&format!("/api/analysis/{id}"))).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "lookup of {id}");

            let body = json_response(response).await;
            assert_eq!(body["id"], id);
            assert_eq!(&body, method);
        }
    }

    #[tokio::test]
    async fn test_method_without_parameters_serializes_null() {
        let response = create_test_app()
            .oneshot(get("/api/analysis/static_yaw_misalignment"))
            .await
            .unwrap();
        let body = json_response(response).await;
        assert!(body.as_object().unwrap().contains_key("parameters"));
        assert!(body["parameters"].is_null());
    }

    #[tokio::test]
    async fn test_substitute_catalog_lookup() {
        let app = app_with_sink(Arc::new(RecordingSink::default()));

        let response = app.clone().oneshot(get("/api/analysis/energy-loss")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["id"], "energy-loss");
        assert_eq!(body["parameters"], json!(["SCADA"]));

        let response = app.oneshot(get("/api/analysis/does-not-exist")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_response(response).await;
        assert_eq!(body, json!({"detail": "Analysis method 'does-not-exist' not found"}));
    }

    // =========================================================================
    // Section 3: Features, Docs, Team
    // =========================================================================

    #[tokio::test]
    async fn test_list_features() {
        let response = create_test_app().oneshot(get("/api/features")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let features = body["features"].as_array().unwrap();
        assert_eq!(body["count"].as_u64().unwrap() as usize, features.len());
        assert!(features.len() >= 8);
        for feature in features {
            assert!(feature["icon"].is_string());
            assert!(feature["category"].is_string());
        }
    }

    #[tokio::test]
    async fn test_doc_sections() {
        let app = create_test_app();
        for topic in DocTopic::ALL {
            let response = app.clone().oneshot(get(&format!("/api/docs/{topic}"))).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "docs/{topic}");

            let body = json_response(response).await;
            assert!(body["title"].is_string());
            assert!(body["content"].is_string());
        }

        let response = app.oneshot(get("/api/docs/changelog")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_citation_subsections_carry_doi() {
        let response = create_test_app().oneshot(get("/api/docs/citations")).await.unwrap();
        let body = json_response(response).await;
        let first = &body["subsections"][0];
        assert_eq!(first["doi"], "10.21105/joss.02171");
        assert!(first.get("items").is_none());
        assert!(first.get("code").is_none());
    }

    #[tokio::test]
    async fn test_schema_subsections_nest() {
        let response = create_test_app().oneshot(get("/api/docs/schema")).await.unwrap();
        let body = json_response(response).await;
        let nested = &body["subsections"][0]["subsections"];
        assert_eq!(nested[0]["title"], "SCADA");
        assert!(nested[0]["items"].is_array());
    }

    #[tokio::test]
    async fn test_team() {
        let response = create_test_app().oneshot(get("/api/team")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let members = body["members"].as_array().unwrap();
        assert_eq!(body["count"].as_u64().unwrap() as usize, members.len());
        assert!(members.iter().all(|m| m.as_object().unwrap().contains_key("orcid")));
    }

    // =========================================================================
    // Section 4: Contact
    // =========================================================================

    const VALID_CONTACT: &str =
        r#"{"name":"Ada","email":"ada@example.org","subject":"AEP","message":"How do I cite OpenOA?"}"#;

    #[tokio::test]
    async fn test_contact_acknowledged_and_delivered() {
        let sink = Arc::new(RecordingSink::default());
        let response = app_with_sink(sink.clone())
            .oneshot(post_json("/api/contact", VALID_CONTACT))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["success"], true);
        assert!(body["message"].is_string());

        let delivered = sink.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].email, "ada@example.org");
    }

    #[tokio::test]
    async fn test_contact_succeeds_when_sink_fails() {
        let sink = Arc::new(RecordingSink { fail: true, ..Default::default() });
        let response = app_with_sink(sink.clone())
            .oneshot(post_json("/api/contact", VALID_CONTACT))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_response(response).await["success"], true);
        assert_eq!(sink.delivered.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_contact_missing_field_rejected_without_delivery() {
        let sink = Arc::new(RecordingSink::default());
        let response = app_with_sink(sink.clone())
            .oneshot(post_json("/api/contact", r#"{"name":"Ada","email":"ada@example.org","subject":"AEP"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_response(response).await;
        assert_eq!(
            body,
            json!({"detail": [{"loc": ["body", "message"], "msg": "Field required", "type": "missing"}]})
        );
        assert!(sink.delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_contact_malformed_json() {
        let sink = Arc::new(RecordingSink::default());
        let response = app_with_sink(sink.clone())
            .oneshot(post_json("/api/contact", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json_response(response).await["detail"].is_string());
        assert!(sink.delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_contact_requires_json_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .body(Body::from(VALID_CONTACT))
            .unwrap();
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json_response(response).await["detail"].is_string());
    }

    // =========================================================================
    // Section 5: Routing, Idempotence, CORS
    // =========================================================================

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = create_test_app().oneshot(get("/api/nothing-here")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_response(response).await;
        assert!(body["detail"].as_str().unwrap().contains("/api/nothing-here"));
    }

    #[tokio::test]
    async fn test_custom_prefix() {
        let catalog = Catalog::builtin().unwrap();
        let app = create_router(AppState::new(catalog, test_settings(&[("API_PREFIX", "/v1")])));

        let response = app.clone().oneshot(get("/v1/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_repeated_gets_are_byte_identical() {
        let app = create_test_app();
        for uri in ["/api/analysis", "/api/features", "/api/docs/schema", "/api/team", "/api/health"] {
            let first = app.clone().oneshot(get(uri)).await.unwrap();
            let second = app.clone().oneshot(get(uri)).await.unwrap();
            let first = axum::body::to_bytes(first.into_body(), usize::MAX).await.unwrap();
            let second = axum::body::to_bytes(second.into_body(), usize::MAX).await.unwrap();
            assert_eq!(first, second, "{uri}");
        }
    }

    async fn allow_origin_for(origin: &str) -> Option<String> {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/analysis")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let response = create_test_app().oneshot(request).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_cors_allows_configured_and_preview_origins() {
        assert_eq!(
            allow_origin_for("http://localhost:5173").await.as_deref(),
            Some("http://localhost:5173")
        );
        assert_eq!(
            allow_origin_for("https://openoa-site-abc123.vercel.app").await.as_deref(),
            Some("https://openoa-site-abc123.vercel.app")
        );
        assert_eq!(allow_origin_for("https://evil.example.com").await, None);
    }

    #[tokio::test]
    async fn test_cors_preview_pattern_must_match_whole_origin() {
        assert_eq!(allow_origin_for("https://x.vercel.app.attacker.com").await, None);
        assert_eq!(allow_origin_for("evilhttps://x.vercel.app").await, None);
    }
}

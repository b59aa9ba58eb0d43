//! HTTP API integration tests
//!
//! Drives the full actix application, middleware included, against a
//! seeded store.

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use rbac_dashboard::Config;
    use rbac_dashboard::server::{AppState, HttpServer};
    use serde_json::{Value, json};

    fn state() -> AppState {
        AppState::new(Config::default()).unwrap()
    }

    fn role_id(state: &AppState, name: &str) -> String {
        state.store.find_role_by_name(name).unwrap().id.to_string()
    }

    #[actix_web::test]
    async fn test_user_lifecycle() {
        let state = state();
        let viewer = role_id(&state, "Viewer");
        let editor = role_id(&state, "Editor");
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        // Create
        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "role_id": viewer,
                "status": "inactive"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["success"], true);
        let id = created["data"]["id"].as_str().unwrap().to_string();
        assert!(created["data"]["created_at"].is_string());

        // Read
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}", id))
            .to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["data"], created["data"]);

        // Partial update
        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/users/{}", id))
            .set_json(json!({"role_id": editor, "status": "active"}))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["data"]["name"], "Jane Doe");
        assert_eq!(updated["data"]["role_id"], editor.as_str());
        assert_eq!(updated["data"]["status"], "active");
        assert_eq!(updated["data"]["created_at"], created["data"]["created_at"]);

        // Listed with role name
        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed["meta"]["total"], 2);
        assert_eq!(listed["data"][1]["role_name"], "Editor");

        // Delete twice
        for _ in 0..2 {
            let req = test::TestRequest::delete()
                .uri(&format!("/api/v1/users/{}", id))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        }

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_update_missing_user_is_not_found() {
        let app = test::init_service(HttpServer::create_app(web::Data::new(state()))).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/users/{}", uuid::Uuid::new_v4()))
            .set_json(json!({"name": "Ghost"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_deleted_role_renders_unknown() {
        let state = state();
        let admin = role_id(&state, "Admin");
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/roles/{}", admin))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed["data"][0]["role_name"], "Unknown Role");

        let req = test::TestRequest::get().uri("/api/v1/session").to_request();
        let session: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(session["data"]["role_name"], "Unknown Role");
        assert_eq!(session["data"]["permissions"], json!({}));

        let req = test::TestRequest::get()
            .uri("/api/v1/session/permissions/roles/read")
            .to_request();
        let check: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(check["data"]["granted"], false);
    }

    #[actix_web::test]
    async fn test_role_validation_errors() {
        let app = test::init_service(HttpServer::create_app(web::Data::new(state()))).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/roles")
            .set_json(json!({"name": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let req = test::TestRequest::post()
            .uri("/api/v1/roles")
            .set_json(json!({"name": "Odd", "permissions": {"widgets": ["read"]}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/api/v1/roles").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed["meta"]["total"], 3);
    }

    #[actix_web::test]
    async fn test_unknown_permission_name_is_bad_request() {
        let app = test::init_service(HttpServer::create_app(web::Data::new(state()))).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/session/permissions/users/approve")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_server_header_is_set() {
        let app = test::init_service(HttpServer::create_app(web::Data::new(state()))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get("server").unwrap(), "RBAC-Dashboard");
    }
}

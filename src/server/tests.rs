//! Tests for server module

#[cfg(test)]
mod tests {
    use crate::auth::Role;
    use crate::config::Config;
    use crate::server::routes;
    use crate::server::state::AppState;
    use crate::storage::StorageLayer;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    async fn state() -> AppState {
        AppState::new(Config::default(), StorageLayer::in_memory().await)
    }

    async fn token_for(state: &AppState, email: &str, role: Role) -> String {
        let user = state
            .storage
            .db()
            .create_user("Test", email, "unused-hash", role)
            .await
            .unwrap();
        state.auth.jwt().issue(user.id).unwrap().access_token
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state().await))
                .configure(routes::configure_routes),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_mutation_without_session_is_401() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state().await))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/wishes")
            .set_json(json!({"title": "Mont", "description": "Kışlık"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_user_without_capability_is_403() {
        let state = state().await;
        let token = token_for(&state, "user@example.org", Role::User).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/wishes")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({"title": "Mont", "description": "Kışlık"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_admin_creates_wish() {
        let state = state().await;
        let token = token_for(&state, "admin@example.org", Role::Admin).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/wishes")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({"title": "Mont", "description": "Kışlık"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/wishes").to_request(),
        )
        .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["status"], "PENDING");
    }

    #[actix_web::test]
    async fn test_locked_capability_is_409() {
        let state = state().await;
        let token = token_for(&state, "root@example.org", Role::Admin).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/admin/roles/ADMIN")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({"permissions": ["MANAGE_WISHES"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_unknown_capability_token_is_rejected() {
        let state = state().await;
        let token = token_for(&state, "root@example.org", Role::Admin).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/admin/roles/MEMBER")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({"permissions": ["MANAGE_EVERYTHING"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_volunteer_routes() {
        let state = state().await;
        let user = token_for(&state, "gonullu@example.org", Role::User).await;
        let admin = token_for(&state, "yonetici@example.org", Role::Admin).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/volunteer/questions").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/volunteer/applications")
            .insert_header(("Authorization", format!("Bearer {}", user)))
            .set_json(json!({"team_id": uuid::Uuid::new_v4()}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get()
            .uri("/admin/volunteer/applications")
            .insert_header(("Authorization", format!("Bearer {}", admin)))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn test_reports_need_session() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state().await))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/reports").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get().uri("/reports/tags").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}

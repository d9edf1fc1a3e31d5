//! Integration tests for account registration and management.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_returns_user_without_hash() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/users",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "name": "Alice",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "alice@example.com");
    assert_eq!(response.body["name"], "Alice");
    assert_eq!(response.body["is_admin"], false);
    assert!(response.body.get("password_hash").is_none());
    assert!(response.body.get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_any_case_conflicts() {
    let app = TestApp::new();
    app.register("alice@example.com", "password123", false).await;

    let response = app
        .request(
            "POST",
            "/users",
            Some(serde_json::json!({
                "email": "ALICE@example.com",
                "name": "Imposter",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "E-mail already registered");
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new();

    for body in [
        serde_json::json!({ "email": "not-an-email", "name": "A", "password": "p" }),
        serde_json::json!({ "email": "a@example.com", "name": "", "password": "p" }),
        serde_json::json!({ "email": "a@example.com", "name": "A", "password": "" }),
    ] {
        let response = app.request("POST", "/users", Some(body), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_profile_returns_caller() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("bob@example.com", false).await;

    let response = app
        .request("GET", "/users/profile", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
}

#[tokio::test]
async fn test_list_users_requires_admin() {
    let app = TestApp::new();
    let (_, user_token) = app.signed_in("user@example.com", false).await;
    let (_, admin_token) = app.signed_in("admin@example.com", true).await;

    let forbidden = app.request("GET", "/users", None, Some(&user_token)).await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(forbidden.body["message"], "missing admin permissions");

    let listed = app.request("GET", "/users", None, Some(&admin_token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    let users = listed.body.as_array().expect("array body");
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}

#[tokio::test]
async fn test_update_self() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("carol@example.com", false).await;

    let response = app
        .request(
            "PATCH",
            &format!("/users/{id}"),
            Some(serde_json::json!({ "name": "Carol Jones" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Carol Jones");
    assert_eq!(response.body["email"], "carol@example.com");
}

#[tokio::test]
async fn test_update_password_then_login_with_new_one() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("dave@example.com", false).await;

    let response = app
        .request(
            "PATCH",
            &format!("/users/{id}"),
            Some(serde_json::json!({ "password": "fresh-password" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let old = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "email": "dave@example.com", "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);

    app.login("dave@example.com", "fresh-password").await;
}

#[tokio::test]
async fn test_update_cannot_grant_admin() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("erin@example.com", false).await;

    let response = app
        .request(
            "PATCH",
            &format!("/users/{id}"),
            Some(serde_json::json!({ "is_admin": true })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["is_admin"], false);

    let token = app.login("erin@example.com", "password123").await;
    let listed = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_to_taken_email_conflicts() {
    let app = TestApp::new();
    app.register("taken@example.com", "password123", false).await;
    let (id, token) = app.signed_in("frank@example.com", false).await;

    let response = app
        .request(
            "PATCH",
            &format!("/users/{id}"),
            Some(serde_json::json!({ "email": "Taken@example.com" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_non_admin_cannot_touch_others_existing_or_not() {
    let app = TestApp::new();
    let (other_id, _) = app.signed_in("victim@example.com", false).await;
    let (_, token) = app.signed_in("mallory@example.com", false).await;
    let missing = Uuid::new_v4().to_string();

    for target in [other_id.as_str(), missing.as_str(), "not-a-uuid"] {
        let patch = app
            .request(
                "PATCH",
                &format!("/users/{target}"),
                Some(serde_json::json!({ "name": "pwned" })),
                Some(&token),
            )
            .await;
        assert_eq!(patch.status, StatusCode::FORBIDDEN, "PATCH {target}");

        let delete = app
            .request("DELETE", &format!("/users/{target}"), None, Some(&token))
            .await;
        assert_eq!(delete.status, StatusCode::FORBIDDEN, "DELETE {target}");
    }
}

#[tokio::test]
async fn test_admin_manages_others_and_sees_not_found() {
    let app = TestApp::new();
    let (other_id, _) = app.signed_in("grace@example.com", false).await;
    let (_, admin_token) = app.signed_in("root@example.com", true).await;
    let missing = Uuid::new_v4().to_string();

    let patch = app
        .request(
            "PATCH",
            &format!("/users/{other_id}"),
            Some(serde_json::json!({ "name": "Renamed" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(patch.status, StatusCode::OK);
    assert_eq!(patch.body["name"], "Renamed");

    let patch_missing = app
        .request(
            "PATCH",
            &format!("/users/{missing}"),
            Some(serde_json::json!({ "name": "Ghost" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(patch_missing.status, StatusCode::NOT_FOUND);

    let delete = app
        .request("DELETE", &format!("/users/{other_id}"), None, Some(&admin_token))
        .await;
    assert_eq!(delete.status, StatusCode::NO_CONTENT);

    let delete_again = app
        .request("DELETE", &format!("/users/{other_id}"), None, Some(&admin_token))
        .await;
    assert_eq!(delete_again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_self_then_profile_is_gone() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("henry@example.com", false).await;

    let delete = app
        .request("DELETE", &format!("/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(delete.status, StatusCode::NO_CONTENT);

    // The token outlives the account.
    let profile = app
        .request("GET", "/users/profile", None, Some(&token))
        .await;
    assert_eq!(profile.status, StatusCode::NOT_FOUND);

    app.register("henry@example.com", "password123", false).await;
}

#[tokio::test]
async fn test_non_admin_patch_of_other_is_forbidden_whatever_the_body() {
    let app = TestApp::new();
    let (victim_id, _) = app.signed_in("ivan@example.com", false).await;
    let (_, token) = app.signed_in("judy@example.com", false).await;

    let invalid = app
        .request(
            "PATCH",
            &format!("/users/{victim_id}"),
            Some(serde_json::json!({ "email": "not-an-email" })),
            Some(&token),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::FORBIDDEN, "{:?}", invalid.body);

    let malformed = app
        .request_with_body(
            "PATCH",
            &format!("/users/{victim_id}"),
            "{not json",
            Some(&token),
        )
        .await;
    assert_eq!(malformed.status, StatusCode::FORBIDDEN, "{:?}", malformed.body);
}

#[tokio::test]
async fn test_owner_patch_with_invalid_body_is_bad_request() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("kim@example.com", false).await;

    let invalid = app
        .request(
            "PATCH",
            &format!("/users/{id}"),
            Some(serde_json::json!({ "email": "not-an-email" })),
            Some(&token),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["error"], "VALIDATION_ERROR");

    let malformed = app
        .request_with_body("PATCH", &format!("/users/{id}"), "{not json", Some(&token))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["error"], "VALIDATION_ERROR");
    assert!(malformed.body["message"].is_string());
}

#[tokio::test]
async fn test_malformed_register_body_uses_error_envelope() {
    let app = TestApp::new();

    let response = app
        .request_with_body("POST", "/users", "{\"email\": ", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].is_string());
}

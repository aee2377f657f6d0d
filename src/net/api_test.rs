use super::*;
use crate::net::types::Recipe;

#[test]
fn endpoint_joins_base_url_and_path() {
    let api = ApiClient::new("https://recipes.example.com/");
    assert_eq!(api.endpoint(TOKEN_PATH), "https://recipes.example.com/api/users/token/");
}

#[test]
fn same_origin_endpoint_is_relative() {
    let api = ApiClient::from_config(&ClientConfig::default());
    assert_eq!(api.endpoint(RECIPES_PATH), "/api/recipe/recipes/");
}

#[test]
fn recipe_detail_path_keeps_trailing_slash() {
    assert_eq!(recipe_detail_path(42), "/api/recipe/recipes/42/");
}

// =============================================================
// Response interpretation
// =============================================================

#[test]
fn token_body_decodes_on_success() {
    let token: AuthToken = decode_json(200, r#"{"token": "abc"}"#).unwrap();
    assert_eq!(token.token, "abc");
}

#[test]
fn token_validation_failure_keeps_field_messages() {
    let result: Result<AuthToken, ApiError> = decode_json(400, r#"{"email": ["Invalid email"]}"#);
    let Err(ApiError::Validation(fields)) = result else {
        panic!("expected validation error");
    };
    assert_eq!(fields.message("email").as_deref(), Some("Invalid email"));
}

#[test]
fn malformed_success_body_is_transport_error() {
    let result: Result<AuthToken, ApiError> = decode_json(200, "not json");
    assert!(matches!(result, Err(ApiError::Transport(_))));
}

#[test]
fn recipe_list_unauthorized_is_auth_error() {
    let result: Result<Vec<Recipe>, ApiError> =
        decode_json(401, r#"{"detail": "Authentication credentials were not provided."}"#);
    assert_eq!(result, Err(ApiError::Auth));
}

#[test]
fn recipe_list_decodes_in_order() {
    let body = r#"[
        {"id": 2, "title": "B", "time_minutes": 5, "price": "1.00", "images": []},
        {"id": 1, "title": "A", "time_minutes": 9, "price": "2.00", "images": []}
    ]"#;
    let recipes: Vec<Recipe> = decode_json(200, body).unwrap();
    assert_eq!(recipes.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn created_status_with_user_body_is_success() {
    assert_eq!(expect_success(201, r#"{"email": "a@b.com"}"#), Ok(()));
}

#[test]
fn create_account_rejection_is_validation() {
    let result = expect_success(400, r#"{"password": ["Your password cannot be less than 5 characters"]}"#);
    assert!(matches!(result, Err(ApiError::Validation(_))));
}

#[cfg(not(feature = "csr"))]
#[test]
fn requests_outside_the_browser_fail_as_transport() {
    let api = ApiClient::new("");
    let future = api.list_recipes("Token abc");
    let result = block_on(future);
    assert!(matches!(result, Err(ApiError::Transport(_))));
}

#[cfg(not(feature = "csr"))]
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}

//! End-to-end session lifecycle against a mock backend.

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use addy_fitness_client::{ApiError, SessionError, SessionState, SessionStorage, TokenStore};
use addy_fitness_core::{UserId, UserRole};
use addy_fitness_integration_tests::{TEST_MODE_PASSWORD, doctor_profile, test_portal};

async fn mount_successful_backend(server: &wiremock::MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=ayush%40addyfitness.com"))
        .and(body_string_contains("password=gm-pass-8841"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "issued-token-1",
            "token_type": "bearer"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer issued-token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(doctor_profile()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_success_persists_a_restorable_session() {
    let fixture = test_portal().await;
    mount_successful_backend(&fixture.server).await;
    let portal = fixture.portal();

    let user = portal
        .session()
        .login(TEST_MODE_PASSWORD)
        .await
        .expect("login succeeds");
    assert_eq!(user.id, UserId::new(5));
    assert_eq!(user.role, UserRole::Doctor);

    // Round trip: check_session immediately after restores the identical
    // user object.
    let state = portal.session().check_session();
    assert_eq!(state.user(), Some(&user));

    // Token was persisted alongside the session.
    let tokens = TokenStore::new(SessionStorage::open(fixture.state_dir.path()));
    assert_eq!(tokens.get_token(), Some("issued-token-1".to_owned()));
}

#[tokio::test]
async fn restore_works_across_portal_instances() {
    let fixture = test_portal().await;
    mount_successful_backend(&fixture.server).await;

    let user = fixture
        .portal()
        .session()
        .login(TEST_MODE_PASSWORD)
        .await
        .expect("login succeeds");

    // A second portal over the same state directory simulates a reload.
    let reloaded = fixture.portal();
    let state = reloaded.session().check_session();
    assert_eq!(state.user(), Some(&user));
}

#[tokio::test]
async fn unknown_mode_password_makes_no_network_call() {
    let fixture = test_portal().await;
    let portal = fixture.portal();

    let result = portal.session().login("wrong-mode").await;
    assert!(matches!(result, Err(SessionError::UnknownModePassword)));
    assert_eq!(portal.session().state(), SessionState::LoggedOut);

    assert!(
        fixture
            .server
            .received_requests()
            .await
            .expect("requests")
            .is_empty()
    );
}

#[tokio::test]
async fn profile_failure_after_successful_auth_leaves_no_dangling_token() {
    let fixture = test_portal().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "issued-token-2"
        })))
        .mount(&fixture.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "detail": "profile service unavailable"
        })))
        .mount(&fixture.server)
        .await;

    let portal = fixture.portal();
    let err = portal
        .session()
        .login(TEST_MODE_PASSWORD)
        .await
        .expect_err("login must fail");
    assert_eq!(err.to_string(), "profile service unavailable");

    // Error state carries the message; functionally logged out.
    let state = portal.session().state();
    assert!(state.user().is_none());
    assert_eq!(state.last_error(), Some("profile service unavailable"));

    // The token obtained in step one was cleared with everything else.
    let tokens = TokenStore::new(SessionStorage::open(fixture.state_dir.path()));
    assert_eq!(tokens.get_token(), None);
}

#[tokio::test]
async fn rejected_credentials_leave_session_logged_out() {
    let fixture = test_portal().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&fixture.server)
        .await;

    let portal = fixture.portal();
    let result = portal.session().login(TEST_MODE_PASSWORD).await;
    assert!(matches!(
        result,
        Err(SessionError::Api(ApiError::AuthExpired))
    ));

    assert!(portal.session().state().user().is_none());
    let tokens = TokenStore::new(SessionStorage::open(fixture.state_dir.path()));
    assert_eq!(tokens.get_token(), None);
}

#[tokio::test]
async fn logout_after_login_clears_restore() {
    let fixture = test_portal().await;
    mount_successful_backend(&fixture.server).await;
    let portal = fixture.portal();

    portal
        .session()
        .login(TEST_MODE_PASSWORD)
        .await
        .expect("login succeeds");

    portal.session().logout();
    assert_eq!(portal.session().state(), SessionState::LoggedOut);
    assert_eq!(portal.session().check_session(), SessionState::LoggedOut);
}

#[tokio::test]
async fn subscribers_see_the_login_transitions() {
    let fixture = test_portal().await;
    mount_successful_backend(&fixture.server).await;
    let portal = fixture.portal();

    let mut rx = portal.session().subscribe();

    portal
        .session()
        .login(TEST_MODE_PASSWORD)
        .await
        .expect("login succeeds");

    // The receiver coalesces intermediate states; the latest value must
    // be the logged-in one.
    rx.changed().await.expect("state change");
    assert!(rx.borrow().user().is_some());
}

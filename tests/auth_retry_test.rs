use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use catalogcli::error::CatalogError;
use catalogcli::management::{AuthManager, AuthStatus};
use catalogcli::spotify::Authenticator;
use catalogcli::types::{AccessToken, Authentication};

// Authenticator that hands out pre-scripted results in order
struct ScriptedAuthenticator {
    results: Mutex<VecDeque<Result<Authentication, CatalogError>>>,
    calls: AtomicUsize,
}

impl ScriptedAuthenticator {
    fn new(results: Vec<Result<Authentication, CatalogError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Authenticator for ScriptedAuthenticator {
    async fn authenticate(&self) -> Result<Authentication, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CatalogError::transport("no scripted result left")))
    }
}

fn token(value: &str) -> Authentication {
    Authentication::new(value, "Bearer", 3600)
}

fn auth_rejected() -> CatalogError {
    CatalogError::status(401, "invalid token")
}

#[tokio::test]
async fn test_success_without_reauthentication() {
    let mut manager = AuthManager::with_authentication(ScriptedAuthenticator::new(vec![]), token("t1"));
    let calls = AtomicUsize::new(0);

    let result = manager
        .execute_with_auth_retry(|token| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<_, CatalogError>(token.as_str().to_string()) }
        })
        .await;

    assert_eq!(result.unwrap(), "t1");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(manager.authenticator().calls(), 0);
    assert_eq!(manager.status(), AuthStatus::Authenticated);
}

#[tokio::test]
async fn test_rejected_token_is_replaced_and_operation_retried_once() {
    let mut manager = AuthManager::with_authentication(
        ScriptedAuthenticator::new(vec![Ok(token("t2"))]),
        token("t1"),
    );
    let seen = Mutex::new(Vec::new());

    let result = manager
        .execute_with_auth_retry(|token: AccessToken| {
            seen.lock().unwrap().push(token.as_str().to_string());
            async move {
                if token.as_str() == "t1" {
                    Err(auth_rejected())
                } else {
                    Ok(42)
                }
            }
        })
        .await;

    assert_eq!(result.unwrap(), 42);
    assert_eq!(*seen.lock().unwrap(), vec!["t1", "t2"]);
    assert_eq!(manager.authenticator().calls(), 1);
    assert_eq!(manager.access_token().map(AccessToken::as_str), Some("t2"));
    assert_eq!(manager.status(), AuthStatus::Authenticated);
}

#[tokio::test]
async fn test_second_rejection_is_returned_without_third_attempt() {
    let mut manager = AuthManager::with_authentication(
        ScriptedAuthenticator::new(vec![Ok(token("t2")), Ok(token("t3"))]),
        token("t1"),
    );
    let calls = AtomicUsize::new(0);

    let result: Result<(), _> = manager
        .execute_with_auth_retry(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(CatalogError::status(403, "forbidden")) }
        })
        .await;

    assert_eq!(result.unwrap_err().status_code(), Some(403));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(manager.authenticator().calls(), 1);
}

#[tokio::test]
async fn test_other_errors_are_not_retried() {
    let errors = vec![
        CatalogError::status(500, "server error"),
        CatalogError::status(404, "not found"),
        CatalogError::status(429, "rate limited"),
        CatalogError::transport("connection refused"),
        CatalogError::decode("bad body"),
    ];

    for expected in errors {
        let mut manager = AuthManager::with_authentication(ScriptedAuthenticator::new(vec![]), token("t1"));
        let calls = AtomicUsize::new(0);

        let result: Result<(), _> = manager
            .execute_with_auth_retry(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                let err = expected.clone();
                async move { Err(err) }
            })
            .await;

        assert_eq!(result.unwrap_err(), expected);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(manager.authenticator().calls(), 0);
    }
}

#[tokio::test]
async fn test_failed_reauthentication_returns_auth_error_and_keeps_old_token() {
    let auth_error = CatalogError::Status {
        code: 400,
        message: "invalid_client".to_string(),
        details: Some("Invalid client secret".to_string()),
    };
    let mut manager = AuthManager::with_authentication(
        ScriptedAuthenticator::new(vec![Err(auth_error.clone())]),
        token("t1"),
    );
    let calls = AtomicUsize::new(0);

    let result: Result<(), _> = manager
        .execute_with_auth_retry(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(auth_rejected()) }
        })
        .await;

    assert_eq!(result.unwrap_err(), auth_error);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(manager.status(), AuthStatus::Failed);
    assert_eq!(manager.access_token().map(AccessToken::as_str), Some("t1"));
}

#[tokio::test]
async fn test_lazy_authentication_when_no_token_is_held() {
    let mut manager = AuthManager::new(ScriptedAuthenticator::new(vec![Ok(token("fresh"))]));
    assert_eq!(manager.status(), AuthStatus::Unauthenticated);
    assert!(manager.current().is_none());

    let result = manager
        .execute_with_auth_retry(|token| async move { Ok::<_, CatalogError>(token.as_str().len()) })
        .await;

    assert_eq!(result.unwrap(), 5);
    assert_eq!(manager.authenticator().calls(), 1);
    assert_eq!(manager.status(), AuthStatus::Authenticated);
}

#[tokio::test]
async fn test_initial_authentication_failure_skips_operation() {
    let mut manager = AuthManager::new(ScriptedAuthenticator::new(vec![Err(CatalogError::transport(
        "connection refused",
    ))]));
    let calls = AtomicUsize::new(0);

    let result: Result<(), _> = manager
        .execute_with_auth_retry(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        })
        .await;

    assert!(matches!(result, Err(CatalogError::Transport { .. })));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(manager.status(), AuthStatus::Unauthenticated);
    assert!(manager.access_token().is_none());
}

#[tokio::test]
async fn test_forced_authenticate_replaces_token() {
    let mut manager = AuthManager::with_authentication(
        ScriptedAuthenticator::new(vec![Ok(token("t2"))]),
        token("t1"),
    );

    let fresh = manager.authenticate().await.unwrap();
    assert_eq!(fresh.as_str(), "t2");
    assert_eq!(manager.current().unwrap().token_type, "Bearer");
    assert_eq!(manager.current().unwrap().expires_in, 3600);
}

#[tokio::test]
async fn test_success_with_kept_token_recovers_from_failed_refresh() {
    let mut manager = AuthManager::with_authentication(
        ScriptedAuthenticator::new(vec![Err(CatalogError::transport("connection refused"))]),
        token("t1"),
    );

    let result: Result<(), _> = manager
        .execute_with_auth_retry(|_| async { Err(auth_rejected()) })
        .await;
    assert!(matches!(result, Err(CatalogError::Transport { .. })));
    assert_eq!(manager.status(), AuthStatus::Failed);

    // The kept token turns out to be accepted again
    let result = manager
        .execute_with_auth_retry(|token| async move { Ok::<_, CatalogError>(token.as_str().to_string()) })
        .await;

    assert_eq!(result.unwrap(), "t1");
    assert_eq!(manager.status(), AuthStatus::Authenticated);
    assert_eq!(manager.authenticator().calls(), 1);
}

#[tokio::test]
async fn test_failed_status_kept_while_calls_keep_failing() {
    let mut manager = AuthManager::with_authentication(
        ScriptedAuthenticator::new(vec![Err(CatalogError::transport("connection refused"))]),
        token("t1"),
    );

    let _ = manager
        .execute_with_auth_retry(|_| async { Err::<(), _>(auth_rejected()) })
        .await;
    let result = manager
        .execute_with_auth_retry(|_| async { Err::<(), _>(CatalogError::status(500, "server error")) })
        .await;

    assert_eq!(result.unwrap_err().status_code(), Some(500));
    assert_eq!(manager.status(), AuthStatus::Failed);
}

//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes
//! - Error responses are properly formatted
//! - Error conversions work correctly
//! - Error matching allows callers to handle specific cases

use axum::http::StatusCode;
use axum::response::IntoResponse;
use billed::prelude::*;

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_store_404_returns_404() {
        let err = BilledError::Store(StoreError::http(404));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_500_returns_500() {
        let err = BilledError::Store(StoreError::http(500));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_invalid_status_falls_back_to_500() {
        let err = BilledError::Store(StoreError {
            message: "Erreur 42".to_string(),
            status: Some(42),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_session_error_returns_401() {
        let err = BilledError::Session(SessionError::Missing);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_unknown_route_returns_404() {
        let err = BilledError::Navigation(NavigationError::UnknownRoute {
            path: "#employee/bill/new".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_wait_timeout_returns_504() {
        let err = BilledError::Wait(WaitError {
            timeout_ms: 1000,
            last_error: "no element found for text \"Erreur 404\"".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::GATEWAY_TIMEOUT);
    }
}

// =============================================================================
// Error Response Tests
// =============================================================================

mod error_response_tests {
    use super::*;

    #[test]
    fn test_error_response_has_code_and_message() {
        let err = BilledError::Store(StoreError::http(500));

        let response = err.to_response();

        assert_eq!(response.code, "STORE_ERROR");
        assert_eq!(response.message, "Erreur 500");
    }

    #[test]
    fn test_dom_error_message_names_the_query() {
        let err = BilledError::Dom(DomError::NotFound {
            query: "test id modaleFileEmployee".to_string(),
        });

        let response = err.to_response();

        assert_eq!(response.code, "DOM_ERROR");
        assert!(response.message.contains("modaleFileEmployee"));
    }
}

// =============================================================================
// Error Conversion Tests
// =============================================================================

mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_store_error_converts_to_billed_error() {
        let err: BilledError = StoreError::new("Erreur 404").into();
        assert!(matches!(err, BilledError::Store(_)));
        assert_eq!(err.to_string(), "Erreur 404");
    }

    #[test]
    fn test_serde_json_error_converts_to_session_error() {
        let json_err = serde_json::from_str::<SessionUser>("{").unwrap_err();
        let err: BilledError = SessionError::from(json_err).into();
        assert!(matches!(err, BilledError::Session(SessionError::Malformed(_))));
    }

    #[test]
    fn test_errors_convert_to_anyhow() {
        fn fails() -> anyhow::Result<()> {
            let navigation: Result<(), NavigationError> = Err(NavigationError::NoRuntime);
            navigation?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(err.downcast_ref::<NavigationError>().is_some());
    }
}

// =============================================================================
// Error Matching Tests
// =============================================================================

mod error_matching_tests {
    use super::*;

    #[test]
    fn test_can_match_navigation_errors() {
        let err = NavigationError::Unauthorized {
            reason: "no user is stored in the session".to_string(),
        };

        match err {
            NavigationError::Unauthorized { reason } => {
                assert!(reason.contains("session"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_can_match_dom_errors() {
        let doc = Document::with_root();

        match doc.get_by_test_id(test_ids::ICON_EYE) {
            Err(DomError::NotFound { query }) => assert!(query.contains("icon-eye")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

// =============================================================================
// IntoResponse Tests
// =============================================================================

mod into_response_tests {
    use super::*;

    #[test]
    fn test_store_error_into_response_status() {
        let response = BilledError::Store(StoreError::http(404)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unauthorized_into_response_status() {
        let err = BilledError::Navigation(NavigationError::Unauthorized {
            reason: "Admin users cannot open #employee/bills".to_string(),
        });

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_into_response_status() {
        let response = BilledError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

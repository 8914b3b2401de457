// ═══════════════════════════════════════════════════════════════════
// Error Tests — display formats and conversions
// ═══════════════════════════════════════════════════════════════════

use tradelens_core::errors::CoreError;

mod display {
    use super::*;

    #[test]
    fn api_error_names_the_endpoint() {
        let err = CoreError::Api {
            endpoint: "/analyze".to_string(),
            message: "bad payload".to_string(),
        };
        assert_eq!(err.to_string(), "API error (/analyze): bad payload");
    }

    #[test]
    fn backend_status_carries_code_and_endpoint() {
        let err = CoreError::BackendStatus {
            endpoint: "/watchlist".to_string(),
            status: 404,
            message: "not found".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("/watchlist"));
    }

    #[test]
    fn request_in_flight_is_self_describing() {
        assert_eq!(
            CoreError::RequestInFlight.to_string(),
            "An analysis request is already in flight"
        );
    }

    #[test]
    fn malformed_series_keeps_the_detail() {
        let err = CoreError::MalformedSeries("empty series".to_string());
        assert!(err.to_string().contains("empty series"));
    }
}

mod conversions {
    use super::*;

    #[test]
    fn io_error_becomes_file_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn serde_error_becomes_deserialization() {
        let bad: Result<i64, _> = serde_json::from_str("\"not a number\"");
        let err: CoreError = bad.unwrap_err().into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn errors_are_debug_and_send() {
        fn assert_send<T: Send>() {}
        assert_send::<CoreError>();
        let err = CoreError::Network("boom".to_string());
        assert!(!format!("{err:?}").is_empty());
    }
}

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchReport {
    pub inserted: i64,
    pub message: String,
    pub start_date: String,
    pub last_timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CleanupReport {
    pub deleted: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    pub status: String,
}

impl HealthReport {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

// Shape of the server's JSON error responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_report_rejects_missing_fields() {
        let body = r#"{"inserted": 2, "message": "Done"}"#;
        assert!(serde_json::from_str::<FetchReport>(body).is_err());
    }

    #[test]
    fn cleanup_report_ignores_extra_fields() {
        let body = r#"{"deleted": 7, "message": "All emails deleted from DB.", "took_ms": 12}"#;
        let report: CleanupReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.deleted, 7);
        assert_eq!(report.message, "All emails deleted from DB.");
    }

    #[test]
    fn health_status_is_case_insensitive() {
        let report = HealthReport {
            status: "OK".to_string(),
        };
        assert!(report.is_ok());
        let report = HealthReport {
            status: "degraded".to_string(),
        };
        assert!(!report.is_ok());
    }
}

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ResponseRecord {
    pub email: String,
    pub answers: Vec<i64>,
    pub submitted_at: DateTime<Utc>,
}

/// Append-only log of submitted answer vectors.
///
/// Duplicate submissions for the same email are all appended, but
/// `find_by_email` returns the first record in insertion order. Later
/// submissions for that email are stored and never read back. First-match
/// lookup is a documented contract of the service; switching to
/// latest-wins would change observable results.
#[derive(Debug, Default)]
pub struct ResponseStore {
    records: Vec<ResponseRecord>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a response record. Validation (length, registration) happens
    /// at the service layer before this is called.
    pub fn append(&mut self, email: &str, answers: Vec<i64>) {
        let record = ResponseRecord {
            email: email.to_string(),
            answers,
            submitted_at: Utc::now(),
        };
        tracing::debug!(
            email = %record.email,
            submitted_at = %record.submitted_at,
            "response appended"
        );
        self.records.push(record);
    }

    /// First record in insertion order whose email matches, if any.
    pub fn find_by_email(&self, email: &str) -> Option<&ResponseRecord> {
        self.records.iter().find(|r| r.email == email)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_missing_email() {
        let store = ResponseStore::new();
        assert!(store.find_by_email("a@x.com").is_none());
    }

    #[test]
    fn test_append_and_find() {
        let mut store = ResponseStore::new();
        store.append("a@x.com", vec![1; 15]);
        let record = store.find_by_email("a@x.com").unwrap();
        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.answers, vec![1; 15]);
    }

    #[test]
    fn test_duplicates_all_stored_first_wins() {
        let mut store = ResponseStore::new();
        store.append("a@x.com", vec![1; 15]);
        store.append("a@x.com", vec![5; 15]);

        assert_eq!(store.len(), 2);
        let record = store.find_by_email("a@x.com").unwrap();
        assert_eq!(record.answers, vec![1; 15]);
    }

    #[test]
    fn test_records_carry_submission_time() {
        let mut store = ResponseStore::new();
        let before = Utc::now();
        store.append("a@x.com", vec![1; 15]);
        let record = store.find_by_email("a@x.com").unwrap();
        assert!(record.submitted_at >= before);
        assert!(record.submitted_at <= Utc::now());
    }

    #[test]
    fn test_find_is_per_email() {
        let mut store = ResponseStore::new();
        store.append("a@x.com", vec![1; 15]);
        store.append("b@x.com", vec![2; 15]);

        assert_eq!(store.find_by_email("b@x.com").unwrap().answers, vec![2; 15]);
        assert_eq!(store.find_by_email("a@x.com").unwrap().answers, vec![1; 15]);
    }
}

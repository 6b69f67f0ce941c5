use crate::error::QuizError;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

/// In-memory set of registered emails, in registration order.
///
/// Two states per email: unregistered and registered. Registration is the
/// only transition; there is no unregister. State lives for the process
/// lifetime.
#[derive(Debug, Default)]
pub struct RegistrationStore {
    registrations: Vec<Registration>,
}

impl RegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an email if it is non-empty and not already present.
    ///
    /// # Errors
    ///
    /// `MissingEmail` for an empty string, `DuplicateEmail` if the email is
    /// already registered.
    pub fn register(&mut self, email: &str) -> Result<(), QuizError> {
        if email.is_empty() {
            return Err(QuizError::MissingEmail);
        }
        if self.is_registered(email) {
            return Err(QuizError::DuplicateEmail);
        }
        let registration = Registration {
            email: email.to_string(),
            registered_at: Utc::now(),
        };
        tracing::debug!(
            email = %registration.email,
            registered_at = %registration.registered_at,
            "email registered"
        );
        self.registrations.push(registration);
        Ok(())
    }

    /// Registration timestamp for an email, if it is registered.
    pub fn registered_at(&self, email: &str) -> Option<DateTime<Utc>> {
        self.registrations
            .iter()
            .find(|r| r.email == email)
            .map(|r| r.registered_at)
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.registrations.iter().any(|r| r.email == email)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_new_email() {
        let mut store = RegistrationStore::new();
        store.register("a@x.com").unwrap();
        assert!(store.is_registered("a@x.com"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut store = RegistrationStore::new();
        store.register("a@x.com").unwrap();
        let err = store.register("a@x.com").unwrap_err();
        assert_eq!(err, QuizError::DuplicateEmail);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_email_rejected() {
        let mut store = RegistrationStore::new();
        let err = store.register("").unwrap_err();
        assert_eq!(err, QuizError::MissingEmail);
        assert!(store.is_empty());
    }

    #[test]
    fn test_unregistered_email_not_found() {
        let store = RegistrationStore::new();
        assert!(!store.is_registered("a@x.com"));
        assert!(store.registered_at("a@x.com").is_none());
    }

    #[test]
    fn test_registration_carries_timestamp() {
        let mut store = RegistrationStore::new();
        let before = Utc::now();
        store.register("a@x.com").unwrap();
        let registered_at = store.registered_at("a@x.com").unwrap();
        assert!(registered_at >= before);
        assert!(registered_at <= Utc::now());
    }

    #[test]
    fn test_emails_are_opaque_keys() {
        // No format validation beyond non-empty; distinct strings are
        // distinct registrations.
        let mut store = RegistrationStore::new();
        store.register("not-an-email").unwrap();
        store.register("A@X.COM").unwrap();
        store.register("a@x.com").unwrap();
        assert_eq!(store.len(), 3);
    }
}

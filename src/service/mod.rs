use crate::error::QuizError;
use crate::quiz::weights::{WeightTable, CATEGORIES};
use crate::scoring::{compute_scores, top_categories, CategoryScore, TOP_N};
use crate::store::{RegistrationStore, ResponseStore};

/// The register → submit → results pipeline over the in-memory stores.
///
/// Handlers share one instance behind `Arc<Mutex<..>>`; the single mutex
/// serializes all store operations, which is the required discipline for
/// the append-if-absent / append / first-match trio.
#[derive(Debug, Default)]
pub struct QuizService {
    table: WeightTable,
    registrations: RegistrationStore,
    responses: ResponseStore,
}

impl QuizService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an email. Fails on empty or already-registered emails.
    pub fn register(&mut self, email: &str) -> Result<(), QuizError> {
        self.registrations.register(email)
    }

    /// Store an answer vector for a registered email.
    ///
    /// Validation order: missing email, wrong answer count, unknown email.
    /// Accepted submissions are appended; a second submission for the same
    /// email is stored but results keep reading the first one.
    pub fn submit(&mut self, email: &str, answers: Vec<i64>) -> Result<(), QuizError> {
        if email.is_empty() {
            return Err(QuizError::MissingField);
        }
        if answers.len() != self.table.rows() {
            return Err(QuizError::InvalidAnswerLength {
                expected: self.table.rows(),
            });
        }
        if !self.registrations.is_registered(email) {
            return Err(QuizError::UnknownEmail);
        }
        self.responses.append(email, answers);
        Ok(())
    }

    /// Score the first stored response for an email and return the top
    /// categories, best first.
    pub fn results(&self, email: &str) -> Result<Vec<CategoryScore>, QuizError> {
        if email.is_empty() {
            return Err(QuizError::MissingEmail);
        }
        let record = self
            .responses
            .find_by_email(email)
            .ok_or(QuizError::NotFound)?;
        let scores = compute_scores(&record.answers, &self.table)?;
        top_categories(&CATEGORIES, &scores, TOP_N)
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    pub fn response_count(&self) -> usize {
        self.responses.len()
    }
}

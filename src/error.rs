use thiserror::Error;

/// Validation failures surfaced to the caller.
///
/// None of these are fatal to the process; each request is handled
/// independently and a failed one only affects its own response. The display
/// strings double as the HTTP response bodies.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizError {
    /// Register/results called without an email.
    #[error("Email é obrigatório.")]
    MissingEmail,

    /// Email was already registered.
    #[error("Email já registrado.")]
    DuplicateEmail,

    /// Submission for an email that never registered.
    #[error("Email não registrado.")]
    UnknownEmail,

    /// Submission missing the email or the answers array.
    #[error("Email e respostas são obrigatórios.")]
    MissingField,

    /// Answers value is not a list with exactly one answer per question.
    #[error("Respostas inválidas: esperada uma lista de {expected} números.")]
    InvalidAnswerLength { expected: usize },

    /// No stored response for the requested email.
    #[error("Respostas não encontradas para este email.")]
    NotFound,

    /// Caller-supplied parameter outside the supported range.
    #[error("Parâmetro inválido: {0}")]
    InvalidInput(String),
}

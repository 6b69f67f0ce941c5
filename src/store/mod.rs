pub mod registration;
pub mod response;

pub use registration::RegistrationStore;
pub use response::{ResponseRecord, ResponseStore};

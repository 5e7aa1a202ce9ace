/// Module containing the credential store trait and its implementations
pub mod credentials;

pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};

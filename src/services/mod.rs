pub mod auth;
pub mod catalog;
pub mod export;
pub mod store;

pub use auth::{AuthError, AuthStore, Registration, Role, User};
pub use store::{
    Application, ApplicationStatus, KeyValue, MemoryBackend, NewApplication, ScholarshipStore,
    StoreError,
};

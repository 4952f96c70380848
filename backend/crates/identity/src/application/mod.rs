//! Application Layer
//!
//! Use cases and application services.

pub mod change_password;
pub mod config;
pub mod list_sessions;
pub mod login;
pub mod register;
pub mod setup;
pub mod token;
pub mod verify_email;

// Re-exports
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::IdentityConfig;
pub use list_sessions::{ListSessionsInput, ListSessionsUseCase};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use setup::{SetupDetails, SetupUseCase};
pub use token::{TokenCodec, TokenError, TokenPurpose};
pub use verify_email::VerifyEmailUseCase;

//! Auth application layer - use cases

pub mod config;
pub mod login;
pub mod profile;
pub mod register;
pub mod request_password_reset;
pub mod reset_password;

pub use login::{LoginInput, LoginUseCase};
pub use profile::{GetProfileUseCase, UpdateProfileInput, UpdateProfileUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use request_password_reset::RequestPasswordResetUseCase;
pub use reset_password::{ResetPasswordInput, ResetPasswordUseCase};

//! Credential lifecycle endpoints: registration, login, password reset.

pub mod login;
pub mod register;
pub mod reset_password;

pub use login::login;
pub use register::register;
pub use reset_password::reset_password;

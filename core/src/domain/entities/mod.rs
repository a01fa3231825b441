//! Domain entities persisted by the repositories.

pub mod account;
pub mod feedback;
pub mod notification;
pub mod profile;
pub mod token;

pub use account::Account;
pub use feedback::Feedback;
pub use notification::Notification;
pub use profile::Profile;
pub use token::Claims;

//! Repository interfaces for the persistence layer.
//!
//! Concrete implementations live in the infrastructure crate; in-memory
//! mocks live alongside the traits for use in service and route tests.

pub mod account;
pub mod feedback;
pub mod notification;
pub mod profile;

pub use account::{AccountRepository, MockAccountRepository};
pub use feedback::{FeedbackRepository, MockFeedbackRepository};
pub use notification::{MockNotificationRepository, NotificationRepository};
pub use profile::{MockProfileRepository, ProfileRepository};

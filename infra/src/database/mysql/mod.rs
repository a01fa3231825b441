//! MySQL repository implementations.

mod account_repository_impl;
mod feedback_repository_impl;
mod notification_repository_impl;
mod profile_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use feedback_repository_impl::MySqlFeedbackRepository;
pub use notification_repository_impl::MySqlNotificationRepository;
pub use profile_repository_impl::MySqlProfileRepository;

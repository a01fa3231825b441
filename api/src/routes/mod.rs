//! Route handlers grouped by screen area.

pub mod auth;
pub mod contact;
pub mod feedback;
pub mod notifications;
pub mod profile;

use std::sync::Arc;

use vc_core::repositories::{
    AccountRepository, FeedbackRepository, NotificationRepository, ProfileRepository,
};
use vc_core::services::auth::AuthService;
use vc_core::services::token::TokenService;

/// Application state shared by every handler
///
/// Generic over the repository implementations so route tests can inject
/// the in-memory mocks while the binary wires the MySQL ones.
pub struct AppState<A, P, F, N>
where
    A: AccountRepository,
    P: ProfileRepository,
    F: FeedbackRepository,
    N: NotificationRepository,
{
    pub auth_service: Arc<AuthService<A>>,
    pub token_service: Arc<TokenService>,
    pub profile_repository: Arc<P>,
    pub feedback_repository: Arc<F>,
    pub notification_repository: Arc<N>,
}

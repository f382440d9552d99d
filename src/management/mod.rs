mod auth;

pub use auth::AuthManager;
pub use auth::AuthStatus;

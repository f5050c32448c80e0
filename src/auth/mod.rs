pub mod middleware;
pub mod session;

pub use middleware::AdminSession;
pub use session::AuthGate;

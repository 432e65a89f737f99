//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route.

pub mod home;
pub mod session;

// Re-export all page components for convenient access
pub use home::HomePage;
pub use session::SessionPage;

//! Navigation seam
//!
//! The route guard never touches the render layer directly; it asks a
//! `Navigator` to move the user when a redirect is due.

/// Render-layer navigation hook
pub trait Navigator: Send + Sync {
    /// Navigate to `route` (e.g. `"/login"`).
    fn navigate(&self, route: &str);
}

//! Rendering context handed to every element construction call.

use crate::router::Router;

/// Ambient, per-construction object exposing host capabilities to attribute
/// value transforms.
///
/// The context is owned by the caller; the engine only borrows it for the
/// duration of one construction call.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    router: &'a dyn Router,
    location: &'a str,
}

impl<'a> RenderContext<'a> {
    /// Create a context for a component mounted at `location`.
    pub fn new(router: &'a dyn Router, location: &'a str) -> Self {
        Self { router, location }
    }

    /// The routing capability of the host.
    pub fn router(&self) -> &'a dyn Router {
        self.router
    }

    /// Absolute path of the component being rendered. Relative links resolve
    /// against it.
    pub fn location(&self) -> &'a str {
        self.location
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

//! Link rewrite: turns semantic link attributes into application-absolute hrefs.

use tracing::debug;

use crate::context::RenderContext;
use crate::rewrite::attributes::ValueTransform;

/// Resolves a link value through the context's router.
///
/// When the router has no route for the resolved path (external links, or
/// paths served outside the rendering layer such as file exports) the raw
/// value is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkTarget;

impl ValueTransform for LinkTarget {
    fn transform(&self, value: &str, context: &RenderContext<'_>) -> String {
        let router = context.router();
        let destination = router.absolute(value, context);

        if router.get_route(&destination).is_none() {
            debug!(link = value, resolved = %destination, "no route for link, keeping raw value");
            return value.to_owned();
        }

        destination
    }
}

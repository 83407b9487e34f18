//! Element construction hook.
//!
//! A host injects an [`ElementRewrite`] into its construction entry point and
//! routes every call through [`construct`], which always ends in the host's
//! own [`ElementFactory`].

use tracing::trace;

use crate::context::RenderContext;
use crate::host::ElementFactory;
use crate::rewrite::attributes::Attributes;

/// What a host needs from the engine to rewrite element construction.
pub trait ElementRewrite {
    /// Native tag for a semantic tag.
    fn resolve_tag(&self, tag: &str) -> String;

    /// Rewrite the attribute set, returning an optional tag override.
    fn rewrite_attributes(
        &self,
        tag: &str,
        attributes: Attributes,
        context: &RenderContext<'_>,
    ) -> (Option<String>, Attributes);

    /// Class added to every element built from `tag`.
    fn class_name(&self, tag: &str) -> String;
}

/// Build an element for a semantic `tag` through `factory`.
///
/// The attribute rewrites' tag override beats the resolved tag. The derived
/// class comes from the original semantic tag, not the native one.
pub fn construct<R, F>(
    rewrite: &R,
    factory: &mut F,
    tag: &str,
    attributes: Attributes,
    children: Vec<F::Element>,
    context: &RenderContext<'_>,
) -> F::Element
where
    R: ElementRewrite + ?Sized,
    F: ElementFactory + ?Sized,
{
    let resolved = rewrite.resolve_tag(tag);
    let (override_tag, attributes) = rewrite.rewrite_attributes(tag, attributes, context);
    let native = override_tag.unwrap_or(resolved);
    trace!(source = tag, native = %native, "constructing element");

    let element = factory.create_element(&native, attributes, children);
    factory.add_class(&element, &rewrite.class_name(tag));
    element
}

//! Activation: wires the engine into a host.

use std::sync::Arc;

use tracing::debug;

use crate::host::Host;
use crate::rewrite::Rewriter;

impl Rewriter {
    /// Install the engine into `host`: insert the reset stylesheet ahead of
    /// all author styles, install the selector transform, then install the
    /// element rewrite.
    ///
    /// Call this once per host. Activating twice inserts a second reset
    /// sheet and re-installs both hooks.
    pub fn activate(self: Arc<Self>, host: &mut impl Host) {
        let reset = self.build_reset();
        debug!(reset = %reset, "inserting reset stylesheet");
        host.insert_stylesheet(reset);

        debug!("installing selector transform");
        host.install_selector_transform(self.clone());

        debug!("installing element rewrite");
        host.install_element_rewrite(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::compiler::{SelectorTransform, StyleGroup};
    use crate::rewrite::element::ElementRewrite;

    /// Records installations without doing anything with them.
    #[derive(Default)]
    struct RecordingHost {
        element_rewrites: usize,
        selector_transforms: usize,
        stylesheets: Vec<String>,
    }

    impl Host for RecordingHost {
        fn install_element_rewrite(&mut self, _rewrite: Arc<dyn ElementRewrite>) {
            self.element_rewrites += 1;
        }

        fn install_selector_transform(&mut self, transform: Arc<dyn SelectorTransform>) {
            assert_eq!(transform.wrap_selector("ui-title"), ".title");
            self.selector_transforms += 1;
        }

        fn insert_stylesheet(&mut self, css: String) {
            self.stylesheets.insert(0, css);
        }
    }

    #[test]
    fn activation_installs_each_hook_once() {
        let mut host = RecordingHost::default();
        Arc::new(Rewriter::default()).activate(&mut host);
        assert_eq!(host.element_rewrites, 1);
        assert_eq!(host.selector_transforms, 1);
        assert_eq!(host.stylesheets, vec!["div,h1,h2,p,section,nav,a{all:unset}"]);
    }

    #[test]
    fn reset_precedes_existing_styles() {
        let mut document = crate::host::Document::new();
        document.add_style(&StyleGroup::select("ui-title").declare("color", "red"));
        Arc::new(Rewriter::default()).activate(&mut document);
        assert_eq!(document.stylesheets().len(), 2);
        assert!(document.stylesheets()[0].ends_with("{all:unset}"));
        // Styles compiled before activation were not rewritten.
        assert_eq!(document.stylesheets()[1], "ui-title{color:red;}");
    }
}

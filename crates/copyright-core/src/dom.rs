//! DOM rendering through a host-provided document
//!
//! The core never touches a browser directly. A host (the wasm bindings, or
//! an in-memory document in tests) implements [`DomHost`] and the notice
//! drives it: look up the container, create the element, fill it, append it.

use crate::clock::YearSource;
use crate::copyright::Copyright;
use crate::error::CopyrightError;
use crate::options::RenderOptions;
use crate::style::camel_to_kebab;

/// Document operations needed to render a notice
pub trait DomHost {
    /// Handle to a live element; cloning must yield the same element
    type Element: Clone;

    /// First element matching `selector`, if any
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Element>, CopyrightError>;

    fn create_element(&self, tag: &str) -> Result<Self::Element, CopyrightError>;

    fn set_text_content(&self, element: &Self::Element, text: &str);

    fn set_class_name(&self, element: &Self::Element, class_name: &str);

    /// `property` is kebab-case (`font-size`)
    fn set_style_property(
        &self,
        element: &Self::Element,
        property: &str,
        value: &str,
    ) -> Result<(), CopyrightError>;

    fn append_child(&self, parent: &Self::Element, child: &Self::Element)
        -> Result<(), CopyrightError>;
}

/// Where to render: a CSS selector or an element already in hand
#[derive(Debug, Clone)]
pub enum RenderTarget<'a, E> {
    Selector(&'a str),
    Element(E),
}

impl<'a, E> From<&'a str> for RenderTarget<'a, E> {
    fn from(selector: &'a str) -> Self {
        RenderTarget::Selector(selector)
    }
}

impl<C: YearSource> Copyright<C> {
    /// Append a new element holding the notice to `target`.
    ///
    /// # Returns
    /// The created element
    ///
    /// # Errors
    /// `TargetNotFound` when a selector matches nothing; `Dom` when the host
    /// fails to create, style or append the element
    pub fn render<H: DomHost>(
        &self,
        host: &H,
        target: RenderTarget<'_, H::Element>,
        render: &RenderOptions,
    ) -> Result<H::Element, CopyrightError> {
        let container = match target {
            RenderTarget::Selector(selector) => host
                .query_selector(selector)?
                .ok_or_else(|| CopyrightError::TargetNotFound(selector.to_string()))?,
            RenderTarget::Element(element) => element,
        };

        let element = host.create_element(render.tag())?;
        host.set_text_content(&element, &self.get_text());

        if let Some(class_name) = render.class_name() {
            host.set_class_name(&element, class_name);
        }

        for (key, value) in render.style.iter() {
            host.set_style_property(&element, &camel_to_kebab(key), value)?;
        }

        host.append_child(&container, &element)?;
        tracing::debug!(tag = render.tag(), "rendered copyright notice into DOM");
        Ok(element)
    }
}

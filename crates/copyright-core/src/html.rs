//! HTML string output

use crate::options::RenderOptions;
use crate::style::style_object_to_string;

/// Wrap `text` in `<tag attrs>text</tag>`.
///
/// `class` comes before `style`; an empty style map emits no `style`
/// attribute. Text and attribute values are inserted as given.
pub fn wrap_html(text: &str, render: &RenderOptions) -> String {
    let tag = render.tag();
    let mut attributes = Vec::new();

    if let Some(class_name) = render.class_name() {
        attributes.push(format!("class=\"{}\"", class_name));
    }

    if !render.style.is_empty() {
        attributes.push(format!("style=\"{}\"", style_object_to_string(&render.style)));
    }

    let attr_string = if attributes.is_empty() {
        String::new()
    } else {
        format!(" {}", attributes.join(" "))
    };

    format!("<{tag}{attr_string}>{text}</{tag}>")
}

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, NodeList, Window};

/// The presentation side of an element: inline styles, class markers and
/// presence in the document.
pub trait Surface {
    fn set_style(&self, property: &str, value: &str);
    fn set_class(&self, class: &str, on: bool);
    fn detach(&self);
}

impl Surface for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }

    fn set_class(&self, class: &str, on: bool) {
        let _ = self.class_list().toggle_with_force(class, on);
    }

    fn detach(&self) {
        self.remove();
    }
}

pub trait LinkOpener {
    fn open_in_new_tab(&self, url: &str);
}

impl LinkOpener for Window {
    fn open_in_new_tab(&self, url: &str) {
        // A blocked popup comes back as Ok(None); nothing to do about it.
        let _ = self.open_with_url_and_target(url, "_blank");
    }
}

pub fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    document
        .query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

pub fn as_surface(element: &HtmlElement) -> Rc<dyn Surface> {
    Rc::new(element.clone())
}

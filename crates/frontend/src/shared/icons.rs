//! Icon-name remapping for the feather icon library.
//!
//! The page markup uses a few icon names the loaded icon set carries
//! under different names; the aliases are rewritten on the rendered
//! `[data-feather]` elements before asking the library to replace them.

use js_sys::{Function, Reflect};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};

static ICON_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("wand", "magic-wand"),
        ("palette", "edit-3"),
        ("color-palette", "edit-3"),
    ])
});

pub fn icon_alias(name: &str) -> Option<&'static str> {
    ICON_ALIASES.get(name).copied()
}

/// Rewrites aliased `data-feather` attributes, then invokes the icon
/// library's `replace()`. Does nothing when the global `feather` object
/// is not on the page.
pub fn remap_feather_icons() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let feather = match Reflect::get(&window, &JsValue::from_str("feather")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return,
    };

    if let Ok(nodes) = document.query_selector_all("[data-feather]") {
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            if let Some(name) = element.get_attribute("data-feather") {
                if let Some(alias) = icon_alias(&name) {
                    let _ = element.set_attribute("data-feather", alias);
                }
            }
        }
    }

    if let Ok(replace) = Reflect::get(&feather, &JsValue::from_str("replace")) {
        if let Ok(function) = replace.dyn_into::<Function>() {
            let _ = function.call0(&feather);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_cover_the_renamed_icons() {
        assert_eq!(icon_alias("wand"), Some("magic-wand"));
        assert_eq!(icon_alias("palette"), Some("edit-3"));
        assert_eq!(icon_alias("color-palette"), Some("edit-3"));
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(icon_alias("download"), None);
        assert_eq!(icon_alias(""), None);
    }
}

use grand_strategy_core::DocumentRoot;
use web_sys::Document;

const DARK_CLASS: &str = "dark";

/// The page's `<html>` element and `<body>`: the `dark` class on one and
/// `overflow` on the other.
pub struct BrowserRoot {
    document: Option<Document>,
    pub dark: bool,
    pub scroll_locked: bool,
}

impl BrowserRoot {
    pub fn from_window() -> Self {
        Self {
            document: web_sys::window().and_then(|window| window.document()),
            dark: false,
            scroll_locked: false,
        }
    }
}

impl DocumentRoot for BrowserRoot {
    fn set_dark_marker(&mut self, dark: bool) {
        self.dark = dark;
        let Some(element) = self.document.as_ref().and_then(Document::document_element) else {
            return;
        };
        if element
            .class_list()
            .toggle_with_force(DARK_CLASS, dark)
            .is_err()
        {
            web_sys::console::warn_1(&"Failed to update dark class".into());
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
        let Some(body) = self.document.as_ref().and_then(Document::body) else {
            return;
        };
        let overflow = if locked { "hidden" } else { "unset" };
        if body.style().set_property("overflow", overflow).is_err() {
            web_sys::console::warn_1(&"Failed to update body overflow".into());
        }
    }
}

/// `?variant=neon` picks the page variant; anything else falls back to classic.
pub fn variant_from_location() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("variant")
}

//! Body class and toggle button backed by page elements.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, HtmlElement};

use crate::util::storage::LocalStorage;
use crate::util::theme::ThemeToggle;
use crate::view::{ClassEdit, THEME_BUTTON_ID, ThemeView};

/// `<body>` class list plus the `#theme-toggle-btn` glyph.
#[derive(Clone, Debug)]
pub struct DomThemeView {
    body: HtmlElement,
    button: Element,
}

impl DomThemeView {
    #[must_use]
    pub fn new(body: HtmlElement, button: Element) -> Self {
        Self { body, button }
    }
}

impl ThemeView for DomThemeView {
    fn set_theme_class(&mut self, light: bool) {
        let classes = self.body.class_list();
        let _ = match ClassEdit::for_theme(light) {
            ClassEdit::Add(class) => classes.add_1(class),
            ClassEdit::Remove(class) => classes.remove_1(class),
        };
    }

    fn set_toggle_glyph(&mut self, glyph: &str) {
        self.button.set_text_content(Some(glyph));
    }
}

/// Apply the stored theme and bind the toggle button's click handler.
///
/// Returns `false` when the page has no toggle button (or no body), in which
/// case nothing is applied.
pub fn mount_theme_toggle() -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let (Some(body), Some(button)) = (document.body(), document.get_element_by_id(THEME_BUTTON_ID)) else {
        return false;
    };

    let view = DomThemeView::new(body, button.clone());
    let toggle = Rc::new(RefCell::new(ThemeToggle::init(LocalStorage::open(), view)));

    let on_click = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        toggle.borrow_mut().toggle();
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(e) = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        log::warn!("theme toggle not bound: {e:?}");
        return false;
    }
    // The handler lives as long as the page.
    on_click.forget();
    true
}

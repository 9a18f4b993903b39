use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn require_element(document: &web::Document, element_id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{element_id}"))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire an `input` listener that hands the handler the element's current
/// value. Works for both `<select>` and `<input>` targets.
pub fn add_value_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move |event: web::Event| {
            if let Some(value) = event_target_value(&event) {
                handler(value);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn event_target_value(event: &web::Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<web::HtmlSelectElement>() {
        return Some(select.value());
    }
    None
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_attr(document: &web::Document, element_id: &str, name: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.set_attribute(name, value);
    }
}

pub fn set_disabled(document: &web::Document, element_id: &str, disabled: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if disabled {
            let _ = el.set_attribute("disabled", "");
        } else {
            let _ = el.remove_attribute("disabled");
        }
    }
}

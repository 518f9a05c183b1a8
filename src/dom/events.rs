// ============================================================================
// EVENT HANDLING
// ============================================================================
// Element listeners are leaked with `forget()`. The DOM node goes away on the
// next full render but the closure stays in WASM memory. Window listeners are
// registered once at start-up.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, MouseEvent};

use crate::dom::input_value;

fn listen<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

/// Fires with the element's current value on every keystroke
pub fn on_input<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let source = element.clone();
    listen(element, "input", move |_: Event| handler(input_value(&source)))
}

/// Fires with the element's value once it is committed
pub fn on_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let source = element.clone();
    listen(element, "change", move |_: Event| handler(input_value(&source)))
}

/// Form submit with the default navigation suppressed
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(form, "submit", move |event: Event| {
        event.prevent_default();
        handler();
    })
}

/// Window-level listener, registered once
pub fn on_window<F>(event_type: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    listen(&window, event_type, move |_: Event| handler())
}

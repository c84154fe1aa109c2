use std::cell::RefCell;
use std::rc::Rc;

use dial_core::DialController;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::INTENSITY_SLIDER_ID;
use crate::dom;
use crate::widget::DialWidget;

pub struct InputWiring {
    pub controller: Rc<RefCell<DialController>>,
    pub widget: Rc<DialWidget>,
}

/// Wire the press/drag/release handlers for the circular dial.
///
/// Press puts the controller into its dragging state and processes the press
/// position immediately; every move while dragging is converted to an angle
/// and applied synchronously. Release anywhere, or the pointer leaving the
/// widget, drops back to idle and moves are ignored again.
pub fn wire_dial_pointer_handlers(w: &InputWiring) {
    // pointerdown
    {
        let controller = w.controller.clone();
        let widget = w.widget.clone();
        // No pointer capture here: capture would retarget boundary events to
        // the dial root and the pointerleave handler below would never fire.
        // The window-level move/up listeners keep the drag alive instead.
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let offset = widget.pointer_offset(ev.client_x() as f32, ev.client_y() as f32);
            {
                let mut ctrl = controller.borrow_mut();
                ctrl.begin_drag();
                ctrl.drag_to(offset);
            }
            widget.refresh(&controller.borrow());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .widget
            .root()
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let controller = w.controller.clone();
        let widget = w.widget.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            // drag_to is a no-op while idle
            let offset = widget.pointer_offset(ev.client_x() as f32, ev.client_y() as f32);
            if controller.borrow_mut().drag_to(offset) {
                widget.refresh(&controller.borrow());
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup
    {
        let controller = w.controller.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            controller.borrow_mut().end_drag();
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerleave on the widget itself
    {
        let controller = w.controller.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            controller.borrow_mut().end_drag();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .widget
            .root()
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire the intensity range input, if the page has one.
///
/// A missing slider is not an error: the dial keeps working, nothing is
/// wired. Non-numeric input is dropped before it reaches the controller.
pub fn wire_intensity_slider(document: &web::Document, w: &InputWiring) {
    let Some(slider) = dom::get_input_element(document, INTENSITY_SLIDER_ID) else {
        log::warn!("missing #{INTENSITY_SLIDER_ID}; intensity control disabled");
        return;
    };

    w.widget.refresh_readout(&w.controller.borrow());

    let controller = w.controller.clone();
    let widget = w.widget.clone();
    let slider_in = slider.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let raw = slider_in.value_as_number();
        if !raw.is_finite() {
            return;
        }
        controller.borrow_mut().set_intensity_raw(raw as i32);
        widget.refresh_readout(&controller.borrow());
    }) as Box<dyn FnMut()>);
    let _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

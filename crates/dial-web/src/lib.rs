#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use dial_core::DialController;
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod mesh;
pub mod render;
pub mod widget;

use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dial-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            window
                .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
                .ok();
        }
        resize_closure.forget();
    }

    let controller = Rc::new(RefCell::new(DialController::new()));

    let widget = widget::DialWidget::resolve(&document)
        .ok_or_else(|| anyhow::anyhow!("missing dial widget elements"))?;
    let widget = Rc::new(widget);

    let wiring = events::InputWiring {
        controller: controller.clone(),
        widget: widget.clone(),
    };
    events::wire_dial_pointer_handlers(&wiring);
    events::wire_intensity_slider(&document, &wiring);

    // First paint before the loop takes over
    widget.refresh(&controller.borrow());
    widget.refresh_readout(&controller.borrow());

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        widget,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

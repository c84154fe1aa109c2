//! Styling of the circular dial widget and the intensity readout.
//!
//! Elements are resolved once at startup; every refresh rewrites the handle's
//! position, rotation and colors from the controller's current state.

use dial_core::DialController;
use web_sys as web;

use crate::constants::{DIAL_ID, HANDLE_ID, INTENSITY_READOUT_ID};
use crate::dom;

pub struct DialWidget {
    root: web::HtmlElement,
    handle: web::HtmlElement,
    readout: Option<web::HtmlElement>,
}

impl DialWidget {
    /// Resolve the widget elements. The readout is optional; the dial track
    /// and handle are not (without them there is nothing to drive).
    pub fn resolve(document: &web::Document) -> Option<Self> {
        let root = dom::get_html_element(document, DIAL_ID)?;
        let handle = dom::get_html_element(document, HANDLE_ID)?;
        let readout = dom::get_html_element(document, INTENSITY_READOUT_ID);
        Some(Self {
            root,
            handle,
            readout,
        })
    }

    pub fn root(&self) -> &web::HtmlElement {
        &self.root
    }

    /// Pointer offset from the track center, in CSS pixels.
    pub fn pointer_offset(&self, client_x: f32, client_y: f32) -> glam::Vec2 {
        let rect = self.root.get_bounding_client_rect();
        let cx = rect.left() as f32 + rect.width() as f32 / 2.0;
        let cy = rect.top() as f32 + rect.height() as f32 / 2.0;
        glam::Vec2::new(client_x - cx, client_y - cy)
    }

    /// Rewrite handle position/rotation and colors from controller state.
    pub fn refresh(&self, controller: &DialController) {
        let placement = controller.handle_placement();
        let band = controller.band();

        let cx = self.root.offset_width() as f32 / 2.0;
        let cy = self.root.offset_height() as f32 / 2.0;
        let half_handle = self.handle.offset_width() as f32 / 2.0;
        let left = cx + placement.offset.x - half_handle;
        let top = cy + placement.offset.y - half_handle;

        dom::set_style(&self.handle, "left", &format!("{left:.1}px"));
        dom::set_style(&self.handle, "top", &format!("{top:.1}px"));
        dom::set_style(
            &self.handle,
            "transform",
            &format!("rotate({:.1}deg)", placement.rotation_deg),
        );
        dom::set_style(&self.handle, "background-color", band.display);
        dom::set_style(
            &self.handle,
            "box-shadow",
            &format!("0 0 12px {}", band.glow),
        );
    }

    /// Update the numeric readout paired with the intensity slider.
    pub fn refresh_readout(&self, controller: &DialController) {
        if let Some(readout) = &self.readout {
            readout.set_text_content(Some(&format!("{:.1}", controller.light().intensity)));
        }
    }
}

use site_core::FrameHandle;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Schedule `callback` for the next frame. `None` when no window is
/// available or the browser refused.
#[inline]
pub fn request_frame<F: ?Sized>(callback: &Closure<F>) -> Option<FrameHandle> {
    web::window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

#[inline]
pub fn cancel_frame(handle: Option<FrameHandle>) {
    if let (Some(h), Some(w)) = (handle, web::window()) {
        _ = w.cancel_animation_frame(h);
    }
}

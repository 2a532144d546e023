//! RAII wrappers around the browser APIs the reveals need.
//!
//! Every guard releases what it registered when dropped, so a component can
//! hold them in its effect and let the effect destructor tear everything down.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};
use yew::NodeRef;

use crate::error::RevealError;
use crate::reveal::SectionGeometry;

pub fn window() -> Result<Window, RevealError> {
    web_sys::window().ok_or(RevealError::NoWindow)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Current geometry of the element behind `node`, or `None` if it is not mounted.
pub fn section_geometry(node: &NodeRef, window: &Window) -> Option<SectionGeometry> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(SectionGeometry::new(
        rect.top(),
        rect.bottom(),
        viewport_height(window),
    ))
}

/// A passive event listener, removed on drop.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    pub fn passive(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, RevealError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| RevealError::registration(event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

/// Reusable `requestAnimationFrame` callback. Any frame still pending when
/// this is dropped is cancelled.
pub struct AnimationFrames {
    window: Window,
    callback: Closure<dyn FnMut()>,
    pending: Rc<Cell<Option<i32>>>,
}

impl AnimationFrames {
    pub fn new(window: &Window, mut on_frame: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let callback = Closure::<dyn FnMut()>::new({
            let pending = pending.clone();
            move || {
                pending.set(None);
                on_frame();
            }
        });
        Self {
            window: window.clone(),
            callback,
            pending,
        }
    }

    pub fn request(&self) -> Result<(), RevealError> {
        let handle = self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .map_err(|e| RevealError::registration("animation frame", e))?;
        self.pending.set(Some(handle));
        Ok(())
    }
}

impl Drop for AnimationFrames {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

/// An `IntersectionObserver` watching one element, disconnected on drop.
///
/// The handler receives the visible ratio of each report and returns
/// `false` to stop observing the element.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverGuard {
    pub fn observe(
        target: &Element,
        threshold: f64,
        mut handler: impl FnMut(f64) -> bool + 'static,
    ) -> Result<Self, RevealError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let ratio = if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    };
                    if !handler(ratio) {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| RevealError::registration("intersection observer", e))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

//! Binds a `Scene` to a canvas: animation-frame loop plus window listeners
//!
//! Everything attached here is detached again by `unmount` (or on drop).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent};

use super::canvas::CanvasSurface;
use super::{viewport_size, window};
use crate::core::{listeners_for, FrameGate, ListenerKind, Scene};
use crate::time::now_millis;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct Listener {
    target: EventTarget,
    kind: ListenerKind,
    callback: Closure<dyn FnMut(Event)>,
}

pub struct Mount<S: Scene + 'static> {
    scene: Rc<RefCell<S>>,
    gate: FrameGate,
    frame_handle: Rc<Cell<Option<i32>>>,
    frame_callback: FrameCallback,
    listeners: Vec<Listener>,
}

impl<S: Scene + 'static> Mount<S> {
    /// Start animating `scene` on `canvas`.
    ///
    /// Returns `Ok(None)` without attaching anything when the canvas has no
    /// 2D context.
    pub fn start(canvas: HtmlCanvasElement, scene: S) -> Result<Option<Self>, JsValue> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<CanvasRenderingContext2d>().ok(),
            _ => None,
        };
        let Some(ctx) = ctx else {
            warn!("Canvas 2D context unavailable, backdrop disabled");
            return Ok(None);
        };

        let scene = Rc::new(RefCell::new(scene));
        sync_canvas_size(&canvas, &mut *scene.borrow_mut())?;

        let mut mount = Self {
            scene,
            gate: FrameGate::new(),
            frame_handle: Rc::new(Cell::new(None)),
            frame_callback: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
        };

        let interactive = mount.scene.borrow().is_interactive();
        for &kind in listeners_for(interactive) {
            mount.attach(kind, &canvas)?;
        }
        mount.start_loop(ctx)?;

        debug!(interactive, listeners = mount.listeners.len(), "Backdrop mounted");
        Ok(Some(mount))
    }

    pub fn scene(&self) -> &Rc<RefCell<S>> {
        &self.scene
    }

    pub fn is_running(&self) -> bool {
        self.gate.is_open()
    }

    fn attach(&mut self, kind: ListenerKind, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let window = window()?;
        let scene = self.scene.clone();

        let (target, callback): (EventTarget, Box<dyn FnMut(Event)>) = match kind {
            ListenerKind::Resize => {
                let canvas = canvas.clone();
                let handler = move |_: Event| {
                    if let Err(e) = sync_canvas_size(&canvas, &mut *scene.borrow_mut()) {
                        warn!(?e, "Failed to resize backdrop canvas");
                    }
                };
                (window.into(), Box::new(handler))
            }
            ListenerKind::MouseMove => {
                let handler = move |e: Event| {
                    if let Some(e) = e.dyn_ref::<MouseEvent>() {
                        scene.borrow_mut().pointer_moved(
                            e.client_x() as f32,
                            e.client_y() as f32,
                            now_millis(),
                        );
                    }
                };
                (window.into(), Box::new(handler))
            }
            ListenerKind::MouseLeave => {
                // The window itself never sees mouseleave; the root element does
                let target: EventTarget = window
                    .document()
                    .and_then(|d| d.document_element())
                    .ok_or_else(|| JsValue::from_str("No document element"))?
                    .into();
                let handler = move |_: Event| scene.borrow_mut().pointer_left();
                (target, Box::new(handler))
            }
            ListenerKind::Click => {
                let handler = move |e: Event| {
                    if let Some(e) = e.dyn_ref::<MouseEvent>() {
                        scene
                            .borrow_mut()
                            .clicked(e.client_x() as f32, e.client_y() as f32);
                    }
                };
                (window.into(), Box::new(handler))
            }
        };

        let callback = Closure::wrap(callback);
        target.add_event_listener_with_callback(kind.event_name(), callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target,
            kind,
            callback,
        });
        Ok(())
    }

    fn start_loop(&mut self, ctx: CanvasRenderingContext2d) -> Result<(), JsValue> {
        let scene = self.scene.clone();
        let gate = self.gate.clone();
        let handle = self.frame_handle.clone();
        let callback = self.frame_callback.clone();

        let on_frame = Closure::wrap(Box::new(move |_timestamp: f64| {
            let mut surface = CanvasSurface::new(&ctx);
            let again = gate.run_frame(&mut *scene.borrow_mut(), now_millis(), &mut surface);
            if !again {
                handle.set(None);
                return;
            }
            let next = match (window(), callback.borrow().as_ref()) {
                (Ok(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
                _ => None,
            };
            handle.set(next);
        }) as Box<dyn FnMut(f64)>);

        let first = window()?.request_animation_frame(on_frame.as_ref().unchecked_ref())?;
        self.frame_handle.set(Some(first));
        *self.frame_callback.borrow_mut() = Some(on_frame);
        Ok(())
    }

    /// Cancel the frame loop and detach every listener. Idempotent.
    pub fn unmount(&mut self) {
        if !self.gate.is_open() && self.listeners.is_empty() {
            return;
        }
        self.gate.close();

        if let (Some(id), Ok(w)) = (self.frame_handle.take(), window()) {
            if let Err(e) = w.cancel_animation_frame(id) {
                warn!(?e, "Failed to cancel animation frame");
            }
        }

        for listener in self.listeners.drain(..) {
            if let Err(e) = listener.target.remove_event_listener_with_callback(
                listener.kind.event_name(),
                listener.callback.as_ref().unchecked_ref(),
            ) {
                warn!(?e, event = listener.kind.event_name(), "Failed to remove listener");
            }
        }

        // Breaks the callback's reference to itself
        self.frame_callback.borrow_mut().take();
        debug!("Backdrop unmounted");
    }
}

impl<S: Scene + 'static> Drop for Mount<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Match canvas pixel size to the viewport and tell the scene
fn sync_canvas_size(canvas: &HtmlCanvasElement, scene: &mut dyn Scene) -> Result<(), JsValue> {
    let (width, height) = viewport_size()?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    scene.resize(width, height);
    Ok(())
}

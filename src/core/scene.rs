//! Scene trait and mount lifecycle helpers shared by all front-ends

use std::cell::Cell;
use std::rc::Rc;

use super::surface::Surface;

/// An animated backdrop driven one frame at a time
pub trait Scene {
    /// Resynchronize to new viewport dimensions
    fn resize(&mut self, width: f32, height: f32);

    /// Advance the simulation by one frame
    fn tick(&mut self, now_ms: f64);

    /// Draw the current state
    fn render(&self, surface: &mut dyn Surface);

    /// Advance then draw
    fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface) {
        self.tick(now_ms);
        self.render(surface);
    }

    fn pointer_moved(&mut self, _x: f32, _y: f32, _now_ms: f64) {}

    fn pointer_left(&mut self) {}

    fn clicked(&mut self, _x: f32, _y: f32) {}

    /// Whether the scene wants pointer listeners at all
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Window event a mounted scene listens to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerKind {
    Resize,
    MouseMove,
    MouseLeave,
    Click,
}

impl ListenerKind {
    /// DOM event name
    pub fn event_name(self) -> &'static str {
        match self {
            ListenerKind::Resize => "resize",
            ListenerKind::MouseMove => "mousemove",
            ListenerKind::MouseLeave => "mouseleave",
            ListenerKind::Click => "click",
        }
    }
}

/// Listeners a mount attaches: resize always, pointer events when interactive
pub fn listeners_for(interactive: bool) -> &'static [ListenerKind] {
    const ALL: &[ListenerKind] = &[
        ListenerKind::Resize,
        ListenerKind::MouseMove,
        ListenerKind::MouseLeave,
        ListenerKind::Click,
    ];
    if interactive {
        ALL
    } else {
        &ALL[..1]
    }
}

/// Cancellation flag shared by a mount and its frame callback
///
/// Once closed, a frame that was already queued does no work and must not
/// reschedule itself.
#[derive(Clone, Debug)]
pub struct FrameGate {
    open: Rc<Cell<bool>>,
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameGate {
    pub fn new() -> Self {
        Self {
            open: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Run one frame of `scene` if the gate is still open.
    /// Returns whether the caller should schedule another frame.
    pub fn run_frame<S: Scene + ?Sized>(
        &self,
        scene: &mut S,
        now_ms: f64,
        surface: &mut dyn Surface,
    ) -> bool {
        if !self.is_open() {
            return false;
        }
        scene.frame(now_ms, surface);
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::DrawList;

    #[derive(Default)]
    struct CountingScene {
        ticks: u32,
    }

    impl Scene for CountingScene {
        fn resize(&mut self, _width: f32, _height: f32) {}

        fn tick(&mut self, _now_ms: f64) {
            self.ticks += 1;
        }

        fn render(&self, surface: &mut dyn Surface) {
            surface.clear(1.0, 1.0);
        }
    }

    #[test]
    fn non_interactive_mounts_only_listen_for_resize() {
        assert_eq!(listeners_for(false), &[ListenerKind::Resize]);
        let names: Vec<_> = listeners_for(true).iter().map(|l| l.event_name()).collect();
        assert_eq!(names, ["resize", "mousemove", "mouseleave", "click"]);
    }

    #[test]
    fn closed_gate_stops_frames() {
        let gate = FrameGate::new();
        let mut scene = CountingScene::default();
        let mut list = DrawList::new();

        assert!(gate.run_frame(&mut scene, 0.0, &mut list));
        assert!(gate.run_frame(&mut scene, 16.0, &mut list));

        // A clone held by the queued callback observes the close
        let queued = gate.clone();
        gate.close();
        assert!(!queued.run_frame(&mut scene, 32.0, &mut list));
        assert_eq!(scene.ticks, 2, "no state mutation after close");
        assert_eq!(list.clears(), 2);
    }
}

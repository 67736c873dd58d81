//! Lifecycle shared by the canvas animations: start on mount, tick on a
//! timer, follow the viewport, stop exactly once on unmount.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::surface::{attach_canvas, PlatformCanvas, ResizeListener, Surface, Viewport};

/// Something drawn frame by frame onto a [`Surface`].
pub trait Animation {
    /// Called once at start and again whenever the viewport changes.
    fn resize(&mut self, viewport: Viewport, surface: &mut dyn Surface);
    /// Paint one frame.
    fn frame(&mut self, surface: &mut dyn Surface);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// An [`Animation`] bound to the surface it owns.
pub struct AnimationLoop<A, S> {
    animation: A,
    surface: S,
    state: LoopState,
}

impl<A: Animation, S: Surface> AnimationLoop<A, S> {
    pub fn start(animation: A, surface: S, viewport: Viewport) -> Self {
        let mut this = Self {
            animation,
            surface,
            state: LoopState::Running,
        };
        this.animation.resize(viewport, &mut this.surface);
        this
    }

    /// Paint one frame. Returns `false` once torn down.
    pub fn tick(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.animation.frame(&mut self.surface);
        true
    }

    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.animation.resize(viewport, &mut self.surface);
        true
    }

    /// Stop the loop. Returns `true` only for the call that stopped it.
    pub fn teardown(&mut self) -> bool {
        let was_running = self.state == LoopState::Running;
        self.state = LoopState::Stopped;
        was_running
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

struct Mounted<A> {
    task: Task,
    resize: Option<ResizeListener>,
    animation: Rc<RefCell<AnimationLoop<A, PlatformCanvas>>>,
}

impl<A: Animation> Mounted<A> {
    fn teardown(self) {
        self.task.cancel();
        drop(self.resize);
        self.animation.borrow_mut().teardown();
    }
}

/// Drive `make()` on the `<canvas id={canvas_id}>` rendered by the caller.
///
/// Nothing runs when the canvas or its 2d context is unavailable.
pub fn use_canvas_animation<A, F>(canvas_id: &'static str, interval: Duration, make: F)
where
    A: Animation + 'static,
    F: FnOnce() -> A + 'static,
{
    let slot = use_hook(|| Rc::new(RefCell::new(None::<Mounted<A>>)));
    let factory = use_hook(|| Rc::new(RefCell::new(Some(make))));

    use_effect({
        let slot = slot.clone();
        move || {
            if slot.borrow().is_some() {
                return;
            }
            let Some(make) = factory.borrow_mut().take() else {
                return;
            };
            let surface = match attach_canvas(canvas_id) {
                Ok(surface) => surface,
                Err(err) => {
                    tracing::debug!(canvas_id, %err, "animation: not starting");
                    return;
                }
            };
            let Some(viewport) = Viewport::current() else {
                tracing::debug!(canvas_id, "animation: no viewport, not starting");
                return;
            };

            let animation = Rc::new(RefCell::new(AnimationLoop::start(make(), surface, viewport)));
            let resize = ResizeListener::attach({
                let animation = animation.clone();
                move |viewport| {
                    animation.borrow_mut().resize(viewport);
                }
            });
            let ticking = animation.clone();
            let task = spawn(async move {
                loop {
                    gloo_timers::future::sleep(interval).await;
                    if !ticking.borrow_mut().tick() {
                        break;
                    }
                }
            });
            tracing::debug!(canvas_id, ?viewport, "animation: started");
            *slot.borrow_mut() = Some(Mounted {
                task,
                resize,
                animation,
            });
        }
    });

    use_drop(move || {
        if let Some(mounted) = slot.borrow_mut().take() {
            mounted.teardown();
            tracing::debug!(canvas_id, "animation: stopped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingSurface;

    #[derive(Default)]
    struct Counter {
        resizes: Vec<Viewport>,
        frames: usize,
    }

    impl Animation for Counter {
        fn resize(&mut self, viewport: Viewport, surface: &mut dyn Surface) {
            surface.set_size(viewport.width, viewport.height);
            self.resizes.push(viewport);
        }

        fn frame(&mut self, surface: &mut dyn Surface) {
            surface.fill_rect(0.0, 0.0, 1.0, 1.0);
            self.frames += 1;
        }
    }

    #[test]
    fn start_sizes_the_surface() {
        let lp = AnimationLoop::start(
            Counter::default(),
            RecordingSurface::new(),
            Viewport::new(640, 480),
        );
        assert_eq!(lp.state(), LoopState::Running);
        assert_eq!(lp.surface().size(), (640, 480));
        assert_eq!(lp.animation().resizes, vec![Viewport::new(640, 480)]);
    }

    #[test]
    fn teardown_stops_ticks_and_resizes() {
        let mut lp = AnimationLoop::start(
            Counter::default(),
            RecordingSurface::new(),
            Viewport::new(10, 10),
        );
        assert!(lp.tick());
        assert!(lp.teardown());
        assert!(!lp.teardown());
        assert!(!lp.tick());
        assert!(!lp.resize(Viewport::new(20, 20)));
        assert_eq!(lp.animation().frames, 1);
        assert_eq!(lp.surface().size(), (10, 10));
        assert_eq!(lp.state(), LoopState::Stopped);
    }
}

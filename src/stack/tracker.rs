use std::{
    cell::{Cell, RefCell, RefMut},
    rc::{Rc, Weak},
};

/// Length of one frame at 60Hz, the rate the smoothing factor is tuned for.
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Distance under which the smoothed position snaps onto its target.
const SETTLE_PX: f64 = 0.5;
/// Minimum movement before the reported direction flips.
const DIRECTION_THRESHOLD: f64 = 1.0;

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Height of one wheel "line" when the browser reports line deltas.
const LINE_PX: f64 = 100.0 / 6.0;
/// Native offsets this close to the smoothed position are echoes of our own
/// writes (browsers round scroll offsets).
const ECHO_PX: f64 = 1.0;

/// Converts a wheel delta to pixels. `mode` is the DOM `deltaMode`:
/// 0 pixels, 1 lines, 2 pages.
pub fn wheel_delta_px(delta: f64, mode: u32, extent: f64) -> f64 {
    let delta = finite_or_zero(delta);
    match mode {
        1 => delta * LINE_PX,
        2 => delta * finite_or_zero(extent),
        _ => delta,
    }
}

/// Layout measurement of the scrolling element (window or container).
pub trait Viewport {
    /// `None` when the scrolling element is not present.
    fn scroll_offset(&self) -> Option<f64>;
    fn extent(&self) -> Option<f64>;
    /// Largest reachable offset, `None` when unknown.
    fn max_offset(&self) -> Option<f64>;
    /// Moves the scrolling element immediately, without native smoothing.
    fn scroll_to(&self, offset: f64);
}

/// Strategy turning raw scroll signals into the offset the stack follows.
pub trait ScrollSource {
    fn current_offset(&self) -> f64;
    fn container_extent(&self) -> f64;
    /// A native scroll event arrived. Returns whether a tick should be
    /// emitted right away.
    fn on_native_scroll(&mut self) -> bool;
    /// Wheel input in pixels. Returns whether the source took it over, in
    /// which case the browser default must be prevented.
    fn on_wheel(&mut self, _delta_px: f64) -> bool {
        false
    }
    /// One display frame passed. Returns whether the offset moved.
    fn on_frame(&mut self, delta_ms: f64) -> bool;
    fn wants_frames(&self) -> bool;
}

/// Follows the viewport offset as the browser reports it.
pub struct NativeSource {
    viewport: Box<dyn Viewport>,
}

impl NativeSource {
    pub fn new(viewport: Box<dyn Viewport>) -> Self {
        Self { viewport }
    }
}

impl ScrollSource for NativeSource {
    fn current_offset(&self) -> f64 {
        finite_or_zero(self.viewport.scroll_offset().unwrap_or(0.0))
    }

    fn container_extent(&self) -> f64 {
        finite_or_zero(self.viewport.extent().unwrap_or(0.0)).max(0.0)
    }

    fn on_native_scroll(&mut self) -> bool {
        true
    }

    fn on_frame(&mut self, _delta_ms: f64) -> bool {
        false
    }

    fn wants_frames(&self) -> bool {
        false
    }
}

/// Owns the scroll position: wheel input moves a target, each frame eases
/// the position toward it and writes it back to the viewport, so the
/// emitted offset is always the one the page is scrolled to.
///
/// Other native scrolling (touch, keyboard, scrollbar, anchors) is adopted
/// as-is.
pub struct SmoothedSource {
    viewport: Box<dyn Viewport>,
    position: f64,
    target: f64,
    lerp: f64,
}

impl SmoothedSource {
    pub fn new(viewport: Box<dyn Viewport>, lerp: f64) -> Self {
        let lerp = if lerp.is_finite() {
            lerp.clamp(0.01, 1.0)
        } else {
            0.12
        };
        let position = finite_or_zero(viewport.scroll_offset().unwrap_or(0.0));
        Self {
            viewport,
            position,
            target: position,
            lerp,
        }
    }

    fn native(&self) -> f64 {
        finite_or_zero(self.viewport.scroll_offset().unwrap_or(0.0))
    }
}

impl ScrollSource for SmoothedSource {
    fn current_offset(&self) -> f64 {
        self.position
    }

    fn container_extent(&self) -> f64 {
        finite_or_zero(self.viewport.extent().unwrap_or(0.0)).max(0.0)
    }

    fn on_native_scroll(&mut self) -> bool {
        let native = self.native();
        if (native - self.position).abs() <= ECHO_PX {
            return false;
        }
        self.position = native;
        self.target = native;
        true
    }

    fn on_wheel(&mut self, delta_px: f64) -> bool {
        if self.viewport.scroll_offset().is_none() {
            return false;
        }
        let max = self
            .viewport
            .max_offset()
            .map(finite_or_zero)
            .unwrap_or(f64::INFINITY)
            .max(0.0);
        self.target = (self.target + finite_or_zero(delta_px)).clamp(0.0, max);
        true
    }

    fn on_frame(&mut self, delta_ms: f64) -> bool {
        let distance = self.target - self.position;
        if distance == 0.0 {
            return false;
        }
        if distance.abs() < SETTLE_PX {
            self.position = self.target;
        } else {
            let frames = if delta_ms.is_finite() && delta_ms > 0.0 {
                delta_ms / FRAME_MS
            } else {
                1.0
            };
            let factor = (1.0 - (1.0 - self.lerp).powf(frames)).clamp(0.0, 1.0);
            self.position += distance * factor;
        }
        self.viewport.scroll_to(self.position);
        true
    }

    fn wants_frames(&self) -> bool {
        true
    }
}

/// Owner of the frame loop and the idle timer driving a tracker.
pub trait Scheduler {
    fn start_frames(&mut self);
    fn stop_frames(&mut self);
    /// (Re)arms the quiet-period timer; it calls back into
    /// [`ScrollTracker::settle`] when it fires.
    fn arm_idle(&mut self, delay_ms: f64);
    fn cancel_idle(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub offset: f64,
    pub extent: f64,
    /// Movement since the previous event.
    pub delta: f64,
    pub direction: ScrollDirection,
    /// Cleared once no scroll input arrived for the quiet period.
    pub active: bool,
}

type Callback = Rc<RefCell<dyn FnMut(&ScrollEvent)>>;

struct Listener {
    live: Rc<Cell<bool>>,
    callback: Callback,
}

struct TrackerState {
    source: Box<dyn ScrollSource>,
    scheduler: Box<dyn Scheduler>,
    listeners: Vec<Listener>,
    last_offset: f64,
    direction: ScrollDirection,
    active: bool,
    idle_delay_ms: f64,
    released: bool,
}

impl TrackerState {
    fn prune(&mut self) {
        self.listeners.retain(|l| l.live.get());
        if self.listeners.is_empty() {
            self.scheduler.stop_frames();
            self.scheduler.cancel_idle();
        }
    }

    fn touch(&mut self) {
        self.active = true;
        let delay = self.idle_delay_ms;
        self.scheduler.cancel_idle();
        self.scheduler.arm_idle(delay);
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.listeners.clear();
        self.scheduler.stop_frames();
        self.scheduler.cancel_idle();
        self.active = false;
    }

    fn next_event(&mut self) -> ScrollEvent {
        let offset = self.source.current_offset();
        let extent = self.source.container_extent();
        let delta = offset - self.last_offset;
        if delta.abs() > DIRECTION_THRESHOLD {
            self.direction = if delta < 0.0 {
                ScrollDirection::Backward
            } else {
                ScrollDirection::Forward
            };
        }
        self.last_offset = offset;
        ScrollEvent {
            offset,
            extent,
            delta,
            direction: self.direction,
            active: self.active,
        }
    }
}

/// Lives outside the `RefCell` so detaching works even mid-dispatch.
#[derive(Default)]
struct Liveness {
    attached: Cell<bool>,
    flags: RefCell<Vec<Rc<Cell<bool>>>>,
}

/// Scroll offset observer shared by the subscribers of one stack.
///
/// Clones share the same state. Everything runs on the UI thread.
#[derive(Clone)]
pub struct ScrollTracker {
    inner: Rc<RefCell<TrackerState>>,
    liveness: Rc<Liveness>,
}

impl ScrollTracker {
    pub fn attach(
        source: Box<dyn ScrollSource>,
        scheduler: Box<dyn Scheduler>,
        idle_delay_ms: f64,
    ) -> Self {
        let last_offset = source.current_offset();
        let liveness = Liveness::default();
        liveness.attached.set(true);
        Self {
            inner: Rc::new(RefCell::new(TrackerState {
                source,
                scheduler,
                listeners: Vec::new(),
                last_offset,
                direction: ScrollDirection::Forward,
                active: false,
                idle_delay_ms: finite_or_zero(idle_delay_ms).max(0.0),
                released: false,
            })),
            liveness: Rc::new(liveness),
        }
    }

    pub fn current_offset(&self) -> f64 {
        self.inner.borrow().source.current_offset()
    }

    pub fn container_extent(&self) -> f64 {
        self.inner.borrow().source.container_extent()
    }

    pub fn direction(&self) -> ScrollDirection {
        self.inner.borrow().direction
    }

    pub fn is_active(&self) -> bool {
        self.inner.borrow().active
    }

    pub fn is_attached(&self) -> bool {
        self.liveness.attached.get()
    }

    /// Borrows the state for input handling. `None` once detached (the
    /// scheduler is released here if detaching couldn't do it) or when no
    /// one is listening.
    fn listening(&self) -> Option<RefMut<'_, TrackerState>> {
        let mut state = self.inner.try_borrow_mut().ok()?;
        if !self.is_attached() {
            state.release();
            return None;
        }
        if state.listeners.is_empty() {
            return None;
        }
        Some(state)
    }

    pub fn subscribe(&self, callback: impl FnMut(&ScrollEvent) + 'static) -> Subscription {
        let live = Rc::new(Cell::new(self.is_attached()));
        if live.get() {
            let mut flags = self.liveness.flags.borrow_mut();
            flags.retain(|f| f.get());
            flags.push(live.clone());

            let mut state = self.inner.borrow_mut();
            state.listeners.push(Listener {
                live: live.clone(),
                callback: Rc::new(RefCell::new(callback)),
            });
            if state.listeners.len() == 1 && state.source.wants_frames() {
                state.scheduler.start_frames();
            }
        }
        Subscription {
            live,
            tracker: Rc::downgrade(&self.inner),
        }
    }

    /// Feeds a native scroll event.
    pub fn handle_scroll(&self) {
        let emit = {
            let Some(mut state) = self.listening() else {
                return;
            };
            state.touch();
            state.source.on_native_scroll()
        };
        if emit {
            self.emit();
        }
    }

    /// Feeds wheel input in pixels. Returns whether the source consumed it;
    /// the caller then suppresses the browser's own scrolling.
    pub fn handle_wheel(&self, delta_px: f64) -> bool {
        let Some(mut state) = self.listening() else {
            return false;
        };
        let consumed = state.source.on_wheel(delta_px);
        if consumed {
            state.touch();
        }
        consumed
    }

    /// Feeds one display frame. A moving frame counts as scroll activity.
    pub fn handle_frame(&self, delta_ms: f64) {
        let moved = {
            let Some(mut state) = self.listening() else {
                return;
            };
            let moved = state.source.on_frame(delta_ms);
            if moved {
                state.touch();
            }
            moved
        };
        if moved {
            self.emit();
        }
    }

    /// Marks scrolling as stopped and emits one last event for it.
    pub fn settle(&self) {
        {
            let Some(mut state) = self.listening() else {
                return;
            };
            if !state.active {
                return;
            }
            state.active = false;
        }
        self.emit();
    }

    /// Emits an event for the current position without any input, e.g.
    /// right after layout or on resize.
    pub fn refresh(&self) {
        self.emit();
    }

    /// Stops every subscription and releases the frame loop and idle timer.
    pub fn detach(&self) {
        if !self.liveness.attached.replace(false) {
            return;
        }
        for live in self.liveness.flags.borrow_mut().drain(..) {
            live.set(false);
        }
        match self.inner.try_borrow_mut() {
            Ok(mut state) => state.release(),
            Err(_) => log::debug!("scroll tracker busy on detach, releasing on next input"),
        }
    }

    fn emit(&self) {
        let (event, listeners) = {
            let Ok(mut state) = self.inner.try_borrow_mut() else {
                return;
            };
            if !self.is_attached() {
                state.release();
                return;
            }
            state.prune();
            if state.listeners.is_empty() {
                return;
            }
            let event = state.next_event();
            let listeners = state
                .listeners
                .iter()
                .map(|l| (l.live.clone(), l.callback.clone()))
                .collect::<Vec<_>>();
            (event, listeners)
        };
        for (live, callback) in listeners {
            // a previous callback may have detached this one
            if !live.get() {
                continue;
            }
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (callback)(&event);
            }
        }
    }
}

/// Handle returned by [`ScrollTracker::subscribe`]. Dropping it detaches
/// the callback as well.
pub struct Subscription {
    live: Rc<Cell<bool>>,
    tracker: Weak<RefCell<TrackerState>>,
}

impl Subscription {
    pub fn detach(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.live.set(false);
        if let Some(inner) = self.tracker.upgrade() {
            if let Ok(mut state) = inner.try_borrow_mut() {
                state.prune();
            }
        }
    }
}

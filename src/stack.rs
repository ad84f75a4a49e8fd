//! Scroll-driven card stacking.
//!
//! A [`ScrollTracker`] turns native scroll events (optionally smoothed per
//! frame) into [`ScrollEvent`]s. A [`StackEngine`] maps each event plus the
//! measured [`StackLayout`] to one [`Transform`] per panel: panels scroll
//! normally, then pin at their stack slot while they shrink toward their
//! target scale, blur by depth beneath the topmost reached panel, and are
//! released once the end of the stack passes.
//!
//! Nothing here touches the DOM. Measurement goes through [`Viewport`],
//! frame loops and timers through [`Scheduler`], and style writes through
//! [`PresentationSink`].

mod config;
mod engine;
mod tracker;
mod transform;

pub use config::{CompletionMode, Length, LengthParseError, PinRelease, StackConfig};
pub use engine::{
    EngineState, PanelGeometry, PanelLayout, PresentationSink, StackEngine, StackLayout,
    TickOutcome,
};
pub use tracker::{
    wheel_delta_px, NativeSource, Scheduler, ScrollDirection, ScrollEvent, ScrollSource,
    ScrollTracker, SmoothedSource, Subscription, Viewport,
};
pub use transform::{Tolerance, Transform, Transition};

/// Picks the scroll source strategy for a mount.
pub fn scroll_source(config: &StackConfig, viewport: Box<dyn Viewport>) -> Box<dyn ScrollSource> {
    if config.smooth_scroll {
        Box::new(SmoothedSource::new(viewport, config.smoothing_lerp))
    } else {
        Box::new(NativeSource::new(viewport))
    }
}

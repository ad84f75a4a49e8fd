use super::{
    config::{CompletionMode, PinRelease, StackConfig},
    tracker::{ScrollDirection, ScrollEvent},
    transform::{Tolerance, Transform, Transition},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    /// Position of the panel's top edge along the scroll axis.
    pub document_offset: f64,
    pub height: f64,
}

/// Measured layout of a stack, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackLayout {
    pub panels: Vec<PanelLayout>,
    /// Offset of the end-of-stack marker. Falls back to the trailing edge
    /// of the last panel.
    pub end_offset: Option<f64>,
}

impl StackLayout {
    pub fn new(panels: Vec<PanelLayout>, end_offset: Option<f64>) -> Self {
        Self { panels, end_offset }
    }

    pub fn end(&self) -> f64 {
        self.end_offset
            .filter(|o| o.is_finite())
            .or_else(|| {
                self.panels
                    .last()
                    .map(|p| finite(p.document_offset) + finite(p.height))
            })
            .unwrap_or(0.0)
    }
}

/// Receives transforms that changed enough to be worth applying.
pub trait PresentationSink {
    fn apply(&mut self, index: usize, transform: &Transform, transition: Transition);
}

/// Scroll offsets at which a panel changes behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub trigger_start: f64,
    pub trigger_end: f64,
    pub pin_start: f64,
    pub pin_end: f64,
}

impl PanelGeometry {
    pub fn is_pinned(&self, offset: f64) -> bool {
        offset >= self.pin_start && offset <= self.pin_end
    }

    fn scale_progress(&self, offset: f64) -> f64 {
        if offset < self.trigger_start {
            0.0
        } else if offset > self.trigger_end {
            1.0
        } else if self.trigger_end == self.trigger_start {
            1.0
        } else {
            ((offset - self.trigger_start) / (self.trigger_end - self.trigger_start))
                .clamp(0.0, 1.0)
        }
    }

    fn translate_y(&self, offset: f64) -> f64 {
        if offset < self.pin_start {
            0.0
        } else if offset <= self.pin_end {
            offset - self.pin_start
        } else {
            self.pin_end - self.pin_start
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineState {
    pub last_scroll_offset: f64,
    pub scroll_direction: ScrollDirection,
    pub is_actively_scrolling: bool,
    pub stack_completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Number of panels whose transform was handed to the sink.
    pub applied: usize,
    /// The last panel just entered its pin window.
    pub completed: bool,
}

fn finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

pub struct StackEngine {
    config: StackConfig,
    tolerance: Tolerance,
    state: EngineState,
    applied: Vec<Option<Transform>>,
}

impl StackEngine {
    pub fn new(config: StackConfig) -> Self {
        Self {
            config,
            tolerance: Tolerance::FINE,
            state: EngineState::default(),
            applied: Vec::new(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Scroll boundaries of every panel for the given viewport extent.
    pub fn geometry(&self, extent: f64, layout: &StackLayout) -> Vec<PanelGeometry> {
        let Some(last) = layout.panels.last() else {
            return Vec::new();
        };
        let extent = finite(extent).max(0.0);
        let stack_px = finite(self.config.stack_position.resolve(extent));
        let scale_end_px = finite(self.config.scale_end_position.resolve(extent));
        let stack_distance = finite(self.config.item_stack_distance);
        let last_index = (layout.panels.len() - 1) as f64;

        let end = layout.end();
        let release = match self.config.pin_release {
            PinRelease::HalfViewport => end - extent / 2.0,
            PinRelease::KeepLastVisible => {
                end - (stack_px + stack_distance * last_index + finite(last.height))
            }
        };

        layout
            .panels
            .iter()
            .enumerate()
            .map(|(i, panel)| {
                let top = finite(panel.document_offset);
                let trigger_start = top - stack_px - stack_distance * i as f64;
                let trigger_end = top - scale_end_px;
                PanelGeometry {
                    trigger_start,
                    trigger_end,
                    pin_start: trigger_start,
                    // a panel that would be released before it pins stays in flow
                    pin_end: release.max(trigger_start),
                }
            })
            .collect()
    }

    /// Transforms for every panel at `offset`. Pure: identical inputs give
    /// identical outputs.
    pub fn recompute(&self, offset: f64, extent: f64, layout: &StackLayout) -> Vec<Transform> {
        let offset = finite(offset);
        let geometry = self.geometry(extent, layout);
        let config = &self.config;

        let top_index = geometry
            .iter()
            .rposition(|g| offset >= g.trigger_start)
            .unwrap_or(0);
        let max_blur = finite(config.max_blur).max(0.0);

        geometry
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let depth = i as f64;
                let progress = g.scale_progress(offset);
                let target_scale = config.base_scale + depth * config.item_scale;
                let scale = target_scale.max((1.0 - progress * (1.0 - target_scale)).min(1.0));
                let rotation = if config.rotation_amount != 0.0 {
                    config.rotation_amount * depth * progress
                } else {
                    0.0
                };
                let blur = if config.blur_amount != 0.0 && i < top_index {
                    ((top_index - i) as f64 * config.blur_amount)
                        .max(0.0)
                        .min(max_blur)
                } else {
                    0.0
                };
                Transform {
                    translate_y: g.translate_y(offset),
                    scale,
                    rotation,
                    blur,
                }
                .rounded()
            })
            .collect()
    }

    /// Runs one tick: recomputes, hands changed transforms to `sink` and
    /// tracks the completion latch.
    pub fn tick(
        &mut self,
        event: &ScrollEvent,
        layout: &StackLayout,
        sink: &mut impl PresentationSink,
    ) -> TickOutcome {
        let offset = finite(event.offset);
        self.state.last_scroll_offset = offset;
        self.state.scroll_direction = event.direction;
        self.state.is_actively_scrolling = event.active;

        if layout.panels.is_empty() {
            return TickOutcome::default();
        }
        if self.applied.len() != layout.panels.len() {
            self.applied = vec![None; layout.panels.len()];
        }

        let transition = self.transition_for(event);
        let transforms = self.recompute(offset, event.extent, layout);
        let mut applied = 0;
        for (i, transform) in transforms.iter().enumerate() {
            let changed = match &self.applied[i] {
                Some(prev) => transform.differs_from(prev, &self.tolerance),
                None => true,
            };
            if changed {
                sink.apply(i, transform, transition);
                self.applied[i] = Some(*transform);
                applied += 1;
            }
        }

        let last = self.geometry(event.extent, layout).last().copied();
        let completed = last.is_some_and(|last| self.update_completion(last.is_pinned(offset)));

        TickOutcome { applied, completed }
    }

    fn transition_for(&self, event: &ScrollEvent) -> Transition {
        if event.active && finite(event.delta).abs() > self.config.snap_velocity {
            Transition::Snap
        } else {
            match event.direction {
                ScrollDirection::Forward => Transition::EaseForward,
                ScrollDirection::Backward => Transition::EaseBackward,
            }
        }
    }

    fn update_completion(&mut self, in_view: bool) -> bool {
        if in_view && !self.state.stack_completed {
            self.state.stack_completed = true;
            return true;
        }
        if !in_view && self.state.stack_completed && self.config.completion == CompletionMode::Rearm
        {
            self.state.stack_completed = false;
        }
        false
    }

    /// Forgets everything derived from the current mount.
    pub fn detach(&mut self) {
        self.state = EngineState::default();
        self.applied.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::config::Length;

    #[derive(Default)]
    struct RecordingSink {
        applied: Vec<(usize, Transform, Transition)>,
    }

    impl PresentationSink for RecordingSink {
        fn apply(&mut self, index: usize, transform: &Transform, transition: Transition) {
            self.applied.push((index, *transform, transition));
        }
    }

    fn event(offset: f64, extent: f64) -> ScrollEvent {
        ScrollEvent {
            offset,
            extent,
            delta: 0.0,
            direction: ScrollDirection::Forward,
            active: false,
        }
    }

    /// Panels laid out the way the stack renders them: fixed height and
    /// `item_distance` between consecutive panels.
    fn layout(count: usize, first: f64, height: f64, gap: f64) -> StackLayout {
        let panels = (0..count)
            .map(|i| PanelLayout {
                document_offset: first + i as f64 * (height + gap),
                height,
            })
            .collect::<Vec<_>>();
        let end = panels
            .last()
            .map(|p| p.document_offset + p.height + 200.0);
        StackLayout::new(panels, end)
    }

    fn worked_example_engine() -> StackEngine {
        StackEngine::new(StackConfig {
            stack_position: Length::Pixels(100.0),
            scale_end_position: Length::Pixels(50.0),
            item_stack_distance: 50.0,
            ..StackConfig::default()
        })
    }

    #[test]
    fn test_pin_window_worked_example() {
        let engine = worked_example_engine();
        let layout = StackLayout::new(
            vec![
                PanelLayout {
                    document_offset: 200.0,
                    height: 300.0,
                },
                PanelLayout {
                    document_offset: 600.0,
                    height: 300.0,
                },
                PanelLayout {
                    document_offset: 1000.0,
                    height: 300.0,
                },
            ],
            Some(5000.0),
        );
        let geometry = engine.geometry(800.0, &layout);
        assert_eq!(geometry[2].pin_start, 800.0);
        assert_eq!(geometry[2].pin_end, 4600.0);

        assert_eq!(engine.recompute(800.0, 800.0, &layout)[2].translate_y, 0.0);
        assert_eq!(engine.recompute(900.0, 800.0, &layout)[2].translate_y, 100.0);
        assert_eq!(engine.recompute(700.0, 800.0, &layout)[2].translate_y, 0.0);
        // frozen after the pin window
        assert_eq!(
            engine.recompute(6000.0, 800.0, &layout)[2].translate_y,
            4600.0 - 800.0
        );
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let engine = StackEngine::new(StackConfig {
            rotation_amount: 2.5,
            ..StackConfig::default()
        });
        let layout = layout(5, 400.0, 550.0, 120.0);
        for offset in [0.0, 123.45, 999.99, 2500.0, 4321.0] {
            let a = engine.recompute(offset, 777.0, &layout);
            let b = engine.recompute(offset, 777.0, &layout);
            assert_eq!(a, b);
            for (x, y) in a.iter().zip(b.iter()) {
                assert_eq!(x.css_transform(), y.css_transform());
            }
        }
    }

    #[test]
    fn test_scale_monotonic_in_stacking_zone_and_constant_outside() {
        let engine = StackEngine::new(StackConfig::default());
        let layout = layout(4, 300.0, 500.0, 120.0);
        let extent = 800.0;
        let geometry = engine.geometry(extent, &layout);

        for (i, g) in geometry.iter().enumerate() {
            let target = 0.88 + i as f64 * 0.04;
            let at = |offset: f64| engine.recompute(offset, extent, &layout)[i].scale;

            assert_eq!(at(g.trigger_start - 200.0), 1.0);
            assert_eq!(at(g.trigger_start - 1.0), 1.0);
            assert_eq!(at(g.trigger_end + 1.0), at(g.trigger_end + 500.0));

            let mut prev = at(g.trigger_start);
            let steps = 50;
            for s in 1..=steps {
                let offset =
                    g.trigger_start + (g.trigger_end - g.trigger_start) * s as f64 / steps as f64;
                let scale = at(offset);
                assert!(scale <= prev, "panel {i} grew at {offset}");
                assert!(scale >= target - 1e-9);
                prev = scale;
            }
        }
    }

    #[test]
    fn test_scale_never_below_target() {
        let engine = StackEngine::new(StackConfig {
            base_scale: 0.7,
            item_scale: 0.1,
            ..StackConfig::default()
        });
        let layout = layout(6, 0.0, 400.0, 120.0);
        for step in 0..100 {
            let offset = step as f64 * 60.0;
            for (i, t) in engine.recompute(offset, 900.0, &layout).iter().enumerate() {
                let target = 0.7 + i as f64 * 0.1;
                assert!(t.scale >= target - 1e-9, "panel {i} at {offset}");
            }
        }
    }

    #[test]
    fn test_blur_grows_with_depth_and_is_capped() {
        let engine = StackEngine::new(StackConfig {
            blur_amount: 3.0,
            max_blur: 7.0,
            ..StackConfig::default()
        });
        let layout = layout(5, 200.0, 400.0, 120.0);
        let geometry = engine.geometry(800.0, &layout);
        // every panel reached, panel 4 on top
        let offset = geometry[4].trigger_start + 10.0;
        let t = engine.recompute(offset, 800.0, &layout);

        assert_eq!(t[4].blur, 0.0);
        assert_eq!(t[3].blur, 3.0);
        assert_eq!(t[2].blur, 6.0);
        assert_eq!(t[1].blur, 7.0);
        assert_eq!(t[0].blur, 7.0);
        for pair in t.windows(2) {
            assert!(pair[0].blur >= pair[1].blur);
        }

        // only panel 1 reached: panel 0 is one level deep, the rest are clear
        let offset = geometry[1].trigger_start;
        let t = engine.recompute(offset, 800.0, &layout);
        assert_eq!(t[0].blur, 3.0);
        assert!(t[1..].iter().all(|t| t.blur == 0.0));
    }

    #[test]
    fn test_zero_blur_amount_disables_blur() {
        let engine = StackEngine::new(StackConfig {
            blur_amount: 0.0,
            ..StackConfig::default()
        });
        let layout = layout(4, 200.0, 400.0, 120.0);
        let t = engine.recompute(10_000.0, 800.0, &layout);
        assert!(t.iter().all(|t| t.blur == 0.0));
    }

    #[test]
    fn test_rotation_follows_progress() {
        let engine = StackEngine::new(StackConfig {
            rotation_amount: 2.0,
            ..StackConfig::default()
        });
        let layout = layout(3, 200.0, 400.0, 120.0);
        let geometry = engine.geometry(800.0, &layout);
        let done = engine.recompute(geometry[2].trigger_end + 1.0, 800.0, &layout);
        assert_eq!(done[0].rotation, 0.0);
        assert_eq!(done[2].rotation, 4.0);
        let before = engine.recompute(0.0, 800.0, &layout);
        assert!(before.iter().all(|t| t.rotation == 0.0));
    }

    #[test]
    fn test_degenerate_trigger_range_is_total() {
        // scale end equal to the stack position collapses panel 0's zone
        let engine = StackEngine::new(StackConfig {
            stack_position: Length::Pixels(100.0),
            scale_end_position: Length::Pixels(100.0),
            ..StackConfig::default()
        });
        let layout = layout(2, 500.0, 300.0, 120.0);
        let g = engine.geometry(800.0, &layout);
        assert_eq!(g[0].trigger_start, g[0].trigger_end);

        assert_eq!(engine.recompute(399.0, 800.0, &layout)[0].scale, 1.0);
        assert_eq!(engine.recompute(400.0, 800.0, &layout)[0].scale, 0.88);
        assert_eq!(engine.recompute(401.0, 800.0, &layout)[0].scale, 0.88);
    }

    #[test]
    fn test_empty_and_non_finite_inputs() {
        let engine = StackEngine::new(StackConfig::default());
        assert!(engine.recompute(100.0, 800.0, &StackLayout::default()).is_empty());

        let layout = layout(3, 200.0, 400.0, 120.0);
        for offset in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let t = engine.recompute(offset, f64::NAN, &layout);
            assert_eq!(t.len(), 3);
            assert!(t
                .iter()
                .all(|t| t.translate_y.is_finite() && t.scale.is_finite() && t.blur.is_finite()));
        }

        let mut engine = engine;
        let mut sink = RecordingSink::default();
        let outcome = engine.tick(&event(100.0, 800.0), &StackLayout::default(), &mut sink);
        assert_eq!(outcome, TickOutcome::default());
        assert!(sink.applied.is_empty());
    }

    #[test]
    fn test_four_panel_sweep() {
        let mut engine = StackEngine::new(StackConfig::default());
        let layout = layout(4, 400.0, 600.0, 120.0);
        let mut sink = RecordingSink::default();
        let mut offset = 0.0;
        let mut prev = 0.0;
        while offset <= 5000.0 {
            let e = ScrollEvent {
                offset,
                extent: 800.0,
                delta: offset - prev,
                direction: ScrollDirection::Forward,
                active: true,
            };
            engine.tick(&e, &layout, &mut sink);
            for t in engine.recompute(offset, 800.0, &layout) {
                for v in [t.translate_y, t.scale, t.rotation, t.blur] {
                    assert!(v.is_finite());
                }
                assert!(t.scale == 1.0 || (0.88..=1.0).contains(&t.scale));
                assert!(t.blur >= 0.0 && t.blur <= 10.0);
            }
            prev = offset;
            offset += 100.0;
        }
        assert!(!sink.applied.is_empty());
    }

    #[test]
    fn test_tick_suppresses_small_changes() {
        let mut engine = StackEngine::new(StackConfig::default());
        let layout = layout(3, 400.0, 500.0, 120.0);
        let mut sink = RecordingSink::default();

        let first = engine.tick(&event(0.0, 800.0), &layout, &mut sink);
        assert_eq!(first.applied, 3);

        // nothing moved
        let again = engine.tick(&event(0.0, 800.0), &layout, &mut sink);
        assert_eq!(again.applied, 0);

        // panel 0 is pinned from offset 200: a 0.05px step is under tolerance
        engine.tick(&event(300.0, 800.0), &layout, &mut sink);
        let count = sink.applied.len();
        let tiny = engine.tick(&event(300.05, 800.0), &layout, &mut sink);
        assert_eq!(tiny.applied, 0);
        assert_eq!(sink.applied.len(), count);

        // the coarse tolerance also swallows a half pixel
        let mut coarse = StackEngine::new(StackConfig::default()).with_tolerance(Tolerance::COARSE);
        let mut sink = RecordingSink::default();
        coarse.tick(&event(300.0, 800.0), &layout, &mut sink);
        let fine_step = coarse.tick(&event(300.5, 800.0), &layout, &mut sink);
        assert_eq!(fine_step.applied, 0);
    }

    #[test]
    fn test_transition_choice() {
        let mut engine = StackEngine::new(StackConfig::default());
        let layout = layout(2, 400.0, 500.0, 120.0);
        let mut sink = RecordingSink::default();

        let fast = ScrollEvent {
            offset: 300.0,
            extent: 800.0,
            delta: 120.0,
            direction: ScrollDirection::Forward,
            active: true,
        };
        engine.tick(&fast, &layout, &mut sink);
        assert!(sink.applied.iter().all(|(_, _, t)| *t == Transition::Snap));
        assert!(engine.state().is_actively_scrolling);

        let slow_back = ScrollEvent {
            offset: 280.0,
            delta: -20.0,
            direction: ScrollDirection::Backward,
            ..fast
        };
        sink.applied.clear();
        engine.tick(&slow_back, &layout, &mut sink);
        assert!(!sink.applied.is_empty());
        assert!(sink
            .applied
            .iter()
            .all(|(_, _, t)| *t == Transition::EaseBackward));
        assert_eq!(engine.state().scroll_direction, ScrollDirection::Backward);
        assert_eq!(engine.state().last_scroll_offset, 280.0);

        // a fast delta after scrolling stopped still eases
        let settled = ScrollEvent {
            offset: 600.0,
            delta: 320.0,
            direction: ScrollDirection::Forward,
            active: false,
            ..fast
        };
        sink.applied.clear();
        engine.tick(&settled, &layout, &mut sink);
        assert!(sink
            .applied
            .iter()
            .all(|(_, _, t)| *t == Transition::EaseForward));
    }

    #[test]
    fn test_completion_fires_once_per_entry() {
        let mut engine = worked_example_engine();
        let layout = StackLayout::new(
            vec![
                PanelLayout {
                    document_offset: 200.0,
                    height: 300.0,
                },
                PanelLayout {
                    document_offset: 1000.0,
                    height: 300.0,
                },
            ],
            Some(3000.0),
        );
        // last panel pins between 850 and 2600
        let mut sink = RecordingSink::default();
        let mut fired = Vec::new();
        for offset in [
            0.0, 500.0, 900.0, 1200.0, 2000.0, 2700.0, 3000.0, 1500.0, 1600.0, 600.0, 900.0,
        ] {
            if engine.tick(&event(offset, 800.0), &layout, &mut sink).completed {
                fired.push(offset);
            }
        }
        assert_eq!(fired, vec![900.0, 1500.0, 900.0]);
    }

    #[test]
    fn test_completion_once_mode() {
        let mut engine = StackEngine::new(StackConfig {
            completion: CompletionMode::Once,
            ..StackConfig::default()
        });
        let layout = layout(2, 400.0, 500.0, 120.0);
        let g = engine.geometry(800.0, &layout);
        let inside = g[1].pin_start + 1.0;
        let mut sink = RecordingSink::default();

        assert!(engine.tick(&event(inside, 800.0), &layout, &mut sink).completed);
        assert!(!engine.tick(&event(0.0, 800.0), &layout, &mut sink).completed);
        assert!(!engine.tick(&event(inside, 800.0), &layout, &mut sink).completed);

        // a fresh mount re-arms it
        engine.detach();
        assert!(!engine.state().stack_completed);
        assert!(engine.tick(&event(inside, 800.0), &layout, &mut sink).completed);
    }

    #[test]
    fn test_keep_last_visible_release() {
        let layout = StackLayout::new(
            vec![
                PanelLayout {
                    document_offset: 200.0,
                    height: 400.0,
                },
                PanelLayout {
                    document_offset: 720.0,
                    height: 400.0,
                },
            ],
            Some(1400.0),
        );
        let half = StackEngine::new(StackConfig::default());
        let keep = StackEngine::new(StackConfig {
            pin_release: PinRelease::KeepLastVisible,
            ..StackConfig::default()
        });
        // stack slot of the last panel: 200 + 50, bottom edge at 650
        assert_eq!(keep.geometry(800.0, &layout)[1].pin_end, 1400.0 - 650.0);
        assert_eq!(half.geometry(800.0, &layout)[1].pin_end, 1000.0);

        let g = keep.geometry(800.0, &layout)[1];
        let t = keep.recompute(g.pin_end + 300.0, 800.0, &layout)[1];
        assert_eq!(t.translate_y, g.pin_end - g.pin_start);
    }

    #[test]
    fn test_missing_end_marker_uses_last_panel() {
        let layout = StackLayout::new(
            vec![PanelLayout {
                document_offset: 1000.0,
                height: 500.0,
            }],
            None,
        );
        assert_eq!(layout.end(), 1500.0);
        let engine = StackEngine::new(StackConfig::default());
        let g = engine.geometry(800.0, &layout)[0];
        assert_eq!(g.pin_start, 800.0);
        assert_eq!(g.pin_end, 1100.0);
    }

    #[test]
    fn test_release_before_pin_keeps_panel_in_flow() {
        let engine = StackEngine::new(StackConfig::default());
        let layout = StackLayout::new(
            vec![PanelLayout {
                document_offset: 2000.0,
                height: 300.0,
            }],
            Some(500.0),
        );
        let g = engine.geometry(800.0, &layout)[0];
        assert_eq!(g.pin_end, g.pin_start);
        for offset in [0.0, 1000.0, 1800.0, 2500.0] {
            assert_eq!(engine.recompute(offset, 800.0, &layout)[0].translate_y, 0.0);
        }
    }
}

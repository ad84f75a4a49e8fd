use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_raf_fn_with_options,
    use_timeout_fn, use_window, UseEventListenerOptions, UseRafFnCallbackArgs, UseRafFnOptions,
    UseTimeoutFnReturn,
};
use web_sys::{HtmlElement, WheelEvent};

use crate::stack::{
    scroll_source, wheel_delta_px, ScrollEvent, ScrollTracker, StackConfig, StackEngine,
    StackLayout, Subscription, Tolerance, Viewport,
};

use super::dom::{self, BrowserScheduler, ContainerViewport, StyleSink, WindowViewport};

/// Everything a mounted stack owns besides the tracker.
struct Mounted {
    root: HtmlElement,
    engine: StackEngine,
    layout: StackLayout,
    sink: StyleSink,
}

impl Mounted {
    fn tick(&mut self, event: &ScrollEvent) -> bool {
        let outcome = self.engine.tick(event, &self.layout, &mut self.sink);
        outcome.completed
    }

    fn remeasure(&mut self) {
        let cards = dom::cards(&self.root);
        let window_scroll = self.engine.config().use_external_scroll_source;
        self.layout = dom::measure(&self.root, &cards, window_scroll);
    }
}

#[component]
pub fn ScrollStack(
    #[prop(optional)] config: StackConfig,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_stack_complete: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let root_ref = NodeRef::<html::Div>::new();
    let window_scroll = config.use_external_scroll_source;

    let tracker = StoredValue::new_local(None::<ScrollTracker>);
    let subscription = StoredValue::new_local(None::<Subscription>);
    let mounted = StoredValue::new_local(None::<Mounted>);

    let frames = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            if let Some(tracker) = tracker.try_get_value().flatten() {
                tracker.handle_frame(args.delta);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    let idle_delay = RwSignal::new(config.idle_delay_ms);
    let UseTimeoutFnReturn {
        start: start_idle,
        stop: stop_idle,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            mounted.try_update_value(|m| {
                if let Some(m) = m {
                    m.remeasure();
                }
            });
            if let Some(tracker) = tracker.try_get_value().flatten() {
                tracker.settle();
            }
        },
        idle_delay,
    );

    let on_scroll = move || {
        if let Some(tracker) = tracker.try_get_value().flatten() {
            tracker.handle_scroll();
        }
    };
    // Wheel input is eased by the smoothed source, which then scrolls the
    // page itself. Ctrl+wheel is browser zoom and stays native.
    let on_wheel = move |e: WheelEvent| {
        if e.ctrl_key() {
            return;
        }
        let Some(tracker) = tracker.try_get_value().flatten() else {
            return;
        };
        let delta = wheel_delta_px(e.delta_y(), e.delta_mode(), tracker.container_extent());
        if tracker.handle_wheel(delta) {
            e.prevent_default();
        }
    };
    let wheel_options = UseEventListenerOptions::default().passive(false);
    if window_scroll {
        let _ = use_event_listener(use_window(), ev::scroll, move |_| on_scroll());
        let _ = use_event_listener_with_options(use_window(), ev::wheel, on_wheel, wheel_options);
    } else {
        let _ = use_event_listener(root_ref, ev::scroll, move |_| on_scroll());
        let _ = use_event_listener_with_options(root_ref, ev::wheel, on_wheel, wheel_options);
    }
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        mounted.try_update_value(|m| {
            if let Some(m) = m {
                m.remeasure();
            }
        });
        if let Some(tracker) = tracker.try_get_value().flatten() {
            tracker.refresh();
        }
    });

    Effect::new(move |_| {
        let Some(root) = root_ref.get() else {
            return;
        };
        if tracker.with_value(|t| t.as_ref().is_some_and(ScrollTracker::is_attached)) {
            return;
        }
        let root: HtmlElement = (*root).clone();

        let cards = dom::cards(&root);
        dom::prepare_cards(&cards, config.item_distance);
        let layout = dom::measure(&root, &cards, window_scroll);
        log::debug!(
            "attaching scroll stack: {} cards, window scroll {window_scroll}",
            cards.len()
        );

        let viewport: Box<dyn Viewport> = if window_scroll {
            Box::new(WindowViewport)
        } else {
            Box::new(ContainerViewport(Some(root.clone())))
        };
        let scheduler = BrowserScheduler {
            start_frames: Box::new(frames.resume.clone()),
            stop_frames: Box::new(frames.pause.clone()),
            arm_idle: Box::new({
                let start_idle = start_idle.clone();
                move |delay_ms| {
                    if idle_delay.get_untracked() != delay_ms {
                        idle_delay.set(delay_ms);
                    }
                    start_idle(());
                }
            }),
            cancel_idle: Box::new(stop_idle.clone()),
        };
        let engine = StackEngine::new(config.clone())
            .with_tolerance(Tolerance::for_pointer(dom::coarse_pointer()));
        mounted.set_value(Some(Mounted {
            root,
            engine,
            layout,
            sink: StyleSink::new(cards),
        }));

        let new_tracker = ScrollTracker::attach(
            scroll_source(&config, viewport),
            Box::new(scheduler),
            config.idle_delay_ms,
        );
        let sub = new_tracker.subscribe(move |event| {
            let completed = mounted
                .try_update_value(|m| m.as_mut().map(|m| m.tick(event)))
                .flatten()
                .unwrap_or(false);
            if completed {
                if let Some(on_stack_complete) = on_stack_complete {
                    on_stack_complete.run(());
                }
            }
        });
        new_tracker.refresh();
        subscription.set_value(Some(sub));
        tracker.set_value(Some(new_tracker));
    });

    on_cleanup(move || {
        if let Some(tracker) = tracker.try_get_value().flatten() {
            tracker.detach();
        }
        subscription.try_update_value(|s| *s = None);
        mounted.try_update_value(|m| {
            if let Some(m) = m {
                m.engine.detach();
            }
        });
    });

    let style = if window_scroll {
        "overscroll-behavior: contain; height: auto;"
    } else {
        "overscroll-behavior: contain; height: 100%; overflow-y: auto; -webkit-overflow-scrolling: touch;"
    };

    view! {
        <div
            node_ref=root_ref
            class=format!("scroll-stack-container relative w-full overflow-x-visible {class}")
            style=style
        >
            <div class="scroll-stack-inner pt-[5vh] md:pt-[10vh] px-4 md:px-8 lg:px-20 pb-[20vh] min-h-[300vh]">
                {children()}
                <div class=format!("{} w-full h-px", dom::END_CLASS) />
            </div>
        </div>
    }
}

#[component]
pub fn ScrollStackItem(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "{} relative w-full h-auto min-h-[20rem] md:min-h-[25rem] my-4 md:my-8 p-6 md:p-12 rounded-[20px] md:rounded-[40px] shadow-[0_0_30px_rgba(0,0,0,0.1)] box-border origin-top {class}",
            dom::CARD_CLASS,
        )>{children()}</div>
    }
}

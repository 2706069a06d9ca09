//! Yew hooks binding the motion state machines to the browser.
//!
//! Every hook owns its listeners, frames, observers and timers through RAII
//! handles that its effect destructor drops, so unmounting never leaves a
//! callback behind on a detached node.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::active_section::{ActiveSectionTracker, ChapterBand};
use super::capabilities::{BrowserProbe, MotionCapabilities};
use super::dom;
use super::frame::FrameLoop;
use super::most_visible::{
    is_desktop_width, DemoSection, DemoTarget, MostVisibleTracker, OBSERVER_THRESHOLDS,
};
use super::observer::Observer;
use super::parallax::ParallaxController;
use super::reveal::{
    RevealEvent, RevealLatch, RevealOutcome, REVEAL_FALLBACK_MS, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD,
};
use super::scrub::{ListenerChange, ScrubController, ScrubFrame};

const SCRUB_ROOT_MARGIN: &str = "200px 0px 200px 0px";

/// DOM id of a product section on the showcase page.
pub fn product_anchor(product_id: &str) -> String {
    format!("product-{}", product_id)
}

/// Probes the environment once, when the calling component mounts.
#[hook]
pub fn use_motion_capabilities() -> MotionCapabilities {
    let capabilities = use_state(|| MotionCapabilities::detect(&BrowserProbe));
    *capabilities
}

fn scroll_listeners(frames: &Rc<FrameLoop>, events: &[&'static str]) -> Vec<EventListener> {
    let Some(window) = web_sys::window() else {
        log::warn!("no window, scroll listeners not installed");
        return Vec::new();
    };
    events
        .iter()
        .map(|event| {
            let frames = Rc::clone(frames);
            EventListener::new(&window, *event, move |_| frames.poke())
        })
        .collect()
}

struct RevealWiring {
    latch: RevealLatch,
    observer: Option<Observer>,
    fallback: Option<Timeout>,
}

impl RevealWiring {
    fn settle(&mut self, event: RevealEvent) -> bool {
        if self.latch.handle(event) != RevealOutcome::Revealed {
            return false;
        }
        if let Some(observer) = self.observer.as_ref() {
            observer.disconnect();
        }
        true
    }
}

/// One-shot reveal of `node`. Returns whether the content should be shown.
#[hook]
pub fn use_reveal(node: NodeRef, capabilities: MotionCapabilities) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, capabilities): &(NodeRef, MotionCapabilities)| {
                let wiring = Rc::new(RefCell::new(RevealWiring {
                    latch: RevealLatch::default(),
                    observer: None,
                    fallback: None,
                }));

                let immediate = if !capabilities.motion_enabled() {
                    Some(RevealEvent::MotionDisabled)
                } else if !capabilities.can_observe_intersections() {
                    Some(RevealEvent::ObserverUnavailable)
                } else {
                    None
                };

                match (immediate, node.cast::<Element>()) {
                    (Some(event), _) => {
                        wiring.borrow_mut().settle(event);
                        visible.set(true);
                    }
                    (None, None) => {
                        log::warn!("reveal target not mounted, showing content");
                        wiring.borrow_mut().settle(RevealEvent::ObserverUnavailable);
                        visible.set(true);
                    }
                    (None, Some(element)) => {
                        let observer = {
                            let weak = Rc::downgrade(&wiring);
                            let visible = visible.clone();
                            Observer::new(&[REVEAL_THRESHOLD], REVEAL_ROOT_MARGIN, move |entries| {
                                let Some(wiring) = weak.upgrade() else {
                                    return;
                                };
                                let Ok(mut wiring) = wiring.try_borrow_mut() else {
                                    return;
                                };
                                for entry in entries {
                                    let event = RevealEvent::Intersection {
                                        ratio: entry.intersection_ratio(),
                                        is_intersecting: entry.is_intersecting(),
                                    };
                                    let revealed = wiring.settle(event);
                                    if wiring.latch.watcher_alive() {
                                        if let Some(timer) = wiring.fallback.take() {
                                            timer.cancel();
                                        }
                                    }
                                    if revealed {
                                        visible.set(true);
                                    }
                                }
                            })
                        };
                        match observer {
                            Ok(observer) => {
                                observer.observe(&element);
                                let weak = Rc::downgrade(&wiring);
                                let visible = visible.clone();
                                let fallback = Timeout::new(REVEAL_FALLBACK_MS, move || {
                                    let Some(wiring) = weak.upgrade() else {
                                        return;
                                    };
                                    let Ok(mut wiring) = wiring.try_borrow_mut() else {
                                        return;
                                    };
                                    if wiring.settle(RevealEvent::FallbackElapsed) {
                                        log::debug!("reveal watcher silent, showing content");
                                        visible.set(true);
                                    }
                                });
                                let mut wiring = wiring.borrow_mut();
                                wiring.observer = Some(observer);
                                wiring.fallback = Some(fallback);
                            }
                            Err(e) => {
                                log::warn!("{}, showing content without reveal", e);
                                wiring.borrow_mut().settle(RevealEvent::ObserverUnavailable);
                                visible.set(true);
                            }
                        }
                    }
                }

                move || {
                    if let Ok(mut wiring) = wiring.try_borrow_mut() {
                        wiring.observer.take();
                        wiring.fallback.take();
                    }
                }
            },
            (node, capabilities),
        );
    }
    *visible
}

/// Drifts `node` vertically with the scroll position.
#[hook]
pub fn use_parallax(node: NodeRef, capabilities: MotionCapabilities) {
    use_effect_with_deps(
        move |(node, capabilities): &(NodeRef, MotionCapabilities)| {
            let mut listeners = Vec::new();
            let mut frames = None;

            if capabilities.motion_enabled() {
                let node = node.clone();
                let mut controller = ParallaxController::new(true);
                let frame_loop = Rc::new(FrameLoop::new(move || {
                    let Some(element) = node.cast::<HtmlElement>() else {
                        return;
                    };
                    if controller.update(dom::viewport_rect(&element)).is_some() {
                        dom::set_style(&element, "transform", &controller.transform());
                    }
                }));
                listeners = scroll_listeners(&frame_loop, &["scroll", "resize"]);
                frame_loop.run_now();
                frames = Some(frame_loop);
            }

            move || {
                drop(listeners);
                drop(frames);
            }
        },
        (node, capabilities),
    );
}

/// Elements written to by the scroll-scrubbed hero.
#[derive(Clone, PartialEq, Default)]
pub struct ScrubNodes {
    pub hero: NodeRef,
    pub title: NodeRef,
    pub subtitle: NodeRef,
    pub background: NodeRef,
}

fn paint_scrub(nodes: &ScrubNodes, frame: &ScrubFrame) {
    if let Some(title) = nodes.title.cast::<HtmlElement>() {
        dom::set_style(&title, "transform", &frame.title_transform());
        dom::set_style(&title, "opacity", &format!("{:.3}", frame.title_opacity));
    }
    if let Some(subtitle) = nodes.subtitle.cast::<HtmlElement>() {
        dom::set_style(&subtitle, "opacity", &format!("{:.3}", frame.subtitle_opacity));
    }
    if let Some(background) = nodes.background.cast::<HtmlElement>() {
        dom::set_style(&background, "background-position", &frame.background_position());
    }
}

struct ScrubWiring {
    controller: ScrubController,
    listener: Option<EventListener>,
    // Without an observer nothing would re-attach a detached listener.
    observed: bool,
}

impl ScrubWiring {
    fn apply(&mut self, change: ListenerChange, frames: &Rc<FrameLoop>, nodes: &ScrubNodes) {
        match change {
            ListenerChange::Attach => {
                if let Some(window) = web_sys::window() {
                    let frames_for_scroll = Rc::clone(frames);
                    self.listener = Some(EventListener::new(&window, "scroll", move |_| {
                        frames_for_scroll.poke()
                    }));
                }
                frames.poke();
            }
            ListenerChange::Detach => {
                self.listener.take();
                paint_scrub(nodes, &self.controller.frame());
            }
            ListenerChange::Keep => {}
        }
    }
}

/// Scroll-scrubs the hero. The scroll listener only exists while the hero
/// is within its margin of the viewport.
#[hook]
pub fn use_scroll_scrub(nodes: ScrubNodes, capabilities: MotionCapabilities) {
    use_effect_with_deps(
        move |(nodes, capabilities): &(ScrubNodes, MotionCapabilities)| {
            let motion = capabilities.motion_enabled();
            let wiring = Rc::new(RefCell::new(ScrubWiring {
                controller: ScrubController::new(motion),
                listener: None,
                observed: false,
            }));
            let mut observer = None;
            let mut frames = None;

            if motion {
                let frame_loop = {
                    let weak = Rc::downgrade(&wiring);
                    let nodes = nodes.clone();
                    Rc::new(FrameLoop::new(move || {
                        let Some(wiring) = weak.upgrade() else {
                            return;
                        };
                        let Ok(mut wiring) = wiring.try_borrow_mut() else {
                            return;
                        };
                        let Some(hero) = nodes.hero.cast::<Element>() else {
                            return;
                        };
                        if let Some(frame) = wiring.controller.tick(dom::viewport_rect(&hero)) {
                            paint_scrub(&nodes, &frame);
                        }
                        if !wiring.controller.is_listening() {
                            if wiring.observed {
                                wiring.listener.take();
                            } else {
                                wiring.controller.on_margin_change(true);
                            }
                        }
                    }))
                };

                let watched = match (capabilities.can_observe_intersections(), nodes.hero.cast::<Element>()) {
                    (true, Some(hero)) => {
                        let weak = Rc::downgrade(&wiring);
                        let frames_for_observer = Rc::clone(&frame_loop);
                        let nodes = nodes.clone();
                        let created = Observer::new(&[0.0], SCRUB_ROOT_MARGIN, move |entries| {
                            let Some(wiring) = weak.upgrade() else {
                                return;
                            };
                            let Ok(mut wiring) = wiring.try_borrow_mut() else {
                                return;
                            };
                            if let Some(entry) = entries.last() {
                                let change = wiring.controller.on_margin_change(entry.is_intersecting());
                                wiring.apply(change, &frames_for_observer, &nodes);
                            }
                        });
                        match created {
                            Ok(created) => {
                                created.observe(&hero);
                                observer = Some(created);
                                true
                            }
                            Err(e) => {
                                log::warn!("{}, hero listens to scroll unconditionally", e);
                                false
                            }
                        }
                    }
                    _ => false,
                };

                if watched {
                    wiring.borrow_mut().observed = true;
                } else {
                    let mut wiring = wiring.borrow_mut();
                    let change = wiring.controller.on_margin_change(true);
                    wiring.apply(change, &frame_loop, nodes);
                }
                frames = Some(frame_loop);
            }

            move || {
                drop(observer);
                if let Ok(mut wiring) = wiring.try_borrow_mut() {
                    wiring.listener.take();
                }
                drop(frames);
            }
        },
        (nodes, capabilities),
    );
}

/// Id of the chapter under the sticky nav, re-evaluated on every frame with
/// scroll activity. Runs regardless of motion preference.
#[hook]
pub fn use_active_section(chapter_ids: Vec<String>) -> Option<String> {
    let active = use_state_eq(|| None::<String>);
    {
        let active = active.clone();
        use_effect_with_deps(
            move |ids: &Vec<String>| {
                let ids = ids.clone();
                let mut tracker = ActiveSectionTracker::new();
                let mut warned = HashSet::new();
                let frame_loop = Rc::new(FrameLoop::new(move || {
                    let scroll_y = dom::scroll_y();
                    let bands: Vec<Option<ChapterBand>> = ids
                        .iter()
                        .map(|id| match dom::element_by_id(id) {
                            Ok(element) => {
                                let rect = element.get_bounding_client_rect();
                                Some(ChapterBand::new(id.clone(), rect.top() + scroll_y, rect.height()))
                            }
                            Err(e) => {
                                if warned.insert(id.clone()) {
                                    log::warn!("skipping chapter: {}", e);
                                }
                                None
                            }
                        })
                        .collect();
                    if tracker.update(&bands, scroll_y) {
                        active.set(tracker.active().map(str::to_owned));
                    }
                }));
                let listeners = scroll_listeners(&frame_loop, &["scroll", "resize"]);
                frame_loop.run_now();

                move || {
                    drop(listeners);
                    drop(frame_loop);
                }
            },
            chapter_ids,
        );
    }
    (*active).clone()
}

/// Whether the viewport is at least desktop width, tracked across resizes.
#[hook]
pub fn use_desktop_width() -> bool {
    let desktop = use_state_eq(|| is_desktop_width(dom::viewport_size().0));
    {
        let desktop = desktop.clone();
        use_effect_with_deps(
            move |_| {
                let frame_loop = Rc::new(FrameLoop::new(move || {
                    desktop.set(is_desktop_width(dom::viewport_size().0));
                }));
                let listeners = scroll_listeners(&frame_loop, &["resize"]);
                move || {
                    drop(listeners);
                    drop(frame_loop);
                }
            },
            (),
        );
    }
    *desktop
}

/// Section currently dominating the viewport, or `None` when the floating
/// button should be hidden.
#[hook]
pub fn use_most_visible(
    sections: Rc<Vec<DemoSection>>,
    capabilities: MotionCapabilities,
    enabled: bool,
) -> Option<DemoTarget> {
    let target = use_state_eq(|| None::<DemoTarget>);
    {
        let target = target.clone();
        use_effect_with_deps(
            move |(sections, capabilities, enabled): &(Rc<Vec<DemoSection>>, MotionCapabilities, bool)| {
                let mut observer = None;
                let mut listeners = Vec::new();
                let mut frames = None;

                if *enabled {
                    let tracker = Rc::new(RefCell::new(MostVisibleTracker::new(
                        sections.as_ref().clone(),
                    )));
                    let frame_loop = {
                        let tracker = Rc::clone(&tracker);
                        let target = target.clone();
                        Rc::new(FrameLoop::new(move || {
                            let Ok(mut tracker) = tracker.try_borrow_mut() else {
                                return;
                            };
                            let changed = tracker.evaluate(|id| {
                                dom::element_by_id(&product_anchor(id))
                                    .ok()
                                    .map(|element| dom::viewport_rect(&element))
                            });
                            if changed {
                                let next = if tracker.is_visible() {
                                    tracker.current().cloned()
                                } else {
                                    None
                                };
                                target.set(next);
                            }
                        }))
                    };

                    if capabilities.can_observe_intersections() {
                        let tracker_for_observer = Rc::clone(&tracker);
                        let frames_for_observer = Rc::clone(&frame_loop);
                        let created = Observer::new(&OBSERVER_THRESHOLDS, "0px", move |entries| {
                            if let Ok(mut tracker) = tracker_for_observer.try_borrow_mut() {
                                for entry in entries {
                                    if let Some(id) = entry.target().get_attribute("data-product-id") {
                                        tracker.record_ratio(&id, entry.intersection_ratio());
                                    }
                                }
                            }
                            frames_for_observer.poke();
                        });
                        match created {
                            Ok(created) => {
                                for section in sections.iter() {
                                    match dom::element_by_id(&product_anchor(&section.product_id)) {
                                        Ok(element) => created.observe(&element),
                                        Err(e) => log::warn!("not tracking section: {}", e),
                                    }
                                }
                                observer = Some(created);
                            }
                            Err(e) => log::warn!("{}, watch-demo button uses geometry only", e),
                        }
                    }
                    if observer.is_none() {
                        listeners = scroll_listeners(&frame_loop, &["scroll", "resize"]);
                    }
                    frame_loop.poke();
                    frames = Some(frame_loop);
                } else {
                    target.set(None);
                }

                move || {
                    drop(observer);
                    drop(listeners);
                    drop(frames);
                }
            },
            (sections, capabilities, enabled),
        );
    }
    (*target).clone()
}

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, Event, Window};
use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::config::get_reveal_config;
use crate::error::RevealError;
use crate::reveal::{
    CardPresentation, CardStyle, EngineSnapshot, GateSignal, IntersectionGate,
    SampleOutcome, ScrollEngine,
};
use crate::utils::dom::{self, AnimationFrames, ListenerGuard, ObserverGuard};

struct CardContent {
    title: &'static str,
    body: &'static str,
    image: &'static str,
    image_alt: &'static str,
}

const CARDS: [CardContent; 3] = [
    CardContent {
        title: "Freedom instead of control.",
        body: "No more manual calculations and constant tension. The assistant does it for you.",
        image: "/assets/card-profile.png",
        image_alt: "Profile screen",
    },
    CardContent {
        title: "Life without compromise.",
        body: "Eat, drink and train on your own terms while your data is collected for you.",
        image: "/assets/card-life.png",
        image_alt: "Life without compromise",
    },
    CardContent {
        title: "Invisible care.",
        body: "The app works quietly and precisely. You live, it thinks.",
        image: "/assets/card-care.png",
        image_alt: "Invisible care",
    },
];

/// Everything the card stack registers with the browser. Dropping it tears
/// the engine down first, then releases listeners, observer and frames.
struct StackBinding {
    engine: Rc<RefCell<ScrollEngine>>,
    _observer: Option<ObserverGuard>,
    _scroll: ListenerGuard,
    _resize: ListenerGuard,
    _frames: Rc<AnimationFrames>,
}

impl Drop for StackBinding {
    fn drop(&mut self) {
        self.engine.borrow_mut().tear_down();
    }
}

fn sampler(
    window: &Window,
    engine: &Rc<RefCell<ScrollEngine>>,
    frames: &Rc<AnimationFrames>,
    publish: &UseStateHandle<EngineSnapshot>,
) -> impl FnMut(Event) + 'static {
    let window = window.clone();
    let engine = engine.clone();
    let frames = frames.clone();
    let publish = publish.clone();
    move |_| {
        let outcome = engine.borrow_mut().sample(dom::scroll_y(&window));
        if outcome == SampleOutcome::RequestFrame {
            if let Err(e) = frames.request() {
                log::error!("Card stack frame not scheduled: {}", e);
                engine.borrow_mut().cancel_frame();
                publish.set(EngineSnapshot::all_visible());
            }
        }
    }
}

fn bind(
    section: NodeRef,
    engine: Rc<RefCell<ScrollEngine>>,
    threshold: f64,
    publish: UseStateHandle<EngineSnapshot>,
) -> Result<StackBinding, RevealError> {
    let window = dom::window()?;

    let frames = Rc::new(AnimationFrames::new(&window, {
        let engine = engine.clone();
        let section = section.clone();
        let window = window.clone();
        let publish = publish.clone();
        move || {
            let geometry = dom::section_geometry(&section, &window);
            let processed = engine.borrow_mut().run_frame(geometry);
            if let Some(snapshot) = processed {
                publish.set(snapshot);
            }
        }
    }));

    let observer = match section.cast::<Element>() {
        Some(element) => {
            let mut gate = IntersectionGate::continuous(threshold);
            let engine = engine.clone();
            let publish = publish.clone();
            Some(ObserverGuard::observe(&element, threshold, move |ratio| {
                if let Some(signal) = gate.observe(ratio) {
                    let snapshot = engine
                        .borrow_mut()
                        .set_intersecting(signal == GateSignal::Entered);
                    publish.set(snapshot);
                }
                true
            })?)
        }
        None => {
            log::debug!("card stack section not mounted, gate stays closed");
            None
        }
    };

    let scroll = ListenerGuard::passive(
        &window,
        "scroll",
        sampler(&window, &engine, &frames, &publish),
    )?;
    let resize = ListenerGuard::passive(
        &window,
        "resize",
        sampler(&window, &engine, &frames, &publish),
    )?;

    // Initial calculation for pages restored mid-scroll.
    if engine.borrow_mut().sample(dom::scroll_y(&window)) == SampleOutcome::RequestFrame {
        frames.request()?;
    }

    Ok(StackBinding {
        engine,
        _observer: observer,
        _scroll: scroll,
        _resize: resize,
        _frames: frames,
    })
}

fn render_card(style: &CardStyle, card: &CardPresentation, content: &CardContent) -> Html {
    html! {
        <div
            class={classes!(
                "stack-card",
                card.visible.then_some("animate-card-enter"),
            )}
            style={style.inline(card)}
            data-visible={card.visible.to_string()}
        >
            <div class="stack-card-background"></div>
            <div class="stack-card-content">
                <h3>{content.title}</h3>
                <p>{content.body}</p>
            </div>
            <div class="stack-card-image">
                <img src={content.image} alt={content.image_alt} loading="lazy" />
            </div>
        </div>
    }
}

/// Sticky section whose three cards stack up as the user scrolls through it
/// and peel off again in reverse when scrolling back.
#[function_component(StackedCards)]
pub fn stacked_cards() -> Html {
    let config = get_reveal_config();
    let section_ref = use_node_ref();
    let snapshot = use_state_eq(EngineSnapshot::default);
    let engine = use_mut_ref(|| ScrollEngine::new(config));

    {
        let section_ref = section_ref.clone();
        let engine = engine.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let bound = bind(section_ref, engine, config.gate_threshold, snapshot.clone());
                let binding = match bound {
                    Ok(binding) => Some(binding),
                    Err(e) => {
                        log::error!("Card stack animation disabled: {}", e);
                        snapshot.set(EngineSnapshot::all_visible());
                        None
                    }
                };
                move || drop(binding)
            },
            (),
        );
    }

    let style = CardStyle::new(config);
    let cards = snapshot.presentation(&style);

    html! {
        <div
            ref={section_ref}
            class="card-stack-track"
            style="position: relative; height: 250vh;"
            data-stage={snapshot.stage.to_string()}
        >
            <section id="card-stack" class="card-stack-section">
                <div class="card-stack-heading">
                    <h2 class="section-title">{"Why us?"}</h2>
                    <FadeIn class="section-subtitle">
                        <h3>{"Freedom. Life. Care."}</h3>
                    </FadeIn>
                </div>
                <div class="card-stack">
                    {
                        for cards
                            .iter()
                            .zip(CARDS.iter())
                            .map(|(card, content)| render_card(&style, card, content))
                    }
                </div>
            </section>
        </div>
    }
}

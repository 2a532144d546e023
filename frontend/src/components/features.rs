use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::get_reveal_config;
use crate::reveal::motion::{animation_delay, stagger_delay_ms};
use crate::utils::hooks::use_reveal_once;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "⚡",
        title: "Fast Performance",
        description: "Lightning-fast processing and response times for optimal efficiency.",
    },
    Feature {
        icon: "🔒",
        title: "Secure",
        description: "Enterprise-grade security with end-to-end encryption.",
    },
    Feature {
        icon: "📱",
        title: "Mobile Ready",
        description: "Fully responsive design that works on all devices.",
    },
];

/// Elements inside the section header that fade in one after another.
const STAGGERED_ELEMENTS: usize = 2;

#[derive(Properties, PartialEq, Clone)]
pub struct FeatureCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    pub index: usize,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let config = get_reveal_config();
    let card_ref = use_node_ref();
    let revealed = use_reveal_once(card_ref.clone(), config.gate_threshold);
    let delay = animation_delay(props.index, config.stagger_step_ms);

    html! {
        <div
            ref={card_ref}
            class={classes!(
                "feature-card",
                "glass-card",
                "opacity-0",
                revealed.then_some("animate-fade-in"),
            )}
            style={format!("animation-delay: {};", delay)}
        >
            <div class="feature-icon">{props.icon.clone()}</div>
            <h3>{props.title.clone()}</h3>
            <p>{props.description.clone()}</p>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let config = get_reveal_config();
    let section_ref = use_node_ref();
    let section_revealed = use_reveal_once(section_ref.clone(), config.gate_threshold);
    // How many of the staggered header elements are showing.
    let shown = use_state_eq(|| 0usize);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |revealed: &bool| {
                let mut timers = Vec::new();
                if *revealed {
                    for index in 0..STAGGERED_ELEMENTS {
                        let shown = shown.clone();
                        let delay = stagger_delay_ms(index, config.stagger_step_ms);
                        timers.push(Timeout::new(delay, move || shown.set(index + 1)));
                    }
                }
                // Dropping a pending Timeout cancels it.
                move || drop(timers)
            },
            section_revealed,
        );
    }

    let fade = |index: usize| {
        classes!(
            "fade-in-element",
            "opacity-0",
            (*shown > index).then_some("animate-fade-in"),
        )
    };

    html! {
        <section ref={section_ref} class="features-section">
            <div class="container">
                <h2 class={fade(0)}>{"Built for everyday care"}</h2>
                <p class={fade(1)}>{"Everything you need, nothing you don't."}</p>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <FeatureCard
                            icon={feature.icon}
                            title={feature.title}
                            description={feature.description}
                            index={index}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

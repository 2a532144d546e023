use crate::components::fade_in::FadeIn;
use crate::components::features::Features;
use crate::components::hero::Hero;
use crate::components::stacked_cards::StackedCards;
use yew::prelude::*;

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="landing-footer">
            <div class="section-container">
                <p>{"All rights reserved"}</p>
                <p>{"2025"}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Hero />
            <Features />
            <StackedCards />
            <section id="made-by-humans" class="made-by-humans">
                <FadeIn class="section-container">
                    <img src="/assets/mascot.png" alt="Mascot" loading="lazy" />
                </FadeIn>
            </section>
            <Footer />
        </div>
    }
}

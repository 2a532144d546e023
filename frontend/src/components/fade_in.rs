use yew::prelude::*;

use crate::config::get_reveal_config;
use crate::utils::hooks::use_reveal_once;

#[derive(Properties, PartialEq, Clone)]
pub struct FadeInProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that starts invisible and fades in the first time it scrolls into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let threshold = get_reveal_config().gate_threshold;
    let revealed = use_reveal_once(node.clone(), threshold);

    html! {
        <div
            ref={node}
            class={classes!(
                props.class.clone(),
                "opacity-0",
                revealed.then_some("animate-fade-in"),
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

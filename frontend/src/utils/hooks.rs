use web_sys::Element;
use yew::prelude::*;

use crate::reveal::{GateSignal, IntersectionGate};
use crate::utils::dom::ObserverGuard;

/// True once the element behind `node` has been at least `threshold` visible.
/// Stops observing after that and never flips back.
#[hook]
pub fn use_reveal_once(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let guard = node.cast::<Element>().and_then(|element| {
                    let mut gate = IntersectionGate::one_shot(threshold);
                    let on_reveal = revealed.clone();
                    let observed = ObserverGuard::observe(&element, threshold, move |ratio| {
                        if gate.observe(ratio) == Some(GateSignal::Revealed) {
                            on_reveal.set(true);
                        }
                        gate.is_attached()
                    });
                    match observed {
                        Ok(guard) => Some(guard),
                        Err(e) => {
                            log::error!("Reveal disabled: {}", e);
                            revealed.set(true);
                            None
                        }
                    }
                });
                move || drop(guard)
            },
            node,
        );
    }
    *revealed
}

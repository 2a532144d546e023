use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlElement, MouseEvent, Window};
use yew::prelude::*;

use crate::config::get_reveal_config;
use crate::error::RevealError;
use crate::reveal::motion::{
    is_mobile, parallax_transform, resting_tilt, tilt_transform, FrameThrottle,
};
use crate::utils::dom::{self, AnimationFrames, ListenerGuard};

/// Checks that a decorative animation payload looks like a Lottie document.
pub fn validate_animation(payload: Value) -> Result<Value, RevealError> {
    match payload.get("layers") {
        Some(Value::Array(_)) => Ok(payload),
        _ => Err(RevealError::AssetDecode(
            "animation payload has no layers".to_string(),
        )),
    }
}

async fn load_animation(path: &str) -> Result<Value, RevealError> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| RevealError::AssetLoad(format!("{}: {}", path, e)))?;
    if !response.ok() {
        return Err(RevealError::AssetLoad(format!(
            "{} returned {}",
            path,
            response.status()
        )));
    }
    let payload = response
        .json::<Value>()
        .await
        .map_err(|e| RevealError::AssetDecode(e.to_string()))?;
    validate_animation(payload)
}

fn set_transform(element: &HtmlElement, transform: &str) {
    if let Err(e) = element.style().set_property("transform", transform) {
        log::warn!("Failed to set transform: {:?}", e);
    }
}

fn apply_parallax(window: &Window, default_speed: f64) {
    let Some(document) = window.document() else {
        return;
    };
    let Ok(elements) = document.query_selector_all(".parallax") else {
        return;
    };
    let scroll_y = dom::scroll_y(window);
    for i in 0..elements.length() {
        let element = elements.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok());
        let Some(element) = element else {
            continue;
        };
        let speed = element
            .dataset()
            .get("speed")
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(default_speed);
        set_transform(&element, &parallax_transform(scroll_y, speed));
    }
}

/// Desktop-only hero motion: parallax on scroll and a tilt that follows the pointer.
struct HeroMotion {
    _scroll: ListenerGuard,
    _frames: Rc<AnimationFrames>,
    _tilt: Option<(ListenerGuard, ListenerGuard)>,
}

fn bind_motion(
    container: &NodeRef,
    image: &NodeRef,
    default_speed: f64,
) -> Result<HeroMotion, RevealError> {
    let window = dom::window()?;
    let throttle = Rc::new(RefCell::new(FrameThrottle::default()));

    let frames = Rc::new(AnimationFrames::new(&window, {
        let window = window.clone();
        let throttle = throttle.clone();
        move || {
            apply_parallax(&window, default_speed);
            throttle.borrow_mut().complete();
        }
    }));

    let scroll = ListenerGuard::passive(&window, "scroll", {
        let frames = frames.clone();
        move |_| {
            if let Err(e) = throttle.borrow_mut().request_with(|| frames.request()) {
                log::error!("Parallax frame not scheduled: {}", e);
            }
        }
    })?;

    let tilt = match (container.cast::<Element>(), image.cast::<HtmlElement>()) {
        (Some(container), Some(image)) => {
            let on_move = {
                let container = container.clone();
                let image = image.clone();
                move |event: Event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let rect = container.get_bounding_client_rect();
                    let transform = tilt_transform(
                        event.client_x() as f64,
                        event.client_y() as f64,
                        rect.left(),
                        rect.top(),
                        rect.width(),
                        rect.height(),
                    );
                    set_transform(&image, &transform);
                }
            };
            let moved = ListenerGuard::passive(&container, "mousemove", on_move)?;
            let left = ListenerGuard::passive(&container, "mouseleave", move |_| {
                set_transform(&image, resting_tilt());
            })?;
            Some((moved, left))
        }
        _ => None,
    };

    Ok(HeroMotion {
        _scroll: scroll,
        _frames: frames,
        _tilt: tilt,
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = get_reveal_config();
    let container_ref = use_node_ref();
    let image_ref = use_node_ref();
    let mobile = use_state_eq(|| false);
    let animation = use_state(|| None::<Value>);

    // Track the mobile breakpoint
    {
        let mobile = mobile.clone();
        use_effect_with_deps(
            move |_| {
                let guard = dom::window().ok().and_then(|window| {
                    let breakpoint = config.mobile_breakpoint_px;
                    mobile.set(is_mobile(dom::viewport_width(&window), breakpoint));
                    let listener = ListenerGuard::passive(&window, "resize", {
                        let window = window.clone();
                        move |_| mobile.set(is_mobile(dom::viewport_width(&window), breakpoint))
                    });
                    listener
                        .map_err(|e| log::error!("Resize tracking disabled: {}", e))
                        .ok()
                });
                move || drop(guard)
            },
            (),
        );
    }

    // Optional decorative animation, static image on failure
    {
        let animation = animation.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match load_animation(&config.hero_animation_path).await {
                        Ok(payload) => animation.set(Some(payload)),
                        Err(e) => {
                            log::warn!("Hero animation unavailable, using static image: {}", e)
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    // Parallax and tilt, desktop only
    {
        let container_ref = container_ref.clone();
        let image_ref = image_ref.clone();
        use_effect_with_deps(
            move |mobile: &bool| {
                let motion = if *mobile {
                    None
                } else {
                    match bind_motion(&container_ref, &image_ref, config.parallax_default_speed) {
                        Ok(motion) => Some(motion),
                        Err(e) => {
                            log::error!("Hero motion disabled: {}", e);
                            None
                        }
                    }
                };
                move || drop(motion)
            },
            *mobile,
        );
    }

    let padding = if *mobile { "100px 12px 40px" } else { "120px 20px 60px" };

    html! {
        <section
            id="hero"
            class="hero tech-gradient-bg"
            style={format!("padding: {};", padding)}
        >
            <div class="container" ref={container_ref}>
                <div class="hero-grid">
                    <div class="hero-copy">
                        <h1
                            class="section-title opacity-0 animate-fade-in"
                            style="animation-delay: 0.3s;"
                        >
                            {"Smart"}<br/>{"Technology"}<br/>{"of Care"}
                        </h1>
                        <p
                            class="section-subtitle opacity-0 animate-fade-in"
                            style="animation-delay: 0.5s;"
                        >
                            {"We built an app that takes the everyday worries off your hands."}
                        </p>
                        <div
                            class="hero-cta-group opacity-0 animate-fade-in"
                            style="animation-delay: 0.7s;"
                        >
                            <a href="#get-access" class="tech-button">{"Contact us"}</a>
                        </div>
                    </div>
                    <div class="hero-visual">
                        {
                            match &*animation {
                                Some(payload) => html! {
                                    <div
                                        class="hero-animation animate-fade-in"
                                        style="animation-delay: 0.9s;"
                                    >
                                        <lottie-player
                                            src={payload.to_string()}
                                            background="transparent"
                                            loop={true}
                                            autoplay={true}
                                        ></lottie-player>
                                    </div>
                                },
                                None => html! {
                                    <div class="hero-image">
                                        <img
                                            ref={image_ref}
                                            src="/assets/hero-app.png"
                                            alt="Mobile app"
                                            style="transform-style: preserve-3d;"
                                        />
                                    </div>
                                },
                            }
                        }
                    </div>
                </div>
            </div>
            <div class="hero-glow parallax" data-speed="0.05"></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_payload_with_layers() {
        let payload = json!({"v": "5.7.4", "layers": []});
        assert_eq!(validate_animation(payload.clone()), Ok(payload));
    }

    #[test]
    fn rejects_payload_without_layers() {
        let err = validate_animation(json!({"v": "5.7.4"})).unwrap_err();
        assert!(matches!(err, RevealError::AssetDecode(_)));
        assert!(validate_animation(json!({"layers": "nope"})).is_err());
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::motion::{Reveal, RevealPhase, REVEAL_DURATION_MS, REVEAL_VIEWPORT_FRACTION};

#[derive(Properties, PartialEq)]
pub struct RevealBlockProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper that plays a one-shot entrance animation the first time its
/// bounding box intersects the viewport. The reveal machine lives in a
/// mutable ref so the scroll listener sees the current phase; the state
/// hook only mirrors it for rendering.
#[function_component(RevealBlock)]
pub fn reveal_block(props: &RevealBlockProps) -> Html {
    let node = use_node_ref();
    let machine = use_mut_ref(Reveal::new);
    let phase = use_state(|| RevealPhase::Unrevealed);

    {
        let node = node.clone();
        let machine = machine.clone();
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let check = {
                    let window = window.clone();
                    let timer = timer.clone();
                    move || {
                        if machine.borrow().phase() != RevealPhase::Unrevealed {
                            return;
                        }
                        if let Some(element) = node.cast::<web_sys::Element>() {
                            let rect = element.get_bounding_client_rect();
                            let viewport = window.inner_height().unwrap().as_f64().unwrap();
                            let intersects = rect.top() < viewport * REVEAL_VIEWPORT_FRACTION
                                && rect.bottom() > 0.0;
                            if intersects && machine.borrow_mut().enter_viewport() {
                                phase.set(RevealPhase::Revealing);
                                let machine = machine.clone();
                                let phase = phase.clone();
                                *timer.borrow_mut() =
                                    Some(Timeout::new(REVEAL_DURATION_MS, move || {
                                        if machine.borrow_mut().settle() {
                                            phase.set(RevealPhase::Revealed);
                                        }
                                    }));
                            }
                        }
                    }
                };

                // Sections already in view on mount reveal immediately.
                check();

                let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // An unmounted section abandons its pending settle.
                    timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let visible = *phase != RevealPhase::Unrevealed;

    html! {
        <div
            id={props.id.clone()}
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then(|| "visible"))}
        >
            { for props.children.iter() }
        </div>
    }
}

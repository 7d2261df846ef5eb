use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::GridEntry;
use crate::motion::stagger_delay_ms;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct WatchCardProps {
    pub entry: GridEntry,
}

#[function_component(WatchCard)]
pub fn watch_card(props: &WatchCardProps) -> Html {
    let navigator = use_navigator().unwrap();
    let entry = &props.entry;

    let on_details = {
        let navigator = navigator.clone();
        let slug = entry.record.slug();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::WatchDetails { id: slug.clone() });
        })
    };

    html! {
        <div
            class="watch-card reveal-item"
            style={format!("transition-delay: {}ms;", stagger_delay_ms(entry.index))}
        >
            <div class="watch-frame">
                <div class="watch-image-container">
                    <img
                        src={entry.record.image.clone()}
                        alt={entry.record.name.clone()}
                        loading="lazy"
                        class="watch-image"
                    />
                </div>
                <div class="watch-info">
                    <div class="watch-info-row">
                        <h4 class="watch-name">{ entry.record.name.clone() }</h4>
                        <span class="watch-price">{ entry.record.price.clone() }</span>
                    </div>
                    <p class="watch-description">{ entry.record.description.clone() }</p>
                    <div class="watch-info-row">
                        <span class="stock-marker">{"In Stock"}</span>
                        <button class="details-button" onclick={on_details}>
                            {"Details"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

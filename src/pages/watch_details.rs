use std::rc::Rc;

use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{build_grid, Catalog, WatchRecord};
use crate::components::reveal::RevealBlock;
use crate::components::watch_card::WatchCard;
use crate::storefront;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct WatchDetailsProps {
    pub id: AttrValue,
}

#[function_component(WatchDetails)]
pub fn watch_details(props: &WatchDetailsProps) -> Html {
    let catalog = use_context::<Rc<Catalog>>().expect("catalog context is provided by App");

    // Start each detail view at the top of the page
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.id.clone(),
    );

    match catalog.resolve_slug(&props.id) {
        Some(record) => render_details(&catalog, record),
        None => {
            warn!("no watch matches slug '{}'", props.id);
            render_not_found(&props.id)
        }
    }
}

fn render_details(catalog: &Catalog, record: &WatchRecord) -> Html {
    // Round the detail page off with a strip from the featured collection.
    let related: Vec<_> = catalog
        .get_collection(storefront::FEATURED_COLLECTION)
        .map(build_grid)
        .unwrap_or_default()
        .into_iter()
        .filter(|entry| entry.record.name != record.name)
        .collect();

    html! {
        <main class="details-page">
            <div class="container">
                <Link<Route> to={Route::Home} classes="back-link">
                    {"← Back to collections"}
                </Link<Route>>
                <RevealBlock class={classes!("details-panel")}>
                    <div class="details-image">
                        <img src={record.image.clone()} alt={record.name.clone()} />
                    </div>
                    <div class="details-info">
                        <h1 class="details-name">{ record.name.clone() }</h1>
                        <p class="details-price">{ record.price.clone() }</p>
                        <p class="details-description">{ record.description.clone() }</p>
                        <span class="stock-marker">{"In Stock"}</span>
                    </div>
                </RevealBlock>

                if !related.is_empty() {
                    <section class="related-section">
                        <RevealBlock>
                            <h3 class="collection-title">{"More from the latest collection"}</h3>
                            <div class="watch-grid">
                                { for related.into_iter().map(|entry| {
                                    let key = entry.index;
                                    html! { <WatchCard key={key} entry={entry} /> }
                                }) }
                            </div>
                        </RevealBlock>
                    </section>
                }
            </div>
        </main>
    }
}

fn render_not_found(slug: &str) -> Html {
    html! {
        <main class="details-page not-found">
            <div class="container">
                <h2>{"This timepiece is not in our archive"}</h2>
                <p>{ format!("Nothing in our collections matches \"{}\".", slug) }</p>
                <Link<Route> to={Route::Home} classes="back-link">
                    {"← Back to collections"}
                </Link<Route>>
            </div>
        </main>
    }
}

use yew::prelude::*;

use crate::catalog::{build_grid, Collection};
use crate::components::reveal::RevealBlock;
use crate::components::watch_card::WatchCard;

#[derive(Properties, PartialEq)]
pub struct CollectionSectionProps {
    pub collection: Collection,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(CollectionSection)]
pub fn collection_section(props: &CollectionSectionProps) -> Html {
    let grid = build_grid(&props.collection);

    html! {
        <section id={props.id.clone()} class="collection-section">
            <RevealBlock class={classes!("container")}>
                <h3 class="collection-title">{ props.collection.title().to_string() }</h3>
                <div class="watch-grid">
                    { for grid.into_iter().map(|entry| {
                        let key = entry.index;
                        html! { <WatchCard key={key} entry={entry} /> }
                    }) }
                </div>
            </RevealBlock>
        </section>
    }
}

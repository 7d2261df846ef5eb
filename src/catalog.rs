//! Read-only catalog of watch collections. Populated once at startup from
//! the storefront configuration and never mutated afterwards.

use std::collections::HashMap;

use log::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct WatchRecord {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl WatchRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            image: image.into(),
        }
    }

    pub fn slug(&self) -> String {
        derive_slug(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    title: String,
    watches: Vec<WatchRecord>,
}

impl Collection {
    pub fn new(title: impl Into<String>, watches: Vec<WatchRecord>) -> Self {
        Self {
            title: title.into(),
            watches,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn watches(&self) -> &[WatchRecord] {
        &self.watches
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    collections: Vec<Collection>,
}

impl Catalog {
    pub fn new(collections: Vec<Collection>) -> Self {
        flag_slug_collisions(&collections);
        Self { collections }
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn get_collection(&self, title: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.title == title)
    }

    /// Scans collections in insertion order; the first record whose derived
    /// slug matches wins.
    pub fn resolve_slug(&self, slug: &str) -> Option<&WatchRecord> {
        self.collections
            .iter()
            .flat_map(|c| c.watches.iter())
            .find(|w| w.slug() == slug)
    }
}

/// URL-safe identifier for a record: lowercased name with whitespace runs
/// collapsed to single hyphens.
pub fn derive_slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

// Cross-collection duplicates are legal but make the later record
// unreachable through `resolve_slug`, so surface them loudly.
fn flag_slug_collisions(collections: &[Collection]) {
    let mut seen: HashMap<String, (&str, &str)> = HashMap::new();
    for collection in collections {
        for watch in collection.watches() {
            let slug = watch.slug();
            if let Some((other_name, other_title)) = seen.get(slug.as_str()) {
                warn!(
                    "slug '{}' of '{}' ({}) is already taken by '{}' ({}); first definition wins",
                    slug,
                    watch.name,
                    collection.title(),
                    other_name,
                    other_title,
                );
            } else {
                seen.insert(slug, (watch.name.as_str(), collection.title()));
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridEntry {
    pub index: usize,
    pub record: WatchRecord,
    pub href: String,
}

/// One render entry per record, in the collection's stored order. The index
/// doubles as the stable render key.
pub fn build_grid(collection: &Collection) -> Vec<GridEntry> {
    collection
        .watches()
        .iter()
        .enumerate()
        .map(|(index, record)| GridEntry {
            index,
            href: format!("/watch/{}", record.slug()),
            record: record.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Collection::new(
                "LATEST COLLECTION",
                vec![
                    WatchRecord::new("Quantum Chronograph", "Ceramic bezel", "$12,500", "q.png"),
                    WatchRecord::new("Nova Automatic", "72-hour reserve", "$8,900", "n.png"),
                ],
            ),
            Collection::new(
                "ROLEX COLLECTION",
                vec![WatchRecord::new(
                    "Daytona Cosmograph",
                    "Oysterflex bracelet",
                    "$34,500",
                    "d.png",
                )],
            ),
        ])
    }

    #[test]
    fn test_derive_slug_lowercases_and_hyphenates() {
        assert_eq!(derive_slug("Daytona Cosmograph"), "daytona-cosmograph");
        assert_eq!(derive_slug("PRX Powermatic 80"), "prx-powermatic-80");
    }

    #[test]
    fn test_derive_slug_collapses_whitespace_runs() {
        assert_eq!(derive_slug("Royal  Oak   Offshore"), "royal-oak-offshore");
        assert_eq!(derive_slug("  Nova Automatic "), "nova-automatic");
    }

    #[test]
    fn test_resolve_slug_round_trips_every_record() {
        let catalog = sample_catalog();
        for collection in catalog.collections() {
            for watch in collection.watches() {
                let found = catalog.resolve_slug(&watch.slug()).expect("record resolves");
                assert_eq!(found.slug(), watch.slug());
            }
        }
    }

    #[test]
    fn test_resolve_slug_unknown_is_none() {
        let catalog = sample_catalog();
        assert!(catalog.resolve_slug("moon-phase-deluxe").is_none());
        assert!(catalog.resolve_slug("").is_none());
    }

    #[test]
    fn test_resolve_slug_first_match_wins_across_collections() {
        let catalog = Catalog::new(vec![
            Collection::new(
                "A",
                vec![WatchRecord::new("Twin Dial", "first", "$1", "a.png")],
            ),
            Collection::new(
                "B",
                vec![WatchRecord::new("Twin Dial", "second", "$2", "b.png")],
            ),
        ]);
        let found = catalog.resolve_slug("twin-dial").expect("collides but resolves");
        assert_eq!(found.description, "first");
    }

    #[test]
    fn test_get_collection_by_title() {
        let catalog = sample_catalog();
        let collection = catalog.get_collection("ROLEX COLLECTION").expect("known title");
        assert_eq!(collection.watches().len(), 1);
        assert!(catalog.get_collection("SEIKO COLLECTION").is_none());
    }

    #[test]
    fn test_build_grid_preserves_order_and_targets() {
        let catalog = sample_catalog();
        let grid = build_grid(catalog.get_collection("LATEST COLLECTION").unwrap());
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0].index, 0);
        assert_eq!(grid[0].record.name, "Quantum Chronograph");
        assert_eq!(grid[0].href, "/watch/quantum-chronograph");
        assert_eq!(grid[1].index, 1);
        assert_eq!(grid[1].href, "/watch/nova-automatic");
    }

    #[test]
    fn test_build_grid_empty_collection() {
        let grid = build_grid(&Collection::new("EMPTY", vec![]));
        assert!(grid.is_empty());
    }
}

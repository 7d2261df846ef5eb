//! Static storefront configuration: the collections handed to the catalog
//! store at startup. Display order here is display order on the page.

use crate::catalog::{Collection, WatchRecord};

pub const FEATURED_COLLECTION: &str = "LATEST COLLECTION";

pub fn collections() -> Vec<Collection> {
    vec![
        Collection::new(
            FEATURED_COLLECTION,
            vec![
                WatchRecord::new(
                    "Quantum Chronograph",
                    "Advanced chronograph with ceramic bezel and luminous indices",
                    "$12,500",
                    "https://images.unsplash.com/photo-1523170335258-f5ed11844a49?auto=format&fit=crop&w=800&q=80",
                ),
                WatchRecord::new(
                    "Nova Automatic",
                    "Self-winding mechanism with 72-hour power reserve",
                    "$8,900",
                    "https://i.imgur.com/XR0Pj97.png",
                ),
                WatchRecord::new(
                    "Stellar GMT",
                    "Dual time zones with meteorite dial finish",
                    "$15,700",
                    "https://i.imgur.com/mlZmMdA.png",
                ),
            ],
        ),
        Collection::new(
            "ROLEX COLLECTION",
            vec![
                WatchRecord::new(
                    "Daytona Cosmograph",
                    "Precision chronograph with Oysterflex bracelet",
                    "$34,500",
                    "https://i.imgur.com/Tst9XCE.png",
                ),
                WatchRecord::new(
                    "Submariner Date",
                    "Professional diver's watch with Cerachrom bezel",
                    "$41,900",
                    "https://i.imgur.com/XR0Pj97.png",
                ),
                WatchRecord::new(
                    "GMT-Master II",
                    "Dual time zone functionality with Jubilee bracelet",
                    "$38,700",
                    "https://i.imgur.com/y76uMIB.png",
                ),
            ],
        ),
        Collection::new(
            "TISSOT COLLECTION",
            vec![
                WatchRecord::new(
                    "PRX Powermatic 80",
                    "Integrated bracelet with automatic movement",
                    "$3,900",
                    "https://i.imgur.com/vgBjiJf.png",
                ),
                WatchRecord::new(
                    "Seastar 2000",
                    "Professional dive watch with 600m water resistance",
                    "$4,200",
                    "https://i.imgur.com/EQAixxX.png",
                ),
                WatchRecord::new(
                    "Bilal MotoGP",
                    "Limited edition chronograph with racing inspiration",
                    "$3,500",
                    "https://i.imgur.com/G4yTOZp.png",
                ),
            ],
        ),
        Collection::new(
            "AUDEMARS PIGUET COLLECTION",
            vec![
                WatchRecord::new(
                    "Royal Oak Offshore",
                    "Chronograph with ceramic bezel and tapisserie dial",
                    "$185,000",
                    "https://i.imgur.com/UmSZrWL.png",
                ),
                WatchRecord::new(
                    "Royal Oak Perpetual",
                    "Perpetual calendar with grand tapisserie dial",
                    "$235,000",
                    "https://i.imgur.com/vvvZZGB.png",
                ),
                WatchRecord::new(
                    "Code 11.59",
                    "Flying tourbillon with octagonal case middle",
                    "$195,000",
                    "https://i.imgur.com/ixbfMSP.png",
                ),
            ],
        ),
        Collection::new(
            "PATEK PHILIPPE COLLECTION",
            vec![
                WatchRecord::new(
                    "Nautilus 5711",
                    "Iconic sports watch with blue dial",
                    "$285,000",
                    "https://i.imgur.com/Afjfu0z.png",
                ),
                WatchRecord::new(
                    "Calatrava 5227",
                    "Classic dress watch with hunter caseback",
                    "$245,000",
                    "https://i.imgur.com/RlEtTtn.png",
                ),
                WatchRecord::new(
                    "Grand Complications",
                    "Perpetual calendar chronograph",
                    "$395,000",
                    "https://i.imgur.com/XoDc9Ex.png",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{build_grid, derive_slug, Catalog};
    use std::collections::HashSet;

    #[test]
    fn test_storefront_has_five_collections() {
        let catalog = Catalog::new(collections());
        assert_eq!(catalog.collections().len(), 5);
        assert!(catalog.get_collection(FEATURED_COLLECTION).is_some());
    }

    #[test]
    fn test_storefront_slugs_are_unique() {
        let catalog = Catalog::new(collections());
        let mut seen = HashSet::new();
        for collection in catalog.collections() {
            for watch in collection.watches() {
                assert!(seen.insert(watch.slug()), "duplicate slug {}", watch.slug());
            }
        }
    }

    #[test]
    fn test_daytona_resolves_by_slug() {
        let catalog = Catalog::new(collections());
        let record = catalog.resolve_slug("daytona-cosmograph").expect("known slug");
        assert_eq!(record.name, "Daytona Cosmograph");
        assert_eq!(derive_slug(&record.name), "daytona-cosmograph");
    }

    #[test]
    fn test_every_collection_builds_a_full_grid() {
        let catalog = Catalog::new(collections());
        for collection in catalog.collections() {
            let grid = build_grid(collection);
            assert_eq!(grid.len(), collection.watches().len());
            for (i, entry) in grid.iter().enumerate() {
                assert_eq!(entry.index, i);
                assert!(entry.href.starts_with("/watch/"));
            }
        }
    }
}

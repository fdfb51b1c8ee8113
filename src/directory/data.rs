//! The compiled-in branch table.
//!
//! The directory ships as a static table rather than a loaded document; table
//! order is significant because it is the resolver's documented tie-break
//! order.

use crate::domain::Branch;
use crate::geo::Coordinate;

/// Returns the built-in branch records, in tie-break order.
#[must_use]
pub fn builtin_branches() -> Vec<Branch> {
    vec![
        Branch {
            id: "harlow".to_string(),
            name: "Cheese Pizza - Harlow".to_string(),
            area: "Harlow, Essex".to_string(),
            outward: "CM20".to_string(),
            postal_prefixes: vec!["CM".to_string()],
            coordinates: Coordinate::new(51.7729, 0.1023),
            order_url: "https://example.com/harlow".to_string(),
        },
        Branch {
            id: "stalbans".to_string(),
            name: "Cheese Pizza - St Albans".to_string(),
            area: "St Albans, Hertfordshire".to_string(),
            outward: "AL1".to_string(),
            postal_prefixes: vec!["AL".to_string()],
            coordinates: Coordinate::new(51.75, -0.3333),
            order_url: "https://cheerzpizza.uk/".to_string(),
        },
        Branch {
            id: "stevenage".to_string(),
            name: "Cheese Pizza - Stevenage".to_string(),
            area: "Stevenage, Hertfordshire".to_string(),
            outward: "SG1".to_string(),
            postal_prefixes: vec!["SG".to_string()],
            coordinates: Coordinate::new(51.8979, -0.2020),
            order_url: "https://cheesepizzastevenage.co.uk/".to_string(),
        },
        Branch {
            id: "chatham".to_string(),
            name: "Cheese Pizza - Chatham".to_string(),
            area: "Chatham, Kent".to_string(),
            outward: "ME4".to_string(),
            postal_prefixes: vec!["ME".to_string()],
            coordinates: Coordinate::new(51.38, 0.53),
            order_url: "https://example.com/chatham".to_string(),
        },
        Branch {
            id: "tunbridgewells".to_string(),
            name: "Cheese Pizza - Tunbridge Wells".to_string(),
            area: "Royal Tunbridge Wells, Kent".to_string(),
            outward: "TN1".to_string(),
            postal_prefixes: vec!["TN".to_string()],
            coordinates: Coordinate::new(51.1328, 0.2636),
            order_url: "https://cheesepizza.uk/".to_string(),
        },
    ]
}

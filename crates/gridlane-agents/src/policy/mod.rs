//! Movement policies, one per vehicle kind.
//!
//! Two choosing styles are in use. Ordered kinds (car, taxi, bicycle) take
//! the first acceptable cell in a fixed order and never touch the random
//! source. Random kinds (truck, human) collect every acceptable cell and
//! draw one. The ATV is neither: it keeps its heading unless a wall is in
//! reach.

pub mod atv;
pub mod bicycle;
pub mod car;
pub mod human;
pub mod taxi;
pub mod truck;

pub use atv::Atv;
pub use bicycle::Bicycle;
pub use car::Car;
pub use human::Human;
pub use taxi::Taxi;
pub use truck::Truck;

use gridlane_core::types::{Direction, NeighborView, Terrain};

/// Left, right, then front: the collection order for random kinds.
pub(crate) fn sides_then_front(facing: Direction) -> [Direction; 3] {
    [facing.left(), facing.right(), facing]
}

/// First direction in `order` whose neighbor satisfies `eligible`.
pub(crate) fn first_eligible(
    order: [Direction; 3],
    neighbors: &NeighborView,
    eligible: impl Fn(Terrain) -> bool,
) -> Option<Direction> {
    order.into_iter().find(|&d| eligible(neighbors[d]))
}

/// Every direction in `order` whose neighbor satisfies `eligible`.
pub(crate) fn all_eligible(
    order: [Direction; 3],
    neighbors: &NeighborView,
    eligible: impl Fn(Terrain) -> bool,
) -> Vec<Direction> {
    order.into_iter().filter(|&d| eligible(neighbors[d])).collect()
}

pub mod clock;
pub mod graph;

pub use self::clock::SimClock;
pub use self::graph::CityGraph;

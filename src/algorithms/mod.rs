pub mod router;
pub mod tracker;

pub use self::router::{
    estimate_assembly_days, reconstruct_path, relax_from, resolve_nearest_shop, NearestShop,
    ShortestPaths,
};
pub use self::tracker::current_city;

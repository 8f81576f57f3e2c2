pub mod body;
pub mod params;
pub mod rng;
pub mod viewport;
pub mod world;

pub mod scene;
pub mod world;

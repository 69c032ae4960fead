pub mod domain;
pub mod generator;
pub mod height_map;

#![deny(warnings)]
pub mod advisor;
pub mod game;
pub mod model;

pub mod controller;
pub mod grid;
pub mod reader;
pub mod route;
pub mod slider;

pub mod app_state;
pub mod clients;
pub mod comic;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod views;

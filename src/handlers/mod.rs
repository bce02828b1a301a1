pub mod comic;
pub mod errors;
pub mod manhwa;
pub mod proxy;

pub async fn health() -> &'static str {
    "ok"
}

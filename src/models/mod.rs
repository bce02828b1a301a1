pub mod comic;
pub mod errors;
pub mod manhwa;

mod de;

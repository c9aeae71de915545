pub mod coordinates;
pub mod feed;

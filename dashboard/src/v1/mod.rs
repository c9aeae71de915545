mod api_models;
mod error;
mod extractors;
mod handlers;
mod router;

pub use router::router;

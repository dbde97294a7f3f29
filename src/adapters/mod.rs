// Adapters layer: concrete implementations for external systems (http fetch, http serving, lambda).

pub mod http;
pub mod proxy;
pub mod server;

pub use http::ReqwestFetcher;
pub use proxy::ProxyResponse;
pub use server::router;

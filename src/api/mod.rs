pub mod atlas;
pub mod fetch_utils;
pub mod http_client;
pub mod urls;
mod characters;
mod client;
mod ninja;
mod seasons;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::{create_http_client, create_http_client_with_timeout};
// Re-export fetch helpers and the client
pub use atlas::{atlas_point_byte, decode_atlas_fragment};
pub use client::PoeClient;
pub use fetch_utils::{fetch, fetch_array, fetch_response};

//! 原生 Web API 封装模块
//!
//! Browser implementations of the core's transport, storage and state seams,
//! plus the History-API router.

mod http;
pub mod router;
mod signal;
mod storage;

pub use http::FetchHttpClient;
pub use signal::SignalState;
pub use storage::LocalStorage;

//! HTTP Layer - Host Runtime 边界
//!
//! 接收任务、调用 Handler、序列化响应

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{HttpServer, ServerConfig};
pub use state::AppState;

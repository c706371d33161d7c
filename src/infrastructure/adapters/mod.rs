//! Infrastructure Adapters
//!
//! 端口的具体实现

pub mod tts;

pub use tts::{FakeTtsEngine, HttpTtsEngine, HttpTtsEngineConfig};

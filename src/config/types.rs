//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// TTS 引擎配置
    #[serde(default)]
    pub engine: EngineConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            engine: EngineConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    /// 参考音频以 base64 随请求体传入，需要远大于常规 JSON 的限制
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_max_body_bytes() -> usize {
    50 * 1024 * 1024 // 50 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// TTS 引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// TTS 引擎服务基础 URL
    #[serde(default = "default_engine_url")]
    pub url: String,

    /// 是否启用 GPU 加速（模型加载时生效）
    #[serde(default = "default_use_gpu")]
    pub use_gpu: bool,

    /// 推理请求超时时间（秒）
    #[serde(default = "default_engine_timeout")]
    pub timeout_secs: u64,
}

fn default_engine_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_use_gpu() -> bool {
    true
}

fn default_engine_timeout() -> u64 {
    120
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            url: default_engine_url(),
            use_gpu: default_use_gpu(),
            timeout_secs: default_engine_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8090);
        assert_eq!(config.engine.url, "http://localhost:8000");
        assert!(config.engine.use_gpu);
        assert_eq!(config.engine.timeout_secs, 120);
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8090");
    }

    #[test]
    fn test_default_body_limit() {
        let config = ServerConfig::default();
        assert_eq!(config.max_body_bytes, 50 * 1024 * 1024);
    }
}

//! Voxclone Worker 入口
//!
//! 启动流程：加载配置 → 初始化日志 → 建立模型会话（仅一次）→ 启动 HTTP 服务

use std::sync::Arc;

use voxclone::config::{load_config, print_config};
use voxclone::infrastructure::adapters::{HttpTtsEngine, HttpTtsEngineConfig};
use voxclone::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},voxclone={},tower_http=info",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Voxclone - 单请求 TTS 推理 Worker");
    print_config(&config);

    // 建立模型会话：进程生命周期内仅初始化一次，所有任务复用同一实例
    let engine_config = HttpTtsEngineConfig {
        base_url: config.engine.url.clone(),
        timeout_secs: config.engine.timeout_secs,
        use_gpu: config.engine.use_gpu,
    };
    let engine = Arc::new(HttpTtsEngine::connect(engine_config).await?);
    tracing::info!(use_gpu = config.engine.use_gpu, "TTS engine session ready");

    // 创建 HTTP 服务器（Host Runtime 边界）
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let state = AppState::new(engine);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Worker shutdown complete");

    Ok(())
}

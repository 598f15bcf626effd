//! Cygnos - ローカル AI エージェント UI のゲートウェイサーバ

use cygnos::config::{load_config, print_config};
use cygnos::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 設定読み込み（優先度: 環境変数 > 設定ファイル > デフォルト値）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // ログ初期化
    let log_filter = format!(
        "{},cygnos={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Cygnos AI Agent Gateway v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // アセットディレクトリが無くてもサーバは起動する（該当ルートが 404 / 500 になるだけ）
    for dir in [&config.assets.public_dir, &config.assets.templates_dir] {
        if !dir.is_dir() {
            tracing::warn!(dir = %dir.display(), "Asset directory does not exist");
        }
    }

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::from_assets_config(&config.assets);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Open {} in your browser", config.server.base_url());

    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

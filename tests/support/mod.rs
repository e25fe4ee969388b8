//! 統合テスト用の補助関数

#![allow(dead_code)]

use std::time::Duration;

use repo_collector::adapter::config::Config;
use repo_collector::adapter::github::client::GithubClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 1リクエストだけ受け付け、指定のステータスとボディを返す
pub async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut received = Vec::new();
        let mut buf = [0u8; 1024];
        while !received.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&received).to_string()
    });

    (format!("http://{}", addr), handle)
}

/// 接続を受け付けるだけで応答を返さないサーバ
///
/// タイムアウトの確認用。戻り値のタスクが生きている間は接続が保持される
pub async fn serve_silent() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(60)).await;
    });

    (format!("http://{}", addr), handle)
}

/// システムのプロキシ設定がローカルの接続に使われないようにする
pub fn bypass_proxy_for_localhost() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
}

/// プロキシを使わないテスト用の `reqwest::Client`
pub fn local_http() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// ローカルのテストサーバへ直接つなぐクライアント
pub fn local_client(config: &Config) -> GithubClient {
    GithubClient::with_http(
        local_http(),
        config.api_base_url.clone(),
        Some("test-token".to_string()),
    )
}

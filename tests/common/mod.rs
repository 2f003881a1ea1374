#![allow(dead_code)]

use tokio::net::TcpListener;

/// Spawns the application on a random local port and returns its base address.
pub async fn spawn_app() -> String {
    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");

    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        env_manager::serve(listener).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

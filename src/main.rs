use docindex::auth::manager::CredentialStore;
use docindex::index::memory::DocumentIndex;
use docindex::router::core::RequestRouter;
use docindex::rpc;
use docindex::socket;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut rpc_bind: SocketAddr = "127.0.0.1:8080".parse()?;
    let mut socket_bind: SocketAddr = "127.0.0.1:9090".parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rpc-bind" => {
                rpc_bind = args[i + 1].parse()?;
                i += 2;
            }
            "--socket-bind" => {
                socket_bind = args[i + 1].parse()?;
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [--rpc-bind <addr:port>] [--socket-bind <addr:port>]",
                    args[0]
                );
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // One credential store and one index, shared by both front ends
    let credentials = Arc::new(CredentialStore::new());
    let index = Arc::new(DocumentIndex::new());
    let router = Arc::new(RequestRouter::new(credentials, index));

    let app = rpc::handlers::app(router.clone());

    // The socket binding runs as its own loop and stops when the watch
    // channel flips
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let socket_listener = tokio::net::TcpListener::bind(socket_bind).await?;
    let socket_task = {
        let router = router.clone();
        tokio::spawn(async move {
            if let Err(e) = socket::server::run(socket_listener, router, shutdown_rx).await {
                tracing::error!("Socket server terminated with error: {}", e);
            }
        })
    };

    tracing::info!("RPC server listening on {}", rpc_bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(rpc_bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    let _ = shutdown_tx.send(true);
    socket_task.await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    finapi_observability::init();

    let app = finapi_api::app::build_app();

    // Fixed port; there is no configuration surface.
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3333")
        .await
        .expect("failed to bind 0.0.0.0:3333");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

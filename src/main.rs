mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let leptos_conf = leptos::prelude::get_configuration(None).expect("leptos configuration");
    let config =
        config::HostConfig::from_env(leptos_conf.leptos_options.site_addr).expect("invalid host configuration");

    let app = routes::app(leptos_conf.leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.addr, "profile-portal listening");
    axum::serve(listener, app).await.expect("server failed");
}

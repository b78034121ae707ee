//! Start the powerloom application server with its real-time websocket layer.

use powerloom_server::app;
use powerloom_server::config;
use powerloom_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    config::load_dotenv();

    // Development diagnostics on by default; override with RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let state = AppState::new();
    let router = app::build_router(state);

    // Run without any file-watching reloader so the process stays stable
    // across restarts, in particular on platforms where reload-on-change
    // behaves unreliably.
    let addr = format!("{}:{}", config::BIND_ADDR, config::SERVER_PORT);

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("{}", banner_line("        Powerloom Server v0.1.0"));
    println!("  ╠══════════════════════════════════════════════╣");
    println!(
        "{}",
        banner_line(&format!(
            "Running on: http://localhost:{}",
            config::SERVER_PORT
        ))
    );
    println!("  ╚══════════════════════════════════════════════╝");
    println!();

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("listening on {addr}");
    axum::serve(listener, router).await.unwrap();
}

/// Pad one content line to the banner's inner width so the box stays
/// aligned no matter how wide the port renders.
fn banner_line(content: &str) -> String {
    format!("  ║  {content:<44}║")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lines_stay_aligned() {
        let current = banner_line(&format!(
            "Running on: http://localhost:{}",
            config::SERVER_PORT
        ));
        let widest = banner_line("Running on: http://localhost:65535");
        let title = banner_line("        Powerloom Server v0.1.0");

        // Borders are 2 spaces + 48 box chars; content lines must match.
        assert_eq!(current.chars().count(), 50);
        assert_eq!(widest.chars().count(), 50);
        assert_eq!(title.chars().count(), 50);
    }
}

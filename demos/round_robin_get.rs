//! Round-robin HTTP demo.
//!
//! Reads a target hostname from `TARGET_DNS` (defaulting to a Kubernetes
//! service name) and issues a burst of GET requests through a client whose
//! connector dials via DNS round-robin. Run against a multi-replica service
//! to watch responses arrive from different backends.
//!
//! ```sh
//! TARGET_DNS=web.default.svc.cluster.local cargo run --example round_robin_get
//! ```

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use rrdial::connector::RoundRobinConnector;
use rrdial::dialer::{DialerConfig, RoundRobinDialer};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let target =
        std::env::var("TARGET_DNS").unwrap_or_else(|_| "web.default.svc.cluster.local".to_string());

    let dialer = RoundRobinDialer::new(DialerConfig {
        dial_timeout: Duration::from_secs(3),
        keep_alive: Duration::from_secs(10),
        dns_ttl: Duration::from_secs(30),
    });
    let connector = RoundRobinConnector::new(dialer);

    let client: Client<_, Empty<Bytes>> = Client::builder(TokioExecutor::new())
        .pool_max_idle_per_host(0) // force a fresh dial per request
        .build(connector);

    let url: http::Uri = format!("http://{target}/").parse()?;

    println!("Starting requests to {target}...");
    println!("----------------------------------------");

    for i in 1..=15 {
        // A failed request never aborts the run; each attempt is independent.
        match tokio::time::timeout(Duration::from_secs(5), client.get(url.clone())).await {
            Ok(Ok(response)) => {
                let (parts, body) = response.into_parts();
                match body.collect().await {
                    Ok(collected) => {
                        let text = String::from_utf8_lossy(&collected.to_bytes()).into_owned();
                        println!("[{i}] Response from {target} ({}): {}", parts.status, text.trim_end());
                    }
                    Err(e) => println!("[{i}] Failed to read body: {e}"),
                }
            }
            Ok(Err(e)) => println!("[{i}] Request failed: {e}"),
            Err(_) => println!("[{i}] Request failed: timed out"),
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    Ok(())
}

//! Trapwire Sender Main Entry Point
//!
//! Builds one "agent data" batch, submits it over TCP, and prints the
//! server's decoded reply. The submission runs as its own task and reports
//! back through a single-slot channel; configuration failures abort the run
//! before any network attempt is made.

use anyhow::{Context, Result};
use config::{resolve_config_path, SenderConfig};
use tokio::sync::oneshot;
use tracing::{info, warn};
use transport::TrapperClient;
use types::{MetricBatch, MetricRecord, TrapperResponse};

#[tokio::main]
async fn main() -> Result<()> {
    // Fatal before any network attempt: no address, no submission.
    let config_path = resolve_config_path("TRAPWIRE_CONFIG_PATH", "configs/sender.toml");
    let config = SenderConfig::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    init_logging(&config.agent.loglevel);

    info!("Starting Trapwire sender");

    let address = config
        .server_address()
        .context("Configuration does not yield a usable server address")?;

    info!(server = %address, "Submitting agent data");

    let batch = demo_batch().context("Failed to build metric batch")?;
    let frame = codec::encode(&batch).context("Failed to encode metric batch")?;

    // One submission as an independent task, reporting completion through
    // a single-slot rendezvous channel.
    let (done_tx, done_rx) = oneshot::channel();
    let client = TrapperClient::new();
    tokio::spawn(async move {
        let result = client.send(&address, &frame).await;
        let _ = done_tx.send(result);
    });

    let response = done_rx
        .await
        .context("Submission task ended without reporting")?
        .context("Submission failed")?;

    let payload = codec::decode(&response).context("Server reply failed envelope validation")?;

    // The core does not validate the reply body; parsing it is best-effort.
    match serde_json::from_slice::<TrapperResponse>(payload) {
        Ok(reply) => {
            if reply.is_success() {
                info!(info = %reply.info, "Server accepted submission");
            } else {
                warn!(response = %reply.response, info = %reply.info, "Server rejected submission");
            }
            println!("{}: {}", reply.response, reply.info);
        }
        Err(e) => {
            warn!("Reply payload is not a trapper response: {}", e);
            println!("{}", String::from_utf8_lossy(payload));
        }
    }

    Ok(())
}

/// Initialize tracing from the configured level, overridable via RUST_LOG.
fn init_logging(loglevel: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(loglevel.to_string()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// The reference submission: one float sample with a bracketed item key.
fn demo_batch() -> Result<MetricBatch> {
    let record = MetricRecord::new(
        "host_test",
        r#"key_test["{$URL}","github","{$HOST}","space_use"]"#,
        99.87,
        1566481943,
    )?;

    Ok(MetricBatch::new(vec![record]))
}

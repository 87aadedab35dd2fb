//! Ocular shell binary.
//!
//! Wires the host message channel to the overlay controller. Host payloads
//! arrive as one JSON object per stdin line; `click <n>` activates the n-th
//! card of the current frame. Derived frames go to stdout as JSON lines
//! (`null` when the overlay is blank); logs go to stderr or, if
//! `OCULAR_LOG_PATH` is set, to that file.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::filter::EnvFilter;

use ocular_core::{config, HostClient, MenuController, MenuFrame};
use ocular_shell::{run_menu_bridge, BridgeInput};

#[tokio::main]
async fn main() {
    init_logging();

    let config = config::load();
    let client = HostClient::new(&config.resource);
    let mut controller =
        MenuController::new(client.clone(), Duration::from_millis(config.cooldown_ms));
    controller.set_main_color(&config.default_color);

    let (tx, rx) = mpsc::channel(64);

    // Startup theme fetch. The result is applied only if the bridge is still
    // running; failure keeps the default color, no retry.
    let color_tx = tx.clone();
    tokio::spawn(async move {
        match client.get_server_color().await {
            Ok(Some(color)) => {
                let _ = color_tx.send(BridgeInput::MainColor(color)).await;
            }
            Ok(None) => {}
            Err(err) => tracing::debug!("server color fetch failed, keeping default: {err}"),
        }
    });

    let bridge = tokio::spawn(run_menu_bridge(rx, controller, emit_frame));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(index) = line.strip_prefix("click ") {
            match index.trim().parse::<usize>() {
                Ok(index) => {
                    if tx.send(BridgeInput::Click(index)).await.is_err() {
                        break;
                    }
                }
                Err(_) => tracing::trace!("ignoring malformed click line"),
            }
            continue;
        }

        match serde_json::from_str::<serde_json::Value>(line) {
            Ok(payload) => {
                if tx.send(BridgeInput::Host(payload)).await.is_err() {
                    break;
                }
            }
            Err(err) => tracing::trace!("ignoring non-JSON input line: {err}"),
        }
    }

    drop(tx);
    let _ = bridge.await;
}

fn emit_frame(frame: Option<&MenuFrame>) {
    match frame {
        Some(frame) => match serde_json::to_string(frame) {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::debug!("frame serialization failed: {err}"),
        },
        None => println!("null"),
    }
}

/// Initialize logging, writing to OCULAR_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("OCULAR_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new().create(true).append(true).open(&path) {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

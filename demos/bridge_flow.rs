//! Walks through a DaVinci → Optimism transfer and reports each UI step
//!
//! Events go to the `tracing` collector, so they show up on stdout.
//! Set `DAVINCI_ANALYTICS_ENABLED=false` (in the shell or a `.env` file) to
//! watch the same flow run with tracking switched off.
//!
//! Run with: `cargo run --example bridge_flow`

use davinci_bridge::app::{APP_NAME, APP_URL};
use davinci_bridge::providers::TracingCollector;
use davinci_bridge::{
    Analytics, AnalyticsConfig, BridgeChain, BridgeError, BridgeInitiated, ChainDirection,
    ChainSelected, TokenSelected, WalletConnected,
};
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), BridgeError> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("davinci_bridge=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("🌉 {APP_NAME} ({APP_URL})");

    let config = AnalyticsConfig::from_env();
    let analytics = Analytics::from_config(&config, TracingCollector::new());
    println!("Analytics enabled: {}\n", analytics.is_enabled());

    let origin: BridgeChain = "davinci".parse()?;
    let destination = BridgeChain::try_from(10)?;

    println!("1️⃣ Connecting wallet on {origin}...");
    analytics.track_wallet_connected(
        WalletConnected::builder()
            .wallet_type("metamask")
            .chain(origin.name())
            .build(),
    );

    println!("2️⃣ Selecting route {origin} → {destination}...");
    for (chain, direction) in [
        (origin, ChainDirection::Origin),
        (destination, ChainDirection::Destination),
    ] {
        analytics.track_chain_selected(
            ChainSelected::builder()
                .chain(chain.name())
                .direction(direction)
                .build(),
        );
    }

    let token = origin.native_token_symbol();
    println!("3️⃣ Selecting token {token}...");
    analytics.track_token_selected(
        TokenSelected::builder()
            .token(token)
            .chain(origin.name())
            .build(),
    );

    println!("4️⃣ Submitting transfer...");
    let transfer = BridgeInitiated::builder()
        .from_chain(origin.name())
        .to_chain(destination.name())
        .token(token)
        .amount("100")
        .build();
    analytics.track_bridge_initiated(transfer.clone());

    let tx_hash = "0x5d2b7c0e4f1a9b3c8d6e2f0a1b4c7d9e3f5a8b0c2d4e6f8a1b3c5d7e9f0a2b4c";
    analytics.track_bridge_completed(transfer.completed(tx_hash));

    let metadata = destination.metadata();
    if let Some(explorer) = metadata.primary_explorer() {
        println!("\n✅ Transfer complete: {}", explorer.tx_url(tx_hash)?);
    }

    Ok(())
}

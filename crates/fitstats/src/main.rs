use std::env;
use std::fs;

use anyhow::Context;
use fitstats::models::SensorPacket;
use fitstats::packets::read_packet;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Demo batch matching the reference sensor feed.
fn demo_packets() -> Vec<SensorPacket> {
    vec![
        SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn load_packets(path: &str) -> anyhow::Result<Vec<SensorPacket>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("Failed to read packet file {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid packet file {path}"))
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let packets = match env::args().nth(1) {
        Some(path) => {
            tracing::info!("Reading packets from {path}");
            load_packets(&path)?
        }
        None => {
            tracing::info!("No packet file given, using the built-in demo batch");
            demo_packets()
        }
    };

    let as_json = env::var("WORKOUTS_FORMAT").is_ok_and(|v| v == "json");

    for packet in &packets {
        let workout = read_packet(packet)
            .with_context(|| format!("Failed to process packet {packet:?}"))?;
        let summary = workout.summary();
        if as_json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!("{summary}");
        }
    }

    tracing::info!("Processed {} packets", packets.len());
    Ok(())
}

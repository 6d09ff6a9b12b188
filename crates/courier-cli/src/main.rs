//! Courier session derivation demo
//!
//! Loads a world-state document, derives the session for one developer,
//! chain, and block checkpoint, and prints the seated nodes.

use std::env;

use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courier_chain::ChainDescriptor;
use courier_session::{adapt_pool, Node, Seed, Session};
use courier_worldstate::load_pool;

#[derive(Serialize)]
struct SeatReport {
    gid: String,
    ip: String,
    port: String,
    role: String,
}

impl From<&Node> for SeatReport {
    fn from(node: &Node) -> Self {
        Self {
            gid: node.gid.clone(),
            ip: node.ip.clone(),
            port: node.port.clone(),
            role: node.role.to_string(),
        }
    }
}

#[derive(Serialize)]
struct SessionReport {
    key: String,
    chain: String,
    developer: String,
    validators: Vec<SeatReport>,
    servicers: Vec<SeatReport>,
    delegated_minter: SeatReport,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courier=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();
    let as_json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args[1..].iter().filter(|a| *a != "--json").collect();

    let (Some(path), Some(dev_hex), Some(block_hex), Some(chain_name)) = (
        positional.first(),
        positional.get(1),
        positional.get(2),
        positional.get(3),
    ) else {
        print_usage();
        std::process::exit(2);
    };
    let net_id = positional.get(4).map(|s| s.as_str()).unwrap_or("1");
    let version = positional.get(5).map(|s| s.as_str()).unwrap_or("1");

    let dev_id = hex::decode(dev_hex)?;
    let block_hash = hex::decode(block_hex)?;

    let records = load_pool(path)?;
    let pool = adapt_pool(&records)?;
    let candidates = pool.len();
    tracing::info!(
        records = records.len(),
        candidates,
        "world state adapted"
    );

    let descriptor = ChainDescriptor::new(chain_name.as_str(), net_id, version);
    let requested = descriptor.fingerprint()?;

    let seed = Seed::new(dev_id, pool, &requested, block_hash);
    let session = Session::derive(&seed)?;

    if as_json {
        let report = SessionReport {
            key: session.key.to_hex(),
            chain: descriptor.to_string(),
            developer: hex::encode(&session.dev_id),
            validators: session.nodes.validator_nodes.iter().map(Into::into).collect(),
            servicers: session.nodes.service_nodes.iter().map(Into::into).collect(),
            delegated_minter: (&session.nodes.delegated_minter).into(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Courier Session Derivation");
    println!("==========================");
    println!();
    println!("World state:  {} records, {} candidates", records.len(), candidates);
    println!("Chain:        {} ({})", descriptor, requested);
    println!("Session key:  {}", session.key.to_hex());
    println!();
    println!("Validator seats:");
    for (i, seat) in session.nodes.validator_nodes.iter().enumerate() {
        let minter = if *seat == session.nodes.delegated_minter {
            "  (delegated minter)"
        } else {
            ""
        };
        println!("  {}. {}@{}:{}{}", i + 1, seat.gid, seat.ip, seat.port, minter);
    }
    println!();
    println!("Service seats:");
    for (i, seat) in session.nodes.service_nodes.iter().enumerate() {
        println!("  {}. {}@{}:{}", i + 1, seat.gid, seat.ip, seat.port);
    }

    Ok(())
}

fn print_usage() {
    println!("Usage: courier <world-state.json> <dev-id-hex> <block-hash-hex> <chain> [net-id] [version] [--json]");
    println!();
    println!("Derives the relay session for one developer, chain, and block checkpoint.");
    println!("  <dev-id-hex>      the developer identity, 64 hex chars");
    println!("  <block-hash-hex>  the checkpoint block hash, 64 hex chars");
    println!("  [net-id]          decimal network id, default 1");
    println!("  [version]         decimal chain version, default 1");
    println!("  --json            emit the session as JSON instead of text");
}

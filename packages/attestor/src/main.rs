use std::io::Read;

use attestor::{AttestorConfig, PermitOrder, PermitSigner};
use eyre::WrapErr;

fn main() -> eyre::Result<()> {
    // Install color-eyre for better error reporting
    color_eyre::install()?;
    init_logging();

    let config = AttestorConfig::load()?;
    let signer = PermitSigner::from_config(&config)?;
    tracing::info!(
        chain_id = config.chain_id,
        bridge = %config.bridge_address,
        attestor = %signer.address_hex(),
        "Configuration loaded"
    );

    // Order JSON comes from the path given as the first argument, or stdin
    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read order file {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .wrap_err("Failed to read order from stdin")?;
            buf
        }
    };

    let order: PermitOrder = serde_json::from_str(&raw).wrap_err("Invalid permit order JSON")?;
    let signed = order.sign(&signer)?;

    println!("{}", serde_json::to_string_pretty(&signed)?);
    Ok(())
}

/// Structured logs go to stderr so stdout carries only the signed permit.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,attestor=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

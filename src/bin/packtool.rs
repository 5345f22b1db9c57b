//! Pack/unpack command line utility
//! Converts between JSON number arrays and hex-encoded byte buffers

use packfmt::{pack, unpack, Value};
use std::env;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} pack <format> <json-values>", args[0]);
        eprintln!("       {} unpack <format> <hex-bytes>", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} pack 'S>L>q>' '[45, 1234, -90000]'", args[0]);
        eprintln!("  {} unpack 'C*' '6100626364'", args[0]);
        std::process::exit(1);
    }

    let format = &args[2];

    match args[1].as_str() {
        "pack" => {
            let values: Vec<Value> = serde_json::from_str(&args[3])?;
            let buffer = pack(&values, format)?;
            tracing::info!("packed {} values into {} bytes", values.len(), buffer.len());
            println!("{}", to_hex(&buffer));
        }
        "unpack" => {
            let buffer = from_hex(&args[3])?;
            let values = unpack(&buffer, format)?;
            tracing::info!("unpacked {} values from {} bytes", values.len(), buffer.len());
            println!("{}", serde_json::to_string(&values)?);
        }
        other => anyhow::bail!("unknown command: {}", other),
    }

    Ok(())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn from_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        anyhow::bail!("hex input has odd length");
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| Ok(u8::from_str_radix(&digits[i..i + 2], 16)?))
        .collect()
}

/*
[INPUT]:  Symbol identifier (e.g., "btc_usd")
[OUTPUT]: Market data (ticker, depth, klines, futures ticker)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use okex_v1_adapter::*;

/// Example: Query market data (no authentication required)
///
/// These endpoints are public and don't require API credentials.
#[tokio::main]
async fn main() {
    println!("=== OKEx v1 Market Data Example ===\n");

    // Create client (no credentials needed for public endpoints)
    let client = match OkexClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let symbol = "btc_usd";

    // Latest ticker
    println!("Querying ticker for {}...", symbol);
    match client.ticker(symbol).await {
        Ok(ticker) => println!("✓ Ticker: {}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Order book with default size/merge
    println!("\nQuerying depth for {}...", symbol);
    match client.depth(DepthRequest::new(symbol)).await {
        Ok(depth) => println!("✓ Depth: {}", depth),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Last five 1-minute candles
    println!("\nQuerying 1min klines for {}...", symbol);
    let mut kline_request = KlineRequest::new(symbol, KlineInterval::Min1);
    kline_request.size = Some(5);
    match client.kline(kline_request).await {
        Ok(klines) => println!("✓ Klines: {}", klines),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Quarterly futures ticker
    println!("\nQuerying quarterly futures ticker for {}...", symbol);
    match client.future_ticker(symbol, Some(ContractType::Quarter)).await {
        Ok(ticker) => println!("✓ Futures ticker: {}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}

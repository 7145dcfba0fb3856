/*
[INPUT]:  API credentials (OKEX_API_KEY / OKEX_SECRET_KEY) and order parameters
[OUTPUT]: Account balances and a signed order request
[POS]:    Examples - signed trading operations
[UPDATE]: When trading API changes
*/

use std::str::FromStr;

use okex_v1_adapter::*;
use rust_decimal::Decimal;

/// Example: Signed operations (requires API credentials)
///
/// Signed endpoints require:
/// 1. An api_key issued by the exchange
/// 2. An MD5 signature over the sorted form parameters
#[tokio::main]
async fn main() {
    println!("=== OKEx v1 Trading Example ===\n");

    let api_key = std::env::var("OKEX_API_KEY").unwrap_or_default();
    let secret_key = std::env::var("OKEX_SECRET_KEY").unwrap_or_default();

    if api_key.is_empty() || secret_key.is_empty() {
        println!("Set OKEX_API_KEY and OKEX_SECRET_KEY to run signed calls.");
        println!("Showing request construction only.\n");

        let order_request = PlaceOrderRequest::limit_buy(
            "btc_usd",
            Decimal::from_str("680").unwrap_or_default(),
            Decimal::from_str("0.1").unwrap_or_default(),
        );
        println!("Example order request:");
        println!("  {:?}", order_request);

        let mut params = order_request.wire_params();
        params.insert("api_key", "your-api-key".to_string());
        let signature = RequestSigner::new("your-secret-key").sign(&params);
        println!("\nSignature over the sorted fields: {}", signature);
        return;
    }

    let client = match OkexClient::with_credentials(Credentials::new(api_key, secret_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created with credentials\n");

    // Account balances
    println!("Querying account info...");
    match client.user_info().await {
        Ok(info) => println!("✓ Account: {}", info),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Unfilled orders for btc_usd
    println!("\nQuerying unfilled orders for btc_usd...");
    match client.order_info("btc_usd", -1).await {
        Ok(orders) => println!("✓ Orders: {}", orders),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Placing a real order is left commented out:
    // let order_request = PlaceOrderRequest::limit_buy(
    //     "btc_usd",
    //     Decimal::from_str("680")?,
    //     Decimal::from_str("0.1")?,
    // );
    // let response = client.place_order(order_request).await?;

    println!("\n✓ Trading example complete");
}

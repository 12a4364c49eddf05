//! Look up an address with the geocoding API.
//!
//! Usage:
//!   NCP_CLIENT_ID=... NCP_CLIENT_SECRET=... cargo run --example geocode_lookup -- "분당구 불정로 6"

use ncloud_adapter::{GeocodeClient, GeocodeQuery, Lang};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client_id = std::env::var("NCP_CLIENT_ID")?;
    let client_secret = std::env::var("NCP_CLIENT_SECRET")?;
    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "분당구 불정로 6".to_string());

    let client = GeocodeClient::new(client_id, client_secret)?;
    let query = GeocodeQuery::new(address).language(Lang::Eng).count(5);

    let response = client.geocode(&query).await?;
    println!("total: {}", response.meta.total_count);
    for addr in response.addresses {
        println!("{} ({}, {})", addr.road_address, addr.x, addr.y);
    }
    Ok(())
}

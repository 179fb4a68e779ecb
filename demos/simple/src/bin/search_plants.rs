use trefle_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let query = std::env::args().nth(1).unwrap_or_else(|| "tomato".to_string());
    let what: SearchTarget = std::env::args()
        .nth(2)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or_default();

    let client = Client::from_env()?;
    let results = client.search(&query, what, QueryParams::new()).await?;

    for item in results["data"].as_array().into_iter().flatten() {
        info!(
            "{} ({})",
            item["scientific_name"].as_str().unwrap_or("?"),
            item["common_name"].as_str().unwrap_or("no common name")
        );
    }
    Ok(())
}

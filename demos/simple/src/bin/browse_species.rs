use trefle_client::prelude::*;

/// Walks the first pages of `/species` filtered by common name
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_env()?;
    info!("{}", client);

    let params = QueryParams::new()
        .filter_not("common_name", "null")
        .order("common_name", SortOrder::Asc);
    let mut page = Some(client.species(None, params).await?);
    let mut pages = 0;

    while let Some(body) = page.take() {
        let envelope = ResponseEnvelope::from_value(body)?;
        pages += 1;
        info!(
            "Page {} ({} species in total): {}",
            pages,
            envelope.total().unwrap_or_default(),
            envelope.links.self_link.as_deref().unwrap_or("-")
        );
        if let Some(first) = envelope.data.get(0) {
            info!("First entry: {}", first["common_name"]);
        }
        if pages == 3 {
            break;
        }
        page = client.next(QueryParams::new()).await?;
    }

    Ok(())
}

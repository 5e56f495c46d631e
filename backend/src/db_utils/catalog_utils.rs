//! Property catalog, loaded once per process.

use anyhow::Context;
use common::property::Property;
use tokio::sync::OnceCell;
use tracing::info;

const SEED_CATALOG: &str = include_str!("../../data/properties.json");

static CATALOG: OnceCell<Vec<Property>> = OnceCell::const_new();

pub fn parse_catalog(json: &str) -> anyhow::Result<Vec<Property>> {
    let properties: Vec<Property> = serde_json::from_str(json).context("Failed to parse property catalog")?;
    Ok(properties)
}

async fn load_catalog() -> anyhow::Result<Vec<Property>> {
    let path = std::env::var("AUCTION_CATALOG_PATH").unwrap_or("".to_string());
    if path.is_empty() {
        let properties = parse_catalog(SEED_CATALOG)?;
        info!("Loaded {} properties from the seed catalog", properties.len());
        return Ok(properties);
    }
    let json = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read property catalog {path}"))?;
    let properties = parse_catalog(&json)?;
    info!("Loaded {} properties from {}", properties.len(), path);
    Ok(properties)
}

pub async fn get_catalog() -> anyhow::Result<&'static [Property]> {
    let properties = CATALOG.get_or_try_init(load_catalog).await?;
    Ok(properties.as_slice())
}

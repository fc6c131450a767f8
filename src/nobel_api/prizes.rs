use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::{NobelError, Result};
use crate::model::{Category, Prize, PrizeResponse};
use crate::nobel_api::{self, BASE_URL};

#[instrument(skip(client))]
pub(crate) async fn get_prizes(client: &reqwest::Client) -> Result<Vec<Prize>> {
    fetch_prizes(client, &prizes_url(None, None)).await
}

#[instrument(skip(client))]
pub(crate) async fn get_prizes_filtered(
    client: &reqwest::Client,
    category: Option<Category>,
    year: Option<u16>,
) -> Result<Vec<Prize>> {
    fetch_prizes(client, &prizes_url(category, year)).await
}

async fn fetch_prizes(client: &reqwest::Client, url: &str) -> Result<Vec<Prize>> {
    let response: PrizeResponse = nobel_api::get_json(client, url).await?;
    let prizes = response.prizes.ok_or_else(|| NobelError::MissingPrizes {
        url: url.to_owned(),
    })?;
    debug!(count = prizes.len(), "fetched prize list");
    Ok(prizes)
}

fn prizes_url(category: Option<Category>, year: Option<u16>) -> String {
    let query = [
        category.map(|c| format!("category={c}")),
        year.map(|y| format!("year={y}")),
    ]
    .into_iter()
    .flatten()
    .join("&");

    if query.is_empty() {
        format!("{BASE_URL}/prize.json")
    } else {
        format!("{BASE_URL}/prize.json?{query}")
    }
}

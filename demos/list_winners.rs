use nobel_client::model::FILTER_YEARS;
use nobel_client::{Catalog, NobelClient, PrizeFilter};

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    let category = args.next();
    let year = args.next().map(|raw| raw.parse::<u16>().expect("year must be a number"));

    if let Some(year) = year {
        if !FILTER_YEARS.contains(&year) {
            eprintln!(
                "Year {year} is outside {}..={}",
                FILTER_YEARS.start(),
                FILTER_YEARS.end()
            );
            std::process::exit(1);
        }
    }

    let client = NobelClient::new();
    let prizes = client.get_prizes().await.unwrap();
    let mut catalog = Catalog::new(prizes);

    println!("Categories: {}", catalog.categories().join(", "));

    if let Some(category) = &category {
        if !catalog.categories().contains(&category.as_str()) {
            eprintln!("Unknown category: {category}");
            std::process::exit(1);
        }
    }

    if category.is_some() || year.is_some() {
        catalog.set_filter(PrizeFilter { category, year });
    }

    println!("\nPrizes:");
    for prize in catalog.visible() {
        let names = prize
            .laureates
            .iter()
            .map(|l| l.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} {}: {}", prize.year, prize.category, names);
    }

    let mut winners = catalog.multi_winners().to_vec();
    winners.sort_by_key(|w| w.prize.year);

    println!("\nMulti-time winners:");
    for winner in &winners {
        let name = winner
            .prize
            .laureates
            .iter()
            .find(|l| l.id.as_deref() == Some(winner.laureate_id.as_str()))
            .map(|l| l.display_name())
            .unwrap_or_default();
        println!(
            "{} won {} times, first in {} ({})",
            name, winner.count, winner.prize.year, winner.prize.category
        );
    }
}

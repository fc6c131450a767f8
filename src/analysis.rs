use std::collections::HashMap;

use itertools::Itertools;

use crate::model::{MultiWinner, Prize};

/// Find laureates credited on more than one prize.
///
/// Counts every laureate mention that carries an id; laureates without an
/// id cannot be matched across prizes and are skipped. Each returned entry
/// pairs the total mention count with the first prize in input order that
/// credits the laureate. Results are ordered by that prize's position in
/// the input; sort by `prize.year` for the usual presentation order.
pub fn find_multi_time_winners(prizes: &[Prize]) -> Vec<MultiWinner> {
    struct Tally {
        count: u32,
        first_index: usize,
    }

    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    for (index, prize) in prizes.iter().enumerate() {
        for laureate in &prize.laureates {
            let Some(id) = laureate.id.as_deref() else {
                continue;
            };
            tallies
                .entry(id)
                .or_insert(Tally {
                    count: 0,
                    first_index: index,
                })
                .count += 1;
        }
    }

    let mut winners = tallies
        .into_iter()
        .filter(|(_, tally)| tally.count > 1)
        .map(|(id, tally)| (tally.first_index, id, tally.count))
        .collect_vec();
    winners.sort_unstable();

    winners
        .into_iter()
        .map(|(index, id, count)| MultiWinner {
            laureate_id: id.to_owned(),
            count,
            prize: prizes[index].clone(),
        })
        .collect()
}

/// Filter prizes by optional category and year.
///
/// A prize passes when every filter that is set matches. An empty result
/// is a valid outcome, distinct from "no filter set".
pub fn filter_prizes<'a>(
    prizes: &'a [Prize],
    category: Option<&str>,
    year: Option<u16>,
) -> Vec<&'a Prize> {
    prizes
        .iter()
        .filter(|prize| category.is_none_or(|c| prize.category == c))
        .filter(|prize| year.is_none_or(|y| prize.year == y))
        .collect()
}

/// Distinct category labels observed in the prize list, first-seen order.
pub fn distinct_categories(prizes: &[Prize]) -> Vec<&str> {
    prizes
        .iter()
        .map(|prize| prize.category.as_str())
        .unique()
        .collect()
}

use crate::analysis;
use crate::model::{MultiWinner, Prize};

/// Filter selection applied to a catalog. A field left `None` matches
/// every prize.
#[derive(Debug, Clone, Default)]
pub struct PrizeFilter {
    pub category: Option<String>,
    pub year: Option<u16>,
}

/// A loaded prize list together with the current filter selection and the
/// once-computed multi-winner list.
///
/// The selection is an `Option<PrizeFilter>` so that "no filter applied"
/// (every prize visible) stays distinct from "filter applied with zero
/// matches" (nothing visible).
#[derive(Debug, Clone)]
pub struct Catalog {
    prizes: Vec<Prize>,
    filter: Option<PrizeFilter>,
    multi_winners: Vec<MultiWinner>,
}

impl Catalog {
    /// Build a catalog from a fetched prize list. Multi-winners are
    /// computed here, once per load.
    pub fn new(prizes: Vec<Prize>) -> Self {
        let multi_winners = analysis::find_multi_time_winners(&prizes);
        Self {
            prizes,
            filter: None,
            multi_winners,
        }
    }

    /// The full loaded prize list, regardless of filter state.
    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    /// The current selection, if one is applied.
    pub fn filter(&self) -> Option<&PrizeFilter> {
        self.filter.as_ref()
    }

    pub fn set_filter(&mut self, filter: PrizeFilter) {
        self.filter = Some(filter);
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    /// Prizes matching the current selection; the full list when none is set.
    pub fn visible(&self) -> Vec<&Prize> {
        match &self.filter {
            Some(filter) => {
                analysis::filter_prizes(&self.prizes, filter.category.as_deref(), filter.year)
            }
            None => self.prizes.iter().collect(),
        }
    }

    /// Category labels observed in the loaded list, first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        analysis::distinct_categories(&self.prizes)
    }

    /// Laureates credited on more than one prize.
    pub fn multi_winners(&self) -> &[MultiWinner] {
        &self.multi_winners
    }
}

use super::{error::AppError, skip::Skip};
use serde::{Deserialize, Serialize};

/// Orderings offered by the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    SizeAsc,
    SizeDesc,
    PriceAsc,
    PriceDesc,
}

impl SortOption {
    /// Value used for `<option>` elements and storage.
    pub fn value(&self) -> &'static str {
        match self {
            SortOption::SizeAsc => "size-asc",
            SortOption::SizeDesc => "size-desc",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::SizeAsc => "Size (Small to Large)",
            SortOption::SizeDesc => "Size (Large to Small)",
            SortOption::PriceAsc => "Price (Low to High)",
            SortOption::PriceDesc => "Price (High to Low)",
        }
    }

    pub fn all() -> &'static [SortOption] {
        &[
            SortOption::SizeAsc,
            SortOption::SizeDesc,
            SortOption::PriceAsc,
            SortOption::PriceDesc,
        ]
    }
}

impl std::str::FromStr for SortOption {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::all()
            .iter()
            .copied()
            .find(|option| option.value() == s)
            .ok_or_else(|| AppError::ConfigError(format!("Invalid sort option: {s}")))
    }
}

/// Returns a sorted copy of `skips`. Ties keep their fetched order.
pub fn sort_skips(skips: &[Skip], option: SortOption) -> Vec<Skip> {
    let mut sorted = skips.to_vec();
    match option {
        SortOption::SizeAsc => sorted.sort_by(|a, b| a.size.cmp(&b.size)),
        SortOption::SizeDesc => sorted.sort_by(|a, b| b.size.cmp(&a.size)),
        SortOption::PriceAsc => {
            sorted.sort_by(|a, b| a.price_before_vat.total_cmp(&b.price_before_vat));
        }
        SortOption::PriceDesc => {
            sorted.sort_by(|a, b| b.price_before_vat.total_cmp(&a.price_before_vat));
        }
    }
    sorted
}

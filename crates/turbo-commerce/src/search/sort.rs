//! Sort options for product listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    #[default]
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by rating, lowest first.
    RatingAsc,
    /// Sort by rating, highest first.
    RatingDesc,
}

impl SortOption {
    /// Every option, in menu order.
    pub const ALL: [SortOption; 6] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
        SortOption::RatingAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::RatingAsc => "rating-asc",
            SortOption::RatingDesc => "rating-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::RatingAsc => "Rating: Low to High",
            SortOption::RatingDesc => "Rating: High to Low",
        }
    }

    /// Compare two products under this option.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::PriceAsc => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortOption::PriceDesc => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortOption::NameAsc => compare_names(&a.name, &b.name),
            SortOption::NameDesc => compare_names(&b.name, &a.name),
            SortOption::RatingAsc => a.rating_or_zero().total_cmp(&b.rating_or_zero()),
            SortOption::RatingDesc => b.rating_or_zero().total_cmp(&a.rating_or_zero()),
        }
    }
}

/// Case-insensitive first, so "apple" sorts next to "Apple".
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a sort key is not one of the known options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option '{0}' (expected one of: price-asc, price-desc, name-asc, name-desc, rating-asc, rating-desc)")]
pub struct ParseSortError(String);

impl FromStr for SortOption {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .iter()
            .copied()
            .find(|opt| opt.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSortError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_parse_roundtrip() {
        for opt in SortOption::ALL {
            assert_eq!(opt.as_str().parse::<SortOption>().unwrap(), opt);
        }
        assert_eq!("PRICE-DESC".parse::<SortOption>().unwrap(), SortOption::PriceDesc);
        assert!("newest".parse::<SortOption>().is_err());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&SortOption::RatingDesc).unwrap();
        assert_eq!(json, r#""rating-desc""#);
    }

    #[test]
    fn test_name_compare_ignores_case() {
        let a = Product::new("1", "apple", Money::usd(1.0));
        let b = Product::new("2", "Banana", Money::usd(1.0));
        assert_eq!(SortOption::NameAsc.compare(&a, &b), Ordering::Less);
        assert_eq!(SortOption::NameDesc.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_missing_rating_sorts_as_zero() {
        let rated = Product::new("1", "A", Money::usd(1.0)).with_rating(0.5);
        let unrated = Product::new("2", "B", Money::usd(1.0));
        assert_eq!(SortOption::RatingAsc.compare(&unrated, &rated), Ordering::Less);
    }
}

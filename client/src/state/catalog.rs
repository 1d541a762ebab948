//! Client-side filtering for the shop, roster, and teams pages.
//!
//! All lists are fetched whole; narrowing and ordering happen here.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use wire::{Athlete, ShopProduct, Team};

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

/// Distinct values in first-seen order, blanks skipped.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !out.iter().any(|v| v == value) {
            out.push(value.to_owned());
        }
    }
    out
}

// =============================================================================
// SHOP
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShopSort {
    /// API order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
}

impl ShopSort {
    pub const ALL: [Self; 3] = [Self::Featured, Self::PriceLow, Self::PriceHigh];

    pub fn value(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.value() == value).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShopFilter {
    pub search: String,
    /// `None` shows every category.
    pub category: Option<String>,
    pub sort: ShopSort,
    pub in_stock_only: bool,
}

impl ShopFilter {
    pub fn matches(&self, product: &ShopProduct) -> bool {
        contains_ignore_case(&product.name, &self.search)
            && self.category.as_ref().is_none_or(|c| *c == product.category)
            && (!self.in_stock_only || product.in_stock())
    }

    pub fn apply(&self, products: &[ShopProduct]) -> Vec<ShopProduct> {
        let mut out: Vec<ShopProduct> = products.iter().filter(|p| self.matches(p)).cloned().collect();
        match self.sort {
            ShopSort::Featured => {}
            ShopSort::PriceLow => out.sort_by(|a, b| a.price.total_cmp(&b.price)),
            ShopSort::PriceHigh => out.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }
        out
    }

    pub fn clear(&mut self) {
        *self = Self { sort: self.sort, ..Self::default() };
    }
}

pub fn shop_categories(products: &[ShopProduct]) -> Vec<String> {
    distinct(products.iter().map(|p| p.category.as_str()))
}

// =============================================================================
// ROSTER
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterFilter {
    /// Matched against "first last".
    pub search: String,
    pub sport: Option<String>,
}

impl RosterFilter {
    pub fn matches(&self, athlete: &Athlete) -> bool {
        let name = format!("{} {}", athlete.first_name, athlete.last_name);
        contains_ignore_case(&name, &self.search) && self.sport.as_ref().is_none_or(|s| *s == athlete.sport)
    }

    pub fn apply(&self, athletes: &[Athlete]) -> Vec<Athlete> {
        athletes.iter().filter(|a| self.matches(a)).cloned().collect()
    }
}

/// Sports present on the roster, in first-seen order.
pub fn roster_sports(athletes: &[Athlete]) -> Vec<String> {
    distinct(athletes.iter().map(|a| a.sport.as_str()))
}

// =============================================================================
// TEAMS
// =============================================================================

/// Teams grouped under their sport, groups in first-seen order.
pub fn group_teams_by_sport(teams: &[Team]) -> Vec<(String, Vec<Team>)> {
    let mut groups: Vec<(String, Vec<Team>)> = Vec::new();
    for team in teams {
        match groups.iter_mut().find(|(sport, _)| *sport == team.sport_name) {
            Some((_, members)) => members.push(team.clone()),
            None => groups.push((team.sport_name.clone(), vec![team.clone()])),
        }
    }
    groups
}

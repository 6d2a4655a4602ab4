//! Casino catalog entries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{PayoutSpeed, StarRating, ValidationError};

/// Presentation-only fields. Never read by scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CasinoDisplay {
    pub logo: String,
    pub promo_code: String,
    pub review_url: String,
    pub affiliate_url: String,
    pub bonus_text: String,
    pub slot_games: String,
    pub has_packages: bool,
    pub has_vip: bool,
}

/// One casino in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Casino {
    pub name: String,
    pub rating: StarRating,
    #[serde(default)]
    pub types: HashSet<String>,
    #[serde(default)]
    pub games: HashSet<String>,
    #[serde(default)]
    pub banking: HashSet<String>,
    pub payout_speed: PayoutSpeed,
    #[serde(flatten)]
    pub display: CasinoDisplay,
}

impl Casino {
    /// Creates a casino with empty category sets and display fields.
    pub fn new(name: impl Into<String>, rating: StarRating, payout_speed: PayoutSpeed) -> Self {
        Self {
            name: name.into(),
            rating,
            types: HashSet::new(),
            games: HashSet::new(),
            banking: HashSet::new(),
            payout_speed,
            display: CasinoDisplay::default(),
        }
    }

    /// Sets the casino types.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the supported games.
    pub fn with_games<I, S>(mut self, games: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.games = games.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the supported banking methods.
    pub fn with_banking<I, S>(mut self, banking: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.banking = banking.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the display fields.
    pub fn with_display(mut self, display: CasinoDisplay) -> Self {
        self.display = display;
        self
    }
}

/// The validated, ordered list of casinos for a quiz.
///
/// Order matters: it is the final tie-break when ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    casinos: Vec<Casino>,
}

impl Catalog {
    /// Builds a catalog, rejecting blank or duplicate names.
    pub fn new(casinos: Vec<Casino>) -> Result<Self, ValidationError> {
        let mut names = HashSet::new();
        for casino in &casinos {
            if casino.name.trim().is_empty() {
                return Err(ValidationError::empty_field("casino.name"));
            }
            if !names.insert(casino.name.as_str()) {
                return Err(ValidationError::duplicate("casino.name", casino.name.as_str()));
            }
        }
        Ok(Self { casinos })
    }

    /// Returns an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of casinos.
    pub fn len(&self) -> usize {
        self.casinos.len()
    }

    /// Returns true if the catalog has no casinos.
    pub fn is_empty(&self) -> bool {
        self.casinos.is_empty()
    }

    /// Returns the casino with the given name.
    pub fn find(&self, name: &str) -> Option<&Casino> {
        self.casinos.iter().find(|c| c.name == name)
    }

    /// Iterates over casinos in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Casino> {
        self.casinos.iter()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let casinos = Vec::<Casino>::deserialize(deserializer)?;
        Catalog::new(casinos).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Casino;
    type IntoIter = std::slice::Iter<'a, Casino>;

    fn into_iter(self) -> Self::IntoIter {
        self.casinos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(v: f64) -> StarRating {
        StarRating::try_new(v).unwrap()
    }

    #[test]
    fn builder_sets_category_sets() {
        let casino = Casino::new("Lucky", rating(4.5), PayoutSpeed::Instant)
            .with_types(["online", "fast-paying"])
            .with_games(["slots"])
            .with_banking(["crypto", "crypto"]);

        assert!(casino.types.contains("online"));
        assert!(casino.games.contains("slots"));
        assert_eq!(casino.banking.len(), 1);
    }

    #[test]
    fn catalog_rejects_duplicate_names() {
        let result = Catalog::new(vec![
            Casino::new("Lucky", rating(4.0), PayoutSpeed::Instant),
            Casino::new("Lucky", rating(3.0), PayoutSpeed::UpToOneWeek),
        ]);
        assert!(matches!(result, Err(ValidationError::Duplicate { .. })));
    }

    #[test]
    fn catalog_rejects_blank_names() {
        let result = Catalog::new(vec![Casino::new(" ", rating(4.0), PayoutSpeed::Instant)]);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn catalog_keeps_order() {
        let catalog = Catalog::new(vec![
            Casino::new("B", rating(4.0), PayoutSpeed::Instant),
            Casino::new("A", rating(3.0), PayoutSpeed::Instant),
        ])
        .unwrap();
        let names: Vec<_> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert!(catalog.find("A").is_some());
    }

    #[test]
    fn casino_deserializes_with_flattened_display_fields() {
        let json = r#"{
            "name": "Lucky Star",
            "rating": 4.6,
            "types": ["online"],
            "games": ["slots", "blackjack"],
            "banking": ["paypal"],
            "payout_speed": "1-2-days",
            "promo_code": "LUCKY100",
            "has_vip": true
        }"#;
        let casino: Casino = serde_json::from_str(json).unwrap();
        assert_eq!(casino.payout_speed, PayoutSpeed::OneToTwoDays);
        assert_eq!(casino.display.promo_code, "LUCKY100");
        assert!(casino.display.has_vip);
        assert!(!casino.display.has_packages);
    }

    #[test]
    fn casino_with_unknown_payout_speed_is_rejected() {
        let json = r#"{"name": "Slow", "rating": 3.0, "payout_speed": "eventually"}"#;
        let result: Result<Casino, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn catalog_deserialization_validates() {
        let json = r#"[
            {"name": "Twin", "rating": 3.0, "payout_speed": "instant"},
            {"name": "Twin", "rating": 4.0, "payout_speed": "instant"}
        ]"#;
        let result: Result<Catalog, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

//! The card entity and its derived numeric fields.

use tcg_binder_core::text::parse_leading_float;

use crate::loader::Record;

/// Trend glyphs that may decorate a market price, plus the "None" placeholder.
const MARKET_PRICE_NOISE: &[&str] = &["⬆\u{fe0f}", "⬇\u{fe0f}", "➡\u{fe0f}", "None"];

/// One owned card row.
///
/// Prices are private: the numeric market value and profit are derived from
/// them once, at construction, and [`Card::set_prices`] keeps them in sync.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Card {
    pub name: String,
    pub card_type: String,
    pub rarity: String,
    pub quality: String,
    pub language: String,
    pub edition: String,
    price_paid: f64,
    market_price: String,
    pub id: String,
    pub pack_id: String,
    pub date_obtained: String,
    pub location: String,
    pub comments: String,
    pub wiki_url: String,
    pub photo_url: String,
    market_value: f64,
    profit: f64,
}

impl Card {
    /// A card with only a name and type; every other field is empty.
    pub fn new(name: impl Into<String>, card_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            card_type: card_type.into(),
            ..Self::default()
        }
    }

    /// Build a card from a header-keyed record.
    pub fn from_record(record: &Record) -> Self {
        let mut card = Self {
            name: record.get("Name").to_string(),
            card_type: record.get("Type").to_string(),
            rarity: record.get("Rarity").to_string(),
            quality: record.get("Quality").to_string(),
            language: record.get("Language").to_string(),
            edition: record.get("Edition type").to_string(),
            id: strip_none(record.get("ID")),
            pack_id: strip_none(record.get("Pack ID")),
            date_obtained: record.get("Date Obtained").to_string(),
            location: record.get("Location").to_string(),
            comments: record.get("Comments").to_string(),
            wiki_url: record.get("Wiki URL").to_string(),
            photo_url: record.get("Photo URL").to_string(),
            ..Self::default()
        };
        let paid = parse_leading_float(record.get("Price I paid for it")).unwrap_or(0.0);
        card.set_prices(paid, record.get("Current market price"));
        card
    }

    /// Replace both prices and recompute the derived values.
    pub fn set_prices(&mut self, price_paid: f64, market_price: &str) {
        self.price_paid = if price_paid.is_finite() { price_paid } else { 0.0 };
        self.market_price = market_price.to_string();
        self.market_value = market_value_of(market_price);
        self.profit = self.market_value - self.price_paid;
    }

    pub fn with_prices(mut self, price_paid: f64, market_price: &str) -> Self {
        self.set_prices(price_paid, market_price);
        self
    }

    pub fn price_paid(&self) -> f64 {
        self.price_paid
    }

    /// The market price as written in the catalog, trend glyphs included.
    pub fn market_price(&self) -> &str {
        &self.market_price
    }

    /// Numeric market price with glyphs and "None" removed; 0 when unparseable.
    pub fn market_value(&self) -> f64 {
        self.market_value
    }

    /// Market value minus price paid.
    pub fn profit(&self) -> f64 {
        self.profit
    }

    /// Market price text without trend glyphs, for display.
    pub fn clean_market_price(&self) -> String {
        strip_market_noise(&self.market_price)
    }

    /// The explicit photo URL, or the conventional `images/cards/<id>.png`.
    pub fn image_url(&self) -> String {
        if self.photo_url.is_empty() {
            format!("images/cards/{}.png", self.id)
        } else {
            self.photo_url.clone()
        }
    }

    /// Image path usable for a local thumbnail, or empty when there is none.
    ///
    /// Empty when the id has no usable file name characters and the URL is
    /// not a shared `common` image, and whenever the URL climbs out with `..`.
    pub fn local_image_path(&self) -> String {
        let url = self.image_url();
        if sanitize_file_name(&self.id).is_empty() && !url.contains("common") {
            return String::new();
        }
        if url.contains("..") {
            return String::new();
        }
        url
    }
}

fn strip_none(value: &str) -> String {
    value.replace("None", "").replace("NONE", "")
}

fn strip_market_noise(raw: &str) -> String {
    MARKET_PRICE_NOISE
        .iter()
        .fold(raw.to_string(), |acc, noise| acc.replace(noise, ""))
}

fn market_value_of(raw: &str) -> f64 {
    let cleaned = strip_market_noise(raw);
    parse_leading_float(cleaned.trim())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn sanitize_file_name(s: &str) -> String {
    let kept: String = s
        .chars()
        .filter(|c| !matches!(c, ':' | '#' | '"' | '/' | '\\' | '?' | '%' | '*' | '|' | '<' | '>'))
        .collect();
    let mut out = String::new();
    for part in kept.split_whitespace() {
        if !out.is_empty() {
            out.push('_');
        }
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_value_ignores_trend_glyphs() {
        let cases = [
            ("12.50⬆\u{fe0f}", 12.5),
            ("⬇\u{fe0f} 3", 3.0),
            ("➡\u{fe0f}0.99", 0.99),
            ("None", 0.0),
            ("", 0.0),
            ("n/a", 0.0),
        ];
        for (raw, expected) in cases {
            let card = Card::new("X", "Y").with_prices(0.0, raw);
            assert_eq!(card.market_value(), expected, "market price '{}'", raw);
        }
    }

    #[test]
    fn profit_is_market_minus_paid() {
        let card = Card::new("X", "Y").with_prices(2.0, "5.5⬆\u{fe0f}");
        assert_eq!(card.profit(), 3.5);
        assert_eq!(card.clean_market_price(), "5.5");
    }

    #[test]
    fn image_url_falls_back_to_id() {
        let mut card = Card::new("X", "Y");
        card.id = "LOB-001".to_string();
        assert_eq!(card.image_url(), "images/cards/LOB-001.png");
        card.photo_url = "https://example.org/x.jpg".to_string();
        assert_eq!(card.image_url(), "https://example.org/x.jpg");
    }

    #[test]
    fn local_image_path_rules() {
        let card = Card::new("X", "Y");
        assert_eq!(card.local_image_path(), "");

        let mut common = Card::new("X", "Y");
        common.photo_url = "images/common/back.png".to_string();
        assert_eq!(common.local_image_path(), "images/common/back.png");

        let mut escaping = Card::new("X", "Y");
        escaping.id = "../secret".to_string();
        assert_eq!(escaping.local_image_path(), "");
    }
}

//! Money spent on the displayed cards.

use std::collections::HashSet;

use crate::card::Card;

/// Marketplace whose purchases carry fees.
const FEE_LOCATION: &str = "CTZ";
const FEE_RATE: f64 = 0.05;
/// Flat fee per order, one order per purchase date.
const FEE_PER_ORDER: f64 = 0.35;

/// Spending breakdown for a list of cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub items: f64,
    pub taxes: f64,
    pub total: f64,
}

/// Sum of paid prices plus marketplace fees.
///
/// Only cards with a positive paid price count. Cards bought through the fee
/// marketplace add 5% of their price, and every distinct non-empty purchase
/// date among them adds a flat €0.35.
pub fn total_spent(cards: &[Card]) -> Totals {
    let paid: Vec<&Card> = cards.iter().filter(|c| c.price_paid() > 0.0).collect();
    let items: f64 = paid.iter().map(|c| c.price_paid()).sum();

    let fee_cards: Vec<&&Card> = paid
        .iter()
        .filter(|c| c.location.contains(FEE_LOCATION))
        .collect();
    let percentage_fee: f64 = fee_cards.iter().map(|c| c.price_paid() * FEE_RATE).sum();
    let order_dates: HashSet<&str> = fee_cards
        .iter()
        .map(|c| c.date_obtained.as_str())
        .filter(|d| !d.is_empty())
        .collect();
    let taxes = percentage_fee + order_dates.len() as f64 * FEE_PER_ORDER;

    Totals {
        items,
        taxes,
        total: items + taxes,
    }
}

/// `+x.xx` when the card was paid for and is now worth more, else empty.
pub fn profit_label(card: &Card) -> String {
    let profit = card.market_value() - card.price_paid();
    let rounded = (profit * 100.0).round() / 100.0;
    if rounded > 0.0 && card.price_paid() > 0.0 {
        format!("+{:.2}", rounded)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bought(price: f64, location: &str, date: &str) -> Card {
        let mut card = Card::new("X", "Spell").with_prices(price, "");
        card.location = location.to_string();
        card.date_obtained = date.to_string();
        card
    }

    #[test]
    fn fees_apply_only_to_the_marketplace() {
        let cards = [
            bought(10.0, "CTZ seller A", "01/01/2024"),
            bought(20.0, "CTZ seller B", "01/01/2024"),
            bought(4.0, "CTZ seller A", "02/01/2024"),
            bought(5.0, "Local shop", "03/01/2024"),
            bought(0.0, "CTZ", "04/01/2024"),
        ];
        let totals = total_spent(&cards);
        assert!((totals.items - 39.0).abs() < 1e-9);
        // 5% of 34 plus two order dates.
        assert!((totals.taxes - (1.7 + 0.7)).abs() < 1e-9);
        assert!((totals.total - 41.4).abs() < 1e-9);
    }

    #[test]
    fn empty_list_costs_nothing() {
        assert_eq!(total_spent(&[]), Totals::default());
    }

    #[test]
    fn profit_label_needs_paid_price_and_gain() {
        let gain = Card::new("X", "Y").with_prices(1.0, "3.499");
        assert_eq!(profit_label(&gain), "+2.50");
        let gift = Card::new("X", "Y").with_prices(0.0, "3");
        assert_eq!(profit_label(&gift), "");
        let loss = Card::new("X", "Y").with_prices(5.0, "3");
        assert_eq!(profit_label(&loss), "");
    }
}

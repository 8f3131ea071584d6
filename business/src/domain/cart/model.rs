/// One line of the server-side cart, pointing at a product attribute (SKU).
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: i64,
    pub product_att_id: i64,
    pub product_name: String,
    pub color: Option<String>,
    pub image: Option<String>,
    pub price: i64,
    pub quantity: u32,
}

impl CartItem {
    /// Saturates instead of overflowing on out-of-range server prices.
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.quantity))
    }
}

/// Snapshot of the cart as last fetched. Totals are always derived from the
/// items and never adjusted in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    total_price: i64,
    total_quantity: u32,
}

impl Cart {
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total_price = items
            .iter()
            .map(CartItem::line_total)
            .fold(0i64, i64::saturating_add);
        let total_quantity = items
            .iter()
            .map(|item| item.quantity)
            .fold(0u32, u32::saturating_add);
        Self {
            items,
            total_price,
            total_quantity,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total_price(&self) -> i64 {
        self.total_price
    }

    pub fn total_quantity(&self) -> u32 {
        self.total_quantity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: i64, price: i64, quantity: u32) -> CartItem {
        CartItem {
            id,
            product_att_id: id * 10,
            product_name: format!("Item {}", id),
            color: None,
            image: None,
            price,
            quantity,
        }
    }

    #[test]
    fn should_sum_price_and_quantity_over_items() {
        let cart = Cart::from_items(vec![item(1, 100, 2), item(2, 50, 1)]);

        assert_eq!(cart.total_price(), 250);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn should_have_zero_totals_when_empty() {
        let cart = Cart::empty();

        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0);
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn should_saturate_totals_instead_of_overflowing() {
        let cart = Cart::from_items(vec![item(1, i64::MAX, 2), item(2, i64::MAX, 1)]);

        assert_eq!(cart.items()[0].line_total(), i64::MAX);
        assert_eq!(cart.total_price(), i64::MAX);
        assert_eq!(cart.total_quantity(), 3);
    }

    proptest! {
        #[test]
        fn totals_always_match_items(lines in prop::collection::vec((0i64..1_000_000, 0u32..100), 0..20)) {
            let items: Vec<CartItem> = lines
                .iter()
                .enumerate()
                .map(|(i, (price, qty))| item(i as i64, *price, *qty))
                .collect();

            let cart = Cart::from_items(items.clone());

            let expected_price: i64 = items.iter().map(|i| i.price * i64::from(i.quantity)).sum();
            let expected_quantity: u32 = items.iter().map(|i| i.quantity).sum();
            prop_assert_eq!(cart.total_price(), expected_price);
            prop_assert_eq!(cart.total_quantity(), expected_quantity);
        }
    }
}

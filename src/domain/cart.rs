//! Shopping cart.

use crate::domain::product::Product;

/// A product together with the quantity currently in the cart.
///
/// Quantity is at least 1 by construction; an entry that would reach zero is
/// removed from the cart instead.
#[derive(Clone, Debug)]
pub struct CartEntry {
    product: Product,
    quantity: u32,
}

impl CartEntry {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line total at the product's effective (discounted) price.
    pub fn line_total(&self) -> i64 {
        self.product.effective_price() * i64::from(self.quantity)
    }
}

/// Client-local cart: at most one entry per product id, insertion order
/// preserved for display.
///
/// Every operation is total. The derived aggregates are recomputed on each
/// read so they cannot drift from the entries; carts hold tens of items, so
/// the recomputation is not worth caching.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one unit of `product`, merging into the existing entry when the
    /// product is already present.
    ///
    /// Stock is not checked here; `Product::stock` is exposed for callers
    /// that want to gate the action.
    pub fn add(&mut self, product: Product) {
        match self.entries.iter_mut().find(|e| e.product.id == product.id) {
            Some(entry) => entry.quantity += 1,
            None => self.entries.push(CartEntry { product, quantity: 1 }),
        }
    }

    /// Remove one unit of the product with `product_id`, dropping the entry
    /// when its quantity reaches zero. An absent id is ignored.
    pub fn remove(&mut self, product_id: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.product.id == product_id) {
            entry.quantity -= 1;
        }
        self.entries.retain(|e| e.quantity > 0);
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Quantity of the given product, zero when absent.
    pub fn quantity_of(&self, product_id: u64) -> u32 {
        self.entries
            .iter()
            .find(|e| e.product.id == product_id)
            .map_or(0, |e| e.quantity)
    }

    /// Sum of all entry quantities.
    pub fn total_items(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Sum of line totals, per-product discounts applied.
    pub fn total_price(&self) -> i64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: i64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            price,
            discount_percent: None,
            stock: Some(10),
            category_id: None,
            image: None,
        }
    }

    #[test]
    fn add_merges_by_product_id() {
        let mut cart = Cart::new();
        cart.add(product(1, 100));
        cart.add(product(1, 100));
        cart.add(product(2, 50));

        assert_eq!(cart.entries().len(), 2);
        assert_eq!(cart.quantity_of(1), 2);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), 250);
    }

    #[test]
    fn remove_decrements_then_drops_entry() {
        let mut cart = Cart::new();
        cart.add(product(1, 100));
        cart.add(product(1, 100));
        cart.add(product(2, 50));

        cart.remove(1);
        assert_eq!(cart.quantity_of(1), 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), 150);

        cart.remove(1);
        assert_eq!(cart.quantity_of(1), 0);
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.entries()[0].product().id, 2);
    }

    #[test]
    fn remove_of_absent_product_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(product(1, 100));

        cart.remove(99);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), 100);
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add(product(1, 100));
        cart.add(product(2, 50));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of(1), 0);
        assert_eq!(cart.quantity_of(2), 0);
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn totals_stay_consistent_under_mixed_sequences() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add(product(1, 10));
        }
        cart.add(product(2, 7));
        cart.remove(1);
        cart.remove(2);
        cart.remove(2); // absent now, no-op
        cart.add(product(3, 3));

        let expected: u32 = cart.entries().iter().map(|e| e.quantity()).sum();
        assert_eq!(cart.total_items(), expected);
        assert!(cart.entries().iter().all(|e| e.quantity() > 0));
        assert_eq!(cart.total_price(), 4 * 10 + 3);
    }

    #[test]
    fn total_price_uses_discounted_prices() {
        let mut discounted = product(1, 100);
        discounted.discount_percent = Some(50);

        let mut cart = Cart::new();
        cart.add(discounted);
        cart.add(product(2, 30));

        assert_eq!(cart.total_price(), 80);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add(product(3, 1));
        cart.add(product(1, 1));
        cart.add(product(2, 1));
        cart.add(product(1, 1));

        let ids: Vec<u64> = cart.entries().iter().map(|e| e.product().id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}

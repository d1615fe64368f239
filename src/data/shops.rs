use crate::shared::*;

/// Trader prices. Items are bought from the player; seeds are sold to them.
pub fn populate_prices(prices: &mut PriceList) {
    prices.sale.insert(ItemKind::Wood, 4);
    prices.sale.insert(ItemKind::Apple, 2);
    prices.sale.insert(ItemKind::Corn, 10);
    prices.sale.insert(ItemKind::Tomato, 20);

    prices.purchase.insert(CropKind::Corn, 4);
    prices.purchase.insert(CropKind::Tomato, 5);
}

pub fn default_prices() -> PriceList {
    let mut prices = PriceList::default();
    populate_prices(&mut prices);
    prices
}

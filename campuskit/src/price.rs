/// Result of a price calculation: the input price, the tax on it, and the
/// total with tax added
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub original_price: f64,
    pub tax: f64,
    pub net_price: f64,
}

/// Build a calculator closure for a fixed tax rate (percent).
///
/// The closure computes `tax = price * rate / 100` and the net price.
pub fn price_calculator(tax_rate: f64) -> impl Fn(f64) -> PriceBreakdown {
    move |price| {
        let tax = price * (tax_rate / 100.0);
        PriceBreakdown {
            original_price: price,
            tax,
            net_price: price + tax,
        }
    }
}

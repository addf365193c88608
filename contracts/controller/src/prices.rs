use crate::*;

impl Contract {
    pub fn get_price(&self, ticker_id: &str) -> Option<Price> {
        self.prices.get(&ticker_id.to_string())
    }

    /// A missing feed or a non-positive quote poisons every computation
    /// touching the asset; there is no default and no stale fallback.
    pub fn get_valid_price(&self, ticker_id: &str) -> Result<Price, ControllerError> {
        let price = self
            .get_price(ticker_id)
            .ok_or_else(|| ControllerError::PriceFeedMissing {
                ticker_id: ticker_id.to_string(),
            })?;
        if price.value.0 <= 0 {
            return Err(ControllerError::InvalidPriceFromOracle {
                ticker_id: ticker_id.to_string(),
                value: price.value.0,
            });
        }
        Ok(price)
    }

    pub fn upsert_price(&mut self, price: &Price) {
        self.prices.insert(&price.ticker_id, price);
    }
}

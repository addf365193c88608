use crate::*;

pub trait OraclePriceHandlerHook {
    fn oracle_on_data(&mut self, price_data: PriceJsonList);
}

#[near_bindgen]
impl OraclePriceHandlerHook for Contract {
    /// Ingests a price batch. Quotes are stored as received; validity is
    /// enforced where they are consumed, so a bad push poisons reads instead
    /// of being silently dropped.
    fn oracle_on_data(&mut self, price_data: PriceJsonList) {
        let config = self.get_contract_config();

        require!(
            env::predecessor_account_id() == config.oracle_account_id,
            "Price data is accepted from the configured oracle only"
        );

        for price in price_data.price_list {
            self.upsert_price(&price);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;

    #[test]
    fn oracle_pushes_are_stored_per_ticker() {
        let (mut controller, _, _) = init_test_env();

        set_predecessor(oracle_account());
        controller.oracle_on_data(PriceJsonList {
            block_height: 83_452_949,
            price_list: vec![
                Price {
                    ticker_id: "weth".to_string(),
                    value: WSignedBalance::from(20_000),
                    fraction_digits: 4,
                },
                Price {
                    ticker_id: "wnear".to_string(),
                    value: WSignedBalance::from(35_000),
                    fraction_digits: 4,
                },
            ],
        });

        assert_eq!(controller.get_valid_price("weth").unwrap().value.0, 20_000);
        assert_eq!(controller.get_valid_price("wnear").unwrap().value.0, 35_000);
    }

    #[test]
    #[should_panic(expected = "Price data is accepted from the configured oracle only")]
    fn pushes_from_other_accounts_are_rejected() {
        let (mut controller, _, user_account) = init_test_env();

        set_predecessor(user_account);
        controller.oracle_on_data(PriceJsonList {
            block_height: 83_452_949,
            price_list: vec![],
        });
    }
}

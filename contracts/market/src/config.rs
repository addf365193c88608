use crate::*;

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct Config {
    /// The account ID of the underlying asset
    pub underlying_token_id: AccountId,

    /// The account ID of the contract owner that allows to modify config
    pub owner_id: AccountId,

    /// The account ID of the controller contract
    pub controller_account_id: AccountId,

    /// Interest rate parameters of this market
    pub interest_rate_model: InterestRateModel,
}

#[near_bindgen]
impl Contract {
    pub fn get_contract_config(&self) -> Config {
        self.config.get().unwrap()
    }
}

//! # Campaign Factory Contract
//!
//! Deploys crowdfunding campaign contracts from an uploaded campaign WASM and
//! keeps an ordered registry of every campaign it created.
#![no_std]

mod registry;
mod types;

use soroban_sdk::{
    contract, contractimpl, panic_with_error, vec, Address, BytesN, Env, IntoVal, Symbol, Vec,
};

pub use crate::types::{DataKey, FactoryEvents};
use crate::registry::{campaign_salt, deployed_campaigns, record_campaign};

/// Error codes for the campaign factory contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum FactoryError {
    /// Contract not initialized
    NotInitialized = 1,
    /// Caller is not authorized
    Unauthorized = 2,
    /// Minimum contribution is negative
    InvalidAmount = 3,
}

impl From<FactoryError> for soroban_sdk::Error {
    fn from(e: FactoryError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

#[contract]
pub struct CampaignFactoryContract;

#[contractimpl]
impl CampaignFactoryContract {
    /// Initializes the factory.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `admin` - The address allowed to update the campaign WASM hash
    /// * `token` - The contribution token handed to every campaign
    /// * `campaign_wasm_hash` - Hash of the uploaded campaign contract WASM
    pub fn initialize(env: Env, admin: Address, token: Address, campaign_wasm_hash: BytesN<32>) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic!("Contract already initialized");
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage()
            .instance()
            .set(&DataKey::CampaignWasmHash, &campaign_wasm_hash);
        env.storage()
            .instance()
            .set(&DataKey::Campaigns, &Vec::<Address>::new(&env));
    }

    /// Deploys and initializes a new campaign managed by `manager`.
    ///
    /// # Returns
    /// * `Address` - The address of the new campaign
    ///
    /// # Errors
    /// * `InvalidAmount` - If `minimum_contribution` is negative
    pub fn create_campaign(env: Env, manager: Address, minimum_contribution: i128) -> Address {
        manager.require_auth();
        if minimum_contribution < 0 {
            panic_with_error!(&env, FactoryError::InvalidAmount);
        }

        let token = Self::get_token(env.clone());
        let wasm_hash = Self::get_campaign_wasm_hash(env.clone());
        let index = deployed_campaigns(&env).len();

        let campaign = env
            .deployer()
            .with_current_contract(campaign_salt(&env, index))
            .deploy_v2(wasm_hash, ());

        let _: () = env.invoke_contract(
            &campaign,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                manager.into_val(&env),
                token.into_val(&env),
                minimum_contribution.into_val(&env),
            ],
        );

        record_campaign(&env, &campaign);
        FactoryEvents::campaign_created(&env, index, &campaign, &manager, minimum_contribution);

        campaign
    }

    /// Returns every campaign created by this factory, in creation order.
    pub fn get_deployed_campaigns(env: Env) -> Vec<Address> {
        deployed_campaigns(&env)
    }

    /// Returns the number of campaigns created by this factory.
    pub fn get_campaign_count(env: Env) -> u32 {
        deployed_campaigns(&env).len()
    }

    /// Returns the address the next `create_campaign` call will deploy to.
    pub fn get_next_campaign_address(env: Env) -> Address {
        let index = deployed_campaigns(&env).len();
        env.deployer()
            .with_current_contract(campaign_salt(&env, index))
            .deployed_address()
    }

    /// Returns the admin address.
    pub fn get_admin(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(&env, FactoryError::NotInitialized))
    }

    /// Returns the contribution token handed to new campaigns.
    pub fn get_token(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .unwrap_or_else(|| panic_with_error!(&env, FactoryError::NotInitialized))
    }

    /// Returns the campaign WASM hash new campaigns are deployed from.
    pub fn get_campaign_wasm_hash(env: Env) -> BytesN<32> {
        env.storage()
            .instance()
            .get(&DataKey::CampaignWasmHash)
            .unwrap_or_else(|| panic_with_error!(&env, FactoryError::NotInitialized))
    }

    /// Points future deployments at a new campaign WASM. Existing campaigns are untouched.
    pub fn set_campaign_wasm_hash(env: Env, admin: Address, campaign_wasm_hash: BytesN<32>) {
        admin.require_auth();
        Self::require_admin(&env, &admin);

        env.storage()
            .instance()
            .set(&DataKey::CampaignWasmHash, &campaign_wasm_hash);
        FactoryEvents::wasm_updated(&env, &campaign_wasm_hash);
    }

    // Internal helper to verify admin
    fn require_admin(env: &Env, caller: &Address) {
        let admin = Self::get_admin(env.clone());
        if *caller != admin {
            panic_with_error!(env, FactoryError::Unauthorized);
        }
    }
}

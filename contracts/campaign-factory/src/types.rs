use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

/// Ledgers in roughly one day (5 second close time).
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const TTL_THRESHOLD: u32 = DAY_IN_LEDGERS * 30;
pub const TTL_EXTEND_TO: u32 = DAY_IN_LEDGERS * 90;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    CampaignWasmHash,
    Campaigns, // Vec<Address> in creation order
}

pub struct FactoryEvents;

impl FactoryEvents {
    pub fn campaign_created(
        env: &Env,
        index: u32,
        campaign: &Address,
        manager: &Address,
        minimum_contribution: i128,
    ) {
        let topics = (symbol_short!("campaign"), symbol_short!("created"), index);
        env.events().publish(
            topics,
            (campaign.clone(), manager.clone(), minimum_contribution),
        );
    }

    pub fn wasm_updated(env: &Env, wasm_hash: &BytesN<32>) {
        let topics = (symbol_short!("factory"), symbol_short!("wasm"));
        env.events().publish(topics, wasm_hash.clone());
    }
}

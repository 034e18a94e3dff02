//! Append-only registry of deployed campaigns.

use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::types::{DataKey, TTL_EXTEND_TO, TTL_THRESHOLD};

/// Returns every recorded campaign in creation order.
pub fn deployed_campaigns(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Campaigns)
        .unwrap_or(Vec::new(env))
}

/// Appends `campaign` to the registry and returns its index.
pub fn record_campaign(env: &Env, campaign: &Address) -> u32 {
    let mut campaigns = deployed_campaigns(env);
    let index = campaigns.len();
    campaigns.push_back(campaign.clone());

    env.storage().instance().set(&DataKey::Campaigns, &campaigns);
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);

    index
}

/// Deployment salt for the campaign at `index`: the big-endian index in the last four bytes.
pub fn campaign_salt(env: &Env, index: u32) -> BytesN<32> {
    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&index.to_be_bytes());
    BytesN::from_array(env, &salt)
}

//! Data types, storage keys and events for the campaign contract.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// Ledgers in roughly one day (5 second close time).
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Entries are bumped once their remaining TTL drops below this.
pub const TTL_THRESHOLD: u32 = DAY_IN_LEDGERS * 30;

/// TTL entries are extended to on every write.
pub const TTL_EXTEND_TO: u32 = DAY_IN_LEDGERS * 90;

/// A proposed disbursement of campaign funds.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Request {
    /// What the funds are for
    pub description: String,
    /// Amount sent to `recipient` on finalization
    pub value: i128,
    /// Receiver of `value`
    pub recipient: Address,
    /// Distinct approvers that voted for this request
    pub approval_count: u32,
    /// Set once the transfer has been executed
    pub complete: bool,
}

/// Snapshot of the campaign's public state.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignSummary {
    pub minimum_contribution: i128,
    pub balance: i128,
    pub requests_count: u32,
    pub approvers_count: u32,
    pub manager: Address,
    pub total_contributed: i128,
}

/// Storage keys for contract state.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Manager address (instance)
    Manager,
    /// Contribution token address (instance)
    Token,
    /// Minimum amount that grants approver status (instance)
    MinimumContribution,
    /// Number of distinct approvers (instance)
    ApproversCount,
    /// Number of requests created so far (instance)
    RequestCount,
    /// Lifetime sum of accepted contributions (instance)
    TotalContributed,
    /// Approver flag by address
    Approver(Address),
    /// Running contribution total by address
    Contribution(Address),
    /// Request by index
    Request(u32),
    /// Vote flag by (request index, approver)
    Approval(u32, Address),
}

/// Events emitted by the campaign contract.
pub struct CampaignEvents;

impl CampaignEvents {
    /// Event emitted when the campaign is initialized.
    pub fn initialized(env: &Env, manager: &Address, minimum_contribution: i128) {
        let topics = (symbol_short!("campaign"), symbol_short!("init"));
        env.events()
            .publish(topics, (manager.clone(), minimum_contribution));
    }

    /// Event emitted for every accepted contribution.
    pub fn contributed(env: &Env, contributor: &Address, amount: i128) {
        let topics = (symbol_short!("campaign"), symbol_short!("contrib"));
        env.events().publish(topics, (contributor.clone(), amount));
    }

    /// Event emitted the first time an address becomes an approver.
    pub fn approver_added(env: &Env, approver: &Address, approvers_count: u32) {
        let topics = (symbol_short!("approver"), symbol_short!("added"));
        env.events()
            .publish(topics, (approver.clone(), approvers_count));
    }

    pub fn request_created(env: &Env, request_id: u32, request: &Request) {
        let topics = (symbol_short!("request"), symbol_short!("created"), request_id);
        env.events()
            .publish(topics, (request.recipient.clone(), request.value));
    }

    pub fn request_approved(env: &Env, request_id: u32, approver: &Address, approval_count: u32) {
        let topics = (symbol_short!("request"), symbol_short!("approved"), request_id);
        env.events()
            .publish(topics, (approver.clone(), approval_count));
    }

    pub fn request_finalized(env: &Env, request_id: u32, request: &Request) {
        let topics = (symbol_short!("request"), symbol_short!("final"), request_id);
        env.events()
            .publish(topics, (request.recipient.clone(), request.value));
    }
}

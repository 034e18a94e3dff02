//! # Campaign Contract
//!
//! A Soroban smart contract that pools contributions for a crowdfunding
//! campaign and only releases them through manager-proposed spending requests
//! approved by a strict majority of contributors.
//!
//! ## Roles
//!
//! - **Manager**: creates and finalizes spending requests
//! - **Approver**: any address that contributed at least the minimum; one vote per request
//!
//! ## Request lifecycle
//!
//! A request starts incomplete, collects votes from distinct approvers, and is
//! finalized by the manager once more than half of the current approvers have
//! approved and the campaign holds enough tokens. Finalization is terminal.

#![no_std]

mod types;
mod validation;

use soroban_sdk::{contract, contractimpl, log, panic_with_error, token, Address, Env, String};

pub use crate::types::{
    CampaignEvents, CampaignSummary, DataKey, Request, TTL_EXTEND_TO, TTL_THRESHOLD,
};
use crate::validation::{
    has_majority, validate_amount, validate_contribution, validate_minimum, ValidationError,
};

/// Error codes for the campaign contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CampaignError {
    /// Contract not initialized
    NotInitialized = 1,
    /// Caller lacks the manager or approver role
    Unauthorized = 2,
    /// Contribution below the minimum
    InsufficientContribution = 3,
    /// Request index does not exist or the request is complete
    InvalidRequest = 4,
    /// Approver already voted on this request
    AlreadyApproved = 5,
    /// Request was already finalized
    AlreadyFinalized = 6,
    /// Not more than half of the approvers approved
    InsufficientApprovals = 7,
    /// Campaign balance is below the request value
    InsufficientFunds = 8,
    /// Amount is zero or negative
    InvalidAmount = 9,
}

impl From<CampaignError> for soroban_sdk::Error {
    fn from(e: CampaignError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

impl From<ValidationError> for CampaignError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::InvalidAmount => CampaignError::InvalidAmount,
            ValidationError::BelowMinimum => CampaignError::InsufficientContribution,
        }
    }
}

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Initializes the campaign.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `manager` - The address allowed to create and finalize requests
    /// * `token` - The token contributions are made in
    /// * `minimum_contribution` - Inclusive minimum that grants approver status
    pub fn initialize(env: Env, manager: Address, token: Address, minimum_contribution: i128) {
        if env.storage().instance().has(&DataKey::Manager) {
            panic!("Contract already initialized");
        }
        if let Err(e) = validate_minimum(minimum_contribution) {
            panic_with_error!(&env, CampaignError::from(e));
        }

        env.storage().instance().set(&DataKey::Manager, &manager);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage()
            .instance()
            .set(&DataKey::MinimumContribution, &minimum_contribution);
        env.storage().instance().set(&DataKey::ApproversCount, &0u32);
        env.storage().instance().set(&DataKey::RequestCount, &0u32);
        env.storage()
            .instance()
            .set(&DataKey::TotalContributed, &0i128);
        extend_instance(&env);

        CampaignEvents::initialized(&env, &manager, minimum_contribution);
    }

    /// Contributes `amount` tokens to the campaign.
    ///
    /// The first qualifying contribution from an address makes it an approver.
    /// Contributions below the minimum are rejected outright.
    ///
    /// # Errors
    /// * `InvalidAmount` - If `amount` is not positive
    /// * `InsufficientContribution` - If `amount` is below the minimum
    pub fn contribute(env: Env, contributor: Address, amount: i128) {
        contributor.require_auth();

        let minimum = Self::get_minimum_contribution(env.clone());
        if let Err(e) = validate_contribution(amount, minimum) {
            panic_with_error!(&env, CampaignError::from(e));
        }

        let token_client = token::Client::new(&env, &get_token(&env));
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        let contribution_key = DataKey::Contribution(contributor.clone());
        let previous: i128 = env
            .storage()
            .persistent()
            .get(&contribution_key)
            .unwrap_or(0);
        env.storage()
            .persistent()
            .set(&contribution_key, &(previous + amount));
        extend_persistent(&env, &contribution_key);

        let total: i128 = env
            .storage()
            .instance()
            .get(&DataKey::TotalContributed)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&DataKey::TotalContributed, &(total + amount));

        let approver_key = DataKey::Approver(contributor.clone());
        if !env.storage().persistent().has(&approver_key) {
            env.storage().persistent().set(&approver_key, &true);
            let approvers_count = Self::get_approvers_count(env.clone()) + 1;
            env.storage()
                .instance()
                .set(&DataKey::ApproversCount, &approvers_count);
            CampaignEvents::approver_added(&env, &contributor, approvers_count);
        }
        extend_persistent(&env, &approver_key);
        extend_instance(&env);

        CampaignEvents::contributed(&env, &contributor, amount);
    }

    /// Creates a spending request and returns its index.
    ///
    /// # Errors
    /// * `Unauthorized` - If `caller` is not the manager
    /// * `InvalidAmount` - If `value` is not positive
    pub fn create_request(
        env: Env,
        caller: Address,
        description: String,
        value: i128,
        recipient: Address,
    ) -> u32 {
        caller.require_auth();
        Self::require_manager(&env, &caller);
        if let Err(e) = validate_amount(value) {
            panic_with_error!(&env, CampaignError::from(e));
        }

        let request_id = Self::get_requests_count(env.clone());
        let request = Request {
            description,
            value,
            recipient,
            approval_count: 0,
            complete: false,
        };

        let key = DataKey::Request(request_id);
        env.storage().persistent().set(&key, &request);
        extend_persistent(&env, &key);
        env.storage()
            .instance()
            .set(&DataKey::RequestCount, &(request_id + 1));
        extend_instance(&env);

        CampaignEvents::request_created(&env, request_id, &request);

        request_id
    }

    /// Records `approver`'s vote for a request.
    ///
    /// # Errors
    /// * `Unauthorized` - If `approver` never made a qualifying contribution
    /// * `InvalidRequest` - If the request does not exist or is complete
    /// * `AlreadyApproved` - If `approver` already voted on this request
    pub fn approve_request(env: Env, approver: Address, request_id: u32) {
        approver.require_auth();
        if !Self::is_approver(env.clone(), approver.clone()) {
            panic_with_error!(&env, CampaignError::Unauthorized);
        }

        let mut request = load_request(&env, request_id);
        if request.complete {
            panic_with_error!(&env, CampaignError::InvalidRequest);
        }

        let approval_key = DataKey::Approval(request_id, approver.clone());
        if env.storage().persistent().has(&approval_key) {
            panic_with_error!(&env, CampaignError::AlreadyApproved);
        }

        request.approval_count += 1;
        env.storage().persistent().set(&approval_key, &true);
        extend_persistent(&env, &approval_key);
        save_request(&env, request_id, &request);

        CampaignEvents::request_approved(&env, request_id, &approver, request.approval_count);
    }

    /// Executes a request's transfer once a strict majority approved it.
    ///
    /// # Errors
    /// * `Unauthorized` - If `caller` is not the manager
    /// * `InvalidRequest` - If the request does not exist
    /// * `AlreadyFinalized` - If the request is complete
    /// * `InsufficientApprovals` - If approvals are not more than half of current approvers
    /// * `InsufficientFunds` - If the campaign holds less than the request value
    pub fn finalize_request(env: Env, caller: Address, request_id: u32) {
        caller.require_auth();
        Self::require_manager(&env, &caller);

        let mut request = load_request(&env, request_id);
        if request.complete {
            panic_with_error!(&env, CampaignError::AlreadyFinalized);
        }

        let approvers_count = Self::get_approvers_count(env.clone());
        if !has_majority(request.approval_count, approvers_count) {
            panic_with_error!(&env, CampaignError::InsufficientApprovals);
        }

        let token_client = token::Client::new(&env, &get_token(&env));
        let campaign = env.current_contract_address();
        if token_client.balance(&campaign) < request.value {
            panic_with_error!(&env, CampaignError::InsufficientFunds);
        }

        token_client.transfer(&campaign, &request.recipient, &request.value);

        request.complete = true;
        save_request(&env, request_id, &request);

        log!(
            &env,
            "request finalized",
            request_id,
            request.approval_count,
            approvers_count
        );
        CampaignEvents::request_finalized(&env, request_id, &request);
    }

    /// Returns the manager address.
    pub fn get_manager(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Manager)
            .unwrap_or_else(|| panic_with_error!(&env, CampaignError::NotInitialized))
    }

    /// Returns the minimum contribution that grants approver status.
    pub fn get_minimum_contribution(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::MinimumContribution)
            .unwrap_or_else(|| panic_with_error!(&env, CampaignError::NotInitialized))
    }

    /// Returns the contribution token address.
    pub fn get_token(env: Env) -> Address {
        get_token(&env)
    }

    /// Returns the number of distinct approvers.
    pub fn get_approvers_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::ApproversCount)
            .unwrap_or(0)
    }

    /// Returns whether `address` is an approver.
    pub fn is_approver(env: Env, address: Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Approver(address))
            .unwrap_or(false)
    }

    /// Returns the total amount `contributor` has put in.
    pub fn get_contribution(env: Env, contributor: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Contribution(contributor))
            .unwrap_or(0)
    }

    /// Returns a request by index.
    pub fn get_request(env: Env, request_id: u32) -> Request {
        load_request(&env, request_id)
    }

    /// Returns the number of requests created so far.
    pub fn get_requests_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::RequestCount)
            .unwrap_or(0)
    }

    /// Returns whether `approver` voted on a request.
    pub fn has_approved(env: Env, request_id: u32, approver: Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Approval(request_id, approver))
            .unwrap_or(false)
    }

    /// Returns the token balance held by the campaign.
    pub fn get_balance(env: Env) -> i128 {
        token::Client::new(&env, &get_token(&env)).balance(&env.current_contract_address())
    }

    /// Returns a snapshot of the campaign.
    pub fn get_summary(env: Env) -> CampaignSummary {
        CampaignSummary {
            minimum_contribution: Self::get_minimum_contribution(env.clone()),
            balance: Self::get_balance(env.clone()),
            requests_count: Self::get_requests_count(env.clone()),
            approvers_count: Self::get_approvers_count(env.clone()),
            manager: Self::get_manager(env.clone()),
            total_contributed: env
                .storage()
                .instance()
                .get(&DataKey::TotalContributed)
                .unwrap_or(0),
        }
    }

    // Internal helper to verify the manager
    fn require_manager(env: &Env, caller: &Address) {
        let manager = Self::get_manager(env.clone());
        if *caller != manager {
            panic_with_error!(env, CampaignError::Unauthorized);
        }
    }
}

fn get_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, CampaignError::NotInitialized))
}

fn load_request(env: &Env, request_id: u32) -> Request {
    env.storage()
        .persistent()
        .get(&DataKey::Request(request_id))
        .unwrap_or_else(|| panic_with_error!(env, CampaignError::InvalidRequest))
}

fn save_request(env: &Env, request_id: u32, request: &Request) {
    let key = DataKey::Request(request_id);
    env.storage().persistent().set(&key, request);
    extend_persistent(env, &key);
}

fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

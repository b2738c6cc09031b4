use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, Proposal, Voter, WorkflowStatus};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// A ballot spans several administrator-driven phases with no deadline between
// them, so every entry is kept alive well past the archival horizon.
// At ~5s per ledger: 1 year ≈ 6,307,200 ledgers.
const BALLOT_TTL_LEDGERS: u32 = 6_307_200;

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, admin);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Admin, BALLOT_TTL_LEDGERS, BALLOT_TTL_LEDGERS);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Admin)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Admin)
}

// ── Workflow status ──────────────────────────────────────────────────────────

pub fn set_status(env: &Env, status: &WorkflowStatus) {
    env.storage().persistent().set(&DataKey::Status, status);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Status, BALLOT_TTL_LEDGERS, BALLOT_TTL_LEDGERS);
}

pub fn get_status(env: &Env) -> Option<WorkflowStatus> {
    env.storage().persistent().get(&DataKey::Status)
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn set_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALLOT_TTL_LEDGERS, BALLOT_TTL_LEDGERS);
}

pub fn get_voter(env: &Env, address: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(address.clone()))
}

pub fn has_voter(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voter(address.clone()))
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn set_proposals(env: &Env, proposals: &Vec<Proposal>) {
    env.storage().persistent().set(&DataKey::Proposals, proposals);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Proposals, BALLOT_TTL_LEDGERS, BALLOT_TTL_LEDGERS);
}

pub fn get_proposals(env: &Env) -> Vec<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposals)
        .unwrap_or_else(|| Vec::new(env))
}

// ── Winning proposal ─────────────────────────────────────────────────────────

pub fn set_winning_proposal(env: &Env, id: u32) {
    env.storage().persistent().set(&DataKey::WinningProposal, &id);
    env.storage().persistent().extend_ttl(
        &DataKey::WinningProposal,
        BALLOT_TTL_LEDGERS,
        BALLOT_TTL_LEDGERS,
    );
}

pub fn get_winning_proposal(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::WinningProposal)
        .unwrap_or(0u32)
}

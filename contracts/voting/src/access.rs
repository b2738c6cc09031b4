use soroban_sdk::{Address, Env};

use crate::errors::VotingError;
use crate::storage;
use crate::types::Voter;

/// Administrator capability check. The caller proves control of its identity
/// via `require_auth`, then must match the administrator pinned at
/// initialization.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();
    let admin = storage::get_admin(env).ok_or(VotingError::NotInitialized)?;
    if *caller != admin {
        return Err(VotingError::Unauthorized);
    }
    Ok(())
}

/// Registered-voter capability check, applied uniformly to ballot mutations
/// and to every read over voters and proposals. Returns the caller's record.
pub fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    caller.require_auth();
    storage::get_voter(env, caller).ok_or(VotingError::NotVoter)
}

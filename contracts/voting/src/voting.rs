use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};

use crate::{
    access,
    errors::VotingError,
    storage,
    types::{Proposal, Voter, WorkflowStatus},
};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Pin the administrator and open voter registration.
    /// Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        if storage::has_admin(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_status(&env, &WorkflowStatus::RegisteringVoters);
        storage::set_proposals(&env, &Vec::new(&env));
        storage::set_winning_proposal(&env, 0);

        env.events().publish((symbol_short!("init"),), (admin,));

        Ok(())
    }

    // ── Voter registration ───────────────────────────────────────────────────

    /// Register a participant. Administrator-only, and only while the
    /// workflow is still in `RegisteringVoters`.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        Self::require_status(&env, WorkflowStatus::RegisteringVoters)?;

        if storage::has_voter(&env, &voter) {
            return Err(VotingError::AlreadyRegistered);
        }

        storage::set_voter(
            &env,
            &voter,
            &Voter {
                is_registered: true,
                has_voted: false,
                voted_proposal_id: None,
            },
        );

        env.events().publish((symbol_short!("voter_reg"),), (voter,));

        Ok(())
    }

    // ── Workflow transitions ─────────────────────────────────────────────────

    /// Close voter registration and open proposal submission. Seeds the
    /// placeholder proposal at index 0 so a default winner exists even if
    /// no proposals or votes are ever cast.
    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        Self::advance_status(&env, WorkflowStatus::RegisteringVoters)?;

        let mut proposals = storage::get_proposals(&env);
        proposals.push_back(Proposal {
            id: 0,
            description: String::from_str(&env, "GENESIS"),
            vote_count: 0,
        });
        storage::set_proposals(&env, &proposals);

        Ok(())
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        Self::advance_status(&env, WorkflowStatus::ProposalsRegistrationStarted)
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        Self::advance_status(&env, WorkflowStatus::ProposalsRegistrationEnded)
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        Self::advance_status(&env, WorkflowStatus::VotingSessionStarted)
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Submit a candidate proposal. Open to registered voters while the
    /// workflow is in `ProposalsRegistrationStarted`. Returns the new id.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        access::require_voter(&env, &caller)?;
        Self::require_status(&env, WorkflowStatus::ProposalsRegistrationStarted)?;

        if description.len() == 0 {
            return Err(VotingError::EmptyProposal);
        }

        let mut proposals = storage::get_proposals(&env);
        let id = proposals.len();
        proposals.push_back(Proposal {
            id,
            description,
            vote_count: 0,
        });
        storage::set_proposals(&env, &proposals);

        env.events().publish((symbol_short!("prop_reg"),), (id,));

        Ok(id)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast the caller's single, irrevocable ballot for `proposal_id`.
    pub fn set_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        let mut voter = access::require_voter(&env, &caller)?;
        Self::require_status(&env, WorkflowStatus::VotingSessionStarted)?;

        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        let mut proposals = storage::get_proposals(&env);
        let mut proposal = proposals
            .get(proposal_id)
            .ok_or(VotingError::ProposalNotFound)?;

        voter.has_voted = true;
        voter.voted_proposal_id = Some(proposal_id);
        proposal.vote_count += 1;

        proposals.set(proposal_id, proposal);
        storage::set_voter(&env, &caller, &voter);
        storage::set_proposals(&env, &proposals);

        env.events()
            .publish((symbol_short!("voted"),), (caller, proposal_id));

        Ok(())
    }

    /// Close the ballot: scan the proposals once, left to right, keeping the
    /// first strict improvement of the maximum vote count. Lowest id wins a
    /// tie; with no votes cast the placeholder at index 0 wins by default.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, VotingError> {
        access::require_admin(&env, &caller)?;
        Self::advance_status(&env, WorkflowStatus::VotingSessionEnded)?;

        let proposals = storage::get_proposals(&env);
        let mut winning_id = 0u32;
        let mut max_votes = 0u32;
        for proposal in proposals.iter() {
            if proposal.vote_count > max_votes {
                max_votes = proposal.vote_count;
                winning_id = proposal.id;
            }
        }
        storage::set_winning_proposal(&env, winning_id);

        Ok(winning_id)
    }

    // ── Read accessors ───────────────────────────────────────────────────────

    /// Look up any participant's record. Restricted to registered voters.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, VotingError> {
        access::require_voter(&env, &caller)?;
        storage::get_voter(&env, &voter).ok_or(VotingError::NotVoter)
    }

    /// Look up a proposal by id. Restricted to registered voters.
    pub fn get_one_proposal(
        env: Env,
        caller: Address,
        proposal_id: u32,
    ) -> Result<Proposal, VotingError> {
        access::require_voter(&env, &caller)?;
        storage::get_proposals(&env)
            .get(proposal_id)
            .ok_or(VotingError::ProposalNotFound)
    }

    /// Winner of the tally. Defaults to 0 until `tally_votes` has run.
    pub fn winning_proposal_id(env: Env) -> u32 {
        storage::get_winning_proposal(&env)
    }

    pub fn get_status(env: Env) -> Result<WorkflowStatus, VotingError> {
        storage::get_status(&env).ok_or(VotingError::NotInitialized)
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        storage::get_admin(&env).ok_or(VotingError::NotInitialized)
    }

    // ── Private helpers ──────────────────────────────────────────────────────

    /// The workflow must currently sit in `expected`.
    fn require_status(env: &Env, expected: WorkflowStatus) -> Result<(), VotingError> {
        let current = storage::get_status(env).ok_or(VotingError::NotInitialized)?;
        if current != expected {
            return Err(VotingError::WrongPhase);
        }
        Ok(())
    }

    /// Step the workflow from `expected` to its successor and notify
    /// observers. `VotesTallied` has no successor, so the workflow can never
    /// leave its terminal phase.
    fn advance_status(env: &Env, expected: WorkflowStatus) -> Result<(), VotingError> {
        let current = storage::get_status(env).ok_or(VotingError::NotInitialized)?;
        if current != expected {
            return Err(VotingError::WrongPhase);
        }
        let next = current.next().ok_or(VotingError::WrongPhase)?;
        storage::set_status(env, &next);

        env.events()
            .publish((symbol_short!("wf_change"),), (current, next));

        Ok(())
    }
}

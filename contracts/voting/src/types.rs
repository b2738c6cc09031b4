use soroban_sdk::{contracttype, Address, String};

/// Lifecycle of the ballot. Phases only ever advance, one step at a time,
/// and every transition is driven by an explicit administrator call.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// Successor in the workflow, or `None` once the ballot is tallied.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => {
                Some(WorkflowStatus::VotingSessionStarted)
            }
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }
}

/// Registration and voting record for a single participant.
/// `has_voted` and `voted_proposal_id` are written exactly once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_proposal_id: Option<u32>,
}

/// A candidate option. `id` is the insertion index and never changes;
/// `vote_count` only ever increments.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u32,
    pub description: String,
    pub vote_count: u32,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Status,
    Voter(Address),
    Proposals,
    WinningProposal,
}

use soroban_sdk::contracterror;

/// Every failure rejects the whole invocation; the host reverts any writes,
/// so a failed call leaves the ballot untouched.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VotingError {
    Unauthorized = 1,
    WrongPhase = 2,
    AlreadyRegistered = 3,
    NotVoter = 4,
    AlreadyVoted = 5,
    ProposalNotFound = 6,
    EmptyProposal = 7,
    AlreadyInitialized = 8,
    NotInitialized = 9,
}

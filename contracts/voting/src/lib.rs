#![no_std]

mod access;
mod errors;
mod storage;
mod types;
mod voting;

pub use errors::VotingError;
pub use types::{Proposal, Voter, WorkflowStatus};
pub use voting::{VotingContract, VotingContractClient};

use tracing::{info, instrument};

use crate::db::Repository;
use crate::error::AppError;

/// Prompt shown when deletion is requested from the setup message.
pub const PROMPT: &str = "Are you sure you want to delete your data?";

/// Prompt shown for `/delete_my_data`.
pub const COMMAND_PROMPT: &str =
    "Are you sure you want to delete your data? This action will remove your data from all games.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionDecision {
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted { rows: u64 },
    NothingToDelete,
    Cancelled,
}

impl DeletionOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Deleted { .. } => "Your data has been successfully deleted.",
            Self::NothingToDelete => "No data found to delete.",
            Self::Cancelled => "Deletion cancelled.",
        }
    }
}

/// Apply the user's answer to the confirmation prompt.
#[instrument(skip(repo))]
pub async fn resolve(
    repo: &Repository,
    owner_id: u64,
    decision: DeletionDecision,
) -> Result<DeletionOutcome, AppError> {
    if decision == DeletionDecision::Cancel {
        info!("Deletion cancelled");
        return Ok(DeletionOutcome::Cancelled);
    }

    let rows = repo.delete_by_owner(owner_id).await?;
    info!(rows, "Player data deleted");

    Ok(match rows {
        0 => DeletionOutcome::NothingToDelete,
        rows => DeletionOutcome::Deleted { rows },
    })
}

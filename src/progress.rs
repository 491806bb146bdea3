//! Follow-up tasks that gate a claim's transition to "Finished".

use crate::model::{Claim, ClaimStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRequirement {
    pub id: String,
    pub description: String,
    pub completed: bool,
}

impl ActionRequirement {
    pub fn new(id: &str, description: &str, completed: bool) -> Self {
        ActionRequirement {
            id: id.to_string(),
            description: description.to_string(),
            completed,
        }
    }
}

/// The checklist every new claim starts with. Submitting the form completes
/// the first item.
pub fn default_action_requirements() -> Vec<ActionRequirement> {
    vec![
        ActionRequirement::new("1", "Complete No-Fault Form", true),
        ActionRequirement::new("2", "Attend Physical Therapy Sessions", false),
        ActionRequirement::new("3", "Follow Doctor's Recommended Treatment Plan", false),
        ActionRequirement::new("4", "Notify Insurance Company of Treatment Completion", false),
    ]
}

/// Percentage of completed requirements (0 for an empty list).
pub fn progress(requirements: &[ActionRequirement]) -> f64 {
    if requirements.is_empty() {
        return 0.0;
    }
    let done = requirements.iter().filter(|r| r.completed).count();
    done as f64 / requirements.len() as f64 * 100.0
}

/// Flip the completion state of requirement `id`; returns false if no
/// requirement has that id.
pub fn toggle_requirement(requirements: &mut [ActionRequirement], id: &str) -> bool {
    match requirements.iter_mut().find(|r| r.id == id) {
        Some(r) => {
            r.completed = !r.completed;
            true
        }
        None => false,
    }
}

impl Claim {
    /// Moves the claim to `Finished` once every requirement is complete.
    /// Returns whether the status changed.
    pub fn apply_requirements(&mut self, requirements: &[ActionRequirement]) -> bool {
        let all_done = !requirements.is_empty() && requirements.iter().all(|r| r.completed);
        if !all_done || self.status == ClaimStatus::Finished {
            return false;
        }
        log::info!("claim {}: all action requirements complete, status -> Finished", self.id);
        self.status = ClaimStatus::Finished;
        true
    }
}

use crate::enums::request_stage::RequestStage;

#[derive(Debug, Clone, PartialEq)]
pub enum VehicleOutcome {
    /// Report printed and every breakdown key present.
    Passed,
    /// Report printed but some breakdown keys were absent.
    MissingFields(Vec<String>),
    /// A request failed; the vehicle was skipped.
    RequestFailed {
        stage: RequestStage,
        detail: String,
    },
}

impl VehicleOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

use crate::enums::vehicle_outcome::VehicleOutcome;

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<(String, VehicleOutcome)>,
}

impl RunSummary {
    pub fn record(&mut self, registration: &str, outcome: VehicleOutcome) {
        self.outcomes.push((registration.to_string(), outcome));
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

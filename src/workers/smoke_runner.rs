use std::io::Write;
use crate::enums::request_stage::RequestStage;
use crate::enums::vehicle_outcome::VehicleOutcome;
use crate::errors::{SmokeError, SmokeResult};
use crate::logger::report_printer::ReportPrinter;
use crate::structs::run_summary::RunSummary;
use crate::traits::car_api::CarApi;

/// Runs search then analysis for each registration, strictly in order.
pub struct SmokeRunner<'a, A: CarApi + ?Sized, W: Write> {
    api: &'a A,
    printer: ReportPrinter<W>,
}

impl<'a, A: CarApi + ?Sized, W: Write> SmokeRunner<'a, A, W> {
    pub fn new(api: &'a A, out: W) -> Self {
        Self {
            api,
            printer: ReportPrinter::new(out),
        }
    }

    pub fn into_output(self) -> W {
        self.printer.into_inner()
    }

    /// Only output failures abort the run; request failures are reported
    /// and the next vehicle is tried.
    pub async fn run(&mut self, registrations: &[String]) -> SmokeResult<RunSummary> {
        let mut summary = RunSummary::default();
        self.printer.opening_banner(registrations.len())?;

        for registration in registrations {
            let outcome = self.test_vehicle(registration).await?;
            match &outcome {
                VehicleOutcome::Passed => log::debug!("✅ {} passed", registration),
                VehicleOutcome::MissingFields(keys) => log::warn!("⚠️ {} missing {} breakdown fields", registration, keys.len()),
                VehicleOutcome::RequestFailed { stage, detail } => log::warn!("❌ {} {} failed: {}", registration, stage, detail),
            }
            summary.record(registration, outcome);
        }

        self.printer.closing_banner(&summary)?;
        log::info!("🏁 {}/{} vehicles passed", summary.passed(), summary.total());
        Ok(summary)
    }

    async fn test_vehicle(&mut self, registration: &str) -> SmokeResult<VehicleOutcome> {
        let car = match self.api.search(registration).await {
            Ok(car) => car,
            Err(e) => return self.failed(RequestStage::Search, registration, &e),
        };
        self.printer.car_header(registration, &car)?;

        let analysis = match self.api.analysis(&car.car_id).await {
            Ok(analysis) => analysis,
            Err(e) => return self.failed(RequestStage::Analysis, registration, &e),
        };

        let missing = self.printer.analysis(&analysis)?;
        if missing.is_empty() {
            Ok(VehicleOutcome::Passed)
        } else {
            Ok(VehicleOutcome::MissingFields(missing.into_iter().map(String::from).collect()))
        }
    }

    fn failed(&mut self, stage: RequestStage, registration: &str, error: &SmokeError) -> SmokeResult<VehicleOutcome> {
        self.printer.request_error(stage, registration, error)?;
        Ok(VehicleOutcome::RequestFailed {
            stage,
            detail: error.report_detail(),
        })
    }
}

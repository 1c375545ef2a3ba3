use std::io::Write;
use crate::config::constants::{BANNER_WIDTH, CAR_BANNER_WIDTH, RECOMMENDATION_PREVIEW_CHARS};
use crate::enums::request_stage::RequestStage;
use crate::errors::{SmokeError, SmokeResult};
use crate::helpers::breakdown::{has_purchase_block, missing_breakdown_keys, BREAKDOWN_GROUPS, EXPECTED_BREAKDOWN_KEYS};
use crate::helpers::formatting::{format_score_line, rule, truncate_chars};
use crate::structs::car_analysis_response::CarAnalysisResponse;
use crate::structs::car_search_response::CarSearchResponse;
use crate::structs::run_summary::RunSummary;

/// Writes the console report for a smoke run.
pub struct ReportPrinter<W: Write> {
    out: W,
}

impl<W: Write> ReportPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn opening_banner(&mut self, vehicle_count: usize) -> SmokeResult<()> {
        writeln!(self.out, "{}", rule(BANNER_WIDTH))?;
        writeln!(self.out, "TESTING ALL {} MOCK CARS — {}-FACTOR ANALYSIS", vehicle_count, EXPECTED_BREAKDOWN_KEYS.len())?;
        writeln!(self.out, "{}", rule(BANNER_WIDTH))?;
        Ok(())
    }

    pub fn car_header(&mut self, registration: &str, car: &CarSearchResponse) -> SmokeResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule(CAR_BANNER_WIDTH))?;
        writeln!(self.out, " {} {} ({}) — {}", car.brand, car.model, car.year, registration)?;
        writeln!(self.out, "{}", rule(CAR_BANNER_WIDTH))?;
        Ok(())
    }

    pub fn request_error(&mut self, stage: RequestStage, registration: &str, error: &SmokeError) -> SmokeResult<()> {
        if stage == RequestStage::Search {
            writeln!(self.out)?;
        }
        writeln!(self.out, "[ERROR] {} {}: {}", stage, registration, error.report_detail())?;
        Ok(())
    }

    /// Prints scores and the presence check; returns the missing keys.
    pub fn analysis(&mut self, analysis: &CarAnalysisResponse) -> SmokeResult<Vec<&'static str>> {
        writeln!(self.out, "  Total Score: {:.1}/100", analysis.score)?;
        writeln!(
            self.out,
            "  Recommendation: {}...",
            truncate_chars(&analysis.recommendation, RECOMMENDATION_PREVIEW_CHARS)
        )?;
        writeln!(self.out)?;

        let breakdown = &analysis.breakdown;
        for group in &BREAKDOWN_GROUPS {
            writeln!(self.out, "  [{}]", group.name)?;
            for item in &group.items {
                let value = breakdown.get(item.key).copied();
                writeln!(self.out, "{}", format_score_line(item.label, value, item.weight))?;
            }
            writeln!(self.out)?;
        }

        if has_purchase_block(breakdown) {
            writeln!(self.out, "  *** KOPSSPARR REGISTRERAD — KOP AVRADS! ***")?;
            writeln!(self.out)?;
        }

        let missing = missing_breakdown_keys(breakdown);
        if missing.is_empty() {
            writeln!(self.out, "  [OK] All {} breakdown fields present", EXPECTED_BREAKDOWN_KEYS.len())?;
        } else {
            writeln!(self.out, "  [FAIL] Missing breakdown fields: {}", missing.join(", "))?;
        }

        Ok(missing)
    }

    pub fn closing_banner(&mut self, summary: &RunSummary) -> SmokeResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule(BANNER_WIDTH))?;
        if summary.all_passed() {
            writeln!(self.out, "ALL {} CARS TESTED SUCCESSFULLY", summary.total())?;
        } else {
            writeln!(
                self.out,
                "{}/{} CARS TESTED SUCCESSFULLY, {} FAILED",
                summary.passed(),
                summary.total(),
                summary.failed()
            )?;
        }
        writeln!(self.out, "{}", rule(BANNER_WIDTH))?;
        self.out.flush()?;
        Ok(())
    }
}

pub mod views;

use views::{AnalysisReport, ReportHighlights};

impl AnalysisReport {
    pub fn highlights(&self) -> ReportHighlights {
        let results = &self.estimated_results;

        ReportHighlights {
            market_size: self.market_size,
            competition_level: self.competition_level,
            suggested_bid: self.suggested_bid.clone(),
            potential_reach: self.potential_reach.clone(),
            clicks: results.clicks,
            impressions: results.impressions,
            estimated_conversions: results.estimated_conversions,
            estimated_roi: results.estimated_roi.clone(),
            daily_budget: self.recommended_strategy.budget.daily_budget,
            has_website: self.website.is_some(),
        }
    }
}

use super::domain::CampaignInput;
use super::market::{market_size, recommended_keywords};
use super::parse::{parse_amount, parse_count, parse_optional_amount, round_cents};
use super::report::views::{AnalysisReport, EstimatedResults};
use super::simulated::{self, COMPETITION_LEVEL};

const LIFETIME_MULTIPLIER: f64 = 2.5;
const BID_SHARE_OF_LIFETIME_VALUE: f64 = 0.1;
const REACH_LOW_PER_CLICK: u64 = 100;
const REACH_HIGH_PER_CLICK: u64 = 150;
const IMPRESSIONS_PER_CLICK: u64 = 10;
const CLICK_THROUGH_RATE: f64 = 3.5;
const CONVERSION_RATE: f64 = 0.02;
const BILLING_DAYS: f64 = 30.0;

/// Figures derived from the budget and revenue fields before the report is
/// assembled. Every value is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessMetrics {
    pub budget: f64,
    pub monthly_revenue: f64,
    pub current_customers: i64,
    pub average_order_value: f64,
    pub customer_lifetime_value: f64,
    pub suggested_bid: f64,
    pub estimated_clicks: u64,
    pub estimated_conversions: u64,
    pub roi_pct: f64,
    pub daily_budget: f64,
}

impl BusinessMetrics {
    pub fn derive(input: &CampaignInput) -> Self {
        let budget = parse_amount(&input.budget);
        let monthly_revenue = parse_optional_amount(input.monthly_revenue.as_deref());
        let current_customers = parse_count(input.current_customers.as_deref());

        let average_order_value = finite_or_zero(if current_customers == 0 {
            0.0
        } else {
            monthly_revenue / current_customers as f64
        });
        let customer_lifetime_value = finite_or_zero(average_order_value * LIFETIME_MULTIPLIER);
        let suggested_bid = round_cents(customer_lifetime_value * BID_SHARE_OF_LIFETIME_VALUE);

        // a zero or negative bid buys nothing
        let estimated_clicks = if suggested_bid > 0.0 {
            whole(budget / suggested_bid)
        } else {
            0
        };
        let estimated_conversions = whole(estimated_clicks as f64 * CONVERSION_RATE);

        let roi_pct = if budget == 0.0 {
            0.0
        } else {
            finite_or_zero(
                (estimated_conversions as f64 * average_order_value - budget) / budget * 100.0,
            )
        };

        Self {
            budget,
            monthly_revenue,
            current_customers,
            average_order_value,
            customer_lifetime_value,
            suggested_bid,
            estimated_clicks,
            estimated_conversions,
            roi_pct,
            daily_budget: budget / BILLING_DAYS,
        }
    }

    pub fn reach_range(&self) -> (u64, u64) {
        (
            self.estimated_clicks.saturating_mul(REACH_LOW_PER_CLICK),
            self.estimated_clicks.saturating_mul(REACH_HIGH_PER_CLICK),
        )
    }

    pub fn impressions(&self) -> u64 {
        self.estimated_clicks.saturating_mul(IMPRESSIONS_PER_CLICK)
    }
}

/// Stateless entry point turning one form submission into a report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportCalculator;

impl ReportCalculator {
    pub fn compute(&self, input: &CampaignInput) -> AnalysisReport {
        compute(input)
    }
}

pub fn compute(input: &CampaignInput) -> AnalysisReport {
    let metrics = BusinessMetrics::derive(input);
    let (reach_low, reach_high) = metrics.reach_range();

    AnalysisReport {
        market_size: market_size(&input.niche),
        suggested_bid: format!("R$ {:.2}", metrics.suggested_bid),
        potential_reach: format!("{reach_low} - {reach_high} pessoas/dia"),
        competition_level: COMPETITION_LEVEL,
        recommended_keywords: recommended_keywords(input),
        estimated_results: EstimatedResults {
            clicks: metrics.estimated_clicks,
            impressions: metrics.impressions(),
            ctr: CLICK_THROUGH_RATE,
            average_cpc: metrics.suggested_bid,
            estimated_conversions: metrics.estimated_conversions,
            estimated_roi: format!("{:.1}%", metrics.roi_pct),
        },
        social_media: simulated::social_media(input),
        website: input.website().map(|_| simulated::website()),
        competitors: simulated::competitors(),
        market_opportunities: simulated::market_opportunities(),
        recommended_strategy: simulated::strategy(input, metrics.daily_budget),
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Floors to a non-negative whole count.
fn whole(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}

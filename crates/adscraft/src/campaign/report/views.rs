use serde::Serialize;

/// Simulated advertising-performance report for one form submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub market_size: &'static str,
    pub suggested_bid: String,
    pub potential_reach: String,
    pub competition_level: &'static str,
    pub recommended_keywords: Vec<String>,
    pub estimated_results: EstimatedResults,
    pub social_media: SocialMediaMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<WebsiteMetrics>,
    pub competitors: Vec<CompetitorAnalysis>,
    pub market_opportunities: Vec<&'static str>,
    pub recommended_strategy: RecommendedStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedResults {
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    #[serde(rename = "averageCPC")]
    pub average_cpc: f64,
    pub estimated_conversions: u64,
    #[serde(rename = "estimatedROI")]
    pub estimated_roi: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaMetrics {
    pub followers: u32,
    pub engagement: f64,
    pub posts_per_week: u32,
    pub avg_likes: u32,
    pub top_hashtags: Vec<String>,
    pub audience_growth: &'static str,
    pub best_performing_content: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteMetrics {
    pub monthly_visitors: u32,
    pub bounce_rate: &'static str,
    pub avg_session_duration: &'static str,
    pub top_pages: Vec<&'static str>,
    pub conversion_rate: &'static str,
    pub device_distribution: DeviceDistribution,
}

/// Traffic share per device class, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceDistribution {
    pub mobile: u8,
    pub desktop: u8,
    pub tablet: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorAnalysis {
    pub name: &'static str,
    pub market_share: &'static str,
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub price_comparison: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedStrategy {
    pub ad_types: Vec<&'static str>,
    pub budget: StrategyBudget,
    pub targeting: Targeting,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyBudget {
    pub distribution: BudgetDistribution,
    pub daily_budget: f64,
}

/// Budget split across ad types, in percent. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetDistribution {
    pub search: u8,
    pub display: u8,
    pub remarketing: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Targeting {
    pub demographics: Vec<String>,
    pub interests: Vec<String>,
    pub behaviors: Vec<&'static str>,
}

/// Headline numbers surfaced first by renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportHighlights {
    pub market_size: &'static str,
    pub competition_level: &'static str,
    pub suggested_bid: String,
    pub potential_reach: String,
    pub clicks: u64,
    pub impressions: u64,
    pub estimated_conversions: u64,
    pub estimated_roi: String,
    pub daily_budget: f64,
    pub has_website: bool,
}

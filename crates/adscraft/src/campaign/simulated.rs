//! Fixed benchmark figures standing in for data no external source provides.

use super::domain::CampaignInput;
use super::market::top_hashtags;
use super::report::views::{
    BudgetDistribution, CompetitorAnalysis, DeviceDistribution, RecommendedStrategy,
    SocialMediaMetrics, StrategyBudget, Targeting, WebsiteMetrics,
};

pub const COMPETITION_LEVEL: &str = "Média";

pub const BUDGET_SPLIT: BudgetDistribution = BudgetDistribution {
    search: 60,
    display: 25,
    remarketing: 15,
};

pub(crate) fn social_media(input: &CampaignInput) -> SocialMediaMetrics {
    SocialMediaMetrics {
        followers: 5000,
        engagement: 3.2,
        posts_per_week: 5,
        avg_likes: 250,
        top_hashtags: top_hashtags(input),
        audience_growth: "15% ao mês",
        best_performing_content: vec![
            "Posts de produtos em uso",
            "Conteúdo educativo sobre o nicho",
            "Behind the scenes",
        ],
    }
}

pub(crate) fn website() -> WebsiteMetrics {
    WebsiteMetrics {
        monthly_visitors: 15000,
        bounce_rate: "45%",
        avg_session_duration: "2:30",
        top_pages: vec!["/produtos", "/sobre", "/contato"],
        conversion_rate: "2.5%",
        device_distribution: DeviceDistribution {
            mobile: 65,
            desktop: 30,
            tablet: 5,
        },
    }
}

pub(crate) fn competitors() -> Vec<CompetitorAnalysis> {
    vec![
        CompetitorAnalysis {
            name: "Competidor A",
            market_share: "35%",
            strengths: vec!["Forte presença digital", "Preços competitivos"],
            weaknesses: vec!["Atendimento ao cliente", "Variedade limitada"],
            price_comparison: "10% mais alto",
        },
        CompetitorAnalysis {
            name: "Competidor B",
            market_share: "25%",
            strengths: vec!["Qualidade superior", "Marca estabelecida"],
            weaknesses: vec!["Preços elevados", "Marketing tradicional"],
            price_comparison: "20% mais alto",
        },
    ]
}

pub(crate) fn market_opportunities() -> Vec<&'static str> {
    vec![
        "Expansão para novas regiões",
        "Desenvolvimento de linha premium",
        "Parcerias com influenciadores",
        "Marketing de conteúdo especializado",
    ]
}

pub(crate) fn strategy(input: &CampaignInput, daily_budget: f64) -> RecommendedStrategy {
    RecommendedStrategy {
        ad_types: vec!["Search", "Display", "Remarketing"],
        budget: StrategyBudget {
            distribution: BUDGET_SPLIT,
            daily_budget,
        },
        targeting: Targeting {
            demographics: vec![
                format!("Idade: {}", input.target_age),
                format!("Gênero: {}", input.target_gender),
                format!("Localização: {}", input.location),
            ],
            interests: vec![
                input.niche.clone(),
                "Compras online".to_string(),
                "Tendências de mercado".to_string(),
            ],
            behaviors: vec![
                "Compradores ativos",
                "Pesquisadores de preço",
                "Engajados com a marca",
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_split_covers_whole_budget() {
        let total = BUDGET_SPLIT.search + BUDGET_SPLIT.display + BUDGET_SPLIT.remarketing;
        assert_eq!(total, 100);
    }

    #[test]
    fn device_shares_sum_to_one_hundred() {
        let devices = website().device_distribution;
        assert_eq!(devices.mobile + devices.desktop + devices.tablet, 100);
    }

    #[test]
    fn targeting_echoes_audience_fields() {
        let input = CampaignInput {
            niche: "saude".to_string(),
            target_age: "25-40".to_string(),
            target_gender: "female".to_string(),
            location: "Curitiba".to_string(),
            ..CampaignInput::default()
        };

        let strategy = strategy(&input, 10.0);
        assert_eq!(
            strategy.targeting.demographics,
            vec!["Idade: 25-40", "Gênero: female", "Localização: Curitiba"]
        );
        assert_eq!(strategy.targeting.interests[0], "saude");
        assert_eq!(strategy.budget.daily_budget, 10.0);
    }
}

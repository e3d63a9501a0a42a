use crate::infra::{load_input, sample_campaign};
use adscraft::campaign::{AnalysisReport, CampaignForm, CampaignInput};
use adscraft::error::AppError;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    /// Campaign JSON file (camelCase form fields)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Set a single form field, e.g. --set budget=1500 (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub(crate) overrides: Vec<String>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        input,
        overrides,
        json,
    } = args;

    let input = match input {
        Some(path) => load_input(&path)?,
        None => CampaignInput::default(),
    };

    let mut form = CampaignForm::with_input(input);
    for assignment in &overrides {
        form.apply_assignment(assignment)?;
    }

    analyze_and_print(form, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("AdsCraft demo campaign");
    analyze_and_print(CampaignForm::with_input(sample_campaign()), args.json)
}

fn analyze_and_print(mut form: CampaignForm, json: bool) -> Result<(), AppError> {
    let input = form.input().clone();
    let report = form.submit()?;

    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_report(&input, report));
    }

    Ok(())
}

pub(crate) fn render_report(input: &CampaignInput, report: &AnalysisReport) -> String {
    let mut out = String::new();
    let mut line = |text: String| {
        out.push_str(&text);
        out.push('\n');
    };

    let highlights = report.highlights();

    line(format!("Análise da Empresa: {}", input.company_name));
    let objective = input
        .campaign_objective()
        .map(|objective| objective.label())
        .unwrap_or(input.objective.as_str());
    line(format!("Objetivo: {objective}"));
    let gender = input
        .gender()
        .map(|gender| gender.label())
        .unwrap_or(input.target_gender.as_str());
    line(format!(
        "Público: {} | {} | {}",
        input.target_age, gender, input.location
    ));

    line(String::new());
    line("Visão Geral do Mercado".to_string());
    line(format!("- Tamanho do mercado: {}", highlights.market_size));
    line(format!("- Concorrência: {}", highlights.competition_level));
    line(format!("- Lance sugerido: {}", highlights.suggested_bid));
    line(format!("- Alcance potencial: {}", highlights.potential_reach));

    let social = &report.social_media;
    line(String::new());
    line(format!("Análise do Instagram (@{})", input.instagram_handle));
    line(format!(
        "- {} seguidores | {}% engajamento | {} posts/semana | {} curtidas em média",
        social.followers, social.engagement, social.posts_per_week, social.avg_likes
    ));
    line(format!("- Hashtags: {}", social.top_hashtags.join(" ")));

    if let Some(website) = &report.website {
        let devices = website.device_distribution;
        line(String::new());
        line("Análise do Website".to_string());
        line(format!(
            "- {} visitantes/mês | rejeição {} | sessão {} | conversão {}",
            website.monthly_visitors,
            website.bounce_rate,
            website.avg_session_duration,
            website.conversion_rate
        ));
        line(format!(
            "- Mobile {}% | Desktop {}% | Tablet {}%",
            devices.mobile, devices.desktop, devices.tablet
        ));
    }

    line(String::new());
    line("Análise de Concorrentes".to_string());
    for competitor in &report.competitors {
        line(format!(
            "- {} ({} do mercado, preço {}): fortes em {}; fracos em {}",
            competitor.name,
            competitor.market_share,
            competitor.price_comparison,
            competitor.strengths.join(", "),
            competitor.weaknesses.join(", ")
        ));
    }

    let strategy = &report.recommended_strategy;
    let split = strategy.budget.distribution;
    line(String::new());
    line("Estratégia Recomendada".to_string());
    line(format!("- Tipos de anúncio: {}", strategy.ad_types.join(", ")));
    line(format!(
        "- Distribuição: Search {}% | Display {}% | Remarketing {}%",
        split.search, split.display, split.remarketing
    ));
    line(format!(
        "- Orçamento diário: R$ {:.2}",
        highlights.daily_budget
    ));

    line(String::new());
    line("Resultados Estimados".to_string());
    line(format!(
        "- {} cliques | {} impressões | CTR {}% | {} conversões | ROI {}",
        highlights.clicks,
        highlights.impressions,
        report.estimated_results.ctr,
        highlights.estimated_conversions,
        highlights.estimated_roi
    ));

    line(String::new());
    line("Palavras-chave Recomendadas".to_string());
    for keyword in &report.recommended_keywords {
        line(format!("- {keyword}"));
    }

    line(String::new());
    line("Oportunidades de Mercado".to_string());
    for opportunity in &report.market_opportunities {
        line(format!("- {opportunity}"));
    }

    out
}

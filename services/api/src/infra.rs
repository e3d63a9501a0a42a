use adscraft::campaign::CampaignInput;
use adscraft::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads a campaign saved as the same camelCase JSON the HTTP route accepts.
pub(crate) fn load_input(path: &Path) -> Result<CampaignInput, AppError> {
    let raw = fs::read_to_string(path)?;
    let input = serde_json::from_str(&raw)?;
    Ok(input)
}

pub(crate) fn sample_campaign() -> CampaignInput {
    CampaignInput {
        niche: "moda".to_string(),
        target_age: "25-40".to_string(),
        target_gender: "female".to_string(),
        location: "São Paulo".to_string(),
        objective: "sales".to_string(),
        budget: "1000".to_string(),
        company_name: "Ateliê Lume".to_string(),
        instagram_handle: "atelie.lume".to_string(),
        product_price_range: "R$ 100 - R$ 500".to_string(),
        main_products: "Vestidos, Acessórios".to_string(),
        website_url: Some("https://www.atelielume.com.br".to_string()),
        monthly_revenue: Some("10000".to_string()),
        current_customers: Some("100".to_string()),
        keywords: None,
        competitors: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_input_reads_camel_case_json() {
        let path = std::env::temp_dir().join(format!("adscraft-input-{}.json", std::process::id()));
        let mut file = fs::File::create(&path).expect("temp file");
        file.write_all(br#"{"niche":"saude","budget":"500","currentCustomers":"20"}"#)
            .expect("write");

        let input = load_input(&path).expect("loads");
        fs::remove_file(&path).ok();

        assert_eq!(input.niche, "saude");
        assert_eq!(input.current_customers.as_deref(), Some("20"));
    }

    #[test]
    fn load_input_reports_missing_file() {
        let err = load_input(Path::new("/nonexistent/adscraft.json")).expect_err("missing");
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn sample_campaign_fills_every_required_field() {
        assert!(sample_campaign().missing_required_fields().is_empty());
    }
}

use super::domain::CampaignInput;

pub const DEFAULT_MARKET_SIZE: &str = "Médio (500k-1M buscas/mês)";

const MARKET_SIZES: [(&str, &str); 3] = [
    ("moda", "Grande (> 1M buscas/mês)"),
    ("tecnologia", "Muito Grande (> 2M buscas/mês)"),
    ("saude", "Grande (> 1.5M buscas/mês)"),
];

/// Monthly search volume bucket for a niche. Exact match after trimming and
/// lower-casing; accents are not folded.
pub fn market_size(niche: &str) -> &'static str {
    let key = niche.trim().to_lowercase();
    MARKET_SIZES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, size)| *size)
        .unwrap_or(DEFAULT_MARKET_SIZE)
}

pub fn recommended_keywords(input: &CampaignInput) -> Vec<String> {
    let niche = input.niche.as_str();
    let location = input.location.as_str();
    let product = input.lead_product();

    vec![
        format!("{niche} {location}"),
        format!("{niche} online"),
        format!("{niche} promoção"),
        format!("melhor {niche}"),
        format!("{niche} profissional"),
        format!("{product} {location}"),
        format!("comprar {niche}"),
        format!("{niche} entrega rápida"),
        format!("{niche} premium"),
        format!("{niche} preço"),
    ]
}

pub fn top_hashtags(input: &CampaignInput) -> Vec<String> {
    let niche = input.niche.as_str();

    vec![
        format!("#{niche}"),
        format!("#{niche}{}", input.location),
        format!("#{}", input.lead_product()),
        format!("#tendencias{niche}"),
        format!("#{niche}brasil"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(niche: &str, location: &str, products: &str) -> CampaignInput {
        CampaignInput {
            niche: niche.to_string(),
            location: location.to_string(),
            main_products: products.to_string(),
            ..CampaignInput::default()
        }
    }

    #[test]
    fn known_niches_map_to_their_volume() {
        assert_eq!(market_size("moda"), "Grande (> 1M buscas/mês)");
        assert_eq!(market_size("tecnologia"), "Muito Grande (> 2M buscas/mês)");
        assert_eq!(market_size("saude"), "Grande (> 1.5M buscas/mês)");
    }

    #[test]
    fn lookup_ignores_case_and_padding_but_not_accents() {
        assert_eq!(market_size(" Tecnologia "), market_size("tecnologia"));
        assert_eq!(market_size("saúde"), DEFAULT_MARKET_SIZE);
        assert_eq!(market_size("modas"), DEFAULT_MARKET_SIZE);
        assert_eq!(market_size(""), DEFAULT_MARKET_SIZE);
    }

    #[test]
    fn keywords_use_the_first_listed_product() {
        let keywords = recommended_keywords(&input("moda", "Recife", "Vestidos,Bolsas"));
        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords[0], "moda Recife");
        assert_eq!(keywords[5], "Vestidos Recife");
        assert_eq!(keywords[9], "moda preço");
    }

    #[test]
    fn hashtags_echo_raw_input() {
        let tags = top_hashtags(&input("moda", "Recife", "Vestidos"));
        assert_eq!(
            tags,
            vec![
                "#moda",
                "#modaRecife",
                "#Vestidos",
                "#tendenciasmoda",
                "#modabrasil"
            ]
        );
    }
}

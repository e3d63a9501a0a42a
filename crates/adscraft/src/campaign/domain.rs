use serde::{Deserialize, Serialize};

/// Business and audience details captured by the campaign form.
///
/// Every field stays a raw string at this boundary; numeric fields are
/// interpreted by [`crate::campaign::parse`] when a report is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignInput {
    pub niche: String,
    pub target_age: String,
    pub target_gender: String,
    pub location: String,
    pub objective: String,
    pub budget: String,
    pub company_name: String,
    pub instagram_handle: String,
    pub product_price_range: String,
    pub main_products: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_revenue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_customers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitors: Option<String>,
}

/// Form fields addressable by their camelCase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CampaignField {
    Niche,
    TargetAge,
    TargetGender,
    Location,
    Objective,
    Budget,
    CompanyName,
    InstagramHandle,
    ProductPriceRange,
    MainProducts,
    WebsiteUrl,
    MonthlyRevenue,
    CurrentCustomers,
    Keywords,
    Competitors,
}

impl CampaignField {
    pub const fn ordered() -> [Self; 15] {
        [
            Self::CompanyName,
            Self::Niche,
            Self::MainProducts,
            Self::TargetAge,
            Self::TargetGender,
            Self::Location,
            Self::InstagramHandle,
            Self::WebsiteUrl,
            Self::Objective,
            Self::Budget,
            Self::MonthlyRevenue,
            Self::CurrentCustomers,
            Self::ProductPriceRange,
            Self::Keywords,
            Self::Competitors,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Niche => "niche",
            Self::TargetAge => "targetAge",
            Self::TargetGender => "targetGender",
            Self::Location => "location",
            Self::Objective => "objective",
            Self::Budget => "budget",
            Self::CompanyName => "companyName",
            Self::InstagramHandle => "instagramHandle",
            Self::ProductPriceRange => "productPriceRange",
            Self::MainProducts => "mainProducts",
            Self::WebsiteUrl => "websiteUrl",
            Self::MonthlyRevenue => "monthlyRevenue",
            Self::CurrentCustomers => "currentCustomers",
            Self::Keywords => "keywords",
            Self::Competitors => "competitors",
        }
    }

    pub const fn is_required(self) -> bool {
        !matches!(
            self,
            Self::WebsiteUrl
                | Self::MonthlyRevenue
                | Self::CurrentCustomers
                | Self::Keywords
                | Self::Competitors
        )
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ordered()
            .into_iter()
            .find(|field| field.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown campaign field '{0}'")]
    Unknown(String),
    #[error("expected field=value, got '{0}'")]
    MalformedAssignment(String),
}

impl CampaignInput {
    pub fn get(&self, field: CampaignField) -> Option<&str> {
        let value = match field {
            CampaignField::Niche => &self.niche,
            CampaignField::TargetAge => &self.target_age,
            CampaignField::TargetGender => &self.target_gender,
            CampaignField::Location => &self.location,
            CampaignField::Objective => &self.objective,
            CampaignField::Budget => &self.budget,
            CampaignField::CompanyName => &self.company_name,
            CampaignField::InstagramHandle => &self.instagram_handle,
            CampaignField::ProductPriceRange => &self.product_price_range,
            CampaignField::MainProducts => &self.main_products,
            CampaignField::WebsiteUrl => return self.website_url.as_deref(),
            CampaignField::MonthlyRevenue => return self.monthly_revenue.as_deref(),
            CampaignField::CurrentCustomers => return self.current_customers.as_deref(),
            CampaignField::Keywords => return self.keywords.as_deref(),
            CampaignField::Competitors => return self.competitors.as_deref(),
        };
        Some(value.as_str())
    }

    /// Replaces a single field; blank optional fields are stored as absent.
    pub fn set(&mut self, field: CampaignField, value: impl Into<String>) {
        let value = value.into();
        let present = !value.trim().is_empty();

        match field {
            CampaignField::WebsiteUrl => self.website_url = present.then_some(value),
            CampaignField::MonthlyRevenue => self.monthly_revenue = present.then_some(value),
            CampaignField::CurrentCustomers => self.current_customers = present.then_some(value),
            CampaignField::Keywords => self.keywords = present.then_some(value),
            CampaignField::Competitors => self.competitors = present.then_some(value),
            CampaignField::Niche => self.niche = value,
            CampaignField::TargetAge => self.target_age = value,
            CampaignField::TargetGender => self.target_gender = value,
            CampaignField::Location => self.location = value,
            CampaignField::Objective => self.objective = value,
            CampaignField::Budget => self.budget = value,
            CampaignField::CompanyName => self.company_name = value,
            CampaignField::InstagramHandle => self.instagram_handle = value,
            CampaignField::ProductPriceRange => self.product_price_range = value,
            CampaignField::MainProducts => self.main_products = value,
        }
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FieldError> {
        let field =
            CampaignField::from_name(name).ok_or_else(|| FieldError::Unknown(name.to_string()))?;
        self.set(field, value);
        Ok(())
    }

    /// Applies a `field=value` assignment as typed on the command line.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), FieldError> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| FieldError::MalformedAssignment(assignment.to_string()))?;
        self.set_field(name, value)
    }

    pub fn missing_required_fields(&self) -> Vec<CampaignField> {
        CampaignField::ordered()
            .into_iter()
            .filter(|field| field.is_required())
            .filter(|field| self.get(*field).map_or(true, |v| v.trim().is_empty()))
            .collect()
    }

    /// Website URL if one was supplied with non-blank content.
    pub fn website(&self) -> Option<&str> {
        self.website_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// First comma-separated entry of the product list.
    pub fn lead_product(&self) -> &str {
        self.main_products.split(',').next().unwrap_or_default()
    }

    pub fn gender(&self) -> Option<TargetGender> {
        TargetGender::parse(&self.target_gender)
    }

    pub fn campaign_objective(&self) -> Option<CampaignObjective> {
        CampaignObjective::parse(&self.objective)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetGender {
    All,
    Female,
    Male,
}

impl TargetGender {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "female" => Some(Self::Female),
            "male" => Some(Self::Male),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Todos",
            Self::Female => "Feminino",
            Self::Male => "Masculino",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignObjective {
    Sales,
    Traffic,
    Awareness,
    Leads,
}

impl CampaignObjective {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sales" => Some(Self::Sales),
            "traffic" => Some(Self::Traffic),
            "awareness" => Some(Self::Awareness),
            "leads" => Some(Self::Leads),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sales => "Aumentar Vendas",
            Self::Traffic => "Tráfego para o Site",
            Self::Awareness => "Reconhecimento da Marca",
            Self::Leads => "Geração de Leads",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_and_treats_missing_keys_as_blank() {
        let input: CampaignInput = serde_json::from_value(json!({
            "niche": "moda",
            "companyName": "Loja Azul",
            "currentCustomers": "100"
        }))
        .expect("input parses");

        assert_eq!(input.company_name, "Loja Azul");
        assert_eq!(input.current_customers.as_deref(), Some("100"));
        assert!(input.website_url.is_none());
        assert_eq!(input.budget, "");
    }

    #[test]
    fn set_field_addresses_fields_by_form_name() {
        let mut input = CampaignInput::default();
        input.set_field("mainProducts", "Vestidos, Bolsas").unwrap();
        input.set_field("websiteUrl", "   ").unwrap();

        assert_eq!(input.lead_product(), "Vestidos");
        assert!(input.website_url.is_none());
        assert_eq!(
            input.set_field("favoriteColor", "azul"),
            Err(FieldError::Unknown("favoriteColor".to_string()))
        );
    }

    #[test]
    fn assignment_requires_equals_sign() {
        let mut input = CampaignInput::default();
        input.apply_assignment("budget=1.000,00").unwrap();
        assert_eq!(input.budget, "1.000,00");
        assert!(matches!(
            input.apply_assignment("budget"),
            Err(FieldError::MalformedAssignment(_))
        ));
    }

    #[test]
    fn required_fields_exclude_optional_business_data() {
        let input = CampaignInput::default();
        let missing = input.missing_required_fields();
        assert_eq!(missing.len(), 10);
        assert!(missing.iter().all(|field| field.is_required()));
        assert!(!missing.contains(&CampaignField::WebsiteUrl));
    }

    #[test]
    fn option_labels_follow_form_choices() {
        assert_eq!(TargetGender::parse(" Female "), Some(TargetGender::Female));
        assert_eq!(TargetGender::parse("outro"), None);
        assert_eq!(
            CampaignObjective::parse("leads").map(CampaignObjective::label),
            Some("Geração de Leads")
        );
    }
}

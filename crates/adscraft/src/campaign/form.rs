use super::calculator::compute;
use super::domain::{CampaignField, CampaignInput, FieldError};
use super::report::views::AnalysisReport;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("required fields are blank: {}", field_list(.0))]
    MissingFields(Vec<CampaignField>),
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl FormError {
    pub fn missing_field_names(&self) -> Vec<&'static str> {
        match self {
            FormError::MissingFields(fields) => fields.iter().map(|f| f.name()).collect(),
            FormError::Field(_) => Vec::new(),
        }
    }
}

fn field_list(fields: &[CampaignField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Form state: the input being edited and the last computed report.
///
/// A report is only ever replaced as a whole by [`CampaignForm::submit`];
/// editing fields leaves the previous report in place until the next submit.
#[derive(Debug, Clone, Default)]
pub struct CampaignForm {
    input: CampaignInput,
    report: Option<AnalysisReport>,
}

impl CampaignForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: CampaignInput) -> Self {
        Self {
            input,
            report: None,
        }
    }

    pub fn input(&self) -> &CampaignInput {
        &self.input
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn has_report(&self) -> bool {
        self.report.is_some()
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.input.set_field(name, value)?;
        Ok(())
    }

    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), FormError> {
        self.input.apply_assignment(assignment)?;
        Ok(())
    }

    pub fn missing_required_fields(&self) -> Vec<CampaignField> {
        self.input.missing_required_fields()
    }

    pub fn submit(&mut self) -> Result<&AnalysisReport, FormError> {
        let missing = self.input.missing_required_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        Ok(&*self.report.insert(compute(&self.input)))
    }

    pub fn clear(&mut self) {
        self.report = None;
    }

    pub fn into_report(self) -> Option<AnalysisReport> {
        self.report
    }
}

use askama::Template;
use sgvrecycle_notification::template::{ValuationHtml, ValuationPlain};
use validator::Validate;

use super::{EmailContent, FieldSpec, FormKind, IntakeForm, ReplyTo};
use crate::{SubmittedForm, sanitize_text, validation::validate_email};

#[derive(Debug, Clone, Validate)]
pub struct ValuationForm {
    #[validate(length(min = 1))]
    pub material_category: String,
    #[validate(length(min = 1))]
    pub estimated_weight: String,
    #[validate(length(min = 1))]
    pub sale_type: String,
    #[validate(length(min = 1))]
    pub material_grade: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    pub company: Option<String>,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
}

impl IntakeForm for ValuationForm {
    const KIND: FormKind = FormKind::ValuationRequest;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("materialCategory", "material_category", "Material category"),
        FieldSpec::new("estimatedWeight", "estimated_weight", "Estimated weight"),
        FieldSpec::new("saleType", "sale_type", "Sale type"),
        FieldSpec::new("materialGrade", "material_grade", "Material grade"),
        FieldSpec::new("name", "name", "Name"),
        FieldSpec::new("company", "company", "Company name"),
        FieldSpec::new("email", "email", "Email"),
    ];
    const CONFIRMATION: &'static str = "Valuation request sent successfully.";

    fn from_submission(form: &SubmittedForm) -> Self {
        Self {
            material_category: form.text("materialCategory"),
            estimated_weight: form.text("estimatedWeight"),
            sale_type: form.text("saleType"),
            material_grade: form.text("materialGrade"),
            name: form.text("name"),
            company: form.optional("company"),
            email: form.text("email"),
        }
    }

    fn reply_to(&self) -> ReplyTo {
        ReplyTo::Submitter(self.email.to_owned())
    }

    fn compose(&self) -> Result<EmailContent, askama::Error> {
        let name = sanitize_text(&self.name);
        let company = self.company.as_deref().map(sanitize_text);
        let material_category = sanitize_text(&self.material_category);
        let estimated_weight = sanitize_text(&self.estimated_weight);
        let sale_type = sanitize_text(&self.sale_type);
        let material_grade = sanitize_text(&self.material_grade);

        let html = ValuationHtml {
            name: &name,
            company: company.as_deref(),
            email: &self.email,
            material_category: &material_category,
            estimated_weight: &estimated_weight,
            sale_type: &sale_type,
            material_grade: &material_grade,
        }
        .render()?;

        let text = ValuationPlain {
            name: &name,
            company: company.as_deref(),
            email: &self.email,
            material_category: &material_category,
            estimated_weight: &estimated_weight,
            sale_type: &sale_type,
            material_grade: &material_grade,
        }
        .render()?;

        Ok(EmailContent {
            subject: format!("New Material Valuation Request: {}", self.material_category),
            html,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_grade_and_bad_email_fail_together() {
        let form = ValuationForm::from_submission(
            &SubmittedForm::new()
                .with("materialCategory", "Rubber")
                .with("estimatedWeight", "3t")
                .with("saleType", "one-off")
                .with("name", "Sam")
                .with("email", "sam"),
        );

        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("material_grade"));
        assert!(fields.contains_key("email"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_compose_includes_company_when_present() {
        let form = ValuationForm {
            material_category: "Rubber".to_string(),
            estimated_weight: "3t".to_string(),
            sale_type: "one-off".to_string(),
            material_grade: "B".to_string(),
            name: "Sam".to_string(),
            company: Some("Tyres \"R\" Us".to_string()),
            email: "sam@tyres.example".to_string(),
        };

        let content = form.compose().unwrap();

        assert_eq!(content.subject, "New Material Valuation Request: Rubber");
        assert!(content.text.contains("Company: Tyres &quot;R&quot; Us"));
        assert!(content.html.contains("mailto:sam@tyres.example"));
    }
}

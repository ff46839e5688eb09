use askama::Template;
use sgvrecycle_notification::template::{PurchasingHtml, PurchasingPlain};
use validator::Validate;

use super::{EmailContent, FieldSpec, FormKind, IntakeForm, ReplyTo};
use crate::{SubmittedForm, sanitize_multiline, sanitize_text, validation::validate_email};

#[derive(Debug, Clone, Validate)]
pub struct PurchasingForm {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[validate(custom(function = "validate_email"))]
    pub business_email: String,
    #[validate(length(min = 1, max = 100))]
    pub company_name: String,
    #[validate(length(min = 1))]
    pub material_type: String,
    #[validate(length(min = 1))]
    pub estimated_quantity: String,
    #[validate(length(max = 2000))]
    pub additional_details: Option<String>,
}

impl IntakeForm for PurchasingForm {
    const KIND: FormKind = FormKind::PurchasingRequest;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("fullName", "full_name", "Full name"),
        FieldSpec::new("businessEmail", "business_email", "Business email"),
        FieldSpec::new("companyName", "company_name", "Company name"),
        FieldSpec::new("materialType", "material_type", "Material type"),
        FieldSpec::new("estimatedQuantity", "estimated_quantity", "Estimated quantity"),
        FieldSpec::new("additionalDetails", "additional_details", "Additional details"),
    ];
    const CONFIRMATION: &'static str = "Purchasing request sent successfully.";

    fn from_submission(form: &SubmittedForm) -> Self {
        Self {
            full_name: form.text("fullName"),
            business_email: form.text("businessEmail"),
            company_name: form.text("companyName"),
            material_type: form.text("materialType"),
            estimated_quantity: form.text("estimatedQuantity"),
            additional_details: form.optional("additionalDetails"),
        }
    }

    fn reply_to(&self) -> ReplyTo {
        ReplyTo::Submitter(self.business_email.to_owned())
    }

    fn compose(&self) -> Result<EmailContent, askama::Error> {
        let full_name = sanitize_text(&self.full_name);
        let company_name = sanitize_text(&self.company_name);
        let material_type = sanitize_text(&self.material_type);
        let estimated_quantity = sanitize_text(&self.estimated_quantity);

        let html = PurchasingHtml {
            full_name: &full_name,
            company_name: &company_name,
            business_email: &self.business_email,
            material_type: &material_type,
            estimated_quantity: &estimated_quantity,
            additional_details: self
                .additional_details
                .as_deref()
                .map(sanitize_multiline)
                .as_deref(),
        }
        .render()?;

        let text = PurchasingPlain {
            full_name: &full_name,
            company_name: &company_name,
            business_email: &self.business_email,
            material_type: &material_type,
            estimated_quantity: &estimated_quantity,
            additional_details: self
                .additional_details
                .as_deref()
                .map(sanitize_text)
                .as_deref(),
        }
        .render()?;

        Ok(EmailContent {
            subject: format!(
                "New Purchasing Request: {} - {}",
                self.material_type, self.company_name
            ),
            html,
            text,
        })
    }
}

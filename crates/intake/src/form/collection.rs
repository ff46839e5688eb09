use askama::Template;
use sgvrecycle_notification::template::{CollectionHtml, CollectionPlain};
use validator::Validate;

use super::{EmailContent, FieldSpec, FormKind, IntakeForm, ReplyTo};
use crate::{SubmittedForm, sanitize_text};

#[derive(Debug, Clone, Validate)]
pub struct CollectionForm {
    #[validate(length(min = 1, max = 100))]
    pub company_name: String,
    #[validate(length(min = 1, max = 100))]
    pub contact_name: String,
    #[validate(length(min = 1, max = 20))]
    pub phone_number: String,
    #[validate(length(min = 1))]
    pub material_type: String,
    #[validate(length(min = 1, max = 500))]
    pub postcode: String,
    #[validate(length(min = 1, max = 100))]
    pub estimated_weight: String,
}

impl IntakeForm for CollectionForm {
    const KIND: FormKind = FormKind::CollectionRequest;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("companyName", "company_name", "Company name"),
        FieldSpec::new("contactName", "contact_name", "Contact name"),
        FieldSpec::new("phoneNumber", "phone_number", "Phone number"),
        FieldSpec::new("materialType", "material_type", "Material type"),
        FieldSpec::new("postcode", "postcode", "Postcode/Address"),
        FieldSpec::new("estimatedWeight", "estimated_weight", "Estimated weight"),
    ];
    const CONFIRMATION: &'static str = "Collection request sent successfully.";

    fn from_submission(form: &SubmittedForm) -> Self {
        Self {
            company_name: form.text("companyName"),
            contact_name: form.text("contactName"),
            phone_number: form.text("phoneNumber"),
            material_type: form.text("materialType"),
            postcode: form.text("postcode"),
            estimated_weight: form.text("estimatedWeight"),
        }
    }

    // The collection form never asks for an email address.
    fn reply_to(&self) -> ReplyTo {
        ReplyTo::Named(self.contact_name.to_owned())
    }

    fn compose(&self) -> Result<EmailContent, askama::Error> {
        let company_name = sanitize_text(&self.company_name);
        let contact_name = sanitize_text(&self.contact_name);
        let phone_number = sanitize_text(&self.phone_number);
        let material_type = sanitize_text(&self.material_type);
        let postcode = sanitize_text(&self.postcode);
        let estimated_weight = sanitize_text(&self.estimated_weight);

        let html = CollectionHtml {
            company_name: &company_name,
            contact_name: &contact_name,
            phone_number: &phone_number,
            material_type: &material_type,
            postcode: &postcode,
            estimated_weight: &estimated_weight,
        }
        .render()?;

        let text = CollectionPlain {
            company_name: &company_name,
            contact_name: &contact_name,
            phone_number: &phone_number,
            material_type: &material_type,
            postcode: &postcode,
            estimated_weight: &estimated_weight,
        }
        .render()?;

        Ok(EmailContent {
            subject: format!(
                "New Collection Request: {} - {}",
                self.material_type, self.postcode
            ),
            html,
            text,
        })
    }
}

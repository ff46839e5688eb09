//! Notification bodies for each intake form.
//!
//! Free-text values handed to the HTML templates must already be sanitized:
//! they are emitted with `|safe` so entities are not escaped twice. Email
//! addresses go through askama's own escaping.

use askama::Template;

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactHtml<'a> {
    pub topic: &'a str,
    pub full_name: &'a str,
    pub company: Option<&'a str>,
    pub email: &'a str,
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "contact.txt")]
pub struct ContactPlain<'a> {
    pub topic: &'a str,
    pub full_name: &'a str,
    pub company: Option<&'a str>,
    pub email: &'a str,
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "collection-request.html")]
pub struct CollectionHtml<'a> {
    pub company_name: &'a str,
    pub contact_name: &'a str,
    pub phone_number: &'a str,
    pub material_type: &'a str,
    pub postcode: &'a str,
    pub estimated_weight: &'a str,
}

#[derive(Template)]
#[template(path = "collection-request.txt")]
pub struct CollectionPlain<'a> {
    pub company_name: &'a str,
    pub contact_name: &'a str,
    pub phone_number: &'a str,
    pub material_type: &'a str,
    pub postcode: &'a str,
    pub estimated_weight: &'a str,
}

#[derive(Template)]
#[template(path = "purchasing-request.html")]
pub struct PurchasingHtml<'a> {
    pub full_name: &'a str,
    pub company_name: &'a str,
    pub business_email: &'a str,
    pub material_type: &'a str,
    pub estimated_quantity: &'a str,
    pub additional_details: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "purchasing-request.txt")]
pub struct PurchasingPlain<'a> {
    pub full_name: &'a str,
    pub company_name: &'a str,
    pub business_email: &'a str,
    pub material_type: &'a str,
    pub estimated_quantity: &'a str,
    pub additional_details: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "valuation-request.html")]
pub struct ValuationHtml<'a> {
    pub name: &'a str,
    pub company: Option<&'a str>,
    pub email: &'a str,
    pub material_category: &'a str,
    pub estimated_weight: &'a str,
    pub sale_type: &'a str,
    pub material_grade: &'a str,
}

#[derive(Template)]
#[template(path = "valuation-request.txt")]
pub struct ValuationPlain<'a> {
    pub name: &'a str,
    pub company: Option<&'a str>,
    pub email: &'a str,
    pub material_category: &'a str,
    pub estimated_weight: &'a str,
    pub sale_type: &'a str,
    pub material_grade: &'a str,
}

mod error;
pub mod form;
mod handler;
mod result;
mod sanitize;
mod submission;
mod validation;
mod view;

pub use error::*;
pub use form::{
    CollectionForm, ContactForm, FormKind, IntakeForm, PurchasingForm, Topic, ValuationForm,
};
pub use handler::*;
pub use result::*;
pub use sanitize::*;
pub use submission::*;
pub use validation::Issue;
pub use view::*;

use crate::HandlerResult;

/// Form state as the page sees it while a submission is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormView {
    #[default]
    Idle,
    /// Back to idle after a failed attempt, with the error to show.
    Failed(String),
    Submitting,
    Success(Option<String>),
}

impl FormView {
    pub fn can_submit(&self) -> bool {
        matches!(self, FormView::Idle | FormView::Failed(_))
    }

    /// Enter `Submitting`. Ignored while a submission is in flight or done.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }

        *self = FormView::Submitting;
        true
    }

    /// Apply the handler's answer. Ignored unless a submission is in flight.
    pub fn resolve(&mut self, result: &HandlerResult) {
        if *self != FormView::Submitting {
            return;
        }

        *self = if result.success {
            FormView::Success(result.message.to_owned())
        } else {
            FormView::Failed(
                result
                    .error
                    .to_owned()
                    .unwrap_or_else(|| crate::UNEXPECTED.to_owned()),
            )
        };
    }

    pub fn reset(&mut self) {
        *self = FormView::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_then_success() {
        let mut view = FormView::default();

        assert!(view.submit());
        assert!(!view.submit());

        view.resolve(&HandlerResult::sent("Collection request sent successfully.", "abc"));
        assert_eq!(
            view,
            FormView::Success(Some("Collection request sent successfully.".to_string()))
        );
        assert!(!view.can_submit());

        view.reset();
        assert_eq!(view, FormView::Idle);
    }

    #[test]
    fn test_failure_returns_to_idle_with_error() {
        let mut view = FormView::default();
        view.submit();
        view.resolve(&HandlerResult::failed(crate::DELIVERY_FAILED));

        assert_eq!(view, FormView::Failed(crate::DELIVERY_FAILED.to_string()));
        assert!(view.submit());
    }

    #[test]
    fn test_resolve_without_submit_is_ignored() {
        let mut view = FormView::default();
        view.resolve(&HandlerResult::accepted());

        assert_eq!(view, FormView::Idle);
    }
}

use std::rc::Rc;
use std::time::Duration;

use crate::config::FormConfig;
use crate::dom::{Dom, DomError, DomResult};
use crate::markup::{
    CONTACT_FORM_ID, EMAIL_FIELD_ID, FEEDBACK_CLASS, FEEDBACK_NOTE_CLASS, MESSAGE_FIELD_ID,
    NAME_FIELD_ID,
};
use crate::scheduler::Scheduler;

mod submitter;
mod validation;

pub use submitter::{SimulatedSubmitter, SubmitCallback, SubmitError, Submitter};
pub use validation::{is_valid_email, Field, FormError, FormFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn class_name(self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

const FEEDBACK_LAYOUT: [(&str, &str); 4] = [
    ("padding", "0.75rem 1rem"),
    ("border-radius", "8px"),
    ("margin-top", "0.75rem"),
    ("text-align", "center"),
];

/// A message shown under the form until it expires or is replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFeedback {
    pub message: String,
    pub kind: FeedbackKind,
    pub expires_after: Duration,
}

/// Contact form: validation, submission and transient feedback.
///
/// Cheap to clone; clones drive the same form.
pub struct ContactFormController<D: Dom> {
    inner: Rc<FormInner<D>>,
}

impl<D: Dom> Clone for ContactFormController<D> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct FormInner<D: Dom> {
    dom: Rc<D>,
    scheduler: Rc<dyn Scheduler>,
    submitter: Rc<dyn Submitter>,
    config: FormConfig,
    form: D::Node,
    name: D::Node,
    email: D::Node,
    message: D::Node,
    submit_button: D::Node,
}

impl<D: Dom + 'static> ContactFormController<D> {
    pub fn mount(
        dom: Rc<D>,
        scheduler: Rc<dyn Scheduler>,
        submitter: Rc<dyn Submitter>,
        config: &FormConfig,
    ) -> DomResult<Self> {
        let form = dom.element_by_id_or_err(CONTACT_FORM_ID)?;
        let name = dom.element_by_id_or_err(NAME_FIELD_ID)?;
        let email = dom.element_by_id_or_err(EMAIL_FIELD_ID)?;
        let message = dom.element_by_id_or_err(MESSAGE_FIELD_ID)?;
        let submit_button = ["button", "input"]
            .iter()
            .flat_map(|tag| dom.query_tag(&form, tag))
            .find(|node| dom.attribute(node, "type").as_deref() == Some("submit"))
            .ok_or_else(|| {
                DomError::MissingElement(format!("#{CONTACT_FORM_ID} [type=submit]"))
            })?;

        tracing::debug!("Contact form mounted");
        Ok(Self {
            inner: Rc::new(FormInner {
                dom,
                scheduler,
                submitter,
                config: config.clone(),
                form,
                name,
                email,
                message,
                submit_button,
            }),
        })
    }

    pub fn form(&self) -> &D::Node {
        &self.inner.form
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.inner.dom.is_disabled(&self.inner.submit_button)
    }

    /// Handle a submit of the form.
    ///
    /// Ignored while a previous submission is pending. Validation failures
    /// only surface as feedback.
    pub fn submit(&self) {
        let inner = &self.inner;
        if self.is_submitting() {
            tracing::debug!("Submit ignored, submission pending");
            return;
        }

        let fields = inner.read_fields().trimmed();
        if let Err(e) = fields.validate() {
            tracing::debug!(error = %e, "Contact form rejected");
            let message = match e {
                FormError::MissingField(_) => &inner.config.messages.missing_fields,
                FormError::InvalidEmailFormat => &inner.config.messages.invalid_email,
            };
            inner.show_feedback(&inner.feedback(message, FeedbackKind::Error));
            return;
        }

        inner.dom.set_disabled(&inner.submit_button, true);
        inner
            .dom
            .set_text(&inner.submit_button, &inner.config.labels.sending);
        tracing::debug!("Contact form submitting");

        let this = self.inner.clone();
        inner
            .submitter
            .submit(fields, Box::new(move |result| this.complete(result)));
    }
}

impl<D: Dom + 'static> FormInner<D> {
    fn read_fields(&self) -> FormFields {
        FormFields::new(
            self.dom.value(&self.name),
            self.dom.value(&self.email),
            self.dom.value(&self.message),
        )
    }

    fn complete(&self, result: Result<(), SubmitError>) {
        self.dom.set_disabled(&self.submit_button, false);
        self.dom.set_text(&self.submit_button, &self.config.labels.idle);

        match result {
            Ok(()) => {
                for field in [&self.name, &self.email, &self.message] {
                    self.dom.set_value(field, "");
                }
                tracing::info!("Contact form sent");
                let feedback = self.feedback(&self.config.messages.success, FeedbackKind::Success);
                self.show_feedback(&feedback);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact form submission failed");
                let feedback = self.feedback(&self.config.messages.failure, FeedbackKind::Error);
                self.show_feedback(&feedback);
            }
        }
    }

    fn feedback(&self, message: &str, kind: FeedbackKind) -> FormFeedback {
        FormFeedback {
            message: message.to_string(),
            kind,
            expires_after: self.config.feedback_lifetime(),
        }
    }

    /// Replace whatever feedback is showing and schedule this one's removal.
    fn show_feedback(&self, feedback: &FormFeedback) {
        for stale in self.dom.query_class(&self.form, FEEDBACK_CLASS) {
            self.dom.remove(&stale);
        }

        let node = match self.dom.create_element("p") {
            Ok(node) => node,
            Err(e) => {
                tracing::warn!(error = %e, "Could not create form feedback");
                return;
            }
        };
        self.dom.add_class(&node, FEEDBACK_CLASS);
        self.dom.add_class(&node, FEEDBACK_NOTE_CLASS);
        self.dom.add_class(&node, feedback.kind.class_name());
        self.dom.set_attribute(&node, "role", "status");
        self.apply_feedback_style(&node, feedback.kind);
        self.dom.set_text(&node, &feedback.message);
        self.dom.append_child(&self.form, &node);
        self.dom.scroll_into_view(&node);

        let dom = self.dom.clone();
        self.scheduler
            .after(feedback.expires_after, Box::new(move || dom.remove(&node)));
    }

    fn apply_feedback_style(&self, node: &D::Node, kind: FeedbackKind) {
        let styles = &self.config.feedback_styles;
        let style = match kind {
            FeedbackKind::Success => &styles.success,
            FeedbackKind::Error => &styles.error,
        };
        self.dom.set_style(node, "color", &style.color);
        self.dom.set_style(node, "background", &style.background);
        self.dom.set_style(node, "border", &style.border);
        for (property, value) in FEEDBACK_LAYOUT {
            self.dom.set_style(node, property, value);
        }
    }
}

use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

use super::validation::FormFields;
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Submission rejected: {0}")]
    Rejected(String),
    #[error("Submission transport failed: {0}")]
    Transport(String),
}

pub type SubmitCallback = Box<dyn FnOnce(Result<(), SubmitError>)>;

/// Where validated contact requests go.
pub trait Submitter {
    /// Deliver `fields` and call `on_complete` exactly once, later.
    fn submit(&self, fields: FormFields, on_complete: SubmitCallback);
}

/// Stand-in for a form endpoint: always succeeds after a fixed latency.
pub struct SimulatedSubmitter {
    scheduler: Rc<dyn Scheduler>,
    latency: Duration,
}

impl SimulatedSubmitter {
    pub fn new(scheduler: Rc<dyn Scheduler>, latency: Duration) -> Self {
        Self { scheduler, latency }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, fields: FormFields, on_complete: SubmitCallback) {
        tracing::info!(
            name_len = fields.name.len(),
            message_len = fields.message.len(),
            latency_ms = self.latency.as_millis() as u64,
            "Simulating contact submission"
        );
        self.scheduler
            .after(self.latency, Box::new(move || on_complete(Ok(()))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::cell::RefCell;

    #[test]
    fn test_simulated_submitter_completes_after_latency() {
        let scheduler = Rc::new(ManualScheduler::new());
        let submitter = SimulatedSubmitter::new(scheduler.clone(), Duration::from_millis(1400));
        let result = Rc::new(RefCell::new(None));
        let sink = result.clone();

        submitter.submit(
            FormFields::new("Farah", "f@x.io", "Hello"),
            Box::new(move |outcome| *sink.borrow_mut() = Some(outcome)),
        );

        scheduler.advance_ms(1399);
        assert_eq!(*result.borrow(), None);
        scheduler.advance_ms(1);
        assert_eq!(*result.borrow(), Some(Ok(())));
    }
}

use crate::jobs::domain::classification_runner::{ClassificationError, ClassificationRunner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JobState {
    Idle,
    Running,
}

/// Drives the remote classification job. At most one job per
/// controller: `start` while a job is running reports
/// `AlreadyInProgress` instead of issuing a second trigger.
pub struct ClassificationJobController {
    runner: Box<dyn ClassificationRunner>,
    state: JobState,
}

impl ClassificationJobController {
    pub fn new(runner: Box<dyn ClassificationRunner>) -> Self {
        Self {
            runner,
            state: JobState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == JobState::Running
    }

    /// Triggers the job and waits for the service to settle it.
    /// Whatever the outcome, the controller is ready for another run
    /// afterwards; on success the caller refreshes the result set.
    pub fn start(&mut self) -> Result<(), ClassificationError> {
        if self.state == JobState::Running {
            return Err(ClassificationError::AlreadyInProgress);
        }
        self.state = JobState::Running;
        log::info!("classification job started");
        let outcome = self.runner.run_classification();
        self.state = JobState::Idle;
        match &outcome {
            Ok(()) => log::info!("classification job finished"),
            Err(e) => log::warn!("classification job failed: {e}"),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    struct StubRunner {
        calls: Arc<Mutex<usize>>,
        fail: bool,
    }

    impl StubRunner {
        fn new(fail: bool) -> Self {
            Self {
                calls: Arc::new(Mutex::new(0)),
                fail,
            }
        }
    }

    impl ClassificationRunner for StubRunner {
        fn run_classification(&self) -> Result<(), ClassificationError> {
            *self.calls.lock().unwrap() += 1;
            if self.fail {
                Err(ClassificationError::Failed { status: 500 })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_start_triggers_exactly_one_request() {
        let runner = StubRunner::new(false);
        let calls = runner.calls.clone();
        let mut controller = ClassificationJobController::new(Box::new(runner));

        controller.start().unwrap();

        assert_eq!(*calls.lock().unwrap(), 1);
        assert!(!controller.is_running());
    }

    #[test]
    fn test_failure_returns_to_idle_and_allows_retry() {
        let runner = StubRunner::new(true);
        let calls = runner.calls.clone();
        let mut controller = ClassificationJobController::new(Box::new(runner));

        let err = controller.start().unwrap_err();
        assert!(matches!(err, ClassificationError::Failed { status: 500 }));
        assert!(!controller.is_running());

        // retry goes through again
        let _ = controller.start();
        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[test]
    fn test_start_while_running_sends_no_second_trigger() {
        let runner = StubRunner::new(false);
        let calls = runner.calls.clone();
        let mut controller = ClassificationJobController::new(Box::new(runner));
        controller.state = JobState::Running;

        let err = controller.start().unwrap_err();

        assert!(matches!(err, ClassificationError::AlreadyInProgress));
        assert_eq!(*calls.lock().unwrap(), 0);
        assert!(controller.is_running());
    }
}

pub mod event;
pub mod scheduler;
pub mod submission;

pub use event::FormEvent;
pub use scheduler::{Scheduler, SchedulerCommand};
pub use submission::{
    FormController, Receipt, SimulatedSubmitter, SubmissionTimings, SubmitOutcome, Submitter,
};

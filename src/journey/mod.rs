//! Journey state machine, its change notifications and deferred tasks

mod driver;
mod events;
mod machine;
mod scheduler;


pub use driver::settle;
pub use events::JourneyEvent;
pub use machine::{Journey, JourneyOptions, JourneyState};
pub use scheduler::{
    Clock, DeferredTask, ManualClock, Scheduler, SystemClock, TaskHandle, TokioClock,
};

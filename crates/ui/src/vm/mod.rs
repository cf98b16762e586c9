mod filter_vm;
mod session_vm;

pub use filter_vm::{ALL_LABEL, FilterFormVm};
pub use session_vm::{SessionIntent, SessionPhase, SessionVm, start_session};

// ============================================================================
// STATE MODULE - State management with Rc<RefCell> + notifications
// ============================================================================

pub mod app_state;
pub mod lifecycle;
pub mod reactivity;

pub use app_state::*;
pub use lifecycle::*;
pub use reactivity::*;

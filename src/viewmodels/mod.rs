pub mod listing_viewmodel;
pub mod login_viewmodel;

pub use listing_viewmodel::{ListingState, ListingViewModel};
pub use login_viewmodel::{LoginPhase, LoginState, LoginViewModel};

//! Page behaviours. Each controller owns the elements it looked up at mount
//! time and never calls another controller.

mod active_section;
mod contact_form;
mod hero;
mod lightbox;
mod navigation;
mod reveal;
mod tabs;

pub use active_section::ActiveSectionController;
pub use contact_form::{
    is_valid_email, ContactFormController, FeedbackKind, Field, FormError, FormFeedback,
    FormFields, SimulatedSubmitter, SubmitCallback, SubmitError, Submitter,
};
pub use hero::reveal_hero;
pub use lightbox::{GalleryEntry, LightboxController, LightboxState};
pub use navigation::{MenuState, NavigationController};
pub use reveal::RevealController;
pub use tabs::{TabController, TabSelection};

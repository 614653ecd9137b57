//! Page components. Each reads the shared page context.

pub mod contact_form;
pub mod lightbox;
pub mod nav;
pub mod profile;
pub mod projects;
pub mod section;
pub mod settings_panel;
pub mod toasts;

pub use contact_form::ContactPanel;
pub use lightbox::Lightbox;
pub use nav::Nav;
pub use profile::ProfileCard;
pub use projects::ProjectCard;
pub use section::Section;
pub use settings_panel::SettingsPanel;
pub use toasts::Toasts;

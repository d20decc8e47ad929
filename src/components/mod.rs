mod device_frame;
mod header;
mod project_card;
mod project_feed;
mod projects_placeholder;
mod theme_toggle;

pub use device_frame::{DeviceFrame, FrameGeometry};
pub use header::Header;
pub use project_card::ProjectCard;
pub use project_feed::{ProjectFeed, ProjectFeedEmpty};
pub use projects_placeholder::ProjectsPlaceholder;
pub use theme_toggle::ThemeToggle;

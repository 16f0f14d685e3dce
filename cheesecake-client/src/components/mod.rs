pub mod comments;
pub mod fleet;
pub mod locations;
pub mod navigation;
pub mod notifications;
pub mod package;
pub mod trips;

pub use comments::CommentsSection;
pub use fleet::FleetSection;
pub use locations::LocationsSection;
pub use navigation::Navigation;
pub use notifications::NotificationContainer;
pub use package::PackageButton;
pub use trips::TripsSection;

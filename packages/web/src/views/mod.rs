mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod login;
pub use login::{Login, Signup};

mod add_tour;
pub use add_tour::AddTour;

mod profile;
pub use profile::Profile;

mod dashboard;
pub use dashboard::Dashboard;

mod tour_search;
pub use tour_search::TourSearch;

mod not_found;
pub use not_found::NotFound;

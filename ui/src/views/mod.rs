mod home;
pub use home::Home;

mod trends;
pub use trends::Trends;

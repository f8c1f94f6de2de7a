//! Shared UI crate for Lumiderm. Cross-platform logic and views live here.

pub mod core;
pub mod trends;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

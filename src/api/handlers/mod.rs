//! HTTP request handlers, one module per endpoint.

pub mod home;
pub mod redirect;
pub mod shorten;
pub mod show;

pub use home::home_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use show::show_handler;

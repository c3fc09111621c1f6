pub mod cookies;

pub use cookies::Credentials;

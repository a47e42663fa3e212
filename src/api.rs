pub mod inverter;
mod status_page;

pub use self::status_page::StatusPage;

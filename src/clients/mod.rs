//! Client modules for external API interactions

pub mod mail_client;

pub use mail_client::MailClient;

pub mod auth;
pub mod cart;
pub mod message_bus;
pub mod notification;
pub mod payment;
pub mod product;
pub mod profile;
pub mod state;

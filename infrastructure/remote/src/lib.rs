pub mod client;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod interceptor;
pub mod response;
mod serde_helpers;

pub mod auth {
    pub mod dto;
    pub mod repository;
    pub mod service;
}
pub mod cart {
    pub mod dto;
    pub mod repository;
    pub mod service;
}
pub mod notification {
    pub mod dto;
    pub mod repository;
    pub mod service;
}
pub mod order {
    pub mod dto;
    pub mod repository;
}
pub mod payment {
    pub mod dto;
    pub mod repository;
    pub mod service;
}
pub mod product {
    pub mod dto;
    pub mod repository;
    pub mod service;
}
pub mod user {
    pub mod dto;
    pub mod repository;
    pub mod service;
}

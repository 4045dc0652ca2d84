pub mod domain;
pub mod dto;
pub mod google_auth;

//! External service clients

pub mod pairing;

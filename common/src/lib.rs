//! Types shared by the form frontend and the form server.

pub mod controls;
pub mod error;
pub mod model;
pub mod requests;

mod contact;
pub mod health_check;

pub use contact::{ContactFormData, json_config, submit_contact};
pub use health_check::*;

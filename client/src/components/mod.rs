//! Reusable UI components.

pub mod auth_form;
pub mod password_field;

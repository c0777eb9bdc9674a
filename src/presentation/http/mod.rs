pub mod endpoints;
pub mod form_body;
pub mod mappers;
pub mod requests;
pub mod responses;

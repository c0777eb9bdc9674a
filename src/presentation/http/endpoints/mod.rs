pub mod health;
pub mod root;
pub mod timeline;

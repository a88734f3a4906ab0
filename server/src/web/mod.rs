pub mod pages;
pub mod server;
pub mod view;

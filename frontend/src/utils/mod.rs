pub mod dom;
pub mod hooks;

pub mod build;
pub mod issue;
pub mod template;
pub mod validate;

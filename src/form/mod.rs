pub mod dates;
pub mod document;
pub mod email;
pub mod issue;
pub mod snapshot;
pub mod validator;

use thiserror::Error;

/// A script token stream that does not match the grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("expected {expected}, found end of input")]
    MissingToken { expected: &'static str },

    #[error("expected an integer for {field}, found `{token}`")]
    InvalidInteger { field: &'static str, token: String },
}

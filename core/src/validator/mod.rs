mod validator;

pub use validator::{type_of, validate};

#[cfg(test)]
mod validator_test;

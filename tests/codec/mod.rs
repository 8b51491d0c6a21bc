//! Integration tests for the XML codec.
//!
//! These drive the public `decode`/`encode` surface with whole finding aids
//! and check the results against the object model and the raw input.

pub mod tests_components;
pub mod tests_optionality;
pub mod tests_round_trip;

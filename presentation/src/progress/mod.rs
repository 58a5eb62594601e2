//! Progress reporting while the model is working

pub mod reporter;

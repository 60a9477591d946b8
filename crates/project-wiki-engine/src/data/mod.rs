//! Static project records used for content modelling.

mod example;

pub use example::example;

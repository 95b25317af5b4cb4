pub mod fixture;

pub use fixture::{collect, FixtureError};

pub mod server;
pub use server::*;

/// Fixture location for sharing via Leptos context and API state.
/// `None` serves the built-in fleet.
#[derive(Clone, Debug, Default)]
pub struct FixtureSource(pub Option<String>);

impl FixtureSource {
    pub fn path(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

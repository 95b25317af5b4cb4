use fleet_types::FixtureSource;

#[derive(Clone, Default)]
pub struct AppState {
    pub fixture: FixtureSource,
}

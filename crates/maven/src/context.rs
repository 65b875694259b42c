use crate::settings::MavenSettings;

/// Run-scoped state shared with the external parsers.
///
/// One context lives for one invocation; resolved user settings are recorded
/// here so the descriptor parser can retrieve them alongside the request.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    maven_settings: Option<MavenSettings>,
    active_profiles: Vec<String>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records parsed settings and adopts their active profiles as
    /// resolution input.
    pub fn set_maven_settings(&mut self, settings: MavenSettings) {
        self.active_profiles = settings.active_profiles.clone();
        self.maven_settings = Some(settings);
    }

    pub fn maven_settings(&self) -> Option<&MavenSettings> {
        self.maven_settings.as_ref()
    }

    pub fn active_profiles(&self) -> &[String] {
        &self.active_profiles
    }
}

use crate::context::ExecutionContext;
use anyhow::{Context, Result};
use pedigree_core::FileSystem;
use roxmltree::Document;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Effective user-level settings extracted from `settings.xml`.
///
/// Only the parts this core consumes are modeled; everything else in the
/// document is left to the descriptor parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MavenSettings {
    /// Profiles named under `<activeProfiles>`, plus profiles whose
    /// activation block sets `<activeByDefault>true</activeByDefault>`.
    pub active_profiles: Vec<String>,
    pub local_repository: Option<PathBuf>,
}

impl MavenSettings {
    pub fn parse(content: &str) -> Result<Self> {
        let doc = Document::parse(content).context("Malformed settings document")?;
        let root = doc.root_element();

        let mut active_profiles = Vec::new();
        let mut local_repository = None;

        for child in root.children() {
            if child.has_tag_name("activeProfiles") {
                for profile in child.children() {
                    if profile.has_tag_name("activeProfile") {
                        if let Some(text) = profile.text() {
                            push_unique(&mut active_profiles, text.trim());
                        }
                    }
                }
            }
            if child.has_tag_name("localRepository") {
                local_repository = child.text().map(|t| PathBuf::from(t.trim()));
            }
            if child.has_tag_name("profiles") {
                for profile in child.children() {
                    if profile.has_tag_name("profile") && is_active_by_default(&profile) {
                        if let Some(id) = profile_id(&profile) {
                            push_unique(&mut active_profiles, &id);
                        }
                    }
                }
            }
        }

        Ok(Self {
            active_profiles,
            local_repository,
        })
    }
}

fn push_unique(profiles: &mut Vec<String>, name: &str) {
    if !name.is_empty() && !profiles.iter().any(|p| p == name) {
        profiles.push(name.to_string());
    }
}

fn is_active_by_default(profile: &roxmltree::Node<'_, '_>) -> bool {
    profile
        .children()
        .find(|n| n.has_tag_name("activation"))
        .and_then(|activation| {
            activation
                .children()
                .find(|n| n.has_tag_name("activeByDefault"))
        })
        .and_then(|n| n.text())
        .map(|t| t.trim() == "true")
        .unwrap_or(false)
}

fn profile_id(profile: &roxmltree::Node<'_, '_>) -> Option<String> {
    profile
        .children()
        .find(|n| n.has_tag_name("id"))
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
}

/// Loads the user's settings document, if any.
///
/// A missing file is the normal case and returns `None`; an unreadable or
/// malformed file is logged and also returns `None` — partial settings are
/// never surfaced. On success the settings are recorded on `ctx` for the
/// descriptor parser to retrieve.
pub fn load_settings(
    fs: &dyn FileSystem,
    settings_path: &Path,
    ctx: &mut ExecutionContext,
) -> Option<MavenSettings> {
    if !fs.exists(settings_path) {
        debug!(path = %settings_path.display(), "No user settings document");
        return None;
    }

    let content = match fs.read_to_string(settings_path) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                path = %settings_path.display(),
                error = format!("{:#}", e).as_str(),
                "Unable to load user settings. Skipping."
            );
            return None;
        }
    };

    match MavenSettings::parse(&content) {
        Ok(settings) => {
            debug!(
                active_profiles = settings.active_profiles.len(),
                "Loaded user settings"
            );
            ctx.set_maven_settings(settings.clone());
            Some(settings)
        }
        Err(e) => {
            warn!(
                path = %settings_path.display(),
                error = format!("{:#}", e).as_str(),
                "Unable to parse user settings. Skipping."
            );
            None
        }
    }
}

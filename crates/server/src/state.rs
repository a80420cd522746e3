//! Application state shared across handlers.

use std::sync::Arc;

use makeready_core::DisplayName;

use crate::auth::RoleAuthority;
use crate::catalog::PlanCatalog;
use crate::config::ServerConfig;
use crate::store::{ContactStore, ProfileStore, PropertyStore, RequestStore};

/// Display name given to bootstrap-seeded admin profiles; the admin can
/// rename it with a normal profile save.
const BOOTSTRAP_ADMIN_NAME: &str = "Administrator";

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// entity stores, the plan catalog, and the role authority.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    profiles: Arc<ProfileStore>,
    properties: PropertyStore,
    requests: RequestStore,
    contact: ContactStore,
    catalog: PlanCatalog,
    authority: RoleAuthority,
}

impl AppState {
    /// Create a new application state, seeding the configured bootstrap
    /// admins into the profile store.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let profiles = Arc::new(ProfileStore::new());

        let seed_name =
            DisplayName::parse(BOOTSTRAP_ADMIN_NAME).expect("bootstrap admin name is non-empty");
        for principal in &config.bootstrap_admins {
            tracing::info!(principal = %principal, "Seeding bootstrap admin");
            profiles.seed_admin(principal.clone(), seed_name.clone());
        }
        if config.bootstrap_admins.is_empty() {
            tracing::warn!(
                "No bootstrap admins configured; status triage and role assignment \
                 will be unavailable until an admin exists"
            );
        }

        let authority = RoleAuthority::new(Arc::clone(&profiles));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                profiles,
                properties: PropertyStore::new(),
                requests: RequestStore::new(),
                contact: ContactStore::new(),
                catalog: PlanCatalog::seeded(),
                authority,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the profile store.
    #[must_use]
    pub fn profiles(&self) -> &ProfileStore {
        &self.inner.profiles
    }

    /// Get a reference to the property store.
    #[must_use]
    pub fn properties(&self) -> &PropertyStore {
        &self.inner.properties
    }

    /// Get a reference to the service request store.
    #[must_use]
    pub fn requests(&self) -> &RequestStore {
        &self.inner.requests
    }

    /// Get a reference to the contact form store.
    #[must_use]
    pub fn contact(&self) -> &ContactStore {
        &self.inner.contact
    }

    /// Get a reference to the plan catalog.
    #[must_use]
    pub fn catalog(&self) -> &PlanCatalog {
        &self.inner.catalog
    }

    /// Get a reference to the role authority.
    #[must_use]
    pub fn authority(&self) -> &RoleAuthority {
        &self.inner.authority
    }
}

//! Admin login.
//!
//! Credentials come from `[admin]` configuration. A successful login writes a
//! small session file; its presence is what makes the current user an admin
//! until `logout` removes it or the configured session TTL runs out.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use quiz_config::AdminConfig;
use serde::{Deserialize, Serialize};

use crate::error::AuthorError;

/// Contents of the admin session file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub username: String,
    pub logged_in_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AdminAuth {
    username: String,
    password: String,
    session_file: PathBuf,
    session_ttl: Option<TimeDelta>,
}

impl AdminAuth {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        session_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            session_file: session_file.into(),
            session_ttl: None,
        }
    }

    /// Expire logins older than `ttl`. `None` keeps them until logout.
    #[must_use]
    pub fn with_session_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.session_ttl = ttl.and_then(|ttl| TimeDelta::from_std(ttl).ok());
        self
    }

    #[must_use]
    pub fn from_config(config: &AdminConfig, project_root: &Path) -> Self {
        Self::new(
            &config.username,
            &config.password,
            config.resolved_session_file(project_root),
        )
        .with_session_ttl(config.session_ttl())
    }

    #[must_use]
    pub fn session_file(&self) -> &Path {
        &self.session_file
    }

    /// Check credentials and record the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::InvalidCredentials` on a mismatch, or
    /// `AuthorError::SessionStore` if the session file cannot be written.
    pub fn login(&self, username: &str, password: &str) -> Result<AdminSession, AuthorError> {
        if username != self.username || password != self.password {
            tracing::warn!(username, "admin login rejected");
            return Err(AuthorError::InvalidCredentials);
        }
        let session = AdminSession {
            username: username.to_string(),
            logged_in_at: Utc::now(),
        };
        self.write_session(&session)?;
        tracing::info!(username, "admin logged in");
        Ok(session)
    }

    /// Forget the admin session. Logging out twice is fine.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::SessionStore` if the file exists but cannot be removed.
    pub fn logout(&self) -> Result<(), AuthorError> {
        match fs::remove_file(&self.session_file) {
            Ok(()) => {
                tracing::info!("admin logged out");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthorError::SessionStore(format!(
                "failed to delete {}: {e}",
                self.session_file.display()
            ))),
        }
    }

    /// The current session, if logged in. An unreadable file counts as logged
    /// out; an expired one is removed.
    #[must_use]
    pub fn current(&self) -> Option<AdminSession> {
        let content = fs::read_to_string(&self.session_file).ok()?;
        let session: AdminSession = match serde_json::from_str(&content) {
            Ok(session) => session,
            Err(error) => {
                tracing::warn!(%error, path = %self.session_file.display(), "ignoring malformed admin session");
                return None;
            }
        };
        if self.is_expired(&session, Utc::now()) {
            tracing::info!(username = %session.username, "admin session expired");
            if let Err(error) = self.logout() {
                tracing::warn!(%error, "failed to remove expired admin session");
            }
            return None;
        }
        Some(session)
    }

    fn is_expired(&self, session: &AdminSession, now: DateTime<Utc>) -> bool {
        self.session_ttl
            .is_some_and(|ttl| now.signed_duration_since(session.logged_in_at) > ttl)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current().is_some()
    }

    /// # Errors
    ///
    /// Returns `AuthorError::NotAuthenticated` unless logged in.
    pub fn require_admin(&self) -> Result<AdminSession, AuthorError> {
        self.current().ok_or(AuthorError::NotAuthenticated)
    }

    fn write_session(&self, session: &AdminSession) -> Result<(), AuthorError> {
        let path = &self.session_file;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AuthorError::SessionStore(format!("mkdir {}: {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string(session)
            .map_err(|e| AuthorError::SessionStore(format!("serialize session: {e}")))?;
        fs::write(path, json)
            .map_err(|e| AuthorError::SessionStore(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
                tracing::warn!("failed to chmod 0600 {}: {e}", path.display());
            }
        }
        Ok(())
    }
}

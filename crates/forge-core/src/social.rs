use std::time::Duration;

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// One social platform backend.
///
/// Everything here is best-effort boolean: announcement failures must never
/// abort a paper run, so platform errors are logged by the implementation and
/// surfaced only as `false`.
pub trait Platform {
    fn name(&self) -> &str;

    /// Switched on by configuration.
    fn enabled(&self) -> bool;

    /// Has the credentials it needs to post.
    fn configured(&self) -> bool;

    /// One-time initialization (client construction, token checks).
    fn setup(&mut self) -> bool;

    fn post(&self, message: &str) -> bool;
}

// ---------------------------------------------------------------------------
// SocialRouter
// ---------------------------------------------------------------------------

/// Fans a message out to every active platform.
///
/// Overall success means at least one platform accepted the post. A pause of
/// `post_delay` separates consecutive posts, but never follows the last one.
pub struct SocialRouter {
    platforms: Vec<Box<dyn Platform>>,
    post_delay: Duration,
}

impl SocialRouter {
    pub fn new(post_delay: Duration) -> Self {
        Self {
            platforms: Vec::new(),
            post_delay,
        }
    }

    pub fn add(&mut self, platform: Box<dyn Platform>) {
        self.platforms.push(platform);
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Initialize every enabled platform, logging the ones that fail.
    pub fn setup(&mut self) {
        for platform in &mut self.platforms {
            if platform.enabled() && !platform.setup() {
                tracing::error!(platform = platform.name(), "failed to set up platform");
            }
        }
    }

    /// Post to all active platforms; true if at least one succeeded.
    pub fn post_update(&self, message: &str) -> bool {
        if self.platforms.is_empty() {
            tracing::warn!("no social platforms configured");
            return false;
        }

        let active: Vec<&dyn Platform> = self
            .platforms
            .iter()
            .filter(|p| p.enabled() && p.configured())
            .map(|p| p.as_ref())
            .collect();

        if active.is_empty() {
            tracing::warn!("no active social platforms; check platform settings and tokens");
            return false;
        }

        let mut success = false;
        for (i, platform) in active.iter().enumerate() {
            if platform.post(message) {
                tracing::info!(platform = platform.name(), "posted successfully");
                success = true;
            } else {
                tracing::error!(platform = platform.name(), "post failed");
            }
            if i + 1 < active.len() {
                std::thread::sleep(self.post_delay);
            }
        }
        success
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Seam to the component that owns sync, login and config persistence.

use crate::config::AddonConfig;
use crate::error::Result;

/// External collaborator that receives validated settings.
///
/// Implementations may hand work off to their own threads; callers only
/// invoke these methods and return.
pub trait AddonManager {
    /// Replace the active configuration.
    fn update_config(&mut self, config: &AddonConfig) -> Result<()>;

    /// Start (or restart) periodic syncing with the current configuration.
    fn auto_sync(&mut self) -> Result<()>;

    /// Run one sync now.
    fn sync(&mut self) -> Result<()>;

    fn handle_login(&mut self, email: &str, password: &str) -> Result<()>;

    fn handle_logout(&mut self) -> Result<()>;
}

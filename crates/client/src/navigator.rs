//! Navigation seam for forced sign-out

/// Host-router hook invoked when the session cannot be recovered.
///
/// On a failed refresh the coordinator clears the session and calls
/// [`redirect_to_sign_in`](Self::redirect_to_sign_in) with the path the user
/// was on, so the surrounding router can bring them back after
/// re-authentication (the usual rendering is `/sign-in?redirect=<from>`).
pub trait Navigator: Send + Sync {
    /// Path the user is currently on.
    fn current_path(&self) -> String;

    /// Request navigation to the sign-in route.
    fn redirect_to_sign_in(&self, from: &str);
}

/// Navigator that ignores redirects, for headless and batch use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn current_path(&self) -> String {
        "/".to_string()
    }

    fn redirect_to_sign_in(&self, _from: &str) {}
}

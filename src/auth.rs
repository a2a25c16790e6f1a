//! The mock login gate.
//!
//! A single credential pair checked client-side, with a staged
//! "authenticating" delay before access is granted. This is a pitch prop,
//! not a security boundary. The expected credentials default to the demo
//! account and can be overridden from a config file or `OREWATCH_`-prefixed
//! environment variables so an operator can rebrand the login without
//! rebuilding.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

/// How long the fake directory lookup takes.
pub const AUTH_DELAY: Duration = Duration::from_millis(1500);

/// The demo account built into the binary.
const DEFAULT_USER: &str = "marcela@sanlorenzo.cl";
const DEFAULT_PASSWORD: &str = "ICG2025";

/// Expected sign-in credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl Credentials {
    /// Load the expected credentials.
    ///
    /// Layering: built-in defaults, then the optional config file, then
    /// `OREWATCH_AUTH__USER` / `OREWATCH_AUTH__PASSWORD`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("auth.user", DEFAULT_USER)?
            .set_default("auth.password", DEFAULT_PASSWORD)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .add_source(Environment::with_prefix("OREWATCH").separator("__"))
            .build()?;
        Ok(settings.get::<Credentials>("auth")?)
    }
}

/// Which login field receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    User,
    Password,
}

impl Field {
    pub fn toggle(self) -> Self {
        match self {
            Field::User => Field::Password,
            Field::Password => Field::User,
        }
    }
}

/// Transient feedback line under the login form.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    fn info(text: &str) -> Self {
        Self { text: text.to_string(), is_error: false }
    }

    fn error(text: &str) -> Self {
        Self { text: text.to_string(), is_error: true }
    }
}

#[derive(Debug, Clone, Copy)]
enum AuthState {
    SignedOut,
    /// Credentials accepted; waiting out the staged delay.
    Pending { since: Instant },
    SignedIn,
}

/// Login state machine plus the form's input state.
#[derive(Debug)]
pub struct AuthGate {
    expected: Credentials,
    state: AuthState,
    delay: Duration,
    pub user_input: String,
    pub password_input: String,
    pub focus: Field,
    pub notice: Option<Notice>,
}

impl AuthGate {
    pub fn new(expected: Credentials) -> Self {
        Self::with_delay(expected, AUTH_DELAY)
    }

    /// Explicit delay; tests pass `Duration::ZERO`.
    pub fn with_delay(expected: Credentials, delay: Duration) -> Self {
        Self {
            expected,
            state: AuthState::SignedOut,
            delay,
            user_input: String::new(),
            password_input: String::new(),
            focus: Field::default(),
            notice: None,
        }
    }

    /// A gate that is already past the login screen (`--skip-login`).
    pub fn pre_authorized(expected: Credentials) -> Self {
        let mut gate = Self::new(expected);
        gate.state = AuthState::SignedIn;
        gate.user_input = gate.expected.user.clone();
        gate
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.state, AuthState::SignedIn)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, AuthState::Pending { .. })
    }

    /// The account shown in the header once signed in.
    pub fn signed_in_user(&self) -> &str {
        &self.expected.user
    }

    /// Check the typed credentials and start the staged delay on a match.
    pub fn submit(&mut self) {
        if self.is_pending() || self.is_signed_in() {
            return;
        }
        if self.user_input == self.expected.user && self.password_input == self.expected.password {
            self.state = AuthState::Pending { since: Instant::now() };
            self.notice = Some(Notice::info("Authenticating against directory servers..."));
            tracing::info!(user = %self.user_input, "login accepted");
        } else {
            self.notice = Some(Notice::error("Invalid credentials. Try again."));
            tracing::warn!("login rejected");
        }
    }

    /// Promote a pending login once the staged delay has elapsed.
    ///
    /// Returns true on the poll that completes the sign-in, so the caller
    /// can mount the dashboard exactly once.
    pub fn poll(&mut self) -> bool {
        if let AuthState::Pending { since } = self.state {
            if since.elapsed() >= self.delay {
                self.state = AuthState::SignedIn;
                self.notice = None;
                tracing::info!("session opened");
                return true;
            }
        }
        false
    }

    /// Return to the login screen with a blank form.
    pub fn sign_out(&mut self) {
        self.state = AuthState::SignedOut;
        self.user_input.clear();
        self.password_input.clear();
        self.focus = Field::default();
        self.notice = None;
        tracing::info!("session closed");
    }

    /// Type a character into the focused field.
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            Field::User => self.user_input.push(c),
            Field::Password => self.password_input.push(c),
        }
    }

    /// Delete the last character of the focused field.
    pub fn input_backspace(&mut self) {
        match self.focus {
            Field::User => self.user_input.pop(),
            Field::Password => self.password_input.pop(),
        };
    }

    /// Move focus to the other field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn gate() -> AuthGate {
        AuthGate::with_delay(Credentials::default(), Duration::ZERO)
    }

    #[test]
    fn test_correct_credentials_sign_in_after_delay() {
        let mut gate = gate();
        gate.user_input = DEFAULT_USER.to_string();
        gate.password_input = DEFAULT_PASSWORD.to_string();

        gate.submit();
        assert!(gate.is_pending());
        assert!(!gate.notice.as_ref().unwrap().is_error);

        assert!(gate.poll());
        assert!(gate.is_signed_in());
        // poll is edge-triggered: it reports the completion only once.
        assert!(!gate.poll());
    }

    #[test]
    fn test_wrong_credentials_are_rejected() {
        let mut gate = gate();
        gate.user_input = DEFAULT_USER.to_string();
        gate.password_input = "wrong".to_string();

        gate.submit();
        assert!(!gate.is_pending());
        assert!(!gate.poll());
        assert!(gate.notice.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_pending_delay_is_honoured() {
        let mut gate = AuthGate::with_delay(Credentials::default(), Duration::from_secs(3600));
        gate.user_input = DEFAULT_USER.to_string();
        gate.password_input = DEFAULT_PASSWORD.to_string();

        gate.submit();
        assert!(!gate.poll());
        assert!(gate.is_pending());
    }

    #[test]
    fn test_sign_out_clears_the_form() {
        let mut gate = gate();
        gate.user_input = DEFAULT_USER.to_string();
        gate.password_input = DEFAULT_PASSWORD.to_string();
        gate.submit();
        gate.poll();

        gate.sign_out();
        assert!(!gate.is_signed_in());
        assert!(gate.user_input.is_empty());
        assert!(gate.password_input.is_empty());
    }

    #[test]
    fn test_field_input_routing() {
        let mut gate = gate();
        gate.input_char('a');
        gate.focus_next();
        gate.input_char('b');
        assert_eq!(gate.user_input, "a");
        assert_eq!(gate.password_input, "b");

        gate.input_backspace();
        assert!(gate.password_input.is_empty());
    }

    #[test]
    fn test_credentials_default_when_no_overrides() {
        let creds = Credentials::load(None).unwrap();
        assert_eq!(creds, Credentials::default());
    }

    #[test]
    fn test_credentials_from_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[auth]\nuser = \"ops@example.com\"\npassword = \"s3cret\"").unwrap();

        let creds = Credentials::load(Some(file.path())).unwrap();
        assert_eq!(creds.user, "ops@example.com");
        assert_eq!(creds.password, "s3cret");
    }
}

use secrecy::SecretString;
use std::path::PathBuf;

/// SMTP relay settings; absent means outgoing mail is logged, not sent.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: SecretString,
}

/// Process-wide configuration, read once at startup and injected into the
/// server as an immutable extension. No ambient/static state.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub jwt_secret: SecretString,
    pub token_ttl_days: i64,
    pub upload_dir: PathBuf,
    pub smtp: Option<SmtpSettings>,
    pub smtp_from: String,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(jwt_secret: SecretString) -> Self {
        Self {
            jwt_secret,
            token_ttl_days: 7,
            upload_dir: PathBuf::from("uploads"),
            smtp: None,
            smtp_from: String::from("no-reply@vendra.dev"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(SecretString::from("sssh"));
        assert_eq!(args.jwt_secret.expose_secret(), "sssh");
        assert_eq!(args.token_ttl_days, 7);
        assert_eq!(args.upload_dir, PathBuf::from("uploads"));
        assert!(args.smtp.is_none());
    }
}

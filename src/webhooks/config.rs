use std::time::Duration;

use bon::Builder;

/// Configuration for webhook dispatch.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Builder)]
pub struct Config {
    /// Upper bound on how long a single subscriber may take to handle one event. A
    /// subscriber that exceeds it is reported as failed; its siblings are unaffected.
    /// `None` means subscribers are awaited without limit.
    pub callback_timeout: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_timeout() {
        assert!(Config::default().callback_timeout.is_none());
    }

    #[test]
    fn builder_sets_timeout() {
        let config = Config::builder()
            .callback_timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.callback_timeout, Some(Duration::from_secs(5)));
    }
}

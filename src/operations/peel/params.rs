/// Parameters controlling outer hull layer peeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeelParams {
    /// Reject a second layer assignment to the same face instead of
    /// overwriting it. On by default in debug builds.
    ///
    /// Duplicate hull positions are already rejected and peeled faces leave
    /// the residual, so a peel never reassigns a face; this guards the layer
    /// accumulator itself against regressions and does not change results.
    pub verify_write_once: bool,
}

impl Default for PeelParams {
    fn default() -> Self {
        Self {
            verify_write_once: cfg!(debug_assertions),
        }
    }
}

impl PeelParams {
    /// Sets whether repeated layer assignments are rejected.
    #[must_use]
    pub fn with_verify_write_once(mut self, verify: bool) -> Self {
        self.verify_write_once = verify;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_follows_build_profile() {
        assert_eq!(
            PeelParams::default().verify_write_once,
            cfg!(debug_assertions)
        );
    }

    #[test]
    fn builder_overrides_default() {
        assert!(PeelParams::default().with_verify_write_once(true).verify_write_once);
        assert!(!PeelParams::default().with_verify_write_once(false).verify_write_once);
    }
}

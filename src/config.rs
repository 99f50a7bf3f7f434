use serde::Deserialize;

/// Engine options supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Append "(<COLOR> passed)" to the status after a forced pass.
    pub annotate_pass: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reports_plain_status() {
        assert!(!EngineConfig::default().annotate_pass);
    }
}

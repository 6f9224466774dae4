//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn url() -> Option<String> {
        None
    }
}

// ============================================================================
// [mirror] Section Defaults
// ============================================================================

pub mod mirror {
    use std::path::PathBuf;

    pub fn staging() -> PathBuf {
        ".llms-generated".into()
    }

    pub fn private_prefix() -> String {
        "_".into()
    }

    pub fn extension() -> String {
        "md".into()
    }

    pub fn manifest() -> String {
        "llms.txt".into()
    }

    pub fn static_files() -> Vec<String> {
        vec!["CNAME".into(), "favicon.svg".into()]
    }

    pub fn feed() -> String {
        "feed.xml".into()
    }
}

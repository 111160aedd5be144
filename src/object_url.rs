//! Process-wide object-URL registry for in-memory byte blobs.
//!
//! ## Why a registry?
//!
//! The conversion result carries a displayable URL string referencing the
//! PNG bytes. URLs created here (`blob:pdf2img/<uuid>`) are tracked in a
//! process-wide table so they remain dereferenceable for as long as the
//! caller needs them — and so they are an *explicit* resource: every
//! successful conversion allocates exactly one entry, and the caller is
//! responsible for pairing it with [`revoke_object_url`] (or
//! [`crate::output::ConversionResult::release`]). Unreleased entries are a
//! leak; [`active_object_urls`] exists to make that visible.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

static OBJECT_URLS: Lazy<Mutex<HashMap<String, Arc<Vec<u8>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Register `bytes` and return a new `blob:pdf2img/<uuid>` URL for them.
pub fn create_object_url(bytes: &[u8]) -> String {
    let url = format!("blob:pdf2img/{}", Uuid::new_v4());
    OBJECT_URLS
        .lock()
        .unwrap()
        .insert(url.clone(), Arc::new(bytes.to_vec()));
    debug!("allocated object URL {url} ({} bytes)", bytes.len());
    url
}

/// Dereference an object URL. `None` when the URL was never allocated or
/// has been revoked.
pub fn resolve_object_url(url: &str) -> Option<Arc<Vec<u8>>> {
    OBJECT_URLS.lock().unwrap().get(url).cloned()
}

/// Release an object URL. Returns `false` when the URL was not registered
/// (already revoked, or never allocated).
pub fn revoke_object_url(url: &str) -> bool {
    let removed = OBJECT_URLS.lock().unwrap().remove(url).is_some();
    if removed {
        debug!("revoked object URL {url}");
    }
    removed
}

/// Number of currently registered object URLs.
pub fn active_object_urls() -> usize {
    OBJECT_URLS.lock().unwrap().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_resolve_revoke_roundtrip() {
        let url = create_object_url(b"png bytes");
        assert!(url.starts_with("blob:pdf2img/"));

        let bytes = resolve_object_url(&url).expect("URL should resolve");
        assert_eq!(bytes.as_slice(), b"png bytes");

        assert!(revoke_object_url(&url));
        assert!(resolve_object_url(&url).is_none());
    }

    #[test]
    fn revoking_twice_reports_false() {
        let url = create_object_url(b"x");
        assert!(revoke_object_url(&url));
        assert!(!revoke_object_url(&url));
    }

    #[test]
    fn revoking_unknown_url_reports_false() {
        assert!(!revoke_object_url("blob:pdf2img/not-a-real-entry"));
    }

    #[test]
    fn urls_are_unique_per_allocation() {
        let a = create_object_url(b"same");
        let b = create_object_url(b"same");
        assert_ne!(a, b);
        revoke_object_url(&a);
        revoke_object_url(&b);
    }
}

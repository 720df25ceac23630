//! Firebase storage URL translation.

/// Firebase storage bucket holding uploaded media.
const MEDIA_BUCKET: &str = "addyfitness-db121.appspot.com";

/// Convert a `gs://` storage URL into its public HTTPS media URL.
///
/// The object path is percent-encoded as a single URL segment, which is
/// how Firebase addresses nested paths. Inputs that don't carry the
/// bucket prefix are treated as bare object paths.
#[must_use]
pub fn gs_to_http(gs_url: &str) -> String {
    let object_path = gs_url
        .strip_prefix(&format!("gs://{MEDIA_BUCKET}/"))
        .unwrap_or(gs_url);
    format!(
        "https://firebasestorage.googleapis.com/v0/b/{MEDIA_BUCKET}/o/{}?alt=media",
        urlencoding::encode(object_path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_bucket_url() {
        let url = gs_to_http("gs://addyfitness-db121.appspot.com/profiles/42/avatar.jpg");
        assert_eq!(
            url,
            "https://firebasestorage.googleapis.com/v0/b/addyfitness-db121.appspot.com/o/profiles%2F42%2Favatar.jpg?alt=media"
        );
    }

    #[test]
    fn treats_unprefixed_input_as_object_path() {
        let url = gs_to_http("reports/summary.pdf");
        assert!(url.contains("reports%2Fsummary.pdf"));
        assert!(url.ends_with("?alt=media"));
    }
}

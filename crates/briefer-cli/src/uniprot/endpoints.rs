//! UniProt REST endpoint URL builders

/// Build the UniProtKB entry lookup URL for one accession.
///
/// The accession is percent-encoded as a single path segment; it is
/// otherwise passed through exactly as the user typed it.
pub fn entry_url(base_url: &str, accession: &str) -> String {
    format!(
        "{}/uniprotkb/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(accession)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_url() {
        let url = entry_url("https://rest.uniprot.org", "P04637");
        assert_eq!(url, "https://rest.uniprot.org/uniprotkb/P04637");
    }

    #[test]
    fn test_entry_url_trailing_slash() {
        let url = entry_url("http://localhost:8080/", "Q9T0Q8");
        assert_eq!(url, "http://localhost:8080/uniprotkb/Q9T0Q8");
    }

    #[test]
    fn test_entry_url_encodes_path_segment() {
        let url = entry_url("http://localhost:8080", "P04637/../x y");
        assert_eq!(url, "http://localhost:8080/uniprotkb/P04637%2F..%2Fx%20y");
    }
}

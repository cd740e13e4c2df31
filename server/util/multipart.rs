//! Minimal multipart/form-data reader: enough to pull one uploaded file out
//! of a browser or `curl -F` request body.

/// A file part found in a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// The client-side file name, when the part carries one.
    pub filename: Option<String>,
    pub data: Vec<u8>,
}

/// Returns the index of the first occurrence of `needle` in `haystack`.
pub fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Splits `haystack` on every occurrence of `needle`, returning the pieces
/// between occurrences (excluding the needle itself).
pub fn split_on<'a>(haystack: &'a [u8], needle: &[u8]) -> Vec<&'a [u8]> {
    let mut result = Vec::new();
    let mut start = 0;
    while start <= haystack.len() {
        if let Some(pos) = find_subsequence(&haystack[start..], needle) {
            result.push(&haystack[start..start + pos]);
            start += pos + needle.len();
        } else {
            result.push(&haystack[start..]);
            break;
        }
    }
    result
}

/// Extracts the boundary token from a Content-Type header value like
/// `multipart/form-data; boundary=----WebKitFormBoundaryXXX`.
pub fn extract_boundary(content_type: &str) -> Option<String> {
    let (mime, params) = content_type.split_once(';')?;
    if !mime.trim().eq_ignore_ascii_case("multipart/form-data") {
        return None;
    }
    params
        .split(';')
        .map(|s| s.trim())
        .find_map(|s| s.strip_prefix("boundary="))
        .map(|s| s.trim_matches('"').to_owned())
        .filter(|s| !s.is_empty())
}

/// Finds the file part whose `name="<field_name>"` matches.
///
/// Parts without a `filename` attribute are plain form fields and are
/// skipped. Returns `None` if no such part exists.
pub fn extract_file(body: &[u8], boundary: &str, field_name: &str) -> Option<FilePart> {
    let delimiter = format!("--{}", boundary);
    let sep = b"\r\n\r\n";

    for part in split_on(body, delimiter.as_bytes()) {
        let Some(sep_pos) = find_subsequence(part, sep) else {
            continue;
        };
        let headers = String::from_utf8_lossy(&part[..sep_pos]);
        let Some(disposition) = headers
            .lines()
            .find(|l| l.to_ascii_lowercase().starts_with("content-disposition:"))
        else {
            continue;
        };
        if disposition_param(disposition, "name").as_deref() != Some(field_name) {
            continue;
        }
        let Some(filename) = disposition_param(disposition, "filename") else {
            continue;
        };

        let raw = &part[sep_pos + sep.len()..];
        let data = raw.strip_suffix(b"\r\n").unwrap_or(raw);
        return Some(FilePart {
            filename: Some(filename).filter(|f| !f.is_empty()),
            data: data.to_vec(),
        });
    }
    None
}

/// Reads `key="value"` from a Content-Disposition header line.
///
/// Matches whole parameter names, so `name` does not pick up `filename`.
fn disposition_param(disposition: &str, key: &str) -> Option<String> {
    disposition.split(';').skip(1).find_map(|param| {
        let (k, v) = param.trim().split_once('=')?;
        if k.trim().eq_ignore_ascii_case(key) {
            Some(v.trim().trim_matches('"').to_owned())
        } else {
            None
        }
    })
}

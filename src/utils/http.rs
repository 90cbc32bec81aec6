use reqwest;
use std::io;

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    "CharmTools"
}

/// Download raw bytes from a URL, unauthenticated.
///
/// Returns the response body on a 2xx status; any other status or a
/// transport error maps to an `io::Error` for the caller to report.
pub async fn download_bytes(client: &reqwest::Client, url: &str) -> io::Result<Vec<u8>> {
    let response = client
        .get(url)
        .header("User-Agent", get_user_agent())
        .send()
        .await
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("HTTP request failed: {}", e),
            )
        })?;

    if !response.status().is_success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("HTTP {} for URL: {}", response.status(), url),
        ));
    }

    let bytes = response.bytes().await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to read response bytes: {}", e),
        )
    })?;

    Ok(bytes.to_vec())
}

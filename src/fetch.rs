//! Blocking fetch of the source document. One GET, no retry; on failure the
//! tool is expected to be re-run after the cause is fixed.

use std::time::Duration;

use crate::error::Error;

/// Raw markdown source of "Events that trigger workflows" on GitHub Docs.
pub const DEFAULT_URL: &str = "https://raw.githubusercontent.com/github/docs/main/content/actions/writing-workflows/choosing-when-your-workflow-runs/events-that-trigger-workflows.md";

/// Fetch the document over HTTP. Anything other than a 2xx response with a
/// readable body is a hard error embedding the URL and the cause.
pub fn fetch(url: &str) -> Result<String, Error> {
    log::debug!("fetching {url}");

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .map_err(|err| Error::Fetch(format!("could not build HTTP client: {err}")))?;

    let response = client
        .get(url)
        .send()
        .map_err(|err| Error::Fetch(format!("could not fetch {url}: {err}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Fetch(format!(
            "request was not successful for {url}: {status}"
        )));
    }

    let body = response
        .text()
        .map_err(|err| Error::Fetch(format!("could not fetch body for {url}: {err}")))?;

    log::debug!("fetched {} bytes from {url}", body.len());
    Ok(body)
}

//! Domain normalization and validation.
//!
//! `normalize_line()` turns one raw input line into a candidate domain (or a
//! skip signal); `registrable_domain()` decides whether a candidate is an
//! acceptable domain by parsing it as a URL host and consulting the Public
//! Suffix List.

use anyhow::{Context, Result};
use psl::Psl;

/// Normalizes one raw input line into a candidate domain string.
///
/// Surrounding whitespace is trimmed, leading `http://`/`https://` prefixes
/// and a single trailing dot are removed, repeated dots are collapsed, and
/// anything from the first `:` on (a port, typically) is discarded.
///
/// Returns `None` for lines that are skipped silently: empty lines and a
/// bare `.`. This stage never fails; the result may still be rejected by
/// [`registrable_domain`].
pub fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed == "." {
        return None;
    }

    let rest = trimmed.strip_prefix("http://").unwrap_or(trimmed);
    let rest = rest.strip_prefix("https://").unwrap_or(rest);

    // One left-to-right pass, deliberately not iterated to a fixpoint:
    // "a...b" collapses to "a..b", not "a.b"
    let collapsed = rest.replace("..", ".");

    let without_root = collapsed.strip_suffix('.').unwrap_or(&collapsed);
    let host = match without_root.split_once(':') {
        Some((host, _port)) => host,
        None => without_root,
    };

    Some(host.to_string())
}

/// Extracts the registrable domain from a normalized candidate.
///
/// The candidate is parsed as `http://<candidate>` (the URL parser requires
/// a scheme). Acceptance requires a non-IP host with a suffix plus at least
/// one label in front of it; bare TLDs and single labels are rejected.
///
/// # Errors
///
/// Returns an error describing why the candidate is not an acceptable
/// domain. Validation is purely syntactic; no network lookups happen.
pub fn registrable_domain(extractor: &psl::List, candidate: &str) -> Result<String> {
    let url = format!("http://{candidate}");
    let parsed = url::Url::parse(&url)
        .with_context(|| format!("Failed to parse candidate as a host: {candidate}"))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| anyhow::anyhow!("Candidate '{candidate}' has no host component"))?;

    // IP addresses do not have registrable domains
    if matches!(parsed.host(), Some(url::Host::Ipv4(_) | url::Host::Ipv6(_))) {
        return Err(anyhow::anyhow!(
            "IP addresses do not have registrable domains: {host}"
        ));
    }

    let domain = extractor
        .domain(host.as_bytes())
        .ok_or_else(|| anyhow::anyhow!("No registrable domain in '{host}'"))?;

    let registrable = std::str::from_utf8(domain.as_bytes())
        .with_context(|| format!("Registrable domain of '{host}' is not valid UTF-8"))?;

    Ok(registrable.to_string())
}

//! # Field Validators
//!
//! Pure predicates, one per primitive field kind. They never panic and never allocate
//! beyond the lazily compiled patterns. Type checks (is the raw value a string at all?)
//! happen in the registrar before a predicate is consulted.

use regex::Regex;
use std::sync::LazyLock;
use subreg_domain::constants::{APEX, ROOT_DOMAINS};

/// Subdomain label: 2 to 64 allowed characters, or the apex marker.
static SUBDOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9_*.-]{2,64}|@)$").expect("subdomain pattern"));

/// Dotted quad, each octet 0-255 without leading zeros.
static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((25[0-5]|(2[0-4]|1[0-9]|[1-9]|)[0-9])\.?\b){4}$").expect("ipv4 pattern")
});

/// Colon-separated hex groups. Accepts some invalid addresses (e.g. two `::`).
static IPV6_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9a-fA-F]{0,4}:){1,7}[0-9a-fA-F]{0,4}$").expect("ipv6 pattern")
});

static CNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_./-]{2,}$").expect("cname pattern"));

static NS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._-]{3,}$").expect("ns pattern"));

const SUBDOMAIN_MAX_LEN: usize = 63;
const TXT_MAX_LEN: usize = 255;

/// `true` iff `value` is one of the root domains accepting registrations.
#[must_use]
pub fn domain(value: &str) -> bool {
    ROOT_DOMAINS.contains(&value)
}

#[must_use]
pub fn description(value: &str) -> bool {
    utf16_len(value) > 4
}

/// Subdomain label check.
///
/// The length gate (max 63) and the pattern (max 64) are separate checks with
/// different upper bounds; the stricter length gate decides.
#[must_use]
pub fn sub_domain(value: &str) -> bool {
    let len = utf16_len(value);
    if len < 2 && value != APEX {
        return false;
    }
    if len > SUBDOMAIN_MAX_LEN {
        return false;
    }
    SUBDOMAIN_RE.is_match(value)
}

#[must_use]
pub fn txt(value: &str) -> bool {
    (1..=TXT_MAX_LEN).contains(&utf16_len(value))
}

#[must_use]
pub fn a(value: &str) -> bool {
    IPV4_RE.is_match(value)
}

#[must_use]
pub fn aaaa(value: &str) -> bool {
    IPV6_RE.is_match(value)
}

#[must_use]
pub fn cname(value: &str) -> bool {
    CNAME_RE.is_match(value)
}

#[must_use]
pub fn ns(value: &str) -> bool {
    NS_RE.is_match(value)
}

/// Length in UTF-16 code units, the unit declaration limits are written in.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

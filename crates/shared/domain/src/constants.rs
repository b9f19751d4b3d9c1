//! Fixed names shared by the registrar, the compiler and the CLI.

/// Root domains that accept subdomain registrations.
pub const ROOT_DOMAINS: [&str; 2] = ["1bt.uk", "is-an.app"];

/// Label denoting the root (apex) of a domain.
pub const APEX: &str = "@";

/// Labels that can never be registered, in addition to the configured ones.
pub const DENYLIST: &[&str] = &[
    "www", "mail", "email", "smtp", "imap", "pop", "ns", "ns1", "ns2", "dns", "admin",
    "administrator", "root", "hostmaster", "postmaster", "webmaster", "abuse", "security",
    "autoconfig", "autodiscover", "_dmarc", "_domainkey",
];

pub const DEFAULT_REGISTRAR: &str = "none";
pub const DEFAULT_PROVIDER: &str = "cloudflare";
pub const DEFAULT_DECLARATIONS_DIR: &str = "domains";
pub const DEFAULT_CONFIG_FILE: &str = "subreg";

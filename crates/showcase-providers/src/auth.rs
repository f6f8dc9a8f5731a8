use anyhow::Context;
use keyring::Entry;

use crate::github::host_or_default;

const SERVICE: &str = "org-showcase";

/// Keyring account a GitHub token is stored under, one per API host.
pub fn account_key(host: &str) -> String {
    format!("github:{}", host_or_default(Some(host)))
}

/// Token stored for `host`, or `None` when nothing was ever saved.
pub fn get_token(host: &str) -> anyhow::Result<Option<String>> {
    let entry = Entry::new(SERVICE, &account_key(host)).context("open keyring entry")?;
    match entry.get_password() {
        Ok(token) => Ok(Some(token)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(err) => Err(err).context("read token from keyring"),
    }
}

pub fn set_token(host: &str, token: &str) -> anyhow::Result<()> {
    let entry = Entry::new(SERVICE, &account_key(host)).context("open keyring entry")?;
    entry
        .set_password(token.trim())
        .context("write token to keyring")
}

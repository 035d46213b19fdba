use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress {
    address: String,
}

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self { address }
    }

    pub fn into_string(self) -> String {
        self.address
    }

    pub fn as_str(&self) -> &str {
        self.address.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid e-mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let info = mailparse::addrparse(s)
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        // mailparse also accepts incomplete addresses like "foo@".
        let (local, domain) = info.addr.split_once('@').ok_or(EmailAddressParseError)?;
        if local.is_empty() || domain.is_empty() {
            return Err(EmailAddressParseError);
        }
        Ok(Self { address: info.addr })
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_address() {
        assert!("".parse::<EmailAddress>().is_err());
        assert!("foo@".parse::<EmailAddress>().is_err());
        assert_eq!(
            "foo@bar.io".parse::<EmailAddress>().unwrap().as_str(),
            "foo@bar.io"
        );
    }
}

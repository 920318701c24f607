//! Compiled-in site configuration. Edit these before deploying.

/// Retailer identity shown across the page and used for contact links.
pub struct ContactInfo {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
}

impl ContactInfo {
    /// `tel:` link target, whitespace stripped from the number.
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone.split_whitespace().collect::<String>())
    }

    /// `mailto:` link target for the plain contact links.
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const CONTACTS: ContactInfo = ContactInfo {
    name: "JS PHARMAS",
    phone: "+923462028982",
    email: "jspharmas34@gmail.com",
    address: "Lahore, Punjab Pakistan",
};

/// Passcode gating the price editor. The constant ships in the client
/// bundle, so this is cosmetic gating of the editing controls, not access
/// control.
pub const ADMIN_PASSCODE: &str = "jsadmin";

/// localStorage key holding the serialized price book.
pub const PRICES_STORAGE_KEY: &str = "jspharmas_prices_v1";

/// Case-sensitive comparison against the compiled-in passcode.
pub fn passcode_matches(attempt: &str) -> bool {
    attempt == ADMIN_PASSCODE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passcode_match_is_case_sensitive() {
        assert!(passcode_matches("jsadmin"));
        assert!(!passcode_matches("JSADMIN"));
        assert!(!passcode_matches("jsadmin "));
        assert!(!passcode_matches(""));
    }

    #[test]
    fn tel_href_strips_whitespace() {
        assert_eq!(CONTACTS.tel_href(), "tel:+923462028982");

        let spaced = ContactInfo {
            phone: "+92 346 202 8982",
            ..CONTACTS
        };
        assert_eq!(spaced.tel_href(), "tel:+923462028982");
    }

    #[test]
    fn mailto_href_targets_contact_address() {
        assert_eq!(CONTACTS.mailto_href(), "mailto:jspharmas34@gmail.com");
    }
}

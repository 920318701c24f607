use urlencoding::encode;

/// A visitor enquiry collected by the contact form, turned into a
/// pre-filled email draft addressed to the shop. There is no server round
/// trip; the draft opens in the visitor's mail client.
#[derive(Debug, Clone, PartialEq)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Enquiry {
    pub fn subject(&self) -> String {
        format!("Website enquiry from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }

    /// `mailto:` link carrying the draft, subject and body percent-encoded.
    pub fn mailto_href(&self, to: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            encode(&self.subject()),
            encode(&self.body()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Enquiry {
        Enquiry {
            name: "Ali".to_string(),
            email: "a@b.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[test]
    fn subject_embeds_sender_name() {
        assert_eq!(sample().subject(), "Website enquiry from Ali");
    }

    #[test]
    fn body_embeds_all_fields_with_line_breaks() {
        assert_eq!(sample().body(), "Name: Ali\nEmail: a@b.com\n\nHi");
    }

    #[test]
    fn mailto_href_is_fully_encoded() {
        assert_eq!(
            sample().mailto_href("jspharmas34@gmail.com"),
            "mailto:jspharmas34@gmail.com\
             ?subject=Website%20enquiry%20from%20Ali\
             &body=Name%3A%20Ali%0AEmail%3A%20a%40b.com%0A%0AHi"
        );
    }

    #[test]
    fn reserved_characters_in_fields_are_escaped() {
        let enquiry = Enquiry {
            name: "A&B".to_string(),
            email: "a@b.com".to_string(),
            message: "need 10 packs?".to_string(),
        };
        let href = enquiry.mailto_href("jspharmas34@gmail.com");
        assert!(href.contains("subject=Website%20enquiry%20from%20A%26B"));
        assert!(href.contains("need%2010%20packs%3F"));
    }
}

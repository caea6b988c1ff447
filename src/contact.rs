//! Public contact form: composes the chat message, opens the chat link and
//! records the inquiry.
use leptos::logging::{error, log};

use crate::backend::DataClient;
use crate::config::ChatLink;
use crate::error::BackendError;
use crate::models::{ContactInquiry, NewInquiry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub via_whatsapp: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            via_whatsapp: true,
        }
    }
}

impl ContactForm {
    /// All four text fields are required.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn compose_message(&self) -> String {
        format!(
            "Hello! I'm {}.\n\nEmail: {}\nPhone: {}\n\nMessage: {}",
            self.name, self.email, self.phone, self.message
        )
    }

    fn inquiry(&self) -> NewInquiry {
        NewInquiry {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
            via_whatsapp: self.via_whatsapp,
        }
    }
}

/// `{provider}/{number}?text={message}` with the message percent-encoded.
pub fn chat_link(chat: &ChatLink, text: &str) -> String {
    format!(
        "{}/{}?text={}",
        chat.provider.trim_end_matches('/'),
        chat.number,
        urlencoding::encode(text)
    )
}

/// Subscriber numbers are ten digits; anything longer already carries a
/// country code.
const LOCAL_DIGITS: usize = 10;

/// Reply link used by the admin inquiry viewer. Goes to the inquirer's
/// number, or to the business number when the phone has no digits. Local
/// numbers get the business number's country code.
pub fn reply_link(chat: &ChatLink, phone: &str, name: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_start_matches('0');
    let country = chat
        .number
        .len()
        .checked_sub(LOCAL_DIGITS)
        .and_then(|end| chat.number.get(..end))
        .unwrap_or_default();
    let number = if digits.is_empty() {
        chat.number.clone()
    } else if digits.len() == LOCAL_DIGITS {
        format!("{country}{digits}")
    } else {
        digits.to_string()
    };
    let provider = chat.provider.trim_end_matches('/');
    let text = format!("Hi {name}, regarding your inquiry...");
    format!("{provider}/{number}?text={}", urlencoding::encode(&text))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Opens a URL in a new browsing context. Fire and forget.
pub trait LinkOpener {
    fn open(&self, url: &str);
}

/// Sends the form. The chat link is opened before the insert and stays open
/// whatever the insert returns; `via_whatsapp` is only recorded with the
/// inquiry. On success the form is reset.
pub async fn submit(
    form: &mut ContactForm,
    chat: &ChatLink,
    client: &DataClient,
    opener: &dyn LinkOpener,
) -> Result<(), BackendError> {
    opener.open(&chat_link(chat, &form.compose_message()));

    match client.insert::<ContactInquiry, _>(&form.inquiry()).await {
        Ok(()) => {
            log!("[CONTACT] Inquiry recorded");
            *form = ContactForm::default();
            Ok(())
        }
        Err(err) => {
            error!("[CONTACT] Could not record inquiry: {}", err);
            Err(err)
        }
    }
}

/// Status the banner shows after a submit attempt.
pub fn status_of(result: &Result<(), BackendError>) -> SubmitStatus {
    match result {
        Ok(()) => SubmitStatus::Success,
        Err(_) => SubmitStatus::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Collection, MemoryBackend};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingOpener(RefCell<Vec<String>>);

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) {
            self.0.borrow_mut().push(url.to_string());
        }
    }

    fn priya() -> ContactForm {
        ContactForm {
            name: "Priya".into(),
            email: "p@x.com".into(),
            phone: "9999999999".into(),
            message: "Need a quote".into(),
            via_whatsapp: true,
        }
    }

    #[test]
    fn message_layout() {
        assert_eq!(
            priya().compose_message(),
            "Hello! I'm Priya.\n\nEmail: p@x.com\nPhone: 9999999999\n\nMessage: Need a quote"
        );
    }

    #[test]
    fn link_encodes_the_message() {
        let link = chat_link(&ChatLink::default(), "a b&c\n");
        assert_eq!(link, "https://wa.me/919840650939?text=a%20b%26c%0A");
    }

    #[test]
    fn reply_link_strips_formatting_from_phone() {
        let link = reply_link(&ChatLink::default(), "+91 98406-50939", "Anand");
        assert!(link.starts_with("https://wa.me/919840650939?text=Hi%20Anand"));
        let fallback = reply_link(&ChatLink::default(), "n/a", "Anand");
        assert!(fallback.starts_with("https://wa.me/919840650939?"));
    }

    #[test]
    fn reply_link_adds_country_code_to_local_numbers() {
        let local = reply_link(&ChatLink::default(), "99999 99999", "Priya");
        assert!(local.starts_with("https://wa.me/919999999999?"));
        let trunk = reply_link(&ChatLink::default(), "09999999999", "Priya");
        assert!(trunk.starts_with("https://wa.me/919999999999?"));
        let foreign = reply_link(&ChatLink::default(), "+44 20 7946 0958", "Priya");
        assert!(foreign.starts_with("https://wa.me/442079460958?"));
    }

    #[test]
    fn completeness_requires_every_text_field() {
        assert!(priya().is_complete());
        let mut form = priya();
        form.phone = "  ".into();
        assert!(!form.is_complete());
        assert!(!ContactForm::default().is_complete());
    }

    #[tokio::test]
    async fn submit_opens_link_and_records_inquiry() {
        let backend = Rc::new(MemoryBackend::new());
        let client = DataClient::new(backend.clone());
        let opener = RecordingOpener::default();
        let mut form = priya();

        let result = submit(&mut form, &ChatLink::default(), &client, &opener).await;
        assert_eq!(status_of(&result), SubmitStatus::Success);

        let opened = opener.0.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].contains(&*urlencoding::encode("Hello! I'm Priya.")));
        assert!(opened[0].contains(&*urlencoding::encode("Need a quote")));

        let rows = backend.rows(Collection::ContactInquiries);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Priya");
        assert_eq!(rows[0]["email"], "p@x.com");
        assert_eq!(rows[0]["phone"], "9999999999");
        assert_eq!(rows[0]["message"], "Need a quote");
        assert_eq!(rows[0]["via_whatsapp"], true);
        assert_eq!(form, ContactForm::default());
    }

    #[tokio::test]
    async fn link_still_opens_when_insert_fails() {
        let backend = Rc::new(MemoryBackend::new());
        backend.fail_writes(true);
        let client = DataClient::new(backend.clone());
        let opener = RecordingOpener::default();
        let mut form = priya();

        let result = submit(&mut form, &ChatLink::default(), &client, &opener).await;
        assert_eq!(status_of(&result), SubmitStatus::Error);
        assert_eq!(opener.0.borrow().len(), 1);
        assert_eq!(form, priya());
    }

    #[tokio::test]
    async fn unchecked_chat_option_is_only_recorded() {
        let backend = Rc::new(MemoryBackend::new());
        let client = DataClient::new(backend.clone());
        let opener = RecordingOpener::default();
        let mut form = ContactForm {
            via_whatsapp: false,
            ..priya()
        };

        submit(&mut form, &ChatLink::default(), &client, &opener).await.unwrap();
        assert_eq!(opener.0.borrow().len(), 1);
        assert_eq!(backend.rows(Collection::ContactInquiries)[0]["via_whatsapp"], false);
    }
}

//! Static per-deployment configuration
//!
//! There are no configuration files and nothing is persisted; every value
//! is compiled in. Only the collector address can be overridden through
//! the environment, which is mainly useful when pointing the wizard at a
//! staging collector.

use url::form_urlencoded;

/// Default collector endpoint (Google Apps Script web app)
const COLLECTOR_URL: &str =
    "https://script.google.com/macros/s/AKfycbyNXz8LjFGTXwwO-awxya8ybARCM7Kpef9QSI3saz523aa_URSxm4dP5IiEUGHAXcGH/exec";

/// Scheduling page qualified leads are handed off to
const SCHEDULING_URL: &str =
    "https://cal.com/felipe-guimaraes-u28n6i/sessao-diagnostico-empresarial";

/// Conversion event name reported to the tracking capability
const TRACKING_EVENT: &str = "Lead";

/// WhatsApp number for the manual-contact escalation, country code first
const ESCALATION_PHONE: &str = "5511956949368";

/// Pre-filled message for the escalation deep link
const ESCALATION_MESSAGE: &str =
    "I just sent my application and want to talk to a specialist about my company right away!";

/// Everything the workflow needs to know about its deployment
#[derive(Debug, Clone)]
pub struct Deployment {
    pub collector_url: String,
    pub scheduling_url: String,
    pub tracking_event: String,
    pub escalation_phone: String,
    pub escalation_message: String,
}

impl Default for Deployment {
    fn default() -> Self {
        Self {
            collector_url: COLLECTOR_URL.to_string(),
            scheduling_url: SCHEDULING_URL.to_string(),
            tracking_event: TRACKING_EVENT.to_string(),
            escalation_phone: ESCALATION_PHONE.to_string(),
            escalation_message: ESCALATION_MESSAGE.to_string(),
        }
    }
}

impl Deployment {
    /// Deployment defaults with the `INTAKE_COLLECTOR_URL` override applied
    pub fn from_env() -> Self {
        let mut deployment = Self::default();
        if let Ok(url) = std::env::var("INTAKE_COLLECTOR_URL") {
            deployment.collector_url = url;
        }
        deployment
    }

    /// The `wa.me` deep link that opens a chat with the pre-filled message
    pub fn escalation_link(&self) -> String {
        let text: String =
            form_urlencoded::byte_serialize(self.escalation_message.as_bytes()).collect();
        format!("https://wa.me/{}?text={}", self.escalation_phone, text)
    }
}

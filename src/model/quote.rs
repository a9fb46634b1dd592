use chrono::{Local, SecondsFormat};

#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub bid: String,
    pub timestamp: String,
}

impl Quote {
    /// Stamps the bid with the current local time in RFC 3339 form.
    pub fn new(bid: String) -> Quote {
        Quote {
            bid,
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

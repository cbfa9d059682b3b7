//! Fixed "market mover" promotional panel
//!
//! The panel content does not come from the tooltip context. It is shown or
//! omitted as a whole, selected by the first data point's significance flag.

pub const ALERT_TEXT: &str = "THIS ARTICLE WAS A MARKET MOVER";

pub const HEADLINE: &str = "Bitcoin Transactions reach record high as Inscriptions surge";

pub const THUMBNAIL_URL: &str = "https://www.tbstat.com/wp/uploads/2023/03/20230322_Bitcoin_Generic-1200x675.jpg?isSafari=false&isMobile=false";

pub const EXCERPT: &str = "The number of transactions on the Bitcoin network reached a new all-time high yesterday when tracked daily using a seven-day moving average.";

/// Content of the promotional footer, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketMoverPanel {
    pub alert: &'static str,
    pub headline: &'static str,
    pub thumbnail_url: &'static str,
    pub excerpt: &'static str,
}

impl MarketMoverPanel {
    pub const fn fixed() -> Self {
        Self {
            alert: ALERT_TEXT,
            headline: HEADLINE,
            thumbnail_url: THUMBNAIL_URL,
            excerpt: EXCERPT,
        }
    }

    /// The panel for a significance flag, if any
    pub fn for_flag(was_significant: bool) -> Option<Self> {
        was_significant.then(Self::fixed)
    }
}

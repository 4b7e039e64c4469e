//! Command dispatch.
//!
//! Maps inbound message text to canned replies. Matching is substring-based,
//! so a command embedded mid-sentence still fires, and a message naming
//! several commands collects a reply for each, in registration order.

use std::collections::HashMap;

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;

// =============================================================================
// CANNED DATA
// =============================================================================

struct EventRow {
    name: &'static str,
    date: &'static str,
    location: &'static str,
}

const EVENTS: [EventRow; 2] = [
    EventRow {
        name: "Summer Music Festival 2024",
        date: "2024-07-15",
        location: "Central Park, New York",
    },
    EventRow {
        name: "Tech Conference 2024",
        date: "2024-09-20",
        location: "Convention Center, San Francisco",
    },
];

struct TicketRow {
    name: &'static str,
    date: &'static str,
    status: &'static str,
}

const TICKETS: [TicketRow; 2] = [
    TicketRow {
        name: "Summer Music Festival 2024",
        date: "2024-07-15",
        status: "Active",
    },
    TicketRow {
        name: "Tech Conference 2024",
        date: "2024-09-20",
        status: "Active",
    },
];

struct MarketRow {
    name: &'static str,
    price: &'static str,
    available: &'static str,
}

const MARKET: [MarketRow; 2] = [
    MarketRow {
        name: "Summer Music Festival 2024",
        price: "$150",
        available: "50 tickets",
    },
    MarketRow {
        name: "Tech Conference 2024",
        price: "$200",
        available: "30 tickets",
    },
];

// =============================================================================
// REPLIES
// =============================================================================

const START_REPLY: &str = "Welcome to NFT Ticketing Hub Bot! 🎫\n\
    \n\
    Available commands:\n\
    /events - View upcoming events\n\
    /tickets - View your tickets\n\
    /marketplace - Browse ticket marketplace\n\
    /help - Show help message";

const HELP_REPLY: &str = "🤖 NFT Ticketing Hub Bot Help\n\
    \n\
    Commands:\n\
    /start - Start the bot\n\
    /events - View upcoming events\n\
    /tickets - View your tickets\n\
    /marketplace - Browse ticket marketplace\n\
    /help - Show this help message\n\
    \n\
    Need more help? Contact support at support@nftticketinghub.com";

fn events_reply() -> String {
    let rows: Vec<String> = EVENTS
        .iter()
        .map(|e| format!("🎫 {}\n📅 {}\n📍 {}\n", e.name, e.date, e.location))
        .collect();
    format!("Upcoming Events:\n\n{}", rows.join("\n"))
}

fn tickets_reply() -> String {
    let rows: Vec<String> = TICKETS
        .iter()
        .map(|t| format!("🎟️ {}\n📅 {}\n✅ {}\n", t.name, t.date, t.status))
        .collect();
    format!("Your Tickets:\n\n{}", rows.join("\n"))
}

fn marketplace_reply() -> String {
    let rows: Vec<String> = MARKET
        .iter()
        .map(|m| format!("🎫 {}\n💰 {}\n📊 {}\n", m.name, m.price, m.available))
        .collect();
    format!("Ticket Marketplace:\n\n{}", rows.join("\n"))
}

// =============================================================================
// DISPATCHER
// =============================================================================

#[derive(Default)]
pub struct Dispatcher {
    /// Per-chat preferences. Reserved for personalization; no handler reads
    /// them yet.
    #[allow(dead_code)]
    preferences: HashMap<i64, serde_json::Value>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All replies owed to a message, in command registration order.
    #[must_use]
    pub fn replies_for(&self, text: &str) -> Vec<String> {
        let mut replies = Vec::new();
        if text.contains("/start") {
            replies.push(START_REPLY.to_owned());
        }
        if text.contains("/events") {
            replies.push(events_reply());
        }
        if text.contains("/tickets") {
            replies.push(tickets_reply());
        }
        if text.contains("/marketplace") {
            replies.push(marketplace_reply());
        }
        if text.contains("/help") {
            replies.push(HELP_REPLY.to_owned());
        }
        replies
    }
}

use super::*;

// =============================================================================
// SINGLE COMMANDS
// =============================================================================

#[test]
fn start_reply_lists_available_commands() {
    let dispatcher = Dispatcher::new();
    let replies = dispatcher.replies_for("/start");
    assert_eq!(replies.len(), 1);
    assert!(replies[0].starts_with("Welcome to NFT Ticketing Hub Bot! 🎫"));
    assert!(replies[0].contains("/events - View upcoming events"));
    assert!(replies[0].contains("/help - Show help message"));
}

#[test]
fn events_reply_renders_both_events() {
    let dispatcher = Dispatcher::new();
    let replies = dispatcher.replies_for("/events");
    assert_eq!(replies.len(), 1);
    assert_eq!(
        replies[0],
        "Upcoming Events:\n\n\
         🎫 Summer Music Festival 2024\n📅 2024-07-15\n📍 Central Park, New York\n\n\
         🎫 Tech Conference 2024\n📅 2024-09-20\n📍 Convention Center, San Francisco\n"
    );
}

#[test]
fn tickets_reply_shows_active_status() {
    let dispatcher = Dispatcher::new();
    let replies = dispatcher.replies_for("/tickets");
    assert_eq!(replies.len(), 1);
    assert!(replies[0].starts_with("Your Tickets:\n\n"));
    assert!(replies[0].contains("🎟️ Summer Music Festival 2024"));
    assert!(replies[0].contains("🎟️ Tech Conference 2024"));
    assert_eq!(replies[0].matches("✅ Active").count(), 2);
}

#[test]
fn marketplace_reply_shows_prices_and_availability() {
    let dispatcher = Dispatcher::new();
    let replies = dispatcher.replies_for("/marketplace");
    assert_eq!(replies.len(), 1);
    assert!(replies[0].starts_with("Ticket Marketplace:\n\n"));
    assert!(replies[0].contains("💰 $150"));
    assert!(replies[0].contains("📊 50 tickets"));
    assert!(replies[0].contains("💰 $200"));
    assert!(replies[0].contains("📊 30 tickets"));
}

#[test]
fn help_reply_names_every_command() {
    let dispatcher = Dispatcher::new();
    let replies = dispatcher.replies_for("/help");
    assert_eq!(replies.len(), 1);
    for command in ["/start", "/events", "/tickets", "/marketplace", "/help"] {
        assert!(replies[0].contains(command), "help is missing {command}");
    }
    assert!(replies[0].contains("support@nftticketinghub.com"));
}

// =============================================================================
// MATCHING SEMANTICS
// =============================================================================

#[test]
fn command_matches_anywhere_in_text() {
    let dispatcher = Dispatcher::new();
    let replies = dispatcher.replies_for("hey, show me /events please");
    assert_eq!(replies.len(), 1);
    assert!(replies[0].starts_with("Upcoming Events:"));
}

#[test]
fn message_with_several_commands_collects_replies_in_order() {
    let dispatcher = Dispatcher::new();
    let replies = dispatcher.replies_for("/help or /start?");
    assert_eq!(replies.len(), 2);
    assert!(replies[0].starts_with("Welcome to NFT Ticketing Hub Bot!"));
    assert!(replies[1].starts_with("🤖 NFT Ticketing Hub Bot Help"));
}

#[test]
fn unrecognized_text_gets_no_reply() {
    let dispatcher = Dispatcher::new();
    assert!(dispatcher.replies_for("hello there").is_empty());
    assert!(dispatcher.replies_for("").is_empty());
}

//! Bot commands and their fixed replies.

use std::sync::LazyLock;

use crate::domain::MAX_ZIPS_PER_MESSAGE;

/// A slash command sent to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    About,
    Example,
    Commands,
    /// Any other `/word`; carries the command name without the slash.
    Unknown(String),
}

impl Command {
    /// Parse a command from message text.
    ///
    /// Returns `None` if the text is not a command. Accepts the
    /// `/command@BotName` form Telegram uses in groups; arguments after the
    /// command are ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.trim_start().strip_prefix('/')?;
        let word = rest.split(char::is_whitespace).next().unwrap_or_default();
        let name = word.split('@').next().unwrap_or_default().to_ascii_lowercase();

        if name.is_empty() {
            return None;
        }

        Some(match name.as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "about" => Command::About,
            "example" => Command::Example,
            "commands" => Command::Commands,
            _ => Command::Unknown(name),
        })
    }

    /// The Markdown reply for this command.
    pub fn reply(&self) -> &str {
        match self {
            Command::Start => START_TEXT.as_str(),
            Command::Help => HELP_TEXT.as_str(),
            Command::About => ABOUT_TEXT.as_str(),
            Command::Example => EXAMPLE_TEXT.as_str(),
            Command::Commands => COMMANDS_TEXT,
            Command::Unknown(_) => UNKNOWN_TEXT,
        }
    }
}

static START_TEXT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "⛽ *Gas Station Finder* ⛽\n\n\
         🚗 Find gas stations near any US ZIP code.\n\n\
         📍 *How to use*\n\
         🎯 Send a US ZIP code\n\
         📊 Get up to 5 gas stations per ZIP\n\
         💾 Download the results as a CSV file\n\n\
         🌟 *Examples:*\n\
         • `90210` - Beverly Hills, CA\n\
         • `10001` - New York, NY\n\
         • `77001` - Houston, TX\n\
         • `60601` - Chicago, IL\n\n\
         💡 *Tip:* send up to {} ZIP codes separated by spaces, e.g. `90210 10001 77001`\n\n\
         Send /help for all commands.",
        MAX_ZIPS_PER_MESSAGE
    )
});

static HELP_TEXT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "🆘 *Help* 🆘\n\n\
         📋 *Commands:*\n\
         /start - Welcome message\n\
         /help - This help\n\
         /about - About this bot\n\
         /example - Usage examples\n\
         /commands - List all commands\n\n\
         📍 *Searching:*\n\
         • Send one or more US ZIP codes\n\
         • Get up to 5 gas stations per ZIP\n\
         • Results arrive as a horizontal CSV\n\
         • Maximum {} ZIP codes per message",
        MAX_ZIPS_PER_MESSAGE
    )
});

static ABOUT_TEXT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "ℹ️ *About Gas Station Finder* ℹ️\n\n\
         • Gas station data from the Google Places API\n\
         • Horizontal CSV output\n\
         • Up to {} ZIP codes per search, 5 stations each\n\
         • Results cached for 30 minutes\n\n\
         💡 Send /help for usage instructions.",
        MAX_ZIPS_PER_MESSAGE
    )
});

static EXAMPLE_TEXT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "📝 *Usage examples* 📝\n\n\
         🎯 *Single ZIP code:*\n\
         `90210`\n\
         → up to 5 gas stations in Beverly Hills, CA\n\n\
         🎯 *Multiple ZIP codes:*\n\
         `90210 10001 77001`\n\
         → up to 15 stations from 3 areas\n\n\
         📊 *CSV layout:*\n\
         Seller Name1, Seller Address1, Seller City1, Seller State1, Seller Zip1, Seller Name2, ...\n\n\
         💡 Separate ZIP codes with spaces, at most {} per message.",
        MAX_ZIPS_PER_MESSAGE
    )
});

const COMMANDS_TEXT: &str = "⚡ *All commands* ⚡\n\n\
     /start - Welcome & getting started\n\
     /help - Help guide\n\
     /about - About this bot\n\
     /example - Usage examples\n\
     /commands - This list\n\n\
     🎯 No command is needed to search: just send ZIP codes.";

const UNKNOWN_TEXT: &str = "🤔 Unknown command. Send /help to see what I can do, \
     or just send a 5-digit ZIP code.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_commands() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/help"), Some(Command::Help));
        assert_eq!(Command::parse("/about"), Some(Command::About));
        assert_eq!(Command::parse("/example"), Some(Command::Example));
        assert_eq!(Command::parse("/commands"), Some(Command::Commands));
    }

    #[test]
    fn parse_bot_suffix_and_arguments() {
        assert_eq!(
            Command::parse("/start@GasFinderBot"),
            Some(Command::Start)
        );
        assert_eq!(Command::parse("  /HELP me please"), Some(Command::Help));
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(
            Command::parse("/weather 90210"),
            Some(Command::Unknown("weather".into()))
        );
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(Command::parse("90210"), None);
        assert_eq!(Command::parse("zip/code"), None);
        assert_eq!(Command::parse("/"), None);
        assert_eq!(Command::parse("/ 90210"), None);
    }

    #[test]
    fn replies_mention_limits() {
        assert!(Command::Start.reply().contains("up to 10 ZIP codes"));
        assert!(Command::Help.reply().contains("Maximum 10 ZIP codes"));
        assert!(Command::Unknown("x".into()).reply().contains("/help"));
    }
}

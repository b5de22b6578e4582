//! Static site configuration: external links and embed targets.

pub const GITHUB_URL: &str = "https://github.com/opensox";
pub const DISCORD_URL: &str = "https://discord.gg/opensox";
pub const TWITTER_URL: &str = "https://twitter.com/opensox";

/// Embed url for the "See OpenSox in Action" tutorial player.
pub const TUTORIAL_EMBED_URL: &str = "https://www.youtube.com/embed/opensox-intro";

//! Serialization settings for the cookie codec.
//!
//! Controls where "now" comes from when `Expires` is derived from `Max-Age`,
//! and whether `Expires` is emitted at all.

use time::OffsetDateTime;

/// Source of "now" for the `Expires` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Read the system clock at serialization time.
    #[default]
    System,
    /// Always use the given instant.
    Fixed(OffsetDateTime),
}

impl Clock {
    pub fn now(&self) -> OffsetDateTime {
        match self {
            Clock::System => OffsetDateTime::now_utc(),
            Clock::Fixed(when) => *when,
        }
    }
}

/// Builder for `CodecOptions`.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct CodecOptionsBuilder {
    config: CodecOptions,
}

/// Serialization settings for a [`CookieCodec`](crate::cookies::codec::CookieCodec).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Clock used to compute `Expires` from `Max-Age`.
    pub clock: Clock,

    /// Emit `Expires` next to `Max-Age` for Netscape-era clients.
    pub emit_expires: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            clock: Clock::System,
            emit_expires: true,
        }
    }
}

impl CodecOptions {
    pub fn builder() -> CodecOptionsBuilder {
        CodecOptionsBuilder::new()
    }
}

impl CodecOptionsBuilder {
    pub fn new() -> Self {
        Self {
            config: CodecOptions::default(),
        }
    }

    pub fn clock(mut self, clock: Clock) -> Self {
        self.config.clock = clock;
        self
    }

    /// Pin the clock to `now`. Mostly useful for reproducible output.
    pub fn fixed_time(mut self, now: OffsetDateTime) -> Self {
        self.config.clock = Clock::Fixed(now);
        self
    }

    pub fn emit_expires(mut self, enabled: bool) -> Self {
        self.config.emit_expires = enabled;
        self
    }

    pub fn build(self) -> CodecOptions {
        self.config
    }
}

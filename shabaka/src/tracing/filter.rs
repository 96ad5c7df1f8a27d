use tracing::Level;
use tracing::Metadata;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::Filter;
use tracing_subscriber::registry::LookupSpan;

pub const CRATE_TARGET: &str = "shabaka";

/// Events emitted by this crate or its binary
pub fn is_crate_target(target: &str) -> bool {
    target == CRATE_TARGET || target.starts_with("shabaka::")
}

// Passes crate events whose level is one of `levels`
#[derive(Debug, Clone, Copy)]
pub struct LevelSetFilter {
    levels: &'static [Level],
}

impl LevelSetFilter {
    pub const DEBUG_ONLY: Self = Self { levels: &[Level::DEBUG] };
    pub const ERROR_ONLY: Self = Self { levels: &[Level::ERROR] };
    pub const ERROR_WARN: Self = Self {
        levels: &[Level::ERROR, Level::WARN],
    };
    pub const INFO_AND_ABOVE: Self = Self {
        levels: &[Level::ERROR, Level::WARN, Level::INFO],
    };

    pub fn accepts(
        &self,
        level: &Level,
        target: &str,
    ) -> bool {
        self.levels.contains(level) && is_crate_target(target)
    }
}

impl<S> Filter<S> for LevelSetFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        self.accepts(meta.level(), meta.target())
    }
}

use tracing::Event;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::FormatFields;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::registry::LookupSpan;

use super::filter::CRATE_TARGET;

/// `LEVEL timestamp::engine::module::line::message`, with the crate prefix
/// dropped from the module path (`shabaka::handler::search` → `handler::search`).
#[derive(Debug, Clone)]
pub struct ShabakaFormat {
    pub engine_name: String,
}

impl ShabakaFormat {
    fn module_of<'a>(
        module_path: Option<&'a str>,
        file: Option<&'a str>,
    ) -> Option<&'a str> {
        match module_path {
            Some(path) if path == CRATE_TARGET => Some("lib"),
            Some(path) => Some(path.strip_prefix("shabaka::").unwrap_or(path)),
            None => file,
        }
    }
}

impl<S, N> FormatEvent<S, N> for ShabakaFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();

        // Events without a source location come from log shims; kept only when deep tracing
        let Some(module) = Self::module_of(metadata.module_path(), metadata.file()) else {
            if cfg!(feature = "deep-trace") {
                write!(writer, "{} {}::", metadata.level(), self.engine_name)?;
                ctx.field_format().format_fields(writer.by_ref(), event)?;
                return writeln!(writer);
            }
            return Ok(());
        };

        write!(
            writer,
            "{} {}::{}::{}::{}::",
            metadata.level(),
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            self.engine_name,
            module,
            metadata.line().unwrap_or(0)
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

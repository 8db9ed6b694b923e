//! Tracing support for diagnostics and span timing.
//!
//! This module provides tracing functionality when the `tracing` feature is enabled,
//! and provides no-op implementations when it's disabled.  Library code
//! imports [`info_span`] and [`debug`] from here rather than from `tracing`
//! directly so that it builds either way.

use std::time::Duration;

/// How much diagnostic output [`init_tracing`] should let through to stderr.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Warnings and errors only.
    #[default]
    Quiet,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Maps a repeat count of a `-v` flag to a verbosity.
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Verbosity::Quiet,
            1 => Verbosity::Info,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

/// Accumulated wall time spent inside spans with one name.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SpanTiming {
    pub total: Duration,
    pub count: usize,
}

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        collections::BTreeMap,
        sync::{Mutex, Once, PoisonError},
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, filter::LevelFilter, layer::Context, layer::SubscriberExt,
        registry::LookupSpan, util::SubscriberInitExt,
    };

    use super::{SpanTiming, Verbosity};

    static SPAN_TIMINGS: Mutex<BTreeMap<&'static str, SpanTiming>> = Mutex::new(BTreeMap::new());

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(elapsed) = span.extensions().get::<Instant>().map(Instant::elapsed) else {
                return;
            };
            let mut timings = SPAN_TIMINGS.lock().unwrap_or_else(PoisonError::into_inner);
            let entry = timings.entry(span.metadata().name()).or_default();
            entry.total += elapsed;
            entry.count += 1;
        }
    }

    impl From<Verbosity> for LevelFilter {
        fn from(verbosity: Verbosity) -> Self {
            match verbosity {
                Verbosity::Quiet => LevelFilter::WARN,
                Verbosity::Info => LevelFilter::INFO,
                Verbosity::Debug => LevelFilter::DEBUG,
                Verbosity::Trace => LevelFilter::TRACE,
            }
        }
    }

    /// Installs the global subscriber: a stderr `fmt` layer filtered by
    /// `verbosity`, plus the span-timing layer.  Only the first call in a
    /// process has any effect.
    pub fn init_tracing(verbosity: Verbosity) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(LevelFilter::from(verbosity));
            let _ = Registry::default()
                .with(fmt_layer)
                .with(TimingLayer)
                .try_init();
        });
    }

    /// Returns accumulated span timings, longest total first.
    pub fn span_timings() -> Vec<(&'static str, SpanTiming)> {
        let timings = SPAN_TIMINGS.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries: Vec<_> = timings.iter().map(|(name, t)| (*name, *t)).collect();
        entries.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        entries
    }

    /// Forgets all accumulated span timings.
    pub fn reset_span_timings() {
        SPAN_TIMINGS
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Prints accumulated span timings to stderr.
    pub fn dump_span_timings() {
        let entries = span_timings();
        eprintln!("Span timings (desc):");
        if entries.is_empty() {
            eprintln!("  (none recorded)");
        }
        for (name, SpanTiming { total, count }) in entries {
            let mean = if count == 0 {
                Duration::ZERO
            } else {
                total / count as u32
            };
            eprintln!("  {name}: {total:?} ({count}x, mean {mean:?})");
        }
    }

    // Re-export tracing macros for convenience
    pub(crate) use tracing::{debug, info_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use super::{SpanTiming, Verbosity};

    pub fn init_tracing(_verbosity: Verbosity) {
        // No-op when tracing is disabled
    }

    pub fn span_timings() -> Vec<(&'static str, SpanTiming)> {
        Vec::new()
    }

    pub fn reset_span_timings() {
        // No-op when tracing is disabled
    }

    pub fn dump_span_timings() {
        eprintln!("Span timings require the 'tracing' feature.");
    }

    // Provide no-op macro replacements for info_span and debug
    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::{dump_span_timings, init_tracing, reset_span_timings, span_timings};
#[cfg(feature = "tracing")]
pub(crate) use enabled::{debug, info_span};

#[cfg(not(feature = "tracing"))]
pub use disabled::{
    NoOpSpan, NoOpSpanGuard, dump_span_timings, init_tracing, reset_span_timings, span_timings,
};
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span};

// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sets up a [`tracing_subscriber`] registry from a [`TracingConfig`]. Logs can go to
//! `stdout`, `stderr`, a file, or a terminal stream and a file at the same time.

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, TracingScope, WriterConfig,
            rolling_file_appender_impl};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install the tracing subscriber described by `tracing_config`.
///
/// # Return
/// 1. [`TracingScope::Global`]: [`None`]. The global default can't be unset or changed
///    once set.
/// 2. [`TracingScope::ThreadLocal`]: a [`dispatcher::DefaultGuard`]. Drop it when you're
///    done, that resets this thread to its previous subscriber.
///
/// # Errors
///
/// If the log file can't be created.
pub fn init_tracing(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let scope = tracing_config.scope;
    let layers = try_create_layers(&tracing_config)?;
    let registry = tracing_subscriber::registry().with(layers);
    Ok(match scope {
        TracingScope::Global => {
            registry.try_init().map_err(|error| {
                miette::miette!("Can't set the global tracing subscriber: {error}")
            })?;
            None
        }
        TracingScope::ThreadLocal => Some(registry.set_default()),
    })
}

/// Returns the layers without installing them.
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Global level filter, so that layers without a filter of their own respect it too.
    return_it.push(Box::new(tracing_config.level_filter));

    if let Some(layer) = try_create_display_layer(
        tracing_config.level_filter,
        &tracing_config.writer_config,
    ) {
        return_it.push(layer);
    }

    if let Some(layer) =
        try_create_file_layer(tracing_config.level_filter, &tracing_config.writer_config)?
    {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer.with_writer(std::io::stdout).with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer.with_writer(std::io::stderr).with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, file_path) | WriterConfig::File(file_path) => {
            let file = rolling_file_appender_impl::try_create(file_path)?;
            Some(Box::new(
                fmt_layer
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::{TodoState, TodoStore};

    fn temp_log_file(dir: &tempfile::TempDir) -> String {
        dir.path()
            .join("my_temp_log_file.log")
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_try_create_display_layer() {
        let writer_config = WriterConfig::Display(DisplayPreference::Stdout);
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, &writer_config);
        assert!(layer.is_some());

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, &WriterConfig::None);
        assert!(layer.is_none());
    }

    #[test]
    fn test_try_create_file_layer() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_log_file(&dir);

        let writer_config = WriterConfig::File(file_path.clone());
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, &writer_config).unwrap();

        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_try_create_both_layers() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_log_file(&dir);

        let tracing_config = TracingConfig::new_file_and_display(
            Some(file_path.clone()),
            DisplayPreference::Stdout,
        );

        let layers = try_create_layers(&tracing_config).unwrap();
        assert_eq!(layers.len(), 3);
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[tokio::test]
    #[serial]
    async fn test_store_logs_created_items_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_log_file(&dir);

        let default_guard = init_tracing(
            TracingConfig::new_file(Some(file_path.clone()))
                .with_scope(TracingScope::ThreadLocal),
        )
        .unwrap();

        // The default test runtime is single threaded, so the store's actor task is polled
        // on this thread and picks up the thread local subscriber.
        let store = TodoStore::new(TodoState::default());
        store.create_item("buy milk").unwrap();
        store.shutdown().await.unwrap();

        drop(default_guard);

        let output = std::fs::read_to_string(&file_path).unwrap();
        assert!(output.contains("item created"));
        assert!(output.contains("buy milk"));
    }
}

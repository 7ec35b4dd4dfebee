// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Boxed error coming out of an attached action source.
pub type BoxedSourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from the store and its dispatch facade.
///
/// | Variant             | Cause                                                   | Recoverable? |
/// | :------------------ | :------------------------------------------------------ | :----------- |
/// | [`Terminated`]      | The actor has stopped, its mailbox is closed            | No           |
/// | [`SourceFailed`]    | An attached action source produced an error             | No           |
/// | [`MalformedAction`] | A raw action could not be parsed                        | Yes          |
/// | [`ActorPanicked`]   | A reducer, effect or subscriber panicked inside the actor | No         |
///
/// [`ActorPanicked`]: Self::ActorPanicked
/// [`MalformedAction`]: Self::MalformedAction
/// [`SourceFailed`]: Self::SourceFailed
/// [`Terminated`]: Self::Terminated
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum StoreError {
    #[error("The store is no longer running")]
    #[diagnostic(
        code(r3bl_todo_redux::store::terminated),
        help(
            "The pipeline stopped (shutdown or a failed action source). \
             Create a new store to continue."
        )
    )]
    Terminated,

    #[error("Action source `{label}` failed")]
    #[diagnostic(
        code(r3bl_todo_redux::store::source_failed),
        help("A failed source is fatal to the whole pipeline, the state is frozen.")
    )]
    SourceFailed {
        label: String,
        #[source]
        source: BoxedSourceError,
    },

    #[error("Malformed action")]
    #[diagnostic(
        code(r3bl_todo_redux::store::malformed_action),
        help(r#"Expected JSON like {{"actionType": "create", "payload": "milk"}}"#)
    )]
    MalformedAction(#[source] serde_json::Error),

    #[error("The store actor task panicked or was cancelled")]
    #[diagnostic(code(r3bl_todo_redux::store::actor_panicked))]
    ActorPanicked(#[source] tokio::task::JoinError),
}

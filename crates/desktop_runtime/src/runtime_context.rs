//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the assistant
//! transcript. UI composition stays in [`crate::components`].

use std::time::Duration;

use desktop_app_contract::{AppCommand, AppServices, DesktopSettings};
use leptos::*;

use crate::{
    assistant::{AssistantCommand, AssistantState},
    host::DesktopHostContext,
    model::{DesktopState, InteractionState, Viewport},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Browser boundary for effects and environment reads.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize interaction state.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Assistant chat transcript.
    pub assistant: RwSignal<AssistantState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Live viewport, read at dispatch time.
    pub fn viewport(&self) -> Viewport {
        self.host.get_value().viewport()
    }

    /// Opens a window for `app_id` against the live viewport.
    pub fn open_app(&self, app_id: impl Into<String>) {
        self.dispatch_action(DesktopAction::OpenWindow {
            app_id: app_id.into(),
            viewport: self.viewport(),
        });
    }

    /// Service handles handed to hosted apps.
    pub fn app_services(&self) -> AppServices {
        let runtime = *self;
        let settings = create_memo(move |_| runtime.state.with(|state| state.settings.clone()));
        AppServices::new(
            Callback::new(move |command: AppCommand| {
                runtime.dispatch_action(DesktopAction::from_app_command(
                    command,
                    runtime.viewport(),
                ));
            }),
            Signal::<DesktopSettings>::from(settings),
        )
    }

    /// Posts a line to the assistant and schedules its reply after a short thinking pause.
    pub fn ask_assistant(&self, input: &str) {
        let mut command = None;
        self.assistant.update(|assistant| command = assistant.send(input));
        let Some(command) = command else {
            return;
        };

        let runtime = *self;
        set_timeout(
            move || {
                if let AssistantCommand::OpenApp { app_id } = command {
                    let known = runtime
                        .state
                        .with_untracked(|state| state.registry.catalog().get(app_id).is_some());
                    if !known {
                        logging::warn!("assistant requested unknown app `{app_id}`");
                    }
                    runtime.open_app(app_id);
                }
                let now = runtime.host.get_value().now();
                runtime
                    .assistant
                    .update(|assistant| assistant.complete(command, &now));
            },
            thinking_delay(),
        );
    }
}

fn thinking_delay() -> Duration {
    #[cfg(target_arch = "wasm32")]
    let jitter = (js_sys::Math::random() * 500.0) as u64;
    #[cfg(not(target_arch = "wasm32"))]
    let jitter = 0;
    Duration::from_millis(500 + jitter)
}

fn install_effect_executor(runtime: DesktopRuntimeContext) {
    // Clear the queue before draining so effects that dispatch enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(effect);
        }
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let host = store_value(DesktopHostContext);
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let assistant = create_rw_signal(AssistantState::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        assistant,
        dispatch,
    };

    provide_context(runtime);
    install_effect_executor(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

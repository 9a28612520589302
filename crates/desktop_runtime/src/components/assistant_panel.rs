use system_ui::{Button, ButtonSize, ButtonVariant, Icon, IconButton, IconName, IconSize, TextField};

use super::*;
use crate::assistant::AssistantMessage;

const QUICK_ACTIONS: [(&str, &str, IconName); 3] = [
    ("Files", "file-explorer", IconName::Folder),
    ("Browse", "browser", IconName::Globe),
    ("Notes", "notes", IconName::Notes),
];

#[component]
pub(super) fn AssistantPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = move || runtime.state.with(|s| s.assistant_open);

    view! {
        <Show when=open>
            <AssistantPanelBody />
        </Show>
    }
}

#[component]
fn AssistantPanelBody() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let assistant = runtime.assistant;
    let input = create_rw_signal(String::new());

    let messages = move || assistant.with(|a| a.messages().to_vec());
    let typing = move || assistant.with(|a| a.is_typing());
    let blank = Signal::derive(move || input.with(|text| text.trim().is_empty()));

    let submit = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        runtime.ask_assistant(&text);
        input.set(String::new());
    };

    view! {
        <aside class="assistant-panel" aria-label="AIPC Assistant" data-ui-kind="assistant-panel">
            <header class="assistant-panel__header">
                <Icon icon=IconName::Sparkle size=IconSize::Sm />
                <span class="assistant-panel__title">"AIPC Assistant"</span>
                <IconButton
                    icon=IconName::Trash
                    aria_label="Clear chat"
                    on_click=Callback::new(move |_| assistant.update(|a| a.clear()))
                />
            </header>
            <div class="assistant-panel__messages" role="log" aria-live="polite">
                <For each=messages key=|message| message.id let:message>
                    <AssistantBubble message=message />
                </For>
                <Show when=typing>
                    <div class="assistant-panel__typing" data-role="assistant" aria-label="Typing">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </Show>
            </div>
            <div class="assistant-panel__composer">
                <TextField
                    placeholder="Ask me anything..."
                    aria_label="Message"
                    value=input
                    on_input=Callback::new(move |ev: web_sys::Event| input.set(event_target_value(&ev)))
                    on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            submit();
                        }
                    })
                />
                <IconButton
                    icon=IconName::Send
                    aria_label="Send"
                    disabled=blank
                    on_click=Callback::new(move |_| submit())
                />
            </div>
            <div class="assistant-panel__quick-actions">
                {QUICK_ACTIONS
                    .into_iter()
                    .map(|(label, app_id, icon)| {
                        view! {
                            <Button
                                variant=ButtonVariant::Quiet
                                size=ButtonSize::Sm
                                leading_icon=icon
                                on_click=Callback::new(move |_| runtime.open_app(app_id))
                            >
                                {label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </aside>
    }
}

#[component]
fn AssistantBubble(message: AssistantMessage) -> impl IntoView {
    let paragraphs = message
        .content
        .split('\n')
        .map(|line| view! { <p>{line.to_string()}</p> })
        .collect_view();

    view! {
        <div class="assistant-panel__message" data-role=message.role.token()>
            {paragraphs}
        </div>
    }
}

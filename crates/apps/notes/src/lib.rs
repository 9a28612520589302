//! Notes desktop app: a note list beside a plain-text editor.

use desktop_app_contract::window_primary_input_dom_id;
use leptos::*;
use serde::{Deserialize, Serialize};
use system_ui::prelude::*;

const UNTITLED: &str = "Untitled Note";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Whole days since the last edit.
    pub updated_days_ago: u32,
}

impl Note {
    pub fn updated_label(&self) -> String {
        match self.updated_days_ago {
            0 => "Today".to_string(),
            1 => "Yesterday".to_string(),
            days => format!("{days} days ago"),
        }
    }
}

fn seed_notes() -> Vec<Note> {
    vec![
        Note {
            id: NoteId(1),
            title: "Meeting Notes".to_string(),
            content: "Team Meeting - January 15, 2026\n\n\
                      Attendees: Alex, Jordan, Sam, Taylor\n\n\
                      Agenda:\n1. Q1 Planning Review\n2. Product Roadmap Updates\n3. Resource Allocation\n\n\
                      Action Items:\n- Alex: Finalize budget proposal\n- Jordan: Update project timeline\n- Sam: Schedule customer interviews"
                .to_string(),
            updated_days_ago: 0,
        },
        Note {
            id: NoteId(2),
            title: "Ideas".to_string(),
            content: "App Ideas:\n- Task manager with AI\n- Habit tracker\n- Recipe organizer\n- Budget app\n\n\
                      Side Projects:\n- Learn Rust\n- Build a game\n- Contribute to open source"
                .to_string(),
            updated_days_ago: 1,
        },
        Note {
            id: NoteId(3),
            title: "Todo".to_string(),
            content: "Today's Tasks:\n[ ] Review pull requests\n[ ] Update documentation\n[ ] Fix bug #1234\n\n\
                      This Week:\n[ ] Finish feature implementation\n[ ] Write tests\n[ ] Deploy to staging"
                .to_string(),
            updated_days_ago: 2,
        },
    ]
}

/// Note list and selection for one notes window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesState {
    notes: Vec<Note>,
    selected_id: Option<NoteId>,
    next_id: u64,
}

impl Default for NotesState {
    fn default() -> Self {
        let notes = seed_notes();
        let next_id = notes.iter().map(|note| note.id.0).max().unwrap_or(0) + 1;
        let selected_id = notes.first().map(|note| note.id);
        Self {
            notes,
            selected_id,
            next_id,
        }
    }
}

impl NotesState {
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected_id
    }

    pub fn selected(&self) -> Option<&Note> {
        let id = self.selected_id?;
        self.notes.iter().find(|note| note.id == id)
    }

    /// Adds an empty note at the top of the list and selects it.
    pub fn create(&mut self) -> NoteId {
        let id = NoteId(self.next_id);
        self.next_id += 1;
        self.notes.insert(
            0,
            Note {
                id,
                title: UNTITLED.to_string(),
                content: String::new(),
                updated_days_ago: 0,
            },
        );
        self.selected_id = Some(id);
        id
    }

    /// Removes a note. Deleting the selected note moves the selection to the first remaining one.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return false;
        }
        if self.selected_id == Some(id) {
            self.selected_id = self.notes.first().map(|note| note.id);
        }
        true
    }

    pub fn select(&mut self, id: NoteId) -> bool {
        if self.notes.iter().any(|note| note.id == id) {
            self.selected_id = Some(id);
            true
        } else {
            false
        }
    }

    pub fn rename_selected(&mut self, title: impl Into<String>) {
        if let Some(note) = self.selected_mut() {
            note.title = title.into();
            note.updated_days_ago = 0;
        }
    }

    pub fn edit_selected(&mut self, content: impl Into<String>) {
        if let Some(note) = self.selected_mut() {
            note.content = content.into();
            note.updated_days_ago = 0;
        }
    }

    fn selected_mut(&mut self) -> Option<&mut Note> {
        let id = self.selected_id?;
        self.notes.iter_mut().find(|note| note.id == id)
    }
}

#[component]
pub fn NotesApp(window_id: u64) -> impl IntoView {
    let state = create_rw_signal(NotesState::default());
    let editing_title = create_rw_signal(false);

    let list = move || state.with(|s| s.notes().to_vec());
    let has_selection = move || state.with(|s| s.selected().is_some());
    let title = Signal::derive(move || {
        state.with(|s| s.selected().map(|note| note.title.clone()).unwrap_or_default())
    });
    let content = Signal::derive(move || {
        state.with(|s| s.selected().map(|note| note.content.clone()).unwrap_or_default())
    });

    view! {
        <div class="app-shell app-notes-shell">
            <aside class="notes-sidebar" aria-label="Notes">
                <div class="notes-sidebar__header">
                    <span class="notes-sidebar__title">"Notes"</span>
                    <IconButton
                        icon=IconName::Plus
                        aria_label="New Note"
                        on_click=Callback::new(move |_| {
                            editing_title.set(false);
                            state.update(|s| {
                                s.create();
                            });
                        })
                    />
                </div>
                <div class="notes-sidebar__list">
                    <For each=list key=|note| (note.id, note.title.clone(), note.updated_days_ago) let:note>
                        <Button
                            variant=ButtonVariant::Quiet
                            layout_class="notes-list-item"
                            leading_icon=IconName::Document
                            selected=Signal::derive(move || state.with(|s| s.selected_id() == Some(note.id)))
                            on_click=Callback::new(move |_| {
                                editing_title.set(false);
                                state.update(|s| {
                                    s.select(note.id);
                                });
                            })
                        >
                            <span class="notes-list-item__title">{note.title.clone()}</span>
                            <span class="notes-list-item__date">{note.updated_label()}</span>
                        </Button>
                    </For>
                </div>
            </aside>

            <section class="notes-editor">
                <Show
                    when=has_selection
                    fallback=|| view! {
                        <EmptyState icon=IconName::Document message="Select a note or create a new one" />
                    }
                >
                    <ToolBar aria_label="Note actions">
                        <IconButton
                            icon=IconName::Trash
                            aria_label="Delete Note"
                            on_click=Callback::new(move |_| {
                                state.update(|s| {
                                    if let Some(id) = s.selected_id() {
                                        s.delete(id);
                                    }
                                });
                            })
                        />
                    </ToolBar>
                    <Show
                        when=move || editing_title.get()
                        fallback=move || view! {
                            <h1 class="notes-editor__title" on:click=move |_| editing_title.set(true)>
                                {move || title.get()}
                            </h1>
                        }
                    >
                        <TextField
                            layout_class="notes-editor__title-input"
                            aria_label="Note title"
                            value=title
                            on_input=Callback::new(move |ev: web_sys::Event| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.rename_selected(value));
                            })
                            on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    editing_title.set(false);
                                }
                            })
                        />
                    </Show>
                    <TextArea
                        layout_class="notes-editor__body"
                        id=window_primary_input_dom_id(window_id)
                        aria_label="Note content"
                        placeholder="Start writing..."
                        value=content
                        on_input=Callback::new(move |ev: web_sys::Event| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.edit_selected(value));
                        })
                    />
                </Show>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn titles(state: &NotesState) -> Vec<&str> {
        state.notes().iter().map(|note| note.title.as_str()).collect()
    }

    #[test]
    fn starts_with_seed_notes_and_first_selected() {
        let state = NotesState::default();
        assert_eq!(titles(&state), vec!["Meeting Notes", "Ideas", "Todo"]);
        assert_eq!(state.selected_id(), Some(NoteId(1)));
        assert_eq!(state.notes()[2].updated_label(), "2 days ago");
    }

    #[test]
    fn create_prepends_and_selects_untitled_note() {
        let mut state = NotesState::default();
        let id = state.create();

        assert_eq!(id, NoteId(4));
        assert_eq!(state.selected_id(), Some(id));
        assert_eq!(titles(&state)[0], UNTITLED);
        assert_eq!(state.selected().map(|n| n.content.as_str()), Some(""));
    }

    #[test]
    fn deleting_selected_note_selects_first_remaining() {
        let mut state = NotesState::default();
        state.select(NoteId(2));

        assert!(state.delete(NoteId(2)));
        assert_eq!(state.selected_id(), Some(NoteId(1)));

        assert!(state.delete(NoteId(1)));
        assert!(state.delete(NoteId(3)));
        assert_eq!(state.selected_id(), None);
        assert!(!state.delete(NoteId(3)));
    }

    #[test]
    fn deleting_other_note_keeps_selection() {
        let mut state = NotesState::default();
        state.select(NoteId(3));
        state.delete(NoteId(1));
        assert_eq!(state.selected_id(), Some(NoteId(3)));
    }

    #[test]
    fn edits_apply_to_selected_note_and_refresh_its_date() {
        let mut state = NotesState::default();
        state.select(NoteId(2));
        assert!(!state.select(NoteId(99)));

        state.rename_selected("Side projects");
        state.edit_selected("Learn Rust");

        let note = state.selected().expect("selected note");
        assert_eq!(note.title, "Side projects");
        assert_eq!(note.content, "Learn Rust");
        assert_eq!(note.updated_label(), "Today");
    }
}

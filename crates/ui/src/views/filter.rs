use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{FilterFormVm, SessionVm, start_session};

#[component]
pub fn FilterView(on_start: EventHandler<SessionVm>) -> Element {
    let ctx = use_context::<AppContext>();
    let store = ctx.deck_store();
    let chapters = store.list_chapters();
    let mut form = use_signal(|| FilterFormVm::new(&chapters));
    let mut notice = use_signal(|| None::<ViewError>);

    let chapter_options = form.read().chapter_options().to_vec();
    let kind_options = FilterFormVm::kind_options();
    let difficulty_options = FilterFormVm::difficulty_options();
    let current = form.read().clone();
    let card_count = store.deck().len();

    let toggle_class = if current.randomize { "toggle down" } else { "toggle" };

    let start = move |_: Event<MouseData>| {
        let criteria = match form.read().to_criteria() {
            Ok(criteria) => criteria,
            Err(err) => {
                notice.set(Some(err));
                return;
            }
        };
        match start_session(&store, &criteria) {
            Ok(vm) => on_start.call(vm),
            Err(err) => notice.set(Some(err)),
        }
    };

    rsx! {
        div { class: "page filter",
            h2 { "Flashcards" }
            p { class: "deck-label", "{ctx.deck_label()} ({card_count} cards)" }

            label { r#for: "filter-chapter", "Chapter" }
            select {
                id: "filter-chapter",
                onchange: move |evt: Event<FormData>| form.write().chapter = evt.value(),
                for label in chapter_options {
                    option {
                        key: "{label}",
                        value: "{label}",
                        selected: label == current.chapter,
                        "{label}"
                    }
                }
            }

            label { r#for: "filter-type", "Type" }
            select {
                id: "filter-type",
                onchange: move |evt: Event<FormData>| form.write().kind = evt.value(),
                for label in kind_options {
                    option {
                        key: "{label}",
                        value: "{label}",
                        selected: label == current.kind,
                        "{label}"
                    }
                }
            }

            label { r#for: "filter-difficulty", "Difficulty" }
            select {
                id: "filter-difficulty",
                onchange: move |evt: Event<FormData>| form.write().difficulty = evt.value(),
                for label in difficulty_options {
                    option {
                        key: "{label}",
                        value: "{label}",
                        selected: label == current.difficulty,
                        "{label}"
                    }
                }
            }

            button {
                id: "filter-randomize",
                class: toggle_class,
                onclick: move |_| form.write().toggle_randomize(),
                "{current.randomize_label()}"
            }

            button { id: "filter-start", class: "primary", onclick: start, "Start Flashcards" }

            if let Some(err) = notice() {
                div { class: "popup notice",
                    h3 { "{err.title()}" }
                    p { "{err.message()}" }
                    button { onclick: move |_| notice.set(None), "OK" }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::views::{FilterView, StudyView};
use crate::vm::SessionVm;

#[component]
pub fn App() -> Element {
    // One session at a time; a new filter application replaces it wholesale.
    let mut session = use_signal(|| None::<SessionVm>);
    let studying = session.read().is_some();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Flashcards" }

        div { class: "app-root",
            if studying {
                StudyView { session }
            } else {
                FilterView { on_start: move |vm: SessionVm| session.set(Some(vm)) }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::views::ViewError;
use crate::vm::{SessionIntent, SessionPhase, SessionVm};

fn dispatch(mut session: Signal<Option<SessionVm>>, intent: SessionIntent) {
    let mut guard = session.write();
    let Some(vm) = guard.as_mut() else {
        return;
    };
    if let Err(err) = vm.apply(intent) {
        tracing::warn!(?intent, ?err, "session intent rejected");
    }
}

#[component]
pub fn StudyView(session: Signal<Option<SessionVm>>) -> Element {
    let mut session = session;
    let snapshot = session.read().clone();
    let Some(vm) = snapshot else {
        let err = ViewError::NoSession;
        return rsx! {
            div { class: "page study",
                p { "{err.message()}" }
            }
        };
    };

    let title = vm.title();
    let meta = vm.meta_line().unwrap_or_default();
    let card = vm.card();
    let question = card.as_ref().map(|c| c.question.clone()).unwrap_or_default();
    let answer = card.and_then(|c| c.answer);
    let phase = vm.phase();

    rsx! {
        div { class: "page study",
            div { class: "popup card",
                h3 { class: "card-title", "{title}" }
                p { class: "card-meta", "{meta}" }
                p { class: "card-question", "{question}" }

                if phase == SessionPhase::Prompt {
                    button {
                        id: "study-reveal",
                        onclick: move |_| dispatch(session, SessionIntent::Reveal),
                        "Show Answer"
                    }
                }

                if let Some(answer) = answer {
                    div { class: "popup answer",
                        h3 { "Answer" }
                        p { class: "card-answer", "{answer}" }
                    }
                }

                div { class: "nav",
                    button {
                        id: "study-previous",
                        onclick: move |_| dispatch(session, SessionIntent::Previous),
                        "Previous"
                    }
                    button {
                        id: "study-next",
                        onclick: move |_| dispatch(session, SessionIntent::Next),
                        "Next"
                    }
                }

                button {
                    id: "study-back",
                    class: "secondary",
                    onclick: move |_| session.set(None),
                    "Change Filters"
                }
            }
        }
    }
}

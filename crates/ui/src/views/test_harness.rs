use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use flashcards_core::model::{Card, Deck, FilterCriteria};
use services::DeckStore;

use crate::context::{UiApp, build_app_context};
use crate::views::{FilterView, StudyView};
use crate::vm::{SessionIntent, SessionVm, start_session};

#[derive(Clone)]
struct TestApp {
    store: DeckStore,
}

impl UiApp for TestApp {
    fn deck_store(&self) -> DeckStore {
        self.store.clone()
    }

    fn deck_label(&self) -> String {
        "test-deck.csv".to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Filter,
    Study {
        criteria: FilterCriteria,
        intents: Vec<SessionIntent>,
    },
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));

    let initial = match &props.view {
        ViewKind::Filter => None,
        ViewKind::Study { criteria, intents } => {
            start_session(&props.app.store, criteria).ok().map(|mut vm| {
                for intent in intents {
                    vm.apply(*intent).expect("apply intent");
                }
                vm
            })
        }
    };
    let session = use_signal(move || initial);

    match props.view {
        ViewKind::Filter => rsx! { FilterView { on_start: move |_: SessionVm| {} } },
        ViewKind::Study { .. } => rsx! { StudyView { session } },
    }
}

pub struct Harness {
    pub dom: VirtualDom,
}

impl Harness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn sample_deck() -> Deck {
    Deck::new(vec![
        Card::from_cells("1", "Concept", "Easy", "What is X?", "X is Y").expect("card"),
        Card::from_cells("2", "Derivation", "Advanced", "Derive Z", "Z=...").expect("card"),
    ])
}

pub fn setup_view_harness(view: ViewKind, deck: Deck) -> Harness {
    let app = Arc::new(TestApp {
        store: DeckStore::from_deck(deck),
    });
    let dom = VirtualDom::new_with_props(ViewHarness, ViewHarnessProps { app, view });
    Harness { dom }
}

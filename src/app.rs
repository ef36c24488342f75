//! Root application component with context providers and routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::infer_client::JobSender;
use crate::pages::chat::ChatPage;
use crate::state::{
    chat::ChatState, events::EventFeedState, scroll::ScrollState, selection::SelectionState,
    ui::UiState, workflow::Workflows,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, spawns the inference websocket
/// channel, and routes to the single chat workspace page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let selection = RwSignal::new(SelectionState::default());
    let chat = RwSignal::new(ChatState::default());
    let scroll = RwSignal::new(ScrollState::default());
    let ui = RwSignal::new(UiState::default());
    let feed = RwSignal::new(EventFeedState::default());
    let sender = RwSignal::new(JobSender::default());

    provide_context(selection);
    provide_context(chat);
    provide_context(scroll);
    provide_context(ui);
    provide_context(feed);
    provide_context(sender);
    provide_context(Workflows::default());

    #[cfg(feature = "hydrate")]
    {
        sender.set(crate::net::infer_client::spawn_infer_client(chat));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/eternal-client.css"/>
        <Title text="Eternal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}

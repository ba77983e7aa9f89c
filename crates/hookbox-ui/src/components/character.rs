//! Character panel: loads one character through `use_fetch` + `use_async`.

use crate::core::fetch::RequestOptions;
use crate::core::task::AsyncConfig;
use crate::hooks::{use_async, use_fetch};
use gloo::console;
use serde::Deserialize;
use yew::prelude::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
struct Character {
    name: String,
}

#[derive(Properties, PartialEq)]
pub(crate) struct CharacterPanelProps {
    pub(crate) url: AttrValue,
}

#[function_component(CharacterPanel)]
pub(crate) fn character_panel(props: &CharacterPanelProps) -> Html {
    let name = use_state(|| None::<String>);
    let fetch = use_fetch();

    let config = {
        let executor = fetch.executor();
        let url = props.url.clone();
        let name = name.clone();
        AsyncConfig::new(move || {
            let pending =
                executor.call_endpoint::<Character>(url.to_string(), RequestOptions::new());
            async move { pending.await.ok_or("character request returned no data") }
        })
        .on_success(move |character: Character| name.set(Some(character.name)))
        .on_reject(|reason: &'static str| console::error!("character load failed", reason))
    };
    use_async(config);

    if fetch.is_loading {
        return html! { <p>{"Loading..."}</p> };
    }
    if fetch.error.is_some() {
        return html! { <p>{"Error!"}</p> };
    }
    html! { <p>{(*name).clone().unwrap_or_default()}</p> }
}

//! Demo page exercising `use_fetch`, `use_async` and `use_breakpoint`.

use crate::components::character::CharacterPanel;
use crate::components::tabs::{TabPanel, Tabs};
use crate::hooks::use_breakpoint;
use preferences::load_demo_config;
use yew::prelude::*;

mod preferences;

const CHARACTER_IDS: [u32; 2] = [1, 2];

#[function_component(DemoApp)]
fn demo_app() -> Html {
    let selected = use_state(|| 0usize);
    let config = use_memo(|_| load_demo_config(), ());
    let flags = use_breakpoint();

    let onselect = {
        let selected = selected.clone();
        Callback::from(move |index: usize| selected.set(index))
    };
    let labels = vec![AttrValue::from("Item One"), AttrValue::from("Item Two")];
    let index = *selected;
    let url = AttrValue::from(config.character_url(CHARACTER_IDS.get(index).copied().unwrap_or(1)));
    let container = classes!(
        "container",
        "mx-auto",
        if flags.is_xs { "px-2" } else { "px-4" },
        "max-w-xs"
    );

    html! {
        <main class={container}>
            <Tabs {labels} selected={index} {onselect} />
            <TabPanel {index}>
                // Keyed so switching tabs unmounts one panel and mounts the other.
                <CharacterPanel key={index} {url} />
            </TabPanel>
            <footer class="text-xs opacity-60">
                {format!("breakpoint: {}", flags.name())}
            </footer>
        </main>
    }
}

/// Mount the demo page on `#root`, or on `<body>` when the element is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<DemoApp>::with_root(root).render();
    } else {
        yew::Renderer::<DemoApp>::new().render();
    }
}

//! Tab strip and tab panel atoms.
//!
//! # Design
//! - Selection is owned by the parent; tabs only report clicks.
//! - Ids follow `simple-tab-{i}` / `simple-tabpanel-{i}` so panels can be
//!   labelled by their tab.

use yew::prelude::*;

pub(crate) fn tab_id(index: usize) -> String {
    format!("simple-tab-{index}")
}

pub(crate) fn panel_id(index: usize) -> String {
    format!("simple-tabpanel-{index}")
}

#[derive(Properties, PartialEq)]
pub(crate) struct TabProps {
    pub(crate) label: AttrValue,
    pub(crate) index: usize,
    #[prop_or_default]
    pub(crate) active: bool,
    #[prop_or_default]
    pub(crate) onselect: Callback<usize>,
}

#[function_component(Tab)]
pub(crate) fn tab(props: &TabProps) -> Html {
    let classes = classes!("tab", props.active.then_some("tab-active"));
    let onclick = {
        let onselect = props.onselect.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| onselect.emit(index))
    };
    html! {
        <button
            class={classes}
            role="tab"
            id={tab_id(props.index)}
            aria-controls={panel_id(props.index)}
            aria-selected={props.active.to_string()}
            {onclick}
        >
            {props.label.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TabsProps {
    pub(crate) labels: Vec<AttrValue>,
    pub(crate) selected: usize,
    pub(crate) onselect: Callback<usize>,
}

#[function_component(Tabs)]
pub(crate) fn tabs(props: &TabsProps) -> Html {
    html! {
        <div class="tabs tabs-bordered" role="tablist">
            { for props.labels.iter().enumerate().map(|(index, label)| html! {
                <Tab
                    label={label.clone()}
                    {index}
                    active={index == props.selected}
                    onselect={props.onselect.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TabPanelProps {
    pub(crate) index: usize,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(TabPanel)]
pub(crate) fn tab_panel(props: &TabPanelProps) -> Html {
    html! {
        <div role="tabpanel" id={panel_id(props.index)} aria-labelledby={tab_id(props.index)}>
            { for props.children.iter() }
        </div>
    }
}

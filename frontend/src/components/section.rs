use yew::prelude::*;

use crate::reveal::RevealState;
use crate::visibility::SectionId;

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: SectionId,
    pub heading: &'static str,
    pub reveal: RevealState,
    #[prop_or_default]
    pub children: Children,
}

/// An observed `<section>` whose contents fade up once it has been seen.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    html! {
        <section id={props.id.to_string()} class="page-section">
            <div class={props.reveal.container_class()}>
                <h2
                    class={props.reveal.heading_class()}
                    data-testid={format!("heading-{}", props.id)}
                >
                    {props.heading}
                </h2>
                { for props.children.iter() }
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::navigation;
use crate::reveal::CardView;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub view: CardView,
    /// Text-only, centred layout used for contact cards.
    #[prop_or_default]
    pub centered: bool,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let view = &props.view;

    let onclick = view.link.map(|link| {
        Callback::from(move |_: MouseEvent| navigation::open_external(link))
    });

    let text = html! {
        <div class="card-text">
            <h3 data-testid={view.title_test_id()}>{view.title}</h3>
            <p data-testid={view.body_test_id()}>{view.body}</p>
            if let Some(badge) = &view.badge {
                <span class={badge.class.clone()} data-testid={badge.test_id.clone()}>
                    {badge.label}
                </span>
            }
        </div>
    };

    html! {
        <div
            class={classes!(view.class.clone(), props.centered.then(|| "centered"))}
            style={view.style.clone()}
            data-testid={view.test_id()}
            {onclick}
        >
            if props.centered {
                {text}
            } else {
                <div class="card-row">
                    if let Some(image) = view.image {
                        <img src={image} alt={view.title} />
                    }
                    {text}
                </div>
            }
        </div>
    }
}

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::card::Card;
use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::components::layout::PageShell;
use crate::components::section::RevealSection;
use crate::config;
use crate::content::{MEDIA_ITEMS, MEDIA_SOCIALS};
use crate::reveal::{item_cards, CardKind, RevealState};
use crate::visibility::{use_visible_sections, SectionId};

const MEDIA_SECTIONS: &[SectionId] = &[SectionId::PROJECTS];

/// Brand media downloads. Same layout as the home page, one section.
#[function_component(Media)]
pub fn media() -> Html {
    let entered = use_state(|| false);
    {
        let entered = entered.clone();
        use_mount(move || entered.set(true));
    }

    let visible = use_visible_sections(MEDIA_SECTIONS);
    let reveal = RevealState::of(&SectionId::PROJECTS, &visible);

    html! {
        <PageShell>
            <SiteHeader entered={*entered} home_link={true} />
            <div class="header-spacer" aria-hidden="true"></div>

            <RevealSection id={SectionId::PROJECTS} heading="Media" {reveal}>
                <div class="card-grid">
                    { for item_cards(CardKind::Media, MEDIA_ITEMS, reveal, config::PROJECT_STAGGER_MS)
                        .into_iter()
                        .map(|view| {
                            let key = view.index;
                            html! { <Card key={key} {view} /> }
                        }) }
                </div>
            </RevealSection>

            <SiteFooter socials={MEDIA_SOCIALS} />
        </PageShell>
    }
}

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::card::Card;
use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::components::layout::PageShell;
use crate::components::section::RevealSection;
use crate::config;
use crate::content::{CONTACTS, HOME_SOCIALS, NAV_ITEMS, PROJECTS, SUBSIDIARIES};
use crate::navigation;
use crate::reveal::{contact_cards, item_cards, CardKind, CardView, RevealState};
use crate::visibility::{use_visible_sections, SectionId};

#[function_component(Home)]
pub fn home() -> Html {
    let entered = use_state(|| false);
    {
        let entered = entered.clone();
        use_mount(move || entered.set(true));
    }

    let entered_now = *entered;
    let visible = use_visible_sections(SectionId::HOME);
    let about = RevealState::of(&SectionId::ABOUT, &visible);
    let projects = RevealState::of(&SectionId::PROJECTS, &visible);
    let subsidiaries = RevealState::of(&SectionId::SUBSIDIARIES, &visible);
    let contact = RevealState::of(&SectionId::CONTACT, &visible);

    let explore = Callback::from(|_: MouseEvent| navigation::scroll_to(SectionId::ABOUT.as_str()));

    html! {
        <PageShell>
            <SiteHeader entered={entered_now} nav={NAV_ITEMS} />

            <section class="hero">
                <div class={classes!("hero-inner", entered_now.then(|| "entered"))}>
                    <h1 class={classes!(entered_now.then(|| "fade-in-up"))}>
                        {"App Development & Graphic Design"}
                    </h1>
                    <p class={classes!(entered_now.then(|| "fade-in-up"))}>
                        {"A small technology company from London"}
                    </p>
                    <button class="explore-button" data-testid="button-explore" onclick={explore}>
                        {"Explore"}
                    </button>
                </div>
                <div class="scroll-indicator">
                    <div class="mouse"><div class="wheel"></div></div>
                </div>
            </section>

            <RevealSection id={SectionId::ABOUT} heading="About Us" reveal={about}>
                <p class={classes!("section-text", about.is_revealed().then(|| "slide-in-right"))}>
                    {"Founded in 2022, we are SB Designs, a small technology company from London, \
                      United Kingdom. We specialise in app/website development, as well as graphic \
                      design. Most of our projects are based on travel and aviation, as well as \
                      user-friendly apps to try to help improve your life."}
                </p>
            </RevealSection>

            <RevealSection id={SectionId::PROJECTS} heading="Projects" reveal={projects}>
                <div class="card-grid">
                    { for item_cards(CardKind::Project, PROJECTS, projects, config::PROJECT_STAGGER_MS)
                        .into_iter()
                        .map(render_card) }
                </div>
            </RevealSection>

            <RevealSection id={SectionId::SUBSIDIARIES} heading="Companies" reveal={subsidiaries}>
                <div class="card-grid">
                    { for item_cards(CardKind::Subsidiary, SUBSIDIARIES, subsidiaries, config::SUBSIDIARY_STAGGER_MS)
                        .into_iter()
                        .map(render_card) }
                </div>
            </RevealSection>

            <RevealSection id={SectionId::CONTACT} heading="More" reveal={contact}>
                <div class="card-grid two-columns">
                    { for contact_cards(CONTACTS, contact, config::CONTACT_STAGGER_MS)
                        .into_iter()
                        .map(render_contact_card) }
                </div>
            </RevealSection>

            <SiteFooter socials={HOME_SOCIALS} />
        </PageShell>
    }
}

fn render_card(view: CardView) -> Html {
    let key = view.index;
    html! { <Card key={key} {view} /> }
}

fn render_contact_card(view: CardView) -> Html {
    let key = view.index;
    html! { <Card key={key} {view} centered={true} /> }
}

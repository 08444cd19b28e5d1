use chrono::Datelike;
use yew::prelude::*;

use crate::config;
use crate::content::SocialIcon;
use crate::navigation;
use crate::reveal::animation_delay;

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub socials: &'static [SocialIcon],
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-brand fade-in-up">
                <img src={config::FOOTER_LOGO_SRC} alt="SB Designs Logo" />
                <span>{config::STUDIO_NAME}</span>
            </div>
            <p class="copyright fade-in-up" data-testid="text-copyright">
                {format!("© {} {}", config::STUDIO_NAME, year)}
            </p>
            <div class="social-icons fade-in-up" data-testid="social-icons">
                { for props.socials.iter().enumerate().map(|(index, icon)| {
                    let link = icon.link;
                    html! {
                        <img
                            key={icon.alt}
                            class={icon.class}
                            style={animation_delay(index, config::SOCIAL_STAGGER_MS, config::SOCIAL_DELAY_OFFSET_MS)}
                            src={icon.src}
                            alt={icon.alt}
                            data-testid={format!("social-icon-{}", index)}
                            onclick={Callback::from(move |_: MouseEvent| navigation::open_external(link))}
                        />
                    }
                }) }
            </div>
        </footer>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::NavItem;
use crate::navigation;
use crate::reveal::animation_delay;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    /// Set once the page has mounted; slides the header in.
    pub entered: bool,
    #[prop_or_default]
    pub nav: &'static [NavItem],
    /// Wrap the logo in a link back to the home page.
    #[prop_or_default]
    pub home_link: bool,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let SiteHeaderProps { entered, nav, home_link } = props;

    let logo = html! {
        <>
            <img src={config::HEADER_LOGO_SRC} alt="SB Designs Logo" />
            <span>{config::STUDIO_NAME}</span>
        </>
    };

    html! {
        <header class={classes!("site-header", entered.then(|| "entered"))}>
            <div class="header-bar">
                {
                    if *home_link {
                        html! {
                            <Link<Route> to={Route::Home} classes="header-logo">
                                {logo}
                            </Link<Route>>
                        }
                    } else {
                        html! { <div class="header-logo">{logo}</div> }
                    }
                }
                if !nav.is_empty() {
                    <div class="header-nav">
                        { for nav.iter().enumerate().map(|(index, item)| {
                            let target = item.target.clone();
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                navigation::scroll_to(target.as_str());
                            });
                            html! {
                                <button
                                    key={item.target.as_str().to_string()}
                                    class={classes!("nav-button", entered.then(|| "slide-in-right"))}
                                    style={animation_delay(index, config::NAV_STAGGER_MS, 0)}
                                    data-testid={format!("nav-{}", item.target)}
                                    {onclick}
                                >
                                    {item.label}
                                </button>
                            }
                        }) }
                    </div>
                }
            </div>
        </header>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    #[prop_or_default]
    pub children: Children,
}

/// Page background, font and the shared animation stylesheet.
#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    html! {
        <div class="site-page">
            { for props.children.iter() }
            <style>
                {r#"
                .site-page {
                    min-height: 100vh;
                    background: #1e293b;
                    color: #ffffff;
                    font-family: 'Kumbh Sans', sans-serif;
                    overflow-x: hidden;
                }
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem;
                    transition: all 1s ease;
                    transform: translateY(-100%);
                    opacity: 0;
                }
                .site-header.entered {
                    transform: translateY(0);
                    opacity: 1;
                }
                .header-bar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 28rem;
                    margin: 0 auto;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                    padding: 0.75rem 1.5rem;
                }
                .header-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #ffffff;
                    text-decoration: none;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .header-logo img {
                    width: 1rem;
                    height: 1.5rem;
                }
                .header-nav {
                    display: flex;
                    gap: 0.25rem;
                }
                .nav-button {
                    background: transparent;
                    border: none;
                    color: rgba(255, 255, 255, 0.8);
                    font: inherit;
                    font-size: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: all 0.5s ease;
                }
                .nav-button:hover {
                    color: #ffffff;
                    background: rgba(255, 255, 255, 0.2);
                    transform: scale(1.05);
                }
                .header-spacer {
                    height: 4rem;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1rem;
                    text-align: center;
                    position: relative;
                    overflow: hidden;
                }
                .hero-inner {
                    max-width: 36rem;
                    transition: all 1s ease;
                    opacity: 0;
                    transform: translateY(2.5rem);
                }
                .hero-inner.entered {
                    opacity: 1;
                    transform: translateY(0);
                }
                .hero h1 {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.15;
                    margin-bottom: 2rem;
                }
                .hero p {
                    color: rgba(255, 255, 255, 0.9);
                    font-size: 1.125rem;
                    font-weight: 500;
                    margin-bottom: 2rem;
                }
                .explore-button {
                    background: #14b8a6;
                    color: #ffffff;
                    border: none;
                    font: inherit;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.25);
                    cursor: pointer;
                    transition: all 0.5s ease;
                }
                .explore-button:hover {
                    background: #0d9488;
                    transform: translateY(-0.25rem) scale(1.05);
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    animation: bounce 1s infinite;
                }
                .scroll-indicator .mouse {
                    width: 1.5rem;
                    height: 2.5rem;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    border-radius: 9999px;
                    display: flex;
                    justify-content: center;
                }
                .scroll-indicator .wheel {
                    width: 0.25rem;
                    height: 0.75rem;
                    margin-top: 0.5rem;
                    background: rgba(255, 255, 255, 0.6);
                    border-radius: 9999px;
                    animation: scroll-wheel 2s infinite;
                }
                .page-section {
                    padding: 3rem 1rem;
                }
                .section-inner {
                    max-width: 28rem;
                    margin: 0 auto;
                    transition: all 1s ease;
                }
                .section-inner.concealed {
                    opacity: 0;
                    transform: translateY(2.5rem);
                }
                .section-inner.shown {
                    opacity: 1;
                    transform: translateY(0);
                }
                .section-heading {
                    font-size: 1.75rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .section-text {
                    color: rgba(255, 255, 255, 0.9);
                    font-size: 1.0625rem;
                    line-height: 1.7;
                    font-weight: 500;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                }
                @media (min-width: 1024px) {
                    .card-grid.two-columns {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                .card {
                    background: rgba(51, 65, 85, 0.8);
                    border: 1px solid rgba(71, 85, 105, 0.6);
                    border-radius: 0.75rem;
                    padding: 1rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    transition: all 0.5s ease;
                }
                .card.concealed {
                    opacity: 0;
                    transform: translateY(2.5rem);
                }
                .card.clickable {
                    cursor: pointer;
                }
                .card.clickable:hover {
                    background: rgba(51, 65, 85, 0.9);
                    transform: translateY(-0.5rem) scale(1.05);
                }
                .card-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .card-row img {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 0.75rem;
                    object-fit: cover;
                    flex-shrink: 0;
                    transition: transform 0.3s ease;
                }
                .card-row img:hover {
                    transform: scale(1.1);
                }
                .card-text {
                    flex: 1;
                    min-width: 0;
                }
                .card-text h3 {
                    font-size: 1rem;
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                }
                .card-text p {
                    color: rgba(255, 255, 255, 0.85);
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }
                .card.centered {
                    text-align: center;
                    padding: 1.25rem;
                }
                .status-badge {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 500;
                    animation: pulse 2s infinite;
                }
                .badge-orange {
                    background: #f97316;
                }
                .badge-green {
                    background: #22c55e;
                }
                .site-footer {
                    padding: 3rem 1rem;
                    text-align: center;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                    font-size: 1.25rem;
                    font-weight: 500;
                }
                .footer-brand img {
                    width: 1.25rem;
                    height: 2rem;
                }
                .copyright {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                    margin-bottom: 1.5rem;
                }
                .social-icons {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }
                .social-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                    animation: bounce-in 0.6s both;
                }
                .social-icon.cover {
                    object-fit: cover;
                }
                .social-icon:hover {
                    opacity: 0.8;
                    transform: scale(1.25) rotate(12deg);
                }
                .fade-in-up {
                    animation: fade-in-up 1.2s both;
                }
                .slide-in-left {
                    animation: slide-in-left 0.8s both;
                }
                .slide-in-right {
                    animation: slide-in-right 0.8s both;
                }
                .slide-in-up {
                    animation: slide-in-up 0.6s both;
                }
                @keyframes fade-in-up {
                    from { opacity: 0; transform: translateY(1.5rem); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes slide-in-left {
                    from { opacity: 0; transform: translateX(-2rem); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes slide-in-right {
                    from { opacity: 0; transform: translateX(2rem); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes slide-in-up {
                    from { opacity: 0; transform: translateY(2.5rem); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes bounce-in {
                    0% { opacity: 0; transform: scale(0.3); }
                    60% { opacity: 1; transform: scale(1.1); }
                    100% { transform: scale(1); }
                }
                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, -25%); }
                }
                @keyframes scroll-wheel {
                    0% { opacity: 1; transform: translateY(0); }
                    100% { opacity: 0; transform: translateY(0.75rem); }
                }
                @keyframes pulse {
                    50% { opacity: 0.5; }
                }
                "#}
            </style>
        </div>
    }
}

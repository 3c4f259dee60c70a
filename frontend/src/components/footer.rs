use chrono::Datelike;
use yew::prelude::*;

use crate::models::{NavSection, SocialLinks};

const GET_IN_TOUCH_SUBJECT: &str = "Project inquiry & collaboration";

pub fn mailto_link(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, urlencoding::encode(subject))
}

pub fn copyright_line(year: i32, company_name: &str) -> String {
    format!("© {} {}. All rights reserved.", year, company_name)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub company_name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[prop_or_default]
    pub social_links: SocialLinks,
    pub navigation: Vec<NavSection>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #000;
                        color: #fff;
                        padding: 4rem 1rem 2rem;
                    }
                    .footer-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .footer-columns {
                        display: grid;
                        grid-template-columns: 1.5fr repeat(4, 1fr);
                        gap: 2.5rem;
                    }
                    .footer-columns h2 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .footer-columns h3 {
                        font-size: 1.1rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .footer-tagline,
                    .footer-columns li a,
                    .footer-contact p {
                        color: #9ca3af;
                        text-decoration: none;
                    }
                    .footer-columns ul {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .footer-columns li a:hover {
                        color: #fff;
                    }
                    .footer-social {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .footer-social a {
                        color: #fff;
                        text-decoration: none;
                        font-size: 0.9rem;
                    }
                    .footer-social a:hover {
                        color: #d1d5db;
                    }
                    .footer-contact p {
                        margin-bottom: 0.75rem;
                    }
                    .footer-touch {
                        display: inline-block;
                        margin-top: 1rem;
                        padding: 0.6rem 1.2rem;
                        border: 1px solid #fff;
                        border-radius: 6px;
                        color: #fff;
                        text-decoration: none;
                    }
                    .footer-touch:hover {
                        background: #fff;
                        color: #000;
                    }
                    .footer-bottom {
                        margin-top: 4rem;
                        padding-top: 2rem;
                        border-top: 1px solid #1f2937;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        font-size: 0.85rem;
                        color: #6b7280;
                    }
                    .footer-legal {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .footer-legal a {
                        color: #6b7280;
                        text-decoration: none;
                    }
                    .footer-legal a:hover {
                        color: #fff;
                    }
                    @media (max-width: 900px) {
                        .footer-columns { grid-template-columns: 1fr 1fr; }
                        .footer-bottom { flex-direction: column; gap: 1rem; }
                    }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-columns">
                    <div>
                        <h2>{ &props.company_name }</h2>
                        <p class="footer-tagline">{ &props.tagline }</p>
                        <div class="footer-social">
                            { for props.social_links.entries().into_iter().map(|(label, url)| html! {
                                <a href={url.to_string()} target="_blank" rel="noopener noreferrer">{ label }</a>
                            }) }
                        </div>
                    </div>
                    { for props.navigation.iter().map(|section| html! {
                        <div key={section.title.clone()}>
                            <h3>{ &section.title }</h3>
                            <ul>
                                { for section.links.iter().map(|link| html! {
                                    <li key={link.label.clone()}>
                                        <a href={link.href.clone()}>{ &link.label }</a>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                    <div class="footer-contact">
                        <h3>{ "Contact Us" }</h3>
                        <p>{ format!("📍 {}", props.address) }</p>
                        <p>{ format!("☎ {}", props.phone) }</p>
                        <p>{ format!("✉ {}", props.email) }</p>
                        <a class="footer-touch" href={mailto_link(&props.email, GET_IN_TOUCH_SUBJECT)}>
                            { "Get In Touch" }
                        </a>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{ copyright_line(year, &props.company_name) }</p>
                    <div class="footer-legal">
                        <a href="/privacy">{ "Privacy Policy" }</a>
                        <a href="/terms">{ "Terms of Service" }</a>
                        <a href="/cookies">{ "Cookie Policy" }</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

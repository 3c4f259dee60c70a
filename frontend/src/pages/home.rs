use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::{scroll_to_section, Hero};
use crate::components::navbar::Navbar;
use crate::components::portfolio::PortfolioGrid;
use crate::config::Timings;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    #[prop_or_default]
    pub timings: Timings,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = use_memo(|_| SiteContent::embedded(), ());

    let site = match &*content {
        Ok(site) => site,
        Err(err) => {
            log::error!("Failed to load site content: {}", err);
            return html! {
                <div class="content-error">
                    <p>{ "This page could not be loaded. Please try again later." }</p>
                </div>
            };
        }
    };

    let on_cta_click = Callback::from(|_: ()| scroll_to_section("portfolio"));
    let timings = props.timings.clone();

    html! {
        <div class="home">
            <Navbar
                logo={site.navbar.logo.clone()}
                links={site.navbar.links.clone()}
                contact_phone={site.navbar.contact_phone.clone()}
            />
            <Hero
                headline={site.hero.headline.clone()}
                subheadline={site.hero.subheadline.clone()}
                cta_text={site.hero.cta_text.clone()}
                items={site.hero.items.clone()}
                {on_cta_click}
                timings={timings.clone()}
            />
            <PortfolioGrid
                title={site.portfolio.title.clone()}
                subtitle={site.portfolio.subtitle.clone()}
                projects={site.portfolio.projects.clone()}
            />
            <About
                title={site.about.title.clone()}
                subtitle={site.about.subtitle.clone()}
                description={site.about.description.clone()}
                values={site.about.values.clone()}
                team={site.about.team.clone()}
                timings={timings.clone()}
            />
            <Contact
                title={site.contact.title.clone()}
                subtitle={site.contact.subtitle.clone()}
                background_image={site.contact.background_image.clone()}
                office_lines={site.contact.office_lines.clone()}
                email={site.contact.email.clone()}
                phone={site.contact.phone.clone()}
                {timings}
            />
            <Footer
                company_name={site.footer.company_name.clone()}
                tagline={site.footer.tagline.clone()}
                address={site.footer.address.clone()}
                phone={site.footer.phone.clone()}
                email={site.footer.email.clone()}
                social_links={site.footer.social_links.clone()}
                navigation={site.footer.navigation.clone()}
            />
        </div>
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::{window, Document};
use yew::prelude::*;

use crate::components::contact_form::ContactFormCard;
use crate::config::SiteConfig;
use crate::pages::catalog::{
    Media, SectionIntro, ServiceCard, BADGES, COMPANY_NAME, CONTACT_CHANNELS, CONTACT_INTRO, CUSTOMIZATION_CARDS,
    CUSTOMIZATION_INTRO, DESIGN_CARDS, DESIGN_INTRO, HERO_HIGHLIGHTS, OPENING_HOURS, PROCESS_STEPS, SIGNAGE_CARDS,
    SIGNAGE_INTRO, SOFTWARE_CARDS, SOFTWARE_INTRO, TAGLINE,
};
use crate::reveal::{RevealPlan, RevealVariant, SectionRevealer, TimeoutScheduler, CONTAINER_ID, HIDDEN_CLASS};
use crate::scroll::{self, Section};
use crate::visibility::{self, Subscription, ViewportRule};

type PageRevealer = SectionRevealer<TimeoutScheduler, Document>;

/// Keeps the observer and pending timers alive while the page is mounted.
struct RevealSession {
    subscription: Option<Subscription>,
    revealer: Rc<RefCell<PageRevealer>>,
}

impl Drop for RevealSession {
    fn drop(&mut self) {
        // Stop observing before cancelling so no new trigger sneaks in.
        drop(self.subscription.take());
        self.revealer.borrow_mut().teardown();
    }
}

fn start_reveal(config: &SiteConfig) -> Option<RevealSession> {
    let document = window()?.document()?;
    let observer = visibility::browser_observer()?;

    let plan = RevealPlan::for_timing(config.reveal);
    let revealer = Rc::new(RefCell::new(SectionRevealer::new(
        plan,
        TimeoutScheduler::default(),
        Rc::new(document),
    )));

    let rule = ViewportRule {
        threshold: config.visibility_threshold,
        bottom_inset_px: config.bottom_inset_px,
    };
    let handler = Rc::clone(&revealer);
    let subscription = observer.observe(
        CONTAINER_ID,
        rule,
        Box::new(move |entries| handler.borrow_mut().handle(entries)),
    );
    if subscription.is_none() {
        debug!("#{CONTAINER_ID} not observable, cards stay hidden");
    }

    Some(RevealSession { subscription, revealer })
}

fn section_header(intro: &SectionIntro) -> Html {
    html! {
        <div class="section-header">
            <div class="section-icon">{ intro.icon }</div>
            <h2 class="section-title">{ intro.title }</h2>
            <p class="section-lead">{ intro.lead }</p>
        </div>
    }
}

fn bullet_list(items: &[&str], marker: &str) -> Html {
    html! {
        <ul class="card-list">
            { for items.iter().map(|item| html! {
                <li>
                    <span class="card-list-marker">{ marker.to_string() }</span>
                    <span>{ *item }</span>
                </li>
            }) }
        </ul>
    }
}

fn card_media(media: &Media) -> Html {
    match media {
        Media::Plain => html! {},
        Media::Video(src) => html! {
            <div class="card-video">
                <video autoplay={true} loop={true} muted={true} playsinline={true}>
                    <source src={*src} type="video/mp4" />
                </video>
                <div class="card-video-overlay"></div>
            </div>
        },
        Media::Carousel(photos) => html! {
            <div class="card-carousel">
                <div class="carousel-track">
                    { for photos.iter().map(|photo| html! {
                        <img src={photo.src} alt={photo.alt} loading="lazy" />
                    }) }
                </div>
            </div>
        },
    }
}

fn service_card(card: &ServiceCard, class: &'static str, marker: &str) -> Html {
    html! {
        <article class={classes!("service-card", class)}>
            { card_media(&card.media) }
            <div class="card-header">
                <div class="card-icon">{ card.icon }</div>
                <h3 class="card-title">{ card.title }</h3>
                <p class="card-description">{ card.description }</p>
            </div>
            <div class="card-content">
                { bullet_list(card.items, marker) }
            </div>
        </article>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <div class="section-icon">{"</>"}</div>
                    <h1>
                        {"Soluções Completas para o Seu "}
                        <span class="accent">{"Negócio"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Desenvolvimento de software, design gráfico, personalização e sinalização. Transformamos suas ideias em realidade com qualidade e inovação."}
                    </p>
                    <button class="hero-cta" onclick={scroll::on_click(Section::Contact)}>
                        {"Solicitar Orçamento"}
                    </button>
                </div>
                <div class="hero-highlights">
                    { for HERO_HIGHLIGHTS.iter().map(|highlight| html! {
                        <div class="highlight-card">
                            <div class="highlight-icon">{ highlight.icon }</div>
                            <h3>{ highlight.title }</h3>
                            <p>{ highlight.caption }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(SoftwareShowcase)]
fn software_showcase() -> Html {
    html! {
        <section id={Section::Software.id()} class="showcase alt">
            <div class="container">
                { section_header(&SOFTWARE_INTRO) }
                <div id={CONTAINER_ID} class="software-cards">
                    { for SOFTWARE_CARDS.iter().zip(RevealVariant::ALL).map(|(card, variant)| html! {
                        <article
                            id={variant.target_id()}
                            class={classes!("service-card", "software-card", HIDDEN_CLASS)}
                        >
                            <div class="card-header">
                                <div class="card-icon">{ card.icon }</div>
                                <h3 class="card-title">{ card.title }</h3>
                                <p class="card-description">{ card.description }</p>
                            </div>
                            <div class="card-content">
                                { bullet_list(card.items, "✓") }
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Signage)]
fn signage() -> Html {
    html! {
        <section id={Section::Signage.id()} class="showcase">
            <div class="container">
                { section_header(&SIGNAGE_INTRO) }
                <div class="signage-grid">
                    <div class="signage-cards">
                        { for SIGNAGE_CARDS.iter().map(|card| service_card(card, "signage-card", "✓")) }
                    </div>
                    <div class="process-card">
                        <h3>{"Nosso Processo"}</h3>
                        <ol class="process-steps">
                            { for PROCESS_STEPS.iter().enumerate().map(|(index, (title, detail))| html! {
                                <li>
                                    <span class="step-number">{ (index + 1).to_string() }</span>
                                    <div>
                                        <strong>{ format!("{title}:") }</strong>
                                        { format!(" {detail}") }
                                    </div>
                                </li>
                            }) }
                        </ol>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id={Section::Contact.id()} class="showcase alt">
            <div class="container narrow">
                { section_header(&CONTACT_INTRO) }
                <div class="contact-grid">
                    <ContactFormCard />
                    <div class="contact-channels">
                        { for CONTACT_CHANNELS.iter().map(|channel| html! {
                            <div class="contact-card channel">
                                <div class="card-icon">{ channel.icon }</div>
                                <div>
                                    <h3>{ channel.title }</h3>
                                    <p class="channel-value">{ channel.value }</p>
                                    <p class="channel-note">{ channel.note }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="badges">
                    { for BADGES.iter().enumerate().map(|(index, badge)| html! {
                        <span class={classes!("badge", if index % 2 == 0 { "accent" } else { "secondary" })}>
                            { *badge }
                        </span>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <div class="footer-brand">{ COMPANY_NAME }</div>
                    <p>{ TAGLINE }</p>
                </div>
                <div>
                    <h3>{"Serviços"}</h3>
                    <ul>
                        { for [
                            (Section::Software, "Desenvolvimento de Software"),
                            (Section::Design, "Design & Social Media"),
                            (Section::Customization, "Personalização"),
                            (Section::Signage, "Sinalização"),
                        ].into_iter().map(|(section, label)| html! {
                            <li>
                                <button class="footer-link" onclick={scroll::on_click(section)}>{ label }</button>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Contato"}</h3>
                    <ul>
                        { for CONTACT_CHANNELS.iter().map(|channel| html! { <li>{ channel.value }</li> }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Horário de Atendimento"}</h3>
                    <ul>
                        { for OPENING_HOURS.iter().map(|line| html! { <li>{ *line }</li> }) }
                    </ul>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{ format!("© 2024 {COMPANY_NAME}. Todos os direitos reservados.") }</p>
                <div class="footer-legal">
                    <a href="#">{"Política de Privacidade"}</a>
                    <a href="#">{"Termos de Uso"}</a>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    {
        use_effect_with_deps(
            move |_| {
                let session = start_reveal(&config);
                move || drop(session)
            },
            (),
        );
    }

    html! {
        <main class="home-page">
            <Hero />
            <SoftwareShowcase />
            <section id={Section::Design.id()} class="showcase">
                <div class="container">
                    { section_header(&DESIGN_INTRO) }
                    <div class="design-grid">
                        { for DESIGN_CARDS.iter().map(|card| service_card(card, "design-card", "✓")) }
                    </div>
                </div>
            </section>
            <section id={Section::Customization.id()} class="showcase alt">
                <div class="container">
                    { section_header(&CUSTOMIZATION_INTRO) }
                    <div class="customization-grid">
                        { for CUSTOMIZATION_CARDS.iter().map(|card| service_card(card, "customization-card", "•")) }
                    </div>
                </div>
            </section>
            <Signage />
            <Contact />
            <Footer />
        </main>
    }
}

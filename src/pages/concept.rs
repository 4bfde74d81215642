//! One landing page, rendered in any of the ten themes.

use std::rc::Rc;

use chrono::Datelike;
use log::error;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::counter::AnimatedCounter;
use crate::components::email_capture::EmailCapture;
use crate::components::media::VideoEmbed;
use crate::components::nav::{scroll_to_section, FloatingApply, NavBar, NavSection, SectionNav};
use crate::components::pointer::{MagneticButton, TiltCard};
use crate::components::reveal::{
    LineReveal, Reveal, ScaleBlurReveal, StaggerItem, StaggerReveal, TextReveal, WordReveal,
};
use crate::components::scroll::{HeroFade, Parallax, ScaleOnScroll, ScrollProgressBar, StickyText};
use crate::config;
use crate::content::{Benefit, Content, Stat};
use crate::hooks::viewport::ViewportProvider;
use crate::motion::tween::format_count;
use crate::themes::{BenefitsLayout, HeadlineStyle, HeroStyle, Theme};
use crate::Route;

const ABOUT_ID: &str = "about";
const BENEFITS_ID: &str = "benefits";
const COMPENSATION_ID: &str = "compensation";
const TEAM_ID: &str = "team";
const REQUIREMENTS_ID: &str = "requirements";
const APPLY_ID: &str = "apply";

/// Jumps to the top without the page-wide smooth scrolling.
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn nav_sections(content: &Content) -> Vec<NavSection> {
    vec![
        NavSection::new(ABOUT_ID, content.about.label.clone()),
        NavSection::new(BENEFITS_ID, content.benefits.label.clone()),
        NavSection::new(COMPENSATION_ID, content.compensation.label.clone()),
        NavSection::new(TEAM_ID, content.testimonials.label.clone()),
        NavSection::new(REQUIREMENTS_ID, content.requirements.label.clone()),
        NavSection::new(APPLY_ID, content.apply.button.clone()),
    ]
}

#[derive(Properties, PartialEq)]
pub struct ConceptPageProps {
    pub theme: &'static Theme,
}

#[function_component(ConceptPage)]
pub fn concept_page(props: &ConceptPageProps) -> Html {
    let theme = props.theme;
    let content = use_context::<Rc<Content>>();

    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    let Some(content) = content else {
        return html! { <ContentUnavailable /> };
    };

    let scope_class = match theme.stylesheet() {
        Ok(style) => Classes::from(style.get_class_name().to_owned()),
        Err(err) => {
            error!("Theme {} stylesheet failed to build: {}", theme.slug, err);
            Classes::new()
        }
    };
    let motion = theme.motion;
    let year = chrono::Local::now().year();

    html! {
        <ViewportProvider>
            <link rel="stylesheet" href={theme.fonts_href()} />
            <div class={classes!("concept-page", scope_class)}>
                <style>{ BASE_CSS }</style>
                if motion.progress_bar {
                    <ScrollProgressBar />
                }
                <NavBar brand={content.brand.clone()} apply_label={content.apply.button.clone()} />
                if motion.section_nav {
                    <SectionNav sections={nav_sections(&content)} />
                }

                <Hero theme={theme} content={content.clone()} />
                <Stats theme={theme} content={content.clone()} />

                <section class="section about" id={ABOUT_ID}>
                    <div class="container">
                        <SectionLabel theme={theme} text={content.about.label.clone()} />
                        <Reveal preset={motion.reveal}>
                            <h2 class="section-heading">{ content.about.heading.clone() }</h2>
                        </Reveal>
                        <div class="about-grid">
                            <Reveal preset={motion.reveal} delay={0.1}>
                                <p class="lead">{ content.about.lead.clone() }</p>
                            </Reveal>
                            <Reveal preset={motion.reveal} delay={0.2}>
                                <p class="muted">{ content.about.body.clone() }</p>
                            </Reveal>
                        </div>
                    </div>
                    if motion.parallax {
                        <Parallax speed={0.6} class="about-glow">
                            <div class="glow" />
                        </Parallax>
                    }
                </section>

                if motion.sticky_story {
                    <StickyText lines={content.story.iter().map(|line| AttrValue::from(line.clone())).collect::<Vec<_>>()} />
                }

                <section class="section quote">
                    <div class="container">
                        <Reveal preset={motion.reveal}>
                            <blockquote>
                                <p>
                                    { content.quote.text.clone() }
                                    <br />
                                    <span class="accent">{ content.quote.highlight.clone() }</span>
                                </p>
                                <cite>{ format!("— {}", content.quote.author) }</cite>
                            </blockquote>
                        </Reveal>
                    </div>
                </section>

                <Benefits theme={theme} content={content.clone()} />
                <Compensation theme={theme} content={content.clone()} />

                <section class="section testimonials" id={TEAM_ID}>
                    <div class="container">
                        <SectionLabel theme={theme} text={content.testimonials.label.clone()} />
                        <Reveal preset={motion.reveal}>
                            <h2 class="section-heading">{ content.testimonials.heading.clone() }</h2>
                        </Reveal>
                        <StaggerReveal preset={motion.reveal} stagger={motion.stagger} class="video-grid">
                            { for content.testimonials.videos.iter().enumerate().map(|(i, video)| html! {
                                <StaggerItem index={i}>
                                    <VideoEmbed
                                        media_id={video.media_id.clone()}
                                        aspect={content.testimonials.aspect}
                                        title={video.name.clone()}
                                    />
                                </StaggerItem>
                            }) }
                        </StaggerReveal>
                    </div>
                </section>

                <section class="section requirements" id={REQUIREMENTS_ID}>
                    <div class="container">
                        <SectionLabel theme={theme} text={content.requirements.label.clone()} />
                        <Reveal preset={motion.reveal}>
                            <h2 class="section-heading">{ content.requirements.heading.clone() }</h2>
                        </Reveal>
                        <StaggerReveal preset={motion.reveal} stagger={motion.stagger}>
                            <ul class="requirement-list">
                                { for content.requirements.items.iter().enumerate().map(|(i, item)| html! {
                                    <li>
                                        <StaggerItem index={i}>
                                            <span class="accent">{ "✓" }</span>{ format!(" {}", item) }
                                        </StaggerItem>
                                    </li>
                                }) }
                            </ul>
                        </StaggerReveal>
                    </div>
                </section>

                <section class="section newsletter">
                    <div class="container narrow">
                        <Reveal preset={motion.reveal}>
                            <EmailCapture copy={content.newsletter.clone()} />
                        </Reveal>
                    </div>
                </section>

                <section class="section cta" id={APPLY_ID}>
                    <div class="container narrow">
                        <Reveal preset={motion.reveal}>
                            <h2 class="cta-heading">{ content.apply.heading.clone() }</h2>
                            <p class="muted">{ content.apply.body.clone() }</p>
                        </Reveal>
                        <ApplyButton theme={theme} label={content.apply.button.clone()} />
                    </div>
                </section>

                <footer class="footer">
                    <div class="container footer-inner">
                        <span>{ format!("© {} {}", year, content.brand) }</span>
                        <Link<Route> to={Route::Index} classes="footer-link">{ "All designs" }</Link<Route>>
                    </div>
                </footer>

                if motion.floating_apply {
                    <FloatingApply label={content.apply.button.clone()} />
                }
            </div>
        </ViewportProvider>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    theme: &'static Theme,
    content: Rc<Content>,
}

#[derive(Properties, PartialEq)]
struct SectionLabelProps {
    theme: &'static Theme,
    text: AttrValue,
}

#[function_component(SectionLabel)]
fn section_label(props: &SectionLabelProps) -> Html {
    html! {
        <>
            if props.theme.motion.section_lines {
                <LineReveal class="section-line" />
            }
            <ScaleBlurReveal>
                <span class="section-label">{ props.text.clone() }</span>
            </ScaleBlurReveal>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ApplyButtonProps {
    theme: &'static Theme,
    label: AttrValue,
}

#[function_component(ApplyButton)]
fn apply_button(props: &ApplyButtonProps) -> Html {
    if props.theme.motion.magnetic {
        html! {
            <MagneticButton href={AttrValue::from(config::APPLY_URL)} class="button-primary">
                { props.label.clone() }
            </MagneticButton>
        }
    } else {
        html! {
            <a href={config::APPLY_URL} target="_blank" rel="noopener noreferrer" class="button-primary">
                { props.label.clone() }
            </a>
        }
    }
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let (theme, content) = (props.theme, &props.content);
    let motion = theme.motion;
    let lines: Vec<String> = match theme.headline {
        Some(lines) => lines.iter().map(|line| line.to_string()).collect(),
        None => content.hero.headline.clone(),
    };

    let headline = html! {
        <h1 class="hero-headline">
            { for lines.iter().enumerate().map(|(i, line)| {
                let delay = 0.2 + 0.3 * i as f64;
                let accent = i + 1 == lines.len();
                let class = classes!("hero-line", accent.then_some("accent"));
                match motion.headline {
                    HeadlineStyle::Characters => html! {
                        <span class={class}><TextReveal text={line.clone()} delay={delay} /></span>
                    },
                    HeadlineStyle::Words => html! {
                        <span class={class}><WordReveal text={line.clone()} delay={delay} /></span>
                    },
                    HeadlineStyle::Plain => html! {
                        <Reveal preset={motion.reveal} delay={delay} class={class}>{ line.clone() }</Reveal>
                    },
                }
            }) }
        </h1>
    };

    let onsecondary = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(COMPENSATION_ID);
    });

    let body = html! {
        <div class="container hero-content">
            <Reveal preset={motion.reveal}>
                <span class="eyebrow">{ content.hero.eyebrow.clone() }</span>
            </Reveal>
            { headline }
            <Reveal preset={motion.reveal} delay={0.6}>
                <p class="hero-sub muted">{ content.hero.subheadline.clone() }</p>
            </Reveal>
            <Reveal preset={motion.reveal} delay={0.8} class="hero-actions">
                <ApplyButton theme={theme} label={content.hero.primary_cta.clone()} />
                <a href={format!("#{}", COMPENSATION_ID)} class="button-secondary" onclick={onsecondary}>
                    { content.hero.secondary_cta.clone() }
                </a>
            </Reveal>
            <Reveal preset={motion.reveal} delay={1.0}>
                <p class="hero-note muted">{ content.hero.reassurance.clone() }</p>
            </Reveal>
        </div>
    };

    match motion.hero {
        HeroStyle::Static => html! { <section class="hero">{ body }</section> },
        HeroStyle::Fade => html! { <HeroFade class="hero">{ body }</HeroFade> },
        HeroStyle::FadeBlur => html! { <HeroFade class="hero" blur=true>{ body }</HeroFade> },
    }
}

#[function_component(Stats)]
fn stats(props: &SectionProps) -> Html {
    let motion = props.theme.motion;

    html! {
        <section class="section stats">
            <StaggerReveal preset={motion.reveal} stagger={motion.stagger} class="container stats-grid">
                { for props.content.stats.iter().enumerate().map(|(i, stat)| {
                    let value = match (stat, motion.counters) {
                        (Stat::Counter { value, suffix, .. }, Some(mode)) => html! {
                            <AnimatedCounter value={*value} suffix={suffix.clone()} mode={mode} />
                        },
                        (Stat::Counter { value, suffix, .. }, None) => html! {
                            { format!("{}{}", format_count(*value), suffix) }
                        },
                        (Stat::Fixed { display, .. }, _) => html! { { display.clone() } },
                    };
                    html! {
                        <StaggerItem index={i} class="stat">
                            <div class="stat-value accent">{ value }</div>
                            <div class="stat-label muted">{ stat.label().to_owned() }</div>
                        </StaggerItem>
                    }
                }) }
            </StaggerReveal>
        </section>
    }
}

#[function_component(Benefits)]
fn benefits(props: &SectionProps) -> Html {
    let motion = props.theme.motion;
    let benefits = &props.content.benefits.items;

    let body = match motion.benefits {
        BenefitsLayout::Tabs => html! { <BenefitTabs benefits={benefits.clone()} /> },
        BenefitsLayout::Grid => html! {
            <StaggerReveal preset={motion.reveal} stagger={motion.stagger} class="benefit-grid">
                { for benefits.iter().enumerate().map(|(i, benefit)| {
                    let card = html! {
                        <div class="card">
                            <span class="card-index accent">{ format!("{:02}", i + 1) }</span>
                            <h3>{ benefit.title.clone() }</h3>
                            <p class="muted">{ benefit.description.clone() }</p>
                        </div>
                    };
                    html! {
                        <StaggerItem index={i}>
                            if motion.tilt {
                                <TiltCard>{ card }</TiltCard>
                            } else {
                                { card }
                            }
                        </StaggerItem>
                    }
                }) }
            </StaggerReveal>
        },
    };

    html! {
        <section class="section benefits" id={BENEFITS_ID}>
            <div class="container">
                <SectionLabel theme={props.theme} text={props.content.benefits.label.clone()} />
                <Reveal preset={motion.reveal}>
                    <h2 class="section-heading">{ props.content.benefits.heading.clone() }</h2>
                </Reveal>
                { body }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct BenefitTabsProps {
    benefits: Vec<Benefit>,
}

#[function_component(BenefitTabs)]
fn benefit_tabs(props: &BenefitTabsProps) -> Html {
    let active = use_state(|| 0usize);
    let current = props.benefits.get(*active).or_else(|| props.benefits.first());

    html! {
        <div class="benefit-tabs">
            <div class="benefit-tab-row" role="tablist">
                { for props.benefits.iter().enumerate().map(|(i, benefit)| {
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(i))
                    };
                    html! {
                        <button
                            role="tab"
                            class={classes!("benefit-tab", (i == *active).then_some("benefit-tab-active"))}
                            aria-selected={(i == *active).to_string()}
                            {onclick}
                        >
                            { benefit.title.clone() }
                        </button>
                    }
                }) }
            </div>
            if let Some(benefit) = current {
                <div class="card benefit-detail" role="tabpanel" key={benefit.title.clone()}>
                    <h3>{ benefit.title.clone() }</h3>
                    <p class="muted">{ benefit.description.clone() }</p>
                </div>
            }
        </div>
    }
}

#[function_component(Compensation)]
fn compensation(props: &SectionProps) -> Html {
    let motion = props.theme.motion;
    let compensation = &props.content.compensation;

    let tiers = html! {
        <StaggerReveal preset={motion.reveal} stagger={motion.stagger} class="tier-grid">
            { for compensation.tiers.iter().enumerate().map(|(i, tier)| html! {
                <StaggerItem index={i}>
                    <div class={classes!("card", "tier", tier.featured.then_some("tier-featured"))}>
                        <span class="tier-level">{ tier.level.clone() }</span>
                        <div class="tier-range accent">{ tier.range.clone() }</div>
                        <span class="muted">{ tier.note.clone() }</span>
                        <span class="muted tier-period">{ "per month" }</span>
                    </div>
                </StaggerItem>
            }) }
        </StaggerReveal>
    };

    html! {
        <section class="section compensation" id={COMPENSATION_ID}>
            <div class="container">
                <SectionLabel theme={props.theme} text={compensation.label.clone()} />
                <Reveal preset={motion.reveal}>
                    <h2 class="section-heading">{ compensation.heading.clone() }</h2>
                </Reveal>
                if motion.scale_on_scroll {
                    <ScaleOnScroll>{ tiers }</ScaleOnScroll>
                } else {
                    { tiers }
                }
                <Reveal preset={motion.reveal} delay={0.3}>
                    <p class="perks muted">{ compensation.perks.clone() }</p>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(ContentUnavailable)]
fn content_unavailable() -> Html {
    html! {
        <div class="content-unavailable">
            <h1>{ "Sorry, this page could not be loaded." }</h1>
            <Link<Route> to={Route::Index}>{ "Back to all designs" }</Link<Route>>
        </div>
    }
}

const BASE_CSS: &str = r#"
    html { scroll-behavior: smooth; }
    body { margin: 0; }
    .concept-page { overflow-x: hidden; line-height: 1.6; }
    .concept-page *, .concept-page *::before, .concept-page *::after { box-sizing: border-box; }
    .container { max-width: 1200px; margin: 0 auto; padding: 0 2rem; }
    .container.narrow { max-width: 720px; text-align: center; }
    .section { position: relative; padding: 8rem 0; }
    .section-heading { font-size: clamp(2.25rem, 5vw, 4rem); line-height: 1.1; margin: 0.5rem 0 3rem; }
    .section-label { display: inline-block; font-size: 0.8rem; letter-spacing: 0.2em; text-transform: uppercase; color: var(--accent); }
    .section-line { height: 1px; background: var(--accent); margin-bottom: 1.5rem; }
    .accent { color: var(--accent); }
    .muted { color: var(--muted); }
    .lead { font-size: 1.5rem; }

    .site-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; display: flex; justify-content: space-between; align-items: center; padding: 1.25rem 2rem; transition: background 0.3s, backdrop-filter 0.3s; }
    .site-nav-solid { background: color-mix(in srgb, var(--bg) 85%, transparent); backdrop-filter: blur(12px); }
    .site-nav a { color: var(--text); text-decoration: none; }
    .site-nav-brand { font-family: var(--font-display); font-weight: 700; }
    .site-nav-links { display: flex; gap: 1.5rem; align-items: center; }
    .site-nav-apply { padding: 0.5rem 1.25rem; border-radius: 999px; background: var(--accent); color: var(--bg) !important; }

    .scroll-progress { position: fixed; top: 0; left: 0; right: 0; height: 3px; z-index: 60; background: linear-gradient(90deg, var(--accent), var(--secondary)); }

    .hero { min-height: 100vh; display: flex; align-items: center; padding-top: 6rem; }
    .hero-inner { width: 100%; }
    .hero-headline { font-size: clamp(3rem, 10vw, 8rem); line-height: 1; margin: 1.5rem 0; letter-spacing: -0.03em; }
    .hero-line { display: block; }
    .eyebrow { font-size: 0.85rem; letter-spacing: 0.15em; text-transform: uppercase; color: var(--accent); }
    .hero-sub { font-size: 1.25rem; max-width: 36rem; }
    .hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; margin: 2rem 0 1rem; align-items: center; }
    .hero-note { font-size: 0.9rem; }

    .button-primary, .button-secondary { display: inline-block; padding: 1rem 2rem; border-radius: 999px; font-weight: 600; text-decoration: none; border: none; cursor: pointer; }
    .button-secondary { color: var(--text); border: 1px solid var(--muted); }

    .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 2rem; text-align: center; }
    .stat-value { font-family: var(--font-display); font-size: 3rem; font-weight: 700; }
    .stat-label { font-size: 0.9rem; text-transform: uppercase; letter-spacing: 0.1em; }

    .about-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 3rem; }
    .about-glow { position: absolute; right: -10%; top: 10%; pointer-events: none; }
    .glow { width: 480px; height: 480px; border-radius: 50%; background: radial-gradient(circle, var(--accent), transparent 70%); opacity: 0.15; }

    .quote blockquote { margin: 0; font-family: var(--font-display); font-size: clamp(2rem, 5vw, 3.5rem); line-height: 1.15; text-transform: uppercase; }
    .quote cite { display: block; margin-top: 2rem; font-size: 1rem; font-style: normal; color: var(--muted); text-transform: none; }

    .sticky-text-line { font-family: var(--font-display); font-size: clamp(2.5rem, 8vw, 6rem); margin: 0; }

    .card { background: var(--surface); border: 1px solid color-mix(in srgb, var(--text) 10%, transparent); border-radius: 1.25rem; padding: 2rem; height: 100%; }
    .card-index { font-family: var(--font-display); font-size: 0.9rem; }
    .benefit-grid, .tier-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; }
    .benefit-tab-row { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-bottom: 2rem; }
    .benefit-tab { padding: 0.75rem 1.25rem; border-radius: 999px; background: transparent; color: var(--text); border: 1px solid var(--muted); cursor: pointer; font: inherit; }
    .benefit-tab-active { background: var(--accent); color: var(--bg); border-color: var(--accent); }

    .tier { text-align: center; }
    .tier-featured { border-color: var(--accent); transform: scale(1.03); }
    .tier-level { display: block; text-transform: uppercase; letter-spacing: 0.15em; font-size: 0.85rem; }
    .tier-range { font-family: var(--font-display); font-size: 2rem; font-weight: 700; margin: 1rem 0 0.5rem; }
    .tier-period { display: block; font-size: 0.8rem; }
    .perks { text-align: center; margin-top: 3rem; }

    .video-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1.5rem; }
    .video-embed { border-radius: 1rem; overflow: hidden; background: var(--surface); }

    .requirement-list { list-style: none; padding: 0; margin: 0; display: grid; gap: 1rem; font-size: 1.15rem; }

    .email-capture-form { display: flex; gap: 0.75rem; justify-content: center; flex-wrap: wrap; margin-top: 1.5rem; }
    .email-capture-form input { flex: 1 1 260px; max-width: 360px; padding: 1rem 1.25rem; border-radius: 999px; border: 1px solid var(--muted); background: var(--surface); color: var(--text); font: inherit; }
    .email-capture-form button { padding: 1rem 2rem; border-radius: 999px; border: none; background: var(--accent); color: var(--bg); font-weight: 600; cursor: pointer; }
    .email-capture-form button:disabled { opacity: 0.6; cursor: wait; }
    .email-capture-success-title { font-size: 1.5rem; color: var(--accent); margin-bottom: 0.25rem; }

    .cta-heading { font-size: clamp(3rem, 10vw, 7rem); margin: 0; text-transform: uppercase; }
    .cta .button-primary { margin-top: 2rem; }

    .footer { padding: 3rem 0; border-top: 1px solid color-mix(in srgb, var(--text) 10%, transparent); font-size: 0.9rem; color: var(--muted); }
    .footer-inner { display: flex; justify-content: space-between; }
    .footer-link { color: var(--muted); }

    .floating-apply { position: fixed; right: 2rem; bottom: 2rem; z-index: 40; padding: 1rem 1.75rem; border-radius: 999px; background: var(--accent); color: var(--bg); font-weight: 600; text-decoration: none; opacity: 0; transform: translateY(20px); pointer-events: none; transition: opacity 0.3s, transform 0.3s; }
    .floating-apply-visible { opacity: 1; transform: none; pointer-events: auto; }
    .section-nav { position: fixed; left: 2rem; top: 50%; transform: translateY(-50%); z-index: 30; display: flex; flex-direction: column; gap: 0.25rem; opacity: 0; pointer-events: none; transition: opacity 0.3s; }
    .section-nav-visible { opacity: 1; pointer-events: auto; }
    .section-nav-link { display: flex; align-items: center; gap: 0.6rem; padding: 0.5rem 0; font-size: 0.8rem; font-weight: 600; letter-spacing: 0.08em; text-transform: uppercase; color: var(--muted); text-decoration: none; transition: color 0.3s; }
    .section-nav-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: var(--accent); opacity: 0; transform: scale(0); transition: opacity 0.2s, transform 0.2s; }
    .section-nav-active { color: var(--accent); }
    .section-nav-active .section-nav-dot { opacity: 1; transform: scale(1); }
    @media (max-width: 1280px) { .section-nav { display: none; } }

    .content-unavailable { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; }

    @media (max-width: 768px) {
        .section { padding: 5rem 0; }
        .site-nav-link { display: none; }
    }
"#;

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn top_reset_is_immediate_under_smooth_scrolling() {
        let window = web_sys::window().expect("window");
        let document = window.document().expect("document");
        let root = document.document_element().expect("root");
        root.set_attribute("style", "scroll-behavior: smooth;").expect("style");
        let filler = document.create_element("div").expect("div");
        filler.set_attribute("style", "height: 5000px;").expect("style");
        document.body().expect("body").append_child(&filler).expect("append");

        let options = ScrollToOptions::new();
        options.set_top(600.0);
        options.set_behavior(ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&options);
        assert_eq!(window.scroll_y().expect("scroll"), 600.0);

        scroll_to_top();
        assert_eq!(window.scroll_y().expect("scroll"), 0.0);

        filler.remove();
        root.remove_attribute("style").expect("style");
    }
}

//! The landing page: hero, logos, features, stats, details, showcase,
//! interface, benefits, testimonials, FAQ, CTA and footer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{Datelike, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated::{use_in_view, AnimatedSection};
use crate::components::navbar::Navbar;
use crate::config;
use crate::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        title: "Digital Ledger",
        description: "Track income and expenses with full Bengali language support. View real-time financial data.",
    },
    Feature {
        title: "Wholesaler Management",
        description: "Manage all suppliers in one place. Track purchases, payments, and outstanding dues with detailed ledgers.",
    },
    Feature {
        title: "Monthly Reports",
        description: "Generate comprehensive reports with interactive charts. Export as PDF or CSV for accounting purposes.",
    },
    Feature {
        title: "Inventory Control",
        description: "Track stock levels with automated reorder points, expiration alerts, and batch tracing.",
    },
    Feature {
        title: "Order Processing",
        description: "Process prescriptions and wholesale orders through one queue, from intake to handoff.",
    },
    Feature {
        title: "Analytics & Insights",
        description: "Spot slow movers, margin leaks, and demand spikes before they hit the bottom line.",
    },
];

struct DetailedFeature {
    title: &'static str,
    points: [&'static str; 4],
}

const DETAILED_FEATURES: [DetailedFeature; 4] = [
    DetailedFeature {
        title: "Easy Prescription Flow",
        points: [
            "Seamless EHR integration",
            "Electronic signature capture",
            "Multi-pharmacy support",
            "Automated refill reminders",
        ],
    },
    DetailedFeature {
        title: "Leverage Data Portal",
        points: [
            "Real-time analytics dashboard",
            "Custom report builder",
            "Export to multiple formats",
            "Scheduled report delivery",
        ],
    },
    DetailedFeature {
        title: "Informer-Based Cross-Checks",
        points: [
            "Cross-reference drug interactions",
            "Clinical decision support",
            "Formulary compliance",
            "Patient-specific alerts",
        ],
    },
    DetailedFeature {
        title: "Better Database Updates",
        points: [
            "Automatic drug updates",
            "NDC verification",
            "Price synchronization",
            "Compliance tracking",
        ],
    },
];

struct InterfacePanel {
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
}

const INTERFACE_PANELS: [InterfacePanel; 3] = [
    InterfacePanel {
        title: "Get It In Databiz",
        description: "Comprehensive data integration for seamless business operations.",
        gradient: "gradient-pink",
    },
    InterfacePanel {
        title: "Vendor List Management",
        description: "Organize and manage your vendor relationships in one place.",
        gradient: "gradient-purple",
    },
    InterfacePanel {
        title: "Sales & Track",
        description: "Track sales metrics and performance in real-time.",
        gradient: "gradient-emerald",
    },
];

struct SocialStat {
    value: &'static str,
    label: &'static str,
}

const SOCIAL_STATS: [SocialStat; 4] = [
    SocialStat { value: "1000+", label: "Users" },
    SocialStat { value: "50K+", label: "Prescriptions" },
    SocialStat { value: "24/7", label: "Support" },
    SocialStat { value: "4.9/5", label: "Rating" },
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Proshar transformed our pharmacy operations. The intuitive interface and powerful features have saved us countless hours.",
        name: "Sarah Chen",
        role: "Pharmacy Manager",
    },
    Testimonial {
        quote: "The best investment we've made for our pharmacy. Inventory management and e-prescribing are now seamless.",
        name: "Michael Rodriguez",
        role: "Owner, Community Pharmacy",
    },
    Testimonial {
        quote: "Outstanding platform with exceptional support. Our prescription accuracy has improved significantly.",
        name: "Emily Watson",
        role: "Clinical Pharmacist",
    },
];

struct FaqItem {
    question: &'static str,
    answer: &'static str,
}

const FAQ_ITEMS: [FaqItem; 4] = [
    FaqItem {
        question: "How does Proshar ensure data security?",
        answer: "Proshar implements industry-leading security measures including end-to-end encryption, HIPAA compliance, SOC 2 Type II certification, and regular security audits. Your patient data is protected with the highest standards.",
    },
    FaqItem {
        question: "How does Proshar help with inventory control?",
        answer: "Our inventory module provides real-time tracking, automated reorder points, expiration alerts, and batch tracing. You can set custom thresholds and receive notifications when stock runs low.",
    },
    FaqItem {
        question: "Can I integrate Proshar with my existing EHR?",
        answer: "Yes! Proshar offers integrations with major EHR systems. Our team will work with you to ensure a smooth migration and integration with your current workflows.",
    },
    FaqItem {
        question: "What kind of support do you offer?",
        answer: "We provide 24/7 customer support via phone, email, and live chat. Our dedicated success team offers onboarding, training, and ongoing assistance to ensure you get the most from Proshar.",
    },
];

const COMPANY_LOGOS: [&str; 5] = ["MediCore", "HealthBridge", "PharmaLink", "CureWell", "DoseHub"];

const TRUST_BADGES: [&str; 7] = ["ISO", "HIPAA", "PCI DSS", "GDPR", "CCPA", "SOC2", "FDA"];

struct FooterColumn {
    title: &'static str,
    links: &'static [&'static str],
}

const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Product",
        links: &["Features", "Pricing", "Integrations", "Testimonials"],
    },
    FooterColumn {
        title: "Company",
        links: &["About Us", "Careers", "Contact", "Blog"],
    },
    FooterColumn {
        title: "Resources",
        links: &["Support", "Documentation", "API", "Status"],
    },
];

#[derive(Properties, PartialEq)]
struct StatCardProps {
    value: u32,
    suffix: &'static str,
    label: &'static str,
    description: &'static str,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let count = use_state_eq(|| 0u32);
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), config::COUNT_UP_MARGIN);

    {
        let count = count.clone();
        use_effect_with_deps(
            move |(in_view, target): &(bool, u32)| {
                let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if *in_view {
                    let target = *target;
                    let step = (target as f64 / config::COUNT_UP_STEPS as f64).max(1.0);
                    let current = Rc::new(Cell::new(0.0f64));
                    let interval = Interval::new(
                        config::COUNT_UP_DURATION_MS / config::COUNT_UP_STEPS,
                        {
                            let slot = slot.clone();
                            let count = count.clone();
                            move || {
                                let next = current.get() + step;
                                current.set(next);
                                if next >= target as f64 {
                                    count.set(target);
                                    slot.borrow_mut().take();
                                } else {
                                    count.set(next as u32);
                                }
                            }
                        },
                    );
                    *slot.borrow_mut() = Some(interval);
                }
                move || {
                    slot.borrow_mut().take();
                }
            },
            (in_view, props.value),
        );
    }

    html! {
        <div ref={node} class="stat-card">
            <div class="stat-value">{ *count }{ props.suffix }</div>
            <div class="stat-label">{ props.label }</div>
            <p class="stat-description">{ props.description }</p>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Fresh page starts at the top; fragment scrolling is the navbar's job.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_faq = use_state_eq(|| Some(0usize));

    html! {
        <main class="landing">
            <Navbar />

            <section id="home" class="hero">
                <div class="hero-glow hero-glow-orange"></div>
                <div class="hero-glow hero-glow-indigo"></div>
                <div class="hero-content">
                    <AnimatedSection>
                        <span class="hero-chip">{ "Built for independent pharmacies" }</span>
                    </AnimatedSection>
                    <h1 class="hero-title">
                        { "Modern Pharmacy Management " }
                        <span class="hero-title-accent">{ "Made Simple" }</span>
                    </h1>
                    <p class="hero-subtitle">
                        { "All-in-one platform to manage your pharmacy's ledger, suppliers, inventory, and reports." }
                    </p>
                    <div class="hero-cta-group">
                        <button class="cta-primary">{ "Get Started" }</button>
                        <button class="cta-secondary">{ "Book a Demo" }</button>
                    </div>
                </div>
            </section>

            <section class="logo-strip">
                <p class="logo-strip-label">{ "Trusted by teams at" }</p>
                <div class="logo-row">
                    { for COMPANY_LOGOS.iter().map(|name| html! {
                        <span class="company-logo">{ *name }</span>
                    }) }
                </div>
            </section>

            <section id="features" class="features">
                <AnimatedSection>
                    <h2 class="section-title">
                        { "Everything your pharmacy runs on" }
                    </h2>
                    <p class="section-subtitle">
                        { "One platform for the ledger, the shelf, and the counter." }
                    </p>
                </AnimatedSection>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <AnimatedSection class="feature-card">
                            <h3>{ feature.title }</h3>
                            <p>{ feature.description }</p>
                        </AnimatedSection>
                    }) }
                </div>
            </section>

            <section class="stats">
                <div class="stat-row">
                    <StatCard value={100} suffix="%" label="Accuracy"
                        description="Precision in every prescription" />
                    <StatCard value={5} suffix="x" label="Faster"
                        description="Processing speed" />
                    <StatCard value={20} suffix="%" label="Cost Reduction"
                        description="Average savings" />
                </div>
            </section>

            <section class="feature-details">
                <AnimatedSection>
                    <h2 class="section-title">{ "Built around the work itself" }</h2>
                </AnimatedSection>
                <div class="detail-grid">
                    { for DETAILED_FEATURES.iter().map(|detail| html! {
                        <AnimatedSection class="detail-card">
                            <h3>{ detail.title }</h3>
                            <ul>
                                { for detail.points.iter().map(|point| html! {
                                    <li>{ *point }</li>
                                }) }
                            </ul>
                        </AnimatedSection>
                    }) }
                </div>
            </section>

            <section class="showcase">
                <AnimatedSection class="showcase-panel">
                    <h2 class="section-title">{ "Designed for the counter, not the back office" }</h2>
                    <p class="section-subtitle">
                        { "Every screen is built to be read at arm's length in the middle of a rush." }
                    </p>
                    <div class="showcase-frame"></div>
                </AnimatedSection>
            </section>

            <section id="interface" class="interface">
                <AnimatedSection>
                    <h2 class="section-title">{ "An interface that keeps up" }</h2>
                </AnimatedSection>
                <div class="interface-grid">
                    { for INTERFACE_PANELS.iter().map(|panel| html! {
                        <AnimatedSection class={classes!("interface-panel", panel.gradient)}>
                            <h3>{ panel.title }</h3>
                            <p>{ panel.description }</p>
                        </AnimatedSection>
                    }) }
                </div>
            </section>

            <section id="benefits" class="benefits">
                <AnimatedSection>
                    <h2 class="section-title">{ "Pharmacies run better on Proshar" }</h2>
                </AnimatedSection>
                <div class="benefit-row">
                    { for SOCIAL_STATS.iter().map(|stat| html! {
                        <div class="benefit-stat">
                            <div class="benefit-value">{ stat.value }</div>
                            <div class="benefit-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <AnimatedSection>
                    <h2 class="section-title">{ "What pharmacists say" }</h2>
                </AnimatedSection>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <AnimatedSection class="testimonial-card">
                            <p class="testimonial-quote">{ t.quote }</p>
                            <div class="testimonial-author">
                                <span class="testimonial-name">{ t.name }</span>
                                <span class="testimonial-role">{ t.role }</span>
                            </div>
                        </AnimatedSection>
                    }) }
                </div>
            </section>

            <section class="faq">
                <AnimatedSection>
                    <h2 class="section-title">{ "Frequently Asked Questions" }</h2>
                </AnimatedSection>
                <div class="faq-list">
                    { for FAQ_ITEMS.iter().enumerate().map(|(i, item)| {
                        let is_open = *open_faq == Some(i);
                        let onclick = {
                            let open_faq = open_faq.clone();
                            Callback::from(move |_| {
                                open_faq.set(if *open_faq == Some(i) { None } else { Some(i) });
                            })
                        };
                        html! {
                            <div class={classes!("faq-item", is_open.then(|| "open"))}>
                                <button class="faq-question" {onclick}>
                                    { item.question }
                                    <span class="faq-chevron">{ if is_open { "−" } else { "+" } }</span>
                                </button>
                                {
                                    if is_open {
                                        html! { <p class="faq-answer">{ item.answer }</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section class="cta-band">
                <AnimatedSection>
                    <h2>{ "Ready to modernize your pharmacy?" }</h2>
                    <p>{ "Join the pharmacies already running their day on Proshar." }</p>
                    <button class="cta-primary">{ "Get Started" }</button>
                </AnimatedSection>
            </section>

            <footer class="footer">
                <div class="footer-columns">
                    <div class="footer-brand">
                        <span class="footer-logo">{ "Proshar" }</span>
                        <p>{ "Modern pharmacy management made simple." }</p>
                    </div>
                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div class="footer-column">
                            <h4>{ column.title }</h4>
                            <ul>
                                { for column.links.iter().map(|link| html! {
                                    <li><a href="#">{ *link }</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                    <div class="footer-column">
                        <h4>{ "Legal" }</h4>
                        <ul>
                            <li>
                                <Link<Route> to={Route::Privacy}>{ "Privacy Policy" }</Link<Route>>
                            </li>
                            <li>
                                <Link<Route> to={Route::Terms}>{ "Terms of Service" }</Link<Route>>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="footer-badges">
                    { for TRUST_BADGES.iter().map(|badge| html! {
                        <span class="trust-badge">{ *badge }</span>
                    }) }
                </div>
                <div class="footer-bottom">
                    { format!("© {} Proshar. All rights reserved.", Utc::now().year()) }
                </div>
            </footer>
        </main>
    }
}

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::Catalog;
use crate::components::collection::CollectionSection;
use crate::components::reveal::RevealBlock;
use crate::motion::{self, stagger_delay_ms, PATH_TRACK};

const SOCIAL_PROOF: &[(&str, &str, &str, &str)] = &[
    ("📈", "1,500+", "Active Users", "Growing monthly"),
    ("🏆", "98.7%", "Success Rate", "Client satisfaction"),
    ("⏱", "5.2hrs", "Saved Daily", "Per business"),
    ("💰", "$12.8M", "Revenue Generated", "For our clients"),
];

const TESTIMONIALS: &[(&str, &str, &str, &str)] = &[
    (
        "James Anderson",
        "CEO, Tech Ventures",
        "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&w=150&q=80",
        "MORCO AURA watches represent the perfect blend of tradition and innovation. The craftsmanship is unparalleled.",
    ),
    (
        "Sarah Chen",
        "Watch Collector",
        "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=150&q=80",
        "Each piece tells a unique story. The attention to detail and precision is remarkable.",
    ),
    (
        "Michael Roberts",
        "Luxury Retail Expert",
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=150&q=80",
        "The customer service and product quality exceed all expectations. A true luxury experience.",
    ),
    (
        "Elena Rodriguez",
        "Fashion Designer",
        "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?auto=format&fit=crop&w=150&q=80",
        "MORCO AURA sets new standards in watch design. Each collection is a masterpiece.",
    ),
];

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "🕰",
        "Swiss Precision",
        "Each movement is crafted with unparalleled attention to detail and precision.",
    ),
    (
        "⌚",
        "Smart Integration",
        "Seamlessly blending traditional horology with cutting-edge technology.",
    ),
    (
        "🛡",
        "Lifetime Warranty",
        "Our commitment to quality is backed by a comprehensive lifetime warranty.",
    ),
    (
        "🏅",
        "Award Winning",
        "Recognized globally for innovation in luxury watchmaking.",
    ),
    (
        "📦",
        "Custom Design",
        "Create your perfect timepiece with our bespoke design service.",
    ),
    (
        "⭐",
        "Limited Editions",
        "Exclusive collections that push the boundaries of watch design.",
    ),
];

const TECH_SPECS: &[(&str, &str, &str)] = &[
    (
        "🧠",
        "Quantum Processing",
        "Next-gen neural network with advanced AI capabilities",
    ),
    (
        "⚡",
        "Neural Sync™",
        "Seamless integration with biological rhythms",
    ),
    (
        "🔮",
        "Holographic Core",
        "Revolutionary 4D display technology",
    ),
];

const LESSONS_CHECKLIST: &[&str] = &[
    "World-class custom built learning application",
    "Scale from Zero to $10k/month quickly",
    "Master key skills for wealth generation",
];

const NETWORK_CHECKLIST: &[&str] = &[
    "Celebrate your wins with people who understand",
    "Access knowledge updated by the hour",
    "Network with 113,500+ students",
];

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_context::<Rc<Catalog>>().expect("catalog context is provided by App");

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Drive the path indicator from the normalized document position. The
    // interpolation itself is pure; this callback only writes the styles.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let doc_element = document.document_element().unwrap();
                let viewport = window_clone.inner_height().unwrap().as_f64().unwrap();
                let progress = motion::scroll_progress(
                    doc_element.scroll_top() as f64,
                    doc_element.scroll_height() as f64,
                    viewport,
                );
                let state = PATH_TRACK.state_at(progress);

                if let Some(arrow) = document.query_selector(".path-arrow").ok().flatten() {
                    let _ = arrow.set_attribute(
                        "style",
                        &format!(
                            "top: {:.2}%; opacity: {:.3}; transform: translateX(-50%) scale({:.3});",
                            state.offset, state.opacity, state.scale
                        ),
                    );
                }
                if let Some(fill) = document.query_selector(".path-line-fill").ok().flatten() {
                    let _ = fill.set_attribute(
                        "style",
                        &format!("height: {:.2}%; opacity: {:.3};", state.offset, state.opacity),
                    );
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        (),
    );

    let scroll_to_collection = Callback::from(|_: MouseEvent| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(section) = document.get_element_by_id("latest-collection") {
                section.scroll_into_view();
            }
        }
    });

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1 class="hero-title">{"MORCO AURA"}</h1>
                    <p class="hero-subtitle">
                        {"Crafting tomorrow's classics today. Precision horology for the next generation of collectors."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={scroll_to_collection}>
                            {"Explore the Collection"}
                        </button>
                    </div>
                    <div class="hero-scroll-hint">{"⌄"}</div>
                </div>
            </header>

            <section class="stats-section">
                <div class="container">
                    <RevealBlock class={classes!("stats-grid")}>
                        { for SOCIAL_PROOF.iter().enumerate().map(|(i, (icon, value, label, subtext))| html! {
                            <div
                                class="stat-card reveal-item"
                                key={*label}
                                style={format!("transition-delay: {}ms;", stagger_delay_ms(i))}
                            >
                                <div class="stat-icon">{ *icon }</div>
                                <h4 class="stat-value">{ *value }</h4>
                                <p class="stat-label">{ *label }</p>
                                <p class="stat-subtext">{ *subtext }</p>
                            </div>
                        }) }
                    </RevealBlock>

                    <RevealBlock class={classes!("testimonial-grid")}>
                        { for TESTIMONIALS.iter().enumerate().map(|(i, (name, title, image, quote))| html! {
                            <div
                                class="testimonial-card reveal-item"
                                key={*name}
                                style={format!("transition-delay: {}ms;", stagger_delay_ms(i))}
                            >
                                <div class="testimonial-header">
                                    <img src={*image} alt={*name} loading="lazy" class="testimonial-avatar" />
                                    <div>
                                        <h5 class="testimonial-name">{ *name }</h5>
                                        <p class="testimonial-title">{ *title }</p>
                                    </div>
                                </div>
                                <p class="testimonial-quote">{ *quote }</p>
                            </div>
                        }) }
                    </RevealBlock>
                </div>
            </section>

            <section class="path-section">
                <div class="container">
                    <RevealBlock class={classes!("path-header")}>
                        <h2 class="path-eyebrow">{"A STEP-BY-STEP PATH"}</h2>
                        <h3 class="path-title">{"TOOLS TO MAXIMISE"}<br />{"YOUR INCOME"}</h3>
                    </RevealBlock>

                    <div class="path-grid">
                        <RevealBlock class={classes!("path-column")}>
                            <div class="feature-card">
                                <div class="feature-icon">{"🎓"}</div>
                                <h4 class="feature-title">{"VITAL LIFE LESSONS"}</h4>
                                { for LESSONS_CHECKLIST.iter().map(|text| html! {
                                    <div class="check-row" key={*text}>
                                        <span class="check-mark">{"✔"}</span>
                                        <p>{ *text }</p>
                                    </div>
                                }) }
                            </div>
                            <div class="path-figure">
                                <img
                                    src="https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?auto=format&fit=crop&q=80"
                                    alt="Learning Platform Interface"
                                    loading="lazy"
                                />
                            </div>
                        </RevealBlock>

                        <div class="path-rail">
                            <div class="path-line">
                                <div class="path-line-fill"></div>
                                <div class="path-arrow"></div>
                            </div>
                        </div>

                        <RevealBlock class={classes!("path-column")}>
                            <div class="path-figure">
                                <img
                                    src="https://images.unsplash.com/photo-1531403009284-440f080d1e12?auto=format&fit=crop&q=80"
                                    alt="Network Dashboard"
                                    loading="lazy"
                                />
                            </div>
                            <div class="feature-card">
                                <div class="feature-icon">{"🤝"}</div>
                                <h4 class="feature-title">{"PRIVATE NETWORK"}</h4>
                                { for NETWORK_CHECKLIST.iter().map(|text| html! {
                                    <div class="check-row" key={*text}>
                                        <span class="check-mark">{"✔"}</span>
                                        <p>{ *text }</p>
                                    </div>
                                }) }
                            </div>
                        </RevealBlock>
                    </div>
                </div>
            </section>

            <section class="tech-section">
                <div class="container">
                    <div class="tech-grid">
                        <RevealBlock class={classes!("tech-copy")}>
                            <h3 class="tech-eyebrow">{"QUANTUM INNOVATION"}</h3>
                            <h2 class="tech-title">{"Next Generation"}<br />{"Timepiece"}</h2>
                            { for TECH_SPECS.iter().enumerate().map(|(i, (icon, title, description))| html! {
                                <div
                                    class="tech-spec-row reveal-item"
                                    key={*title}
                                    style={format!("transition-delay: {}ms;", stagger_delay_ms(i))}
                                >
                                    <div class="tech-spec-icon">{ *icon }</div>
                                    <div>
                                        <h4>{ *title }</h4>
                                        <p>{ *description }</p>
                                    </div>
                                </div>
                            }) }
                        </RevealBlock>

                        <RevealBlock class={classes!("tech-display")}>
                            <div class="watch-dial">
                                { for (0..24).map(|i| html! {
                                    <div
                                        class="dial-tick"
                                        key={i}
                                        style={format!("transform: rotate({}deg);", i * 15)}
                                    >
                                        <span></span>
                                    </div>
                                }) }
                                <div class="dial-hand"></div>
                                <div class="dial-hub"></div>
                            </div>
                        </RevealBlock>
                    </div>
                </div>
            </section>

            <section id="craftsmanship" class="features-section">
                <div class="container">
                    <RevealBlock class={classes!("section-header")}>
                        <h3 class="section-title">{"EXCEPTIONAL CRAFTSMANSHIP"}</h3>
                        <p class="section-lede">
                            {"Every MORCO AURA timepiece is a masterpiece of precision engineering and artistic excellence."}
                        </p>
                    </RevealBlock>
                    <RevealBlock class={classes!("features-grid")}>
                        { for FEATURES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <div
                                class="feature-card reveal-item"
                                key={*title}
                                style={format!("transition-delay: {}ms;", stagger_delay_ms(i))}
                            >
                                <div class="feature-icon">{ *icon }</div>
                                <h4 class="feature-title">{ *title }</h4>
                                <p>{ *description }</p>
                            </div>
                        }) }
                    </RevealBlock>
                </div>
            </section>

            { for catalog.collections().iter().enumerate().map(|(i, collection)| {
                let id = (i == 0).then(|| AttrValue::from("latest-collection"));
                html! {
                    <CollectionSection
                        key={collection.title().to_string()}
                        id={id}
                        collection={collection.clone()}
                    />
                }
            }) }

            <footer class="footer">
                <div class="container">
                    <div class="footer-grid">
                        <div>
                            <h5 class="footer-brand">{"MORCO AURA"}</h5>
                            <p>{"Crafting tomorrow's classics today."}</p>
                        </div>
                        <div>
                            <h6 class="footer-heading">{"Collections"}</h6>
                            <ul>
                                <li>{"Chronograph"}</li>
                                <li>{"Automatic"}</li>
                                <li>{"Smart Fusion"}</li>
                                <li>{"Limited Edition"}</li>
                            </ul>
                        </div>
                        <div>
                            <h6 class="footer-heading">{"Support"}</h6>
                            <ul>
                                <li>{"Contact"}</li>
                                <li>{"FAQ"}</li>
                                <li>{"Shipping"}</li>
                                <li>{"Returns"}</li>
                            </ul>
                        </div>
                        <div>
                            <h6 class="footer-heading">{"Follow Us"}</h6>
                            <ul>
                                <li>{"Instagram"}</li>
                                <li>{"Twitter"}</li>
                                <li>{"Facebook"}</li>
                                <li>{"LinkedIn"}</li>
                            </ul>
                        </div>
                    </div>
                </div>
            </footer>
        </div>
    }
}

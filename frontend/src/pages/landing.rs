use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

use crate::enhancer::page::PageEnhancer;
use crate::scheduler::BrowserScheduler;

const FEATURES: &[(&str, &str, &str)] = &[
    ("🎮", "Play-driven testing", "Record a session once and QAPlay replays it on every build."),
    ("🧠", "Smart assertions", "Visual and state checks are suggested from what you played."),
    ("⚡", "Fast feedback", "Runs locally in seconds, no device farm needed."),
    ("🔒", "Private by default", "Recordings stay on your machine unless you share them."),
];

const TECH: &[(&str, &str)] = &[
    ("Rust core", "Native recorder with a tiny footprint."),
    ("Cross-platform", "macOS and Windows builds from one codebase."),
    ("Open formats", "Sessions are plain files you can diff and review."),
];

const STEPS: &[(&str, &str, &str)] = &[
    ("1", "Download", "Grab the build for your platform."),
    ("2", "Record", "Play through the flow you care about."),
    ("3", "Replay", "Run it on every change and catch regressions."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Attach once after the first render; dropping the enhancer unregisters
    // its listeners when the page unmounts.
    use_effect_with_deps(
        move |_| {
            let enhancer = match PageEnhancer::attach_to_page(Rc::new(BrowserScheduler)) {
                Ok(enhancer) => {
                    info!("Landing enhancements ready ({} listeners)", enhancer.listener_count());
                    Some(enhancer)
                }
                Err(err) => {
                    error!("Landing enhancements unavailable: {}", err);
                    None
                }
            };
            move || drop(enhancer)
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        background: #0a0a0f;
                        color: #e5e7eb;
                        font-family: Inter, sans-serif;
                        overflow-x: hidden;
                    }
                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        background: rgba(10, 10, 15, 0.8);
                        backdrop-filter: blur(12px);
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.4rem;
                        color: white;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-links a {
                        color: #c4c4d4;
                        text-decoration: none;
                    }
                    .menu-toggle {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .menu-toggle span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: white;
                        transition: transform 0.3s ease;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 0 2rem;
                    }
                    .gradient-orb {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(80px);
                        opacity: 0.5;
                        pointer-events: none;
                        transition: transform 0.2s ease-out;
                    }
                    .orb-1 { width: 400px; height: 400px; background: #8b5cf6; top: 10%; left: 5%; }
                    .orb-2 { width: 300px; height: 300px; background: #4f46e5; bottom: 10%; right: 10%; }
                    .orb-3 { width: 200px; height: 200px; background: #22c55e; top: 40%; right: 30%; }
                    .hero h1 {
                        font-size: 3.5rem;
                        margin-bottom: 1rem;
                    }
                    .download-buttons {
                        display: flex;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .btn-download {
                        display: flex;
                        flex-direction: column;
                        padding: 1rem 2rem;
                        border-radius: 12px;
                        background: linear-gradient(135deg, #8b5cf6, #4f46e5);
                        color: white;
                        text-decoration: none;
                    }
                    .btn-platform {
                        font-weight: 600;
                    }
                    section {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 6rem 2rem;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .feature-card, .tech-card, .step-card {
                        position: relative;
                        padding: 2rem;
                        border-radius: 16px;
                        background: rgba(30, 30, 40, 0.7);
                        border: 1px solid rgba(139, 92, 246, 0.15);
                        overflow: hidden;
                    }
                    .feature-card::before {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(400px circle at var(--mouse-x, 50%) var(--mouse-y, 50%), rgba(139, 92, 246, 0.15), transparent 40%);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                        pointer-events: none;
                    }
                    .feature-card:hover::before {
                        opacity: 1;
                    }
                    .step-number {
                        font-size: 2rem;
                        font-weight: 700;
                        color: #8b5cf6;
                    }
                    footer {
                        text-align: center;
                        padding: 3rem 2rem;
                        color: #6b7280;
                    }
                    @media (max-width: 768px) {
                        .menu-toggle {
                            display: block;
                        }
                        .menu-toggle.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                        .menu-toggle.active span:nth-child(2) { opacity: 0; }
                        .menu-toggle.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                        .nav-links {
                            position: fixed;
                            top: 64px;
                            left: 0;
                            right: 0;
                            bottom: 0;
                            flex-direction: column;
                            align-items: center;
                            padding-top: 3rem;
                            background: rgba(10, 10, 15, 0.98);
                            transform: translateX(100%);
                            transition: transform 0.3s ease;
                        }
                        .nav-links.active {
                            transform: translateX(0);
                        }
                        .hero h1 {
                            font-size: 2.4rem;
                        }
                        .download-buttons {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>

            <nav class="navbar">
                <div class="nav-content">
                    <a href="#" class="nav-logo">{"QAPlay"}</a>
                    <div class="nav-links">
                        <a href="#features">{"Features"}</a>
                        <a href="#technology">{"Technology"}</a>
                        <a href="#how-it-works">{"How it works"}</a>
                        <a href="#download">{"Download"}</a>
                    </div>
                    <button id="mobile-menu" class="menu-toggle" aria-label="Toggle navigation">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            <header class="hero" id="download">
                <div class="gradient-orb orb-1"></div>
                <div class="gradient-orb orb-2"></div>
                <div class="gradient-orb orb-3"></div>
                <h1>{"Test your app by playing it"}</h1>
                <p>{"QAPlay turns a play session into a repeatable regression test."}</p>
                <div class="download-buttons">
                    <a href="#" class="btn-download">
                        <span class="btn-label">{"Download for"}</span>
                        <span class="btn-platform">{"macOS"}</span>
                    </a>
                    <a href="#" class="btn-download">
                        <span class="btn-label">{"Download for"}</span>
                        <span class="btn-platform">{"Windows"}</span>
                    </a>
                </div>
            </header>

            <section id="features">
                <div class="section-header">
                    <h2>{"Features"}</h2>
                    <p>{"Everything you need to stop clicking through the same flows by hand."}</p>
                </div>
                <div class="card-grid">
                    { for FEATURES.iter().map(|(icon, title, text)| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="technology">
                <div class="section-header">
                    <h2>{"Technology"}</h2>
                </div>
                <div class="card-grid">
                    { for TECH.iter().map(|(title, text)| html! {
                        <div class="tech-card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="how-it-works">
                <div class="section-header">
                    <h2>{"How it works"}</h2>
                </div>
                <div class="card-grid">
                    { for STEPS.iter().map(|(number, title, text)| html! {
                        <div class="step-card">
                            <div class="step-number">{*number}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <footer>
                <p>{"© QAPlay"}</p>
                <a href="#">{"Back to top"}</a>
            </footer>
        </div>
    }
}

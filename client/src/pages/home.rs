//! Home route: hero, feature cards, the blockchain scene and a call to action.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::navbar::Navbar;
use crate::components::scene_host::SceneHost;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🔒",
        "Secure Storage",
        "Your digital assets are securely stored on the blockchain with immutable proof of ownership.",
    ),
    ("🛡", "Deepfake Detection", "Advanced hash comparison technology to detect unauthorized copies and deepfakes."),
    (
        "✔",
        "Copyright Protection",
        "Timestamped proof of ownership helps resolve copyright disputes and protects your revenue.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <Navbar />
            <section class="hero">
                <div class="hero__content">
                    <h1>
                        <span class="text-gradient">"Protect"</span>
                        " Your Digital"
                        <br />
                        <span class="text-gradient">"Creations"</span>
                        " with Blockchain"
                    </h1>
                    <p>
                        "Cryptex Vault uses blockchain technology to protect your creative works from unauthorized use, "
                        "ensuring you maintain control over your intellectual property."
                    </p>
                    <A href="/upload" attr:class="crypto-button shine">
                        "Get your copyright now ›"
                    </A>
                </div>
                <div class="hero__visual">
                    <div class="glass-card hero__scene">
                        <SceneHost />
                    </div>
                    <div class="hero__badge glass-card">
                        <span class="pulse-dot"></span>
                        <span class="text-accent">"Protected by Cryptex Vault"</span>
                    </div>
                </div>
            </section>
            <section class="features">
                <h2>
                    <span class="text-gradient">"Why Choose"</span>
                    " Cryptex Vault"
                </h2>
                <div class="features__grid">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, description)| {
                            view! {
                                <div class="feature-card glass-card">
                                    <div class="feature-card__icon">{icon}</div>
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="cta glass-card">
                <h2>"Ready to secure your digital creations?"</h2>
                <p>"Join thousands of creators who trust Cryptex Vault for blockchain-powered protection."</p>
                <A href="/upload" attr:class="crypto-button">
                    "Get your copyright now ›"
                </A>
            </section>
        </div>
    }
}

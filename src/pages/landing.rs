use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::Nav;
use crate::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
    emoji: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "AI Story Writing",
        description: "Watch as your child's ideas transform into captivating stories with our AI-powered writing tool. The magical quill brings their imagination to life.",
        emoji: "✍️",
    },
    Feature {
        title: "Illustrations",
        description: "Our cheerful painter fairy helps create vibrant, playful scenes with smiling characters, making each story visually stunning and engaging.",
        emoji: "🎨",
    },
    Feature {
        title: "Customizable Characters",
        description: "Children can choose their favorite cartoon characters from our magical library of creatures, adding a personal touch to every story.",
        emoji: "👥",
    },
];

struct Testimonial {
    name: &'static str,
    date: &'static str,
    rating: u32,
    review: &'static str,
    likes: u32,
    dislikes: u32,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Emily Carter",
        date: "May 15, 2024",
        rating: 5,
        review: "My kids absolutely adore the stories! The illustrations are captivating, and the narratives are both fun and educational. It's become a nightly ritual we all look forward to.",
        likes: 12,
        dislikes: 2,
    },
    Testimonial {
        name: "David Lee",
        date: "April 22, 2024",
        rating: 5,
        review: "The app is fantastic! It's easy to use, and the variety of stories keeps my children engaged. I love that it encourages a love for reading in such a fun way.",
        likes: 15,
        dislikes: 1,
    },
    Testimonial {
        name: "Sophia Green",
        date: "March 10, 2024",
        rating: 4,
        review: "We enjoy the stories, but sometimes the app can be a bit slow. Overall, it's a great resource for kids, and the content is top-notch.",
        likes: 8,
        dislikes: 3,
    },
];

struct Step {
    title: &'static str,
    description: &'static str,
    emoji: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        title: "Step 1: Enter Your Idea",
        description: "Describe your story idea, including characters, settings, and plot points. Let your imagination run wild!",
        emoji: "💡",
    },
    Step {
        title: "Step 2: AI Writes & Illustrates",
        description: "Our AI generates a unique story and illustrations based on your input, bringing your vision to life.",
        emoji: "🤖",
    },
    Step {
        title: "Step 3: Enjoy Your Story",
        description: "Receive your personalized storybook, ready to be read and enjoyed. Watch your characters come to life!",
        emoji: "📖",
    },
];

fn stars(rating: u32) -> Html {
    html! {
        <div class="stars">
            {
                for (0..5).map(|i| {
                    let class = if i < rating { "star filled" } else { "star" };
                    html! { <span class={class}>{"★"}</span> }
                })
            }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Fade sections in the first time they enter the viewport. One observer
    // for the whole page, disconnected on unmount.
    {
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let on_intersect =
                    Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                        move |entries: js_sys::Array, _: web_sys::IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: web_sys::IntersectionObserverEntry =
                                    entry.unchecked_into();
                                if entry.is_intersecting() {
                                    let _ = entry.target().class_list().add_1("visible");
                                }
                            }
                        },
                    );

                let observer =
                    web_sys::IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())
                        .unwrap();

                let nodes = document.query_selector_all(".reveal").unwrap();
                for index in 0..nodes.length() {
                    if let Some(node) = nodes.item(index) {
                        if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                            observer.observe(&element);
                        }
                    }
                }

                move || {
                    observer.disconnect();
                    drop(on_intersect);
                }
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
                        background: #2d1b0e;
                        color: #fff;
                    }
                    .landing-page {
                        overflow-x: hidden;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .section-badge {
                        display: inline-block;
                        background: rgba(249, 115, 22, 0.15);
                        color: #fb923c;
                        padding: 0.5rem 1.5rem;
                        border-radius: 999px;
                        font-size: 0.8rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        margin-bottom: 1.5rem;
                    }
                    .section-title {
                        font-size: clamp(2.2rem, 5vw, 3.5rem);
                        font-weight: 900;
                        font-style: italic;
                        color: #fb923c;
                        margin: 0 0 1.5rem;
                        line-height: 1.15;
                    }
                    .section-lead {
                        font-size: 1.15rem;
                        color: rgba(255, 255, 255, 0.8);
                        max-width: 52rem;
                        margin: 0 auto;
                        line-height: 1.7;
                    }
                "#}
            </style>
            <Nav />
            <Hero />
            <Features />
            <Testimonials />
            <HowItWorks />
            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        padding: 7rem 1.5rem 4rem;
                        background:
                            radial-gradient(circle at 20% 20%, rgba(251, 191, 36, 0.25), transparent 45%),
                            radial-gradient(circle at 80% 70%, rgba(220, 38, 38, 0.25), transparent 50%),
                            linear-gradient(160deg, #7c2d12 0%, #431407 55%, #2d1b0e 100%);
                    }
                    .hero-character {
                        position: absolute;
                        top: 5.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        font-size: 4rem;
                        animation: float 6s ease-in-out infinite;
                    }
                    @keyframes float {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, -10px); }
                    }
                    .hero-card {
                        background: rgba(255, 255, 255, 0.94);
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        border-radius: 2rem;
                        box-shadow: 0 24px 64px rgba(0, 0, 0, 0.35);
                        padding: clamp(2rem, 6vw, 4rem);
                        max-width: 56rem;
                        text-align: center;
                    }
                    .hero-card h1 {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: clamp(2.5rem, 7vw, 4.5rem);
                        color: #1f2937;
                        margin: 0 0 1.5rem;
                        line-height: 1.1;
                    }
                    .hero-card h1 em {
                        color: #ea580c;
                    }
                    .hero-card p {
                        font-size: 1.15rem;
                        color: #4b5563;
                        line-height: 1.7;
                        max-width: 44rem;
                        margin: 0 auto 2.5rem;
                    }
                    .hero-buttons {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-primary {
                        background: #ef4444;
                        color: #fff;
                        font-size: 1.05rem;
                        font-weight: 700;
                        text-decoration: none;
                        padding: 1rem 2.5rem;
                        border-radius: 999px;
                        box-shadow: 0 8px 20px rgba(239, 68, 68, 0.4);
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .hero-primary:hover {
                        background: #dc2626;
                        transform: scale(1.05);
                    }
                    .hero-secondary {
                        background: #f3f4f6;
                        color: #1f2937;
                        font-size: 1.05rem;
                        font-weight: 700;
                        text-decoration: none;
                        padding: 1rem 2.5rem;
                        border-radius: 999px;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .hero-secondary:hover {
                        background: #e5e7eb;
                        transform: scale(1.05);
                    }
                "#}
            </style>
            <div class="hero-character">{"🧚‍♀️"}</div>
            <div class="hero-card">
                <h1>{"Once "}<em>{"Upon a Time"}</em></h1>
                <p>
                    {"Embark on a magical journey where every page brings a new adventure. \
                      Meet a brave knight, a friendly dragon, a wise owl, and a smiling \
                      princess, all ready to leap from the pages and into your heart."}
                </p>
                <div class="hero-buttons">
                    <Link<Route> to={Route::Dashboard} classes="hero-primary">
                        {"Start Creating"}
                    </Link<Route>>
                    <a href="#features" class="hero-secondary">{"Explore Features"}</a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section id="features" class="features">
            <style>
                {r#"
                    .features {
                        padding: 5rem 1.5rem;
                        background: rgba(255, 255, 255, 0.03);
                    }
                    .features-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2.5rem;
                        margin-top: 4rem;
                    }
                    .feature-card {
                        background: rgba(255, 255, 255, 0.97);
                        border-radius: 1.75rem;
                        padding: 2.5rem 2rem;
                        box-shadow: 0 16px 40px rgba(0, 0, 0, 0.3);
                        position: relative;
                    }
                    .feature-emoji {
                        width: 9rem;
                        height: 9rem;
                        margin: 0 auto 2rem;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #fed7aa, #fdba74);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 4rem;
                        box-shadow: 0 12px 28px rgba(249, 115, 22, 0.3);
                        transition: transform 0.3s ease-out;
                    }
                    .feature-card:hover .feature-emoji {
                        transform: scale(1.04);
                    }
                    .feature-number {
                        position: absolute;
                        top: -1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 3rem;
                        height: 3rem;
                        background: #f97316;
                        color: #fff;
                        border: 4px solid #fff;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 800;
                        font-size: 1.2rem;
                        box-shadow: 0 6px 16px rgba(0, 0, 0, 0.25);
                    }
                    .feature-card h3 {
                        font-size: 1.6rem;
                        font-weight: 900;
                        color: #111827;
                        margin: 0 0 1rem;
                    }
                    .feature-card p {
                        color: #4b5563;
                        line-height: 1.7;
                        margin: 0;
                    }
                "#}
            </style>
            <div class="features-inner">
                <div class="reveal">
                    <span class="section-badge">{"Features"}</span>
                    <h2 class="section-title">{"Magical Features to Spark Creativity"}</h2>
                    <p class="section-lead">
                        {"Explore the enchanting features of our storybook app, designed to \
                          spark creativity and bring stories to life."}
                    </p>
                </div>
                <div class="feature-grid">
                    {
                        for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <div class="feature-card reveal">
                                <div class="feature-number">{index + 1}</div>
                                <div class="feature-emoji">{feature.emoji}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials">
            <style>
                {r#"
                    .testimonials {
                        padding: 5rem 1.5rem;
                    }
                    .testimonials-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .testimonial-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(17rem, 1fr));
                        gap: 2.5rem;
                        margin-top: 4rem;
                        text-align: left;
                    }
                    .testimonial-card {
                        background: rgba(255, 255, 255, 0.97);
                        border-radius: 1.5rem;
                        padding: 1.75rem;
                        box-shadow: 0 16px 40px rgba(0, 0, 0, 0.3);
                    }
                    .testimonial-head {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .testimonial-avatar {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #fb923c, #facc15);
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        flex-shrink: 0;
                    }
                    .testimonial-head h3 {
                        margin: 0;
                        color: #111827;
                        font-size: 1.1rem;
                    }
                    .testimonial-head p {
                        margin: 0;
                        color: #6b7280;
                        font-size: 0.85rem;
                    }
                    .stars {
                        margin-bottom: 1rem;
                    }
                    .star {
                        color: #d1d5db;
                        font-size: 1.1rem;
                    }
                    .star.filled {
                        color: #fb923c;
                    }
                    .testimonial-card blockquote {
                        margin: 0 0 1.25rem;
                        color: #374151;
                        line-height: 1.7;
                        font-size: 0.95rem;
                    }
                    .testimonial-votes {
                        display: flex;
                        gap: 1.5rem;
                        padding-top: 1rem;
                        border-top: 1px solid #f3f4f6;
                        color: #6b7280;
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <div class="testimonials-inner">
                <div class="reveal">
                    <span class="section-badge">{"Testimonials"}</span>
                    <h2 class="section-title">{"What Our Families Say"}</h2>
                    <p class="section-lead">
                        {"Discover why families love our magical storybooks. Read testimonials \
                          from parents and children who have experienced the joy of reading \
                          with us."}
                    </p>
                </div>
                <div class="testimonial-grid">
                    {
                        for TESTIMONIALS.iter().map(|testimonial| {
                            let initials: String = testimonial
                                .name
                                .split_whitespace()
                                .filter_map(|word| word.chars().next())
                                .collect();
                            html! {
                                <div class="testimonial-card reveal">
                                    <div class="testimonial-head">
                                        <div class="testimonial-avatar">{initials}</div>
                                        <div>
                                            <h3>{testimonial.name}</h3>
                                            <p>{testimonial.date}</p>
                                        </div>
                                    </div>
                                    { stars(testimonial.rating) }
                                    <blockquote>{format!("\u{201c}{}\u{201d}", testimonial.review)}</blockquote>
                                    <div class="testimonial-votes">
                                        <span>{format!("👍 {}", testimonial.likes)}</span>
                                        <span>{format!("👎 {}", testimonial.dislikes)}</span>
                                    </div>
                                </div>
                            }
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="how-it-works">
            <style>
                {r#"
                    .how-it-works {
                        padding: 5rem 1.5rem;
                        background: rgba(255, 255, 255, 0.03);
                    }
                    .how-it-works-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .step-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2.5rem;
                        margin-top: 4rem;
                    }
                    .step-circle {
                        width: 10rem;
                        height: 10rem;
                        margin: 0 auto 2rem;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #431407, #7c2d12);
                        border: 3px solid rgba(251, 146, 60, 0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 4rem;
                        box-shadow: 0 14px 32px rgba(0, 0, 0, 0.4);
                        position: relative;
                    }
                    .step-number {
                        position: absolute;
                        bottom: -0.75rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 3rem;
                        height: 3rem;
                        background: #f97316;
                        color: #fff;
                        border: 4px solid #2d1b0e;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 800;
                        font-size: 1.2rem;
                    }
                    .step h3 {
                        font-size: 1.5rem;
                        font-weight: 900;
                        color: #fff;
                        margin: 0 0 1rem;
                    }
                    .step p {
                        color: rgba(255, 255, 255, 0.75);
                        line-height: 1.7;
                        max-width: 22rem;
                        margin: 0 auto;
                    }
                "#}
            </style>
            <div class="how-it-works-inner">
                <div class="reveal">
                    <span class="section-badge">{"How It Works"}</span>
                    <h2 class="section-title">{"Crafting Your Story in Three Simple Steps"}</h2>
                    <p class="section-lead">
                        {"Unleash your creativity and watch your ideas transform into \
                          captivating stories with our easy-to-use platform. It's as simple \
                          as one, two, three!"}
                    </p>
                </div>
                <div class="step-grid">
                    {
                        for STEPS.iter().enumerate().map(|(index, step)| html! {
                            <div class="step reveal">
                                <div class="step-circle">
                                    {step.emoji}
                                    <div class="step-number">{index + 1}</div>
                                </div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <style>
                {r#"
                    .footer {
                        position: relative;
                        padding: 6rem 1.5rem 0;
                        text-align: center;
                        background: linear-gradient(180deg, #2d1b0e 0%, #1a0f07 100%);
                    }
                    .footer h2 {
                        font-size: clamp(2.5rem, 8vw, 5rem);
                        font-weight: 800;
                        color: #fff;
                        margin: 0 0 1rem;
                        animation: rise 1s ease-out;
                    }
                    .footer .tagline {
                        font-size: 1.4rem;
                        font-weight: 300;
                        color: rgba(255, 255, 255, 0.6);
                        letter-spacing: 0.05em;
                        margin: 0 0 5rem;
                        animation: rise 1s ease-out 0.3s both;
                    }
                    @keyframes rise {
                        0% { opacity: 0; transform: translateY(30px); }
                        100% { opacity: 1; transform: translateY(0); }
                    }
                    .footer-cta {
                        display: inline-block;
                        background: linear-gradient(90deg, #f97316, #dc2626);
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.05rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        text-decoration: none;
                        padding: 1rem 2.75rem;
                        border-radius: 999px;
                        box-shadow: 0 10px 28px rgba(220, 38, 38, 0.4);
                        margin-bottom: 5rem;
                        transition: transform 0.3s ease;
                    }
                    .footer-cta:hover {
                        transform: scale(1.05);
                    }
                    .footer-bar {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 1.5rem 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.9rem;
                    }
                    .footer-links {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .footer-links a {
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .footer-links a:hover {
                        color: #fff;
                        text-decoration: underline;
                    }
                    .footer-social {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .footer-social a {
                        width: 2.25rem;
                        height: 2.25rem;
                        background: rgba(255, 255, 255, 0.15);
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-decoration: none;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .footer-social a:hover {
                        background: rgba(255, 255, 255, 0.3);
                        transform: scale(1.1);
                    }
                    .sparkle {
                        position: absolute;
                        border-radius: 50%;
                        background: #fde047;
                        opacity: 0.7;
                        animation: twinkle 2.5s ease-in-out infinite;
                    }
                    @keyframes twinkle {
                        0%, 100% { opacity: 0.2; transform: scale(0.8); }
                        50% { opacity: 0.9; transform: scale(1.1); }
                    }
                "#}
            </style>
            <div class="sparkle" style="top: 22%; left: 24%; width: 8px; height: 8px;"></div>
            <div class="sparkle" style="top: 34%; right: 30%; width: 5px; height: 5px; animation-delay: 0.8s;"></div>
            <div class="sparkle" style="top: 55%; left: 36%; width: 10px; height: 10px; animation-delay: 1.4s;"></div>
            <h2>{"Your Story Begins..."}</h2>
            <p class="tagline">{"The pages are waiting."}</p>
            <Link<Route> to={Route::Dashboard} classes="footer-cta">
                {"Create Your First Story"}
            </Link<Route>>
            <div class="footer-bar">
                <span>{"© 2024 Taleweaver. All rights reserved."}</span>
                <div class="footer-links">
                    <a href="#terms">{"Terms of Service"}</a>
                    <a href="#privacy">{"Privacy Policy"}</a>
                </div>
                <div class="footer-social">
                    <a href="#facebook" aria-label="Facebook">{"📘"}</a>
                    <a href="#twitter" aria-label="Twitter">{"🐦"}</a>
                    <a href="#instagram" aria-label="Instagram">{"📸"}</a>
                </div>
            </div>
        </footer>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;
use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlTextAreaElement, InputEvent, MouseEvent};

use crate::config;
use crate::story::api::{self, ConnectionStatus};
use crate::story::error::StoryError;
use crate::story::models::{
    toggle_character, ArtStyle, Audience, Genre, StoryRequest, StoryResult, Tone, CHARACTERS,
    SCENES,
};
use crate::Route;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    // Selection state, rebuilt into a StoryRequest on every submit.
    let story_idea = use_state(String::new);
    let genre = use_state(|| None::<Genre>);
    let tone = use_state(|| None::<Tone>);
    let art_style = use_state(|| None::<ArtStyle>);
    let audience = use_state(|| None::<Audience>);
    let characters = use_state(Vec::<String>::new);

    // Request lifecycle state. The two busy flags are independent latches.
    let generating = use_state(|| false);
    let progress = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let story = use_state(|| None::<StoryResult>);
    let generated_with = use_state(|| None::<StoryRequest>);
    let exporting = use_state(|| false);
    let connection = use_state(|| ConnectionStatus::Checking);

    // Probe the backend once per dashboard mount. No re-probing.
    {
        let connection = connection.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let reachable = api::probe_health(
                        config::get_backend_url(),
                        config::HEALTH_PROBE_TIMEOUT_MS,
                    )
                    .await;
                    connection.set(if reachable {
                        ConnectionStatus::Connected
                    } else {
                        ConnectionStatus::Disconnected
                    });
                });
                || ()
            },
            (),
        );
    }

    let on_idea_input = {
        let story_idea = story_idea.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            story_idea.set(input.value());
        })
    };

    let on_generate = {
        let story_idea = story_idea.clone();
        let genre = genre.clone();
        let tone = tone.clone();
        let art_style = art_style.clone();
        let audience = audience.clone();
        let characters = characters.clone();
        let generating = generating.clone();
        let progress = progress.clone();
        let error = error.clone();
        let story = story.clone();
        let generated_with = generated_with.clone();

        Callback::from(move |_: MouseEvent| {
            if *generating {
                return;
            }

            let request = match StoryRequest::new(
                &story_idea,
                *genre,
                *tone,
                *art_style,
                *audience,
                &characters,
            ) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.generation_message()));
                    return;
                }
            };

            generating.set(true);
            error.set(None);
            story.set(None);
            progress.set(Some("Preparing your story...".to_string()));
            log!("Sending generation request to", config::get_backend_url());

            let generating = generating.clone();
            let progress = progress.clone();
            let error = error.clone();
            let story = story.clone();
            let generated_with = generated_with.clone();
            spawn_local(async move {
                let notify = {
                    let progress = progress.clone();
                    move |message: &'static str| progress.set(Some(message.to_string()))
                };

                match api::generate_story(
                    config::get_backend_url(),
                    config::get_generation_timeout_ms(),
                    &request,
                    notify,
                )
                .await
                {
                    Ok(result) => {
                        if let Some(warning) = &result.warning {
                            log::warn!("Generation warning: {}", warning);
                        }
                        story.set(Some(result));
                        generated_with.set(Some(request));
                        progress.set(Some("Story generated successfully!".to_string()));

                        let progress = progress.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(2_000).await;
                            progress.set(None);
                        });
                    }
                    Err(e) => {
                        error.set(Some(e.generation_message()));
                        progress.set(None);
                    }
                }
                generating.set(false);
            });
        })
    };

    let on_export = {
        let story = story.clone();
        let generated_with = generated_with.clone();
        let exporting = exporting.clone();
        let error = error.clone();

        Callback::from(move |_: MouseEvent| {
            if *exporting {
                return;
            }

            let (result, request) = match ((*story).clone(), (*generated_with).clone()) {
                (Some(result), Some(request)) => (result, request),
                _ => {
                    error.set(Some(StoryError::NothingToExport.export_message()));
                    return;
                }
            };

            exporting.set(true);
            error.set(None);

            let exporting = exporting.clone();
            let error = error.clone();
            spawn_local(async move {
                match api::export_pdf(
                    config::get_backend_url(),
                    config::PDF_EXPORT_TIMEOUT_MS,
                    &result,
                    &request,
                )
                .await
                {
                    Ok(()) => log!("PDF downloaded successfully"),
                    Err(e) => error.set(Some(e.export_message())),
                }
                exporting.set(false);
            });
        })
    };

    let (dot_class, dot_label) = match *connection {
        ConnectionStatus::Connected => ("status-dot connected", "Backend Connected"),
        ConnectionStatus::Disconnected => ("status-dot disconnected", "Backend Disconnected"),
        ConnectionStatus::Checking => ("status-dot checking", "Checking Connection..."),
    };

    html! {
        <div class="dashboard">
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
                        background: linear-gradient(160deg, #7c2d12 0%, #431407 55%, #2d1b0e 100%);
                        color: #fff;
                    }
                    .dashboard {
                        min-height: 100vh;
                        padding: 2rem 1.5rem 4rem;
                    }
                    .dashboard-inner {
                        max-width: 76rem;
                        margin: 0 auto;
                    }
                    .dashboard-top {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 2.5rem;
                    }
                    .back-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: rgba(255, 255, 255, 0.9);
                        color: #ea580c;
                        font-weight: 700;
                        text-decoration: none;
                        padding: 0.6rem 1.25rem;
                        border-radius: 999px;
                        box-shadow: 0 6px 16px rgba(0, 0, 0, 0.25);
                        transition: transform 0.3s ease, color 0.3s ease;
                    }
                    .back-link:hover {
                        color: #9a3412;
                        transform: scale(1.03);
                    }
                    .connection {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.85);
                    }
                    .status-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                    }
                    .status-dot.connected { background: #22c55e; }
                    .status-dot.disconnected { background: #ef4444; }
                    .status-dot.checking {
                        background: #eab308;
                        animation: pulse 1.2s ease-in-out infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }
                    .dashboard-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .dashboard-header .badge {
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
                    .dashboard-header h1 {
                        font-size: clamp(2.5rem, 6vw, 4rem);
                        font-weight: 900;
                        font-style: italic;
                        color: #fb923c;
                        margin: 0 0 1rem;
                    }
                    .dashboard-header p {
                        font-size: 1.1rem;
                        color: rgba(255, 255, 255, 0.8);
                        max-width: 48rem;
                        margin: 0 auto;
                        line-height: 1.7;
                    }
                    .dashboard-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    @media (max-width: 900px) {
                        .dashboard-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .panel {
                        background: rgba(255, 255, 255, 0.95);
                        border-radius: 1.5rem;
                        padding: 2rem;
                        box-shadow: 0 16px 40px rgba(0, 0, 0, 0.3);
                        margin-bottom: 2rem;
                        color: #111827;
                    }
                    .panel h2 {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 1.5rem;
                        font-weight: 900;
                        margin: 0 0 1.5rem;
                    }
                    .panel h2 .panel-icon {
                        width: 3rem;
                        height: 3rem;
                        background: #ffedd5;
                        border-radius: 0.9rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                    }
                    .idea-input {
                        width: 100%;
                        box-sizing: border-box;
                        border: 1px solid #e5e7eb;
                        border-radius: 0.9rem;
                        padding: 1rem;
                        font-size: 1.05rem;
                        font-family: inherit;
                        resize: none;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                    }
                    .idea-input:focus {
                        outline: none;
                        border-color: #f97316;
                        box-shadow: 0 0 0 3px rgba(249, 115, 22, 0.2);
                    }
                    .choice-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(8.5rem, 1fr));
                        gap: 0.75rem;
                    }
                    .choice-card {
                        border: 2px solid #e5e7eb;
                        border-radius: 0.9rem;
                        background: rgba(255, 255, 255, 0.7);
                        padding: 1rem 0.75rem;
                        text-align: center;
                        cursor: pointer;
                        font-family: inherit;
                        transition: border-color 0.3s ease, background 0.3s ease, transform 0.3s ease;
                    }
                    .choice-card:hover {
                        border-color: #fdba74;
                        transform: translateY(-2px);
                    }
                    .choice-card.selected {
                        border-color: #f97316;
                        background: #fff7ed;
                        box-shadow: 0 6px 16px rgba(249, 115, 22, 0.25);
                    }
                    .choice-card .choice-icon {
                        font-size: 1.6rem;
                        margin-bottom: 0.4rem;
                    }
                    .choice-card .choice-label {
                        font-weight: 600;
                        font-size: 0.85rem;
                        color: #111827;
                    }
                    .character-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                    }
                    .character-card {
                        border: 2px solid #e5e7eb;
                        border-radius: 0.9rem;
                        background: rgba(255, 255, 255, 0.7);
                        padding: 1rem;
                        text-align: center;
                        cursor: pointer;
                        transition: border-color 0.3s ease, background 0.3s ease, transform 0.3s ease;
                    }
                    .character-card:hover {
                        border-color: #fdba74;
                        transform: translateY(-2px);
                    }
                    .character-card.selected {
                        border-color: #f97316;
                        background: #fff7ed;
                        box-shadow: 0 6px 16px rgba(249, 115, 22, 0.25);
                    }
                    .character-card .character-emoji {
                        font-size: 2rem;
                        margin-bottom: 0.4rem;
                    }
                    .character-card h3 {
                        margin: 0 0 0.25rem;
                        font-size: 0.95rem;
                        color: #111827;
                    }
                    .character-card p {
                        margin: 0;
                        font-size: 0.78rem;
                        color: #6b7280;
                    }
                    .selected-characters {
                        margin-top: 1.25rem;
                        background: #fff7ed;
                        border-radius: 0.9rem;
                        padding: 1rem;
                    }
                    .selected-characters h3 {
                        margin: 0 0 0.6rem;
                        font-size: 0.9rem;
                        color: #9a3412;
                    }
                    .chip {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.3rem;
                        background: #fed7aa;
                        color: #9a3412;
                        font-size: 0.85rem;
                        font-weight: 600;
                        padding: 0.3rem 0.8rem;
                        border-radius: 999px;
                        margin: 0 0.4rem 0.4rem 0;
                    }
                    .perk-list {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .perk {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        background: #f0fdf4;
                        border-radius: 0.9rem;
                        padding: 0.8rem 1rem;
                        color: #374151;
                        font-weight: 500;
                    }
                    .generate-section {
                        text-align: center;
                        margin-top: 1rem;
                    }
                    .error-banner {
                        background: #fef2f2;
                        border: 1px solid #fecaca;
                        color: #b91c1c;
                        border-radius: 0.9rem;
                        padding: 1rem 1.25rem;
                        max-width: 42rem;
                        margin: 0 auto 1.5rem;
                    }
                    .generate-button {
                        background: linear-gradient(90deg, #f97316, #dc2626);
                        color: #fff;
                        font-family: inherit;
                        font-size: 1.1rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        border: none;
                        border-radius: 999px;
                        padding: 1.1rem 3rem;
                        cursor: pointer;
                        box-shadow: 0 10px 28px rgba(220, 38, 38, 0.4);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .generate-button:hover:enabled {
                        transform: scale(1.04);
                        box-shadow: 0 14px 32px rgba(220, 38, 38, 0.5);
                    }
                    .generate-button:disabled {
                        background: linear-gradient(90deg, #9ca3af, #6b7280);
                        cursor: not-allowed;
                        box-shadow: none;
                    }
                    .spinner {
                        display: inline-block;
                        width: 1.1rem;
                        height: 1.1rem;
                        border: 3px solid rgba(255, 255, 255, 0.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                        vertical-align: -0.2rem;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .progress-line {
                        margin-top: 0.75rem;
                        font-size: 0.95rem;
                        color: rgba(255, 255, 255, 0.85);
                    }
                    .loading-panel {
                        text-align: center;
                        margin-top: 3rem;
                    }
                    .loading-panel .spinner {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-width: 4px;
                        margin-bottom: 1.25rem;
                    }
                    .loading-panel h3 {
                        font-size: 1.6rem;
                        margin: 0 0 0.5rem;
                    }
                    .loading-panel p {
                        color: rgba(255, 255, 255, 0.75);
                        margin: 0.25rem 0;
                    }
                    .loading-panel .loading-note {
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.55);
                    }
                    .story-result {
                        margin-top: 3rem;
                        background: rgba(255, 255, 255, 0.95);
                        border-radius: 1.5rem;
                        padding: 2.5rem;
                        box-shadow: 0 16px 40px rgba(0, 0, 0, 0.3);
                        color: #111827;
                    }
                    .result-title {
                        text-align: center;
                        font-size: 2.2rem;
                        font-weight: 900;
                        font-style: italic;
                        color: #ea580c;
                        margin: 0 0 2rem;
                    }
                    .scene-card {
                        background: linear-gradient(90deg, #fff7ed, #fefce8);
                        border: 1px solid #fed7aa;
                        border-radius: 1.25rem;
                        padding: 1.75rem;
                        margin-bottom: 1.75rem;
                    }
                    .scene-card h3 {
                        font-size: 1.5rem;
                        color: #c2410c;
                        margin: 0 0 1rem;
                    }
                    .scene-card p {
                        color: #374151;
                        font-size: 1.05rem;
                        line-height: 1.8;
                        margin: 0 0 1.5rem;
                    }
                    .scene-image {
                        display: block;
                        max-width: 28rem;
                        width: 100%;
                        margin: 0 auto;
                        border: 4px solid #fff;
                        border-radius: 1.25rem;
                        box-shadow: 0 12px 28px rgba(0, 0, 0, 0.2);
                    }
                    .image-placeholder {
                        max-width: 28rem;
                        margin: 0 auto;
                        background: #f3f4f6;
                        border: 2px dashed #d1d5db;
                        border-radius: 1.25rem;
                        padding: 2rem;
                        text-align: center;
                        color: #6b7280;
                    }
                    .image-placeholder span {
                        font-size: 2.5rem;
                        display: block;
                        margin-bottom: 0.75rem;
                    }
                    .download-section {
                        text-align: center;
                        margin-top: 2rem;
                    }
                    .download-button {
                        background: linear-gradient(90deg, #22c55e, #16a34a);
                        color: #fff;
                        font-family: inherit;
                        font-size: 1.05rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        border: none;
                        border-radius: 999px;
                        padding: 1rem 2.5rem;
                        cursor: pointer;
                        box-shadow: 0 10px 28px rgba(22, 163, 74, 0.4);
                        transition: transform 0.3s ease;
                    }
                    .download-button:hover:enabled {
                        transform: scale(1.04);
                    }
                    .download-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .download-hint {
                        color: #6b7280;
                        font-size: 0.9rem;
                        margin-top: 1rem;
                    }
                "#}
            </style>
            <div class="dashboard-inner">
                <div class="dashboard-top">
                    <Link<Route> to={Route::Home} classes="back-link">
                        {"← Back to Home"}
                    </Link<Route>>
                    <div class="connection">
                        <div class={dot_class}></div>
                        <span>{dot_label}</span>
                    </div>
                </div>

                <div class="dashboard-header">
                    <span class="badge">{"Story Creator"}</span>
                    <h1>{"Create Your Story"}</h1>
                    <p>
                        {"Bring your imagination to life! Tell us about your story idea and \
                          watch as our AI crafts a unique tale with beautiful illustrations."}
                    </p>
                </div>

                <div class="dashboard-grid">
                    <div>
                        <div class="panel">
                            <h2><span class="panel-icon">{"🖊️"}</span>{"Your Story Idea"}</h2>
                            <textarea
                                class="idea-input"
                                rows="6"
                                placeholder="Describe your story... What happens? Who are the characters? Where does it take place? Let your imagination run wild!"
                                value={(*story_idea).clone()}
                                oninput={on_idea_input}
                            />
                        </div>

                        <div class="panel">
                            <h2><span class="panel-icon">{"📚"}</span>{"Story Genre"}</h2>
                            <div class="choice-grid">
                                {
                                    for Genre::ALL.iter().map(|&option| {
                                        let selected = *genre == Some(option);
                                        let onclick = {
                                            let genre = genre.clone();
                                            Callback::from(move |_: MouseEvent| genre.set(Some(option)))
                                        };
                                        html! {
                                            <button class={classes!("choice-card", selected.then(|| "selected"))} {onclick}>
                                                <div class="choice-icon">{option.icon()}</div>
                                                <div class="choice-label">{option.label()}</div>
                                            </button>
                                        }
                                    })
                                }
                            </div>
                        </div>

                        <div class="panel">
                            <h2><span class="panel-icon">{"💛"}</span>{"Tone"}</h2>
                            <div class="choice-grid">
                                {
                                    for Tone::ALL.iter().map(|&option| {
                                        let selected = *tone == Some(option);
                                        let onclick = {
                                            let tone = tone.clone();
                                            Callback::from(move |_: MouseEvent| tone.set(Some(option)))
                                        };
                                        html! {
                                            <button class={classes!("choice-card", selected.then(|| "selected"))} {onclick}>
                                                <div class="choice-icon">{option.icon()}</div>
                                                <div class="choice-label">{option.label()}</div>
                                            </button>
                                        }
                                    })
                                }
                            </div>
                        </div>

                        <div class="panel">
                            <h2><span class="panel-icon">{"🎨"}</span>{"Art Style"}</h2>
                            <div class="choice-grid">
                                {
                                    for ArtStyle::ALL.iter().map(|&option| {
                                        let selected = *art_style == Some(option);
                                        let onclick = {
                                            let art_style = art_style.clone();
                                            Callback::from(move |_: MouseEvent| art_style.set(Some(option)))
                                        };
                                        html! {
                                            <button class={classes!("choice-card", selected.then(|| "selected"))} {onclick}>
                                                <div class="choice-icon">{option.icon()}</div>
                                                <div class="choice-label">{option.label()}</div>
                                            </button>
                                        }
                                    })
                                }
                            </div>
                        </div>
                    </div>

                    <div>
                        <div class="panel">
                            <h2><span class="panel-icon">{"👥"}</span>{"Choose Characters"}</h2>
                            <div class="character-grid">
                                {
                                    for CHARACTERS.iter().map(|character| {
                                        let name = character.name;
                                        let selected = characters.iter().any(|n| n == name);
                                        let onclick = {
                                            let characters = characters.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                characters.set(toggle_character(&characters, name));
                                            })
                                        };
                                        html! {
                                            <div class={classes!("character-card", selected.then(|| "selected"))} {onclick}>
                                                <div class="character-emoji">{character.emoji}</div>
                                                <h3>{character.name}</h3>
                                                <p>{character.description}</p>
                                            </div>
                                        }
                                    })
                                }
                            </div>
                            {
                                if !characters.is_empty() {
                                    html! {
                                        <div class="selected-characters">
                                            <h3>{"Selected Characters:"}</h3>
                                            {
                                                for characters.iter().map(|name| {
                                                    let emoji = CHARACTERS
                                                        .iter()
                                                        .find(|c| c.name == name)
                                                        .map(|c| c.emoji)
                                                        .unwrap_or("✨");
                                                    html! {
                                                        <span class="chip">{format!("{} {}", emoji, name)}</span>
                                                    }
                                                })
                                            }
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>

                        <div class="panel">
                            <h2><span class="panel-icon">{"⭐"}</span>{"Target Audience"}</h2>
                            <div class="choice-grid">
                                {
                                    for Audience::ALL.iter().map(|&option| {
                                        let selected = *audience == Some(option);
                                        let onclick = {
                                            let audience = audience.clone();
                                            Callback::from(move |_: MouseEvent| audience.set(Some(option)))
                                        };
                                        html! {
                                            <button class={classes!("choice-card", selected.then(|| "selected"))} {onclick}>
                                                <div class="choice-icon">{option.icon()}</div>
                                                <div class="choice-label">{option.label()}</div>
                                            </button>
                                        }
                                    })
                                }
                            </div>
                        </div>

                        <div class="panel">
                            <h2><span class="panel-icon">{"🪄"}</span>{"What You'll Get"}</h2>
                            <div class="perk-list">
                                <div class="perk">{"📖 AI-generated personalized story"}</div>
                                <div class="perk">{"🖼️ Beautiful custom illustrations"}</div>
                                <div class="perk">{"⬇️ Downloadable PDF storybook"}</div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="generate-section">
                    {
                        if let Some(message) = (*error).as_ref() {
                            html! { <div class="error-banner">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <button
                        class="generate-button"
                        onclick={on_generate}
                        disabled={story_idea.trim().is_empty() || *generating}
                    >
                        {
                            if *generating {
                                html! { <><span class="spinner"></span>{" Creating Your Story..."}</> }
                            } else {
                                html! { {"✨ Generate My Story"} }
                            }
                        }
                    </button>
                    {
                        if let Some(message) = (*progress).as_ref() {
                            html! { <div class="progress-line">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                {
                    if *generating {
                        html! {
                            <div class="loading-panel">
                                <span class="spinner"></span>
                                <h3>{"Creating Your Magical Story"}</h3>
                                <p>
                                    {
                                        (*progress)
                                            .clone()
                                            .unwrap_or_else(|| "Please wait while we generate your story...".to_string())
                                    }
                                </p>
                                <p class="loading-note">
                                    {"This may take up to 2 minutes. Please don't close this page."}
                                </p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(result) = (*story).as_ref() {
                        html! {
                            <div class="story-result">
                                <h2 class="result-title">{"Your Story is Ready!"}</h2>
                                {
                                    for SCENES.iter().filter_map(|scene| {
                                        result.scene_text(scene).map(|text| html! {
                                            <div class="scene-card">
                                                <h3>{*scene}</h3>
                                                <p>{text}</p>
                                                {
                                                    match result.image_path(scene) {
                                                        Some(path) => html! {
                                                            <img
                                                                class="scene-image"
                                                                src={format!("{}{}", config::get_backend_url(), path)}
                                                                alt={format!("{} illustration", scene)}
                                                            />
                                                        },
                                                        None => html! {
                                                            <div class="image-placeholder">
                                                                <span>{"🖼️"}</span>
                                                                <p>{"Illustration for this scene is being generated..."}</p>
                                                            </div>
                                                        },
                                                    }
                                                }
                                            </div>
                                        })
                                    })
                                }
                                <div class="download-section">
                                    <button
                                        class="download-button"
                                        onclick={on_export.clone()}
                                        disabled={*exporting}
                                    >
                                        {
                                            if *exporting {
                                                html! { <><span class="spinner"></span>{" Creating PDF..."}</> }
                                            } else {
                                                html! { {"⬇ Download Your Storybook"} }
                                            }
                                        }
                                    </button>
                                    <p class="download-hint">
                                        {"Download your complete story as a beautiful PDF book with all illustrations"}
                                    </p>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

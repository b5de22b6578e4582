use yew::prelude::*;

use crate::config;

/// Static landing target for the sign-in affordances. There is no account
/// system behind it; it only points visitors at the project's GitHub.
#[function_component(SignIn)]
pub fn signin() -> Html {
    let signin_css = r#"
        .signin-page {
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 8rem 1rem 4rem;
        }
        .signin-card {
            background: rgba(255, 255, 255, 0.05);
            backdrop-filter: blur(16px);
            -webkit-backdrop-filter: blur(16px);
            border: 1px solid #1f2937;
            border-radius: 1rem;
            padding: 3rem 2.5rem;
            max-width: 26rem;
            width: 100%;
            text-align: center;
        }
        .signin-card h1 {
            font-size: 2rem;
            margin: 0 0 0.75rem;
            background: linear-gradient(45deg, #3b82f6, #9333ea);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .signin-card p {
            color: #9ca3af;
            margin-bottom: 2rem;
        }
        .signin-github {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            background: #2563eb;
            color: #ffffff;
            padding: 0.75rem 2rem;
            border-radius: 9999px;
            font-weight: 600;
            transition: background 0.2s ease;
        }
        .signin-github:hover {
            background: #1d4ed8;
        }
    "#;

    html! {
        <div class="signin-page">
            <style>{signin_css}</style>
            <div class="signin-card">
                <h1>{"Welcome back"}</h1>
                <p>{"OpenSox accounts live where the code lives."}</p>
                <a
                    class="signin-github"
                    href={config::GITHUB_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <i class="fab fa-github"></i>
                    {"Continue with GitHub"}
                </a>
            </div>
        </div>
    }
}

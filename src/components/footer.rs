use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_css = r#"
        .site-footer {
            border-top: 1px solid #1f2937;
            padding: 3rem 1rem 2rem;
            background: rgba(0, 0, 0, 0.8);
        }
        .footer-inner {
            max-width: 1200px;
            margin: 0 auto;
            display: flex;
            flex-wrap: wrap;
            gap: 3rem;
            justify-content: space-between;
        }
        .footer-brand {
            font-size: 1.5rem;
            font-weight: 700;
            background: linear-gradient(45deg, #3b82f6, #9333ea);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .footer-tagline {
            color: #6b7280;
            margin-top: 0.5rem;
            max-width: 18rem;
        }
        .footer-col h4 {
            color: #e5e7eb;
            margin: 0 0 1rem;
            font-size: 1rem;
        }
        .footer-col a {
            display: block;
            color: #9ca3af;
            margin-bottom: 0.5rem;
            transition: color 0.2s ease;
        }
        .footer-col a:hover {
            color: #ffffff;
        }
        .footer-copy {
            max-width: 1200px;
            margin: 2rem auto 0;
            padding-top: 1.5rem;
            border-top: 1px solid #1f2937;
            color: #6b7280;
            font-size: 0.9rem;
            text-align: center;
        }
    "#;

    html! {
        <footer class="site-footer">
            <style>{footer_css}</style>
            <div class="footer-inner">
                <div>
                    <div class="footer-brand">{"OpenSox"}</div>
                    <p class="footer-tagline">
                        {"The future of open-source collaboration and innovation."}
                    </p>
                </div>
                <div class="footer-col">
                    <h4>{"Product"}</h4>
                    <a href="#features">{"Features"}</a>
                    <a href="#videos">{"Videos"}</a>
                    <a href="#blog">{"Blog"}</a>
                </div>
                <div class="footer-col">
                    <h4>{"Community"}</h4>
                    <a href={config::GITHUB_URL} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    <a href={config::DISCORD_URL} target="_blank" rel="noopener noreferrer">{"Discord"}</a>
                    <a href={config::TWITTER_URL} target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                </div>
            </div>
            <div class="footer-copy">
                {"© 2025 OpenSox. Built in the open."}
            </div>
        </footer>
    }
}

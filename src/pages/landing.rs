use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

struct Highlight {
    title: &'static str,
    description: &'static str,
}

struct Video {
    title: &'static str,
    description: &'static str,
    thumbnail: &'static str,
    views: &'static str,
    date: &'static str,
}

struct CommunityMember {
    name: &'static str,
    role: &'static str,
    avatar: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Open Source",
        description: "Access and contribute to a vast collection of open-source projects.",
        icon: "fas fa-code",
    },
    Feature {
        title: "Collaboration",
        description: "Work together with developers from around the world.",
        icon: "fas fa-people-group",
    },
    Feature {
        title: "Innovation",
        description: "Be part of the next generation of software development.",
        icon: "fas fa-bolt",
    },
];

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Easy Setup",
        description: "Get started in minutes with our intuitive interface",
    },
    Highlight {
        title: "Powerful Features",
        description: "Access all the tools you need to create amazing content",
    },
    Highlight {
        title: "Community Support",
        description: "Join our growing community of content creators",
    },
];

const VIDEOS: &[Video] = &[
    Video {
        title: "Getting Started with Open Source",
        description: "Learn the basics of contributing to open source projects",
        thumbnail: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?auto=format&fit=crop&w=1470&q=80",
        views: "1.2K",
        date: "2 days ago",
    },
    Video {
        title: "Advanced Git Workflows",
        description: "Master Git workflows for efficient collaboration",
        thumbnail: "https://images.unsplash.com/photo-1618401471353-b98afee0b2eb?auto=format&fit=crop&w=1488&q=80",
        views: "3.5K",
        date: "1 week ago",
    },
    Video {
        title: "Building Your First Project",
        description: "Step-by-step guide to creating your first open source project",
        thumbnail: "https://images.unsplash.com/photo-1510519138101-570d1dca3d66?auto=format&fit=crop&w=1470&q=80",
        views: "2.8K",
        date: "2 weeks ago",
    },
];

const COMMUNITY: &[CommunityMember] = &[
    CommunityMember {
        name: "John Doe",
        role: "Full Stack Developer",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&w=1470&q=80",
    },
    CommunityMember {
        name: "Jane Smith",
        role: "UI/UX Designer",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=1470&q=80",
    },
    CommunityMember {
        name: "Mike Johnson",
        role: "DevOps Engineer",
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&w=1470&q=80",
    },
    CommunityMember {
        name: "Sarah Wilson",
        role: "Backend Developer",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=1470&q=80",
    },
];

fn render_feature(feature: &Feature) -> Html {
    html! {
        <div class="feature-card reveal">
            <div class="feature-icon">
                <i class={feature.icon}></i>
            </div>
            <h3>{ feature.title }</h3>
            <p>{ feature.description }</p>
        </div>
    }
}

fn render_highlight(highlight: &Highlight) -> Html {
    html! {
        <div class="highlight-card reveal">
            <h3>{ highlight.title }</h3>
            <p>{ highlight.description }</p>
        </div>
    }
}

fn render_video(video: &Video) -> Html {
    html! {
        <div class="video-card reveal">
            <div class="video-thumb">
                <img src={video.thumbnail} alt={video.title} loading="lazy" />
                <div class="video-play">
                    <i class="fas fa-circle-play"></i>
                </div>
            </div>
            <div class="video-body">
                <h3>{ video.title }</h3>
                <p>{ video.description }</p>
                <div class="video-meta">
                    <span>{ format!("{} views", video.views) }</span>
                    <span class="video-meta-dot">{"•"}</span>
                    <span>{ video.date }</span>
                </div>
            </div>
        </div>
    }
}

fn render_member(member: &CommunityMember) -> Html {
    html! {
        <div class="member-card reveal">
            <div class="member-avatar">
                <img src={member.avatar} alt={member.name} loading="lazy" />
            </div>
            <h3>{ member.name }</h3>
            <p>{ member.role }</p>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let landing_css = r#"
        .landing-page {
            overflow-x: hidden;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 1rem;
        }
        .reveal {
            animation: reveal-up 0.8s ease-out both;
        }
        @keyframes reveal-up {
            from {
                opacity: 0;
                transform: translateY(20px);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }

        .hero {
            position: relative;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            text-align: center;
        }
        .hero h1 {
            font-size: 3.5rem;
            font-weight: 700;
            margin: 0 0 1.5rem;
            background: linear-gradient(to right, #3b82f6, #9333ea);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .hero-subtitle {
            font-size: 1.3rem;
            color: #d1d5db;
            max-width: 42rem;
            margin: 0 auto 2rem;
        }
        .hero-cta {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            background: #2563eb;
            color: #ffffff;
            padding: 0.75rem 2rem;
            border-radius: 9999px;
            font-size: 1.1rem;
            font-weight: 600;
            transition: background 0.2s ease, transform 0.2s ease;
        }
        .hero-cta:hover {
            background: #1d4ed8;
            transform: scale(1.05);
        }

        .showcase {
            padding: 5rem 0;
            position: relative;
            background: linear-gradient(to bottom, #000000, rgba(88, 28, 135, 0.2), #000000);
        }
        .section-heading {
            text-align: center;
            margin-bottom: 4rem;
        }
        .section-heading h2 {
            font-size: 2.5rem;
            margin: 0 0 1rem;
            background: linear-gradient(to right, #3b82f6, #9333ea);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .section-heading p {
            font-size: 1.2rem;
            color: #d1d5db;
            max-width: 42rem;
            margin: 0 auto;
        }
        .player-frame {
            position: relative;
            max-width: 960px;
            margin: 0 auto;
            border-radius: 1rem;
            overflow: hidden;
            box-shadow: 0 25px 50px -12px rgba(168, 85, 247, 0.2);
        }
        .player-frame iframe {
            display: block;
            width: 100%;
            aspect-ratio: 16 / 9;
            border: none;
            background: #111827;
        }
        .highlight-grid {
            display: grid;
            grid-template-columns: 1fr;
            gap: 2rem;
            max-width: 960px;
            margin: 4rem auto 0;
        }
        .highlight-card {
            background: rgba(255, 255, 255, 0.05);
            backdrop-filter: blur(16px);
            border-radius: 0.75rem;
            padding: 1.5rem;
            transition: background 0.2s ease;
        }
        .highlight-card:hover {
            background: rgba(255, 255, 255, 0.1);
        }
        .highlight-card h3 {
            color: #60a5fa;
            margin: 0 0 0.75rem;
        }
        .highlight-card p {
            color: #d1d5db;
            margin: 0;
        }

        .features-section {
            padding: 5rem 0;
            background: rgba(0, 0, 0, 0.5);
        }
        .features-section h2,
        .videos-section h2,
        .community-section h2 {
            font-size: 2.25rem;
            text-align: center;
            margin: 0 0 4rem;
        }
        .feature-grid {
            display: grid;
            grid-template-columns: 1fr;
            gap: 2rem;
        }
        .feature-card {
            background: rgba(31, 41, 55, 0.5);
            backdrop-filter: blur(4px);
            border-radius: 0.75rem;
            padding: 1.5rem;
        }
        .feature-icon {
            width: 3rem;
            height: 3rem;
            background: #2563eb;
            border-radius: 0.5rem;
            display: flex;
            align-items: center;
            justify-content: center;
            margin-bottom: 1rem;
            font-size: 1.25rem;
        }
        .feature-card h3 {
            margin: 0 0 0.5rem;
        }
        .feature-card p {
            color: #9ca3af;
            margin: 0;
        }

        .videos-section {
            padding: 5rem 0;
        }
        .video-grid {
            display: grid;
            grid-template-columns: 1fr;
            gap: 2rem;
        }
        .video-card {
            background: rgba(31, 41, 55, 0.5);
            backdrop-filter: blur(4px);
            border-radius: 0.75rem;
            overflow: hidden;
        }
        .video-thumb {
            position: relative;
            aspect-ratio: 16 / 9;
        }
        .video-thumb img {
            width: 100%;
            height: 100%;
            object-fit: cover;
        }
        .video-play {
            position: absolute;
            inset: 0;
            background: rgba(0, 0, 0, 0.5);
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 4rem;
            opacity: 0;
            transition: opacity 0.2s ease;
        }
        .video-thumb:hover .video-play {
            opacity: 1;
        }
        .video-body {
            padding: 1.5rem;
        }
        .video-body h3 {
            margin: 0 0 0.5rem;
        }
        .video-body p {
            color: #9ca3af;
            margin: 0 0 1rem;
        }
        .video-meta {
            display: flex;
            align-items: center;
            color: #6b7280;
            font-size: 0.9rem;
        }
        .video-meta-dot {
            margin: 0 0.5rem;
        }

        .community-section {
            padding: 5rem 0;
            background: rgba(0, 0, 0, 0.5);
        }
        .member-grid {
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 2rem;
        }
        .member-card {
            text-align: center;
        }
        .member-avatar {
            width: 6rem;
            height: 6rem;
            margin: 0 auto 1rem;
            border-radius: 9999px;
            overflow: hidden;
            background: #1f2937;
        }
        .member-avatar img {
            width: 100%;
            height: 100%;
            object-fit: cover;
        }
        .member-card h3 {
            margin: 0 0 0.25rem;
            font-size: 1.1rem;
        }
        .member-card p {
            color: #9ca3af;
            font-size: 0.9rem;
            margin: 0;
        }

        .count-section {
            padding: 5rem 0;
            background: rgba(0, 0, 0, 0.8);
            text-align: center;
        }
        .count-section h2 {
            font-size: 4.5rem;
            margin: 0 0 1rem;
            background: linear-gradient(to right, #4ade80, #14b8a6);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .count-section p {
            font-size: 1.5rem;
            font-weight: 600;
            color: #d1d5db;
            margin: 0;
        }

        .cta-section {
            padding: 5rem 0;
            text-align: center;
        }
        .cta-section h2 {
            font-size: 2.25rem;
            margin: 0 0 1.5rem;
        }
        .cta-section p {
            font-size: 1.2rem;
            color: #d1d5db;
            max-width: 42rem;
            margin: 0 auto 2rem;
        }
        .cta-button {
            display: inline-block;
            background: #9333ea;
            color: #ffffff;
            padding: 0.75rem 2rem;
            border-radius: 9999px;
            font-size: 1.1rem;
            font-weight: 600;
            transition: background 0.2s ease, transform 0.2s ease;
        }
        .cta-button:hover {
            background: #7e22ce;
            transform: scale(1.05);
        }

        @media (min-width: 768px) {
            .hero h1 {
                font-size: 4.5rem;
            }
            .hero-subtitle {
                font-size: 1.5rem;
            }
            .highlight-grid,
            .feature-grid,
            .video-grid {
                grid-template-columns: repeat(3, 1fr);
            }
            .member-grid {
                grid-template-columns: repeat(4, 1fr);
            }
            .count-section h2 {
                font-size: 6rem;
            }
        }
    "#;

    html! {
        <div class="landing-page">
            <style>{landing_css}</style>

            <section class="hero">
                <div class="container reveal">
                    <h1>{"OpenSox"}</h1>
                    <p class="hero-subtitle">
                        {"The future of open-source collaboration and innovation"}
                    </p>
                    <Link<Route> to={Route::SignIn} classes="hero-cta">
                        {"Get Started"}
                        <i class="fas fa-arrow-right"></i>
                    </Link<Route>>
                </div>
            </section>

            <section class="showcase">
                <div class="container">
                    <div class="section-heading reveal">
                        <h2>{"See OpenSox in Action"}</h2>
                        <p>{"Watch how easy it is to get started with OpenSox and create amazing content"}</p>
                    </div>
                    <div class="player-frame reveal">
                        <iframe
                            src={config::TUTORIAL_EMBED_URL}
                            title="OpenSox Tutorial"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen=true
                        ></iframe>
                    </div>
                    <div class="highlight-grid">
                        { for HIGHLIGHTS.iter().map(render_highlight) }
                    </div>
                </div>
            </section>

            <section id="features" class="features-section">
                <div class="container">
                    <h2>{"Why Choose OpenSox?"}</h2>
                    <div class="feature-grid">
                        { for FEATURES.iter().map(render_feature) }
                    </div>
                </div>
            </section>

            <section id="videos" class="videos-section">
                <div class="container">
                    <h2>{"Latest Videos"}</h2>
                    <div class="video-grid">
                        { for VIDEOS.iter().map(render_video) }
                    </div>
                </div>
            </section>

            <section id="users" class="community-section">
                <div class="container">
                    <h2>{"Our Community"}</h2>
                    <div class="member-grid">
                        { for COMMUNITY.iter().map(render_member) }
                    </div>
                </div>
            </section>

            <section class="count-section">
                <div class="container reveal">
                    <h2>{"18,079+"}</h2>
                    <p>{"Developers are already part of our community"}</p>
                </div>
            </section>

            <section id="community" class="cta-section">
                <div class="container reveal">
                    <h2>{"Ready to Get Started?"}</h2>
                    <p>{"Join thousands of developers and start contributing to open-source projects today."}</p>
                    <a
                        class="cta-button"
                        href={config::GITHUB_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Join Now"}
                    </a>
                </div>
            </section>
        </div>
    }
}

use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Global stylesheet. Static layout and colors live here; per-frame values
/// (indicator opacity, scale, offset) are written as inline styles by the
/// scroll callbacks.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            * {
                margin: 0;
                padding: 0;
                box-sizing: border-box;
            }

            html {
                scroll-behavior: smooth;
            }

            body {
                background: #05070f;
                color: #ffffff;
                font-family: 'Helvetica Neue', Arial, sans-serif;
                line-height: 1.5;
            }

            ul {
                list-style: none;
            }

            a {
                color: inherit;
                text-decoration: none;
            }

            button {
                font: inherit;
                cursor: pointer;
            }

            .container {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 1.5rem;
            }

            .top-nav {
                position: fixed;
                top: 0;
                left: 0;
                width: 100%;
                z-index: 20;
                padding: 1rem 0;
                transition: background 0.3s ease, box-shadow 0.3s ease;
            }

            .top-nav.scrolled {
                background: rgba(5, 7, 15, 0.92);
                box-shadow: 0 2px 16px rgba(0, 0, 0, 0.4);
            }

            .nav-content {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 1.5rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }

            .nav-logo {
                font-size: 1.25rem;
                font-weight: 700;
                letter-spacing: 0.2em;
            }

            .nav-right {
                display: flex;
                align-items: center;
                gap: 2rem;
            }

            .nav-link {
                color: rgba(255, 255, 255, 0.7);
                font-size: 0.9rem;
                letter-spacing: 0.08em;
                transition: color 0.2s ease;
            }

            .nav-link:hover {
                color: #4effed;
            }

            .burger-menu {
                display: none;
                flex-direction: column;
                gap: 5px;
                background: none;
                border: none;
            }

            .burger-menu span {
                width: 22px;
                height: 2px;
                background: #ffffff;
            }

            .hero {
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                position: relative;
                overflow: hidden;
                text-align: center;
            }

            .hero-background {
                position: absolute;
                inset: 0;
                background: radial-gradient(circle at 30% 30%, rgba(159, 111, 255, 0.25), transparent 60%),
                    radial-gradient(circle at 70% 70%, rgba(78, 255, 237, 0.15), transparent 60%);
            }

            .hero-content {
                position: relative;
                z-index: 1;
                padding: 0 1.5rem;
            }

            .hero-title {
                font-size: clamp(3rem, 9vw, 6rem);
                letter-spacing: 0.35em;
                background: linear-gradient(90deg, #9f6fff, #4effed);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            .hero-subtitle {
                margin: 1.5rem auto 2.5rem;
                max-width: 32rem;
                color: rgba(255, 255, 255, 0.7);
            }

            .hero-cta {
                padding: 0.9rem 2.4rem;
                border: 1px solid #4effed;
                border-radius: 999px;
                background: rgba(78, 255, 237, 0.08);
                color: #4effed;
                letter-spacing: 0.1em;
                transition: background 0.3s ease, transform 0.3s ease;
            }

            .hero-cta:hover {
                background: rgba(78, 255, 237, 0.2);
                transform: translateY(-2px);
            }

            .hero-scroll-hint {
                margin-top: 4rem;
                font-size: 2rem;
                color: rgba(255, 255, 255, 0.5);
                animation: hint-bounce 2s ease-in-out infinite;
            }

            @keyframes hint-bounce {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(10px); }
            }

            .reveal {
                opacity: 0;
                transform: translateY(24px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }

            .reveal-item {
                opacity: 0;
                transform: translateY(16px);
                transition: opacity 0.5s ease-out, transform 0.5s ease-out;
            }

            .reveal.visible .reveal-item {
                opacity: 1;
                transform: translateY(0);
            }

            .stats-section {
                padding: 5rem 0;
                background: #070a14;
            }

            .stats-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                gap: 1.5rem;
            }

            .stat-card {
                background: #0a0d16;
                border: 1px solid #1a1a1a;
                border-radius: 12px;
                padding: 1.5rem;
                transition: border-color 0.3s ease;
            }

            .stat-card:hover {
                border-color: rgba(159, 111, 255, 0.3);
            }

            .stat-icon {
                font-size: 1.5rem;
                margin-bottom: 1rem;
            }

            .stat-value {
                font-size: 2rem;
                color: #9f6fff;
                margin-bottom: 0.5rem;
            }

            .stat-label {
                color: rgba(255, 255, 255, 0.8);
                font-weight: 500;
            }

            .stat-subtext {
                color: rgba(255, 255, 255, 0.6);
                font-size: 0.875rem;
            }

            .testimonial-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                gap: 1.5rem;
                margin-top: 4rem;
            }

            .testimonial-card {
                background: #1a1f36;
                border-radius: 12px;
                padding: 1.5rem;
            }

            .testimonial-header {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                margin-bottom: 1.25rem;
            }

            .testimonial-avatar {
                width: 48px;
                height: 48px;
                border-radius: 50%;
                object-fit: cover;
                border: 2px solid rgba(159, 111, 255, 0.2);
            }

            .testimonial-name {
                font-weight: 500;
            }

            .testimonial-title {
                color: rgba(255, 255, 255, 0.6);
                font-size: 0.875rem;
            }

            .testimonial-quote {
                color: rgba(255, 255, 255, 0.8);
            }

            .path-section {
                padding: 8rem 0;
                position: relative;
            }

            .path-header {
                text-align: center;
                margin-bottom: 5rem;
            }

            .path-eyebrow {
                font-size: 0.875rem;
                letter-spacing: 0.3em;
                color: #ffd75e;
                margin-bottom: 1rem;
            }

            .path-title {
                font-size: clamp(2.5rem, 6vw, 4.5rem);
                line-height: 1.1;
            }

            .path-grid {
                display: grid;
                grid-template-columns: 1fr 80px 1fr;
                gap: 2rem;
                align-items: start;
            }

            .path-column {
                display: flex;
                flex-direction: column;
                gap: 2rem;
            }

            .path-rail {
                position: relative;
                align-self: stretch;
                display: flex;
                justify-content: center;
            }

            .path-line {
                position: relative;
                width: 2px;
                height: 100%;
                min-height: 400px;
                background: rgba(255, 255, 255, 0.1);
            }

            .path-line-fill {
                position: absolute;
                top: 0;
                left: 0;
                width: 100%;
                height: 0;
                background: linear-gradient(180deg, #9f6fff, #4effed);
                opacity: 0;
            }

            .path-arrow {
                position: absolute;
                top: 0;
                left: 50%;
                width: 16px;
                height: 16px;
                border-radius: 50%;
                background: #4effed;
                box-shadow: 0 0 16px rgba(78, 255, 237, 0.8);
                opacity: 0;
                transform: translateX(-50%) scale(0.8);
            }

            .path-figure img {
                width: 100%;
                border-radius: 12px;
                display: block;
            }

            .check-row {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                margin-top: 1rem;
            }

            .check-mark {
                color: #ffd75e;
            }

            .check-row p {
                color: rgba(255, 255, 255, 0.6);
            }

            .tech-section {
                padding: 8rem 0;
                background: radial-gradient(circle at center, rgba(159, 111, 255, 0.15) 0%, transparent 70%);
            }

            .tech-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 3rem;
                align-items: center;
            }

            .tech-eyebrow {
                font-size: 1rem;
                letter-spacing: 0.2em;
                color: #9f6fff;
                margin-bottom: 1rem;
            }

            .tech-title {
                font-size: clamp(2.5rem, 5vw, 3.75rem);
                margin-bottom: 2.5rem;
                background: linear-gradient(90deg, #9f6fff, #4effed, #5e9bff);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            .tech-spec-row {
                display: flex;
                align-items: flex-start;
                gap: 1rem;
                padding: 1.5rem;
                border-radius: 12px;
                border: 1px solid rgba(255, 255, 255, 0.1);
                background: rgba(26, 31, 54, 0.4);
                margin-bottom: 1.25rem;
                transition: border-color 0.3s ease;
            }

            .tech-spec-row:hover {
                border-color: rgba(159, 111, 255, 0.3);
            }

            .tech-spec-icon {
                font-size: 1.5rem;
            }

            .tech-spec-row p {
                color: rgba(255, 255, 255, 0.6);
            }

            .tech-display {
                display: flex;
                justify-content: center;
            }

            .watch-dial {
                position: relative;
                width: min(360px, 80vw);
                aspect-ratio: 1;
                border: 1px solid rgba(255, 255, 255, 0.2);
                border-radius: 50%;
                background: radial-gradient(circle, rgba(26, 31, 54, 0.4), rgba(10, 13, 22, 0.8));
            }

            .dial-tick {
                position: absolute;
                inset: 0;
            }

            .dial-tick span {
                position: absolute;
                top: 8px;
                left: 50%;
                width: 2px;
                height: 14px;
                background: linear-gradient(180deg, rgba(159, 111, 255, 0.5), rgba(78, 255, 237, 0.5));
            }

            .dial-hand {
                position: absolute;
                bottom: 50%;
                left: 50%;
                width: 2px;
                height: 35%;
                background: linear-gradient(0deg, #9f6fff, #4effed);
                transform-origin: bottom center;
                animation: dial-sweep 60s linear infinite;
            }

            .dial-hub {
                position: absolute;
                top: 50%;
                left: 50%;
                width: 14px;
                height: 14px;
                border-radius: 50%;
                background: #4effed;
                transform: translate(-50%, -50%);
                box-shadow: 0 0 18px rgba(78, 255, 237, 0.6);
            }

            @keyframes dial-sweep {
                from { transform: rotate(0deg); }
                to { transform: rotate(360deg); }
            }

            .features-section {
                padding: 5rem 0;
            }

            .section-header {
                text-align: center;
                margin-bottom: 4rem;
            }

            .section-title {
                font-size: 2.25rem;
                letter-spacing: 0.1em;
                background: linear-gradient(90deg, #9f6fff, #4effed);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            .section-lede {
                margin: 1.5rem auto 0;
                max-width: 40rem;
                color: rgba(255, 255, 255, 0.6);
            }

            .features-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                gap: 2rem;
            }

            .feature-card {
                background: rgba(10, 13, 22, 0.8);
                border: 1px solid rgba(255, 255, 255, 0.08);
                border-radius: 12px;
                padding: 2rem;
                transition: transform 0.3s ease, border-color 0.3s ease;
            }

            .feature-card:hover {
                transform: translateY(-4px);
                border-color: rgba(159, 111, 255, 0.3);
            }

            .feature-icon {
                font-size: 2rem;
                margin-bottom: 1rem;
            }

            .feature-title {
                margin-bottom: 1rem;
                letter-spacing: 0.05em;
            }

            .feature-card p {
                color: rgba(255, 255, 255, 0.6);
            }

            .collection-section {
                padding: 5rem 0;
                position: relative;
            }

            .collection-title {
                font-size: 2.25rem;
                text-align: center;
                margin-bottom: 3rem;
                letter-spacing: 0.1em;
                background: linear-gradient(90deg, #9f6fff, #4effed);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            .watch-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                gap: 2rem;
                justify-items: center;
            }

            .watch-card {
                width: 100%;
                max-width: 300px;
                transition: transform 0.3s ease;
            }

            .watch-card:hover {
                transform: translateY(-10px);
            }

            .watch-frame {
                border: 1px solid rgba(78, 255, 237, 0.2);
                border-radius: 12px;
                overflow: hidden;
                background: rgba(10, 13, 22, 0.9);
            }

            .watch-image-container {
                overflow: hidden;
            }

            .watch-image {
                width: 100%;
                aspect-ratio: 1;
                object-fit: cover;
                display: block;
                transition: transform 0.3s ease;
            }

            .watch-card:hover .watch-image {
                transform: scale(1.05);
            }

            .watch-info {
                padding: 1rem;
            }

            .watch-info-row {
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 0.5rem;
            }

            .watch-name {
                font-size: 0.9rem;
                font-weight: 500;
            }

            .watch-price {
                color: #4effed;
                font-size: 0.9rem;
                font-weight: 600;
            }

            .watch-description {
                margin: 0.5rem 0 1rem;
                color: rgba(255, 255, 255, 0.6);
                font-size: 0.75rem;
            }

            .stock-marker {
                color: rgba(255, 255, 255, 0.6);
                font-size: 0.7rem;
            }

            .stock-marker::before {
                content: '';
                display: inline-block;
                width: 8px;
                height: 8px;
                margin-right: 6px;
                border-radius: 50%;
                background: #4effed;
            }

            .details-button {
                font-size: 0.7rem;
                padding: 0.3rem 0.9rem;
                border: none;
                border-radius: 999px;
                background: rgba(78, 255, 237, 0.1);
                color: #4effed;
                transition: background 0.2s ease;
            }

            .details-button:hover {
                background: rgba(78, 255, 237, 0.2);
            }

            .details-page {
                min-height: 100vh;
                padding: 8rem 0 5rem;
            }

            .back-link {
                display: inline-block;
                margin-bottom: 2rem;
                color: rgba(255, 255, 255, 0.6);
                transition: color 0.2s ease;
            }

            .back-link:hover {
                color: #4effed;
            }

            .details-panel {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 3rem;
                align-items: center;
            }

            .details-image img {
                width: 100%;
                border-radius: 12px;
                display: block;
            }

            .details-name {
                font-size: 2.5rem;
                margin-bottom: 1rem;
            }

            .details-price {
                font-size: 1.5rem;
                color: #4effed;
                margin-bottom: 1.5rem;
            }

            .details-description {
                color: rgba(255, 255, 255, 0.7);
                margin-bottom: 1.5rem;
            }

            .related-section {
                margin-top: 6rem;
            }

            .not-found {
                text-align: center;
                padding-top: 10rem;
            }

            .not-found h2 {
                margin-bottom: 1rem;
            }

            .not-found p {
                color: rgba(255, 255, 255, 0.6);
                margin-bottom: 2rem;
            }

            .footer {
                padding: 3rem 0;
                border-top: 1px solid rgba(255, 255, 255, 0.1);
            }

            .footer-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                gap: 2rem;
            }

            .footer-brand {
                font-size: 1.25rem;
                letter-spacing: 0.2em;
                margin-bottom: 1rem;
            }

            .footer-heading {
                margin-bottom: 1rem;
            }

            .footer li,
            .footer p {
                color: rgba(255, 255, 255, 0.6);
                margin-bottom: 0.5rem;
            }

            @media (max-width: 768px) {
                .burger-menu {
                    display: flex;
                }

                .nav-right {
                    position: absolute;
                    top: 100%;
                    right: 0;
                    flex-direction: column;
                    align-items: flex-end;
                    gap: 1rem;
                    padding: 1.5rem;
                    width: 100%;
                    background: rgba(5, 7, 15, 0.97);
                    display: none;
                }

                .nav-right.mobile-menu-open {
                    display: flex;
                }

                .path-grid {
                    grid-template-columns: 1fr;
                }

                .path-rail {
                    display: none;
                }

                .tech-grid {
                    grid-template-columns: 1fr;
                }

                .details-panel {
                    grid-template-columns: 1fr;
                }
            }
        "#)} />
    }
}
